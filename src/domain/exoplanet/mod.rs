//! Exoplanet module - the planet side of a scoring request.
//!
//! Pure data plus derived-property calculations. Every calculation is
//! total over optional inputs and returns `None` instead of failing.

mod entity;
mod orbital;
mod physical;
mod planet_type;

pub use entity::{ExoplanetEntity, LIGHT_YEARS_PER_PARSEC};
pub use orbital::OrbitalParameters;
pub use physical::{PhysicalParameters, EARTH_DENSITY_G_CM3, EARTH_ESCAPE_VELOCITY_KM_S};
pub use planet_type::PlanetType;
