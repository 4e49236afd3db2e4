//! Star module - the host-star side of a scoring request.
//!
//! Spectral and luminosity classification, luminosity estimation and
//! habitable zone geometry.

mod entity;
mod habitable_zone;
mod spectral;

pub use entity::StarEntity;
pub use habitable_zone::{
    effective_temperature_or_solar, HabitableZone, HzPosition, HZ_CALIBRATED_TEMPERATURE_K,
    SOLAR_TEMPERATURE_K,
};
pub use spectral::{LuminosityClass, SpectralClass};
