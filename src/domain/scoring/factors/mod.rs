//! Built-in scoring factors.
//!
//! Thirteen factors grouped by category:
//!
//! - `stellar` - spectral type, luminosity class, age, habitable zone position
//! - `planetary` - radius, mass, density, equilibrium temperature, surface gravity
//! - `orbital` - eccentricity, tidal locking
//! - `derived` - atmosphere retention, magnetic field potential

mod derived;
mod orbital;
mod planetary;
mod stellar;

use std::sync::Arc;

use super::factor::ScoringFactor;

pub use derived::{AtmosphereRetentionFactor, MagneticFieldPotentialFactor};
pub use orbital::{flux_variation, OrbitalEccentricityFactor, TidalLockingFactor};
pub use planetary::{
    EquilibriumTemperatureFactor, PlanetDensityFactor, PlanetMassFactor, PlanetRadiusFactor,
    SurfaceGravityFactor,
};
pub use stellar::{
    HabitableZonePositionFactor, StellarAgeFactor, StellarLuminosityFactor, StellarTypeFactor,
};

/// Every built-in factor, in category order.
pub fn default_factors() -> Vec<Arc<dyn ScoringFactor>> {
    vec![
        Arc::new(StellarTypeFactor),
        Arc::new(StellarLuminosityFactor),
        Arc::new(StellarAgeFactor),
        Arc::new(HabitableZonePositionFactor),
        Arc::new(PlanetRadiusFactor),
        Arc::new(PlanetMassFactor),
        Arc::new(PlanetDensityFactor),
        Arc::new(EquilibriumTemperatureFactor),
        Arc::new(SurfaceGravityFactor),
        Arc::new(OrbitalEccentricityFactor),
        Arc::new(TidalLockingFactor),
        Arc::new(AtmosphereRetentionFactor),
        Arc::new(MagneticFieldPotentialFactor),
    ]
}

/// Looks up a built-in factor by its id.
pub fn factor_by_id(factor_id: &str) -> Option<Arc<dyn ScoringFactor>> {
    default_factors()
        .into_iter()
        .find(|factor| factor.factor_id() == factor_id)
}
