//! Physical parameters of an exoplanet and the quantities derived from them.

use serde::{Deserialize, Serialize};

use super::PlanetType;

/// Earth's bulk density in g/cm³.
pub const EARTH_DENSITY_G_CM3: f64 = 5.514;

/// Earth's escape velocity in km/s.
pub const EARTH_ESCAPE_VELOCITY_KM_S: f64 = 11.186;

/// Physical characteristics. Every field is optional; unknown is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalParameters {
    /// Radius in Earth radii.
    pub radius_earth: Option<f64>,
    /// Radius in Jupiter radii.
    pub radius_jupiter: Option<f64>,
    /// Mass in Earth masses.
    pub mass_earth: Option<f64>,
    /// Mass in Jupiter masses.
    pub mass_jupiter: Option<f64>,
    /// Measured bulk density in g/cm³.
    pub density_g_cm3: Option<f64>,
    /// Equilibrium temperature in Kelvin.
    pub equilibrium_temp_k: Option<f64>,
}

impl PhysicalParameters {
    /// Surface gravity relative to Earth, M / R².
    pub fn surface_gravity_earth(&self) -> Option<f64> {
        let (mass, radius) = (self.mass_earth?, self.radius_earth?);
        if radius <= 0.0 {
            return None;
        }
        Some(mass / (radius * radius))
    }

    /// Escape velocity in km/s, scaled from Earth: 11.186·√(M/R).
    pub fn escape_velocity_km_s(&self) -> Option<f64> {
        let (mass, radius) = (self.mass_earth?, self.radius_earth?);
        if radius <= 0.0 || mass < 0.0 {
            return None;
        }
        Some(EARTH_ESCAPE_VELOCITY_KM_S * (mass / radius).sqrt())
    }

    /// Measured density, or 5.514·M/R³ when mass and radius are known.
    pub fn estimate_density(&self) -> Option<f64> {
        if let Some(density) = self.density_g_cm3 {
            return Some(density);
        }
        let (mass, radius) = (self.mass_earth?, self.radius_earth?);
        if radius <= 0.0 {
            return None;
        }
        Some(EARTH_DENSITY_G_CM3 * mass / radius.powi(3))
    }

    pub fn planet_type(&self) -> PlanetType {
        PlanetType::from_radius(self.radius_earth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> PhysicalParameters {
        PhysicalParameters {
            radius_earth: Some(1.0),
            mass_earth: Some(1.0),
            ..Default::default()
        }
    }

    #[test]
    fn earth_derived_quantities() {
        let p = earth();
        assert_eq!(p.surface_gravity_earth(), Some(1.0));
        assert!((p.escape_velocity_km_s().unwrap() - 11.186).abs() < 1e-9);
        assert!((p.estimate_density().unwrap() - EARTH_DENSITY_G_CM3).abs() < 1e-9);
    }

    #[test]
    fn measured_density_takes_precedence() {
        let p = PhysicalParameters {
            density_g_cm3: Some(1.33),
            ..earth()
        };
        assert_eq!(p.estimate_density(), Some(1.33));
    }

    #[test]
    fn non_positive_radius_is_guarded() {
        let p = PhysicalParameters {
            radius_earth: Some(0.0),
            mass_earth: Some(1.0),
            ..Default::default()
        };
        assert!(p.surface_gravity_earth().is_none());
        assert!(p.escape_velocity_km_s().is_none());
        assert!(p.estimate_density().is_none());
    }

    #[test]
    fn missing_inputs_yield_none() {
        let p = PhysicalParameters {
            mass_earth: Some(5.0),
            ..Default::default()
        };
        assert!(p.surface_gravity_earth().is_none());
        assert!(p.estimate_density().is_none());
        assert_eq!(p.planet_type(), PlanetType::Unknown);
    }
}
