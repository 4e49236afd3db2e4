//! Orbital parameters of an exoplanet.

use serde::{Deserialize, Serialize};

/// Orbital characteristics. Every field is optional; unknown is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrbitalParameters {
    /// Orbital period in Earth days.
    pub period_days: Option<f64>,
    /// Semi-major axis in astronomical units.
    pub semi_major_axis_au: Option<f64>,
    /// Eccentricity in [0, 1).
    pub eccentricity: Option<f64>,
    /// Inclination in degrees, 90 is edge-on.
    pub inclination_deg: Option<f64>,
}

impl OrbitalParameters {
    /// Approximately circular orbit (e < 0.1).
    pub fn is_circular(&self) -> bool {
        matches!(self.eccentricity, Some(e) if e < 0.1)
    }

    /// Highly eccentric orbit (e > 0.3).
    pub fn is_highly_eccentric(&self) -> bool {
        matches!(self.eccentricity, Some(e) if e > 0.3)
    }

    /// Closest approach to the star, a(1 - e).
    pub fn periastron_distance_au(&self) -> Option<f64> {
        Some(self.semi_major_axis_au? * (1.0 - self.eccentricity?))
    }

    /// Farthest distance from the star, a(1 + e).
    pub fn apastron_distance_au(&self) -> Option<f64> {
        Some(self.semi_major_axis_au? * (1.0 + self.eccentricity?))
    }
}
