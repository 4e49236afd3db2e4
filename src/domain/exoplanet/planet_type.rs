//! Size-based planet classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of exoplanets by radius.
///
/// Boundaries at 1.0, 1.75, 3.5 and 6.0 Earth radii follow the
/// California-Kepler Survey radius gap (Fulton et al. 2017).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanetType {
    Terrestrial,
    SuperEarth,
    SubNeptune,
    NeptuneLike,
    GasGiant,
    #[default]
    Unknown,
}

impl PlanetType {
    /// Classifies a planet from its radius in Earth radii.
    pub fn from_radius(radius_earth: Option<f64>) -> Self {
        match radius_earth {
            None => PlanetType::Unknown,
            Some(r) if r.is_nan() => PlanetType::Unknown,
            Some(r) if r < 1.0 => PlanetType::Terrestrial,
            Some(r) if r < 1.75 => PlanetType::SuperEarth,
            Some(r) if r < 3.5 => PlanetType::SubNeptune,
            Some(r) if r < 6.0 => PlanetType::NeptuneLike,
            Some(_) => PlanetType::GasGiant,
        }
    }

    /// Returns true for the two classes below the radius gap.
    pub fn is_rocky(&self) -> bool {
        matches!(self, PlanetType::Terrestrial | PlanetType::SuperEarth)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetType::Terrestrial => "terrestrial",
            PlanetType::SuperEarth => "super_earth",
            PlanetType::SubNeptune => "sub_neptune",
            PlanetType::NeptuneLike => "neptune_like",
            PlanetType::GasGiant => "gas_giant",
            PlanetType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
