//! StarEntity - the host-star snapshot handed to the scoring engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    effective_temperature_or_solar, HabitableZone, HzPosition, LuminosityClass, SpectralClass,
    SOLAR_TEMPERATURE_K,
};

/// A host star. Every astrophysical field is optional; unknown is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StarEntity {
    pub name: String,
    /// Full classification, e.g. "G2V".
    pub spectral_type: Option<String>,
    pub mass_solar: Option<f64>,
    pub radius_solar: Option<f64>,
    /// Effective temperature in Kelvin.
    pub temperature_k: Option<f64>,
    /// Linear luminosity in L☉.
    pub luminosity_solar: Option<f64>,
    /// log10(L / L☉), as catalogues often report it.
    pub luminosity_log: Option<f64>,
    /// [Fe/H].
    pub metallicity: Option<f64>,
    pub age_gyr: Option<f64>,
}

impl StarEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn spectral_class(&self) -> SpectralClass {
        SpectralClass::from_spectral_type(self.spectral_type.as_deref())
    }

    pub fn luminosity_class(&self) -> LuminosityClass {
        LuminosityClass::from_spectral_type(self.spectral_type.as_deref())
    }

    /// Main-sequence dwarf, luminosity class V.
    pub fn is_main_sequence(&self) -> bool {
        self.luminosity_class() == LuminosityClass::V
    }

    /// Effective temperature, solar when unknown, zero or non-finite.
    pub fn effective_temperature_or_solar(&self) -> f64 {
        effective_temperature_or_solar(self.temperature_k)
    }

    /// Linear luminosity, converting from the log form when needed.
    pub fn luminosity_linear(&self) -> Option<f64> {
        self.luminosity_solar
            .or_else(|| self.luminosity_log.map(|log| 10f64.powf(log)))
    }

    /// Luminosity, falling back to Stefan-Boltzmann scaling R²(T/T☉)⁴.
    pub fn estimate_luminosity(&self) -> Option<f64> {
        if let Some(luminosity) = self.luminosity_linear() {
            return Some(luminosity);
        }
        let (radius, temperature) = (self.radius_solar?, self.temperature_k?);
        Some(radius.powi(2) * (temperature / SOLAR_TEMPERATURE_K).powi(4))
    }

    /// Main-sequence lifetime approximation 10·M^-2.5 Gyr.
    pub fn estimate_main_sequence_lifetime_gyr(&self) -> Option<f64> {
        match self.mass_solar {
            Some(mass) if mass > 0.0 => Some(10.0 * mass.powf(-2.5)),
            _ => None,
        }
    }

    /// Habitable zone boundaries, or `None` when luminosity is unavailable.
    pub fn habitable_zone(&self) -> Option<HabitableZone> {
        HabitableZone::from_stellar(self.estimate_luminosity()?, self.temperature_k)
    }

    pub fn hz_position(&self, distance_au: f64) -> Option<HzPosition> {
        self.habitable_zone().map(|hz| hz.position(distance_au))
    }

    /// `None` when the zone cannot be computed.
    pub fn is_in_habitable_zone(&self, distance_au: f64, conservative: bool) -> Option<bool> {
        self.habitable_zone()
            .map(|hz| hz.contains(distance_au, conservative))
    }
}

impl fmt::Display for StarEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.name,
            self.spectral_type.as_deref().unwrap_or("Unknown type")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun() -> StarEntity {
        StarEntity {
            name: "Sun".to_string(),
            spectral_type: Some("G2V".to_string()),
            mass_solar: Some(1.0),
            radius_solar: Some(1.0),
            temperature_k: Some(5778.0),
            luminosity_solar: Some(1.0),
            age_gyr: Some(4.6),
            ..Default::default()
        }
    }

    #[test]
    fn sun_classification() {
        let star = sun();
        assert_eq!(star.spectral_class(), SpectralClass::G);
        assert_eq!(star.luminosity_class(), LuminosityClass::V);
        assert!(star.is_main_sequence());
        assert_eq!(star.to_string(), "Sun (G2V)");
    }

    #[test]
    fn luminosity_prefers_linear_then_log_then_stefan_boltzmann() {
        let mut star = sun();
        assert_eq!(star.estimate_luminosity(), Some(1.0));

        star.luminosity_solar = None;
        star.luminosity_log = Some(-1.0);
        assert!((star.estimate_luminosity().unwrap() - 0.1).abs() < 1e-12);

        star.luminosity_log = None;
        star.radius_solar = Some(2.0);
        star.temperature_k = Some(SOLAR_TEMPERATURE_K);
        assert!((star.estimate_luminosity().unwrap() - 4.0).abs() < 1e-12);

        star.radius_solar = None;
        assert!(star.estimate_luminosity().is_none());
    }

    #[test]
    fn missing_or_zero_temperature_reads_as_solar() {
        let mut star = StarEntity::new("Anonymous");
        assert_eq!(star.effective_temperature_or_solar(), SOLAR_TEMPERATURE_K);
        star.temperature_k = Some(0.0);
        assert_eq!(star.effective_temperature_or_solar(), SOLAR_TEMPERATURE_K);
        star.temperature_k = Some(3042.0);
        assert_eq!(star.effective_temperature_or_solar(), 3042.0);
    }

    #[test]
    fn main_sequence_lifetime() {
        let mut star = sun();
        assert!((star.estimate_main_sequence_lifetime_gyr().unwrap() - 10.0).abs() < 1e-12);
        star.mass_solar = Some(0.0);
        assert!(star.estimate_main_sequence_lifetime_gyr().is_none());
        star.mass_solar = None;
        assert!(star.estimate_main_sequence_lifetime_gyr().is_none());
    }

    #[test]
    fn earth_orbit_is_in_conservative_zone() {
        let star = sun();
        assert_eq!(star.hz_position(1.0), Some(HzPosition::ConservativeHz));
        assert_eq!(star.is_in_habitable_zone(1.0, true), Some(true));
        assert_eq!(star.is_in_habitable_zone(0.39, false), Some(false));
    }

    #[test]
    fn habitable_zone_unavailable_without_luminosity_inputs() {
        let star = StarEntity::new("Anonymous");
        assert!(star.habitable_zone().is_none());
        assert!(star.hz_position(1.0).is_none());
        assert!(star.is_in_habitable_zone(1.0, true).is_none());
        assert_eq!(star.to_string(), "Anonymous (Unknown type)");
    }
}
