//! Exoplanet reader port (read side).
//!
//! Defines the contract for loading persisted exoplanet rows. Mapping a
//! row to domain entities is the application layer's job; the port only
//! delivers what the store holds.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ExoplanetId};

/// Reader port for exoplanet records.
#[async_trait]
pub trait ExoplanetReader: Send + Sync {
    /// Returns `None` if no record has this id.
    async fn get_by_id(&self, id: &ExoplanetId) -> Result<Option<ExoplanetRecord>, DomainError>;

    /// Case-insensitive lookup by planet name.
    ///
    /// Returns `None` if no record matches.
    async fn find_by_name(&self, name: &str) -> Result<Option<ExoplanetRecord>, DomainError>;
}

/// One persisted exoplanet row with its host star columns.
///
/// Every measurement is optional; absent means unknown, never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExoplanetRecord {
    pub id: ExoplanetId,
    pub name: String,

    // Discovery and catalogue
    pub host_star_name: Option<String>,
    pub discovery_method: Option<String>,
    pub discovery_year: Option<i32>,
    pub discovery_facility: Option<String>,
    pub distance_pc: Option<f64>,
    pub ra_deg: Option<f64>,
    pub dec_deg: Option<f64>,
    pub nasa_id: Option<String>,
    pub esa_id: Option<String>,
    pub notes: Option<String>,

    // Orbit
    pub orbital_period_days: Option<f64>,
    pub semi_major_axis_au: Option<f64>,
    pub eccentricity: Option<f64>,
    pub inclination_deg: Option<f64>,

    // Planet
    pub radius_earth: Option<f64>,
    pub radius_jupiter: Option<f64>,
    pub mass_earth: Option<f64>,
    pub mass_jupiter: Option<f64>,
    pub density_g_cm3: Option<f64>,
    pub equilibrium_temp_k: Option<f64>,

    // Host star
    pub star_spectral_type: Option<String>,
    pub star_mass_solar: Option<f64>,
    pub star_radius_solar: Option<f64>,
    pub star_temperature_k: Option<f64>,
    pub star_luminosity_solar: Option<f64>,
    pub star_luminosity_log: Option<f64>,
    pub star_metallicity: Option<f64>,
    pub star_age_gyr: Option<f64>,
}

impl ExoplanetRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ExoplanetId::new(),
            name: name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_json_deserializes_with_absent_fields() {
        let record: ExoplanetRecord =
            serde_json::from_str(r#"{"name": "TRAPPIST-1 e", "radius_earth": 0.92}"#).unwrap();
        assert_eq!(record.name, "TRAPPIST-1 e");
        assert_eq!(record.radius_earth, Some(0.92));
        assert!(record.mass_earth.is_none());
        assert!(record.star_temperature_k.is_none());
    }

    #[test]
    fn explicit_id_is_kept() {
        let id = ExoplanetId::new();
        let json = format!(r#"{{"id": "{}", "name": "b"}}"#, id);
        let record: ExoplanetRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.id, id);
    }
}
