//! Maps persisted exoplanet records to domain entities.

use crate::domain::exoplanet::{ExoplanetEntity, OrbitalParameters, PhysicalParameters};
use crate::domain::foundation::ValidationError;
use crate::domain::star::StarEntity;
use crate::ports::ExoplanetRecord;

const UNKNOWN_STAR: &str = "Unknown";

/// Splits a record into the planet and star snapshots the engine scores.
///
/// # Errors
///
/// `EmptyField` if the record has no planet name.
pub fn record_to_entities(
    record: &ExoplanetRecord,
) -> Result<(ExoplanetEntity, StarEntity), ValidationError> {
    let name = record.name.trim();
    if name.is_empty() {
        return Err(ValidationError::empty_field("name"));
    }

    let star_name = record
        .host_star_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(UNKNOWN_STAR);

    let exoplanet = ExoplanetEntity {
        id: Some(record.id),
        name: name.to_string(),
        host_star_name: star_name.to_string(),
        orbital: OrbitalParameters {
            period_days: record.orbital_period_days,
            semi_major_axis_au: record.semi_major_axis_au,
            eccentricity: record.eccentricity,
            inclination_deg: record.inclination_deg,
        },
        physical: PhysicalParameters {
            radius_earth: record.radius_earth,
            radius_jupiter: record.radius_jupiter,
            mass_earth: record.mass_earth,
            mass_jupiter: record.mass_jupiter,
            density_g_cm3: record.density_g_cm3,
            equilibrium_temp_k: record.equilibrium_temp_k,
        },
        discovery_method: record.discovery_method.clone(),
        discovery_year: record.discovery_year,
        discovery_facility: record.discovery_facility.clone(),
        distance_pc: record.distance_pc,
        ra_deg: record.ra_deg,
        dec_deg: record.dec_deg,
        nasa_id: record.nasa_id.clone(),
        esa_id: record.esa_id.clone(),
        notes: record.notes.clone(),
    };

    let star = StarEntity {
        name: star_name.to_string(),
        spectral_type: record.star_spectral_type.clone(),
        mass_solar: record.star_mass_solar,
        radius_solar: record.star_radius_solar,
        temperature_k: record.star_temperature_k,
        luminosity_solar: record.star_luminosity_solar,
        luminosity_log: record.star_luminosity_log,
        metallicity: record.star_metallicity,
        age_gyr: record.star_age_gyr,
    };

    Ok((exoplanet, star))
}
