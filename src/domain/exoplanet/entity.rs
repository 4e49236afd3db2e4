//! ExoplanetEntity - the planet snapshot handed to the scoring engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{OrbitalParameters, PhysicalParameters, PlanetType};
use crate::domain::foundation::ExoplanetId;

/// Light-years per parsec.
pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.26156;

/// An exoplanet with its orbital, physical and catalogue data.
///
/// Independent of persistence and presentation. Identity is the name;
/// `id` is only set when the snapshot came from a catalogue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExoplanetEntity {
    pub id: Option<ExoplanetId>,
    /// IAU designation, e.g. "Kepler-442 b".
    pub name: String,
    pub host_star_name: String,

    pub orbital: OrbitalParameters,
    pub physical: PhysicalParameters,

    pub discovery_method: Option<String>,
    pub discovery_year: Option<i32>,
    pub discovery_facility: Option<String>,

    /// Distance from Earth in parsecs.
    pub distance_pc: Option<f64>,
    pub ra_deg: Option<f64>,
    pub dec_deg: Option<f64>,

    pub nasa_id: Option<String>,
    pub esa_id: Option<String>,
    pub notes: Option<String>,
}

impl ExoplanetEntity {
    /// Creates an exoplanet with only a name; every parameter unknown.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: ExoplanetId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_host_star(mut self, host_star_name: impl Into<String>) -> Self {
        self.host_star_name = host_star_name.into();
        self
    }

    pub fn with_orbital(mut self, orbital: OrbitalParameters) -> Self {
        self.orbital = orbital;
        self
    }

    pub fn with_physical(mut self, physical: PhysicalParameters) -> Self {
        self.physical = physical;
        self
    }

    /// Radius-based classification.
    pub fn planet_type(&self) -> PlanetType {
        self.physical.planet_type()
    }

    /// Terrestrial or super-earth, i.e. below the radius gap.
    pub fn is_potentially_rocky(&self) -> bool {
        self.planet_type().is_rocky()
    }

    pub fn distance_light_years(&self) -> Option<f64> {
        self.distance_pc.map(|pc| pc * LIGHT_YEARS_PER_PARSEC)
    }

    /// Fraction of the named dotted field paths that hold a value.
    ///
    /// An empty list is complete. Unknown paths count as absent.
    pub fn field_completeness(&self, paths: &[&str]) -> f64 {
        if paths.is_empty() {
            return 1.0;
        }
        let present = paths.iter().filter(|p| self.has_field(p)).count();
        present as f64 / paths.len() as f64
    }

    fn has_field(&self, path: &str) -> bool {
        let (o, p) = (&self.orbital, &self.physical);
        match path {
            "id" => self.id.is_some(),
            "name" => !self.name.is_empty(),
            "host_star_name" => !self.host_star_name.is_empty(),
            "orbital.period_days" => o.period_days.is_some(),
            "orbital.semi_major_axis_au" => o.semi_major_axis_au.is_some(),
            "orbital.eccentricity" => o.eccentricity.is_some(),
            "orbital.inclination_deg" => o.inclination_deg.is_some(),
            "physical.radius_earth" => p.radius_earth.is_some(),
            "physical.radius_jupiter" => p.radius_jupiter.is_some(),
            "physical.mass_earth" => p.mass_earth.is_some(),
            "physical.mass_jupiter" => p.mass_jupiter.is_some(),
            "physical.density_g_cm3" => p.density_g_cm3.is_some(),
            "physical.equilibrium_temp_k" => p.equilibrium_temp_k.is_some(),
            "discovery_method" => self.discovery_method.is_some(),
            "discovery_year" => self.discovery_year.is_some(),
            "discovery_facility" => self.discovery_facility.is_some(),
            "distance_pc" => self.distance_pc.is_some(),
            "ra_deg" => self.ra_deg.is_some(),
            "dec_deg" => self.dec_deg.is_some(),
            "nasa_id" => self.nasa_id.is_some(),
            "esa_id" => self.esa_id.is_some(),
            "notes" => self.notes.is_some(),
            _ => false,
        }
    }
}

impl fmt::Display for ExoplanetEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.planet_type())
    }
}
