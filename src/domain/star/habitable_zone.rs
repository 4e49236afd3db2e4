//! Habitable zone boundaries from the Kopparapu et al. (2013, 2014) flux fits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Solar effective temperature used when the host temperature is unknown.
pub const SOLAR_TEMPERATURE_K: f64 = 5778.0;

/// Effective temperature with `None`, zero and non-finite values read as solar.
pub fn effective_temperature_or_solar(temperature_k: Option<f64>) -> f64 {
    match temperature_k {
        Some(t) if t != 0.0 && t.is_finite() => t,
        _ => SOLAR_TEMPERATURE_K,
    }
}

/// Reference temperature the polynomial fits are centred on.
const FIT_REFERENCE_TEMPERATURE_K: f64 = 5780.0;

/// Temperature range the flux fits are calibrated for.
pub const HZ_CALIBRATED_TEMPERATURE_K: (f64, f64) = (2600.0, 7200.0);

/// Effective-flux polynomial S_eff = S0 + aT + bT² + cT³ + dT⁴ with T = T_eff - 5780.
#[derive(Debug, Clone, Copy)]
struct FluxLimit {
    s0: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl FluxLimit {
    fn effective_flux(&self, t_star: f64) -> f64 {
        self.s0
            + self.a * t_star
            + self.b * t_star.powi(2)
            + self.c * t_star.powi(3)
            + self.d * t_star.powi(4)
    }

    /// Orbital distance in AU receiving this flux, d = √(L / S_eff).
    fn distance_au(&self, luminosity: f64, t_star: f64) -> Option<f64> {
        let flux = self.effective_flux(t_star);
        if flux > 0.0 && flux.is_finite() {
            Some((luminosity / flux).sqrt())
        } else {
            None
        }
    }
}

const RECENT_VENUS: FluxLimit = FluxLimit {
    s0: 1.7763,
    a: 1.4335e-4,
    b: 3.3954e-9,
    c: -7.6364e-12,
    d: -1.1950e-15,
};

const RUNAWAY_GREENHOUSE: FluxLimit = FluxLimit {
    s0: 1.0385,
    a: 1.2456e-4,
    b: 1.4612e-8,
    c: -7.6345e-12,
    d: -1.7511e-15,
};

const MAXIMUM_GREENHOUSE: FluxLimit = FluxLimit {
    s0: 0.3507,
    a: 5.9578e-5,
    b: 1.6707e-9,
    c: -3.0058e-12,
    d: -5.1925e-16,
};

const EARLY_MARS: FluxLimit = FluxLimit {
    s0: 0.3207,
    a: 5.4471e-5,
    b: 1.5275e-9,
    c: -2.1709e-12,
    d: -3.8282e-16,
};

/// Habitable zone boundaries in AU.
///
/// Conservative: runaway greenhouse to maximum greenhouse.
/// Optimistic: recent Venus to early Mars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitableZone {
    pub conservative_inner_au: f64,
    pub conservative_outer_au: f64,
    pub optimistic_inner_au: f64,
    pub optimistic_outer_au: f64,
}

impl HabitableZone {
    /// Computes the boundaries for a star of the given luminosity (L☉).
    ///
    /// `temperature_k` of `None`, zero or non-finite means solar. The temperature is
    /// clamped to the calibrated range before the fits are evaluated.
    /// Returns `None` for a non-positive or non-finite luminosity.
    pub fn from_stellar(luminosity: f64, temperature_k: Option<f64>) -> Option<Self> {
        if !luminosity.is_finite() || luminosity <= 0.0 {
            return None;
        }
        let teff = effective_temperature_or_solar(temperature_k);
        let (min_t, max_t) = HZ_CALIBRATED_TEMPERATURE_K;
        let t_star = teff.clamp(min_t, max_t) - FIT_REFERENCE_TEMPERATURE_K;

        Some(Self {
            conservative_inner_au: RUNAWAY_GREENHOUSE.distance_au(luminosity, t_star)?,
            conservative_outer_au: MAXIMUM_GREENHOUSE.distance_au(luminosity, t_star)?,
            optimistic_inner_au: RECENT_VENUS.distance_au(luminosity, t_star)?,
            optimistic_outer_au: EARLY_MARS.distance_au(luminosity, t_star)?,
        })
    }

    /// Classifies an orbital distance relative to the zone.
    pub fn position(&self, distance_au: f64) -> HzPosition {
        if distance_au < self.optimistic_inner_au {
            HzPosition::TooHot
        } else if distance_au < self.conservative_inner_au {
            HzPosition::OptimisticInnerEdge
        } else if distance_au <= self.conservative_outer_au {
            HzPosition::ConservativeHz
        } else if distance_au <= self.optimistic_outer_au {
            HzPosition::OptimisticOuterEdge
        } else {
            HzPosition::TooCold
        }
    }

    /// Inclusive containment check against either boundary pair.
    pub fn contains(&self, distance_au: f64, conservative: bool) -> bool {
        if conservative {
            (self.conservative_inner_au..=self.conservative_outer_au).contains(&distance_au)
        } else {
            (self.optimistic_inner_au..=self.optimistic_outer_au).contains(&distance_au)
        }
    }
}

/// Where an orbit sits relative to the habitable zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HzPosition {
    TooHot,
    OptimisticInnerEdge,
    ConservativeHz,
    OptimisticOuterEdge,
    TooCold,
}

impl HzPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            HzPosition::TooHot => "too_hot",
            HzPosition::OptimisticInnerEdge => "optimistic_inner_edge",
            HzPosition::ConservativeHz => "conservative_hz",
            HzPosition::OptimisticOuterEdge => "optimistic_outer_edge",
            HzPosition::TooCold => "too_cold",
        }
    }
}

impl fmt::Display for HzPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
