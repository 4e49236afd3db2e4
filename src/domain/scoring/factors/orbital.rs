//! Orbital dynamics factors: eccentricity and tidal locking.

use crate::domain::exoplanet::ExoplanetEntity;
use crate::domain::foundation::ConfidenceLevel;
use crate::domain::scoring::factor::{
    banded_score, missing_data_result, FactorCategory, FactorError, FactorResult, ScoringFactor,
};
use crate::domain::star::StarEntity;

/// Peak-to-trough stellar flux variation over one orbit,
/// ((1+e)/(1-e))² - 1. Infinite for unbound orbits.
pub fn flux_variation(eccentricity: f64) -> f64 {
    if eccentricity < 1.0 {
        ((1.0 + eccentricity) / (1.0 - eccentricity)).powi(2) - 1.0
    } else {
        f64::INFINITY
    }
}

fn describe_flux_variation(eccentricity: f64) -> String {
    let variation = flux_variation(eccentricity);
    if !variation.is_finite() {
        "Stellar flux variation is unbounded.".to_string()
    } else if variation < 1.0 {
        format!("Stellar flux varies by ~{:.1}%.", variation * 100.0)
    } else {
        format!("Stellar flux varies by ~{:.0}%.", variation * 100.0)
    }
}

/// Orbital shape and climate stability.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitalEccentricityFactor;

impl OrbitalEccentricityFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Williams & Pollard (2002) IJAstrobiology 1:61-69",
        "Barnes et al. (2008) Astrobiology 8:557-568",
        "Dressing et al. (2010) ApJ 721:1295-1307",
    ];

    const BANDS: &'static [(f64, f64)] = &[
        (0.02, 1.0),
        (0.1, 0.9),
        (0.25, 0.7),
        (0.3, 0.5),
        (0.5, 0.25),
        (0.8, 0.1),
    ];
}

impl ScoringFactor for OrbitalEccentricityFactor {
    fn factor_id(&self) -> &str {
        "orbital_eccentricity"
    }

    fn factor_name(&self) -> &str {
        "Orbital Eccentricity"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Orbital
    }

    fn description(&self) -> &str {
        "Assesses orbital shape for climate stability. Circular orbits keep \
         temperatures steady; eccentric orbits drive extreme seasons."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        exoplanet: &ExoplanetEntity,
        _star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let Some(ecc) = exoplanet.orbital.eccentricity else {
            return Ok(missing_data_result(self, "orbital_eccentricity"));
        };

        let regime = if ecc < 0.02 {
            format!(
                "Eccentricity {:.3} is nearly circular (Earth: 0.017); climate forcing \
                 from orbital position is minimal.",
                ecc
            )
        } else if ecc < 0.1 {
            format!(
                "Eccentricity {:.3} is low; like Mars (0.093) it brings noticeable but \
                 manageable seasons.",
                ecc
            )
        } else if ecc < 0.25 {
            format!(
                "Eccentricity {:.3} is moderate, comparable to Mercury (0.206); seasonal \
                 swings would stress climate regulation.",
                ecc
            )
        } else if ecc < 0.3 {
            format!(
                "Eccentricity {:.3} is high; perihelion and aphelion conditions differ \
                 sharply even if the average climate is mild.",
                ecc
            )
        } else if ecc < 0.5 {
            format!(
                "Eccentricity {:.3} is very high; the planet may leave the habitable \
                 zone for part of each orbit.",
                ecc
            )
        } else if ecc < 0.8 {
            format!(
                "Eccentricity {:.3} is extreme, alternating scorching and frozen passages.",
                ecc
            )
        } else {
            format!(
                "Eccentricity {:.3} is near-parabolic, a comet-like orbit with no stable \
                 climate.",
                ecc
            )
        };

        Ok(
            FactorResult::new(self.factor_id(), banded_score(ecc, Self::BANDS, 0.02))
                .with_input(format!("{:.3}", ecc), "dimensionless (0=circle, 1=parabola)")
                .with_optimal_range("0.0 - 0.1")
                .with_explanation(format!("{} {}", regime, describe_flux_variation(ecc)))
                .with_confidence(ConfidenceLevel::High)
                .with_references(Self::REFERENCES),
        )
    }
}

/// Likelihood of synchronous rotation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TidalLockingFactor;

impl TidalLockingFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Barnes (2017) Celestial Mechanics 129:509-536",
        "Leconte et al. (2015) Science 347:632-635",
        "Pierrehumbert & Hammond (2019) Annual Reviews",
    ];

    /// Lock probability and context sentence. The semi-major axis wins
    /// over the period when both are known.
    fn lock_probability(
        semi_major_axis: Option<f64>,
        period_days: Option<f64>,
        teff: Option<f64>,
    ) -> Option<(f64, String)> {
        if let Some(a) = semi_major_axis {
            let estimate = match teff {
                Some(t) if t < 3700.0 => (
                    banded_score(a, &[(0.05, 0.99), (0.1, 0.95), (0.2, 0.7), (0.5, 0.3)], 0.05),
                    format!(
                        "M dwarf host (T_eff ~{:.0} K) with the planet at {:.3} AU; close-in \
                         habitable zones promote locking.",
                        t, a
                    ),
                ),
                Some(t) if t < 5200.0 => (
                    banded_score(a, &[(0.1, 0.8), (0.3, 0.4), (0.5, 0.1)], 0.02),
                    format!(
                        "K dwarf host (T_eff ~{:.0} K) with the planet at {:.3} AU; moderate \
                         risk for close orbits.",
                        t, a
                    ),
                ),
                Some(t) if t < 6000.0 => (
                    banded_score(a, &[(0.1, 0.5), (0.3, 0.1)], 0.01),
                    format!(
                        "Sun-like host (T_eff ~{:.0} K) with the planet at {:.3} AU; locking \
                         is unlikely in the habitable zone.",
                        t, a
                    ),
                ),
                Some(t) => (
                    0.01,
                    format!(
                        "Hot host (T_eff ~{:.0} K) with a distant habitable zone; locking at \
                         {:.3} AU is extremely unlikely.",
                        t, a
                    ),
                ),
                None => (
                    (1.0 - a / 0.3).max(0.0),
                    format!("Planet at {:.3} AU (stellar properties unknown).", a),
                ),
            };
            return Some(estimate);
        }

        let period = period_days?;
        Some((
            banded_score(period, &[(10.0, 0.9), (30.0, 0.5), (100.0, 0.2)], 0.05),
            format!(
                "Orbital period of {:.1} days; shorter periods correlate with locking.",
                period
            ),
        ))
    }

    fn score_for(probability: f64) -> (f64, &'static str) {
        if probability < 0.1 {
            (1.0, "Tidal locking very unlikely; the planet should rotate freely.")
        } else if probability < 0.3 {
            (0.9, "Tidal locking unlikely; rotation may slow but not synchronise.")
        } else if probability < 0.5 {
            (0.7, "Tidal locking possible, or a spin-orbit resonance like Mercury's 3:2.")
        } else if probability < 0.7 {
            (0.6, "Tidal locking likely; habitability hinges on atmospheric heat transport.")
        } else if probability < 0.9 {
            (0.5, "Tidal locking very likely; a thick atmosphere could still spread heat.")
        } else {
            (0.4, "Tidal locking essentially certain; the terminator band is the best refuge.")
        }
    }
}

impl ScoringFactor for TidalLockingFactor {
    fn factor_id(&self) -> &str {
        "tidal_locking"
    }

    fn factor_name(&self) -> &str {
        "Tidal Locking Potential"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Orbital
    }

    fn description(&self) -> &str {
        "Estimates the likelihood of tidal locking from orbital distance and stellar \
         type. Locked planets may remain habitable if their atmosphere redistributes \
         heat efficiently."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        exoplanet: &ExoplanetEntity,
        star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let orbital = &exoplanet.orbital;
        let Some((probability, context)) = Self::lock_probability(
            orbital.semi_major_axis_au,
            orbital.period_days,
            star.temperature_k,
        ) else {
            return Ok(missing_data_result(self, "orbital_period or semi_major_axis"));
        };

        let (score, status) = Self::score_for(probability);

        Ok(FactorResult::new(self.factor_id(), score)
            .with_input(format!("{:.0}%", probability * 100.0), "estimated probability")
            .with_optimal_range("<30% probability (free rotation preferred)")
            .with_explanation(format!("{} {}", context, status))
            .with_confidence(ConfidenceLevel::Low)
            .with_references(Self::REFERENCES))
    }
}
