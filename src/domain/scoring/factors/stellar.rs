//! Host-star factors: spectral type, luminosity class, age and
//! habitable zone position.

use crate::domain::exoplanet::ExoplanetEntity;
use crate::domain::foundation::ConfidenceLevel;
use crate::domain::scoring::factor::{
    banded_score, missing_data_result, FactorCategory, FactorError, FactorResult, ScoringFactor,
};
use crate::domain::star::{HzPosition, LuminosityClass, SpectralClass, StarEntity};

/// Spectral class: lifetime, UV environment and HZ geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct StellarTypeFactor;

impl StellarTypeFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Kasting et al. (1993) Icarus 101:108-128",
        "Lingam & Loeb (2019) 'Life in the Cosmos' Cambridge University Press",
        "Cuntz & Guinan (2016) ApJ 827:79",
    ];

    fn score_for(class: SpectralClass) -> f64 {
        match class {
            SpectralClass::O => 0.05,
            SpectralClass::B => 0.10,
            SpectralClass::A => 0.20,
            SpectralClass::F => 0.60,
            SpectralClass::G => 0.95,
            SpectralClass::K => 0.90,
            SpectralClass::M => 0.45,
            SpectralClass::L => 0.10,
            SpectralClass::T => 0.05,
            SpectralClass::Y => 0.02,
            SpectralClass::Unknown => 0.50,
        }
    }

    fn explanation_for(class: SpectralClass) -> &'static str {
        match class {
            SpectralClass::O => {
                "O-type stars (>30,000 K) burn out within 1-10 million years, far too \
                 quickly for life to emerge, and flood their surroundings with UV."
            }
            SpectralClass::B => {
                "B-type stars (10,000-30,000 K) live 10-100 million years. Complex life \
                 has no time to evolve and the UV flux is severe."
            }
            SpectralClass::A => {
                "A-type stars (7,500-10,000 K) live 100 million to 2 billion years, \
                 marginal for simple life and short for complex organisms."
            }
            SpectralClass::F => {
                "F-type stars (6,000-7,500 K) live 2-4 billion years with a wide \
                 habitable zone, enough time for life though less than the Sun offers."
            }
            SpectralClass::G => {
                "G-type stars like the Sun (5,200-6,000 K) give roughly 10 billion years \
                 of stable output. Earth orbits a G2V star."
            }
            SpectralClass::K => {
                "K-type orange dwarfs (3,700-5,200 K) are very stable, live 15-30+ \
                 billion years and emit less UV than the Sun."
            }
            SpectralClass::M => {
                "M-type red dwarfs (2,400-3,700 K) are long-lived, but their close-in \
                 habitable zones favour tidal locking and flares can strip atmospheres."
            }
            SpectralClass::L => {
                "L-type objects (1,300-2,400 K) are the coolest red dwarfs or brown \
                 dwarfs; any habitable zone would sit extremely close in."
            }
            SpectralClass::T => {
                "T-type brown dwarfs (550-1,300 K) are too faint to sustain a \
                 conventional habitable zone."
            }
            SpectralClass::Y => {
                "Y-type brown dwarfs (<550 K) are as cold as planets and cannot host a \
                 habitable zone."
            }
            SpectralClass::Unknown => {
                "The spectral class could not be recognised. Neutral score assigned."
            }
        }
    }
}

impl ScoringFactor for StellarTypeFactor {
    fn factor_id(&self) -> &str {
        "stellar_type"
    }

    fn factor_name(&self) -> &str {
        "Stellar Spectral Type"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Stellar
    }

    fn description(&self) -> &str {
        "Evaluates the host star's spectral class for stellar lifetime, radiation \
         environment and habitable zone stability. G and K main-sequence stars are \
         the most favourable."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        _exoplanet: &ExoplanetEntity,
        star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let spectral_type = match star.spectral_type.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => return Ok(missing_data_result(self, "stellar_type")),
        };

        let class = star.spectral_class();
        let confidence = match class {
            SpectralClass::F | SpectralClass::G | SpectralClass::K | SpectralClass::M => {
                ConfidenceLevel::High
            }
            SpectralClass::Unknown => ConfidenceLevel::VeryLow,
            _ => ConfidenceLevel::Medium,
        };

        Ok(FactorResult::new(self.factor_id(), Self::score_for(class))
            .with_input(spectral_type, "Spectral Class")
            .with_optimal_range("G0V - K5V")
            .with_explanation(Self::explanation_for(class))
            .with_confidence(confidence)
            .with_references(Self::REFERENCES))
    }
}

/// Luminosity class: is the star in a stable evolutionary phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct StellarLuminosityFactor;

impl StellarLuminosityFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Morgan & Keenan (1973) ARA&A 11:29-50",
        "Gray & Corbally (2009) 'Stellar Spectral Classification' Princeton",
    ];

    fn score_for(class: LuminosityClass) -> f64 {
        match class {
            LuminosityClass::V => 1.0,
            LuminosityClass::IV => 0.5,
            LuminosityClass::VI => 0.7,
            LuminosityClass::III => 0.2,
            LuminosityClass::II => 0.1,
            LuminosityClass::Ib => 0.05,
            LuminosityClass::Ia => 0.02,
            LuminosityClass::VII => 0.1,
            LuminosityClass::Unknown => 0.5,
        }
    }
}

impl ScoringFactor for StellarLuminosityFactor {
    fn factor_id(&self) -> &str {
        "stellar_luminosity"
    }

    fn factor_name(&self) -> &str {
        "Stellar Luminosity Class"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Stellar
    }

    fn description(&self) -> &str {
        "Assesses whether the host star is in a stable evolutionary phase. \
         Main-sequence (class V) stars hold a steady output for billions of years; \
         evolved stars vary and have little lifetime left."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        _exoplanet: &ExoplanetEntity,
        star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        if star.spectral_type.as_deref().map_or(true, str::is_empty) {
            return Ok(missing_data_result(self, "spectral_type"));
        }

        let class = star.luminosity_class();
        let (explanation, confidence) = match class {
            LuminosityClass::V => (
                "Main-sequence dwarf (class V): stable core hydrogen burning keeps the \
                 habitable zone in place for billions of years."
                    .to_string(),
                ConfidenceLevel::High,
            ),
            LuminosityClass::IV => (
                "Subgiant (class IV): the star is leaving the main sequence and its \
                 habitable zone will migrate outward as it brightens."
                    .to_string(),
                ConfidenceLevel::Medium,
            ),
            LuminosityClass::III | LuminosityClass::II => (
                format!(
                    "Evolved giant (class {}): variable luminosity and a short remaining \
                     lifetime; formerly habitable planets are likely sterilised.",
                    class
                ),
                ConfidenceLevel::High,
            ),
            LuminosityClass::Ia | LuminosityClass::Ib => (
                format!(
                    "Supergiant (class {}): a brief phase before core collapse, unsuitable \
                     for habitability.",
                    class
                ),
                ConfidenceLevel::High,
            ),
            LuminosityClass::Unknown => (
                "Luminosity class not present in the spectral type; evolutionary state \
                 cannot be determined."
                    .to_string(),
                ConfidenceLevel::Low,
            ),
            other => (
                format!("Stellar luminosity class: {}", other),
                ConfidenceLevel::Medium,
            ),
        };

        Ok(FactorResult::new(self.factor_id(), Self::score_for(class))
            .with_input(class.as_str(), "Luminosity Class")
            .with_optimal_range("V (Main Sequence)")
            .with_explanation(explanation)
            .with_confidence(confidence)
            .with_references(Self::REFERENCES))
    }
}

/// System age against the timescales of biological evolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct StellarAgeFactor;

impl StellarAgeFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Lineweaver (2001) Icarus 151:307-313",
        "Spiegel & Turner (2012) PNAS 109:395-400",
    ];

    const BANDS: &'static [(f64, f64)] = &[(0.5, 0.2), (1.0, 0.4), (2.0, 0.7), (8.0, 1.0), (10.0, 0.7)];
}

impl ScoringFactor for StellarAgeFactor {
    fn factor_id(&self) -> &str {
        "stellar_age"
    }

    fn factor_name(&self) -> &str {
        "Stellar System Age"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Stellar
    }

    fn description(&self) -> &str {
        "Considers the age of the system against planetary evolution and life \
         development timescales. Young systems are too active; mature ones have \
         had time for biology."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        _exoplanet: &ExoplanetEntity,
        star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let Some(age) = star.age_gyr else {
            return Ok(missing_data_result(self, "stellar_age_gyr"));
        };

        let score = banded_score(age, Self::BANDS, 0.4);
        let explanation = if age < 0.5 {
            format!(
                "Very young system ({:.1} Gyr): strong UV and X-ray activity and likely \
                 ongoing heavy bombardment.",
                age
            )
        } else if age < 1.0 {
            format!(
                "Young system ({:.1} Gyr): stellar activity is still elevated; simple life \
                 might emerge but complex life needs more time.",
                age
            )
        } else if age < 2.0 {
            format!(
                "System age {:.1} Gyr is approaching the optimum; activity has settled \
                 enough for microbial life.",
                age
            )
        } else if age < 8.0 {
            format!(
                "System age {:.1} Gyr is in the optimal window: long enough for complex \
                 life (Earth needed ~4 Gyr) with the main sequence still ongoing.",
                age
            )
        } else if age < 10.0 {
            format!(
                "Mature system ({:.1} Gyr): a Sun-like host is nearing the end of its \
                 main-sequence phase and brightening.",
                age
            )
        } else {
            format!(
                "Very old system ({:.1} Gyr): Sun-like stars would be evolving off the \
                 main sequence; cooler dwarfs remain stable but planets may have lost \
                 volatiles.",
                age
            )
        };

        Ok(FactorResult::new(self.factor_id(), score)
            .with_input(format!("{:.1}", age), "Billion years (Gyr)")
            .with_optimal_range("2-8 Gyr")
            .with_explanation(explanation)
            .with_confidence(ConfidenceLevel::Medium)
            .with_references(Self::REFERENCES))
    }
}

/// Orbital distance against the Kopparapu habitable zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct HabitableZonePositionFactor;

impl HabitableZonePositionFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Kopparapu et al. (2013) ApJ 765:131",
        "Kopparapu et al. (2014) ApJ 787:L29",
        "Kane & Gelino (2012) PASP 124:323-328",
    ];
}

impl ScoringFactor for HabitableZonePositionFactor {
    fn factor_id(&self) -> &str {
        "habitable_zone_position"
    }

    fn factor_name(&self) -> &str {
        "Habitable Zone Position"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Stellar
    }

    fn description(&self) -> &str {
        "Determines whether the orbital distance lies in the habitable zone where \
         surface liquid water is possible under an Earth-like atmosphere."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        exoplanet: &ExoplanetEntity,
        star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let Some(distance) = exoplanet.orbital.semi_major_axis_au else {
            return Ok(missing_data_result(self, "semi_major_axis_au"));
        };
        let input = format!("{:.3}", distance);

        let Some(hz) = star.habitable_zone() else {
            return Ok(missing_data_result(self, "stellar_luminosity")
                .with_input(input, "AU")
                .with_explanation(
                    "Cannot calculate the habitable zone without stellar luminosity data.",
                ));
        };

        let (score, explanation) = match hz.position(distance) {
            HzPosition::ConservativeHz => (
                1.0,
                format!(
                    "Orbit at {:.3} AU lies inside the conservative habitable zone \
                     ({:.3} - {:.3} AU); liquid water is plausible with an Earth-like \
                     atmosphere.",
                    distance, hz.conservative_inner_au, hz.conservative_outer_au
                ),
            ),
            HzPosition::OptimisticInnerEdge => (
                0.7,
                format!(
                    "Orbit at {:.3} AU is in the optimistic inner zone ({:.3} - {:.3} AU); \
                     warm, but water could survive with cloud feedback.",
                    distance, hz.optimistic_inner_au, hz.conservative_inner_au
                ),
            ),
            HzPosition::OptimisticOuterEdge => (
                0.7,
                format!(
                    "Orbit at {:.3} AU is in the optimistic outer zone ({:.3} - {:.3} AU); \
                     water needs a thick CO2 greenhouse.",
                    distance, hz.conservative_outer_au, hz.optimistic_outer_au
                ),
            ),
            HzPosition::TooHot => {
                let excess = (hz.optimistic_inner_au - distance) / hz.optimistic_inner_au;
                (
                    (0.3 - excess).max(0.0),
                    format!(
                        "Orbit at {:.3} AU is inside the inner edge ({:.3} AU); a runaway \
                         greenhouse is likely.",
                        distance, hz.optimistic_inner_au
                    ),
                )
            }
            HzPosition::TooCold => {
                let excess = (distance - hz.optimistic_outer_au) / hz.optimistic_outer_au;
                (
                    (0.3 - excess * 0.5).max(0.0),
                    format!(
                        "Orbit at {:.3} AU is beyond the outer edge ({:.3} AU); surface \
                         water would freeze without extreme greenhouse warming.",
                        distance, hz.optimistic_outer_au
                    ),
                )
            }
        };

        Ok(FactorResult::new(self.factor_id(), score)
            .with_input(input, "AU")
            .with_optimal_range(format!(
                "{:.3} - {:.3} AU (conservative)",
                hz.conservative_inner_au, hz.conservative_outer_au
            ))
            .with_explanation(explanation)
            .with_confidence(ConfidenceLevel::High)
            .with_references(Self::REFERENCES))
    }
}
