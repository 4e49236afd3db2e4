//! Derived factors: quantities inferred by combining several observables.

use crate::domain::exoplanet::ExoplanetEntity;
use crate::domain::foundation::ConfidenceLevel;
use crate::domain::scoring::factor::{
    banded_score, missing_data_result, FactorCategory, FactorError, FactorResult, ScoringFactor,
};
use crate::domain::star::StarEntity;

/// Escape velocity the retention bands are calibrated against.
const EARTH_ESCAPE_KM_S: f64 = 11.2;

/// Ability to hold on to a substantial atmosphere.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtmosphereRetentionFactor;

impl AtmosphereRetentionFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Tian et al. (2015) Space Science Reviews 194:97-140",
        "Johnstone et al. (2019) A&A 624:L10",
        "Owen & Wu (2017) ApJ 847:29 - Photoevaporation",
    ];

    /// Escape velocity in km/s. A missing radius or mass is filled in from
    /// a rough rocky mass-radius relation. Non-physical inputs (radius not
    /// positive, negative mass) count as missing.
    fn escape_velocity(mass: Option<f64>, radius: Option<f64>) -> Option<f64> {
        let (mass, radius) = match (mass, radius) {
            (Some(m), Some(r)) => (m, r),
            (Some(m), None) => (m, m.powf(0.27)),
            (None, Some(r)) => (r.powf(3.7), r),
            (None, None) => return None,
        };
        if !(radius > 0.0 && mass >= 0.0) {
            return None;
        }
        Some(EARTH_ESCAPE_KM_S * (mass / radius).sqrt()).filter(|v| v.is_finite())
    }

    fn escape_assessment(velocity: f64) -> (f64, String) {
        if velocity < 3.0 {
            (
                0.1,
                format!(
                    "Very low escape velocity ({:.1} km/s against Earth's 11.2 km/s); even \
                     heavy molecules such as CO₂ leak away over geologic time.",
                    velocity
                ),
            )
        } else if velocity < 5.0 {
            (
                0.3,
                format!(
                    "Low escape velocity ({:.1} km/s), close to Mars (5.0 km/s); light gases \
                     escape quickly and heavier ones slowly.",
                    velocity
                ),
            )
        } else if velocity < 8.0 {
            (
                0.6,
                format!(
                    "Moderate escape velocity ({:.1} km/s); N₂, O₂ and CO₂ are retained but \
                     erode over billions of years.",
                    velocity
                ),
            )
        } else if velocity < 12.0 {
            (
                0.85,
                format!(
                    "Earth-like escape velocity ({:.1} km/s); everything but H₂ and He is \
                     held well.",
                    velocity
                ),
            )
        } else if velocity < 20.0 {
            (
                0.95,
                format!(
                    "High escape velocity ({:.1} km/s); even hydrogen-rich atmospheres are \
                     retained.",
                    velocity
                ),
            )
        } else {
            (
                0.8,
                format!(
                    "Very high escape velocity ({:.1} km/s); a primordial H/He envelope is \
                     likely, pointing to a gas-rich planet.",
                    velocity
                ),
            )
        }
    }

    fn activity_penalty(star: &StarEntity) -> (f64, String) {
        let teff = star.effective_temperature_or_solar();
        let (mut penalty, mut note) = if teff < 3700.0 {
            (
                0.2,
                "M dwarf host with intense UV/X-ray output and stellar wind accelerates \
                 atmospheric loss."
                    .to_string(),
            )
        } else if teff < 4500.0 {
            (
                0.1,
                "Late K dwarf host is moderately more active than the Sun.".to_string(),
            )
        } else {
            (
                0.0,
                "Sun-like or hotter host with moderate activity.".to_string(),
            )
        };

        if let Some(age) = star.age_gyr.filter(|age| *age < 1.0) {
            penalty += 0.15;
            note.push_str(&format!(
                " The young system ({:.2} Gyr) implies elevated activity.",
                age
            ));
        }
        (penalty, note)
    }
}

impl ScoringFactor for AtmosphereRetentionFactor {
    fn factor_id(&self) -> &str {
        "atmosphere_retention"
    }

    fn factor_name(&self) -> &str {
        "Atmosphere Retention Potential"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Derived
    }

    fn description(&self) -> &str {
        "Estimates the planet's ability to keep a substantial atmosphere from its \
         escape velocity and the activity of its host star."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        exoplanet: &ExoplanetEntity,
        star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let physical = &exoplanet.physical;
        let Some(velocity) = Self::escape_velocity(physical.mass_earth, physical.radius_earth)
        else {
            return Ok(missing_data_result(self, "planet_mass or planet_radius"));
        };

        let (base, escape_note) = Self::escape_assessment(velocity);
        let (penalty, activity_note) = Self::activity_penalty(star);

        Ok(FactorResult::new(self.factor_id(), (base - penalty).max(0.05))
            .with_input(format!("{:.1}", velocity), "km/s (escape velocity)")
            .with_optimal_range("8 - 15 km/s (Earth: 11.2 km/s)")
            .with_explanation(format!("{} {}", escape_note, activity_note))
            .with_confidence(ConfidenceLevel::Medium)
            .with_references(Self::REFERENCES))
    }
}

/// Likelihood of a protective dynamo-driven magnetic field.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagneticFieldPotentialFactor;

impl MagneticFieldPotentialFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Driscoll & Bercovici (2014) Physics Earth Planet Int 236:36-51",
        "Zuluaga et al. (2013) ApJ 770:23",
        "Tarduno et al. (2020) PNAS - Importance of magnetic fields",
    ];

    fn size_score(mass: Option<f64>, radius: Option<f64>) -> Option<(f64, String)> {
        if let Some(m) = mass {
            let note = if m < 0.2 {
                format!("very low mass ({:.2} M⊕) implies a small core unlikely to stay molten", m)
            } else if m < 0.5 {
                format!("sub-Earth mass ({:.2} M⊕) may have a cooled core like Mars", m)
            } else if m < 1.5 {
                format!("Earth-like mass ({:.2} M⊕) supports a convecting liquid core", m)
            } else if m < 5.0 {
                format!("super-Earth mass ({:.2} M⊕) favours vigorous core convection", m)
            } else {
                format!(
                    "high mass ({:.2} M⊕) gives a strong dynamo if rocky, different dynamics if gas-rich",
                    m
                )
            };
            let score = banded_score(m, &[(0.2, 0.2), (0.5, 0.4), (1.5, 0.8), (5.0, 0.9)], 0.7);
            return Some((score, note));
        }

        let r = radius?;
        let note = if r < 0.7 {
            format!("small radius ({:.2} R⊕) suggests low mass", r)
        } else if r < 1.3 {
            format!("Earth-like radius ({:.2} R⊕)", r)
        } else {
            format!("larger radius ({:.2} R⊕) leaves composition uncertain", r)
        };
        Some((banded_score(r, &[(0.7, 0.3), (1.3, 0.75)], 0.6), note))
    }
}

impl ScoringFactor for MagneticFieldPotentialFactor {
    fn factor_id(&self) -> &str {
        "magnetic_field_potential"
    }

    fn factor_name(&self) -> &str {
        "Magnetic Field Potential"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Derived
    }

    fn description(&self) -> &str {
        "Estimates the probability of a protective magnetic field from mass, density \
         and system age."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        exoplanet: &ExoplanetEntity,
        star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let physical = &exoplanet.physical;
        let Some((mut score, size_note)) =
            Self::size_score(physical.mass_earth, physical.radius_earth)
        else {
            return Ok(missing_data_result(self, "planet_mass or planet_radius"));
        };

        let mut positives = vec![size_note];
        let mut negatives = Vec::new();

        if let Some(density) = physical.estimate_density() {
            if density > 5.0 {
                score += 0.1;
                positives.push(format!(
                    "high density ({:.1} g/cm³) indicates a substantial iron core",
                    density
                ));
            } else if density > 4.0 {
                score += 0.05;
                positives.push(format!(
                    "rocky density ({:.1} g/cm³) is consistent with an iron core",
                    density
                ));
            } else if density < 2.5 {
                score -= 0.2;
                negatives.push(format!(
                    "low density ({:.1} g/cm³) suggests an ice- or gas-rich composition",
                    density
                ));
            }
        }

        if let Some(age) = star.age_gyr {
            if age > 10.0 {
                score -= 0.15;
                negatives.push(format!("old system ({:.1} Gyr), the core may have solidified", age));
            } else if age > 8.0 {
                score -= 0.05;
                negatives.push(format!("mature system ({:.1} Gyr) with advanced core cooling", age));
            } else if age < 0.5 {
                score -= 0.1;
                negatives.push(format!(
                    "very young system ({:.1} Gyr), the dynamo may still be forming",
                    age
                ));
            }
        }

        let teff = star.effective_temperature_or_solar();
        let likely_locked = exoplanet
            .orbital
            .period_days
            .is_some_and(|period| period < 30.0 && teff < 4000.0);
        if likely_locked {
            score -= 0.1;
        }

        let score = score.clamp(0.05, 1.0);

        let mut parts = vec![format!("Positive factors: {}.", positives.join("; "))];
        if !negatives.is_empty() {
            parts.push(format!("Negative factors: {}.", negatives.join("; ")));
        }
        if likely_locked {
            parts.push(
                "A short period around a cool star suggests tidal locking; slow rotation may \
                 weaken the dynamo while tidal heating keeps the core warm."
                    .to_string(),
            );
        }
        parts.push(
            if score >= 0.7 {
                "A magnetic field is likely, protecting the atmosphere."
            } else if score >= 0.4 {
                "A magnetic field is possible but uncertain; some protection is expected."
            } else {
                "A magnetic field is unlikely; the atmosphere is exposed to stellar wind erosion."
            }
            .to_string(),
        );

        // Planetary magnetic fields are not directly observable.
        Ok(FactorResult::new(self.factor_id(), score)
            .with_input(format!("{:.0}%", score * 100.0), "estimated probability")
            .with_optimal_range("High mass + high density + moderate age")
            .with_explanation(parts.join(" "))
            .with_confidence(ConfidenceLevel::Low)
            .with_references(Self::REFERENCES))
    }
}
