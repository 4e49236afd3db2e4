//! Planet physical factors: radius, mass, density, equilibrium
//! temperature and surface gravity.

use crate::domain::exoplanet::ExoplanetEntity;
use crate::domain::foundation::ConfidenceLevel;
use crate::domain::scoring::factor::{
    banded_score, missing_data_result, FactorCategory, FactorError, FactorResult, ScoringFactor,
};
use crate::domain::star::StarEntity;

/// Radius: rocky composition below the Fulton gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanetRadiusFactor;

impl PlanetRadiusFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Fulton et al. (2017) AJ 154:109 - California-Kepler Survey",
        "Chen & Kipping (2017) ApJ 834:17",
        "Rogers (2015) ApJ 801:41 - Rocky/volatile boundary",
    ];

    const BANDS: &'static [(f64, f64)] = &[
        (0.5, 0.3),
        (0.8, 0.6),
        (1.25, 1.0),
        (1.75, 0.85),
        (2.5, 0.4),
        (4.0, 0.15),
    ];
}

impl ScoringFactor for PlanetRadiusFactor {
    fn factor_id(&self) -> &str {
        "planet_radius"
    }

    fn factor_name(&self) -> &str {
        "Planet Radius"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Planetary
    }

    fn description(&self) -> &str {
        "Assesses planet size to judge the likelihood of a rocky composition and \
         atmosphere retention. Earth-sized to super-Earth sizes are optimal."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        exoplanet: &ExoplanetEntity,
        _star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let Some(radius) = exoplanet.physical.radius_earth else {
            return Ok(missing_data_result(self, "planet_radius_earth"));
        };

        let explanation = if radius < 0.5 {
            format!(
                "Radius {:.2} R⊕ is well below Earth's; Mars-sized worlds (0.53 R⊕) \
                 struggle to hold an atmosphere.",
                radius
            )
        } else if radius < 0.8 {
            format!(
                "Radius {:.2} R⊕ is between Mars and Earth; an atmosphere is possible \
                 but gravity and geological activity are reduced.",
                radius
            )
        } else if radius < 1.25 {
            format!(
                "Radius {:.2} R⊕ is Earth-like, the optimal size for a rocky world \
                 with a substantial atmosphere.",
                radius
            )
        } else if radius < 1.75 {
            format!(
                "Radius {:.2} R⊕ is a super-Earth below the radius gap (~1.75 R⊕), \
                 most likely rocky.",
                radius
            )
        } else if radius < 2.5 {
            format!(
                "Radius {:.2} R⊕ is a sub-Neptune above the radius gap, likely with a \
                 thick H/He envelope.",
                radius
            )
        } else if radius < 4.0 {
            format!(
                "Radius {:.2} R⊕ is Neptune-like: an ice giant without a solid surface.",
                radius
            )
        } else {
            format!(
                "Radius {:.2} R⊕ is a gas giant (Jupiter is 11.2 R⊕); only its moons \
                 could be habitable.",
                radius
            )
        };

        Ok(
            FactorResult::new(self.factor_id(), banded_score(radius, Self::BANDS, 0.05))
                .with_input(format!("{:.2}", radius), "Earth radii (R⊕)")
                .with_optimal_range("0.8 - 1.6 R⊕")
                .with_explanation(explanation)
                .with_confidence(ConfidenceLevel::High)
                .with_references(Self::REFERENCES),
        )
    }
}

/// Mass: atmosphere retention and geological activity.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanetMassFactor;

impl PlanetMassFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Lopez & Fortney (2014) ApJ 792:1 - Mass-radius relations",
        "Dorn et al. (2017) A&A 597:A37 - Interior structure",
    ];

    const BANDS: &'static [(f64, f64)] =
        &[(0.1, 0.15), (0.5, 0.4), (2.0, 1.0), (5.0, 0.8), (10.0, 0.4)];
}

impl ScoringFactor for PlanetMassFactor {
    fn factor_id(&self) -> &str {
        "planet_mass"
    }

    fn factor_name(&self) -> &str {
        "Planet Mass"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Planetary
    }

    fn description(&self) -> &str {
        "Evaluates planet mass for atmosphere retention, geological activity and the \
         likelihood of a rocky composition."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        exoplanet: &ExoplanetEntity,
        _star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let Some(mass) = exoplanet.physical.mass_earth else {
            return Ok(missing_data_result(self, "planet_mass_earth"));
        };

        let explanation = if mass < 0.1 {
            format!(
                "Mass {:.2} M⊕ is too low to retain an atmosphere over geological time.",
                mass
            )
        } else if mass < 0.5 {
            format!(
                "Mass {:.2} M⊕ gives weak atmosphere retention; the interior may cool \
                 early and end plate tectonics.",
                mass
            )
        } else if mass < 2.0 {
            format!(
                "Mass {:.2} M⊕ is near Earth's, ideal for a lasting atmosphere and \
                 active geology.",
                mass
            )
        } else if mass < 5.0 {
            format!(
                "Mass {:.2} M⊕ is a massive rocky planet; it retains an atmosphere \
                 well and may be more geologically active.",
                mass
            )
        } else if mass < 10.0 {
            format!(
                "Mass {:.2} M⊕ approaches the point where planets accrete thick \
                 hydrogen envelopes.",
                mass
            )
        } else {
            format!(
                "Mass {:.2} M⊕ suggests a gas or ice giant rather than a rocky planet.",
                mass
            )
        };

        Ok(
            FactorResult::new(self.factor_id(), banded_score(mass, Self::BANDS, 0.1))
                .with_input(format!("{:.2}", mass), "Earth masses (M⊕)")
                .with_optimal_range("0.5 - 5.0 M⊕")
                .with_explanation(explanation)
                .with_confidence(ConfidenceLevel::High)
                .with_references(Self::REFERENCES),
        )
    }
}

/// Bulk density as a composition proxy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanetDensityFactor;

impl PlanetDensityFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Zeng et al. (2016) ApJ 819:127 - Mass-radius-composition",
        "Fortney et al. (2007) ApJ 659:1661 - Planetary structure",
    ];

    const BANDS: &'static [(f64, f64)] =
        &[(1.0, 0.05), (2.0, 0.2), (3.5, 0.5), (5.0, 0.85), (6.5, 1.0)];
}

impl ScoringFactor for PlanetDensityFactor {
    fn factor_id(&self) -> &str {
        "planet_density"
    }

    fn factor_name(&self) -> &str {
        "Planet Bulk Density"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Planetary
    }

    fn description(&self) -> &str {
        "Infers composition from bulk density. Rocky planets exceed about 3 g/cm³; \
         gas-rich planets are far less dense."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        exoplanet: &ExoplanetEntity,
        _star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let Some(density) = exoplanet.physical.estimate_density() else {
            return Ok(missing_data_result(self, "planet_density"));
        };

        let explanation = if density < 1.0 {
            format!("Density {:.2} g/cm³ indicates a gas giant.", density)
        } else if density < 2.0 {
            format!(
                "Density {:.2} g/cm³ suggests an ice giant or a water world with a \
                 large volatile fraction.",
                density
            )
        } else if density < 3.5 {
            format!(
                "Density {:.2} g/cm³ fits a mixed rock and volatile composition.",
                density
            )
        } else if density < 5.0 {
            format!(
                "Density {:.2} g/cm³ indicates a rocky planet with a smaller iron core \
                 than Earth's.",
                density
            )
        } else if density < 6.5 {
            format!(
                "Density {:.2} g/cm³ is Earth-like (5.51 g/cm³): rock with an iron core.",
                density
            )
        } else {
            format!(
                "Density {:.2} g/cm³ implies an iron-rich, Mercury-like composition.",
                density
            )
        };

        Ok(
            FactorResult::new(self.factor_id(), banded_score(density, Self::BANDS, 0.7))
                .with_input(format!("{:.2}", density), "g/cm³")
                .with_optimal_range("4.0 - 6.0 g/cm³")
                .with_explanation(explanation)
                .with_confidence(ConfidenceLevel::Medium)
                .with_references(Self::REFERENCES),
        )
    }
}

/// Equilibrium temperature against the liquid-water window.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquilibriumTemperatureFactor;

impl EquilibriumTemperatureFactor {
    const REFERENCES: &'static [&'static str] = &[
        "Kasting et al. (1993) Icarus 101:108-128",
        "Kopparapu et al. (2013) ApJ 765:131",
    ];

    const BANDS: &'static [(f64, f64)] = &[
        (150.0, 0.05),
        (200.0, 0.3),
        (230.0, 0.6),
        (260.0, 0.9),
        (300.0, 1.0),
        (350.0, 0.6),
        (450.0, 0.2),
    ];
}

impl ScoringFactor for EquilibriumTemperatureFactor {
    fn factor_id(&self) -> &str {
        "equilibrium_temperature"
    }

    fn factor_name(&self) -> &str {
        "Equilibrium Temperature"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Planetary
    }

    fn description(&self) -> &str {
        "Assesses the planet's temperature without atmospheric warming. The optimal \
         range allows liquid water under an Earth-like greenhouse."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        exoplanet: &ExoplanetEntity,
        _star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let Some(temp) = exoplanet.physical.equilibrium_temp_k else {
            return Ok(missing_data_result(self, "equilibrium_temp_k"));
        };

        let explanation = if temp < 200.0 {
            format!(
                "Equilibrium temperature {:.0} K is very cold; liquid water would need \
                 an extreme greenhouse effect.",
                temp
            )
        } else if temp < 260.0 {
            format!(
                "Equilibrium temperature {:.0} K is cool; a moderate greenhouse (Earth \
                 adds about 33 K to its 255 K) could keep water liquid.",
                temp
            )
        } else if temp < 300.0 {
            format!(
                "Equilibrium temperature {:.0} K is temperate and favours liquid water.",
                temp
            )
        } else if temp < 350.0 {
            format!(
                "Equilibrium temperature {:.0} K is warm; a thick atmosphere risks a \
                 runaway greenhouse.",
                temp
            )
        } else {
            format!(
                "Equilibrium temperature {:.0} K is too hot for surface liquid water.",
                temp
            )
        };

        Ok(
            FactorResult::new(self.factor_id(), banded_score(temp, Self::BANDS, 0.02))
                .with_input(format!("{:.0}", temp), "Kelvin")
                .with_optimal_range("230 - 300 K")
                .with_explanation(explanation)
                .with_confidence(ConfidenceLevel::Medium)
                .with_references(Self::REFERENCES),
        )
    }
}

/// Surface gravity from mass and radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceGravityFactor;

impl SurfaceGravityFactor {
    const REFERENCES: &'static [&'static str] =
        &["Heller & Armstrong (2014) Astrobiology 14:50-66 - Superhabitable worlds"];

    const BANDS: &'static [(f64, f64)] =
        &[(0.3, 0.3), (0.7, 0.6), (1.5, 1.0), (2.5, 0.7), (4.0, 0.3)];
}

impl ScoringFactor for SurfaceGravityFactor {
    fn factor_id(&self) -> &str {
        "surface_gravity"
    }

    fn factor_name(&self) -> &str {
        "Surface Gravity"
    }

    fn category(&self) -> FactorCategory {
        FactorCategory::Planetary
    }

    fn description(&self) -> &str {
        "Assesses surface gravity for atmosphere retention and biological \
         compatibility. Moderate gravity is optimal."
    }

    fn references(&self) -> &[&str] {
        Self::REFERENCES
    }

    fn evaluate(
        &self,
        exoplanet: &ExoplanetEntity,
        _star: &StarEntity,
    ) -> Result<FactorResult, FactorError> {
        let Some(gravity) = exoplanet.physical.surface_gravity_earth() else {
            return Ok(missing_data_result(self, "surface_gravity"));
        };

        let explanation = if gravity < 0.3 {
            format!(
                "Surface gravity {:.2} g is too weak to hold an atmosphere for long.",
                gravity
            )
        } else if gravity < 0.7 {
            format!(
                "Surface gravity {:.2} g is low; atmosphere retention is possible but \
                 escape is faster than on Earth.",
                gravity
            )
        } else if gravity < 1.5 {
            format!(
                "Surface gravity {:.2} g is Earth-like and ideal for complex life.",
                gravity
            )
        } else if gravity < 2.5 {
            format!(
                "Surface gravity {:.2} g is high but tolerable; it aids atmosphere \
                 retention.",
                gravity
            )
        } else if gravity < 4.0 {
            format!(
                "Surface gravity {:.2} g is very high and would strongly constrain \
                 biology.",
                gravity
            )
        } else {
            format!(
                "Surface gravity {:.2} g is extreme and points to a giant planet.",
                gravity
            )
        };

        Ok(
            FactorResult::new(self.factor_id(), banded_score(gravity, Self::BANDS, 0.1))
                .with_input(format!("{:.2}", gravity), "g (Earth = 1.0)")
                .with_optimal_range("0.7 - 1.5 g")
                .with_explanation(explanation)
                .with_confidence(ConfidenceLevel::Medium)
                .with_references(Self::REFERENCES),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exoplanet::PhysicalParameters;

    fn planet(physical: PhysicalParameters) -> ExoplanetEntity {
        ExoplanetEntity::new("b").with_physical(physical)
    }

    fn radius(r: f64) -> ExoplanetEntity {
        planet(PhysicalParameters {
            radius_earth: Some(r),
            ..Default::default()
        })
    }

    fn score(factor: &dyn ScoringFactor, p: &ExoplanetEntity) -> f64 {
        factor.evaluate(p, &StarEntity::default()).unwrap().score
    }

    #[test]
    fn radius_curve_breakpoints() {
        let cases = [
            (0.3, 0.3),
            (0.5, 0.6),
            (0.8, 1.0),
            (1.0, 1.0),
            (1.25, 0.85),
            (1.75, 0.4),
            (2.5, 0.15),
            (4.0, 0.05),
            (11.2, 0.05),
        ];
        for (r, expected) in cases {
            assert_eq!(score(&PlanetRadiusFactor, &radius(r)), expected, "radius {}", r);
        }
    }

    #[test]
    fn radius_explanations_name_the_regime() {
        let earth = PlanetRadiusFactor
            .evaluate(&radius(1.0), &StarEntity::default())
            .unwrap();
        assert!(earth.explanation.contains("Earth-like"));
        assert_eq!(earth.confidence, ConfidenceLevel::High);
        let giant = PlanetRadiusFactor
            .evaluate(&radius(11.2), &StarEntity::default())
            .unwrap();
        assert!(giant.explanation.contains("gas giant"));
    }

    #[test]
    fn mass_curve_breakpoints() {
        let cases = [(0.05, 0.15), (0.3, 0.4), (1.0, 1.0), (3.0, 0.8), (7.0, 0.4), (318.0, 0.1)];
        for (m, expected) in cases {
            let p = planet(PhysicalParameters {
                mass_earth: Some(m),
                ..Default::default()
            });
            assert_eq!(score(&PlanetMassFactor, &p), expected, "mass {}", m);
        }
    }

    #[test]
    fn density_is_estimated_from_mass_and_radius() {
        let earth = planet(PhysicalParameters {
            radius_earth: Some(1.0),
            mass_earth: Some(1.0),
            ..Default::default()
        });
        let result = PlanetDensityFactor
            .evaluate(&earth, &StarEntity::default())
            .unwrap();
        assert_eq!(result.score, 1.0);
        assert_eq!(result.input_value.as_deref(), Some("5.51"));
    }

    #[test]
    fn density_curve_and_measured_value() {
        let cases = [(0.7, 0.05), (1.6, 0.2), (3.0, 0.5), (4.5, 0.85), (5.5, 1.0), (8.0, 0.7)];
        for (d, expected) in cases {
            let p = planet(PhysicalParameters {
                density_g_cm3: Some(d),
                ..Default::default()
            });
            assert_eq!(score(&PlanetDensityFactor, &p), expected, "density {}", d);
        }
    }

    #[test]
    fn temperature_curve() {
        let cases = [
            (100.0, 0.05),
            (180.0, 0.3),
            (220.0, 0.6),
            (255.0, 0.9),
            (288.0, 1.0),
            (320.0, 0.6),
            (400.0, 0.2),
            (1400.0, 0.02),
        ];
        for (t, expected) in cases {
            let p = planet(PhysicalParameters {
                equilibrium_temp_k: Some(t),
                ..Default::default()
            });
            assert_eq!(score(&EquilibriumTemperatureFactor, &p), expected, "temp {}", t);
        }
    }

    #[test]
    fn gravity_curve() {
        let cases = [
            ((0.1, 1.0), 0.3),
            ((0.5, 1.0), 0.6),
            ((1.0, 1.0), 1.0),
            ((2.0, 1.0), 0.7),
            ((3.0, 1.0), 0.3),
            ((318.0, 11.2), 0.3),
            ((50.0, 2.0), 0.1),
        ];
        for ((m, r), expected) in cases {
            let p = planet(PhysicalParameters {
                mass_earth: Some(m),
                radius_earth: Some(r),
                ..Default::default()
            });
            assert_eq!(score(&SurfaceGravityFactor, &p), expected, "m {} r {}", m, r);
        }
    }

    #[test]
    fn each_factor_reports_its_missing_field() {
        let empty = ExoplanetEntity::new("b");
        let star = StarEntity::default();
        let cases: [(&dyn ScoringFactor, &str); 5] = [
            (&PlanetRadiusFactor, "planet_radius_earth"),
            (&PlanetMassFactor, "planet_mass_earth"),
            (&PlanetDensityFactor, "planet_density"),
            (&EquilibriumTemperatureFactor, "equilibrium_temp_k"),
            (&SurfaceGravityFactor, "surface_gravity"),
        ];
        for (factor, field) in cases {
            let result = factor.evaluate(&empty, &star).unwrap();
            assert!(!result.is_applicable);
            assert_eq!(result.missing_data.as_deref(), Some(field));
        }
    }
}
