//! Scoring file discovery

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::scoring::{ScoringConfig, ScoringConfigError};

/// Process-level override for the scoring file, outside the `EXOHAB` prefix.
pub const SCORING_CONFIG_ENV: &str = "EXOHABITABILITY_SCORING_CONFIG";

/// Conventional locations, relative to the working directory.
pub const DEFAULT_SCORING_PATHS: [&str; 2] = ["config/scoring.yaml", "config/scoring.yml"];

/// Where the scoring weights come from
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ScoringSettings {
    /// Explicit YAML file; must exist when set
    #[serde(default)]
    pub config_path: Option<PathBuf>,
}

impl ScoringSettings {
    /// Loads the scoring configuration.
    ///
    /// Order: `config_path`, then `EXOHABITABILITY_SCORING_CONFIG`, then
    /// the conventional locations under the working directory. With no
    /// file anywhere the built-in defaults apply.
    ///
    /// # Errors
    ///
    /// `NotFound` when an explicitly named file is missing, or any read,
    /// parse or range error from the file itself.
    pub fn load_scoring_config(&self) -> Result<ScoringConfig, ScoringConfigError> {
        let from_env = std::env::var_os(SCORING_CONFIG_ENV).map(PathBuf::from);
        self.load_from(from_env, Path::new("."))
    }

    fn load_from(
        &self,
        from_env: Option<PathBuf>,
        base_dir: &Path,
    ) -> Result<ScoringConfig, ScoringConfigError> {
        if let Some(path) = self.config_path.as_ref().or(from_env.as_ref()) {
            tracing::info!(path = %path.display(), "Loading scoring configuration");
            return ScoringConfig::load_yaml(path);
        }

        for candidate in DEFAULT_SCORING_PATHS {
            let path = base_dir.join(candidate);
            if path.is_file() {
                tracing::info!(path = %path.display(), "Loading scoring configuration");
                return ScoringConfig::load_yaml(&path);
            }
        }

        tracing::info!("No scoring configuration file found, using defaults");
        Ok(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::NormalizationMethod;
    use std::fs;

    fn write(path: &Path, body: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn test_defaults_when_nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScoringSettings::default().load_from(None, dir.path()).unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn test_conventional_yaml_location() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join("config/scoring.yml"),
            "normalization_method: minimum\n",
        );

        let config = ScoringSettings::default().load_from(None, dir.path()).unwrap();
        assert_eq!(config.normalization_method(), NormalizationMethod::Minimum);
    }

    #[test]
    fn test_yaml_extension_wins_over_yml() {
        let dir = tempfile::tempdir().unwrap();
        write(
            &dir.path().join("config/scoring.yaml"),
            "normalization_method: geometric_mean\n",
        );
        write(
            &dir.path().join("config/scoring.yml"),
            "normalization_method: minimum\n",
        );

        let config = ScoringSettings::default().load_from(None, dir.path()).unwrap();
        assert_eq!(config.normalization_method(), NormalizationMethod::GeometricMean);
    }

    #[test]
    fn test_explicit_path_wins_over_env() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("explicit.yaml");
        let from_env = dir.path().join("env.yaml");
        write(&explicit, "minimum_factors: 7\n");
        write(&from_env, "minimum_factors: 2\n");

        let settings = ScoringSettings {
            config_path: Some(explicit),
        };
        let config = settings.load_from(Some(from_env), dir.path()).unwrap();
        assert_eq!(config.minimum_factors(), 7);
    }

    #[test]
    fn test_env_path_used_without_explicit() {
        let dir = tempfile::tempdir().unwrap();
        let from_env = dir.path().join("env.yaml");
        write(&from_env, "minimum_factors: 2\n");

        let config = ScoringSettings::default()
            .load_from(Some(from_env), dir.path())
            .unwrap();
        assert_eq!(config.minimum_factors(), 2);
    }

    #[test]
    fn test_missing_explicit_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ScoringSettings {
            config_path: Some(dir.path().join("absent.yaml")),
        };
        let err = settings.load_from(None, dir.path()).unwrap_err();
        assert!(matches!(err, ScoringConfigError::NotFound(_)));
    }
}
