//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a catalogued exoplanet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExoplanetId(Uuid);

impl ExoplanetId {
    /// Creates a new random ExoplanetId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an ExoplanetId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ExoplanetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExoplanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExoplanetId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a single habitability assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(Uuid);

impl AssessmentId {
    /// Creates a new random AssessmentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exoplanet_id_new_generates_unique_ids() {
        let id1 = ExoplanetId::new();
        let id2 = ExoplanetId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn exoplanet_id_parses_from_string() {
        let uuid = Uuid::new_v4();
        let id: ExoplanetId = uuid.to_string().parse().unwrap();
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn exoplanet_id_rejects_garbage() {
        assert!("kepler-442b".parse::<ExoplanetId>().is_err());
    }

    #[test]
    fn exoplanet_id_serializes_transparently() {
        let uuid = Uuid::new_v4();
        let id = ExoplanetId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }

    #[test]
    fn assessment_id_displays_as_uuid() {
        let id = AssessmentId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
