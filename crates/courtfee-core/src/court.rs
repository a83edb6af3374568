//! # Court Type — Single Source of Truth
//!
//! Defines the `CourtType` enum. Each variant owns exactly one tariff
//! schedule, and every exemption category lists the variants it applies to.
//! Every `match` on `CourtType` must be exhaustive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Jurisdiction a claim is filed in.
///
/// | Variant | Courts | Statute |
/// |---------|--------|---------|
/// | General | Courts of general jurisdiction (civil) | ст. 333.19 НК РФ |
/// | Arbitration | Arbitration (commercial) courts | ст. 333.21 НК РФ |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtType {
    /// Courts of general jurisdiction.
    General,
    /// Arbitration (commercial) courts.
    Arbitration,
}

impl CourtType {
    /// All court types in canonical order.
    pub fn all() -> &'static [CourtType] {
        &[Self::General, Self::Arbitration]
    }

    /// The snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Arbitration => "arbitration",
        }
    }

    /// Human-readable court system name.
    pub fn title(&self) -> &'static str {
        match self {
            Self::General => "Суды общей юрисдикции",
            Self::Arbitration => "Арбитражные суды",
        }
    }
}

impl std::fmt::Display for CourtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourtType {
    type Err = ValidationError;

    /// Parse a court type from its snake_case identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Self::General),
            "arbitration" => Ok(Self::Arbitration),
            other => Err(ValidationError::UnknownCourtType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_count() {
        assert_eq!(CourtType::all().len(), 2);
    }

    #[test]
    fn test_as_str_roundtrip() {
        for court in CourtType::all() {
            let parsed: CourtType = court.as_str().parse().unwrap();
            assert_eq!(*court, parsed);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "civil".parse::<CourtType>(),
            Err(ValidationError::UnknownCourtType("civil".to_string()))
        );
        assert!("General".parse::<CourtType>().is_err()); // case-sensitive
        assert!("".parse::<CourtType>().is_err());
    }

    #[test]
    fn test_serde_format_matches_as_str() {
        for court in CourtType::all() {
            let json = serde_json::to_string(court).unwrap();
            assert_eq!(json, format!("\"{}\"", court.as_str()));
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        for court in CourtType::all() {
            assert_eq!(court.to_string(), court.as_str());
        }
    }
}
