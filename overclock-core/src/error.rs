//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Rack not found
    #[error("Rack not found: {0}")]
    RackNotFound(String),

    /// Zone not found
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    /// A rack with the same id already exists
    #[error("Duplicate rack id: {0}")]
    DuplicateRack(String),

    /// Validation error (facility invariants, malformed selection ids)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::RackNotFound(_) | Self::ZoneNotFound(_) | Self::DuplicateRack(_) => true,
            Self::Validation(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_errors_are_expected() {
        assert!(CoreError::RackNotFound("eda-0-0".into()).is_expected());
        assert!(CoreError::DuplicateRack("mda-1".into()).is_expected());
        assert!(!CoreError::Validation("two MDA racks".into()).is_expected());
    }

    #[test]
    fn error_serializes_with_code_tag() {
        let json = serde_json::to_value(CoreError::ZoneNotFound("zone-9".into())).unwrap();
        assert_eq!(json["code"], "ZoneNotFound");
        assert_eq!(json["details"], "zone-9");
    }
}
