//! Sanitized host-system name.

use crate::error::AppError;
use crate::utils::system_name::{sanitize_system_name, validate_system_name};

/// A host-system name that passed length validation and was sanitized.
///
/// May be empty when the raw input consisted only of disallowed characters;
/// an empty name is a prefix of every host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemName(String);

impl SystemName {
    /// Validates `raw` and strips disallowed characters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `raw` is empty or too long.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        validate_system_name(raw)?;
        Ok(Self(sanitize_system_name(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SystemName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validates_before_sanitizing() {
        // 51 disallowed characters would sanitize to "", but the raw length is checked first.
        assert!(SystemName::parse(&"!".repeat(51)).is_err());
    }

    #[test]
    fn test_parse_allows_empty_after_sanitizing() {
        let name = SystemName::parse("!!!").unwrap();
        assert!(name.is_empty());
    }

    #[test]
    fn test_parse_sanitizes() {
        assert_eq!(SystemName::parse("TRAPPIST-1").unwrap().as_str(), "TRAPPIST-1");
        assert_eq!(SystemName::parse("Kepler<>").unwrap().as_str(), "Kepler");
    }
}
