//! Type-safe configuration types for aurdot
//!
//! This module replaces stringly-typed configuration with proper Rust enums
//! that provide compile-time validation and exhaustive matching.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// AUR helper selection
///
/// The display string doubles as the program name invoked, unless the
/// configuration overrides it with an explicit command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AurHelper {
    #[default]
    #[strum(serialize = "pacaur")]
    Pacaur,
    #[strum(serialize = "paru")]
    Paru,
    #[strum(serialize = "yay")]
    Yay,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_aur_helper_display() {
        assert_eq!(AurHelper::Pacaur.to_string(), "pacaur");
        assert_eq!(AurHelper::Paru.to_string(), "paru");
        assert_eq!(AurHelper::Yay.to_string(), "yay");
    }

    #[test]
    fn test_aur_helper_parsing() {
        assert_eq!(AurHelper::from_str("pacaur").unwrap(), AurHelper::Pacaur);
        assert_eq!(AurHelper::from_str("paru").unwrap(), AurHelper::Paru);
        assert_eq!(AurHelper::from_str("yay").unwrap(), AurHelper::Yay);
        assert!(AurHelper::from_str("brew").is_err());
    }

    #[test]
    fn test_aur_helper_default() {
        assert_eq!(AurHelper::default(), AurHelper::Pacaur);
    }

    #[test]
    fn test_aur_helper_iteration() {
        let helpers: Vec<String> = AurHelper::iter().map(|h| h.to_string()).collect();
        assert_eq!(helpers, vec!["pacaur", "paru", "yay"]);
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = AurHelper::Yay;
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, "\"yay\"");
        let parsed: AurHelper = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }
}
