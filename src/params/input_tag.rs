// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Tagged references to another module's products

use serde::{Deserialize, Serialize};

use crate::errors::EdmflowError;

/// Reference to a data product by producing module, instance, and process
///
/// The compact text form is `label`, `label:instance`, or
/// `label:instance:process`, e.g. `kt6PFJets:rho`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTag {
    /// Label of the producing module
    pub label: String,

    /// Product instance name (empty = default instance)
    #[serde(default)]
    pub instance: String,

    /// Process name (empty = any process)
    #[serde(default)]
    pub process: String,
}

impl InputTag {
    /// Tag referencing a module's default product instance
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instance: String::new(),
            process: String::new(),
        }
    }

    /// Tag referencing a named product instance
    pub fn with_instance(label: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instance: instance.into(),
            process: String::new(),
        }
    }
}

impl std::fmt::Display for InputTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)?;
        if !self.instance.is_empty() || !self.process.is_empty() {
            write!(f, ":{}", self.instance)?;
        }
        if !self.process.is_empty() {
            write!(f, ":{}", self.process)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for InputTag {
    type Err = EdmflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if s.is_empty() || parts.len() > 3 || parts[0].is_empty() {
            return Err(EdmflowError::InvalidInputTag { tag: s.to_string() });
        }

        Ok(Self {
            label: parts[0].to_string(),
            instance: parts.get(1).unwrap_or(&"").to_string(),
            process: parts.get(2).unwrap_or(&"").to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_only() {
        let tag: InputTag = "gsfElectrons".parse().unwrap();
        assert_eq!(tag.label, "gsfElectrons");
        assert!(tag.instance.is_empty());
        assert!(tag.process.is_empty());
    }

    #[test]
    fn test_parse_label_and_instance() {
        let tag: InputTag = "kt6PFJets:rho".parse().unwrap();
        assert_eq!(tag.label, "kt6PFJets");
        assert_eq!(tag.instance, "rho");
        assert!(tag.process.is_empty());
    }

    #[test]
    fn test_parse_full_tag() {
        let tag: InputTag = "calibratedElectrons:calibratedGsfElectrons:ExREG"
            .parse()
            .unwrap();
        assert_eq!(tag.label, "calibratedElectrons");
        assert_eq!(tag.instance, "calibratedGsfElectrons");
        assert_eq!(tag.process, "ExREG");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("".parse::<InputTag>().is_err());
        assert!(":rho".parse::<InputTag>().is_err());
        assert!("a:b:c:d".parse::<InputTag>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["gsfElectrons", "kt6PFJets:rho", "a:b:c"] {
            let tag: InputTag = text.parse().unwrap();
            assert_eq!(tag.to_string(), text);
        }
    }
}
