// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Output filter rules
//!
//! An output descriptor carries an ordered list of `keep`/`drop` commands
//! over branch names of the form `type_label_instance_process`. Evaluation
//! is last-match-wins, with an implicit drop-all base rule, so
//! `drop *` followed by `keep *_*_*_ExREG` keeps exactly the products made
//! within the `ExREG` process.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{EdmflowError, EdmflowResult};

/// Whether a matched branch is written or not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Keep,
    Drop,
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Drop => write!(f, "drop"),
        }
    }
}

/// A fully resolved branch name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName {
    pub product_type: String,
    pub label: String,
    pub instance: String,
    pub process: String,
}

impl std::str::FromStr for BranchName {
    type Err = EdmflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('_').collect();
        if parts.len() != 4 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(EdmflowError::InvalidBranch {
                branch: s.to_string(),
            });
        }

        Ok(Self {
            product_type: parts[0].to_string(),
            label: parts[1].to_string(),
            instance: parts[2].to_string(),
            process: parts[3].to_string(),
        })
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            self.product_type, self.label, self.instance, self.process
        )
    }
}

/// A per-field wildcard pattern over branch names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPattern {
    product_type: String,
    label: String,
    instance: String,
    process: String,
}

impl BranchPattern {
    /// Pattern matching every branch
    pub fn any() -> Self {
        Self {
            product_type: "*".into(),
            label: "*".into(),
            instance: "*".into(),
            process: "*".into(),
        }
    }

    /// Pattern matching every branch produced in the given process
    pub fn own_process(process: &str) -> Self {
        Self {
            process: process.to_string(),
            ..Self::any()
        }
    }

    fn parse(pattern: &str, command: &str) -> EdmflowResult<Self> {
        if pattern == "*" {
            return Ok(Self::any());
        }

        // empty fields are legal and match only the empty component,
        // mirroring branch names with a default (empty) instance
        let parts: Vec<&str> = pattern.split('_').collect();
        if parts.len() != 4 {
            return Err(EdmflowError::InvalidOutputCommand {
                command: command.to_string(),
            });
        }

        Ok(Self {
            product_type: parts[0].to_string(),
            label: parts[1].to_string(),
            instance: parts[2].to_string(),
            process: parts[3].to_string(),
        })
    }

    pub fn matches(&self, branch: &BranchName) -> bool {
        field_matches(&self.product_type, &branch.product_type)
            && field_matches(&self.label, &branch.label)
            && field_matches(&self.instance, &branch.instance)
            && field_matches(&self.process, &branch.process)
    }
}

impl std::fmt::Display for BranchPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self == &Self::any() {
            write!(f, "*")
        } else {
            write!(
                f,
                "{}_{}_{}_{}",
                self.product_type, self.label, self.instance, self.process
            )
        }
    }
}

/// Match a single wildcard field against a branch component
fn field_matches(pattern: &str, text: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    if !pattern.contains('*') {
        return pattern == text;
    }

    let escaped: String = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    Regex::new(&format!("^{escaped}$")).map_or(false, |re| re.is_match(text))
}

/// One `keep`/`drop` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OutputCommand {
    pub selection: Selection,
    pub pattern: BranchPattern,
}

impl OutputCommand {
    pub fn keep(pattern: BranchPattern) -> Self {
        Self {
            selection: Selection::Keep,
            pattern,
        }
    }

    pub fn drop(pattern: BranchPattern) -> Self {
        Self {
            selection: Selection::Drop,
            pattern,
        }
    }
}

impl std::str::FromStr for OutputCommand {
    type Err = EdmflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next();
        let pattern = words.next();

        let (selection, pattern) = match (verb, pattern, words.next()) {
            (Some("keep"), Some(p), None) => (Selection::Keep, p),
            (Some("drop"), Some(p), None) => (Selection::Drop, p),
            _ => {
                return Err(EdmflowError::InvalidOutputCommand {
                    command: s.to_string(),
                })
            }
        };

        Ok(Self {
            selection,
            pattern: BranchPattern::parse(pattern, s)?,
        })
    }
}

impl std::fmt::Display for OutputCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.selection, self.pattern)
    }
}

impl TryFrom<String> for OutputCommand {
    type Error = EdmflowError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<OutputCommand> for String {
    fn from(cmd: OutputCommand) -> Self {
        cmd.to_string()
    }
}

/// Ordered output filter rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputRules {
    commands: Vec<OutputCommand>,
}

impl OutputRules {
    pub fn new(commands: Vec<OutputCommand>) -> Self {
        Self { commands }
    }

    /// Parse a list of textual commands in order
    pub fn parse<S: AsRef<str>>(commands: &[S]) -> EdmflowResult<Self> {
        commands
            .iter()
            .map(|c| c.as_ref().parse())
            .collect::<EdmflowResult<Vec<_>>>()
            .map(Self::new)
    }

    /// The canonical drop-everything-then-keep-own-products rule set
    pub fn drop_all_keep_process(process: &str) -> Self {
        Self::new(vec![
            OutputCommand::drop(BranchPattern::any()),
            OutputCommand::keep(BranchPattern::own_process(process)),
        ])
    }

    pub fn commands(&self) -> &[OutputCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Decide whether a branch is written; last matching command wins,
    /// unmatched branches are dropped
    pub fn selects(&self, branch: &BranchName) -> Selection {
        self.commands
            .iter()
            .rev()
            .find(|cmd| cmd.pattern.matches(branch))
            .map(|cmd| cmd.selection)
            .unwrap_or(Selection::Drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(s: &str) -> BranchName {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_drop_all() {
        let cmd: OutputCommand = "drop *".parse().unwrap();
        assert_eq!(cmd.selection, Selection::Drop);
        assert_eq!(cmd.pattern, BranchPattern::any());
    }

    #[test]
    fn test_parse_keep_own_process() {
        let cmd: OutputCommand = "keep *_*_*_ExREG".parse().unwrap();
        assert_eq!(cmd.selection, Selection::Keep);
        assert_eq!(cmd.pattern, BranchPattern::own_process("ExREG"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("retain *".parse::<OutputCommand>().is_err());
        assert!("keep".parse::<OutputCommand>().is_err());
        assert!("keep *_*_*".parse::<OutputCommand>().is_err());
        assert!("keep a_b_c_d extra".parse::<OutputCommand>().is_err());
    }

    #[test]
    fn test_empty_pattern_field_targets_default_instance() {
        let rules = OutputRules::parse(&["keep *_gsfElectrons__*"]).unwrap();

        assert_eq!(
            rules.selects(&branch("recoGsfElectrons_gsfElectrons__RECO")),
            Selection::Keep
        );
        // named instances don't match the empty field
        assert_eq!(
            rules.selects(&branch("double_gsfElectrons_rho_RECO")),
            Selection::Drop
        );
    }

    #[test]
    fn test_last_match_wins() {
        let rules =
            OutputRules::parse(&["drop *", "keep *_*_*_ExREG", "drop *_kt6PFJets_*_ExREG"])
                .unwrap();

        assert_eq!(
            rules.selects(&branch("doubleMap_calibratedElectrons_eneRegForGsfEle_ExREG")),
            Selection::Keep
        );
        assert_eq!(
            rules.selects(&branch("double_kt6PFJets_rho_ExREG")),
            Selection::Drop
        );
        assert_eq!(
            rules.selects(&branch("recoGsfElectrons_gsfElectrons__RECO")),
            Selection::Drop
        );
    }

    #[test]
    fn test_unmatched_defaults_to_drop() {
        let rules = OutputRules::parse(&["keep *_*_*_ExREG"]).unwrap();
        assert_eq!(
            rules.selects(&branch("recoPFJets_kt6PFJets__RECO")),
            Selection::Drop
        );
    }

    #[test]
    fn test_partial_wildcard_field() {
        let rules = OutputRules::parse(&["keep reco*_gsfElectrons_*_*"]).unwrap();
        assert_eq!(
            rules.selects(&branch("recoGsfElectrons_gsfElectrons__RECO")),
            Selection::Keep
        );
        assert_eq!(
            rules.selects(&branch("patElectrons_gsfElectrons__RECO")),
            Selection::Drop
        );
    }

    #[test]
    fn test_canonical_rules_round_trip() {
        let rules = OutputRules::drop_all_keep_process("ExREG");
        let yaml = serde_yaml::to_string(&rules).unwrap();
        let back: OutputRules = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, rules);
        assert_eq!(rules.commands()[0].to_string(), "drop *");
        assert_eq!(rules.commands()[1].to_string(), "keep *_*_*_ExREG");
    }
}
