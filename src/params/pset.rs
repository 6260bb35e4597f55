// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Ordered parameter sets

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{InputTag, ParamValue, Parameter};

/// A named record of typed parameters
///
/// Iteration order is name order, so serialization and equality are
/// deterministic: building the same set twice yields identical records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    params: BTreeMap<String, Parameter>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tracked parameter, replacing any existing one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.insert(name.into(), Parameter::tracked(value));
    }

    /// Insert an untracked parameter, replacing any existing one
    pub fn insert_untracked(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.insert(name.into(), Parameter::untracked(value));
    }

    /// Builder-style insert for chaining
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Builder-style untracked insert for chaining
    pub fn with_untracked(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert_untracked(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.get(name)
    }

    pub fn get_value(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name).map(|p| &p.value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter names in iteration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get_value(name).and_then(ParamValue::as_bool)
    }

    pub fn get_i32(&self, name: &str) -> Option<i32> {
        self.get_value(name).and_then(ParamValue::as_i32)
    }

    pub fn get_u32(&self, name: &str) -> Option<u32> {
        self.get_value(name).and_then(ParamValue::as_u32)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get_value(name).and_then(ParamValue::as_f64)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get_value(name).and_then(ParamValue::as_str)
    }

    pub fn get_input_tag(&self, name: &str) -> Option<&InputTag> {
        self.get_value(name).and_then(ParamValue::as_input_tag)
    }

    /// Overlay `overrides` on top of this set, yielding a new set
    ///
    /// Named-template instantiation with override: fields present in
    /// `overrides` replace the defaults, everything else is kept.
    pub fn overriding(&self, overrides: &ParameterSet) -> Self {
        let mut merged = self.clone();
        for (name, param) in &overrides.params {
            merged.params.insert(name.clone(), param.clone());
        }
        merged
    }

    /// All input tags in this set, including those inside nested sets
    pub fn input_tags(&self) -> Vec<&InputTag> {
        let mut tags = Vec::new();
        for param in self.params.values() {
            match &param.value {
                ParamValue::InputTag(tag) => tags.push(tag),
                ParamValue::Pset(nested) => tags.extend(nested.input_tags()),
                _ => {}
            }
        }
        tags
    }
}

impl FromIterator<(String, Parameter)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (String, Parameter)>>(iter: T) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}
