// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Parameter values and tracking

use serde::{Deserialize, Serialize};

use super::{InputTag, ParameterSet};

/// A typed parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    Bool(bool),
    Int32(i32),
    Uint32(u32),
    Double(f64),
    String(String),
    Vstring(Vec<String>),
    InputTag(InputTag),
    Pset(ParameterSet),
}

impl ParamValue {
    /// Name of the value's type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int32(_) => "int32",
            Self::Uint32(_) => "uint32",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Vstring(_) => "vstring",
            Self::InputTag(_) => "input_tag",
            Self::Pset(_) => "pset",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Int32(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Self::Uint32(u) => Some(*u),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_vstring(&self) -> Option<&[String]> {
        match self {
            Self::Vstring(v) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn as_input_tag(&self) -> Option<&InputTag> {
        match self {
            Self::InputTag(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_pset(&self) -> Option<&ParameterSet> {
        match self {
            Self::Pset(p) => Some(p),
            _ => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        Self::Uint32(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(v: Vec<String>) -> Self {
        Self::Vstring(v)
    }
}

impl From<InputTag> for ParamValue {
    fn from(v: InputTag) -> Self {
        Self::InputTag(v)
    }
}

impl From<ParameterSet> for ParamValue {
    fn from(v: ParameterSet) -> Self {
        Self::Pset(v)
    }
}

/// A value plus its tracking flag
///
/// Untracked parameters are excluded from provenance by the execution
/// engine; the descriptor only records the flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default = "default_tracked")]
    pub tracked: bool,

    #[serde(flatten)]
    pub value: ParamValue,
}

fn default_tracked() -> bool {
    true
}

impl Parameter {
    /// A tracked parameter (the default)
    pub fn tracked(value: impl Into<ParamValue>) -> Self {
        Self {
            tracked: true,
            value: value.into(),
        }
    }

    /// An untracked parameter
    pub fn untracked(value: impl Into<ParamValue>) -> Self {
        Self {
            tracked: false,
            value: value.into(),
        }
    }
}
