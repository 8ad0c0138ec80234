//! Encoder configuration.

use radix_base::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;

use crate::base::Base;

/// How the numeral base for weighted constraints is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseStrategy {
    /// Branch-and-bound search for the cheapest base.
    #[default]
    Optimal,
    /// All-binary base sized to the largest weight.
    Binary,
    /// Use this base for every constraint.
    Fixed(Base),
}

/// Configuration for the `Encoder`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Emit redundant ordering clauses after every merge.
    pub ordering_clauses: bool,
    /// Base selection for weighted constraints.
    pub base: BaseStrategy,
}

impl EncoderConfig {
    /// Parses configuration from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// Parses configuration from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serializes configuration as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}
