// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported listings

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured terminal output
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Machine-readable rendering. `Text` has no serialized form and falls
    /// back to JSON.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Json | OutputFormat::Text => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}
