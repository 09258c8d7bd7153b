use serde::{Deserialize, Serialize};
use std::str::FromStr;
use anyhow::{anyhow, Error};

use crate::model::period::PeriodType;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unknown output format: '{}'", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// Period used by `period` when no type is given.
    #[serde(default)]
    pub default_period: PeriodType,
    #[serde(default)]
    pub output: OutputFormat,
}
