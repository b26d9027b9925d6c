use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Open position on a symbol, supplied from outside the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionStatus {
    /// No open position (configured as `NONE`).
    #[default]
    #[serde(rename = "NONE", alias = "FLAT")]
    Flat,
    Long,
    Short,
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PositionStatus::Flat => "NONE",
            PositionStatus::Long => "LONG",
            PositionStatus::Short => "SHORT",
        };
        f.write_str(s)
    }
}

impl FromStr for PositionStatus {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" | "NONE" | "FLAT" => Ok(PositionStatus::Flat),
            "LONG" => Ok(PositionStatus::Long),
            "SHORT" => Ok(PositionStatus::Short),
            other => Err(ConfigError::Invalid(format!("unknown position status '{}'", other))),
        }
    }
}
