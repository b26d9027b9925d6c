use serde::{Deserialize, Serialize};

use crate::models::strategy::StrategyKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    EntryLong,
    EntryShort,
    ExitLong,
    ExitShort,
    Status,
    StopBreach,
}

impl AlertKind {
    pub fn is_entry(&self) -> bool {
        matches!(self, AlertKind::EntryLong | AlertKind::EntryShort)
    }

    pub fn is_exit(&self) -> bool {
        matches!(
            self,
            AlertKind::ExitLong | AlertKind::ExitShort | AlertKind::StopBreach
        )
    }
}

/// One symbol's contribution to the run's report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub symbol: String,
    pub strategy: StrategyKind,
    pub kind: AlertKind,
    pub text: String,
}

impl AlertRecord {
    pub fn new(
        symbol: impl Into<String>,
        strategy: StrategyKind,
        kind: AlertKind,
        text: String,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            strategy,
            kind,
            text,
        }
    }
}
