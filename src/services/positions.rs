//! Position lookup seam. The scanner asks this capability for a symbol's
//! current position instead of reading a hardcoded map, so a broker-backed
//! store can replace the static configuration.

use std::collections::HashMap;

use crate::models::position::PositionStatus;

pub trait PositionBook {
    /// Current position for a symbol. Unknown symbols are flat.
    fn position(&self, symbol: &str) -> PositionStatus;
}

/// Positions fixed for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct StaticPositionBook {
    positions: HashMap<String, PositionStatus>,
}

impl StaticPositionBook {
    pub fn new(positions: HashMap<String, PositionStatus>) -> Self {
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<(String, PositionStatus)> for StaticPositionBook {
    fn from_iter<I: IntoIterator<Item = (String, PositionStatus)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl PositionBook for StaticPositionBook {
    fn position(&self, symbol: &str) -> PositionStatus {
        self.positions.get(symbol).copied().unwrap_or_default()
    }
}
