//! Indicator library. Series functions return one slot per bar, `None`
//! until enough history has accumulated; evaluators read the last slot.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use momentum::{calculate_rsi, rsi_series};
pub use structure::{calculate_donchian, donchian_series};
pub use trend::{calculate_ema, ema_series};
pub use volatility::{atr_series, calculate_atr, true_range_series};
