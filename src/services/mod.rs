//! External collaborators: market data, positions, notifications.

pub mod market_data;
pub mod notifier;
pub mod positions;
pub mod yahoo;

pub use market_data::{Lookback, MarketDataProvider};
pub use notifier::{Notifier, TelegramNotifier};
pub use positions::{PositionBook, StaticPositionBook};
pub use yahoo::YahooFinanceProvider;
