//! Yahoo Finance chart API.

pub mod messages;
pub mod provider;

pub use provider::YahooFinanceProvider;
