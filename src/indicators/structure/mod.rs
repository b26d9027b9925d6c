//! Market structure indicators: Donchian channel

pub mod donchian;

pub use donchian::*;
