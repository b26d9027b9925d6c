//! Straznik: watchlist scanner for mean-reversion and trend-following alerts.
//!
//! One scan fetches a fresh daily price history per symbol, computes the
//! indicators each strategy needs, applies position-aware decision rules and
//! sends a single aggregated message when anything fired.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;
pub mod strategies;
