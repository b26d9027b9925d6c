//! Report aggregation.

pub mod report;

pub use report::Report;
