//! Scan orchestration and scheduling.

pub mod bootstrap;
pub mod scanner;
pub mod scheduler;

pub use bootstrap::build_scanner;
pub use scanner::{ScanOutcome, Scanner};
pub use scheduler::ScanScheduler;
