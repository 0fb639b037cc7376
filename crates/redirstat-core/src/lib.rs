pub mod record;
pub mod stats;
pub mod xml;
pub mod error;

// Re-exports
pub use record::CounterRecord;
pub use stats::StatsTree;
pub use error::{Error, Result};
