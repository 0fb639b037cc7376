pub mod models;
pub mod source;
pub mod error;

// Re-exports
pub use models::CounterRow;
pub use source::{CounterSource, Database, DbConfig};
pub use error::{Error, Result};
