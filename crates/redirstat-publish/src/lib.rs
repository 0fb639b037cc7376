pub mod publisher;
pub mod error;

// Re-exports
pub use publisher::{ApiConfig, ApiResponse, Publisher};
pub use error::{Error, Result};
