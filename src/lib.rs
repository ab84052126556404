//! Visitor counter - the backend for a static website's visitor count.
//!
//! This crate implements two Lambda functions behind an HTTP gateway:
//! 1. A read Lambda that returns the current count
//! 2. An increment Lambda that adds one to the count and returns the new value
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - DynamoDB for the single counter record
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```
//! use visitor_counter::core::config::AppConfig;
//! use visitor_counter::core::models::CounterRecord;
//! use visitor_counter::store::InMemoryCounterStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     let store = InMemoryCounterStore::with_record(CounterRecord::new("Visitors", 5));
//!
//!     let count = visitor_counter::counter::increment_counter(&store, &config).await?;
//!     assert_eq!(count, 6);
//!
//!     let response = visitor_counter::api::response::ok_count(&config.cors, count);
//!     assert_eq!(response["body"], "\"6\"");
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod counter;
pub mod errors;
pub mod store;

pub use errors::CounterError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`). It
/// should be called once at the start of each Lambda binary. Calling it again
/// is a no-op.
///
/// # Example
///
/// ```
/// visitor_counter::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
