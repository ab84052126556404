//! Record store access for the counter item.

pub mod dynamo;
pub mod memory;

use async_trait::async_trait;

use crate::core::models::CounterRecord;
use crate::errors::CounterError;

pub use dynamo::DynamoCounterStore;
pub use memory::InMemoryCounterStore;

/// Key-value store holding counter records by identifier.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Point lookup. `Ok(None)` when no record exists for `id`.
    async fn get(&self, id: &str) -> Result<Option<CounterRecord>, CounterError>;

    /// Unconditional upsert.
    async fn put(&self, record: &CounterRecord) -> Result<(), CounterError>;

    /// Adds one to an existing record's count in a single store operation and
    /// returns the new value. Fails if the record does not exist.
    async fn increment(&self, id: &str) -> Result<u64, CounterError>;
}
