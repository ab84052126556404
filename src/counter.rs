//! The two counter operations, independent of the Lambda runtime.

use tracing::info;

use crate::core::config::AppConfig;
use crate::core::models::{CounterRecord, IncrementStrategy};
use crate::errors::CounterError;
use crate::store::CounterStore;

/// Returns the current count of the configured counter record.
///
/// # Errors
///
/// Fails with `RecordNotFound` when the record is absent; store and decoding
/// failures are returned unchanged. No default count is ever substituted.
pub async fn read_counter<S>(store: &S, config: &AppConfig) -> Result<u64, CounterError>
where
    S: CounterStore + ?Sized,
{
    let record = fetch_record(store, &config.record_id).await?;
    Ok(record.count)
}

/// Adds one to the configured counter record and returns the new count.
///
/// With `IncrementStrategy::ReadModifyWrite` this is a get followed by an
/// unconditional put, so two concurrent calls can both write the same value.
/// `IncrementStrategy::Atomic` delegates to the store's atomic increment.
///
/// # Errors
///
/// Same as [`read_counter`], plus `InvalidCount` if the count would overflow.
pub async fn increment_counter<S>(store: &S, config: &AppConfig) -> Result<u64, CounterError>
where
    S: CounterStore + ?Sized,
{
    let count = match config.increment_strategy {
        IncrementStrategy::ReadModifyWrite => {
            let mut record = fetch_record(store, &config.record_id).await?;
            record.count = record.count.checked_add(1).ok_or_else(|| {
                CounterError::InvalidCount(format!("{}: count overflow", record.id))
            })?;
            store.put(&record).await?;
            record.count
        }
        IncrementStrategy::Atomic => store.increment(&config.record_id).await?,
    };

    info!(record_id = %config.record_id, count, "Incremented visitor counter");
    Ok(count)
}

async fn fetch_record<S>(store: &S, id: &str) -> Result<CounterRecord, CounterError>
where
    S: CounterStore + ?Sized,
{
    store
        .get(id)
        .await?
        .ok_or_else(|| CounterError::RecordNotFound(id.to_string()))
}
