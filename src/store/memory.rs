use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::CounterStore;
use crate::core::models::CounterRecord;
use crate::errors::CounterError;

/// Process-local store, used by tests and local runs.
#[derive(Debug, Default)]
pub struct InMemoryCounterStore {
    records: Mutex<HashMap<String, u64>>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `record`, as provisioning would.
    pub fn with_record(record: CounterRecord) -> Self {
        let mut records = HashMap::new();
        records.insert(record.id, record.count);
        Self {
            records: Mutex::new(records),
        }
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn get(&self, id: &str) -> Result<Option<CounterRecord>, CounterError> {
        let records = self.records.lock().await;
        Ok(records.get(id).map(|count| CounterRecord::new(id, *count)))
    }

    async fn put(&self, record: &CounterRecord) -> Result<(), CounterError> {
        let mut records = self.records.lock().await;
        records.insert(record.id.clone(), record.count);
        Ok(())
    }

    async fn increment(&self, id: &str) -> Result<u64, CounterError> {
        let mut records = self.records.lock().await;
        let count = records
            .get_mut(id)
            .ok_or_else(|| CounterError::RecordNotFound(id.to_string()))?;
        *count = count
            .checked_add(1)
            .ok_or_else(|| CounterError::InvalidCount(format!("{id}: count overflow")))?;
        Ok(*count)
    }
}
