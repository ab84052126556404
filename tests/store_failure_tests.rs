use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lambda_runtime::{Context, LambdaEvent};
use serde_json::json;
use visitor_counter::api::{increment_handler, read_handler};
use visitor_counter::core::config::AppConfig;
use visitor_counter::core::models::{CounterRecord, IncrementStrategy};
use visitor_counter::counter::{increment_counter, read_counter};
use visitor_counter::errors::CounterError;
use visitor_counter::store::{CounterStore, InMemoryCounterStore};

const UNREACHABLE: &str = "dispatch failure: connection refused";

/// Every operation fails as if DynamoDB could not be reached.
struct UnreachableStore;

#[async_trait]
impl CounterStore for UnreachableStore {
    async fn get(&self, _id: &str) -> Result<Option<CounterRecord>, CounterError> {
        Err(CounterError::AwsError(UNREACHABLE.to_string()))
    }

    async fn put(&self, _record: &CounterRecord) -> Result<(), CounterError> {
        Err(CounterError::AwsError(UNREACHABLE.to_string()))
    }

    async fn increment(&self, _id: &str) -> Result<u64, CounterError> {
        Err(CounterError::AwsError(UNREACHABLE.to_string()))
    }
}

/// Reads succeed, writes fail.
struct ReadOnlyStore {
    inner: InMemoryCounterStore,
    puts: AtomicUsize,
}

#[async_trait]
impl CounterStore for ReadOnlyStore {
    async fn get(&self, id: &str) -> Result<Option<CounterRecord>, CounterError> {
        self.inner.get(id).await
    }

    async fn put(&self, _record: &CounterRecord) -> Result<(), CounterError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Err(CounterError::AwsError(UNREACHABLE.to_string()))
    }

    async fn increment(&self, _id: &str) -> Result<u64, CounterError> {
        Err(CounterError::AwsError(UNREACHABLE.to_string()))
    }
}

fn event() -> LambdaEvent<serde_json::Value> {
    LambdaEvent::new(json!({}), Context::default())
}

fn expected_message() -> String {
    format!("Failed to interact with AWS services: {UNREACHABLE}")
}

#[tokio::test]
async fn test_operations_return_store_error_unchanged() {
    let atomic = AppConfig {
        increment_strategy: IncrementStrategy::Atomic,
        ..AppConfig::default()
    };

    assert!(matches!(
        read_counter(&UnreachableStore, &AppConfig::default()).await,
        Err(CounterError::AwsError(ref msg)) if msg == UNREACHABLE
    ));
    for config in [AppConfig::default(), atomic] {
        assert!(matches!(
            increment_counter(&UnreachableStore, &config).await,
            Err(CounterError::AwsError(ref msg)) if msg == UNREACHABLE
        ));
    }
}

#[tokio::test]
async fn test_read_handler_fails_without_response_when_store_unreachable() {
    let result = read_handler::handler(&UnreachableStore, &AppConfig::default(), event()).await;

    let err = result.expect_err("no response, not even a default count");
    assert_eq!(err.to_string(), expected_message());
}

#[tokio::test]
async fn test_increment_handler_fails_without_response_when_store_unreachable() {
    let result =
        increment_handler::handler(&UnreachableStore, &AppConfig::default(), event()).await;

    let err = result.expect_err("no response, not even a default count");
    assert_eq!(err.to_string(), expected_message());
}

#[tokio::test]
async fn test_failed_put_after_read_is_an_error() {
    let store = ReadOnlyStore {
        inner: InMemoryCounterStore::with_record(CounterRecord::new("Visitors", 7)),
        puts: AtomicUsize::new(0),
    };
    let config = AppConfig::default();

    assert!(matches!(
        increment_counter(&store, &config).await,
        Err(CounterError::AwsError(_))
    ));
    assert_eq!(store.puts.load(Ordering::SeqCst), 1);

    let err = increment_handler::handler(&store, &config, event())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), expected_message());

    // The stored count is untouched and still readable.
    assert_eq!(read_counter(&store, &config).await.unwrap(), 7);
}
