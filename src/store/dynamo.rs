//! DynamoDB-backed counter store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue, ReturnValuesOnConditionCheckFailure};
use tracing::debug;

use super::CounterStore;
use crate::core::config::AppConfig;
use crate::core::models::CounterRecord;
use crate::errors::CounterError;

pub struct DynamoCounterStore {
    client: DynamoClient,
    table_name: String,
    partition_key_name: String,
    count_attribute: String,
}

impl DynamoCounterStore {
    pub fn new(client: DynamoClient, config: &AppConfig) -> Self {
        Self {
            client,
            table_name: config.table_name.clone(),
            partition_key_name: config.partition_key_name.clone(),
            count_attribute: config.count_attribute.clone(),
        }
    }

    /// Builds a store from the shared AWS configuration in the environment.
    pub async fn from_env(config: &AppConfig) -> Self {
        let shared = aws_config::from_env().load().await;
        Self::new(DynamoClient::new(&shared), config)
    }
}

#[async_trait]
impl CounterStore for DynamoCounterStore {
    async fn get(&self, id: &str) -> Result<Option<CounterRecord>, CounterError> {
        let out = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(&self.partition_key_name, AttributeValue::S(id.to_string()))
            .send()
            .await?;

        match out.item {
            Some(item) => decode_item(id, &item, &self.count_attribute).map(Some),
            None => Ok(None),
        }
    }

    async fn put(&self, record: &CounterRecord) -> Result<(), CounterError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(&self.partition_key_name, AttributeValue::S(record.id.clone()))
            .item(&self.count_attribute, AttributeValue::N(record.count.to_string()))
            .send()
            .await?;

        debug!(id = %record.id, count = record.count, "Stored counter record");
        Ok(())
    }

    async fn increment(&self, id: &str) -> Result<u64, CounterError> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(&self.partition_key_name, AttributeValue::S(id.to_string()))
            .update_expression("ADD #count :one")
            .condition_expression(INCREMENT_CONDITION)
            .expression_attribute_names("#pk", &self.partition_key_name)
            .expression_attribute_names("#count", &self.count_attribute)
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .expression_attribute_values(":max", AttributeValue::N(u64::MAX.to_string()))
            .return_values(ReturnValue::UpdatedNew)
            .return_values_on_condition_check_failure(ReturnValuesOnConditionCheckFailure::AllOld)
            .send()
            .await;

        let out = match result {
            Ok(out) => out,
            Err(e) => {
                if let Some(UpdateItemError::ConditionalCheckFailedException(ex)) =
                    e.as_service_error()
                {
                    return Err(condition_failure(id, ex.item(), &self.count_attribute));
                }
                return Err(e.into());
            }
        };

        let attributes = out.attributes.unwrap_or_default();
        parse_count(id, &attributes, &self.count_attribute)
    }
}

/// Guards the atomic `ADD`: it must never create the record or the attribute,
/// and must never store a count past `u64::MAX`.
pub const INCREMENT_CONDITION: &str =
    "attribute_exists(#pk) AND attribute_exists(#count) AND #count < :max";

/// Explains a failed `INCREMENT_CONDITION` from the item as it was when the
/// check failed.
pub fn condition_failure(
    id: &str,
    current: Option<&HashMap<String, AttributeValue>>,
    count_attribute: &str,
) -> CounterError {
    let Some(item) = current else {
        return CounterError::RecordNotFound(id.to_string());
    };

    match decode_item(id, item, count_attribute) {
        Ok(record) if record.count == u64::MAX => {
            CounterError::InvalidCount(format!("{id}: count overflow"))
        }
        Ok(record) => CounterError::AwsError(format!(
            "{id}: update condition failed at count {}",
            record.count
        )),
        Err(e) => e,
    }
}

/// Converts a raw DynamoDB item into a `CounterRecord`.
///
/// The item's own key attribute is not consulted; `id` is the key the item
/// was looked up by.
pub fn decode_item(
    id: &str,
    item: &HashMap<String, AttributeValue>,
    count_attribute: &str,
) -> Result<CounterRecord, CounterError> {
    let count = parse_count(id, item, count_attribute)?;
    Ok(CounterRecord::new(id, count))
}

fn parse_count(
    id: &str,
    attributes: &HashMap<String, AttributeValue>,
    count_attribute: &str,
) -> Result<u64, CounterError> {
    let value = attributes
        .get(count_attribute)
        .ok_or_else(|| CounterError::MissingField(format!("{id}.{count_attribute}")))?;

    let raw = value.as_n().map_err(|_| {
        CounterError::InvalidCount(format!("{id}.{count_attribute} is not a number"))
    })?;

    raw.parse::<u64>().map_err(|e| {
        CounterError::InvalidCount(format!("{id}.{count_attribute} = {raw}: {e}"))
    })
}
