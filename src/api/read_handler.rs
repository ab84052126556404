use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::response;
use crate::core::config::AppConfig;
use crate::counter;
use crate::store::CounterStore;

pub use self::function_handler as handler;

/// Lambda handler for the "get" trigger. Returns the current count.
///
/// The event payload is not inspected.
///
/// # Errors
///
/// Store and record failures are returned to the runtime untranslated.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<S>(
    store: &S,
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error>
where
    S: CounterStore + ?Sized,
{
    info!("Read counter invoked");

    let count = counter::read_counter(store, config).await.map_err(|e| {
        error!("Failed to read counter: {}", e);
        Error::from(e)
    })?;

    Ok(response::ok_count(&config.cors, count))
}
