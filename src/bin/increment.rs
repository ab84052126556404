use lambda_runtime::{Error, run, service_fn};
use tracing::{error, info};
use visitor_counter::api::increment_handler;
use visitor_counter::CounterError;
use visitor_counter::core::config::AppConfig;
use visitor_counter::store::DynamoCounterStore;

#[tokio::main]
async fn main() -> Result<(), Error> {
    visitor_counter::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(CounterError::ConfigError(e))
    })?;
    info!(table = %config.table_name, strategy = %config.increment_strategy, "Starting increment Lambda");
    let store = DynamoCounterStore::from_env(&config).await;

    run(service_fn(|event| increment_handler::handler(&store, &config, event))).await
}
