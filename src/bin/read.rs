use lambda_runtime::{Error, run, service_fn};
use tracing::error;
use visitor_counter::api::read_handler;
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
    let store = DynamoCounterStore::from_env(&config).await;

    run(service_fn(|event| read_handler::handler(&store, &config, event))).await
}
