use std::sync::Arc;

use catalog_admin::application::UpdateMediaStatusUseCase;
use catalog_admin::bus::{consume, InMemoryQueue};
use catalog_admin::config::Config;
use catalog_admin::encoder::{VideoEncoderListener, LISTENER_ID};
use catalog_admin::store::InMemoryModelStore;
use catalog_admin::{handlers, microsvc, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;
    telemetry::init(config.log_json)?;

    let store = InMemoryModelStore::new();
    let queue = InMemoryQueue::new();

    let listener = Arc::new(VideoEncoderListener::new(UpdateMediaStatusUseCase::new(store.clone())));
    let consumer = consume(
        listener,
        &config.video_encoded_queue,
        queue.clone(),
        config.consumer_options(),
    );
    tracing::info!(
        listener = LISTENER_ID,
        queue = %config.video_encoded_queue,
        max_deliveries = config.max_deliveries,
        "encoder consumer started"
    );

    let service = Arc::new(handlers::service(store));
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };
    microsvc::serve(service, &config.http_addr, shutdown).await?;

    let stats = consumer.stop();
    tracing::info!(
        handled = stats.handled,
        failed = stats.failed,
        duplicates = stats.duplicates,
        dead_lettered = stats.dead_lettered,
        "encoder consumer stopped"
    );

    Ok(())
}
