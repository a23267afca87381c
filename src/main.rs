use std::error::Error;

use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine; variables may come from the environment.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_filter(filter::filter_fn(|meta| {
                    !subsidy_client::telemetry::is_client_target(meta)
                })),
        )
        .with(subsidy_client::telemetry::layer())
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "starting subsidy-search");

    api::start().await?;

    Ok(())
}
