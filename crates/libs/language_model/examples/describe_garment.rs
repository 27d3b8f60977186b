use color_eyre::eyre::{Result, eyre};
use language_model::VisionClient;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    color_eyre::install()?;

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| eyre!("usage: describe_garment <image>"))?;
    let base_url =
        std::env::var("VISION_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".into());
    let client = VisionClient::with_base_url(&base_url)
        .maybe_api_key(std::env::var("VISION_API_KEY").ok())
        .maybe_model(std::env::var("VISION_MODEL").ok())
        .build()?;

    let bytes = tokio::fs::read(&path).await?;
    let now = Instant::now();
    let answer = client
        .chat("Describe the piece of clothing in this photo in one sentence.")
        .images(&[bytes.as_slice()])
        .call()
        .await?;
    info!("{path}: {answer}");
    info!("Took {:?}", now.elapsed());

    Ok(())
}
