use color_eyre::eyre::{Result, eyre};
use garment_analysis::{analyze_local, decode_image};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();
    color_eyre::install()?;

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        return Err(eyre!("usage: run_local_analysis <image>..."));
    }

    for path in paths {
        let now = Instant::now();
        let bytes = std::fs::read(&path)?;
        let pixels = decode_image(&bytes)?;
        let descriptor = analyze_local(&pixels);
        println!(
            "{path}: {} ({}) {} {:.2} season={} occasions={:?}",
            descriptor.color,
            descriptor.color_hex,
            descriptor.category,
            descriptor.confidence,
            descriptor.suggested_season,
            descriptor.occasions,
        );
        println!("\tanalyze_local {:?}", now.elapsed());
    }

    Ok(())
}
