use app_state::{
    AppSettings, DEFAULT_AUTO_APPLY_CONFIDENCE, DEFAULT_SETTINGS_PATH, load_app_settings_from,
};
use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use common_types::{CatalogGarment, OutfitCandidate, Season};
use garment_analysis::{
    ClassificationOrchestrator, GeneratedOutfit, check_outfit, generate_random_outfit,
};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Settings file, overridden by `APP__*` environment variables.
    #[clap(long, short, default_value = DEFAULT_SETTINGS_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Describe a garment photo and print the outcome as JSON.
    Classify {
        image: PathBuf,
        /// Skip the remote model and use the local heuristics only.
        #[clap(long, default_value_t = false, action)]
        offline: bool,
    },
    /// Look for clashing colors in an outfit.
    CheckOutfit {
        #[clap(long)]
        top: Option<String>,
        #[clap(long)]
        pants: Option<String>,
        #[clap(long)]
        shoes: Option<String>,
        #[clap(long)]
        accessory: Option<String>,
    },
    /// Pick a random outfit from a JSON catalog of garments.
    RandomOutfit {
        #[clap(long)]
        catalog: PathBuf,
        /// Defaults to the current season.
        #[clap(long)]
        season: Option<Season>,
        #[clap(long, default_value_t = false, action)]
        ignore_season: bool,
        #[clap(long)]
        seed: Option<u64>,
    },
}

/// Offline classification works without a settings file.
fn auto_apply_threshold(settings: Option<&AppSettings>) -> f32 {
    settings.map_or(DEFAULT_AUTO_APPLY_CONFIDENCE, |s| s.classifier.auto_apply_confidence)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_app_settings_from(&args.config);
    let level = settings
        .as_ref()
        .map_or_else(|_| "info".to_string(), |s| s.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
    color_eyre::install()?;

    match args.command {
        Command::Classify { image, offline } => {
            let (orchestrator, threshold) = if offline {
                if let Err(e) = &settings {
                    warn!("Settings unavailable ({e}), using default thresholds");
                }
                (
                    ClassificationOrchestrator::offline(),
                    auto_apply_threshold(settings.as_ref().ok()),
                )
            } else {
                let settings = settings?;
                (
                    ClassificationOrchestrator::from_settings(&settings.classifier)?,
                    auto_apply_threshold(Some(&settings)),
                )
            };
            let bytes = tokio::fs::read(&image).await?;
            info!("Classifying {} ({} bytes)", image.display(), bytes.len());

            let outcome = orchestrator.classify(&bytes).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
            if let Some(category) = outcome.auto_apply_category(threshold) {
                info!("Category {category} can be applied automatically");
            }
            if let Some(descriptor) = outcome.descriptor() {
                info!("Suggested name: {}", descriptor.suggested_name());
            }
        }
        Command::CheckOutfit {
            top,
            pants,
            shoes,
            accessory,
        } => {
            let check = check_outfit(&OutfitCandidate {
                top,
                pants,
                shoes,
                accessory,
            });
            for warning in &check.warnings {
                warn!("{warning}");
            }
            println!("{}", serde_json::to_string_pretty(&check)?);
        }
        Command::RandomOutfit {
            catalog,
            season,
            ignore_season,
            seed,
        } => {
            let raw = tokio::fs::read_to_string(&catalog).await?;
            let garments: Vec<CatalogGarment> = serde_json::from_str(&raw)?;
            let season = season.unwrap_or_else(Season::current);
            let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);

            match generate_random_outfit(&garments, season, ignore_season, &mut rng) {
                GeneratedOutfit::Selected(selection) => {
                    println!("{}", serde_json::to_string_pretty(&selection)?);
                }
                GeneratedOutfit::NoSeasonalMatch => {
                    return Err(eyre!(
                        "No garments suit {season}. Retry with --ignore-season."
                    ));
                }
                GeneratedOutfit::EmptyCatalog => {
                    return Err(eyre!("The catalog at {} is empty.", catalog.display()));
                }
            }
        }
    }

    Ok(())
}
