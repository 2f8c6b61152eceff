use anyhow::{Context, Result};
use clap::Parser;
use shapefit_agents::{format_recommendation_prompt, CatalogBackend, StylistAgent};
use shapefit_cli::{parse_landmarks, AppConfig};
use shapefit_core::SessionId;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Command line arguments for body-shape analysis
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Classify body shape from pose landmarks",
    long_about = "Reads pose landmarks from a JSON file, derives shoulder, waist and hip \
        widths, and classifies the body into one of five shapes.\n\n\
        The input is either an array of {name, x, y, score} landmarks or a pose \
        object with a \"keypoints\" array. Output is printed as JSON."
)]
struct Args {
    /// Landmark JSON file
    landmarks: PathBuf,

    #[arg(short, long, help = "Configuration file (TOML, JSON or YAML)")]
    config: Option<String>,

    #[arg(short, long, help = "Gender used in the recommendation prompt")]
    gender: Option<String>,

    #[arg(
        long,
        requires = "gender",
        help = "Also print the outfit recommendation prompt"
    )]
    prompt: bool,

    #[arg(
        long,
        requires = "gender",
        help = "Also print outfit recommendations from the built-in catalog"
    )]
    recommend: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => AppConfig::from_env().context("Failed to load config from environment")?,
    };

    let text = fs::read_to_string(&args.landmarks)
        .with_context(|| format!("Failed to read {}", args.landmarks.display()))?;
    let landmarks = parse_landmarks(&text)
        .with_context(|| format!("Failed to parse landmarks in {}", args.landmarks.display()))?;

    tracing::info!("Loaded {} landmarks", landmarks.len());

    let analyzer = config.analyzer();
    let result = analyzer.analyze(&landmarks);

    tracing::info!("Body type: {}", result.body_type);

    let output = serde_json::json!({
        "measurements": result.measurements,
        "bodyType": result.body_type,
        "stylingTips": result.styling_tips(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    if args.prompt {
        if let Some(gender) = &args.gender {
            println!("{}", format_recommendation_prompt(gender, &result.body_type));
        }
    }

    if args.recommend {
        if let Some(gender) = &args.gender {
            let backend = CatalogBackend::new().context("Failed to load outfit catalog")?;
            let stylist = StylistAgent::new(config.agent.clone(), Arc::new(backend));
            let report = stylist
                .recommend(SessionId::new(), &result, gender)
                .await
                .context("Failed to generate recommendations")?;

            println!("{}", serde_json::to_string_pretty(&report.recommendations)?);
        }
    }

    Ok(())
}
