use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use scheme_match::catalog::{BuiltinSource, CatalogSource, JsonFileSource};
use scheme_match::{EligibilityEngine, MatchConfig, ProfileDraft, load_with_fallback};
use serde_json::json;

/// Configuration file read from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "scheme-match.json";

#[derive(Debug, Parser)]
#[command(name = "scheme-match")]
#[command(about = "Tag every welfare scheme in a catalog as eligible or not for a citizen profile")]
#[command(version)]
struct Cli {
    /// Profile form as JSON
    profile: PathBuf,

    /// Scheme catalog as a JSON array (defaults to the configured or bundled catalog)
    catalog: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<MatchConfig> {
        let (path, required) = match &self.config {
            Some(path) => (path.as_path(), true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };
        if !required && !path.exists() {
            return Ok(MatchConfig::default());
        }
        MatchConfig::from_json_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.load_config()?;

    let content = std::fs::read_to_string(&cli.profile)
        .with_context(|| format!("Failed to read profile {}", cli.profile.display()))?;
    let draft: ProfileDraft = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse profile {}", cli.profile.display()))?;
    let profile = draft.resolve().context("Profile is incomplete")?;

    let source: Box<dyn CatalogSource> =
        match cli.catalog.clone().or_else(|| config.resolved_catalog_path()) {
            Some(path) => Box::new(JsonFileSource::new(path)),
            None => Box::new(BuiltinSource),
        };
    let catalog = load_with_fallback(source.as_ref());

    let start = Instant::now();
    let engine = EligibilityEngine::new(config);
    let tagged = engine.tag_schemes(Some(&profile), catalog.schemes());
    info!("Evaluated {} schemes in {:?}", tagged.len(), start.elapsed());

    for entry in tagged {
        let line = json!({
            "id": entry.scheme.id,
            "name": entry.scheme.name,
            "eligibility": entry.eligibility,
        });
        println!("{line}");
    }

    Ok(())
}
