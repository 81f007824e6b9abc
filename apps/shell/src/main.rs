use anyhow::Result;
use clap::Parser;
use ohub::domain::config::PanelConfig;
use ohub::features::catalog::PackageDraft;
use ohub::kernel::config::load_config;
use ohub_logger::{LevelFilter, Logger};
use std::path::PathBuf;
use tracing::{info, warn};

/// OnboardHub admin panel shell.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (TOML/JSON/YAML, extension resolved by the loader).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the store root directory.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the UI language (en/ar).
    #[arg(long)]
    lang: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Missing config is normal on first run; defaults apply.
    let (mut config, config_note) = match load_config::<PanelConfig>(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (PanelConfig::default(), Some(err.to_string())),
    };
    if let Some(data_dir) = args.data_dir {
        config.storage.data_dir = data_dir;
    }
    if let Some(lang) = args.lang {
        config.localization.language = lang;
    }

    let level = config.logging.level.parse().unwrap_or(LevelFilter::INFO);
    let _logger = match &config.logging.path {
        Some(path) => Logger::builder()
            .name(env!("CARGO_PKG_NAME"))
            .console(true)
            .level(level)
            .path(path)
            .init()?,
        None => {
            Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).level(level).init()?
        },
    };
    if let Some(note) = config_note {
        warn!(note = %note, "Config not loaded, using defaults");
    }

    let panel = ohub::init(&config).map_err(|err| anyhow::anyhow!(err.to_string()))?;
    info!(
        lang = %panel.lang,
        dir = panel.lang.dir().as_str(),
        features = ?ohub::features::ENABLED,
        "Panel initialized"
    );

    seed_catalog(&panel)?;

    let clients = panel.clients().clients()?;
    info!(clients = clients.len(), "Client directory ready");

    let today = chrono::Local::now().date_naive();
    let contract = panel.contract().generate(panel.lang, today)?;
    info!(chars = contract.len(), "Contract template ready");

    Ok(())
}

/// First-run catalog seeding; an existing catalog is left untouched.
fn seed_catalog(panel: &ohub::Panel) -> Result<()> {
    let mut catalog = panel.catalog()?;
    if !catalog.packages().is_empty() {
        info!(packages = catalog.packages().len(), "Catalog ready");
        return Ok(());
    }

    let defaults = [
        PackageDraft::new("Starter", "المبتدئ", "1500"),
        PackageDraft::new("Growth", "النمو", "3000"),
        PackageDraft::new("Enterprise", "المؤسسات", "6000"),
    ];
    for draft in &defaults {
        if !catalog.add(draft)? {
            warn!(?draft, "Default package rejected by validation");
        }
    }

    info!(packages = catalog.packages().len(), "Catalog seeded with defaults");
    Ok(())
}
