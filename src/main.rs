//! Mohajer Trading Group site
//!
//! Desktop entry point: loads `mohajer-site.toml`, sets up logging and opens
//! the site window.

use mohajer_view::SiteConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let (config, config_error) = match SiteConfig::load_default() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    if let Some(e) = config_error {
        tracing::warn!("Ignoring invalid configuration: {}", e);
    }

    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                                                           ║");
    println!("║   Mohajer Trading Group                                   ║");
    println!("║   Steel · Petrochemical · Foodstuff                       ║");
    println!("║                                                           ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    mohajer_ui::launch(config);
}
