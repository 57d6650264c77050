mod app_icon;
mod canvas;
mod config;
mod error;
mod logging;
mod tray;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;

#[derive(Parser)]
#[command(
    name = "usage-icons",
    about = "Render the usage tracker's app icon and tray status icons"
)]
struct Cli {
    /// Config file to read instead of ~/.config/usage-icons/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the 512x512 app icon PNG (default: electron/assets/icon.png)
    AppIcon {
        /// Output path, overriding the config file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print GREEN/YELLOW/RED tray icons as base64 PNG data URIs
    TrayIcons,
}

/// Load config and build the log filter. Warnings from either step are
/// returned for reporting once the subscriber is installed.
fn startup(
    config_path: Option<&Path>,
    rust_log: Option<&str>,
) -> (AppConfig, EnvFilter, Vec<String>) {
    let (config, mut warnings) = AppConfig::load(config_path);
    let (filter, filter_warnings) = logging::env_filter(rust_log, config.log_filter.as_deref());
    warnings.extend(filter_warnings);
    (config, filter, warnings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let rust_log = std::env::var("RUST_LOG").ok();
    let (config, filter, warnings) = startup(cli.config.as_deref(), rust_log.as_deref());

    // Logs go to stderr so stdout carries only the generated output
    tracing::subscriber::set_global_default(logging::subscriber(filter, std::io::stderr))
        .context("Failed to install logger")?;
    logging::report(&warnings);

    match cli.command {
        Command::AppIcon { output } => {
            let path = output
                .or(config.app_icon_path)
                .unwrap_or_else(app_icon::default_app_icon_path);
            let written = app_icon::write_app_icon(&path)
                .with_context(|| format!("Failed to create app icon at {}", path.display()))?;
            println!("Icon created at {}", written.display());
        }
        Command::TrayIcons => {
            let stdout = std::io::stdout();
            tray::write_tray_lines(&mut stdout.lock()).context("Failed to emit tray icons")?;
            info!("Emitted {} tray icons", tray::TrayStatus::ALL.len());
        }
    }

    Ok(())
}
