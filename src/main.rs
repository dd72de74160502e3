//! aurdot - Main entry point
//!
//! CLI front end for the declarative AUR package installer.

use anyhow::Context;
use log::{debug, error, info};
use std::sync::Arc;

use aurdot::cli::{Cli, Commands};
use aurdot::config::{DirectivesFile, InstallOptions};
use aurdot::plugin::{AurPackages, Plugin};
use aurdot::{bootstrap, AurHelper, StdLog};

/// Initialize the logger with appropriate settings
fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Info)
        .parse_default_env() // Allows RUST_LOG env var to override
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Commands::Run { config } => {
            info!("Processing directives file: {:?}", config);
            let file = DirectivesFile::load_from_file(&config)
                .with_context(|| format!("Failed to load directives file {:?}", config))?;
            file.validate().context("Directives file failed validation")?;

            let plugin = AurPackages::new(file.defaults.clone(), Arc::new(StdLog));
            let mut success = true;
            for entry in &file.directives {
                success &= plugin
                    .handle(&entry.directive, &entry.packages)
                    .with_context(|| format!("Directive '{}' aborted", entry.directive))?;
            }

            if !success {
                error!("Some packages could not be installed");
                std::process::exit(1);
            }
        }
        Commands::Install {
            directive,
            helper,
            helper_command,
            locale,
            no_sudo_refresh,
            packages,
        } => {
            let mut options = InstallOptions::default();
            if let Some(helper) = helper {
                options.helper = helper
                    .parse::<AurHelper>()
                    .map_err(|e| anyhow::anyhow!("Invalid helper '{}': {}", helper, e))?;
            }
            if let Some(command) = helper_command {
                options.helper_command = Some(command);
            }
            if let Some(locale) = locale {
                options.locale = Some(locale);
            }
            if no_sudo_refresh {
                options.sudo_refresh = None;
            }

            let plugin = AurPackages::new(options, Arc::new(StdLog));
            let success = plugin
                .handle(&directive, &packages)
                .with_context(|| format!("Directive '{}' aborted", directive))?;

            if !success {
                error!("Some packages could not be installed");
                std::process::exit(1);
            }
        }
        Commands::Check { helper_command } => {
            let mut options = InstallOptions::default();
            if let Some(command) = helper_command {
                options.helper_command = Some(command);
            }
            let program = options.helper_program();

            if bootstrap::helper_available(&program) {
                println!("✓ {} is available", program);
            } else {
                eprintln!("✗ {} is not available", program);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
