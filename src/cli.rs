// Kept self-contained (clap + std only) so build.rs can include! it for
// completion and man page generation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// aurdot - declarative AUR package installation for dotfile setups
#[derive(Parser)]
#[command(name = "aurdot")]
#[command(about = "Declaratively install AUR packages via a helper tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process every directive in a configuration file
    Run {
        /// Path to the JSON directives file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Install packages given on the command line
    Install {
        /// Directive to attribute the batch to
        #[arg(long, default_value = "pacaur", value_parser = ["pacman", "pacaur"])]
        directive: String,

        /// AUR helper to invoke
        #[arg(long, value_parser = ["pacaur", "paru", "yay"])]
        helper: Option<String>,

        /// Explicit helper command, overriding the helper's program name
        #[arg(long)]
        helper_command: Option<String>,

        /// LANG value forced on the helper process
        #[arg(long)]
        locale: Option<String>,

        /// Skip the sudo credential refresh before each install
        #[arg(long)]
        no_sudo_refresh: bool,

        /// Packages to install
        #[arg(required = true)]
        packages: Vec<String>,
    },
    /// Check that the helper tool is available
    Check {
        /// Helper command to probe instead of the default helper
        #[arg(long)]
        helper_command: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_requires_subcommand() {
        let result = Cli::try_parse_from(["aurdot"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_run_with_config() {
        let result = Cli::try_parse_from(["aurdot", "run", "--config", "/path/to/aurdot.json"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        match cli.command {
            Commands::Run { config } => {
                assert_eq!(config.to_str().unwrap(), "/path/to/aurdot.json");
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_cli_install_defaults() {
        let result = Cli::try_parse_from(["aurdot", "install", "ripgrep", "fd"]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        match cli.command {
            Commands::Install {
                directive,
                helper,
                no_sudo_refresh,
                packages,
                ..
            } => {
                assert_eq!(directive, "pacaur");
                assert!(helper.is_none());
                assert!(!no_sudo_refresh);
                assert_eq!(packages, vec!["ripgrep", "fd"]);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_install_requires_packages() {
        let result = Cli::try_parse_from(["aurdot", "install"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_install_rejects_unknown_helper() {
        let result = Cli::try_parse_from(["aurdot", "install", "--helper", "brew", "ripgrep"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_install_with_overrides() {
        let result = Cli::try_parse_from([
            "aurdot",
            "install",
            "--directive",
            "pacman",
            "--helper",
            "paru",
            "--locale",
            "C.UTF-8",
            "--no-sudo-refresh",
            "ripgrep",
        ]);
        assert!(result.is_ok());
        let cli = result.unwrap();
        match cli.command {
            Commands::Install {
                directive,
                helper,
                locale,
                no_sudo_refresh,
                ..
            } => {
                assert_eq!(directive, "pacman");
                assert_eq!(helper.as_deref(), Some("paru"));
                assert_eq!(locale.as_deref(), Some("C.UTF-8"));
                assert!(no_sudo_refresh);
            }
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_check() {
        let result = Cli::try_parse_from(["aurdot", "check"]);
        assert!(result.is_ok());

        let result = Cli::try_parse_from(["aurdot", "check", "--helper-command", "/opt/bin/yay"]);
        assert!(result.is_ok());
    }
}
