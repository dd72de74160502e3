//! Configuration file handling for install options and directive lists.
//!
//! The ambient state the original relied on (locale forced in the command
//! string, a hardcoded sudo refresh, the helper name baked into the command)
//! is lifted into explicit fields here. Missing fields take the documented
//! defaults; an explicit `null` disables the optional behaviors.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{AurdotError, Result};
use crate::plugin::DIRECTIVES;
use crate::types::AurHelper;

/// Options governing how one install command is built and run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallOptions {
    /// Which AUR helper to invoke
    pub helper: AurHelper,
    /// Explicit command overriding the helper's program name (e.g. a path)
    pub helper_command: Option<String>,
    /// Flags placed before `-S <package>`
    pub install_flags: Vec<String>,
    /// LANG forced on the child so message text is stable for matching;
    /// `null` inherits the ambient locale
    pub locale: Option<String>,
    /// Command run before each install to refresh the sudo credential;
    /// `null` disables the refresh
    pub sudo_refresh: Option<Vec<String>>,
    /// Shell command that installs the helper itself when it is missing
    pub bootstrap_command: Option<String>,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            helper: AurHelper::default(),
            helper_command: None,
            install_flags: vec![
                "--needed".to_string(),
                "--noconfirm".to_string(),
                "--noedit".to_string(),
            ],
            locale: Some("en_US.UTF-8".to_string()),
            sudo_refresh: Some(vec!["sudo".to_string(), "--validate".to_string()]),
            bootstrap_command: None,
        }
    }
}

impl InstallOptions {
    /// Program actually invoked: the explicit command if set, else the
    /// helper's name.
    pub fn helper_program(&self) -> String {
        self.helper_command
            .clone()
            .unwrap_or_else(|| self.helper.to_string())
    }
}

/// One directive entry: a directive name and its package list.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectiveEntry {
    pub directive: String,
    pub packages: Vec<String>,
}

/// A directives file: shared defaults plus an ordered list of directives.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectivesFile {
    #[serde(default)]
    pub defaults: InstallOptions,
    pub directives: Vec<DirectiveEntry>,
}

impl DirectivesFile {
    /// Load a directives file from JSON on disk.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let file: Self = serde_json::from_str(&content)?;
        Ok(file)
    }

    /// Validate directive names and package names.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.directives {
            if !DIRECTIVES.contains(&entry.directive.as_str()) {
                return Err(AurdotError::config(format!(
                    "Unknown directive '{}' (expected one of: {})",
                    entry.directive,
                    DIRECTIVES.join(", ")
                )));
            }
            for package in &entry.packages {
                let name = package.trim();
                if name.is_empty() {
                    return Err(AurdotError::config(format!(
                        "Empty package name under directive '{}'",
                        entry.directive
                    )));
                }
                if name.chars().any(char::is_whitespace) {
                    return Err(AurdotError::config(format!(
                        "Package name '{}' contains whitespace",
                        name
                    )));
                }
            }
        }
        Ok(())
    }
}
