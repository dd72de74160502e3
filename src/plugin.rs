//! Plugin surface exposed to the host framework
//!
//! The host hands a plugin a directive name and its package list; the plugin
//! answers with an aggregate success boolean. Dependencies (options, logging)
//! are injected at construction instead of inherited from a framework base
//! class.

use std::sync::Arc;

use crate::batch::process_packages;
use crate::bootstrap::ensure_helper;
use crate::config::InstallOptions;
use crate::error::{AurdotError, Result};
use crate::installer::Installer;
use crate::logging::LogSink;

/// Directive names this plugin claims.
pub const DIRECTIVES: [&str; 2] = ["pacman", "pacaur"];

/// A directive handler in the host framework's sense.
pub trait Plugin {
    /// Whether this plugin claims the given directive
    fn can_handle(&self, directive: &str) -> bool;

    /// Process the directive's package list, returning aggregate success.
    ///
    /// Errs on an unclaimed directive or a failed bootstrap; per-package
    /// failures are reflected in the returned boolean instead.
    fn handle(&self, directive: &str, packages: &[String]) -> Result<bool>;
}

/// Plugin installing AUR packages declaratively.
pub struct AurPackages {
    options: InstallOptions,
    log: Arc<dyn LogSink>,
}

impl AurPackages {
    /// Create the plugin with the given install options and logging sink
    pub fn new(options: InstallOptions, log: Arc<dyn LogSink>) -> Self {
        Self { options, log }
    }
}

impl Plugin for AurPackages {
    fn can_handle(&self, directive: &str) -> bool {
        DIRECTIVES.contains(&directive)
    }

    fn handle(&self, directive: &str, packages: &[String]) -> Result<bool> {
        if !self.can_handle(directive) {
            return Err(AurdotError::unknown_directive(directive));
        }

        // Bootstrap is checked once for the whole batch, never per package
        ensure_helper(&self.options, self.log.as_ref())?;

        let installer = Installer::new(self.options.clone(), Arc::clone(&self.log));
        process_packages(&installer, self.log.as_ref(), directive, packages)
    }
}
