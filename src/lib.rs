//! aurdot library
//!
//! Declarative AUR package installation: per-package subprocess invocation,
//! streamed output capture, heuristic outcome classification, and batch
//! aggregation into a pass/fail summary.

pub mod batch;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod logging;
pub mod plugin;
pub mod status;
pub mod types;

// Re-export main types for convenience
pub use batch::{process_packages, BatchSummary};
pub use bootstrap::{ensure_helper, helper_available};
pub use config::{DirectiveEntry, DirectivesFile, InstallOptions};
pub use error::{AurdotError, Result};
pub use installer::{Installer, PackageInstaller};
pub use logging::{LogSink, RecordingLog, Severity, StdLog};
pub use plugin::{AurPackages, Plugin, DIRECTIVES};
pub use status::{classify, PkgStatus};
pub use types::AurHelper;
