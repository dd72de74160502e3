//! Helper bootstrap
//!
//! Before any package is attempted the helper binary must exist. When a
//! bootstrap command is configured it gets one chance to install the helper;
//! a helper still missing afterwards is fatal for the whole batch.

use std::path::Path;
use std::process::Command;

use crate::config::InstallOptions;
use crate::error::{AurdotError, Result};
use crate::logging::LogSink;

/// Whether the helper program can be invoked.
///
/// Commands containing a path separator are checked directly on disk;
/// bare names are resolved against PATH.
pub fn helper_available(program: &str) -> bool {
    if program.contains('/') {
        Path::new(program).is_file()
    } else {
        which::which(program).is_ok()
    }
}

/// Ensure the configured helper exists, running the bootstrap command once
/// if it does not.
///
/// The bootstrap command runs under `sh -c` with inherited stdio so its own
/// prompts and progress reach the operator directly.
pub fn ensure_helper(options: &InstallOptions, log: &dyn LogSink) -> Result<()> {
    let program = options.helper_program();
    if helper_available(&program) {
        return Ok(());
    }

    if let Some(command) = &options.bootstrap_command {
        log.info(&format!("Bootstrapping {}", program));
        let status = Command::new("sh").arg("-c").arg(command).status()?;
        if status.success() && helper_available(&program) {
            return Ok(());
        }
    }

    Err(AurdotError::bootstrap(format!(
        "{} could not be installed on your system",
        program
    )))
}
