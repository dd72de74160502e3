//! Per-package install execution
//!
//! Runs the AUR helper for one package, streams its merged output to the log
//! as it arrives, and classifies the outcome from the captured transcript and
//! exit code.

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use crate::config::InstallOptions;
use crate::error::{AurdotError, Result};
use crate::logging::LogSink;
use crate::status::{classify, PkgStatus};

/// Seam for the batch coordinator: anything that can install one package.
pub trait PackageInstaller {
    fn install(&self, package: &str) -> Result<PkgStatus>;
}

/// Installer instance
pub struct Installer {
    options: InstallOptions,
    log: Arc<dyn LogSink>,
}

impl Installer {
    /// Create a new installer with the given options and logging sink
    pub fn new(options: InstallOptions, log: Arc<dyn LogSink>) -> Self {
        Self { options, log }
    }

    /// Refresh the cached sudo credential so the helper's privileged steps
    /// do not stall on a password prompt mid-build.
    ///
    /// Best-effort: a failed refresh is only noted at the verbose level and
    /// the install proceeds. Skipped entirely when already running as root.
    fn refresh_sudo(&self) {
        if nix::unistd::geteuid().is_root() {
            return;
        }
        let Some(refresh) = &self.options.sudo_refresh else {
            return;
        };
        let Some((program, args)) = refresh.split_first() else {
            return;
        };

        match Command::new(program).args(args).status() {
            Ok(status) if status.success() => {}
            Ok(status) => self.log.lowinfo(&format!(
                "sudo refresh exited with {}",
                status.code().unwrap_or(-1)
            )),
            Err(e) => self.log.lowinfo(&format!("sudo refresh failed to run: {}", e)),
        }
    }

    /// Install one package and classify the outcome.
    ///
    /// stderr is merged into stdout: both pipes are drained line-by-line into
    /// one channel, each line is forwarded to the log in real time, and the
    /// accumulated transcript feeds [`classify`] after the process exits.
    pub fn install(&self, package: &str) -> Result<PkgStatus> {
        self.refresh_sudo();

        self.log.info(&format!("Installing \"{}\"", package));

        let mut command = Command::new(self.options.helper_program());
        command
            .args(&self.options.install_flags)
            .arg("-S")
            .arg(package)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(locale) = &self.options.locale {
            command.env("LANG", locale);
        }

        let mut child = command.spawn().map_err(|source| AurdotError::Spawn {
            package: package.to_string(),
            source,
        })?;

        let (tx, rx) = mpsc::channel::<String>();
        let mut readers = Vec::new();

        if let Some(stdout) = child.stdout.take() {
            let tx = tx.clone();
            readers.push(thread::spawn(move || {
                let reader = BufReader::new(stdout);
                for line in reader.lines().map_while(std::result::Result::ok) {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            }));
        }

        if let Some(stderr) = child.stderr.take() {
            let tx = tx.clone();
            readers.push(thread::spawn(move || {
                let reader = BufReader::new(stderr);
                for line in reader.lines().map_while(std::result::Result::ok) {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
            }));
        }

        // The channel closes once both pipes hit end-of-stream
        drop(tx);

        let mut transcript = String::new();
        for line in rx {
            self.log.lowinfo(line.trim_end());
            transcript.push_str(&line);
            transcript.push('\n');
        }

        for reader in readers {
            let _ = reader.join();
        }

        let status = child.wait()?;
        let exit_code = status.code();

        let result = classify(&transcript, exit_code);
        match result {
            PkgStatus::IndeterminateFailure => self.log.warning(&format!(
                "Install failed with exit code {} with package {}",
                exit_code.unwrap_or(-1),
                package
            )),
            PkgStatus::IndeterminateSuccess => self.log.warning(&format!(
                "Could not determine what happened with package {}",
                package
            )),
            _ => {}
        }

        Ok(result)
    }
}

impl PackageInstaller for Installer {
    fn install(&self, package: &str) -> Result<PkgStatus> {
        Installer::install(self, package)
    }
}
