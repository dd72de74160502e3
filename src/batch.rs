//! Batch coordination and result aggregation
//!
//! Walks the requested package list in order, one install at a time, tallies
//! the outcomes by status, and reports a per-status summary.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::installer::PackageInstaller;
use crate::logging::LogSink;
use crate::status::PkgStatus;

/// Tally of install outcomes for one batch, keyed by status.
///
/// `BTreeMap` keeps the summary in declared status order, so the report is
/// stable across runs.
#[derive(Debug, Default)]
pub struct BatchSummary {
    counts: BTreeMap<PkgStatus, usize>,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one install outcome.
    pub fn record(&mut self, status: PkgStatus) {
        *self.counts.entry(status).or_insert(0) += 1;
    }

    /// Count recorded for the given status.
    pub fn count(&self, status: PkgStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Statuses encountered with their counts, in declared status order.
    pub fn counts(&self) -> &BTreeMap<PkgStatus, usize> {
        &self.counts
    }

    /// True iff every encountered status is success-class.
    ///
    /// Vacuously true for an empty batch.
    pub fn all_successful(&self) -> bool {
        self.counts.keys().all(PkgStatus::is_success)
    }
}

/// Install every package in order and report the aggregate outcome.
///
/// Per-package failures are logged and tallied but do not stop the batch;
/// only spawn failures propagate as errors. Returns whether every package
/// ended in a success-class status.
pub fn process_packages(
    installer: &dyn PackageInstaller,
    log: &dyn LogSink,
    directive: &str,
    packages: &[String],
) -> Result<bool> {
    let mut summary = BatchSummary::new();

    for package in packages {
        let status = installer.install(package)?;
        summary.record(status);
        if !status.is_success() {
            log.error(&format!("Could not install package '{}'", package));
        }
    }

    let success = summary.all_successful();
    if success {
        log.info(&format!("All {} packages installed successfully", directive));
    }

    for (status, amount) in summary.counts() {
        let line = format!("{} {}", amount, status);
        if status.is_success() {
            log.info(&line);
        } else {
            log.error(&line);
        }
    }

    Ok(success)
}
