//! Install outcome classification
//!
//! The AUR helper offers no structured result channel, so the outcome of an
//! install is inferred from its console output: each status carries a marker
//! substring, and the first marker found in the captured transcript decides
//! the status. When no marker matches, the exit code breaks the tie.
//!
//! The declared variant order IS the classification order. The two marker
//! tables this design unifies disagreed on priority because they iterated an
//! unordered map; fixing the order in the enum declaration makes matching
//! deterministic.

use strum::{Display, EnumIter, IntoEnumIterator};

/// Outcome of one package install attempt.
///
/// The strum display string is the canonical summary label, e.g.
/// `"3 Installed"` in the batch report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Display, EnumIter)]
pub enum PkgStatus {
    #[strum(serialize = "AUR up to date")]
    AurUpToDate,
    #[strum(serialize = "Up to date")]
    UpToDate,
    #[strum(serialize = "Installed")]
    Installed,
    #[strum(serialize = "Not found")]
    NotFound,
    #[strum(serialize = "Build failure")]
    BuildFail,
    #[strum(serialize = "Errors occurred")]
    Error,
    #[strum(serialize = "Non-zero exit code")]
    IndeterminateFailure,
    #[strum(serialize = "Could not determine")]
    IndeterminateSuccess,
}

impl PkgStatus {
    /// Marker substring whose presence in the transcript signals this status.
    ///
    /// The indeterminate variants have no marker; they are assigned from the
    /// exit code when nothing matched.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Self::AurUpToDate => Some("up-to-date"),
            Self::UpToDate => Some("nothing to do"),
            Self::Installed => Some("Total Installed Size"),
            Self::NotFound => Some("no results found"),
            Self::BuildFail => Some("failed to build"),
            Self::Error => Some("Errors occurred"),
            Self::IndeterminateFailure | Self::IndeterminateSuccess => None,
        }
    }

    /// Whether this status counts toward overall batch success.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::AurUpToDate | Self::UpToDate | Self::Installed | Self::IndeterminateSuccess
        )
    }
}

/// Classify one install attempt from its captured transcript and exit code.
///
/// Markers are tested in declared variant order; the first match wins. With
/// no match, exit code 0 means [`PkgStatus::IndeterminateSuccess`] and
/// anything else (including signal termination, where no code exists) means
/// [`PkgStatus::IndeterminateFailure`].
pub fn classify(transcript: &str, exit_code: Option<i32>) -> PkgStatus {
    for status in PkgStatus::iter() {
        if let Some(marker) = status.marker() {
            if transcript.contains(marker) {
                return status;
            }
        }
    }

    match exit_code {
        Some(0) => PkgStatus::IndeterminateSuccess,
        _ => PkgStatus::IndeterminateFailure,
    }
}
