//! Offline conversion error types.

use sarraf_shared::OfflineUnit;
use thiserror::Error;

/// Errors that can occur during offline conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OfflineError {
    /// Conversion requested for a unit with no defined rate.
    ///
    /// The display-only historical units (dourou, benduqui, mouzouna,
    /// falous, qharrouba, ouqiya) can be listed but never converted;
    /// silently treating them as zero-rated would corrupt results.
    #[error("Unit '{0}' has no defined conversion rate")]
    UnsupportedUnit(OfflineUnit),
}
