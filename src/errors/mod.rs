//! Validation errors raised while parsing and scoring CVSS vectors.
//!
//! Every variant is terminal and non-retryable: the engine never returns a
//! partial or best-effort score. Callers embedding the engine behind an API
//! can map `code()`/`status()` into their own response envelope.

/// Error raised when a CVSS vector fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CvssError {
    #[error("The vector you have provided is invalid: malformed segment")]
    MalformedVector,

    #[error("The vector you have provided is invalid: unsupported CVSS version")]
    UnsupportedVersion,

    #[error("The vector you have provided is invalid: missing required metric {0}")]
    MissingMetric(&'static str),

    #[error("The vector you have provided is invalid: illegal value for metric {0}")]
    InvalidMetricValue(&'static str),
}

impl CvssError {
    /// Stable classification code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedVector => "MALFORMED_VECTOR",
            Self::UnsupportedVersion => "UNSUPPORTED_VERSION",
            Self::MissingMetric(_) => "MISSING_METRIC",
            Self::InvalidMetricValue(_) => "INVALID_METRIC_VALUE",
        }
    }

    /// Fixed numeric status carried by every validation failure.
    ///
    /// Every invalid vector classifies as 403. It is an input-rejection
    /// code, not an HTTP semantic.
    pub fn status(&self) -> u16 {
        403
    }

    /// Check if this error reports a metric missing from the vector.
    pub fn is_missing_metric(&self) -> bool {
        matches!(self, Self::MissingMetric(_))
    }

    /// Check if this error reports an illegal metric value.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidMetricValue(_))
    }
}
