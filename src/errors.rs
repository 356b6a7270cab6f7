use thiserror::Error;

/// Failure modes for this crate.
///
/// `CallerCallbackFailure` from the design notes has no variant here: a
/// failing [`crate::adjust::EndpointAdjuster`] is caught locally by
/// [`crate::interval_set::IntervalSet::remove`] and replaced with the
/// unadjusted endpoint, so it never surfaces as an error.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum IvSetError {
    /// A [`crate::segment::Segment`] was constructed with `start > end`.
    #[error("invalid range: start ({start}) is greater than end ({end})")]
    InvalidRange { start: String, end: String },

    /// The classifier or the scanner reached a branch the geometry rules
    /// out. This is always a bug in this crate, never a recoverable
    /// condition caused by caller input.
    #[error("internal invariant violation: {0}")]
    InternalInvariantViolation(String),
}
