use std::fmt;

/// What `publish` does when a handler fails mid-fan-out.
///
/// - `FailFast` (default): the first handler error aborts dispatch; handlers
///   later in the subscription order do not run and the error propagates to
///   the publisher as [`Error::HandlerFailure`](crate::Error::HandlerFailure).
/// - `BestEffort`: every handler runs regardless; failures are collected and
///   reported together as
///   [`Error::AggregateFailure`](crate::Error::AggregateFailure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DispatchPolicy {
    #[default]
    FailFast,
    BestEffort,
}

impl DispatchPolicy {
    pub fn is_fail_fast(&self) -> bool {
        matches!(self, DispatchPolicy::FailFast)
    }

    pub fn is_best_effort(&self) -> bool {
        matches!(self, DispatchPolicy::BestEffort)
    }
}

impl fmt::Display for DispatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchPolicy::FailFast => write!(f, "FailFast"),
            DispatchPolicy::BestEffort => write!(f, "BestEffort"),
        }
    }
}
