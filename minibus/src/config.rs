use crate::DispatchPolicy;

/// Runtime configuration for the bus.
///
/// Use the builder pattern to customize, or use [`Default`] for the
/// recommended defaults.
///
/// # Examples
///
/// ```rust
/// use minibus::{Config, DispatchPolicy};
///
/// let config = Config::default().with_dispatch_policy(DispatchPolicy::BestEffort);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Failure policy applied during fan-out.
    /// Default: [`DispatchPolicy::FailFast`]
    pub dispatch_policy: DispatchPolicy,
}

impl Config {
    /// Set the failure policy applied during fan-out.
    ///
    /// `FailFast` matches the synchronous, unguarded nature of the bus and
    /// is the default; choose `BestEffort` when one misbehaving handler must
    /// not starve the others of an event they also subscribed to.
    pub fn with_dispatch_policy(mut self, policy: DispatchPolicy) -> Self {
        self.dispatch_policy = policy;
        self
    }
}
