use crate::EventName;

/// A lightweight handle to one subscription.
///
/// Returned by [`Bus::subscribe`](crate::Bus::subscribe) and
/// [`Bus::attach`](crate::Bus::attach). Use handles to:
///
/// - Identify subscriptions in test assertions
/// - Remove a subscription later via [`Bus::unsubscribe`](crate::Bus::unsubscribe)
///
/// Handles are cheap to clone and can be stored for later use.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    event: EventName,
    id: u64,
}

impl SubscriptionHandle {
    pub(crate) fn new(event: EventName, id: u64) -> Self {
        Self { event, id }
    }

    /// The event name this subscription is bound to.
    pub fn event(&self) -> &EventName {
        &self.event
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }
}

impl std::fmt::Display for SubscriptionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.event, self.id)
    }
}
