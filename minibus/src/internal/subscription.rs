use std::sync::Arc;

use crate::{Envelope, Result};

/// Type-erased handler callback as stored by the registry.
///
/// Both closures passed to `subscribe` and the `record` method of attached
/// [`Handler`](crate::Handler) types end up behind this type.
pub(crate) type HandlerFn = dyn Fn(&Envelope) -> Result + Send + Sync;

/// One entry in an event's ordered handler list.
///
/// The id is unique across the whole registry and backs
/// [`SubscriptionHandle`](crate::SubscriptionHandle); the callback is behind
/// an `Arc` so dispatch can snapshot the list and run handlers without
/// holding the registry lock.
pub(crate) struct Subscription {
    pub id: u64,
    pub callback: Arc<HandlerFn>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
