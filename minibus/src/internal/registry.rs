use std::{collections::HashMap, sync::Arc};

use super::subscription::{HandlerFn, Subscription};
use crate::EventName;

/// Maps event name to its ordered list of subscriptions.
///
/// Order within a list is subscription order and is the dispatch order.
/// There is no deduplication: subscribing the same callback twice stores it
/// twice and it runs twice per publish.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    routes: HashMap<EventName, Vec<Subscription>>,
    next_id: u64,
}

impl Registry {
    /// Append a callback to the list for `name`, creating the list if absent.
    /// Returns the registry-unique subscription id.
    pub fn subscribe(&mut self, name: EventName, callback: Arc<HandlerFn>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.routes
            .entry(name)
            .or_default()
            .push(Subscription { id, callback });
        id
    }

    /// Snapshot of the callbacks bound to `name`, in subscription order.
    /// Empty (not an error) when nothing is subscribed.
    pub fn handlers_for(&self, name: &str) -> Vec<Arc<HandlerFn>> {
        self.routes
            .get(name)
            .map(|subs| subs.iter().map(|s| s.callback.clone()).collect())
            .unwrap_or_default()
    }

    /// Remove the subscription with the given id. Returns whether anything
    /// was removed.
    pub fn unsubscribe(&mut self, name: &str, id: u64) -> bool {
        let Some(subs) = self.routes.get_mut(name) else {
            return false;
        };
        let before = subs.len();
        subs.retain(|s| s.id != id);
        subs.len() != before
    }

    pub fn count(&self, name: &str) -> usize {
        self.routes.get(name).map_or(0, Vec::len)
    }
}
