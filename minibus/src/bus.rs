use std::{
    collections::HashSet,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{
    Config, DispatchPolicy, Envelope, Error, Event, EventName, Handler, Payload, Result,
    SubscriptionHandle,
    internal::Registry,
};

/// The publisher: owns the registered-event set and the subscription
/// registry, and performs synchronous fan-out dispatch.
///
/// - Declare event names with `register_event(name)` (or `register::<T>()`
///   for typed events).
/// - Bind handlers with `subscribe(name, closure)` or `attach(handler)`.
/// - Emit occurrences with `publish(name, payload)` or `emit(event)`.
/// - `publish` returns only after every matching handler has run, in
///   subscription order.
///
/// A bus is an explicitly constructed value, not ambient global state:
/// construct one per application (or per test) and pass it to the code that
/// needs it. All methods take `&self`; the internal state sits behind a
/// single lock, so a shared `Arc<Bus>` can be registered to, subscribed to
/// and published to from multiple threads.
///
/// See also: [`Handler`], [`Payload`], [`Envelope`].
pub struct Bus {
    config: Config,
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    events: HashSet<EventName>,
    registry: Registry,
}

impl Bus {
    /// Create a new bus with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: RwLock::new(State::default()),
        }
    }

    /// Declare an event name so it can be published.
    ///
    /// Append-only and idempotent: registering an already-registered name is
    /// a no-op, and there is no way to deregister a name.
    pub fn register_event<N>(&self, name: N)
    where
        N: Into<EventName>,
    {
        let name = name.into();
        if self.write().events.insert(name.clone()) {
            tracing::debug!(event = %name, "registered event");
        }
    }

    /// Declare a typed event under its [`Event::event_name`].
    pub fn register<T: Event>(&self) {
        self.register_event(T::event_name());
    }

    /// Whether `name` has been registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.read().events.contains(name)
    }

    /// All registered event names, sorted for deterministic iteration.
    pub fn event_names(&self) -> Vec<EventName> {
        let mut names: Vec<_> = self.read().events.iter().cloned().collect();
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        names
    }

    /// Append a handler closure to the ordered list for `name`.
    ///
    /// Subscribing does not require the name to be registered (bootstrap
    /// code may wire handlers before declaring events), and there is no
    /// deduplication: the same closure subscribed twice runs twice per
    /// matching publish.
    pub fn subscribe<N, F>(&self, name: N, callback: F) -> SubscriptionHandle
    where
        N: Into<EventName>,
        F: Fn(&Envelope) -> Result + Send + Sync + 'static,
    {
        let name = name.into();
        let id = self
            .write()
            .registry
            .subscribe(name.clone(), Arc::new(callback));
        tracing::debug!(event = %name, id, "subscribed handler");
        SubscriptionHandle::new(name, id)
    }

    /// Bind a [`Handler`] under its own event name.
    ///
    /// This is the explicit registration step standing in for "subscribe on
    /// type declaration": the handler's `record` is subscribed under
    /// `handler.event_name()`, which defaults to the handler's type
    /// identifier.
    pub fn attach<H: Handler>(&self, handler: H) -> SubscriptionHandle {
        let name = EventName::from(handler.event_name());
        self.subscribe(name, move |envelope| handler.record(envelope))
    }

    /// Remove one subscription. Returns `false` when the handle no longer
    /// refers to a live subscription.
    pub fn unsubscribe(&self, handle: &SubscriptionHandle) -> bool {
        self.write().registry.unsubscribe(handle.event(), handle.id())
    }

    /// Number of handlers currently bound to `name`.
    pub fn handler_count(&self, name: &str) -> usize {
        self.read().registry.count(name)
    }

    /// Publish one occurrence of `name` to every bound handler.
    ///
    /// Builds a fresh [`Envelope`] (new unique id) and invokes each handler
    /// synchronously, in subscription order, returning only after all have
    /// run. Zero bound handlers is success: events are fire-and-forget
    /// notifications, not command invocations expecting a receiver.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownEvent`] if `name` was never registered — a wiring
    ///   mistake that fails loudly at the call site.
    /// - Under [`DispatchPolicy::FailFast`], the first handler failure
    ///   aborts dispatch and propagates as [`Error::HandlerFailure`];
    ///   handlers later in the order do not run.
    /// - Under [`DispatchPolicy::BestEffort`], all handlers run and any
    ///   failures come back together as [`Error::AggregateFailure`].
    pub fn publish<N, P>(&self, name: N, payload: P) -> Result
    where
        N: Into<EventName>,
        P: Into<Option<Payload>>,
    {
        let name = name.into();
        let handlers = {
            let state = self.read();
            if !state.events.contains(name.as_str()) {
                return Err(Error::UnknownEvent(name));
            }
            // Snapshot, so handlers run without the lock held and may
            // themselves subscribe or register. Additions made mid-dispatch
            // take effect from the next publish.
            state.registry.handlers_for(&name)
        };

        let envelope = Envelope::new(name, payload.into());
        tracing::trace!(
            event = %envelope.name,
            id = %envelope.id(),
            handlers = handlers.len(),
            "dispatching"
        );

        match self.config.dispatch_policy {
            DispatchPolicy::FailFast => {
                for handler in &handlers {
                    handler(&envelope).map_err(|source| Error::HandlerFailure {
                        event: envelope.name.clone(),
                        source: Box::new(source),
                    })?;
                }
                Ok(())
            }
            DispatchPolicy::BestEffort => {
                let errors: Vec<Error> = handlers
                    .iter()
                    .filter_map(|handler| handler(&envelope).err())
                    .collect();
                if errors.is_empty() {
                    Ok(())
                } else {
                    tracing::error!(
                        event = %envelope.name,
                        failures = errors.len(),
                        "handlers failed during best-effort dispatch"
                    );
                    Err(Error::AggregateFailure {
                        event: envelope.name.clone(),
                        errors,
                    })
                }
            }
        }
    }

    /// Encode a typed event and publish it under [`Event::event_name`].
    pub fn emit<T: Event>(&self, event: &T) -> Result {
        self.publish(EventName::from(T::event_name()), Payload::encode(event)?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().expect("bus lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().expect("bus lock poisoned")
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus")
            .field("config", &self.config)
            .field("events", &self.event_names())
            .finish_non_exhaustive()
    }
}
