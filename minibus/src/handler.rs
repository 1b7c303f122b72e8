use std::borrow::Cow;

use crate::{Envelope, Result, event::short_type_name};

/// A concrete receiver bound to one event name.
///
/// Handler types implement the reaction logic in [`record`](Handler::record)
/// and are bound to the bus with [`Bus::attach`](crate::Bus::attach), which
/// subscribes `record` under [`event_name`](Handler::event_name) in a single
/// call. The default `event_name` is the handler's own type identifier, so a
/// handler named after its event type needs no wiring beyond `attach` — the
/// explicit equivalent of registries that hook into type declaration.
///
/// Handlers must be `Send + Sync` because the bus shares them across threads
/// and may be published to concurrently. They run synchronously inside
/// `publish` and should not assume the publisher expects a response; side
/// effects (persistence, job enqueueing, logging) are theirs alone.
///
/// # Examples
///
/// ```rust
/// use minibus::{Bus, Envelope, Handler, Result, payload};
///
/// struct UserSignedUp;
///
/// impl Handler for UserSignedUp {
///     fn record(&self, event: &Envelope) -> Result {
///         println!("welcome, {}", event.field("user")?);
///         Ok(())
///     }
/// }
///
/// let bus = Bus::default();
/// bus.register_event("UserSignedUp");
/// bus.attach(UserSignedUp);
/// bus.publish("UserSignedUp", payload! { user: "Jane" })?;
/// # minibus::Result::Ok(())
/// ```
pub trait Handler: Send + Sync + 'static {
    /// The event name this handler binds to; defaults to the type identifier.
    fn event_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(short_type_name::<Self>())
    }

    /// React to one published occurrence.
    fn record(&self, event: &Envelope) -> Result;
}
