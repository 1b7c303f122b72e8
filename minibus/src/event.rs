use std::borrow::Cow;

use serde::Serialize;

/// Trait for typed event structs with a compile-time-known field set.
///
/// Where an event's schema is known ahead of time, prefer a struct
/// implementing `Event` over an ad-hoc [`Payload`](crate::Payload): the
/// fields are checked by the compiler and the bus encodes them through
/// `serde` when the event is published with [`Bus::emit`](crate::Bus::emit).
///
/// # Event Names
///
/// `event_name()` returns the name the event is registered and published
/// under. The default implementation derives it from the type's identifier
/// (the last path segment of `std::any::type_name`), so a struct named
/// `PaidContentPurchased` publishes as `"PaidContentPurchased"` — the same
/// convention handlers use, which is what binds a handler type to its event
/// type without explicit wiring.
///
/// When using `#[derive(Event)]`, `event_name()` is generated from the
/// struct or enum identifier directly.
pub trait Event: Serialize {
    /// Returns the name this event type is routed under.
    fn event_name() -> Cow<'static, str> {
        Cow::Borrowed(short_type_name::<Self>())
    }
}

/// Last path segment of a type's name, with any generic suffix stripped.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
