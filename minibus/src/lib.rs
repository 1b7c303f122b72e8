//! Minibus - Synchronous in-process event bus
//!
//! A tiny publish/subscribe core: declare event names, bind handlers to them,
//! and fan published events out to every matching handler, in subscription
//! order, before `publish` returns.
//!
//! See `examples/analytics.rs`.

mod bus;
mod config;
mod dispatch_policy;
mod envelope;
mod error;
mod event;
mod event_name;
mod handler;
mod meta;
mod payload;
mod subscription_handle;

mod internal;

pub use bus::Bus;
pub use config::Config;
pub use dispatch_policy::DispatchPolicy;
pub use envelope::Envelope;
pub use error::Error;
pub use event::Event;
pub use event_name::EventName;
pub use handler::Handler;
pub use meta::Meta;
pub use payload::Payload;
pub use subscription_handle::SubscriptionHandle;

#[cfg(feature = "macros")]
pub use minibus_macros::Event;

pub type Result<T = ()> = std::result::Result<T, Error>;
pub type EventId = u128;

// Support for the `payload!` macro; not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use serde_json::{Map, Value, json};
}
