use serde_json::Value;

use crate::{Error, EventId, EventName, Meta, Payload, Result};

/// One published event occurrence: identity plus name plus optional payload.
///
/// The bus creates exactly one envelope per `publish` call and passes it to
/// every matching handler by shared reference. Envelopes are immutable; the
/// payload (when present) is safe for concurrent read access.
///
/// A payload-less publish is legal. Handlers that require fields fail with
/// [`Error::FieldNotFound`] when they read them, not at publish time.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Envelope {
    pub meta: Meta,
    pub name: EventName,
    pub payload: Option<Payload>,
}

impl Envelope {
    /// Create a new envelope with a fresh unique id.
    pub fn new<N>(name: N, payload: Option<Payload>) -> Self
    where
        N: Into<EventName>,
    {
        Self {
            meta: Meta::new(),
            name: name.into(),
            payload,
        }
    }

    /// Unique identifier of this occurrence.
    pub fn id(&self) -> EventId {
        self.meta.id()
    }

    /// The event name this envelope was published under.
    pub fn name(&self) -> &EventName {
        &self.name
    }

    /// The attached payload, if one was supplied.
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Read a payload field by name.
    ///
    /// Fails with [`Error::FieldNotFound`] when the field is missing or when
    /// the envelope carries no payload at all, so handlers can require
    /// fields without checking for payload presence first.
    pub fn field(&self, name: &str) -> Result<&Value> {
        match &self.payload {
            Some(payload) => payload.get(name),
            None => Err(Error::FieldNotFound(name.to_string())),
        }
    }

    /// Deserialize the payload into a typed event.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        match &self.payload {
            Some(payload) => payload.decode(),
            None => Err(Error::PayloadShape("null")),
        }
    }
}
