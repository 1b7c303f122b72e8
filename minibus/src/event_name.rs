use std::{borrow::Cow, ops::Deref, sync::Arc};

/// Immutable string identifier of an event type; the unit of routing.
///
/// Names are cheap to clone (`Arc<str>` inside) and compare by value, so the
/// same name constructed in two places routes to the same subscriptions.
/// A name must be registered with the [`Bus`](crate::Bus) before it can be
/// published.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct EventName(Arc<str>);

impl EventName {
    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<Cow<'static, str>> for EventName {
    fn from(name: Cow<'static, str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }
}

impl From<&EventName> for EventName {
    fn from(name: &EventName) -> Self {
        name.clone()
    }
}

impl std::borrow::Borrow<str> for EventName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Deref for EventName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
