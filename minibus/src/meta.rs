use std::time::SystemTime;

use uuid::Uuid;

use crate::EventId;

/// Identity metadata attached to every envelope.
///
/// - `id`: unique identifier for the envelope, minted once per publish.
/// - `timestamp`: creation time in nanoseconds since Unix epoch (truncated
///   to `u64`).
///
/// The id is opaque to the bus; handlers may use it for deduplication or to
/// correlate log lines, but the runtime attaches no meaning to it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Meta {
    id: EventId,
    timestamp: u64,
}

impl Meta {
    /// Construct metadata with a fresh unique id.
    ///
    /// # Panics
    ///
    /// Panics if the system clock is set before the Unix epoch.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().as_u128(),
            timestamp: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .expect("SystemTime before Unix epoch")
                .as_nanos() as u64,
        }
    }

    /// Unique identifier for this envelope.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Timestamp in nanoseconds since Unix epoch (u64 truncation).
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
}

impl Default for Meta {
    fn default() -> Self {
        Self::new()
    }
}
