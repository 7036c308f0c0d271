//! Correlation types for per-interaction tracing
//!
//! Every slash command invocation gets a fresh `RequestId` so that the log
//! lines emitted by the handler and the store can be tied together even
//! when several interactions are in flight at once.

use uuid::Uuid;

/// Unique identifier for a single interaction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who invoked which command, carried into the interaction span
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub command: String,
    pub requester_id: String,
}

impl RequestContext {
    /// Create a context with a fresh RequestId
    pub fn new(command: impl Into<String>, requester_id: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::new(),
            command: command.into(),
            requester_id: requester_id.into(),
        }
    }
}
