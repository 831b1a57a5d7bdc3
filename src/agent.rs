//! Session handle shared by every produced model object
//!
//! The agent owns network and authentication concerns elsewhere. Model
//! objects only remember which session produced them, so the handle is a
//! plain copyable token rather than a reference to the agent itself.

use std::fmt;
use ulid::Ulid;

/// Identifies the session (agent) a model object is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentHandle {
    session_id: Ulid,
}

impl AgentHandle {
    /// Creates a handle for a fresh session
    pub fn new() -> Self {
        Self {
            session_id: Ulid::new(),
        }
    }

    /// Creates a handle referring to an existing session
    pub fn from_session_id(session_id: Ulid) -> Self {
        Self { session_id }
    }

    /// Returns the session identifier this handle refers to
    pub fn session_id(&self) -> Ulid {
        self.session_id
    }
}

impl Default for AgentHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AgentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.session_id)
    }
}
