//! Domain model produced from TOU.TV API responses.
//!
//! Every type in here is a value object bound to the [`AgentHandle`] of the
//! session that produced it. Objects are only built by the
//! [`ModelFactory`](crate::ModelFactory); callers read their public fields.
mod catalog;
mod show;
mod user;

pub use catalog::{SearchShowSummary, Section, SectionSummary, ShowLineupItem, SubsectionLineup};
pub use show::{Credits, Details, EpisodeLineupItem, Network, SeasonLineup, Show};
pub use user::{Bookmark, UserInfos};

use crate::agent::AgentHandle;
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque statistics mapping carried through verbatim from the API
pub type StatsMetas = serde_json::Map<String, serde_json::Value>;

/// Access to the session a model object is bound to.
pub trait AgentBound {
    /// Returns the handle of the owning session
    fn agent(&self) -> AgentHandle;
}

macro_rules! impl_agent_bound {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::model::AgentBound for $ty {
                fn agent(&self) -> $crate::agent::AgentHandle {
                    self.agent
                }
            }
        )+
    };
}

pub(crate) use impl_agent_bound;

/// Opaque identifier of a show or episode
///
/// Two keys are equal when their values are equal, whichever session
/// produced them.
#[derive(Debug, Clone)]
pub struct Key {
    agent: AgentHandle,
    value: String,
}

impl Key {
    pub(crate) fn new(agent: AgentHandle, value: impl Into<String>) -> Self {
        Self {
            agent,
            value: value.into(),
        }
    }

    /// Returns the raw identifier
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl_agent_bound!(Key);

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}
