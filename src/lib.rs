//! toutv_model - Typed model of the TOU.TV catalog API
//!
//! This library turns the loosely-typed JSON returned by the TOU.TV API
//! (shows, seasons, episodes, sections, search results, user profiles) into
//! strongly-typed model objects. It performs no I/O: callers fetch and decode
//! the responses, hand the decoded [`serde_json::Value`] to a
//! [`ModelFactory`] and get model objects back.
//!
//! # Examples
//!
//! ```
//! use toutv_model::{AgentHandle, ModelFactory};
//! use serde_json::json;
//!
//! let factory = ModelFactory::new(AgentHandle::new());
//! let summary = factory
//!     .create_section_summary(&json!({ "Name": "humour", "Title": "Humour" }))
//!     .unwrap();
//!
//! assert_eq!(summary.title.as_deref(), Some("Humour"));
//! ```

mod agent;
mod factory;
pub mod model;

pub use agent::AgentHandle;
pub use factory::{ModelError, ModelFactory};
pub use model::{
    AgentBound, Bookmark, Credits, Details, EpisodeLineupItem, Key, Network, SearchShowSummary,
    SeasonLineup, Section, SectionSummary, Show, ShowLineupItem, StatsMetas, SubsectionLineup,
    UserInfos,
};
