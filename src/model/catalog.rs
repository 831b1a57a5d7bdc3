//! Catalog listings: sections, their lineups and search results.

use super::{Key, StatsMetas, impl_agent_bound};
use crate::agent::AgentHandle;
use serde::Serialize;

/// Name and title identifying a catalog section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct SectionSummary {
    #[serde(skip)]
    pub agent: AgentHandle,
    pub name: Option<String>,
    pub title: Option<String>,
}

/// A show as returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct SearchShowSummary {
    #[serde(skip)]
    pub agent: AgentHandle,
    pub key: Key,
    pub title: Option<String>,
    pub image_url: Option<String>,
    /// Text blob the search matched against
    pub searchable_text: Option<String>,
    pub url: Option<String>,
    pub is_free: bool,
    pub is_media: bool,
    pub is_geolocalized: bool,
}

/// A show entry inside a section lineup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct ShowLineupItem {
    #[serde(skip)]
    pub agent: AgentHandle,
    pub key: Key,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub is_free: bool,
    pub is_drm: bool,
    pub is_geolocalized: bool,
    /// Human readable length, e.g. "1 h 30 min"
    pub length_text: Option<String>,
    pub share_url: String,
    pub template: Option<String>,
    pub title: Option<String>,
    pub url: String,
}

/// A named group of shows inside a section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct SubsectionLineup {
    #[serde(skip)]
    pub agent: AgentHandle,
    pub name: Option<String>,
    pub title: Option<String>,
    pub is_free: bool,
    pub items: Vec<ShowLineupItem>,
}

/// A catalog section with all of its lineups
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Section {
    #[serde(skip)]
    pub agent: AgentHandle,
    pub name: Option<String>,
    pub title: Option<String>,
    pub subsection_lineups: Vec<SubsectionLineup>,
    pub stats_metas: Option<StatsMetas>,
}

impl_agent_bound!(
    SectionSummary,
    SearchShowSummary,
    ShowLineupItem,
    SubsectionLineup,
    Section,
);
