//! Shows, their seasons and episodes, and the metadata shared by both.

use super::{Key, StatsMetas, impl_agent_bound};
use crate::agent::AgentHandle;
use serde::Serialize;
use std::time::Duration;

/// Broadcaster or channel a show aired on
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Network {
    #[serde(skip)]
    pub agent: AgentHandle,
    pub name: Option<String>,
    pub image_url: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
}

/// People credited for a single role
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Credits {
    #[serde(skip)]
    pub agent: AgentHandle,
    /// Role label, e.g. "Réalisation"
    pub role: Option<String>,
    pub names: Vec<String>,
}

/// Descriptive metadata of a show or an episode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Details {
    #[serde(skip)]
    pub agent: AgentHandle,
    pub rating: Option<String>,
    pub air_date_text: Option<String>,
    pub original_title: Option<String>,
    pub credits: Vec<Credits>,
    pub copyright: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub production_year: Option<i32>,
    pub length_text: Option<String>,
    /// Only known when the API gave the length as a number of seconds
    pub length: Option<Duration>,
    pub details_type: Option<String>,
    pub image_url: Option<String>,
    pub networks: Vec<Network>,
}

/// An episode entry inside a season lineup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct EpisodeLineupItem {
    #[serde(skip)]
    pub agent: AgentHandle,
    pub template: Option<String>,
    pub is_active: bool,
    pub is_free: bool,
    pub is_geolocalized: bool,
    pub is_drm: bool,
    pub url: Option<String>,
    pub key: Key,
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Absolute share URL
    pub share_url: Option<String>,
    pub details: Details,
}

/// A season of a show with its episodes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct SeasonLineup {
    #[serde(skip)]
    pub agent: AgentHandle,
    pub name: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub is_free: bool,
    pub items: Vec<EpisodeLineupItem>,
}

/// A show with its seasons
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Show {
    #[serde(skip)]
    pub agent: AgentHandle,
    pub key: Key,
    pub description: Option<String>,
    pub bg_image_url: Option<String>,
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub details: Option<Details>,
    pub season_lineups: Vec<SeasonLineup>,
    pub stats_metas: Option<StatsMetas>,
}

impl_agent_bound!(Network, Credits, Details, EpisodeLineupItem, SeasonLineup, Show);
