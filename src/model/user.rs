use super::{Key, StatsMetas, impl_agent_bound};
use crate::agent::AgentHandle;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A show or episode the user bookmarked
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Bookmark {
    #[serde(skip)]
    pub agent: AgentHandle,
    /// Key of the bookmarked show or episode
    pub key: Key,
    /// When the bookmark was created
    pub creation_date: NaiveDateTime,
}

/// Account level information about the logged-in user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct UserInfos {
    #[serde(skip)]
    pub agent: AgentHandle,
    pub ban_level: Option<i64>,
    /// Display name
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_hd: bool,
    pub is_premium: bool,
    pub show_ads: bool,
    /// Telecom provider, from the `rc.telco` statistic
    pub rc_telco: Option<String>,
    /// Feature tier, from the `rc.forfait` statistic
    pub rc_features: Option<String>,
    pub stats_metas: StatsMetas,
    /// Bookmarks in the order the API listed them
    pub bookmarks: Vec<Bookmark>,
}

impl_agent_bound!(Bookmark, UserInfos);
