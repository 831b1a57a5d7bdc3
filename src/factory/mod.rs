//! Conversion of raw TOU.TV API responses into the domain model.
//!
//! The API schema is owned by TOU.TV and loosely followed: lists are
//! sometimes null or scalars, some shows carry two alternate details shapes
//! and lineup entries may lack the share information needed to play them.
//! Each payload is deserialized into a dedicated schema struct first (see
//! `api_types`), then turned into model objects. Nested children are built
//! by calling the matching `create_*` method on each nested payload.
mod api_types;
mod lenient;

use api_types::{
    ApiBookmark, ApiCredits, ApiDetails, ApiEpisodeLineupItem, ApiLineupGate, ApiNetwork,
    ApiProfileItem, ApiRcProfile, ApiSeasonLineup, ApiSearchShowSummary, ApiSection,
    ApiSectionSummary, ApiShow, ApiShowLineupItem, ApiSubsectionLineup, ApiToutvProfile,
};
use crate::agent::AgentHandle;
use crate::model::{
    Bookmark, Credits, Details, EpisodeLineupItem, Key, Network, SearchShowSummary, SeasonLineup,
    Section, SectionSummary, Show, ShowLineupItem, StatsMetas, SubsectionLineup, UserInfos,
};
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Format of a bookmark timestamp once its suffix is stripped.
const BOOKMARK_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Trailing characters of a bookmark timestamp that are not part of the date.
const BOOKMARK_TIMESTAMP_SUFFIX_LEN: usize = 4;

/// Statistic holding the telecom provider.
const STAT_TELCO: &str = "rc.telco";

/// Statistic holding the feature tier.
const STAT_FEATURES: &str = "rc.forfait";

/// Errors raised when an API response does not follow the expected schema.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A required field is missing or has an unusable type.
    #[error("Failed to interpret {entity} payload: {source}")]
    Schema {
        entity: &'static str,
        source: serde_json::Error,
    },

    /// The bookmark timestamp is shorter than its expected suffix.
    #[error("Bookmark timestamp is too short: {0:?}")]
    TimestampTooShort(String),

    /// The bookmark timestamp is not a `YYYYMMDDhhmmss` date.
    #[error("Invalid bookmark timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    /// A statistic the user profile needs is missing from `StatsMetas`.
    #[error("Missing statistic {0:?} in StatsMetas")]
    MissingStat(String),

    /// A statistic the user profile needs is a list or a mapping.
    #[error("Statistic {0:?} is not a scalar value")]
    InvalidStat(String),

    /// The identifying key of an entity is null.
    #[error("{entity} payload has no key")]
    MissingKey { entity: &'static str },
}

/// Deserializes a payload into its schema struct, tagging errors with the entity.
fn parse<'a, T>(entity: &'static str, api_obj: &'a Value) -> Result<T, ModelError>
where
    T: Deserialize<'a>,
{
    T::deserialize(api_obj).map_err(|source| ModelError::Schema { entity, source })
}

/// Wraps a key value, failing when it is null.
fn require_key(
    agent: AgentHandle,
    entity: &'static str,
    key: Option<String>,
) -> Result<Key, ModelError> {
    key.map(|key| Key::new(agent, key))
        .ok_or(ModelError::MissingKey { entity })
}

/// Where the details of a show come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DetailsSource<'a> {
    /// The newer `Details2` field.
    Extended(&'a Value),
    /// The legacy `Details` field.
    Legacy(&'a Value),
}

impl<'a> DetailsSource<'a> {
    /// Picks `Details2` when present, `Details` otherwise.
    ///
    /// Null, false, zero and empty values count as absent.
    pub(crate) fn select(details2: Option<&'a Value>, details: Option<&'a Value>) -> Option<Self> {
        if let Some(extended) = details2.filter(|value| lenient::is_truthy(value)) {
            return Some(Self::Extended(extended));
        }

        details
            .filter(|value| lenient::is_truthy(value))
            .map(Self::Legacy)
    }

    pub(crate) fn payload(self) -> &'a Value {
        match self {
            Self::Extended(value) | Self::Legacy(value) => value,
        }
    }
}

/// Key of a show lineup item: `Key`, else `BookmarkKey`.
pub(crate) fn resolve_lineup_key(
    key: Option<String>,
    bookmark_key: Option<String>,
) -> Option<String> {
    key.or(bookmark_key)
}

/// Parses a bookmark timestamp such as `20160101120000ABCD`.
fn parse_bookmark_timestamp(timestamp: &str) -> Result<NaiveDateTime, ModelError> {
    let cut = timestamp
        .char_indices()
        .rev()
        .nth(BOOKMARK_TIMESTAMP_SUFFIX_LEN - 1)
        .map(|(index, _)| index)
        .ok_or_else(|| ModelError::TimestampTooShort(timestamp.to_string()))?;

    NaiveDateTime::parse_from_str(&timestamp[..cut], BOOKMARK_TIMESTAMP_FORMAT).map_err(|source| {
        ModelError::InvalidTimestamp {
            value: timestamp.to_string(),
            source,
        }
    })
}

/// Reads a required statistic as text.
fn stat_text(stats_metas: &StatsMetas, name: &str) -> Result<Option<String>, ModelError> {
    match stats_metas.get(name) {
        None => Err(ModelError::MissingStat(name.to_string())),
        Some(Value::Null) => Ok(None),
        Some(Value::Bool(flag)) => Ok(Some(flag.to_string())),
        Some(value) => lenient::scalar_text(value)
            .map(Some)
            .ok_or_else(|| ModelError::InvalidStat(name.to_string())),
    }
}

/// Builds model objects bound to a single agent.
///
/// The factory holds no state besides the agent handle, so one instance can
/// be shared freely and used from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct ModelFactory {
    agent: AgentHandle,
}

impl ModelFactory {
    /// Creates a factory binding every produced object to `agent`.
    pub fn new(agent: AgentHandle) -> Self {
        Self { agent }
    }

    /// Returns the agent produced objects are bound to.
    pub fn agent(&self) -> AgentHandle {
        self.agent
    }

    /// Builds a bookmark for `key` from a profile item.
    pub fn create_bookmark(&self, key: Key, api_obj: &Value) -> Result<Bookmark, ModelError> {
        let api: ApiBookmark = parse("Bookmark", api_obj)?;

        Ok(Bookmark {
            agent: self.agent,
            key,
            creation_date: parse_bookmark_timestamp(&api.timestamp)?,
        })
    }

    /// Builds the user profile from the account and the TOU.TV user responses.
    ///
    /// Only profile items flagged as bookmarked become bookmarks.
    pub fn create_user_infos(
        &self,
        rc_api_obj: &Value,
        toutv_api_obj: &Value,
    ) -> Result<UserInfos, ModelError> {
        let rc: ApiRcProfile = parse("UserInfos", rc_api_obj)?;
        let toutv: ApiToutvProfile = parse("UserInfos", toutv_api_obj)?;
        let mut bookmarks = Vec::new();

        for (key, api_profile_item) in &toutv.profile_items {
            let profile_item: ApiProfileItem = parse("ProfileItem", api_profile_item)?;

            if profile_item.is_bookmarked {
                let key = Key::new(self.agent, key.as_str());
                bookmarks.push(self.create_bookmark(key, api_profile_item)?);
            }
        }

        debug!(
            profile_items = toutv.profile_items.len(),
            bookmarks = bookmarks.len(),
            "Built user bookmarks"
        );

        Ok(UserInfos {
            agent: self.agent,
            ban_level: rc.ban_level,
            name: rc.name,
            email: rc.email,
            is_hd: toutv.is_hd,
            is_premium: toutv.is_premium,
            show_ads: toutv.show_ads,
            rc_telco: stat_text(&toutv.stats_metas, STAT_TELCO)?,
            rc_features: stat_text(&toutv.stats_metas, STAT_FEATURES)?,
            stats_metas: toutv.stats_metas,
            bookmarks,
        })
    }

    /// Builds the name and title pair of a catalog section.
    pub fn create_section_summary(&self, api_obj: &Value) -> Result<SectionSummary, ModelError> {
        let api: ApiSectionSummary = parse("SectionSummary", api_obj)?;

        Ok(SectionSummary {
            agent: self.agent,
            name: api.name,
            title: api.title,
        })
    }

    /// Builds a show summary from a search endpoint result.
    pub fn create_search_show_summary(
        &self,
        api_obj: &Value,
    ) -> Result<SearchShowSummary, ModelError> {
        let api: ApiSearchShowSummary = parse("SearchShowSummary", api_obj)?;

        Ok(SearchShowSummary {
            agent: self.agent,
            key: require_key(self.agent, "SearchShowSummary", api.key)?,
            title: api.display_text,
            image_url: api.image_url,
            searchable_text: api.searchable_text,
            url: api.url,
            is_free: api.is_free,
            is_media: api.is_media,
            is_geolocalized: api.is_geolocalized,
        })
    }

    /// Builds a show entry of a section lineup.
    ///
    /// Returns `Ok(None)` when the entry has no share URL or no URL, as such
    /// entries cannot be played. Those two fields are checked before any
    /// other field is read.
    pub fn create_show_lineup_item(
        &self,
        api_obj: &Value,
    ) -> Result<Option<ShowLineupItem>, ModelError> {
        let gate: ApiLineupGate = parse("ShowLineupItem", api_obj)?;
        let title = gate.title.as_deref().unwrap_or_default();

        if gate.share.is_none() {
            warn!(title, "Skipping lineup item without Share");
            return Ok(None);
        }

        if gate.url.is_none() {
            warn!(title, "Skipping lineup item without Url");
            return Ok(None);
        }

        let api: ApiShowLineupItem = parse("ShowLineupItem", api_obj)?;

        let Some(share_url) = api.share.url else {
            warn!(title, "Skipping lineup item without Share.Url");
            return Ok(None);
        };

        let key = resolve_lineup_key(api.key, api.bookmark_key);

        Ok(Some(ShowLineupItem {
            agent: self.agent,
            key: require_key(self.agent, "ShowLineupItem", key)?,
            description: api.description,
            image_url: api.image_url,
            is_active: api.is_active,
            is_free: api.is_free,
            is_drm: api.is_drm,
            is_geolocalized: api.is_geolocalized,
            length_text: api.length,
            share_url,
            template: api.template,
            title: api.title,
            url: api.url,
        }))
    }

    /// Builds a named group of shows, skipping entries that cannot be played.
    pub fn create_subsection_lineup(
        &self,
        api_obj: &Value,
    ) -> Result<SubsectionLineup, ModelError> {
        let api: ApiSubsectionLineup = parse("SubsectionLineup", api_obj)?;
        let mut items = Vec::with_capacity(api.lineup_items.len());

        for api_lineup_item in &api.lineup_items {
            if let Some(item) = self.create_show_lineup_item(api_lineup_item)? {
                items.push(item);
            }
        }

        if items.len() < api.lineup_items.len() {
            debug!(
                lineup = api.name.as_deref().unwrap_or_default(),
                skipped = api.lineup_items.len() - items.len(),
                "Skipped unplayable lineup items"
            );
        }

        Ok(SubsectionLineup {
            agent: self.agent,
            name: api.name,
            title: api.title,
            is_free: api.is_free,
            items,
        })
    }

    /// Builds a catalog section with all of its lineups.
    pub fn create_section(&self, api_obj: &Value) -> Result<Section, ModelError> {
        let api: ApiSection = parse("Section", api_obj)?;
        let subsection_lineups = api
            .lineups
            .iter()
            .map(|api_lineup| self.create_subsection_lineup(api_lineup))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Section {
            agent: self.agent,
            name: api.name,
            title: api.title,
            subsection_lineups,
            stats_metas: api.stats_metas,
        })
    }

    /// Builds the broadcaster a show aired on.
    pub fn create_network(&self, api_obj: &Value) -> Result<Network, ModelError> {
        let api: ApiNetwork = parse("Network", api_obj)?;

        Ok(Network {
            agent: self.agent,
            name: api.name,
            image_url: api.image_url,
            url: api.url,
            title: api.title,
        })
    }

    /// Builds credits from a `{Key: role, Value: names}` record.
    pub fn create_credits(&self, api_obj: &Value) -> Result<Credits, ModelError> {
        let api: ApiCredits = parse("Credits", api_obj)?;

        Ok(Credits {
            agent: self.agent,
            role: api.key,
            names: api.value,
        })
    }

    /// Builds the details of a show or an episode.
    ///
    /// `length` is only derived when `Length` is a whole number of seconds.
    pub fn create_details(&self, api_obj: &Value) -> Result<Details, ModelError> {
        let api: ApiDetails = parse("Details", api_obj)?;
        let credits = api
            .persons
            .iter()
            .map(|api_person| self.create_credits(api_person))
            .collect::<Result<Vec<_>, _>>()?;
        let networks = api
            .networks
            .iter()
            .map(|api_network| self.create_network(api_network))
            .collect::<Result<Vec<_>, _>>()?;
        let length = api
            .length
            .as_ref()
            .and_then(lenient::whole_seconds)
            .map(Duration::from_secs);

        Ok(Details {
            agent: self.agent,
            rating: api.rating,
            air_date_text: api.air_date,
            original_title: api.original_title,
            credits,
            copyright: api.copyright,
            country: api.country,
            description: api.description,
            production_year: api.production_year,
            length_text: api.length_text,
            length,
            details_type: api.details_type,
            image_url: api.image_url,
            networks,
        })
    }

    /// Builds a show with its seasons and, when available, its details.
    pub fn create_show(&self, api_obj: &Value) -> Result<Show, ModelError> {
        let api: ApiShow = parse("Show", api_obj)?;
        let key = require_key(self.agent, "Show", api.key)?;
        let season_lineups = api
            .season_lineups
            .iter()
            .map(|api_season_lineup| self.create_season_lineup(api_season_lineup))
            .collect::<Result<Vec<_>, _>>()?;
        let details_source = DetailsSource::select(api.details2.as_ref(), api.details.as_ref());

        if details_source.is_none() {
            debug!(key = %key, "Show has no details");
        }

        let details = details_source
            .map(|source| self.create_details(source.payload()))
            .transpose()?;

        Ok(Show {
            agent: self.agent,
            key,
            description: api.description,
            bg_image_url: api.background_image_url,
            image_url: api.image_url,
            title: api.title,
            details,
            season_lineups,
            stats_metas: api.stats_metas,
        })
    }

    /// Builds a season with its episodes.
    pub fn create_season_lineup(&self, api_obj: &Value) -> Result<SeasonLineup, ModelError> {
        let api: ApiSeasonLineup = parse("SeasonLineup", api_obj)?;
        let items = api
            .lineup_items
            .iter()
            .map(|api_lineup_item| self.create_episode_lineup_item(api_lineup_item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SeasonLineup {
            agent: self.agent,
            name: api.name,
            title: api.title,
            url: api.url,
            is_free: api.is_free,
            items,
        })
    }

    /// Builds an episode entry of a season lineup, details included.
    pub fn create_episode_lineup_item(
        &self,
        api_obj: &Value,
    ) -> Result<EpisodeLineupItem, ModelError> {
        let api: ApiEpisodeLineupItem = parse("EpisodeLineupItem", api_obj)?;
        let details = self.create_details(&api.details)?;

        Ok(EpisodeLineupItem {
            agent: self.agent,
            template: api.template,
            is_active: api.is_active,
            is_free: api.is_free,
            is_geolocalized: api.is_geolocalized,
            is_drm: api.is_drm,
            url: api.url,
            key: require_key(self.agent, "EpisodeLineupItem", api.key)?,
            image_url: api.image_url,
            title: api.title,
            description: api.description,
            share_url: api.share.absolute_url,
            details,
        })
    }
}
