/// TOU.TV API payload shapes for deserialization.
///
/// These structures mirror the JSON the API returns, one per entity. Nested
/// children are kept as raw values and handed to their own builder. Every
/// field without `#[serde(default)]` must be present; text values may be
/// null, flags read null as false.
use super::lenient;
use crate::model::StatsMetas;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Profile part of the radio-canada account endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct ApiRcProfile {
    #[serde(deserialize_with = "lenient::nullable")]
    pub ban_level: Option<i64>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub email: Option<String>,
}

/// Profile part of the TOU.TV user endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiToutvProfile {
    #[serde(default, deserialize_with = "lenient::mapping")]
    pub profile_items: Map<String, Value>,
    pub stats_metas: StatsMetas,
    #[serde(rename = "IsHD", deserialize_with = "lenient::flag")]
    pub is_hd: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_premium: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub show_ads: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiProfileItem {
    #[serde(deserialize_with = "lenient::flag")]
    pub is_bookmarked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiBookmark {
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiSectionSummary {
    #[serde(deserialize_with = "lenient::nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiSearchShowSummary {
    #[serde(deserialize_with = "lenient::flag")]
    pub is_free: bool,
    #[serde(deserialize_with = "lenient::nullable")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub searchable_text: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub key: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_media: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_geolocalized: bool,
    #[serde(deserialize_with = "lenient::nullable")]
    pub display_text: Option<String>,
}

/// The fields deciding whether a show lineup entry can be played at all.
///
/// Read before anything else so that unplayable entries never fail on
/// their other fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiLineupGate {
    #[serde(default)]
    pub share: Option<Value>,
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
}

/// A playable show entry of a section lineup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiShowLineupItem {
    #[serde(deserialize_with = "lenient::nullable")]
    pub key: Option<String>,
    #[serde(default)]
    pub bookmark_key: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_drm: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_free: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_geolocalized: bool,
    #[serde(deserialize_with = "lenient::text")]
    pub length: Option<String>,
    pub share: ApiShowShare,
    #[serde(deserialize_with = "lenient::nullable")]
    pub template: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub title: Option<String>,
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiShowShare {
    #[serde(deserialize_with = "lenient::nullable")]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiSubsectionLineup {
    #[serde(deserialize_with = "lenient::nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_free: bool,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub lineup_items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiSection {
    #[serde(deserialize_with = "lenient::nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub lineups: Vec<Value>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub stats_metas: Option<StatsMetas>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiNetwork {
    #[serde(deserialize_with = "lenient::nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub title: Option<String>,
}

/// One `{Key, Value}` record of a details' `Persons` list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiCredits {
    #[serde(deserialize_with = "lenient::nullable")]
    pub key: Option<String>,
    #[serde(deserialize_with = "lenient::names")]
    pub value: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiDetails {
    #[serde(deserialize_with = "lenient::text")]
    pub rating: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub air_date: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub original_title: Option<String>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub persons: Vec<Value>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub copyright: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub country: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub production_year: Option<i32>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub length_text: Option<String>,
    /// Seconds when numeric; kept raw since other types are common.
    #[serde(deserialize_with = "lenient::nullable")]
    pub length: Option<Value>,
    #[serde(rename = "Type", deserialize_with = "lenient::nullable")]
    pub details_type: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub networks: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiShow {
    #[serde(deserialize_with = "lenient::nullable")]
    pub key: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub background_image_url: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub title: Option<String>,
    /// Newer, richer details shape.
    #[serde(default)]
    pub details2: Option<Value>,
    /// Legacy details shape.
    #[serde(default)]
    pub details: Option<Value>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub season_lineups: Vec<Value>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub stats_metas: Option<StatsMetas>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiSeasonLineup {
    #[serde(deserialize_with = "lenient::nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_free: bool,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub lineup_items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiEpisodeLineupItem {
    #[serde(deserialize_with = "lenient::nullable")]
    pub template: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(deserialize_with = "lenient::nullable")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_free: bool,
    #[serde(deserialize_with = "lenient::nullable")]
    pub key: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_geolocalized: bool,
    #[serde(deserialize_with = "lenient::nullable")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient::nullable")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_drm: bool,
    #[serde(deserialize_with = "lenient::nullable")]
    pub description: Option<String>,
    pub share: ApiEpisodeShare,
    pub details: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ApiEpisodeShare {
    #[serde(deserialize_with = "lenient::nullable")]
    pub absolute_url: Option<String>,
}
