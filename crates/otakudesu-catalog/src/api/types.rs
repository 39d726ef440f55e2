//! wajik-anime-api (otakudesu) response types.
//!
//! These types represent the JSON responses of the upstream wrapper. Every
//! field is optional: the upstream schema drifts, and a missing or `null`
//! field must never fail deserialization. Scalar text fields accept either a
//! JSON string or a JSON number and are normalized to strings.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Response envelope shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WajikResponse<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<WajikPagination>,
}

impl<T> WajikResponse<T> {
    /// Whether the upstream reported HTTP 200 in the envelope
    pub fn is_ok(&self) -> bool {
        self.status_code == Some(200)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WajikPagination {
    #[serde(default, deserialize_with = "lenient_number")]
    pub current_page: Option<u32>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub prev_page: Option<u32>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_prev_page: Option<bool>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub next_page: Option<u32>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_next_page: Option<bool>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_pages: Option<u32>,
}

/// `{ animeList: [...] }` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeListData<T> {
    #[serde(default)]
    pub anime_list: Option<Vec<T>>,
}

impl<T> Default for AnimeListData<T> {
    fn default() -> Self {
        Self { anime_list: None }
    }
}

/// `{ details: {...} }` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailsData<T> {
    #[serde(default)]
    pub details: Option<T>,
}

impl<T> Default for DetailsData<T> {
    fn default() -> Self {
        Self { details: None }
    }
}

/// Home payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HomeData {
    #[serde(default)]
    pub ongoing: Option<AnimeListData<OngoingAnimeCard>>,
    #[serde(default)]
    pub completed: Option<AnimeListData<CompletedAnimeCard>>,
}

/// Card in the ongoing listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OngoingAnimeCard {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub episodes: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub release_day: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub latest_release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub anime_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub otakudesu_url: Option<String>,
}

/// Card in the completed listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedAnimeCard {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub episodes: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub score: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_release_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub anime_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub otakudesu_url: Option<String>,
}

/// Card in search results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchedAnimeCard {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub score: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub anime_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub otakudesu_url: Option<String>,
    #[serde(default)]
    pub genre_list: Option<Vec<GenreCard>>,
}

/// Recommendation under an anime detail page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedAnimeCard {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub anime_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub otakudesu_url: Option<String>,
}

/// Episode reference (episode lists, previous/next links)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeCard {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub eps: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub episode_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub otakudesu_url: Option<String>,
}

/// Genre reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCard {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub genre_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub otakudesu_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synopsis {
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub paragraph_list: Option<Vec<String>>,
    #[serde(default)]
    pub connections: Option<Vec<serde_json::Value>>,
}

/// Anime detail payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WajikAnimeDetails {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub japanese: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub score: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub producers: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "truthy_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub episodes: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub aired: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub studios: Option<String>,
    #[serde(default)]
    pub synopsis: Option<Synopsis>,
    #[serde(default)]
    pub genre_list: Option<Vec<GenreCard>>,
    #[serde(default)]
    pub episode_list: Option<Vec<EpisodeCard>>,
    #[serde(default)]
    pub recommended_anime_list: Option<Vec<RecommendedAnimeCard>>,
}

/// Streaming server inside a quality entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamServer {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub server_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamQuality {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default)]
    pub server_list: Option<Vec<StreamServer>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamServers {
    #[serde(default)]
    pub quality_list: Option<Vec<StreamQuality>>,
}

/// Download link inside a quality entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadUrl {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadQuality {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub size: Option<String>,
    #[serde(default)]
    pub url_list: Option<Vec<DownloadUrl>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadQualities {
    #[serde(default)]
    pub quality_list: Option<Vec<DownloadQuality>>,
}

/// `info` block of an episode detail payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WajikEpisodeInfo {
    #[serde(default, deserialize_with = "lenient_text")]
    pub credit: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub encoder: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(default)]
    pub genre_list: Option<Vec<GenreCard>>,
    #[serde(default)]
    pub episode_list: Option<Vec<EpisodeCard>>,
}

/// Episode detail payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WajikEpisodeDetails {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub anime_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub release_time: Option<String>,
    #[serde(default, deserialize_with = "truthy_text")]
    pub default_streaming_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_prev_episode: Option<bool>,
    #[serde(default)]
    pub prev_episode: Option<EpisodeCard>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub has_next_episode: Option<bool>,
    #[serde(default)]
    pub next_episode: Option<EpisodeCard>,
    #[serde(default)]
    pub server: Option<StreamServers>,
    #[serde(default)]
    pub download: Option<DownloadQualities>,
    #[serde(default)]
    pub info: Option<WajikEpisodeInfo>,
}

/// Server lookup payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerDetails {
    #[serde(default, deserialize_with = "truthy_text")]
    pub url: Option<String>,
}

pub type HomeResponseRaw = WajikResponse<HomeData>;
pub type OngoingResponseRaw = WajikResponse<AnimeListData<OngoingAnimeCard>>;
pub type CompletedResponseRaw = WajikResponse<AnimeListData<CompletedAnimeCard>>;
pub type SearchResponseRaw = WajikResponse<AnimeListData<SearchedAnimeCard>>;
pub type AnimeDetailResponseRaw = WajikResponse<DetailsData<WajikAnimeDetails>>;
pub type EpisodeDetailResponseRaw = WajikResponse<DetailsData<WajikEpisodeDetails>>;
pub type ServerResponseRaw = WajikResponse<DetailsData<ServerDetails>>;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Other(serde_json::Value),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Int(n) => Some(n.to_string()),
            Scalar::Float(f) => Some(f.to_string()),
            Scalar::Bool(b) => Some(b.to_string()),
            Scalar::Other(_) => None,
        }
    }

    /// JavaScript truthiness of a scalar; arrays and objects are truthy
    fn is_truthy(&self) -> bool {
        match self {
            Scalar::Text(s) => !s.is_empty(),
            Scalar::Int(n) => *n != 0,
            Scalar::Float(f) => *f != 0.0 && !f.is_nan(),
            Scalar::Bool(b) => *b,
            Scalar::Other(v) => !v.is_null(),
        }
    }
}

/// Accept a string or a number, normalized to a string. Anything else is absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_text))
}

/// Like [`lenient_text`], but falsy values (`""`, `0`, `false`) are absent
fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .filter(Scalar::is_truthy)
        .and_then(Scalar::into_text))
}

/// Accept a number or a numeric string. Anything else is absent.
fn lenient_number<'de, D, N>(deserializer: D) -> Result<Option<N>, D::Error>
where
    D: Deserializer<'de>,
    N: TryFrom<i64> + FromStr,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Int(n)) => N::try_from(n).ok(),
        Some(Scalar::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Any JSON value, read with JavaScript truthiness. `null` is absent.
fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|v| v.is_truthy()))
}

/// A list of text entries. `null` entries become `""` and numbers are
/// stringified; anything that is not an array is absent.
fn lenient_text_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    _ => String::new(),
                })
                .collect(),
        ),
        _ => None,
    })
}
