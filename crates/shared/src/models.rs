//! Internal catalog models.
//!
//! These are the stable records handed to the rendering layer. The JSON field
//! names are part of the contract with the renderer, so several fields carry
//! explicit serde renames. Optional fields are omitted from the JSON output
//! when absent, which lets the renderer test for presence instead of emptiness.

use serde::{Deserialize, Serialize};

/// Catalog card for one anime in a listing context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimeItem {
    pub title: String,
    /// Upstream opaque identifier, never a URL
    pub slug: String,
    #[serde(rename = "episodeInfo", default, skip_serializing_if = "Option::is_none")]
    pub episode_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub link: String,
    pub thumbnail: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

/// Page index for paginated listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Explicit ordered list of page numbers
    pub available_pages: Vec<u32>,
    /// Stringified next page number, if there is one
    pub next_page: Option<String>,
}

/// Paginated listing (ongoing / completed)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    pub total_data: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationInfo>,
    pub data: Vec<AnimeItem>,
}

/// Search results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub total_data: usize,
    pub data: Vec<AnimeItem>,
}

/// One section of the home page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeSection {
    pub count: usize,
    pub data: Vec<AnimeItem>,
}

/// Home page: ongoing and completed sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeResponse {
    pub ongoing: HomeSection,
    pub completed: HomeSection,
}

/// Episode entry in an anime or episode episode-list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    pub link: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// Recommendation shown under an anime detail page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendedAnime {
    pub title: String,
    pub link: String,
    pub slug: String,
    pub thumbnail: String,
}

/// Heterogeneous anime metadata.
///
/// A field is present only when the upstream value was non-empty; an absent
/// field is omitted from the JSON entirely rather than set to `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_episode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producers: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub japanese: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

/// Full anime detail page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimeDetail {
    pub title: String,
    pub streaming_title: String,
    pub thumbnail: String,
    /// Synopsis paragraphs joined with `\n`
    pub synopsis: String,
    pub info: AnimeInfo,
    pub episodes: Vec<Episode>,
    #[serde(rename = "rekomendasi")]
    pub recommendations: Vec<RecommendedAnime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimeDetailResponse {
    pub success: bool,
    pub data: AnimeDetail,
}

/// Author and release strings of an episode
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeMetadata {
    pub author: String,
    pub release: String,
}

/// Episode metadata. Empty (`{}`) when the episode could not be loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

/// Link to a neighbouring page of the watch view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLink {
    pub url: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeNavigation {
    pub previous: Option<NavigationLink>,
    pub anime: Option<NavigationLink>,
    pub next: Option<NavigationLink>,
}

/// One (quality, provider) stream option.
///
/// `url` stays `None` until the mirror is resolved through the server lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mirror {
    pub quality: String,
    pub provider: String,
    #[serde(rename = "serverId")]
    pub server_id: String,
    pub url: Option<String>,
}

impl Mirror {
    pub fn is_resolved(&self) -> bool {
        self.url.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadProvider {
    pub provider: String,
    pub url: String,
}

/// Download links for one quality
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    pub quality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub providers: Vec<DownloadProvider>,
}

/// Full watch page for one episode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDetail {
    pub title: String,
    pub metadata: EpisodeMetadata,
    pub info: EpisodeInfo,
    /// Default player URL
    #[serde(rename = "iframe")]
    pub player_url: Option<String>,
    pub navigation: EpisodeNavigation,
    pub episodes: Vec<Episode>,
    pub mirrors: Vec<Mirror>,
    pub downloads: Vec<Download>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpisodeDetailResponse {
    pub success: bool,
    pub data: EpisodeDetail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_anime_item_omits_absent_fields() {
        let item = AnimeItem {
            title: "Frieren".to_string(),
            slug: "sousou-frieren-sub-indo".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Frieren",
                "slug": "sousou-frieren-sub-indo",
                "link": "",
                "thumbnail": ""
            })
        );
    }

    #[test]
    fn test_anime_item_renamed_fields() {
        let item = AnimeItem {
            episode_info: Some("12".to_string()),
            kind: Some("ongoing".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["episodeInfo"], "12");
        assert_eq!(value["type"], "ongoing");
        assert!(value.get("episode_info").is_none());
    }

    #[test]
    fn test_empty_episode_detail_shape() {
        let value = serde_json::to_value(EpisodeDetail::default()).unwrap();
        assert_eq!(value["info"], json!({}));
        assert_eq!(value["iframe"], json!(null));
        assert_eq!(
            value["navigation"],
            json!({ "previous": null, "anime": null, "next": null })
        );
        assert_eq!(value["mirrors"], json!([]));
        assert_eq!(value["metadata"], json!({ "author": "", "release": "" }));
    }

    #[test]
    fn test_anime_detail_recommendation_key() {
        let value = serde_json::to_value(AnimeDetail::default()).unwrap();
        assert!(value.get("rekomendasi").is_some());
        assert_eq!(value["info"], json!({}));
    }

    #[test]
    fn test_mirror_resolution_state() {
        let mut mirror = Mirror {
            quality: "720p".to_string(),
            provider: "ondesu".to_string(),
            server_id: "abc".to_string(),
            url: None,
        };
        assert!(!mirror.is_resolved());
        assert_eq!(serde_json::to_value(&mirror).unwrap()["serverId"], "abc");

        mirror.url = Some("https://desustream.example/embed".to_string());
        assert!(mirror.is_resolved());
    }
}
