//! Upstream-to-internal schema translation.
//!
//! Pure functions turning wajik-anime-api responses into the internal catalog
//! models. None of them fail: absent fields fall back to `""`, `[]` or `None`.
//! `success` always mirrors the envelope status code, not payload emptiness.

use crate::api::types::*;
use shared::models::*;
use tracing::warn;

/// Upper bound on a synthesized page index
pub const MAX_EXPANDED_PAGES: u32 = 10_000;

/// Present and non-empty
fn truthy(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

fn nonzero(value: Option<u32>) -> Option<u32> {
    value.filter(|&n| n > 0)
}

fn genre_titles(genres: Vec<GenreCard>) -> Vec<String> {
    genres.into_iter().map(|g| text(g.title)).collect()
}

/// Build the internal page index from upstream pagination.
///
/// With `totalPages` the index is `1..=totalPages`. Without it the index is
/// only `[currentPage, nextPage]`, which skips every page before the current
/// one; callers rely on that shape, so it is kept as is.
pub fn to_internal_pagination(pagination: Option<&WajikPagination>) -> Option<PaginationInfo> {
    let p = pagination?;

    let next = nonzero(p.next_page);
    let available_pages = if let Some(total) = nonzero(p.total_pages) {
        if total > MAX_EXPANDED_PAGES {
            warn!(total_pages = total, "Upstream page count clamped");
        }
        (1..=total.min(MAX_EXPANDED_PAGES)).collect()
    } else if let Some(current) = nonzero(p.current_page) {
        std::iter::once(current).chain(next).collect()
    } else {
        Vec::new()
    };

    let next_page = if p.has_next_page.unwrap_or(false) {
        next.map(|n| n.to_string())
    } else {
        None
    };

    Some(PaginationInfo {
        available_pages,
        next_page,
    })
}

/// Ongoing card: `episodes` feeds both `episode` and `episodeInfo`
pub fn map_ongoing_card(card: OngoingAnimeCard) -> AnimeItem {
    AnimeItem {
        title: text(card.title),
        slug: text(card.anime_id),
        episode_info: card.episodes.clone(),
        episode: card.episodes,
        day: card.release_day,
        date: card.latest_release_date,
        link: text(card.otakudesu_url),
        thumbnail: text(card.poster),
        kind: Some("ongoing".to_string()),
        ..Default::default()
    }
}

pub fn map_completed_card(card: CompletedAnimeCard) -> AnimeItem {
    AnimeItem {
        title: text(card.title),
        slug: text(card.anime_id),
        episode_info: card.episodes.clone(),
        episode: card.episodes,
        date: card.last_release_date,
        rating: card.score,
        link: text(card.otakudesu_url),
        thumbnail: text(card.poster),
        kind: Some("completed".to_string()),
        ..Default::default()
    }
}

pub fn map_searched_card(card: SearchedAnimeCard) -> AnimeItem {
    AnimeItem {
        title: text(card.title),
        slug: text(card.anime_id),
        thumbnail: text(card.poster),
        link: text(card.otakudesu_url),
        genres: Some(genre_titles(card.genre_list.unwrap_or_default())),
        status: card.status,
        rating: card.score,
        ..Default::default()
    }
}

fn section<T>(list: Option<AnimeListData<T>>, map: fn(T) -> AnimeItem) -> HomeSection {
    let data: Vec<AnimeItem> = list
        .and_then(|l| l.anime_list)
        .unwrap_or_default()
        .into_iter()
        .map(map)
        .collect();

    HomeSection {
        count: data.len(),
        data,
    }
}

pub fn map_home(raw: HomeResponseRaw) -> HomeResponse {
    let data = raw.data.unwrap_or_default();
    HomeResponse {
        ongoing: section(data.ongoing, map_ongoing_card),
        completed: section(data.completed, map_completed_card),
    }
}

fn map_list<T>(
    raw: WajikResponse<AnimeListData<T>>,
    requested_page: u32,
    map: fn(T) -> AnimeItem,
) -> ListResponse {
    let success = raw.is_ok();
    let page = raw
        .pagination
        .as_ref()
        .and_then(|p| p.current_page)
        .unwrap_or(requested_page);
    let pagination = to_internal_pagination(raw.pagination.as_ref());
    let data: Vec<AnimeItem> = raw
        .data
        .and_then(|d| d.anime_list)
        .unwrap_or_default()
        .into_iter()
        .map(map)
        .collect();

    ListResponse {
        success,
        page: Some(page),
        total_data: data.len(),
        pagination,
        data,
    }
}

pub fn map_ongoing_list(raw: OngoingResponseRaw, requested_page: u32) -> ListResponse {
    map_list(raw, requested_page, map_ongoing_card)
}

pub fn map_completed_list(raw: CompletedResponseRaw, requested_page: u32) -> ListResponse {
    map_list(raw, requested_page, map_completed_card)
}

pub fn map_search(raw: SearchResponseRaw) -> SearchResponse {
    let success = raw.is_ok();
    let data: Vec<AnimeItem> = raw
        .data
        .and_then(|d| d.anime_list)
        .unwrap_or_default()
        .into_iter()
        .map(map_searched_card)
        .collect();

    SearchResponse {
        success,
        total_data: data.len(),
        data,
    }
}

fn map_episode(card: EpisodeCard) -> Episode {
    Episode {
        title: text(card.title),
        link: text(card.otakudesu_url),
        slug: text(card.episode_id),
        release_date: card.date,
    }
}

fn map_recommendation(card: RecommendedAnimeCard) -> RecommendedAnime {
    RecommendedAnime {
        title: text(card.title),
        link: text(card.otakudesu_url),
        slug: text(card.anime_id),
        thumbnail: text(card.poster),
    }
}

/// Anime metadata; each field only when the upstream value is non-empty
fn anime_info(details: &WajikAnimeDetails) -> AnimeInfo {
    let genres = details
        .genre_list
        .clone()
        .filter(|g| !g.is_empty())
        .map(genre_titles);

    AnimeInfo {
        status: truthy(details.status.clone()),
        score: truthy(details.score.clone()),
        total_episode: truthy(details.episodes.clone()),
        duration: truthy(details.duration.clone()),
        released_on: truthy(details.aired.clone()),
        studio: truthy(details.studios.clone()),
        kind: truthy(details.kind.clone()),
        producers: truthy(details.producers.clone()),
        japanese: truthy(details.japanese.clone()),
        genres,
    }
}

pub fn map_anime_detail(raw: AnimeDetailResponseRaw) -> AnimeDetailResponse {
    let success = raw.is_ok();
    let Some(details) = raw.data.and_then(|d| d.details) else {
        return AnimeDetailResponse {
            success: false,
            data: AnimeDetail::default(),
        };
    };

    let info = anime_info(&details);
    let synopsis = details
        .synopsis
        .and_then(|s| s.paragraph_list)
        .map(|paragraphs| paragraphs.join("\n"))
        .unwrap_or_default();

    AnimeDetailResponse {
        success,
        data: AnimeDetail {
            title: text(details.title),
            streaming_title: text(details.japanese),
            thumbnail: text(details.poster),
            synopsis,
            info,
            episodes: details
                .episode_list
                .unwrap_or_default()
                .into_iter()
                .map(map_episode)
                .collect(),
            recommendations: details
                .recommended_anime_list
                .unwrap_or_default()
                .into_iter()
                .map(map_recommendation)
                .collect(),
        },
    }
}

/// One mirror per (quality, server) pair, unresolved
fn flatten_mirrors(servers: Option<StreamServers>) -> Vec<Mirror> {
    let mut mirrors = Vec::new();
    for quality in servers.and_then(|s| s.quality_list).unwrap_or_default() {
        let quality_title = text(quality.title);
        for server in quality.server_list.unwrap_or_default() {
            mirrors.push(Mirror {
                quality: quality_title.clone(),
                provider: text(server.title),
                server_id: text(server.server_id),
                url: None,
            });
        }
    }
    mirrors
}

fn flatten_downloads(downloads: Option<DownloadQualities>) -> Vec<Download> {
    downloads
        .and_then(|d| d.quality_list)
        .unwrap_or_default()
        .into_iter()
        .map(|quality| Download {
            quality: text(quality.title),
            size: quality.size,
            providers: quality
                .url_list
                .unwrap_or_default()
                .into_iter()
                .map(|u| DownloadProvider {
                    provider: text(u.title),
                    url: text(u.url),
                })
                .collect(),
        })
        .collect()
}

fn episode_link(card: EpisodeCard) -> NavigationLink {
    NavigationLink {
        url: text(card.otakudesu_url),
        slug: card.episode_id,
    }
}

fn navigation(details: &mut WajikEpisodeDetails) -> EpisodeNavigation {
    EpisodeNavigation {
        previous: details.prev_episode.take().map(episode_link),
        // only the identifier is known for the parent anime
        anime: truthy(details.anime_id.clone()).map(|slug| NavigationLink {
            url: String::new(),
            slug: Some(slug),
        }),
        next: details.next_episode.take().map(episode_link),
    }
}

pub fn map_episode_detail(raw: EpisodeDetailResponseRaw) -> EpisodeDetailResponse {
    let success = raw.is_ok();
    let Some(mut details) = raw.data.and_then(|d| d.details) else {
        return EpisodeDetailResponse {
            success: false,
            data: EpisodeDetail::default(),
        };
    };

    let navigation = navigation(&mut details);
    let mirrors = flatten_mirrors(details.server);
    let downloads = flatten_downloads(details.download);
    let info = details.info.unwrap_or_default();

    EpisodeDetailResponse {
        success,
        data: EpisodeDetail {
            title: text(details.title),
            metadata: EpisodeMetadata {
                author: text(info.credit),
                release: text(details.release_time),
            },
            info: EpisodeInfo {
                duration: Some(text(info.duration)),
                kind: Some(text(info.kind)),
                encoder: Some(text(info.encoder)),
                genres: info.genre_list.map(genre_titles),
            },
            player_url: truthy(details.default_streaming_url),
            navigation,
            episodes: info
                .episode_list
                .unwrap_or_default()
                .into_iter()
                .map(map_episode)
                .collect(),
            mirrors,
            downloads,
        },
    }
}

/// Playable URL of a server lookup, if the upstream returned one
pub fn map_server_url(raw: ServerResponseRaw) -> Option<String> {
    truthy(raw.data.and_then(|d| d.details).and_then(|d| d.url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parse<T: serde::de::DeserializeOwned>(value: Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    fn pagination(value: Value) -> Option<PaginationInfo> {
        let p: WajikPagination = parse(value);
        to_internal_pagination(Some(&p))
    }

    #[test]
    fn test_pagination_from_total_pages() {
        let info = pagination(json!({ "currentPage": 2, "totalPages": 5 })).unwrap();
        assert_eq!(info.available_pages, vec![1, 2, 3, 4, 5]);
        assert_eq!(info.next_page, None);
    }

    #[test]
    fn test_pagination_fallback_current_and_next() {
        let info = pagination(json!({
            "currentPage": 3,
            "nextPage": 4,
            "hasNextPage": true
        }))
        .unwrap();
        assert_eq!(info.available_pages, vec![3, 4]);
        assert_eq!(info.next_page.as_deref(), Some("4"));
    }

    #[test]
    fn test_pagination_without_next_flag() {
        let info = pagination(json!({
            "currentPage": 3,
            "nextPage": 4,
            "hasNextPage": false
        }))
        .unwrap();
        assert_eq!(info.available_pages, vec![3, 4]);
        assert_eq!(info.next_page, None);
    }

    #[test]
    fn test_pagination_zero_values_are_absent() {
        let info = pagination(json!({
            "currentPage": 0,
            "nextPage": 0,
            "hasNextPage": true,
            "totalPages": 0
        }))
        .unwrap();
        assert!(info.available_pages.is_empty());
        assert_eq!(info.next_page, None);

        assert_eq!(to_internal_pagination(None), None);
    }

    #[test]
    fn test_pagination_clamps_large_total() {
        let info = pagination(json!({ "currentPage": 1, "totalPages": 20000 })).unwrap();
        assert_eq!(info.available_pages.len(), MAX_EXPANDED_PAGES as usize);
        assert_eq!(info.available_pages.first(), Some(&1));
        assert_eq!(info.available_pages.last(), Some(&MAX_EXPANDED_PAGES));
    }

    #[test]
    fn test_ongoing_card_full() {
        let item = map_ongoing_card(parse(json!({
            "title": "One Piece",
            "poster": "https://otakudesu.example/op.jpg",
            "episodes": "12",
            "releaseDay": "Minggu",
            "latestReleaseDate": "20 Okt",
            "animeId": "1piece-sub-indo",
            "href": "/otakudesu/anime/1piece-sub-indo",
            "otakudesuUrl": "https://otakudesu.example/anime/1piece-sub-indo/"
        })));

        assert_eq!(item.title, "One Piece");
        assert_eq!(item.slug, "1piece-sub-indo");
        assert_eq!(item.episode.as_deref(), Some("12"));
        assert_eq!(item.episode_info.as_deref(), Some("12"));
        assert_eq!(item.day.as_deref(), Some("Minggu"));
        assert_eq!(item.date.as_deref(), Some("20 Okt"));
        assert_eq!(item.link, "https://otakudesu.example/anime/1piece-sub-indo/");
        assert_eq!(item.thumbnail, "https://otakudesu.example/op.jpg");
        assert_eq!(item.kind.as_deref(), Some("ongoing"));
        assert_eq!(item.rating, None);
    }

    #[test]
    fn test_completed_card_full() {
        let item = map_completed_card(parse(json!({
            "title": "Bocchi the Rock!",
            "poster": "p.jpg",
            "episodes": 12,
            "score": "8.8",
            "lastReleaseDate": "25 Des",
            "animeId": "bocchi-rock-sub-indo",
            "otakudesuUrl": "u"
        })));

        assert_eq!(item.episode.as_deref(), Some("12"));
        assert_eq!(item.episode_info.as_deref(), Some("12"));
        assert_eq!(item.rating.as_deref(), Some("8.8"));
        assert_eq!(item.date.as_deref(), Some("25 Des"));
        assert_eq!(item.kind.as_deref(), Some("completed"));
        assert_eq!(item.day, None);
    }

    #[test]
    fn test_searched_card_full() {
        let item = map_searched_card(parse(json!({
            "title": "Naruto",
            "poster": "n.jpg",
            "status": "Completed",
            "score": "8.0",
            "animeId": "naruto-sub-indo",
            "genreList": [
                { "title": "Action", "genreId": "action" },
                { "title": "Adventure", "genreId": "adventure" }
            ]
        })));

        assert_eq!(item.genres, Some(vec!["Action".to_string(), "Adventure".to_string()]));
        assert_eq!(item.status.as_deref(), Some("Completed"));
        assert_eq!(item.rating.as_deref(), Some("8.0"));
        assert_eq!(item.kind, None);
        assert_eq!(item.link, "");
    }

    #[test]
    fn test_cards_missing_optional_fields() {
        let ongoing = map_ongoing_card(parse(json!({ "title": "X", "animeId": "x" })));
        assert_eq!(ongoing.episode, None);
        assert_eq!(ongoing.episode_info, None);
        assert_eq!(ongoing.day, None);
        assert_eq!(ongoing.date, None);
        assert_eq!(ongoing.link, "");
        assert_eq!(ongoing.thumbnail, "");

        let searched = map_searched_card(parse(json!({ "animeId": "y" })));
        assert_eq!(searched.genres, Some(Vec::new()));
        assert_eq!(searched.status, None);
        assert_eq!(searched.rating, None);

        let value = serde_json::to_value(&ongoing).unwrap();
        assert!(value.get("episode").is_none());
        assert!(value.get("day").is_none());
        assert_eq!(value["link"], "");
    }

    #[test]
    fn test_home_counts_and_defaults() {
        let home = map_home(parse(json!({
            "statusCode": 200,
            "data": {
                "ongoing": { "animeList": [{ "animeId": "a" }, { "animeId": "b" }] }
            }
        })));

        assert_eq!(home.ongoing.count, 2);
        assert_eq!(home.ongoing.data[1].slug, "b");
        assert_eq!(home.completed.count, 0);
        assert!(home.completed.data.is_empty());

        let empty = map_home(parse(json!({ "statusCode": 500, "data": null })));
        assert_eq!(empty, HomeResponse::default());
    }

    #[test]
    fn test_list_page_falls_back_to_requested() {
        let list = map_ongoing_list(
            parse(json!({
                "statusCode": 200,
                "data": { "animeList": [{ "animeId": "a" }] },
                "pagination": null
            })),
            7,
        );

        assert!(list.success);
        assert_eq!(list.page, Some(7));
        assert_eq!(list.total_data, 1);
        assert_eq!(list.pagination, None);
    }

    #[test]
    fn test_list_uses_upstream_page() {
        let list = map_completed_list(
            parse(json!({
                "statusCode": 200,
                "data": { "animeList": [] },
                "pagination": {
                    "currentPage": 2,
                    "prevPage": 1,
                    "hasPrevPage": true,
                    "nextPage": 3,
                    "hasNextPage": true,
                    "totalPages": 4
                }
            })),
            1,
        );

        assert_eq!(list.page, Some(2));
        let pagination = list.pagination.unwrap();
        assert_eq!(pagination.available_pages, vec![1, 2, 3, 4]);
        assert_eq!(pagination.next_page.as_deref(), Some("3"));
    }

    #[test]
    fn test_success_tracks_status_code_not_payload() {
        let list = map_ongoing_list(parse(json!({ "statusCode": 200, "data": null })), 1);
        assert!(list.success);
        assert!(list.data.is_empty());

        let search = map_search(parse(json!({
            "statusCode": 404,
            "data": { "animeList": [{ "animeId": "a" }] }
        })));
        assert!(!search.success);
        assert_eq!(search.total_data, 1);
    }

    fn anime_details(extra: Value) -> AnimeDetailResponseRaw {
        let mut details = json!({
            "title": "Sousou no Frieren",
            "poster": "f.jpg",
            "japanese": "葬送のフリーレン",
            "score": "",
            "status": "Ongoing",
            "synopsis": { "paragraphList": ["First.", "Second."] },
            "episodeList": [
                { "title": "Episode 2", "eps": 2, "date": "6 Okt", "episodeId": "frn-ep2", "otakudesuUrl": "u2" }
            ],
            "recommendedAnimeList": [
                { "title": "Mushishi", "poster": "m.jpg", "animeId": "mushishi-sub-indo" }
            ]
        });
        if let (Some(base), Some(extra)) = (details.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                base.insert(k.clone(), v.clone());
            }
        }
        parse(json!({ "statusCode": 200, "data": { "details": details } }))
    }

    #[test]
    fn test_anime_detail_falsy_score_omitted() {
        let detail = map_anime_detail(anime_details(json!({})));
        assert!(detail.success);
        assert_eq!(detail.data.info.score, None);
        assert_eq!(detail.data.info.status.as_deref(), Some("Ongoing"));
        assert_eq!(detail.data.info.studio, None);
        assert_eq!(detail.data.info.genres, None);

        let value = serde_json::to_value(&detail.data.info).unwrap();
        assert!(value.get("score").is_none());
    }

    #[test]
    fn test_anime_detail_truthy_fields_inserted() {
        let detail = map_anime_detail(anime_details(json!({
            "score": "8.5",
            "episodes": 28,
            "duration": "24 min",
            "aired": "Sep 29, 2023",
            "studios": "Madhouse",
            "type": "TV",
            "producers": "Aniplex",
            "genreList": [{ "title": "Fantasy" }, { "title": "Drama" }]
        })));

        let info = &detail.data.info;
        assert_eq!(info.score.as_deref(), Some("8.5"));
        assert_eq!(info.total_episode.as_deref(), Some("28"));
        assert_eq!(info.released_on.as_deref(), Some("Sep 29, 2023"));
        assert_eq!(info.studio.as_deref(), Some("Madhouse"));
        assert_eq!(info.kind.as_deref(), Some("TV"));
        assert_eq!(info.japanese.as_deref(), Some("葬送のフリーレン"));
        assert_eq!(info.genres, Some(vec!["Fantasy".to_string(), "Drama".to_string()]));
    }

    #[test]
    fn test_anime_detail_falsy_numbers_omitted() {
        let detail = map_anime_detail(anime_details(json!({
            "japanese": 0,
            "score": 0,
            "status": false,
            "episodes": 0,
            "duration": "",
            "type": 0.0
        })));

        assert!(detail.success);
        assert_eq!(detail.data.info, AnimeInfo::default());
        assert_eq!(detail.data.streaming_title, "");
        assert_eq!(serde_json::to_value(&detail.data.info).unwrap(), json!({}));
    }

    #[test]
    fn test_anime_detail_lists_and_synopsis() {
        let detail = map_anime_detail(anime_details(json!({ "genreList": [] }))).data;

        assert_eq!(detail.synopsis, "First.\nSecond.");
        assert_eq!(detail.streaming_title, "葬送のフリーレン");
        assert_eq!(detail.info.genres, None);
        assert_eq!(
            detail.episodes,
            vec![Episode {
                title: "Episode 2".to_string(),
                link: "u2".to_string(),
                slug: "frn-ep2".to_string(),
                release_date: Some("6 Okt".to_string()),
            }]
        );
        assert_eq!(detail.recommendations[0].slug, "mushishi-sub-indo");
        assert_eq!(detail.recommendations[0].link, "");
    }

    #[test]
    fn test_anime_detail_missing_details() {
        let detail = map_anime_detail(parse(json!({ "statusCode": 200, "data": {} })));
        assert!(!detail.success);
        assert_eq!(detail.data, AnimeDetail::default());

        let value = serde_json::to_value(&detail.data).unwrap();
        assert_eq!(value["episodes"], json!([]));
        assert_eq!(value["rekomendasi"], json!([]));
        assert_eq!(value["synopsis"], "");
    }

    fn episode_details() -> EpisodeDetailResponseRaw {
        parse(json!({
            "statusCode": 200,
            "data": {
                "details": {
                    "title": "Frieren Episode 3",
                    "animeId": "sousou-frieren-sub-indo",
                    "releaseTime": "2 hari yang lalu",
                    "defaultStreamingUrl": "https://desustream.example/embed/abc",
                    "hasPrevEpisode": true,
                    "prevEpisode": { "title": "Prev", "episodeId": "frn-ep2", "otakudesuUrl": "p" },
                    "hasNextEpisode": false,
                    "nextEpisode": null,
                    "server": {
                        "qualityList": [
                            {
                                "title": "360p",
                                "serverList": [
                                    { "title": "ondesu", "serverId": "s-1" },
                                    { "title": "desustream", "serverId": "s-2" }
                                ]
                            },
                            { "title": "720p", "serverList": [] },
                            { "title": "1080p" }
                        ]
                    },
                    "download": {
                        "qualityList": [
                            {
                                "title": "Mp4 480p",
                                "size": "60.5 MB",
                                "urlList": [
                                    { "title": "Pdrain", "url": "https://pdrain.example/1" },
                                    { "title": "Mega", "url": "https://mega.example/1" }
                                ]
                            },
                            { "title": "Mkv 1080p" }
                        ]
                    },
                    "info": {
                        "credit": "Tanjiro",
                        "encoder": "Nezuko",
                        "duration": "24 min",
                        "type": "TV",
                        "genreList": [{ "title": "Fantasy" }],
                        "episodeList": [{ "title": "Episode 1", "episodeId": "frn-ep1" }]
                    }
                }
            }
        }))
    }

    #[test]
    fn test_episode_mirrors_flattened() {
        let detail = map_episode_detail(episode_details()).data;

        assert_eq!(detail.mirrors.len(), 2);
        assert!(detail.mirrors.iter().all(|m| m.quality == "360p"));
        assert_eq!(detail.mirrors[0].provider, "ondesu");
        assert_eq!(detail.mirrors[1].server_id, "s-2");
        assert!(detail.mirrors.iter().all(|m| m.url.is_none()));
    }

    #[test]
    fn test_episode_downloads_grouped_by_quality() {
        let detail = map_episode_detail(episode_details()).data;

        assert_eq!(detail.downloads.len(), 2);
        assert_eq!(detail.downloads[0].size.as_deref(), Some("60.5 MB"));
        assert_eq!(
            detail.downloads[0].providers[1],
            DownloadProvider {
                provider: "Mega".to_string(),
                url: "https://mega.example/1".to_string(),
            }
        );
        assert!(detail.downloads[1].providers.is_empty());
        assert_eq!(detail.downloads[1].size, None);
    }

    #[test]
    fn test_episode_navigation() {
        let detail = map_episode_detail(episode_details()).data;

        assert_eq!(
            detail.navigation.previous,
            Some(NavigationLink {
                url: "p".to_string(),
                slug: Some("frn-ep2".to_string()),
            })
        );
        assert_eq!(detail.navigation.next, None);
        assert_eq!(
            detail.navigation.anime,
            Some(NavigationLink {
                url: String::new(),
                slug: Some("sousou-frieren-sub-indo".to_string()),
            })
        );
    }

    #[test]
    fn test_episode_metadata_and_info() {
        let detail = map_episode_detail(episode_details()).data;

        assert_eq!(detail.title, "Frieren Episode 3");
        assert_eq!(detail.metadata.author, "Tanjiro");
        assert_eq!(detail.metadata.release, "2 hari yang lalu");
        assert_eq!(detail.info.encoder.as_deref(), Some("Nezuko"));
        assert_eq!(detail.info.genres, Some(vec!["Fantasy".to_string()]));
        assert_eq!(
            detail.player_url.as_deref(),
            Some("https://desustream.example/embed/abc")
        );
        assert_eq!(detail.episodes[0].slug, "frn-ep1");
    }

    #[test]
    fn test_episode_sparse_details() {
        let detail = map_episode_detail(parse(json!({
            "statusCode": 200,
            "data": { "details": { "title": "Bare", "defaultStreamingUrl": "" } }
        })));

        assert!(detail.success);
        let data = detail.data;
        assert_eq!(data.player_url, None);
        assert_eq!(data.info.duration.as_deref(), Some(""));
        assert_eq!(data.info.genres, None);
        assert_eq!(data.navigation, EpisodeNavigation::default());
        assert!(data.mirrors.is_empty());
        assert!(data.downloads.is_empty());
    }

    #[test]
    fn test_episode_missing_details() {
        let detail = map_episode_detail(parse(json!({ "statusCode": 404, "data": null })));
        assert!(!detail.success);
        assert_eq!(detail.data, EpisodeDetail::default());
    }

    #[test]
    fn test_server_url() {
        let url = map_server_url(parse(json!({
            "statusCode": 200,
            "data": { "details": { "url": "https://desustream.example/embed/xyz" } }
        })));
        assert_eq!(url.as_deref(), Some("https://desustream.example/embed/xyz"));

        let empty = map_server_url(parse(json!({ "data": { "details": { "url": "" } } })));
        assert_eq!(empty, None);
        assert_eq!(map_server_url(parse(json!({}))), None);
    }
}
