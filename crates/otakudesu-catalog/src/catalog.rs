//! Catalog service.
//!
//! Couples the wajik client with the translator: one upstream request per
//! call, mapped into the internal models. Transport errors propagate, except
//! for server URL lookups which degrade to `None`.

use crate::api::{ApiResult, WajikClient};
use crate::navigation::{NavigationToken, Navigator};
use crate::translator;
use shared::models::*;
use tracing::{debug, info, warn};

/// Catalog front for page-level loaders
pub struct AnimeCatalog {
    client: WajikClient,
    navigator: Navigator,
}

impl AnimeCatalog {
    /// Create a new catalog on top of a client
    pub fn new(client: WajikClient) -> Self {
        Self {
            client,
            navigator: Navigator::new(),
        }
    }

    /// Create a catalog for the given base URL
    pub fn from_base_url(base_url: &str) -> ApiResult<Self> {
        Ok(Self::new(WajikClient::new(base_url)?))
    }

    /// Begin a navigation; requests of earlier navigations are abandoned
    pub fn navigate(&self) -> NavigationToken {
        self.navigator.begin()
    }

    /// Ongoing and completed sections of the home page
    pub async fn get_home(&self) -> ApiResult<HomeResponse> {
        info!("Fetching home");
        let raw = self.client.home().await?;
        Ok(translator::map_home(raw))
    }

    /// One page of currently airing anime
    pub async fn get_ongoing_anime(&self, page: u32) -> ApiResult<ListResponse> {
        info!(page = page, "Fetching ongoing anime");
        let raw = self.client.ongoing(page).await?;
        Ok(translator::map_ongoing_list(raw, page))
    }

    /// One page of completed anime
    pub async fn get_completed_anime(&self, page: u32) -> ApiResult<ListResponse> {
        info!(page = page, "Fetching completed anime");
        let raw = self.client.completed(page).await?;
        Ok(translator::map_completed_list(raw, page))
    }

    pub async fn search_anime(&self, query: &str) -> ApiResult<SearchResponse> {
        info!(query = %query, "Searching anime");
        let raw = self.client.search(query).await?;
        Ok(translator::map_search(raw))
    }

    pub async fn get_anime_detail(&self, slug: &str) -> ApiResult<AnimeDetailResponse> {
        info!(slug = %slug, "Fetching anime detail");
        let raw = self.client.anime(slug).await?;
        let detail = translator::map_anime_detail(raw);
        if !detail.success {
            warn!(slug = %slug, "Anime detail unavailable");
        }
        Ok(detail)
    }

    /// Episode page; mirrors come back unresolved
    pub async fn get_episode_detail(&self, slug: &str) -> ApiResult<EpisodeDetailResponse> {
        info!(slug = %slug, "Fetching episode detail");
        let raw = self.client.episode(slug).await?;
        let detail = translator::map_episode_detail(raw);
        if !detail.success {
            warn!(slug = %slug, "Episode detail unavailable");
        }
        Ok(detail)
    }

    /// Playable URL for a server, or `None` when it cannot be resolved.
    ///
    /// Never fails: transport and decode errors are logged and swallowed.
    pub async fn get_server_url(&self, server_id: &str) -> Option<String> {
        debug!(server_id = %server_id, "Resolving server URL");
        match self.client.server(server_id).await {
            Ok(raw) => translator::map_server_url(raw),
            Err(e) => {
                warn!(server_id = %server_id, error = %e, "Failed to resolve server URL");
                None
            }
        }
    }

    /// Resolve one mirror in place. Returns whether it now has a URL.
    pub async fn resolve_mirror(&self, mirror: &mut Mirror) -> bool {
        if mirror.is_resolved() {
            return true;
        }
        if mirror.server_id.is_empty() {
            return false;
        }

        mirror.url = self.get_server_url(&mirror.server_id).await;
        mirror.is_resolved()
    }

    /// Resolve mirrors one after another, stopping early if the navigation
    /// that requested them was superseded. Returns the number resolved.
    pub async fn resolve_mirrors(&self, mirrors: &mut [Mirror], token: &NavigationToken) -> usize {
        let mut resolved = 0;
        for mirror in mirrors.iter_mut() {
            if token.is_superseded() {
                debug!("Mirror resolution abandoned");
                break;
            }
            if self.resolve_mirror(mirror).await {
                resolved += 1;
            }
        }
        resolved
    }
}
