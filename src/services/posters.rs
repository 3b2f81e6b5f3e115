use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::store::PosterCache;

/// Timeout applied to every poster lookup
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Best-effort poster lookup boundary.
///
/// Implementations must never fail: any problem with the external service
/// degrades to an absent poster.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    async fn fetch_poster(&self, tmdb_id: Option<u64>) -> Option<String>;
}

/// Poster provider backed by the TMDB movie details endpoint.
#[derive(Clone)]
pub struct TmdbPosterClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    poster_base_url: String,
    cache: PosterCache,
}

impl TmdbPosterClient {
    pub fn new(
        api_key: String,
        api_url: String,
        poster_base_url: String,
        cache: PosterCache,
    ) -> anyhow::Result<Self> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
            poster_base_url,
            cache,
        })
    }

    /// Extracts the poster URL from a TMDB movie details body, if the
    /// `poster_path` field is present.
    fn poster_url(&self, body: &serde_json::Value) -> Option<String> {
        body.get("poster_path")
            .and_then(|p| p.as_str())
            .map(|path| format!("{}{}", self.poster_base_url, path))
    }

    /// Single uncached lookup against TMDB.
    ///
    /// `Ok(None)` is a definitive answer (the movie has no poster) and safe
    /// to cache; `Err` is a transient request, status, or parse failure and
    /// must not be remembered.
    async fn lookup(&self, tmdb_id: u64) -> Result<Option<String>, reqwest::Error> {
        let url = format!("{}/movie/{}", self.api_url, tmdb_id);

        let body: serde_json::Value = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(self.poster_url(&body))
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbPosterClient {
    async fn fetch_poster(&self, tmdb_id: Option<u64>) -> Option<String> {
        // Zero is the artifact producer's "unknown id" sentinel.
        let tmdb_id = match tmdb_id {
            None | Some(0) => return None,
            Some(id) => id,
        };

        if let Some(cached) = self.cache.get(tmdb_id).await {
            tracing::debug!(tmdb_id, "Poster cache hit");
            return cached;
        }

        match self.lookup(tmdb_id).await {
            Ok(poster) => {
                self.cache.insert(tmdb_id, poster.clone()).await;
                poster
            }
            Err(e) => {
                tracing::debug!(tmdb_id, error = %e, "Poster lookup failed");
                None
            }
        }
    }
}
