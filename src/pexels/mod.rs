use std::{
    sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    },
    time::Duration,
};

use bytes::Bytes;
use reqwest::{
    Client as HttpClient, IntoUrl, Method, Response, Url,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub mod error;
pub mod models;
pub mod result;

pub use error::Error;
pub use models::{Photo, PhotoSize, PhotoSource, SearchResult};
pub use result::Result;

pub const PHOTO_API: &str = "https://api.pexels.com/v1";
pub const API_KEY_VAR: &str = "PEXELS_API_KEY";
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

macro_rules! query_params {
    ($($key:expr => $value:expr),+ $(,)?) => {
        &[
            $(($key, $value.to_string())),+
        ]
    };
}

/// Transport settings for a [`Client`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: PHOTO_API.to_string(),
            timeout_secs: Some(30),
        }
    }
}

/// Pexels API client.
///
/// Clones share the connection pool and the remaining quota counter.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    base_url: String,
    remaining_quota: Arc<AtomicU32>,
}

impl Client {
    pub fn new<T: AsRef<str>>(api_key: T) -> Result<Self> {
        Self::with_options(api_key, &Options::default())
    }

    /// Builds a client from the `PEXELS_API_KEY` environment variable.
    pub fn new_from_env(options: &Options) -> Result<Self> {
        Self::from_env_var(API_KEY_VAR, options)
    }

    fn from_env_var(key: &str, options: &Options) -> Result<Self> {
        let api_key = std::env::var(key).map_err(|_| Error::InvalidApiKey)?;

        Self::with_options(api_key, options)
    }

    pub fn with_options<T: AsRef<str>>(api_key: T, options: &Options) -> Result<Self> {
        let mut auth = HeaderValue::from_str(api_key.as_ref()).map_err(|_| Error::InvalidApiKey)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let mut builder = HttpClient::builder().default_headers(headers);
        if let Some(secs) = options.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build().map_err(Error::Build)?,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            remaining_quota: Arc::new(AtomicU32::new(0)),
        })
    }

    /// Last `X-Ratelimit-Remaining` value reported by the server, or 0 if
    /// none has been seen yet.
    pub fn remaining_quota(&self) -> u32 {
        self.remaining_quota.load(Ordering::Relaxed)
    }

    /// Searches photos matching `query`, returning a single page.
    ///
    /// The result is not checked for usability; see [`SearchResult::is_usable`].
    pub async fn search_photos(
        &self,
        query: &str,
        per_page: u32,
        page: u32,
    ) -> Result<SearchResult> {
        let url = Url::parse_with_params(
            &format!("{}/search", self.base_url),
            query_params!(
                "query" => query,
                "per_page" => per_page,
                "page" => page,
            ),
        )
        .map_err(|_| Error::InvalidUrl)?;

        let response = self.authenticated_request(Method::GET, url).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                "Pexels search returned non-success status"
            );
        }

        let body: Bytes = response.bytes().await.map_err(Error::BodyRead)?;
        let result = SearchResult::from_slice(&body)?;

        if !result.is_usable() {
            warn!(query, "Pexels search returned no usable result");
        }

        Ok(result)
    }

    /// Sends one request carrying the API key and records the remaining quota.
    ///
    /// `url` must already contain its query string. The body is left unread.
    pub async fn authenticated_request<U: IntoUrl>(
        &self,
        method: Method,
        url: U,
    ) -> Result<Response> {
        let request = self.http.request(method, url);

        let response = request.send().await.map_err(Error::Transport)?;
        debug!(
            url = %response.url(),
            status = response.status().as_u16(),
            "Pexels request completed"
        );

        self.record_quota(response.headers());

        Ok(response)
    }

    fn record_quota(&self, headers: &HeaderMap) {
        let remaining = headers
            .get(RATE_LIMIT_REMAINING)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u32>().ok());

        match remaining {
            Some(remaining) => {
                self.remaining_quota.store(remaining, Ordering::Relaxed);
                debug!(remaining, "Pexels rate limit");
            }

            None => debug!("Missing or malformed rate limit header, quota unchanged"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(RATE_LIMIT_REMAINING, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn quota_starts_at_zero() {
        let client = Client::new("token").unwrap();

        assert_eq!(client.remaining_quota(), 0);
    }

    #[test]
    fn quota_follows_numeric_header() {
        let client = Client::new("token").unwrap();

        client.record_quota(&headers("199"));
        assert_eq!(client.remaining_quota(), 199);

        client.record_quota(&headers(" 0 "));
        assert_eq!(client.remaining_quota(), 0);
    }

    #[test]
    fn malformed_quota_header_is_ignored() {
        let client = Client::new("token").unwrap();
        client.record_quota(&headers("25"));

        for value in ["-1", "many", "1.5", ""] {
            client.record_quota(&headers(value));
            assert_eq!(client.remaining_quota(), 25, "header {value:?}");
        }

        client.record_quota(&HeaderMap::new());
        assert_eq!(client.remaining_quota(), 25);
    }

    #[test]
    fn clones_share_quota() {
        let client = Client::new("token").unwrap();
        let clone = client.clone();

        clone.record_quota(&headers("7"));

        assert_eq!(client.remaining_quota(), 7);
    }

    #[test]
    fn rejects_unencodable_api_key() {
        let err = Client::new("line\nbreak").unwrap_err();

        assert!(matches!(err, Error::InvalidApiKey));
    }

    #[test]
    fn missing_env_key_is_invalid_api_key() {
        let err = Client::from_env_var("PEXELS_SEARCH_UNSET_TEST_KEY", &Options::default())
            .unwrap_err();

        assert!(matches!(err, Error::InvalidApiKey));
    }

    #[test]
    fn options_fill_missing_fields() {
        let options: Options = serde_json::from_str(r#"{"timeout_secs":null}"#).unwrap();

        assert_eq!(options.base_url, PHOTO_API);
        assert_eq!(options.timeout_secs, None);
    }
}
