use serde::{Deserialize, Serialize};

use super::Photo;
use crate::pexels::{Error, Result};

/// One page of photo search results.
///
/// A `page` of zero marks a result with no usable data, either because the
/// body was empty or because the payload did not describe a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(deserialize_with = "super::null_as_default")]
    page: u32,
    #[serde(
        rename = "perPage",
        alias = "per_page",
        deserialize_with = "super::null_as_default"
    )]
    per_page: u32,
    #[serde(
        rename = "totalResult",
        alias = "total_results",
        deserialize_with = "super::null_as_default"
    )]
    total_result: u64,
    #[serde(
        rename = "nextPage",
        alias = "next_page",
        deserialize_with = "super::null_as_default"
    )]
    next_page: String,
    #[serde(deserialize_with = "super::null_as_default")]
    photos: Vec<Photo>,
}

impl SearchResult {
    /// Decodes a raw response body.
    ///
    /// An empty (or whitespace-only) body yields the default, unusable result
    /// instead of an error.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(Error::Decode)
    }

    pub fn is_usable(&self) -> bool {
        self.page != 0
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn total_result(&self) -> u64 {
        self.total_result
    }

    pub fn next_page(&self) -> Option<&str> {
        (!self.next_page.is_empty()).then_some(self.next_page.as_str())
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }
}
