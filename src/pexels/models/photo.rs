use serde::{Deserialize, Serialize};

/// Named image-size variants served for every photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoSize {
    Original,
    Large,
    Large2x,
    Medium,
    Small,
    Portrait,
    Square,
    Landscape,
    Tiny,
}

impl PhotoSize {
    pub const ALL: [PhotoSize; 9] = [
        PhotoSize::Original,
        PhotoSize::Large,
        PhotoSize::Large2x,
        PhotoSize::Medium,
        PhotoSize::Small,
        PhotoSize::Portrait,
        PhotoSize::Square,
        PhotoSize::Landscape,
        PhotoSize::Tiny,
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotoSource {
    #[serde(deserialize_with = "super::null_as_default")]
    original: String,
    #[serde(deserialize_with = "super::null_as_default")]
    large: String,
    #[serde(deserialize_with = "super::null_as_default")]
    large2x: String,
    #[serde(deserialize_with = "super::null_as_default")]
    medium: String,
    #[serde(deserialize_with = "super::null_as_default")]
    small: String,
    #[serde(
        rename = "potrait",
        alias = "portrait",
        deserialize_with = "super::null_as_default"
    )]
    portrait: String,
    #[serde(deserialize_with = "super::null_as_default")]
    square: String,
    #[serde(deserialize_with = "super::null_as_default")]
    landscape: String,
    #[serde(deserialize_with = "super::null_as_default")]
    tiny: String,
}

impl PhotoSource {
    /// Returns the URL for `size`, or `None` when the variant is unavailable.
    pub fn url(&self, size: PhotoSize) -> Option<&str> {
        let url = match size {
            PhotoSize::Original => &self.original,
            PhotoSize::Large => &self.large,
            PhotoSize::Large2x => &self.large2x,
            PhotoSize::Medium => &self.medium,
            PhotoSize::Small => &self.small,
            PhotoSize::Portrait => &self.portrait,
            PhotoSize::Square => &self.square,
            PhotoSize::Landscape => &self.landscape,
            PhotoSize::Tiny => &self.tiny,
        };

        (!url.is_empty()).then_some(url.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    #[serde(deserialize_with = "super::null_as_default")]
    id: u64,
    #[serde(deserialize_with = "super::null_as_default")]
    width: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    height: u32,
    #[serde(deserialize_with = "super::null_as_default")]
    url: String,
    #[serde(deserialize_with = "super::null_as_default")]
    photographer: String,
    #[serde(
        rename = "photographerUrl",
        alias = "photographer_url",
        deserialize_with = "super::null_as_default"
    )]
    photographer_url: String,
    #[serde(deserialize_with = "super::null_as_default")]
    src: PhotoSource,
}

impl Photo {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn photographer(&self) -> &str {
        &self.photographer
    }

    pub fn photographer_url(&self) -> &str {
        &self.photographer_url
    }

    pub fn src(&self) -> &PhotoSource {
        &self.src
    }
}
