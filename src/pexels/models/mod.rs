use serde::{Deserialize, Deserializer};

mod photo;
mod search;

pub use photo::{Photo, PhotoSize, PhotoSource};
pub use search::SearchResult;

/// Reads a JSON `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> core::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
