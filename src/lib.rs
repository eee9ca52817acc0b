pub mod config;
pub mod output;
pub mod pexels;

pub use config::Config;
pub use pexels::{Client, Error, Photo, PhotoSize, PhotoSource, Result, SearchResult};
