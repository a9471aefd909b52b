//! Core library for the `smartweather` client.
//!
//! This crate defines:
//! - The weather backend client and its wire payload
//! - Normalized weather records and the persisted recent-search history
//! - Pure display helpers (icon and theme selection)
//! - The lookup pipeline tying them together
//! - Configuration handling
//!
//! It is used by `smartweather-cli`, but can also be reused by other front-ends.

pub mod backend;
pub mod cache;
pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod pipeline;
pub mod storage;
pub mod theme;

pub use backend::{HttpBackend, WeatherBackend};
pub use cache::RecentCache;
pub use config::Config;
pub use error::{BackendError, LookupError, StorageError};
pub use icon::IconId;
pub use model::{BackendWeather, WeatherRecord};
pub use pipeline::{LookupOutcome, LookupPhase, Origin, ViewState, WeatherPipeline};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use theme::ThemeTag;
