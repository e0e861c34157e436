pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FsArtifactStore, HttpFetcher};
pub use config::{Config, FetchFailurePolicy, MissingArtifactPolicy};
pub use core::builder::ModelBuilder;
pub use core::refresher::{CacheRefresher, RefreshReport};
pub use domain::model::{GameModel, GameProfile, Highscore, Leaderboard};
pub use utils::error::{CacheError, Result};
