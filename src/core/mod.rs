pub mod builder;
pub mod endpoint;
pub mod freshness;
pub mod refresher;

pub use crate::domain::model::{GameModel, GameProfile, Highscore, Leaderboard};
pub use crate::domain::ports::{ArtifactStore, Fetcher};
pub use crate::utils::error::Result;
