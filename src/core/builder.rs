use crate::config::{Config, MissingArtifactPolicy};
use crate::domain::artifact::Artifact;
use crate::domain::documents::{
    GameProfileDoc, HighscoreEntryDoc, HighscoreListingDoc, LeaderboardListingDoc,
};
use crate::domain::model::{GameModel, GameProfile, Highscore, Leaderboard};
use crate::domain::ports::ArtifactStore;
use crate::utils::error::{CacheError, Result};
use serde::de::DeserializeOwned;

/// Assembles the domain model from cache contents.
///
/// Never fetches. What the builder does with an absent artifact is a
/// policy choice: skip it (that part of the model stays empty) or fail.
pub struct ModelBuilder<S> {
    store: S,
    game_id: String,
    on_missing: MissingArtifactPolicy,
}

impl<S: ArtifactStore> ModelBuilder<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            game_id: config.game_id.clone(),
            on_missing: config.on_missing_artifact,
        }
    }

    pub fn build(&self) -> Result<GameModel> {
        let profile_artifact = Artifact::GameProfile {
            game_id: self.game_id.clone(),
        };
        let profile = match self.load::<GameProfileDoc>(&profile_artifact)? {
            Some(doc) => GameProfile {
                name: doc.name,
                version: doc.current_version,
            },
            None => GameProfile::default(),
        };

        let listing = self
            .load::<LeaderboardListingDoc>(&Artifact::LeaderboardListing)?
            .unwrap_or_default();

        let mut leaderboards = Vec::with_capacity(listing.leaderboards.len());
        for entry in listing.leaderboards {
            let artifact = Artifact::Highscores {
                leaderboard_id: entry.id,
            };
            let highscores = match self.load::<HighscoreListingDoc>(&artifact)? {
                Some(doc) => doc.highscores.into_iter().map(project_highscore).collect(),
                None => Vec::new(),
            };
            leaderboards.push(Leaderboard {
                id: entry.id.to_string(),
                name: entry.name,
                size: entry.size,
                highscores,
            });
        }

        Ok(GameModel {
            profile,
            leaderboards,
        })
    }

    fn load<D: DeserializeOwned>(&self, artifact: &Artifact) -> Result<Option<D>> {
        match self.store.read(artifact) {
            Ok(document) => Ok(Some(document)),
            Err(CacheError::NotFound(_)) => match self.on_missing {
                MissingArtifactPolicy::Skip => {
                    tracing::debug!("{} is absent, contributing nothing", artifact);
                    Ok(None)
                }
                MissingArtifactPolicy::Fail => Err(CacheError::NotFound(artifact.to_string())),
            },
            Err(err) => Err(err),
        }
    }
}

/// Each row is projected from its own entry, never from a node shared
/// across iterations.
fn project_highscore(row: HighscoreEntryDoc) -> Highscore {
    Highscore {
        score: row.score,
        created: row.created_at,
        updated: row.updated_at,
        display_text: row.display_text,
        user_name: row.user.name,
        user_profile_pic: row.user.profile_picture_url,
        user_gamer_score: row.user.open_feint_gamer_score,
    }
}
