use std::fmt;
use std::path::PathBuf;

/// Names of the documents this cache knows how to hold.
///
/// Keeping the set closed means the refresher and the model builder can
/// never disagree about where an artifact lives on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Artifact {
    GameProfile { game_id: String },
    LeaderboardListing,
    Highscores { leaderboard_id: u64 },
}

impl Artifact {
    /// Path of the artifact relative to the cache root.
    pub fn rel_path(&self) -> PathBuf {
        match self {
            Artifact::GameProfile { game_id } => PathBuf::from(format!("{}.xml", game_id)),
            Artifact::LeaderboardListing => PathBuf::from("leaderboards.xml"),
            Artifact::Highscores { leaderboard_id } => PathBuf::from("leaderboards")
                .join(leaderboard_id.to_string())
                .join("highscores.xml"),
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.rel_path().display())
    }
}
