use serde::Serialize;

/// Name and version of the game as reported by the scoring service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameProfile {
    pub name: String,
    pub version: String,
}

/// A single leaderboard with its highscores in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    /// Stable identifier, also the cache-path segment for this board.
    pub id: String,
    pub name: String,
    /// Expected entry count reported by the service, informational only.
    pub size: u32,
    pub highscores: Vec<Highscore>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highscore {
    pub score: i64,
    pub created: String,
    pub updated: String,
    pub display_text: String,
    pub user_name: String,
    pub user_profile_pic: String,
    pub user_gamer_score: u32,
}

/// Result of a model build: everything the cache knows about one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameModel {
    pub profile: GameProfile,
    pub leaderboards: Vec<Leaderboard>,
}
