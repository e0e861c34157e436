/// Builds the remote URLs the refresher consumes.
///
/// The auth suffix is opaque: it is appended verbatim to every URL and
/// never inspected.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
    game_id: String,
    auth_suffix: String,
}

impl Endpoints {
    pub fn new(base_url: &str, game_id: &str, auth_suffix: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            game_id: game_id.to_string(),
            auth_suffix: auth_suffix.to_string(),
        }
    }

    pub fn game_profile(&self) -> String {
        format!(
            "{}/games/{}.xml{}",
            self.base_url, self.game_id, self.auth_suffix
        )
    }

    pub fn leaderboard_listing(&self) -> String {
        format!(
            "{}/games/{}/leaderboards.xml{}",
            self.base_url, self.game_id, self.auth_suffix
        )
    }

    /// Highscore URLs come from the listing document already absolute;
    /// only the auth suffix is added.
    pub fn highscores(&self, listing_url: &str) -> String {
        format!("{}{}", listing_url, self.auth_suffix)
    }
}
