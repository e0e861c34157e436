//! Typed forms of the XML documents served by the scoring service.
//!
//! Everything crossing the cache boundary is decoded into (and encoded
//! from) these structs, so field access after that point is plain Rust
//! instead of ad-hoc tree navigation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "game")]
pub struct GameProfileDoc {
    pub name: String,
    pub current_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "leaderboards")]
pub struct LeaderboardListingDoc {
    #[serde(rename = "leaderboard", default)]
    pub leaderboards: Vec<LeaderboardEntryDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "leaderboard")]
pub struct LeaderboardEntryDoc {
    pub id: u64,
    pub name: String,
    pub size: u32,
    pub highscores_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "highscores")]
pub struct HighscoreListingDoc {
    #[serde(rename = "highscore", default)]
    pub highscores: Vec<HighscoreEntryDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "highscore")]
pub struct HighscoreEntryDoc {
    pub score: i64,
    pub created_at: String,
    pub updated_at: String,
    pub display_text: String,
    pub user: UserDoc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "user")]
pub struct UserDoc {
    pub name: String,
    pub profile_picture_url: String,
    pub open_feint_gamer_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_game_profile() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<game>
  <name>Space Miner</name>
  <current_version>1.2.4</current_version>
</game>"#;

        let doc: GameProfileDoc = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(doc.name, "Space Miner");
        assert_eq!(doc.current_version, "1.2.4");
    }

    #[test]
    fn test_decode_leaderboard_listing() {
        let xml = r#"<leaderboards>
  <leaderboard>
    <id>101</id>
    <name>Endless Mode</name>
    <size>30</size>
    <highscores_url>http://api.example.com/leaderboards/101/high_scores.xml</highscores_url>
  </leaderboard>
  <leaderboard>
    <id>102</id>
    <name>Story Mode</name>
    <size>30</size>
    <highscores_url>http://api.example.com/leaderboards/102/high_scores.xml</highscores_url>
  </leaderboard>
</leaderboards>"#;

        let doc: LeaderboardListingDoc = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(doc.leaderboards.len(), 2);
        assert_eq!(doc.leaderboards[0].id, 101);
        assert_eq!(doc.leaderboards[0].name, "Endless Mode");
        assert_eq!(doc.leaderboards[1].id, 102);
        assert_eq!(
            doc.leaderboards[1].highscores_url,
            "http://api.example.com/leaderboards/102/high_scores.xml"
        );
    }

    #[test]
    fn test_decode_empty_listing() {
        let doc: LeaderboardListingDoc = quick_xml::de::from_str("<leaderboards/>").unwrap();
        assert!(doc.leaderboards.is_empty());
    }

    #[test]
    fn test_decode_highscores_with_nested_user() {
        let xml = r#"<highscores>
  <highscore>
    <score>100</score>
    <created_at>2024-01-01T00:00:00Z</created_at>
    <updated_at>2024-01-02T00:00:00Z</updated_at>
    <display_text>100 points</display_text>
    <user>
      <name>alice</name>
      <profile_picture_url>http://cdn.example.com/alice.png</profile_picture_url>
      <open_feint_gamer_score>500</open_feint_gamer_score>
    </user>
  </highscore>
</highscores>"#;

        let doc: HighscoreListingDoc = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(doc.highscores.len(), 1);
        let row = &doc.highscores[0];
        assert_eq!(row.score, 100);
        assert_eq!(row.created_at, "2024-01-01T00:00:00Z");
        assert_eq!(row.user.name, "alice");
        assert_eq!(row.user.open_feint_gamer_score, 500);
    }

    #[test]
    fn test_encode_decode_preserves_fields() {
        let doc = HighscoreListingDoc {
            highscores: vec![HighscoreEntryDoc {
                score: -42,
                created_at: "2024-03-01".to_string(),
                updated_at: "2024-03-02".to_string(),
                display_text: "42 under par".to_string(),
                user: UserDoc {
                    name: "bob".to_string(),
                    profile_picture_url: "http://cdn.example.com/bob.png".to_string(),
                    open_feint_gamer_score: 75,
                },
            }],
        };

        let xml = quick_xml::se::to_string(&doc).unwrap();
        let parsed: HighscoreListingDoc = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(parsed, doc);
    }

    #[test]
    fn test_decode_malformed_document_fails() {
        let result: Result<GameProfileDoc, _> = quick_xml::de::from_str("<game><name>oops");
        assert!(result.is_err());
    }
}
