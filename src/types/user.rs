use serde::{Deserialize, Serialize};

/// Publicly visible information about a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct User {
    /// Id of the game the user is currently in, if any.
    pub active_game: Option<String>,
    /// Display name.
    pub display_name: Option<String>,
    /// Id of the user's house, if they belong to one.
    pub house_id: Option<String>,
    /// Id of the house shardfall expedition the user participates in.
    pub house_shardfall_expedition: Option<String>,
    /// Whether the account is flagged as a developer account.
    pub is_dev: bool,
    /// Number of completed quests.
    pub quests_completed: i32,
    /// Presence status code.
    pub status: i32,
    /// Linked Twitch display name.
    pub twitch_display_name: Option<String>,
    /// Linked Twitch account id.
    pub twitch_id: Option<i64>,
    /// User id.
    pub user_id: Option<String>,
    /// Number of wins.
    pub wins: i32,
}

/// Information only visible to the logged-in user themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PrivateData {
    /// Whether the EULA has been accepted.
    pub accepted_eula: bool,
    /// Timestamp of the last quest reroll.
    pub last_reroll: Option<String>,
    /// User id.
    pub user_id: Option<String>,
}

/// Welcome message shown on first login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WelcomeMessage {
    /// Message title.
    pub title: Option<String>,
    /// Message body.
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_parses_with_partial_fields() {
        let json = r#"{"user_id": "u1", "display_name": "Boreeas", "wins": 12, "is_dev": false}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Boreeas"));
        assert_eq!(user.wins, 12);
        assert!(user.active_game.is_none());
    }
}
