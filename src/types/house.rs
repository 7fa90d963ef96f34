use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::expedition::IslandPresentationData;
use super::game::Faction;

/// A house (player guild).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct House {
    /// User ids of house admins.
    pub admins: Vec<String>,
    /// Emblem identifier.
    pub emblem: Option<String>,
    /// House id.
    pub house_id: Option<String>,
    /// House name.
    pub house_name: Option<String>,
    /// Whether this is an outpost rather than a full house.
    pub is_outpost: bool,
    /// User ids of members. Only present when requested.
    pub members: Vec<String>,
    /// User ids of house owners.
    pub owners: Vec<String>,
    /// House slogan.
    pub slogan: Option<String>,
    /// Aggregated statistics.
    pub stats: Option<Stats>,
}

/// Aggregated house statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Stats {
    /// Per-expedition stats, untyped on the wire.
    pub expeditions: HashMap<String, serde_json::Value>,
    /// Per-faction play counts.
    pub factions: HashMap<Faction, FactionStats>,
    /// Per-player win counts.
    pub players: HashMap<String, PlayerStats>,
    /// Stats schema version.
    pub version: i32,
}

/// Play count for one faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FactionStats {
    /// Games played with this faction.
    pub played: i32,
}

/// Win count for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlayerStats {
    /// Wins contributed by this player.
    pub wins: i32,
}

/// Display information for a house's island.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Island {
    /// House id.
    pub house_id: Option<String>,
    /// Procedural island generation parameters.
    pub island_presentation_data: Option<IslandPresentationData>,
}

/// Compact house reference embedded in other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PresentationData {
    /// House name.
    pub house_name: Option<String>,
    /// Emblem identifier.
    pub emblem: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_parses_with_faction_keyed_stats() {
        let json = r#"{
            "house_id": "h1",
            "house_name": "Stormwatch",
            "owners": ["u1"],
            "stats": {
                "factions": {"SwarmFaction": {"played": 4}},
                "players": {"u1": {"wins": 2}},
                "version": 1
            }
        }"#;
        let house: House = serde_json::from_str(json).unwrap();
        let stats = house.stats.unwrap();
        assert_eq!(stats.factions[&Faction::Packrunner].played, 4);
        assert_eq!(stats.players["u1"].wins, 2);
    }
}
