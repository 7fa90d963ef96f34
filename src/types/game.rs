use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Playable factions, keyed on the wire by their internal class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    /// Petra, red ("BigCreatureFaction")
    Steelsinger,
    /// Mori, blue ("ControlFaction")
    Fatekeeper,
    /// Vardan, green ("EarthbenderFaction")
    Landshaper,
    /// Sabine, purple ("SacrificeFaction")
    Bloodbinder,
    /// Juro, yellow ("SwarmFaction")
    Packrunner,
    /// Wynn, orange ("DirectBurnFaction")
    Wayfinder,
}

impl Faction {
    const ALL: [Self; 6] = [
        Self::Steelsinger,
        Self::Fatekeeper,
        Self::Landshaper,
        Self::Bloodbinder,
        Self::Packrunner,
        Self::Wayfinder,
    ];

    /// The wire-format name of the faction.
    #[must_use]
    pub const fn internal_name(self) -> &'static str {
        match self {
            Self::Steelsinger => "BigCreatureFaction",
            Self::Fatekeeper => "ControlFaction",
            Self::Landshaper => "EarthbenderFaction",
            Self::Bloodbinder => "SacrificeFaction",
            Self::Packrunner => "SwarmFaction",
            Self::Wayfinder => "DirectBurnFaction",
        }
    }

    /// Looks a faction up by its wire-format name, case-insensitively.
    #[must_use]
    pub fn by_internal_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|faction| faction.internal_name().eq_ignore_ascii_case(name))
    }
}

impl Serialize for Faction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.internal_name())
    }
}

impl<'de> Deserialize<'de> for Faction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::by_internal_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown faction {name:?}")))
    }
}

/// How a game ended, keyed on the wire by a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEndCondition {
    /// 0
    Win,
    /// 1
    Loss,
    /// 2
    LossConcede,
    /// 3
    WinConcede,
    /// 4
    Draw,
}

impl GameEndCondition {
    /// The wire-format code of the condition.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Win => 0,
            Self::Loss => 1,
            Self::LossConcede => 2,
            Self::WinConcede => 3,
            Self::Draw => 4,
        }
    }

    /// Looks a condition up by its wire-format code.
    #[must_use]
    pub const fn by_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Win),
            1 => Some(Self::Loss),
            2 => Some(Self::LossConcede),
            3 => Some(Self::WinConcede),
            4 => Some(Self::Draw),
            _ => None,
        }
    }
}

impl Serialize for GameEndCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for GameEndCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Self::by_code(code).ok_or_else(|| de::Error::custom(format!("unknown end condition {code}")))
    }
}

/// One entry of a user's match history.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Default)]
#[serde(default)]
pub struct Game {
    /// End condition adjusted for the queried user's perspective.
    pub adjusted_end_condition: Option<GameEndCondition>,
    /// Game id.
    pub game_id: Option<String>,
    /// Display name of the opponent.
    pub opponent_display_name: Option<String>,
    /// User id of the opponent.
    pub opponent_id: Option<String>,
    /// Start date, formatted `dd MMM yyyy HH:mm:ss`.
    pub start_date: Option<String>,
}

/// Wrapper around the match history list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, Default)]
#[serde(default)]
pub struct GameList {
    /// The games, most recent first.
    pub games: Vec<Game>,
}
