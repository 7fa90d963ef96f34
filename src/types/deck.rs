use serde::{Deserialize, Serialize};

/// A constructed deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Deck {
    /// Game version the deck was last validated against.
    pub valid_version: Option<String>,
    /// Primary color index.
    pub primary_color: i32,
    /// Secondary color index.
    pub secondary_color: i32,
    /// Deck name.
    pub name: Option<String>,
    /// Whether the deck can still be edited.
    pub immutable: bool,
    /// Deck id.
    pub id: Option<String>,
    /// Commander card type id.
    pub commander_type: i64,
    /// Validation errors, if any.
    pub errors: Vec<serde_json::Value>,
    /// Card type ids in the deck.
    pub cards: Vec<i64>,
}

/// Wrapper around a list of decks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DeckList {
    /// The decks.
    pub decks: Vec<Deck>,
}
