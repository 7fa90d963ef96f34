//! Typed records for the Shardbound API's JSON responses.
//!
//! Field names map 1:1 onto the wire format, which uses
//! `lower_case_with_underscores` keys.

pub mod deck;
pub mod expedition;
pub mod game;
pub mod house;
pub mod login;
pub mod misc;
pub mod user;

pub use deck::{Deck, DeckList};
pub use expedition::{Expedition, ExpeditionList, Quest};
pub use game::{Faction, Game, GameEndCondition, GameList};
pub use house::House;
pub use login::{ApiScope, LoginResult};
pub use misc::{DownloadUrl, EndpointAddress, FriendList, InviteList, MapList, Preferences, VersionInfo};
pub use user::{User, WelcomeMessage};
