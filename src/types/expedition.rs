use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A shardfall expedition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Expedition {
    /// Currently active players, by user id.
    pub active_players: HashMap<String, i64>,
    /// Contribution percentages by user id.
    pub contributors: HashMap<String, PlayerContribution>,
    /// Expedition class name.
    pub expedition_class: Option<String>,
    /// Expedition id.
    pub expedition_id: Option<String>,
    /// Owning house, for house shardfalls.
    pub house_id: Option<String>,
    /// Compact reference to the owning house.
    pub house_presentation_data: Option<super::house::PresentationData>,
    /// Whether this is the tutorial expedition.
    pub is_tutorial: bool,
    /// Completed quest count.
    pub num_quests_completed: i32,
    /// Overall completion percentage.
    pub percent_complete: f64,
    /// Current progress percentage.
    pub percent_progress: f64,
    /// Procedural island generation parameters.
    pub presentation_data: Option<ExpeditionIslandPresentationData>,
    /// Quest graph edges, one string per connection, formatted
    /// `<node>:VAULT` or `VAULT:<node>`.
    pub quest_node_connections: Vec<String>,
    /// Quest graph nodes by id.
    pub quest_node_slots: HashMap<String, QuestNode>,
    /// Quests on this expedition.
    pub quests: Vec<Quest>,
    /// Short-lived rendering data.
    pub transient_data: Option<TransientData>,
}

/// Short-lived rendering data for an expedition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TransientData {
    /// Island shape mask, encoded.
    pub shape_mask: Option<String>,
    /// Edge length of the shape mask.
    pub shape_mask_dimensions: i32,
}

/// A player's contribution to an expedition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlayerContribution {
    /// Display name of the contributor.
    pub display_name: Option<String>,
    /// Contribution percentage.
    pub percent: f64,
}

/// Lists of expeditions available to the logged-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExpeditionList {
    /// Expeditions the user has joined.
    pub joined_expeditions: Vec<Expedition>,
    /// Twitch integration expeditions.
    pub twitch_expeditions: Vec<Expedition>,
}

/// A quest on an expedition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Quest {
    /// Progress toward the quest goal.
    pub completion_status: Option<CompletionStatus>,
    /// Contribution counts by user id.
    pub contributors: HashMap<String, QuestContribution>,
    /// Owning expedition id.
    pub expedition_id: Option<String>,
    /// Position along the quest path.
    pub location: f64,
    /// Matchmaking partner data, untyped on the wire.
    pub matchmaking_partners: Option<serde_json::Value>,
    /// Node status code.
    pub node_status: i32,
    /// Presentation parameters.
    pub presentation_data: Option<QuestPresentationData>,
    /// Quest class name.
    pub quest_class: Option<String>,
    /// Quest id.
    pub quest_id: Option<String>,
    /// Graph node the quest occupies.
    pub quest_node_slot: Option<QuestNode>,
    /// Top contributor to the quest.
    pub top_contributor: Option<QuestContribution>,
    /// User-submitted content keyed by parameter name, untyped on the wire.
    pub user_submitted_content: HashMap<String, serde_json::Value>,
}

/// Presentation parameters of a quest, keyed by parameter name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuestPresentationData {
    /// Named display parameters, untyped on the wire.
    pub named_parameters: HashMap<String, serde_json::Value>,
}

/// Progress toward a quest goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CompletionStatus {
    /// Target value.
    pub goal: f64,
    /// Current value.
    pub progress: f64,
}

/// A node in the expedition's quest graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuestNode {
    /// Node index.
    pub index: i32,
    /// Node rarity.
    pub rarity: i32,
    /// Whether this is the start node.
    pub start: bool,
    /// Whether an active quest type occupies the node.
    pub active_quest_type: bool,
}

/// A player's contribution count toward a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuestContribution {
    /// Contribution count.
    pub count: i32,
    /// Display name of the contributor.
    pub display_name: Option<String>,
}

/// Procedural island generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IslandPresentationData {
    /// Seed for the base island shape.
    pub base_island_seed: i64,
    /// Height of the island underside.
    pub bottom_height: f64,
    /// Variance applied to the underside height.
    pub bottom_height_variance_percent: f64,
    /// Moisture threshold for desert biomes.
    pub desert_moisture_percent: f64,
    /// Variance applied to elevation.
    pub elevation_variance_percent: f64,
    /// Elevation threshold for forest biomes.
    pub forest_elevation_percent: f64,
    /// Noise gain.
    pub gain_percent: f64,
    /// Seed for island features.
    pub island_features_seed: i64,
    /// Noise lacunarity.
    pub lacunarity_percent: f64,
    /// Maximum terrain elevation.
    pub max_elevation: f64,
    /// Maximum island width.
    pub max_island_width: f64,
    /// Lloyd relaxation iterations for the voronoi mesh.
    pub num_lloyd_relaxations: i32,
    /// Noise octaves.
    pub num_octaves: i32,
    /// Voronoi cell count.
    pub num_voronoi_points: i32,
    /// Elevation threshold for snow.
    pub snow_elevation_percent: f64,
    /// Voronoi sampling resolution.
    pub voronoi_resolution: f64,
    /// Water coverage factor.
    pub water_factor_percent: f64,
    /// Base water level.
    pub water_level_constant: f64,
    /// Water level falloff toward the island edge.
    pub water_level_falloff_percent: f64,
}

/// Island generation parameters specific to expedition islands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExpeditionIslandPresentationData {
    /// Shared island parameters.
    #[serde(flatten)]
    pub island: IslandPresentationData,
    /// Parameter checksum.
    pub checksum: i64,
    /// Land level falloff constant.
    pub land_level_falloff_constant: f64,
    /// Maximum distance between quest nodes.
    pub max_distance_between_quests: f64,
    /// Maximum distance at which quests influence terrain.
    pub max_distance_quests_influence_land: f64,
    /// Minimum distance between quest nodes.
    pub min_distance_between_quests: f64,
    /// Minimum angle between successive quests.
    pub min_quest_progression_angle: f64,
    /// First name table index.
    pub name1: i32,
    /// Second name table index.
    pub name2: i32,
    /// First name number.
    pub name_num1: i32,
    /// Second name number.
    pub name_num2: i32,
    /// Name schema selector.
    pub name_type: i32,
    /// Number of event nodes on the island.
    pub num_event_nodes: i32,
}
