use serde::{Deserialize, Serialize};

/// Untyped preference key/value mapping.
///
/// The preference schema is open-ended on the wire; values stay explicit
/// JSON rather than being reflected into concrete types.
pub type Preferences = serde_json::Map<String, serde_json::Value>;

/// Connection information for the messaging service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EndpointAddress {
    /// Server address.
    pub ip: Option<String>,
    /// Server port.
    pub port: u16,
}

/// Map rotation: card-table ids of the maps currently in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MapList {
    /// Id of the default map.
    #[serde(rename = "default")]
    pub default_map: i64,
    /// Ids of all maps in rotation.
    pub maps: Vec<i64>,
}

/// Version reply of the release endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version string.
    pub version: String,
}

/// Download location reply of the release endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadUrl {
    /// Download URL.
    pub url: String,
}

/// Wrapper around the friend list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FriendList {
    /// User ids of friends.
    pub friends: Vec<String>,
}

/// Wrapper around pending house invites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InviteList {
    /// Pending invites, untyped on the wire.
    pub invites: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_list_renames_default() {
        let list: MapList = serde_json::from_str(r#"{"default": 10, "maps": [10, 11]}"#).unwrap();
        assert_eq!(list.default_map, 10);
        assert_eq!(list.maps, vec![10, 11]);
    }

    #[test]
    fn endpoint_address_parses() {
        let addr: EndpointAddress = serde_json::from_str(r#"{"ip": "10.0.0.1", "port": 9933}"#).unwrap();
        assert_eq!(addr.ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(addr.port, 9933);
    }
}
