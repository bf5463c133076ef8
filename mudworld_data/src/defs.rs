use serde::{Deserialize, Serialize};

/// One converted world file: the decoded rooms in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ZoneDef {
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

/// A single decoded room record.
///
/// Room numbers are unique within one zone file but nothing validates
/// them globally; exits may point into other zones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDef {
    pub number: i64,
    pub zone: i64,
    pub name: String,
    pub description: String,
    /// Decoded room flag names, ascending bit order for numeric vectors.
    pub bits: Vec<String>,
    pub sector: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    #[serde(default)]
    pub extra_descs: Vec<ExtraDescDef>,
    #[serde(default)]
    pub procs: Vec<ProcDef>,
}

/// A way out of a room, in encounter order (never deduplicated or sorted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub door_flag: String,
    pub key_number: i64,
    pub destination: i64,
}

/// Extra scenery the player can look at inside a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraDescDef {
    pub keywords: Vec<String>,
    pub description: String,
}

/// A scripted room trigger.
///
/// Fields that a given proc kind does not use stay at their zero/empty
/// defaults in the serialized record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProcDef {
    #[serde(rename = "proc")]
    pub action: String,
    #[serde(rename = "percentchance")]
    pub percent_chance: i64,
    #[serde(default)]
    pub destination: i64,
    #[serde(default)]
    pub direction: String,
    #[serde(rename = "messagetoplayer", default)]
    pub message_to_player: String,
}
