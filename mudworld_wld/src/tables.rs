//! Decoder tables for the legacy world-file codes.
//!
//! All tables are process-wide read-only statics. Lookups keep the legacy
//! string keys; a key missing from a table is always a hard parse error,
//! never a default.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::ParseError;

lazy_static! {
    /// Sector type code -> terrain name.
    pub static ref SECTOR_TYPES: HashMap<&'static str, &'static str> = HashMap::from([
        ("0", "INSIDE"),
        ("1", "CITY"),
        ("2", "FIELD"),
        ("3", "FOREST"),
        ("4", "HILLS"),
        ("5", "MOUNTAIN"),
        ("6", "WATER_SWIM"),
        ("7", "WATER_NOSWIM"),
        ("8", "UNDERWATER"),
        ("9", "FLYING"),
        ("10", "VOID"),
        ("11", "DESERT"),
        ("12", "FROZEN_WASTE"),
        ("13", "FROZEN_MOUNTAINS"),
        ("14", "FROZEN_UNDERWATER"),
        ("15", "FROZEN_OCEAN"),
    ]);

    /// Exit direction code -> compass name.
    pub static ref EXIT_DIRECTIONS: HashMap<&'static str, &'static str> = HashMap::from([
        ("0", "north"),
        ("1", "east"),
        ("2", "south"),
        ("3", "west"),
        ("4", "up"),
        ("5", "down"),
    ]);

    /// Door flag code -> door kind name. Sparse: the gaps are reserved
    /// codes that legacy zone files never assigned.
    pub static ref DOOR_FLAGS: HashMap<&'static str, &'static str> = HashMap::from([
        ("0", "NONE"),
        ("1", "NORMAL"),
        ("2", "CLOSED"),
        ("3", "HIDDENALTAR"),
        ("4", "LOCKED"),
        ("5", "GATE"),
        ("7", "SMALLWOODENDOOR"),
        ("8", "UNUSED1"),
        ("9", "DEATH1"),
        ("11", "WOODEN"),
        ("16", "UNUSED2"),
        ("31", "WALL"),
        ("32", "PICKPROOF"),
        ("33", "3BRIDGELAVA"),
        ("35", "WILLOWDOOR"),
        ("39", "SECRETDOOR"),
        ("64", "TRAP1"),
        ("128", "UNUSED3"),
        ("256", "NOBASH"),
        ("257", "ELEGANTDOOR"),
        ("259", "METALPLATEMARK"),
        ("263", "SECRETFIREPLACE"),
        ("289", "PORTRAITDOOR"),
        ("291", "ALTARGREYMASS"),
        ("293", "FRENCHBALCONY"),
        ("295", "BENEATHICEFLOOR"),
        ("299", "KURRELDOOR"),
        ("315", "PENTAGRAM"),
        ("318", "PERSONALDOOR"),
        ("512", "UNUSED4"),
        ("803", "SMALLHOVERDOOR"),
        ("807", "HOBBITHOME"),
        ("1024", "UNUSED5"),
        ("1830", "MOONGATE"),
        ("2048", "TRAP2"),
        ("2112", "OPENSQUARE"),
        ("2113", "DIRTDOOR"),
        ("2375", "WINGEDDOOR"),
    ]);

    /// Proc token -> canonical action name. An identity mapping today,
    /// kept as a table so unrecognized kinds fail lookup.
    pub static ref ROOM_PROCS: HashMap<&'static str, &'static str> = HashMap::from([
        ("trans", "trans"),
        ("ttrans", "ttrans"),
        ("echo", "echo"),
        ("push", "push"),
        ("pushall", "pushall"),
    ]);

    /// Letter-coded room flag -> flag name.
    pub static ref ROOM_CHARS: HashMap<char, &'static str> = ROOM_BITS
        .iter()
        .enumerate()
        .map(|(i, &(_, name))| (letter_for_position(i as u32), name))
        .collect();
}

/// Room flag bits in ascending bit order.
pub const ROOM_BITS: &[(u64, &str)] = &[
    (1 << 0, "DARK"),
    (1 << 1, "DEATH"),
    (1 << 2, "NOMOB"),
    (1 << 3, "INDOORS"),
    (1 << 4, "LAWFUL"),
    (1 << 5, "NEUTRAL"),
    (1 << 6, "CHAOTIC"),
    (1 << 7, "NOMAGIC"),
    (1 << 8, "TUNNEL"),
    (1 << 9, "PRIVATE"),
    (1 << 10, "GODROOM"),
    (1 << 11, "BFS_MARK"),
    (1 << 12, "ZERO_MANA"),
    (1 << 13, "DISPELL"),
    (1 << 14, "SILENT"),
    (1 << 15, "IN_AIR"),
    (1 << 16, "OCS"),
    (1 << 17, "PKOK"),
    (1 << 18, "ARENA"),
    (1 << 19, "REGEN"),
    (1 << 20, "NO_TELEPORT"),
    (1 << 21, "NO_SCRY"),
    (1 << 22, "NO_FLEE"),
    (1 << 23, "DAMAGE"),
    (1 << 24, "NOTRACK"),
    (1 << 25, "NOSWEEP"),
    (1 << 26, "NOSCOUT"),
    (1 << 27, "NOSLEEP"),
    (1 << 28, "NOSUMMON"),
    (1 << 29, "NOQUIT"),
    (1 << 30, "NODROP"),
];

/// Highest room flag bit the numeric decoder accepts (BFS_MARK). The
/// legacy room loader passed the same ceiling to its shared flag decoder.
pub const ROOM_BIT_CEILING: u64 = 1 << 11;

/// Letter code for flag position `i`: `a`..`z`, then `A`..
fn letter_for_position(i: u32) -> char {
    if i < 26 {
        char::from(b'a' + i as u8)
    } else {
        char::from(b'A' + (i - 26) as u8)
    }
}

/// Decode a packed flag vector into its set-bit names.
///
/// Two encodings exist in legacy files: a plain integer whose binary bits
/// map through `bits` (decoded in ascending bit order), or a string of
/// letters each mapping independently through `chars` (decoded in input
/// order). A numeric vector with a set bit above `ceiling`, or with a bit
/// missing from the table, and a letter with no table entry are all hard
/// errors.
pub fn bits_to_names(
    vector: &str,
    ceiling: u64,
    bits: &[(u64, &str)],
    chars: &HashMap<char, &'static str>,
) -> Result<Vec<String>, ParseError> {
    if !vector.is_empty() && vector.bytes().all(|b| b.is_ascii_digit()) {
        let value: u64 = vector.parse().map_err(|_| ParseError::InvalidBitVector {
            found: vector.to_string(),
        })?;
        let mut names = Vec::new();
        for shift in 0..u64::BITS {
            let bit = 1u64 << shift;
            if value & bit == 0 {
                continue;
            }
            if bit > ceiling {
                return Err(ParseError::FlagBitOutOfRange {
                    vector: vector.to_string(),
                    bit: shift,
                });
            }
            let name = bits
                .iter()
                .find(|&&(b, _)| b == bit)
                .map(|&(_, name)| name)
                .ok_or_else(|| ParseError::UnknownFlagBit {
                    vector: vector.to_string(),
                    bit: shift,
                })?;
            names.push(name.to_string());
        }
        Ok(names)
    } else {
        vector
            .chars()
            .map(|letter| {
                chars
                    .get(&letter)
                    .map(|name| (*name).to_string())
                    .ok_or_else(|| ParseError::UnknownFlagLetter {
                        vector: vector.to_string(),
                        letter,
                    })
            })
            .collect()
    }
}

/// Decode a room flag vector with the room tables and ceiling.
pub fn room_bits_to_names(vector: &str) -> Result<Vec<String>, ParseError> {
    bits_to_names(vector, ROOM_BIT_CEILING, ROOM_BITS, &ROOM_CHARS)
}
