//! Error types for world-file parsing.
//!
//! [`ParseError`] carries no position: sub-parsers stay position-free and
//! the single top-level entry point ([`crate::parse_wld_file`]) wraps any
//! failure into a [`WldError`] with the file name and the scanner's
//! current line number.

use std::io;

use thiserror::Error;

/// A grammar or scan failure, without file/line context.
///
/// One variant per distinct format error so every message states what was
/// expected and quotes what was found.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected end of file")]
    UnexpectedEof,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("room number must start with #, but found: {found:?}")]
    RoomNumberMarker { found: String },

    #[error("room number {found:?} not a number")]
    RoomNumberValue { found: String },

    #[error("room name must end with ~, but found: {found:?}")]
    UnterminatedRoomName { found: String },

    #[error("expected room metadata to be <zone#> <bitvector> <sector>, but got {found:?}")]
    RoomMetadataShape { found: String },

    #[error("invalid zone number: {found:?}")]
    InvalidZone { found: String },

    #[error("unknown room sector type: {found:?}")]
    UnknownSector { found: String },

    #[error("unexpected token in room definition: {found:?}")]
    UnexpectedToken { found: String },

    #[error("unknown exit direction {found:?}")]
    UnknownDirection { found: String },

    #[error("expected keyword list to end in ~ but got {found:?}")]
    UnterminatedKeywords { found: String },

    #[error("expected extra description keywords to end in ~, but got {found:?}")]
    UnterminatedExtraKeywords { found: String },

    #[error("expected direction fields to be <door_flag> <key_number> <room_linked> but got {found:?}")]
    ExitMetadataShape { found: String },

    #[error("unknown door flag {found:?}")]
    UnknownDoorFlag { found: String },

    #[error("invalid key number: {found:?}")]
    InvalidKeyNumber { found: String },

    #[error("invalid target room number: {found:?}")]
    InvalidDestination { found: String },

    #[error("expected procs to end in ~, but got {found:?}")]
    UnterminatedProc { found: String },

    #[error("expected room proc flags to be <percent chance> <destination room vnum> <direction> but got {found:?}")]
    ProcShape { found: String },

    #[error("unknown room proc {found:?}")]
    UnknownProc { found: String },

    #[error("expected {kind} proc fields to be {expected}, but got {found:?}")]
    ProcFields {
        kind: String,
        expected: &'static str,
        found: String,
    },

    #[error("invalid percentage chance: {found:?}")]
    InvalidPercentChance { found: String },

    #[error("invalid destination: {found:?}")]
    InvalidProcDestination { found: String },

    #[error("flag bit {bit} in bitvector {vector:?} is above the highest decodable bit")]
    FlagBitOutOfRange { vector: String, bit: u32 },

    #[error("flag bit {bit} in bitvector {vector:?} has no name")]
    UnknownFlagBit { vector: String, bit: u32 },

    #[error("unknown flag letter {letter:?} in bitvector {vector:?}")]
    UnknownFlagLetter { vector: String, letter: char },

    #[error("invalid bitvector: {found:?}")]
    InvalidBitVector { found: String },
}

/// A parse failure annotated with its source file and 1-based line number.
#[derive(Debug, Error)]
pub enum WldError {
    #[error("{file}:{line} - {source}")]
    Parse {
        file: String,
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("unable to open {file:?}: {source}")]
    Open {
        file: String,
        #[source]
        source: io::Error,
    },
}
