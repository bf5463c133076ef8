//! mudworld_wld: parser and batch converter for legacy MUD world files.
//!
//! A world ("wld") file is a sequence of loosely-delimited text records,
//! one per room, with nested sub-records for exits, extra descriptions,
//! and scripted triggers ("procs"):
//!
//! - `#3001` — room number marker
//! - `The Temple Square~` — room name
//! - description lines, ended by a line ending in `~`
//! - `30 d 1` — zone number, flag bitvector, sector code
//! - body records (`D<dir>`, `E`, `><proc …>~`) until a lone `S`
//!
//! [`parse_wld_file`] decodes one file into [`mudworld_data::RoomDef`]
//! records; [`convert::convert_rooms`] batch-converts a directory of
//! world files into pretty-printed JSON documents.

pub mod convert;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod tables;

pub use convert::convert_rooms;
pub use error::{ParseError, WldError};
pub use parser::{parse_rooms, parse_rooms_str, parse_wld_file};
pub use scanner::LineScanner;
