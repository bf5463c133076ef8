//! Recursive-descent parser for room records.
//!
//! [`parse_rooms`] drives the top-level loop; each room unit dispatches on
//! the leading marker of its body lines to the exit, extra-description,
//! and proc sub-parsers, which all pull further lines from the same
//! scanner.

mod exit;
mod extra;
mod proc;
mod room;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mudworld_data::RoomDef;

use crate::error::{ParseError, WldError};
use crate::scanner::LineScanner;

/// Trimmed line that ends a file before the stream runs out.
const FILE_SENTINEL: &str = "$~";
/// Reserved final-room marker; it ends the file like the sentinel does.
const FINAL_ROOM_MARKER: &str = "#99999";

/// The record kinds a room body line can open.
enum BodyToken<'a> {
    /// Lone `S`: end of the room.
    End,
    /// `D<code>`: an exit, with the direction code after the marker.
    Exit(&'a str),
    /// Lone `E`: an extra description.
    Extra,
    /// `><proc…>`: a scripted trigger, with the text after the marker.
    Proc(&'a str),
    Unknown(&'a str),
}

fn classify(line: &str) -> BodyToken<'_> {
    if line == "S" {
        BodyToken::End
    } else if let Some(rest) = line.strip_prefix('D') {
        BodyToken::Exit(rest)
    } else if line == "E" {
        BodyToken::Extra
    } else if let Some(rest) = line.strip_prefix('>') {
        BodyToken::Proc(rest)
    } else {
        BodyToken::Unknown(line)
    }
}

/// Parse room units from the scanner until a sentinel or end of stream.
///
/// The format nominally ends with `$~`, but a file that simply runs out
/// of lines between rooms is accepted as complete.
///
/// # Errors
/// Returns the first grammar or I/O error; nothing is skipped or
/// recovered. Errors carry no position — see [`parse_wld_file`].
pub fn parse_rooms<R: BufRead>(scanner: &mut LineScanner<R>) -> Result<Vec<RoomDef>, ParseError> {
    let mut rooms = Vec::new();
    loop {
        if !scanner.advance()? {
            return Ok(rooms);
        }
        let line = scanner.current().trim();
        if line == FILE_SENTINEL || line == FINAL_ROOM_MARKER {
            return Ok(rooms);
        }
        rooms.push(room::scan_room(scanner)?);
    }
}

/// Parse room units from an in-memory source string.
///
/// # Errors
/// Same contract as [`parse_rooms`].
pub fn parse_rooms_str(source: &str) -> Result<Vec<RoomDef>, ParseError> {
    parse_rooms(&mut LineScanner::new(source.as_bytes()))
}

/// Parse one world file into its decoded rooms.
///
/// This is the single annotation point: any failure below it comes back
/// wrapped with the file name and the scanner's current 1-based line
/// number.
///
/// # Errors
/// [`WldError::Open`] if the file cannot be opened, [`WldError::Parse`]
/// for any scan or grammar failure.
pub fn parse_wld_file(path: &Path) -> Result<Vec<RoomDef>, WldError> {
    let file = File::open(path).map_err(|source| WldError::Open {
        file: path.display().to_string(),
        source,
    })?;
    let mut scanner = LineScanner::new(BufReader::new(file));
    parse_rooms(&mut scanner).map_err(|source| WldError::Parse {
        file: path.display().to_string(),
        line: scanner.line_number(),
        source,
    })
}
