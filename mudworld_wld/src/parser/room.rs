use std::io::BufRead;

use mudworld_data::RoomDef;

use super::{BodyToken, classify, exit, extra, proc};
use crate::error::ParseError;
use crate::scanner::LineScanner;
use crate::tables::{SECTOR_TYPES, room_bits_to_names};

/// Scan one room unit; the scanner is positioned on the `#<number>` line.
pub(super) fn scan_room<R: BufRead>(scanner: &mut LineScanner<R>) -> Result<RoomDef, ParseError> {
    let marker = scanner.current().trim();
    let digits = marker.strip_prefix('#').ok_or_else(|| ParseError::RoomNumberMarker {
        found: marker.to_string(),
    })?;
    let number: i64 = digits.parse().map_err(|_| ParseError::RoomNumberValue {
        found: digits.to_string(),
    })?;

    scanner.must_advance()?;
    let raw_name = scanner.current();
    let name = raw_name
        .strip_suffix('~')
        .ok_or_else(|| ParseError::UnterminatedRoomName {
            found: raw_name.to_string(),
        })?
        .to_string();

    let description = scanner.collect_until("~")?;

    scanner.must_advance()?;
    let metadata = scanner.current();
    let fields: Vec<&str> = metadata.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(ParseError::RoomMetadataShape {
            found: metadata.to_string(),
        });
    }
    let zone: i64 = fields[0].parse().map_err(|_| ParseError::InvalidZone {
        found: fields[0].to_string(),
    })?;
    let bits = room_bits_to_names(fields[1])?;
    let sector = SECTOR_TYPES
        .get(fields[2])
        .map(|s| (*s).to_string())
        .ok_or_else(|| ParseError::UnknownSector {
            found: fields[2].to_string(),
        })?;

    let mut room = RoomDef {
        number,
        zone,
        name,
        description,
        bits,
        sector,
        exits: Vec::new(),
        extra_descs: Vec::new(),
        procs: Vec::new(),
    };

    // Body records in encounter order until the closing S. A room that
    // never closes surfaces as the unexpected-end-of-file error from
    // must_advance.
    loop {
        scanner.must_advance()?;
        let line = scanner.current().trim().to_string();
        match classify(&line) {
            BodyToken::End => return Ok(room),
            BodyToken::Exit(code) => room.exits.push(exit::scan_exit(scanner, code)?),
            BodyToken::Extra => room.extra_descs.push(extra::scan_extra(scanner)?),
            BodyToken::Proc(rest) => room.procs.push(proc::scan_proc(scanner, rest)?),
            BodyToken::Unknown(found) => {
                return Err(ParseError::UnexpectedToken {
                    found: found.to_string(),
                });
            },
        }
    }
}
