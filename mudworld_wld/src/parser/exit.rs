use std::io::BufRead;

use mudworld_data::ExitDef;

use crate::error::ParseError;
use crate::scanner::LineScanner;
use crate::tables::{DOOR_FLAGS, EXIT_DIRECTIONS};

/// Scan an exit record. `code` is the direction code after the `D` marker;
/// the description, keyword, and metadata lines follow on the scanner.
pub(super) fn scan_exit<R: BufRead>(scanner: &mut LineScanner<R>, code: &str) -> Result<ExitDef, ParseError> {
    let code = code.trim();
    let direction = EXIT_DIRECTIONS
        .get(code)
        .map(|d| (*d).to_string())
        .ok_or_else(|| ParseError::UnknownDirection {
            found: code.to_string(),
        })?;

    let description = scanner.collect_until("~")?;

    scanner.must_advance()?;
    let raw = scanner.current();
    let keywords: Vec<String> = raw
        .strip_suffix('~')
        .ok_or_else(|| ParseError::UnterminatedKeywords { found: raw.to_string() })?
        .split_whitespace()
        .map(str::to_string)
        .collect();

    scanner.must_advance()?;
    let metadata = scanner.current();
    let fields: Vec<&str> = metadata.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(ParseError::ExitMetadataShape {
            found: metadata.to_string(),
        });
    }
    let door_flag = DOOR_FLAGS
        .get(fields[0])
        .map(|f| (*f).to_string())
        .ok_or_else(|| ParseError::UnknownDoorFlag {
            found: fields[0].to_string(),
        })?;
    let key_number: i64 = fields[1].parse().map_err(|_| ParseError::InvalidKeyNumber {
        found: fields[1].to_string(),
    })?;
    let destination: i64 = fields[2].parse().map_err(|_| ParseError::InvalidDestination {
        found: fields[2].to_string(),
    })?;

    Ok(ExitDef {
        direction,
        description,
        keywords,
        door_flag,
        key_number,
        destination,
    })
}
