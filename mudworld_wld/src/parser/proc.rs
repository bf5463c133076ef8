use std::io::BufRead;

use mudworld_data::ProcDef;

use crate::error::ParseError;
use crate::scanner::LineScanner;
use crate::tables::ROOM_PROCS;

/// Scan a proc record. `rest` is the text after the `>` marker; it must
/// end with `~`, and the token shape past the action depends on the kind.
pub(super) fn scan_proc<R: BufRead>(scanner: &mut LineScanner<R>, rest: &str) -> Result<ProcDef, ParseError> {
    let body = rest.trim();
    let body = body
        .strip_suffix('~')
        .ok_or_else(|| ParseError::UnterminatedProc { found: body.to_string() })?
        .trim();
    // Split on single spaces, not whitespace fields: a doubled space in a
    // legacy proc line yields an empty token that fails numeric parsing.
    let tokens: Vec<&str> = body.split(' ').collect();
    if tokens.len() < 2 {
        return Err(ParseError::ProcShape {
            found: scanner.current().to_string(),
        });
    }
    let action = ROOM_PROCS
        .get(tokens[0])
        .map(|a| (*a).to_string())
        .ok_or_else(|| ParseError::UnknownProc {
            found: tokens[0].to_string(),
        })?;

    let mut proc = ProcDef {
        action,
        ..ProcDef::default()
    };
    match tokens[0] {
        "trans" | "ttrans" => {
            if tokens.len() < 3 {
                return Err(ParseError::ProcFields {
                    kind: tokens[0].to_string(),
                    expected: "<percent chance> <destination room vnum> [direction]",
                    found: scanner.current().to_string(),
                });
            }
            proc.percent_chance = parse_percent(tokens[1])?;
            proc.destination = tokens[2].parse().map_err(|_| ParseError::InvalidProcDestination {
                found: tokens[2].to_string(),
            })?;
            if tokens.len() > 3 {
                proc.direction = tokens[3].to_string();
            }
            proc.message_to_player = scanner.collect_until("~")?;
        },
        "echo" => {
            proc.percent_chance = parse_percent(tokens[1])?;
            proc.message_to_player = scanner.collect_until("~")?;
        },
        "push" | "pushall" => {
            if tokens.len() < 3 {
                return Err(ParseError::ProcFields {
                    kind: tokens[0].to_string(),
                    expected: "<percent chance> <direction>",
                    found: scanner.current().to_string(),
                });
            }
            proc.percent_chance = parse_percent(tokens[1])?;
            proc.direction = tokens[2].to_string();
            proc.message_to_player = scanner.collect_until("~")?;
        },
        // A kind present in the table but without a field shape reads
        // nothing further, not even a message block. Unreachable with the
        // current five-entry table.
        _ => {},
    }

    Ok(proc)
}

fn parse_percent(token: &str) -> Result<i64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidPercentChance {
        found: token.to_string(),
    })
}
