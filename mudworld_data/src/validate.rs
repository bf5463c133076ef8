use std::collections::HashSet;
use std::fmt;

use crate::defs::ZoneDef;

/// Non-fatal finding from a cross-reference pass over a decoded zone.
///
/// Findings never affect conversion; the CLI `lint` subcommand reports
/// them for content authors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintFinding {
    DuplicateRoom {
        number: i64,
    },
    PercentOutOfRange {
        room: i64,
        action: String,
        percent: i64,
    },
    OutOfZoneDestination {
        room: i64,
        kind: &'static str,
        destination: i64,
    },
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintFinding::DuplicateRoom { number } => {
                write!(f, "duplicate room number {number}")
            },
            LintFinding::PercentOutOfRange { room, action, percent } => {
                write!(f, "room {room}: {action} proc has percent chance {percent} outside 0..=100")
            },
            LintFinding::OutOfZoneDestination { room, kind, destination } => {
                write!(f, "room {room}: {kind} destination {destination} is not defined in this file")
            },
        }
    }
}

/// Check a decoded zone for suspicious cross-references.
///
/// Exit destinations of `-1` (legacy "leads nowhere") are skipped, as are
/// proc destinations of `0` (the unused default).
pub fn validate_zone(zone: &ZoneDef) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    let known: HashSet<i64> = zone.rooms.iter().map(|r| r.number).collect();
    let mut seen = HashSet::new();
    for room in &zone.rooms {
        if !seen.insert(room.number) {
            findings.push(LintFinding::DuplicateRoom { number: room.number });
        }
        for exit in &room.exits {
            if exit.destination >= 0 && !known.contains(&exit.destination) {
                findings.push(LintFinding::OutOfZoneDestination {
                    room: room.number,
                    kind: "exit",
                    destination: exit.destination,
                });
            }
        }
        for proc in &room.procs {
            if !(0..=100).contains(&proc.percent_chance) {
                findings.push(LintFinding::PercentOutOfRange {
                    room: room.number,
                    action: proc.action.clone(),
                    percent: proc.percent_chance,
                });
            }
            if proc.destination != 0 && !known.contains(&proc.destination) {
                findings.push(LintFinding::OutOfZoneDestination {
                    room: room.number,
                    kind: "proc",
                    destination: proc.destination,
                });
            }
        }
    }
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::{ExitDef, ProcDef, RoomDef};

    fn room(number: i64) -> RoomDef {
        RoomDef {
            number,
            zone: 0,
            name: format!("Room {number}"),
            description: String::new(),
            bits: Vec::new(),
            sector: "INSIDE".into(),
            exits: Vec::new(),
            extra_descs: Vec::new(),
            procs: Vec::new(),
        }
    }

    #[test]
    fn clean_zone_has_no_findings() {
        let mut a = room(100);
        a.exits.push(ExitDef {
            direction: "north".into(),
            description: String::new(),
            keywords: Vec::new(),
            door_flag: "NONE".into(),
            key_number: -1,
            destination: 101,
        });
        let zone = ZoneDef {
            rooms: vec![a, room(101)],
        };
        assert!(validate_zone(&zone).is_empty());
    }

    #[test]
    fn duplicate_room_numbers_are_reported() {
        let zone = ZoneDef {
            rooms: vec![room(100), room(100)],
        };
        assert_eq!(validate_zone(&zone), vec![LintFinding::DuplicateRoom { number: 100 }]);
    }

    #[test]
    fn nowhere_exits_are_ignored() {
        let mut a = room(100);
        a.exits.push(ExitDef {
            direction: "down".into(),
            description: String::new(),
            keywords: Vec::new(),
            door_flag: "NONE".into(),
            key_number: -1,
            destination: -1,
        });
        let zone = ZoneDef { rooms: vec![a] };
        assert!(validate_zone(&zone).is_empty());
    }

    #[test]
    fn out_of_zone_exit_and_bad_percent_are_reported() {
        let mut a = room(100);
        a.exits.push(ExitDef {
            direction: "east".into(),
            description: String::new(),
            keywords: Vec::new(),
            door_flag: "NONE".into(),
            key_number: -1,
            destination: 9000,
        });
        a.procs.push(ProcDef {
            action: "echo".into(),
            percent_chance: 150,
            ..ProcDef::default()
        });
        let zone = ZoneDef { rooms: vec![a] };
        let findings = validate_zone(&zone);
        assert_eq!(findings.len(), 2);
        assert!(findings.contains(&LintFinding::OutOfZoneDestination {
            room: 100,
            kind: "exit",
            destination: 9000,
        }));
        assert!(findings.contains(&LintFinding::PercentOutOfRange {
            room: 100,
            action: "echo".into(),
            percent: 150,
        }));
    }
}
