use std::fs;

use mudworld_wld::{ParseError, parse_rooms_str, parse_wld_file};

#[test]
fn room_must_start_with_number_marker() {
    let err = parse_rooms_str("3001\nThe Square~\n").unwrap_err();
    assert!(matches!(err, ParseError::RoomNumberMarker { .. }));
    assert_eq!(err.to_string(), "room number must start with #, but found: \"3001\"");
}

#[test]
fn room_number_must_be_numeric() {
    assert!(matches!(
        parse_rooms_str("#abc\nThe Square~\n"),
        Err(ParseError::RoomNumberValue { .. })
    ));
}

#[test]
fn room_name_must_end_with_sentinel() {
    assert!(matches!(
        parse_rooms_str("#1\nNo Tilde\n"),
        Err(ParseError::UnterminatedRoomName { .. })
    ));
}

#[test]
fn metadata_needs_exactly_three_fields() {
    assert!(matches!(
        parse_rooms_str("#1\nA~\n~\n0 0\nS\n"),
        Err(ParseError::RoomMetadataShape { .. })
    ));
}

#[test]
fn zone_must_be_numeric() {
    assert!(matches!(
        parse_rooms_str("#1\nA~\n~\nx 0 0\nS\n"),
        Err(ParseError::InvalidZone { .. })
    ));
}

#[test]
fn unknown_sector_code_is_fatal() {
    assert!(matches!(
        parse_rooms_str("#1\nA~\n~\n0 0 99\nS\n"),
        Err(ParseError::UnknownSector { .. })
    ));
}

#[test]
fn unexpected_body_token_is_fatal() {
    assert!(matches!(
        parse_rooms_str("#1\nA~\n~\n0 0 0\nX\nS\n"),
        Err(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn room_without_terminator_hits_end_of_file() {
    // stream ends mid-body: no truncated room comes back
    assert!(matches!(
        parse_rooms_str("#1\nA~\n~\n0 0 0\n"),
        Err(ParseError::UnexpectedEof)
    ));
}

#[test]
fn unknown_exit_direction_is_fatal() {
    let src = "#1\nA~\n~\n0 0 0\nD9\n~\n~\n0 -1 2\nS\n";
    assert!(matches!(parse_rooms_str(src), Err(ParseError::UnknownDirection { .. })));
}

#[test]
fn reserved_door_flag_code_is_fatal_not_defaulted() {
    let src = "#1\nA~\n~\n0 0 0\nD0\n~\n~\n6 -1 2\nS\n";
    let err = parse_rooms_str(src).unwrap_err();
    assert!(matches!(err, ParseError::UnknownDoorFlag { .. }));
    assert_eq!(err.to_string(), "unknown door flag \"6\"");
}

#[test]
fn exit_keyword_line_must_end_with_sentinel() {
    let src = "#1\nA~\n~\n0 0 0\nD0\n~\ngate wooden\n0 -1 2\nS\n";
    assert!(matches!(parse_rooms_str(src), Err(ParseError::UnterminatedKeywords { .. })));
}

#[test]
fn exit_metadata_needs_exactly_three_fields() {
    let src = "#1\nA~\n~\n0 0 0\nD0\n~\n~\n0 -1\nS\n";
    assert!(matches!(parse_rooms_str(src), Err(ParseError::ExitMetadataShape { .. })));
}

#[test]
fn exit_key_number_must_be_numeric() {
    let src = "#1\nA~\n~\n0 0 0\nD0\n~\n~\n0 key 2\nS\n";
    assert!(matches!(parse_rooms_str(src), Err(ParseError::InvalidKeyNumber { .. })));
}

#[test]
fn extra_keyword_line_must_end_with_sentinel() {
    let src = "#1\nA~\n~\n0 0 0\nE\nfountain\n~\nS\n";
    assert!(matches!(
        parse_rooms_str(src),
        Err(ParseError::UnterminatedExtraKeywords { .. })
    ));
}

#[test]
fn parse_errors_carry_file_and_line_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("10.wld");
    fs::write(&path, "#1\nNo Tilde\n").unwrap();

    let err = parse_wld_file(&path).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with(&format!("{}:2 - ", path.display())), "unexpected message: {msg}");
    assert!(msg.contains("room name must end with ~"));
}

#[test]
fn unreadable_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.wld");
    let err = parse_wld_file(&path).unwrap_err();
    assert!(err.to_string().contains("missing.wld"));
}
