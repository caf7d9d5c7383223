use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use pb_core::api::{build_playbook, build_playbook_export, PlaybookRequest};
use pb_core::{
    EditorConfig, OffenseFormat, PlayMode, PlaybookEditor, PlaybookError, PlaybookItem, Point,
};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn find<'a>(item: &'a PlaybookItem, id: &str) -> &'a pb_core::Player {
    item.players().iter().find(|p| p.id == id).expect("player should exist")
}

#[test]
fn builds_red_zone_fixture() {
    let request = PlaybookRequest::from_json(&read_fixture("red_zone_request.json"))
        .expect("fixture should parse");
    let playbook = build_playbook(&request, &EditorConfig::default()).expect("should build");
    assert_eq!(playbook.len(), 3);

    let smash = &playbook.items()[0];
    assert_eq!(smash.name(), "Smash");
    let wr1 = find(smash, "wr1");
    assert_eq!(wr1.path, Some(vec![Point::new(120.0, 250.0), Point::new(220.0, 90.0)]));
    let rb = find(smash, "rb");
    assert_eq!(rb.route_name.as_deref(), Some("Block"));
    assert_eq!(rb.path, Some(vec![]));

    let bunch = &playbook.items()[1];
    assert_eq!(bunch.name(), "Offense Play 2");
    assert_eq!(find(bunch, "qb").position, Point::new(400.0, 460.0));
    let center = find(bunch, "c");
    assert_eq!(center.route_name.as_deref(), Some("Custom"));
    assert_eq!(center.path, Some(vec![Point::new(400.0, 260.0), Point::new(470.0, 200.0)]));

    let PlaybookItem::Defense(man) = &playbook.items()[2] else {
        panic!("third play should be defense");
    };
    assert_eq!(man.coverage_id, "man");
    let mike = man.players.iter().find(|p| p.id == "mike").unwrap();
    assert_eq!(mike.path, Some(vec![Point::new(400.0, 240.0)]));
    let nickel_back = man.players.iter().find(|p| p.id == "nb").unwrap();
    assert_eq!(nickel_back.route_name.as_deref(), Some("Man to Man"));
    assert!(nickel_back.path.is_none());
}

#[test]
fn builds_yaml_fixture() {
    let request = PlaybookRequest::from_yaml(&read_fixture("flag_request.yaml"))
        .expect("fixture should parse");
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let file = build_playbook_export(&request, &EditorConfig::default(), now).unwrap();
    assert_eq!(file.file_name(), "flag-install.json");

    let value: serde_json::Value = serde_json::from_str(&file.json).unwrap();
    assert_eq!(value["generatedAt"], "2025-01-01T12:00:00.000Z");
    assert_eq!(value["items"][0]["play"]["format"], "flag5");
    assert_eq!(value["items"][1]["play"]["coverageId"], "flagZone");

    let center = &value["items"][0]["play"]["players"][0];
    assert_eq!(center["routeName"], "Drag");
    assert_eq!(center["path"][0]["x"], 480.0);
    assert_eq!(center["path"][0]["y"], 290.0);
}

#[test]
fn editor_session_end_to_end() {
    let mut editor = PlaybookEditor::default();

    editor.change_offense_formation("flag-spread").unwrap();
    editor.set_play_name("Quick Out");
    assert!(editor.assign_route("wr1", "Out"));
    assert!(editor.assign_route("wr2", "Slant"));
    editor.save_current_play();

    editor.set_mode(PlayMode::Defense);
    editor.change_defense_formation("flag-zone").unwrap();
    editor.apply_coverage("flagZone").unwrap();
    editor.set_play_name("Flag Zone");
    editor.save_current_play();

    assert!(editor.can_export());
    assert_eq!(editor.playbook().items()[0].summary(), "Flag Spread · Flag 5 vs 5 · 5 players");
    assert_eq!(editor.playbook().items()[1].summary(), "Flag 5v5 Zone · Flag Zone Mix · 5 players");

    // Editing after saving leaves the playbook untouched
    editor.set_mode(PlayMode::Offense);
    editor.assign_route("wr1", "");
    let saved = &editor.playbook().items()[0];
    assert_eq!(find(saved, "wr1").route_name.as_deref(), Some("Out"));

    assert!(editor.remove_play(5).is_none());
    assert_eq!(editor.playbook().len(), 2);
    editor.remove_play(0);
    editor.remove_play(0);
    assert!(!editor.can_export());
    assert!(matches!(editor.export_playbook(), Err(PlaybookError::EmptyPlaybook)));
}

#[test]
fn format_follows_formation() {
    let mut editor = PlaybookEditor::default();
    editor.change_offense_formation("flag-bunch").unwrap();
    assert_eq!(editor.offense().format, OffenseFormat::Flag5);
    assert!(editor.set_offense_format(OffenseFormat::Tackle).is_err());

    editor.change_offense_formation("i-form").unwrap();
    assert_eq!(editor.offense().format, OffenseFormat::Tackle);
    editor.set_offense_format(OffenseFormat::Flag5).unwrap();
    assert_eq!(editor.offense().format, OffenseFormat::Flag5);
}
