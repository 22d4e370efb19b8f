//! Integrationstests für den kompletten Layout-Durchlauf:
//! JSON-Zone einlesen, platzieren, Overlaps auflösen, One-Ways melden.

use glam::IVec3;
use mud_zone_layout::layout::{
    detect_one_way_exits, detect_overlaps, layout_rooms, resolve_overlaps,
};
use mud_zone_layout::{parse_zone, write_layout_report, LayoutReport, OneWayReason};
use mud_zone_layout::{Exit, ExitDirection, Room, ZoneMap};

/// Zwei Räume mit symmetrischem NORTH/SOUTH-Paar.
fn symmetric_pair() -> ZoneMap {
    let mut a = Room::new(1);
    a.exits.push(Exit::new(ExitDirection::North, 2));
    let mut b = Room::new(2);
    b.exits.push(Exit::new(ExitDirection::South, 1));
    ZoneMap::from_rooms([a, b])
}

#[test]
fn test_symmetric_pair_end_to_end() {
    let zone = symmetric_pair();

    let positions = layout_rooms(&zone, None);
    assert_eq!(positions[&1], IVec3::new(0, 0, 0));
    assert_eq!(positions[&2], IVec3::new(0, -2, 0));

    assert!(detect_overlaps(&positions).is_empty());
    assert!(detect_one_way_exits(&zone).is_empty());
}

#[test]
fn test_kupferberg_zone_full_pass() {
    let zone = parse_zone(include_str!("fixtures/kupferberg_zone.json"))
        .expect("Fixture muss parsebar sein");
    assert_eq!(zone.room_count(), 7);

    let positions = layout_rooms(&zone, None);
    assert_eq!(positions.len(), 7, "Jeder Raum muss eine Position erhalten");

    // BFS-Platzierung rund um den Zoneneingang
    assert_eq!(positions[&3001], IVec3::new(0, 0, 0));
    assert_eq!(positions[&3002], IVec3::new(0, -2, 0));
    assert_eq!(positions[&3004], IVec3::new(-2, 0, 0));
    assert_eq!(positions[&3003], IVec3::new(0, -2, 1));

    // Der Geheimgang kollidiert geometrisch mit der Grossen Halle
    assert_eq!(positions[&3005], IVec3::new(0, -2, 0));
    let overlaps = detect_overlaps(&positions);
    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].room_ids, vec![3002, 3005]);

    // Unerreichbare Räume landen im Fallback-Raster (7 Räume → 3 Spalten)
    assert_eq!(positions[&3010], IVec3::new(0, 4, 0));
    assert_eq!(positions[&3011], IVec3::new(2, 4, -1), "Fallback muss die gespeicherte Z-Ebene übernehmen");

    // Auflösung: erster Raum der Gruppe bleibt, der zweite weicht aus
    let resolved = resolve_overlaps(&positions);
    assert_eq!(resolved[&3002], IVec3::new(0, -2, 0));
    assert_eq!(resolved[&3005], IVec3::new(1, -2, 0));
    assert!(detect_overlaps(&resolved).is_empty());

    // Genau ein One-Way: Lagerraum → Keller ohne Rückweg
    let one_way = detect_one_way_exits(&zone);
    assert_eq!(one_way.len(), 1);
    assert_eq!(one_way[0].from_room, 3010);
    assert_eq!(one_way[0].to_room, 3011);
    assert_eq!(one_way[0].reason, OneWayReason::NoReverseExit);
}

#[test]
fn test_kupferberg_report_is_serializable() {
    let zone = parse_zone(include_str!("fixtures/kupferberg_zone.json"))
        .expect("Fixture muss parsebar sein");

    let positions = layout_rooms(&zone, None);
    let overlaps = detect_overlaps(&positions);
    let one_way = detect_one_way_exits(&zone);
    let report = LayoutReport::new(zone.name.clone(), &positions, &overlaps, &one_way);

    let serialized = write_layout_report(&report).expect("Report muss serialisierbar sein");
    let value: serde_json::Value = serde_json::from_str(&serialized).unwrap();

    assert_eq!(value["zoneName"], "Kupferberg");
    assert_eq!(value["positions"].as_array().map(|p| p.len()), Some(7));
    assert_eq!(value["overlaps"][0]["roomIds"], serde_json::json!([3002, 3005]));
    assert_eq!(value["oneWayExits"][0]["reason"], "no_reverse_exit");
}

#[test]
fn test_layout_is_deterministic_across_runs() {
    let zone = parse_zone(include_str!("fixtures/kupferberg_zone.json"))
        .expect("Fixture muss parsebar sein");

    let first: Vec<(u64, IVec3)> = layout_rooms(&zone, None)
        .iter()
        .map(|(&id, &p)| (id, p))
        .collect();
    let second: Vec<(u64, IVec3)> = layout_rooms(&zone, None)
        .iter()
        .map(|(&id, &p)| (id, p))
        .collect();

    assert_eq!(first, second, "Wiederholte Läufe müssen byte-identisch platzieren");
}

#[test]
fn test_alternative_start_room_shifts_layout() {
    let zone = parse_zone(include_str!("fixtures/kupferberg_zone.json"))
        .expect("Fixture muss parsebar sein");

    let positions = layout_rooms(&zone, Some(3002));
    assert_eq!(positions[&3002], IVec3::new(0, 0, 0), "Der gewählte Startraum muss am Ursprung liegen");
    assert_eq!(positions[&3001], IVec3::new(0, 2, 0));
    assert_eq!(positions.len(), 7);
}
