//! JSON-Ein-/Ausgabe: Zonendaten einlesen und Layout-Reports schreiben.
//!
//! Die Engine selbst kennt keine Prozessgrenze; dieses Modul übersetzt
//! zwischen der camelCase-Wire-Form des Editors und den Domänentypen.

use anyhow::{Context, Result};
use glam::IVec3;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ExitDirection, Room, ZoneMap};
use crate::layout::{OneWayExit, OverlapInfo};

/// Wire-Form einer Zone, wie der Editor sie über die Prozessgrenze liefert
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ZoneFile {
    /// Name der Zone (optional)
    #[serde(default)]
    name: Option<String>,
    /// Raumliste in Editor-Reihenfolge
    #[serde(default)]
    rooms: Vec<Room>,
}

/// Parst eine Zone aus einem JSON-String.
///
/// Unbekannte Richtungs-Strings werden zu richtungslosen Ausgängen statt zu
/// einem Fehler; fehlende optionale Felder erhalten ihre Defaults.
pub fn parse_zone(json: &str) -> Result<ZoneMap> {
    let file: ZoneFile =
        serde_json::from_str(json).context("Zonendaten sind kein gültiges JSON")?;
    let mut zone = ZoneMap::from_rooms(file.rooms);
    zone.name = file.name;
    Ok(zone)
}

/// Vollständiger Layout-Report: Positionen, Overlaps, One-Way-Ausgänge
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutReport {
    /// Name der Zone (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    zone_name: Option<String>,
    /// Position jedes Raums in Platzierungsreihenfolge
    positions: Vec<PositionRecord>,
    /// Alle erkannten Overlap-Gruppen
    overlaps: Vec<OverlapRecord>,
    /// Alle als One-Way erkannten Ausgänge
    one_way_exits: Vec<OneWayRecord>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PositionRecord {
    room_id: u64,
    x: i32,
    y: i32,
    z: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OverlapRecord {
    room_ids: Vec<u64>,
    position: [i32; 3],
    count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OneWayRecord {
    from_room: u64,
    to_room: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<ExitDirection>,
    is_one_way: bool,
    reason: &'static str,
}

impl LayoutReport {
    /// Baut den Report aus den Ergebnissen der Engine-Durchläufe
    pub fn new(
        zone_name: Option<String>,
        positions: &IndexMap<u64, IVec3>,
        overlaps: &[OverlapInfo],
        one_way_exits: &[OneWayExit],
    ) -> Self {
        Self {
            zone_name,
            positions: positions
                .iter()
                .map(|(&room_id, &position)| PositionRecord {
                    room_id,
                    x: position.x,
                    y: position.y,
                    z: position.z,
                })
                .collect(),
            overlaps: overlaps
                .iter()
                .map(|overlap| OverlapRecord {
                    room_ids: overlap.room_ids.clone(),
                    position: overlap.position.to_array(),
                    count: overlap.count(),
                })
                .collect(),
            one_way_exits: one_way_exits
                .iter()
                .map(|exit| OneWayRecord {
                    from_room: exit.from_room,
                    to_room: exit.to_room,
                    direction: exit.direction,
                    is_one_way: exit.is_one_way,
                    reason: exit.reason.as_code(),
                })
                .collect(),
        }
    }

    /// Anzahl der gemeldeten Overlap-Gruppen
    pub fn overlap_count(&self) -> usize {
        self.overlaps.len()
    }

    /// Anzahl der gemeldeten One-Way-Ausgänge
    pub fn one_way_count(&self) -> usize {
        self.one_way_exits.len()
    }
}

/// Serialisiert den Report als JSON-Dokument
pub fn write_layout_report(report: &LayoutReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Layout-Report konnte nicht serialisiert werden")
}
