//! BFS-Platzierung der Räume auf dem Raster, mit Fallback-Packung
//! für Räume ohne Verbindung zum Startraum.

use std::collections::VecDeque;

use glam::IVec3;
use indexmap::IndexMap;

use super::direction::{offset_or_fallback, GRID_SPACING};
use crate::core::ZoneMap;

/// Y-Versatz der Fallback-Zeilen relativ zum BFS-Ursprung
const FALLBACK_ROW_OFFSET: i32 = 4;

/// Berechnet eine Rasterposition für jeden Raum der Zone.
///
/// Breitensuche ab dem Startraum (`start_room_id` falls gültig, sonst der
/// erste Raum der Eingabe): jeder Ausgang versetzt den Zielraum um den
/// Richtungsvektor seiner Richtung. Die FIFO-Reihenfolge bricht Gleichstände:
/// der zuerst aufgezählte Ausgang eines Raums gewinnt.
///
/// Räume ohne Weg vom Startraum werden anschließend in Eingabereihenfolge
/// zeilenweise unterhalb des Ursprungs gepackt. Damit erhält jeder Raum der
/// Eingabe genau eine Position; Kollisionen zwischen BFS- und
/// Fallback-Zellen fängt die separate Overlap-Erkennung ab.
///
/// Degenerierte Eingaben (leere Zone, Zyklen, Ausgänge ins Leere oder auf
/// nicht existierende Räume) liefern ein wohldefiniertes Ergebnis statt
/// eines Fehlers.
pub fn layout_rooms(zone: &ZoneMap, start_room_id: Option<u64>) -> IndexMap<u64, IVec3> {
    let mut positions: IndexMap<u64, IVec3> = IndexMap::with_capacity(zone.room_count());
    if zone.room_count() == 0 {
        return positions;
    }

    let start_id = start_room_id
        .filter(|id| zone.contains(*id))
        .or_else(|| zone.first_room_id());
    let Some(start_id) = start_id else {
        return positions;
    };

    // BFS; `positions` dient zugleich als Besucht-Markierung
    let start_z = zone.room(start_id).map(|room| room.saved_z()).unwrap_or(0);
    let mut queue: VecDeque<(u64, IVec3)> = VecDeque::new();
    queue.push_back((start_id, IVec3::new(0, 0, start_z)));

    while let Some((room_id, position)) = queue.pop_front() {
        if positions.contains_key(&room_id) {
            continue;
        }
        let Some(room) = zone.room(room_id) else {
            continue;
        };
        positions.insert(room_id, position);

        for exit in &room.exits {
            let Some(target_id) = exit.to_room_id else {
                continue;
            };
            if !zone.contains(target_id) || positions.contains_key(&target_id) {
                continue;
            }
            queue.push_back((target_id, position + offset_or_fallback(exit.direction)));
        }
    }

    // Fallback: unerreichte Räume zeilenweise packen
    let unplaced: Vec<u64> = zone
        .room_ids()
        .filter(|id| !positions.contains_key(id))
        .collect();
    if !unplaced.is_empty() {
        log::debug!(
            "{} von {} Räumen ohne BFS-Platz, Fallback-Raster",
            unplaced.len(),
            zone.room_count()
        );
        let rooms_per_row = (zone.room_count() as f64).sqrt().ceil() as usize;
        for (index, &room_id) in unplaced.iter().enumerate() {
            let col = (index % rooms_per_row) as i32;
            let row = (index / rooms_per_row) as i32;
            let saved_z = zone.room(room_id).map(|room| room.saved_z()).unwrap_or(0);
            positions.insert(
                room_id,
                IVec3::new(
                    col * GRID_SPACING,
                    FALLBACK_ROW_OFFSET + row * GRID_SPACING,
                    saved_z,
                ),
            );
        }
    }

    positions
}
