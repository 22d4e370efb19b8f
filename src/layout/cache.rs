//! Memoisierung des Layouts über einen Content-Hash der Zonendaten.

use glam::IVec3;
use indexmap::IndexMap;

use super::engine::layout_rooms;
use crate::core::ZoneMap;

/// Ein-Slot-Cache für Layout-Ergebnisse.
///
/// Der Schlüssel ist ein blake3-Hash über Raum-IDs, gespeicherte Positionen,
/// Ausgänge und Startraum. Jede Änderung an diesen Daten ergibt einen neuen
/// Hash und invalidiert den Eintrag implizit; ein separater
/// Invalidierungsmechanismus existiert nicht.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entry: Option<(blake3::Hash, IndexMap<u64, IVec3>)>,
}

impl LayoutCache {
    /// Erstellt einen leeren Cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Berechnet das Layout oder liefert das memoisierte Ergebnis
    pub fn layout_rooms(
        &mut self,
        zone: &ZoneMap,
        start_room_id: Option<u64>,
    ) -> IndexMap<u64, IVec3> {
        let hash = content_hash(zone, start_room_id);
        if let Some((cached_hash, cached)) = &self.entry {
            if *cached_hash == hash {
                log::debug!("Layout-Cache-Treffer für Zone mit {} Räumen", zone.room_count());
                return cached.clone();
            }
        }

        let positions = layout_rooms(zone, start_room_id);
        self.entry = Some((hash, positions.clone()));
        positions
    }

    /// Verwirft den gespeicherten Eintrag
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

/// Deterministischer Hash über alle layout-relevanten Zonendaten.
///
/// Name und Beschreibung fließen nicht ein; sie beeinflussen das Layout
/// nicht. Optionale Werte werden mit Präsenz-Byte kodiert, damit z.B.
/// `Some(0)` und `None` unterscheidbar bleiben.
fn content_hash(zone: &ZoneMap, start_room_id: Option<u64>) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();

    for room in zone.rooms() {
        hasher.update(&room.id.to_le_bytes());
        for coord in [room.layout_x, room.layout_y, room.layout_z] {
            match coord {
                Some(value) => {
                    hasher.update(&[1]);
                    hasher.update(&value.to_le_bytes());
                }
                None => {
                    hasher.update(&[0]);
                }
            }
        }
        hasher.update(&(room.exits.len() as u64).to_le_bytes());
        for exit in &room.exits {
            hasher.update(&[exit.direction.map(|d| d as u8 + 1).unwrap_or(0)]);
            match exit.to_room_id {
                Some(target) => {
                    hasher.update(&[1]);
                    hasher.update(&target.to_le_bytes());
                }
                None => {
                    hasher.update(&[0]);
                }
            }
        }
    }

    match start_room_id {
        Some(id) => {
            hasher.update(&[1]);
            hasher.update(&id.to_le_bytes());
        }
        None => {
            hasher.update(&[0]);
        }
    }

    hasher.finalize()
}
