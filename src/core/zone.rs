//! Die zentrale ZoneMap-Datenstruktur: Arbeitsmenge aller Räume einer Zone.

use glam::IVec3;
use indexmap::IndexMap;

use super::{Exit, ExitDirection, Room};

/// Container für alle Räume einer Zone.
///
/// Die Räume bleiben in Eingabereihenfolge: sie bestimmt den Default-Startraum,
/// die Fallback-Packung und damit die Determinismus-Garantie des Layouts.
#[derive(Debug, Clone, Default)]
pub struct ZoneMap {
    /// Alle Räume, indexiert nach ID; Einfügereihenfolge = Eingabereihenfolge
    rooms: IndexMap<u64, Room>,
    /// Name der Zone (optional)
    pub name: Option<String>,
}

impl ZoneMap {
    /// Erstellt eine leere ZoneMap
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut eine ZoneMap aus einer Raumliste in gegebener Reihenfolge
    pub fn from_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        let mut zone = Self::new();
        for room in rooms {
            zone.add_room(room);
        }
        zone
    }

    /// Fügt einen Raum hinzu. Bei doppelter ID bleibt der zuerst gesehene erhalten.
    pub fn add_room(&mut self, room: Room) -> bool {
        if self.rooms.contains_key(&room.id) {
            log::warn!("Raum {} bereits vorhanden, Duplikat ignoriert", room.id);
            return false;
        }
        self.rooms.insert(room.id, room);
        true
    }

    /// Findet einen Raum nach ID
    pub fn room(&self, id: u64) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Prüft ob ein Raum mit dieser ID existiert
    pub fn contains(&self, id: u64) -> bool {
        self.rooms.contains_key(&id)
    }

    /// Iterator über alle Räume in Eingabereihenfolge
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Iterator über alle Raum-IDs in Eingabereihenfolge
    pub fn room_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.rooms.keys().copied()
    }

    /// ID des ersten Raums der Eingabe
    pub fn first_room_id(&self) -> Option<u64> {
        self.rooms.keys().next().copied()
    }

    /// Gibt die Anzahl der Räume zurück
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Gibt die Gesamtzahl aller Ausgänge zurück
    pub fn exit_count(&self) -> usize {
        self.rooms.values().map(|room| room.exits.len()).sum()
    }

    /// Alle Ausgänge von `from` nach `to`
    pub fn exits_between(&self, from: u64, to: u64) -> impl Iterator<Item = &Exit> {
        self.rooms
            .get(&from)
            .into_iter()
            .flat_map(|room| room.exits.iter())
            .filter(move |exit| exit.to_room_id == Some(to))
    }

    /// Prüft ob `from` irgendeinen Ausgang nach `to` hat
    pub fn has_exit(&self, from: u64, to: u64) -> bool {
        self.exits_between(from, to).next().is_some()
    }

    /// Prüft ob `from` einen Ausgang nach `to` mit exakt dieser Richtung hat
    pub fn has_exit_in_direction(
        &self,
        from: u64,
        to: u64,
        direction: Option<ExitDirection>,
    ) -> bool {
        self.exits_between(from, to)
            .any(|exit| exit.direction == direction)
    }

    /// Gespeicherte Positionen aller Räume in Eingabereihenfolge.
    ///
    /// Fehlende Koordinaten werden als 0 gewertet: unpositionierte Räume
    /// landen gemeinsam auf der Zelle (0,0,0) und tauchen damit in der
    /// Overlap-Erkennung auf.
    pub fn saved_positions(&self) -> IndexMap<u64, IVec3> {
        self.rooms
            .iter()
            .map(|(&id, room)| (id, room.saved_position()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_map_creation() {
        let mut zone = ZoneMap::new();
        assert!(zone.add_room(Room::new(1)));

        assert_eq!(zone.room_count(), 1);
        assert_eq!(zone.exit_count(), 0);
        assert_eq!(zone.first_room_id(), Some(1));
    }

    #[test]
    fn test_duplicate_id_keeps_first() {
        let mut first = Room::new(1);
        first.name = Some("Original".to_string());
        let mut duplicate = Room::new(1);
        duplicate.name = Some("Duplikat".to_string());

        let zone = ZoneMap::from_rooms([first, duplicate]);

        assert_eq!(zone.room_count(), 1);
        assert_eq!(
            zone.room(1).and_then(|room| room.name.as_deref()),
            Some("Original"),
            "Bei doppelter ID muss der erste Raum erhalten bleiben"
        );
    }

    #[test]
    fn test_input_order_preserved() {
        let zone = ZoneMap::from_rooms([Room::new(9), Room::new(3), Room::new(7)]);

        let ids: Vec<u64> = zone.room_ids().collect();
        assert_eq!(ids, vec![9, 3, 7], "Eingabereihenfolge muss erhalten bleiben");
        assert_eq!(zone.first_room_id(), Some(9));
    }

    #[test]
    fn test_exit_queries() {
        let mut a = Room::new(1);
        a.exits.push(Exit::new(ExitDirection::North, 2));
        a.exits.push(Exit::new(ExitDirection::Up, 2));
        let mut b = Room::new(2);
        b.exits.push(Exit::new(ExitDirection::South, 1));

        let zone = ZoneMap::from_rooms([a, b]);

        assert_eq!(zone.exits_between(1, 2).count(), 2);
        assert!(zone.has_exit(2, 1));
        assert!(zone.has_exit_in_direction(2, 1, Some(ExitDirection::South)));
        assert!(!zone.has_exit_in_direction(2, 1, Some(ExitDirection::Down)));
        assert!(!zone.has_exit(2, 3));
    }

    #[test]
    fn test_saved_positions_normalizes_missing_coords() {
        let mut positioned = Room::new(1);
        positioned.layout_x = Some(4);
        positioned.layout_y = Some(-2);
        positioned.layout_z = Some(1);
        let unpositioned = Room::new(2);

        let zone = ZoneMap::from_rooms([positioned, unpositioned]);
        let saved = zone.saved_positions();

        assert_eq!(saved[&1], IVec3::new(4, -2, 1));
        assert_eq!(saved[&2], IVec3::ZERO, "Fehlende Koordinaten müssen als 0 gelten");
    }
}
