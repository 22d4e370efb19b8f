//! Erkennung von One-Way-Ausgängen: Hin-Ausgänge ohne passenden Rück-Ausgang.

use super::direction::opposite;
use crate::core::{ExitDirection, ZoneMap};

/// Klassifikation, warum ein Ausgang als One-Way gilt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneWayReason {
    /// Der Zielraum hat gar keinen Ausgang zurück zum Ursprungsraum
    NoReverseExit,
    /// Ein Rück-Ausgang existiert, aber nicht in der logischen Gegenrichtung
    PositionMismatch,
}

impl OneWayReason {
    /// Wire-Code für Reports
    pub fn as_code(&self) -> &'static str {
        match self {
            OneWayReason::NoReverseExit => "no_reverse_exit",
            OneWayReason::PositionMismatch => "position_mismatch",
        }
    }
}

/// Ein als One-Way erkannter Ausgang
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneWayExit {
    /// Ursprungsraum des Hin-Ausgangs
    pub from_room: u64,
    /// Zielraum des Hin-Ausgangs
    pub to_room: u64,
    /// Richtung des Hin-Ausgangs
    pub direction: Option<ExitDirection>,
    /// Immer `true` für emittierte Einträge; Teil der Wire-Form
    pub is_one_way: bool,
    /// Klassifikation der Inkonsistenz
    pub reason: OneWayReason,
}

/// Prüft jeden Ausgang A→B darauf, ob B einen Ausgang in der Gegenrichtung
/// zurück nach A hat.
///
/// Fehlt jeder Rückweg, wird `NoReverseExit` gemeldet; existiert ein Rückweg
/// nur in einer anderen Richtung, `PositionMismatch`. Passt die
/// Gegenrichtung exakt, wird nichts emittiert; das Ausbleiben eines
/// Eintrags ist das "kein Problem"-Ergebnis. UP/DOWN nehmen wie jede andere
/// Richtung teil (UP↔DOWN). Ausgänge ins Leere oder auf Räume außerhalb der
/// Arbeitsmenge werden übersprungen.
pub fn detect_one_way_exits(zone: &ZoneMap) -> Vec<OneWayExit> {
    let mut result = Vec::new();

    for room in zone.rooms() {
        for exit in &room.exits {
            let Some(target_id) = exit.to_room_id else {
                continue;
            };
            if zone.room(target_id).is_none() {
                continue;
            }

            let reason = if !zone.has_exit(target_id, room.id) {
                Some(OneWayReason::NoReverseExit)
            } else if !zone.has_exit_in_direction(target_id, room.id, exit.direction.map(opposite))
            {
                Some(OneWayReason::PositionMismatch)
            } else {
                None
            };

            if let Some(reason) = reason {
                result.push(OneWayExit {
                    from_room: room.id,
                    to_room: target_id,
                    direction: exit.direction,
                    is_one_way: true,
                    reason,
                });
            }
        }
    }

    result
}
