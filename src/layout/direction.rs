//! Richtungs-Vektortabelle: Rasterversatz und Gegenrichtung pro Ausgangsrichtung.

use glam::IVec3;

use crate::core::ExitDirection;

/// Rasterabstand zwischen benachbarten Räumen.
///
/// Der Abstand von 2 Einheiten lässt zwischen zwei Zellen Platz für das
/// Kanten-Rendering des Konsumenten und ist Teil der Wire-Konvention.
pub const GRID_SPACING: i32 = 2;

/// Versatz für Ausgänge mit unbekannter Richtung.
/// Der schräge Einheitsversatz sorgt dafür, dass kein Raum stillschweigend
/// aus der Platzierung fällt.
pub const FALLBACK_OFFSET: IVec3 = IVec3::new(1, 1, 0);

/// Rasterversatz für eine Richtung.
///
/// Y wächst nach Süden (Bildschirmkoordinaten), Z nach oben.
pub fn offset(direction: ExitDirection) -> IVec3 {
    match direction {
        ExitDirection::North => IVec3::new(0, -GRID_SPACING, 0),
        ExitDirection::South => IVec3::new(0, GRID_SPACING, 0),
        ExitDirection::East => IVec3::new(GRID_SPACING, 0, 0),
        ExitDirection::West => IVec3::new(-GRID_SPACING, 0, 0),
        ExitDirection::Northeast => IVec3::new(GRID_SPACING, -GRID_SPACING, 0),
        ExitDirection::Northwest => IVec3::new(-GRID_SPACING, -GRID_SPACING, 0),
        ExitDirection::Southeast => IVec3::new(GRID_SPACING, GRID_SPACING, 0),
        ExitDirection::Southwest => IVec3::new(-GRID_SPACING, GRID_SPACING, 0),
        ExitDirection::Up => IVec3::new(0, 0, 1),
        ExitDirection::Down => IVec3::new(0, 0, -1),
    }
}

/// Versatz inklusive Fallback für unbekannte Richtungen
pub fn offset_or_fallback(direction: Option<ExitDirection>) -> IVec3 {
    direction.map(offset).unwrap_or(FALLBACK_OFFSET)
}

/// Logische Gegenrichtung (NORTH↔SOUTH, UP↔DOWN, ...).
///
/// Einzige Quelle der Paarung; die One-Way-Erkennung leitet ihre
/// Rück-Ausgangs-Prüfung hieraus ab.
pub fn opposite(direction: ExitDirection) -> ExitDirection {
    match direction {
        ExitDirection::North => ExitDirection::South,
        ExitDirection::South => ExitDirection::North,
        ExitDirection::East => ExitDirection::West,
        ExitDirection::West => ExitDirection::East,
        ExitDirection::Northeast => ExitDirection::Southwest,
        ExitDirection::Northwest => ExitDirection::Southeast,
        ExitDirection::Southeast => ExitDirection::Northwest,
        ExitDirection::Southwest => ExitDirection::Northeast,
        ExitDirection::Up => ExitDirection::Down,
        ExitDirection::Down => ExitDirection::Up,
    }
}
