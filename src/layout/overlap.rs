//! Overlap-Erkennung und -Auflösung: Räume, die dieselbe Rasterzelle belegen.

use glam::IVec3;
use indexmap::IndexMap;

/// Gruppe von Räumen auf derselben Rasterzelle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapInfo {
    /// Raum-IDs in der Reihenfolge ihres Auftretens in der Positionstabelle
    pub room_ids: Vec<u64>,
    /// Die gemeinsam belegte Zelle
    pub position: IVec3,
}

impl OverlapInfo {
    /// Anzahl der beteiligten Räume
    pub fn count(&self) -> usize {
        self.room_ids.len()
    }
}

/// Gruppiert alle Positionen nach exakter Zelle (x, y, z).
///
/// Gruppen ab zwei Mitgliedern ergeben je ein `OverlapInfo`; Gruppen der
/// Größe 1 entfallen. Die Ausgabe ist nach dem ersten Auftreten der Zelle
/// geordnet, nicht sortiert; Aufrufer mit eigener Ordnungsanforderung
/// sortieren selbst.
pub fn detect_overlaps(positions: &IndexMap<u64, IVec3>) -> Vec<OverlapInfo> {
    let mut cells: IndexMap<IVec3, Vec<u64>> = IndexMap::new();
    for (&room_id, &position) in positions {
        cells.entry(position).or_default().push(room_id);
    }

    cells
        .into_iter()
        .filter(|(_, room_ids)| room_ids.len() > 1)
        .map(|(position, room_ids)| OverlapInfo { room_ids, position })
        .collect()
}

/// Versetzt pro Overlap-Gruppe alle Räume außer dem ersten auf Nachbarzellen.
///
/// Raum an Index i (i ≥ 1) erhält den Versatz
/// `dx = -1 bei geradem i, sonst +1` und `dy = i / 2` relativ zur
/// gemeinsamen Zelle; die Gruppe fächert damit deterministisch nach außen
/// auf. Ein einzelner Durchlauf: ob die neuen Zellen ihrerseits mit
/// unbeteiligten Räumen kollidieren, wird nicht erneut geprüft (bekannte
/// Einschränkung, siehe `resolve_overlaps_iterative`).
///
/// Die Eingabe bleibt unverändert; das Ergebnis ist eine neue Tabelle.
pub fn resolve_overlaps(positions: &IndexMap<u64, IVec3>) -> IndexMap<u64, IVec3> {
    let mut resolved = positions.clone();
    for overlap in detect_overlaps(positions) {
        for (index, &room_id) in overlap.room_ids.iter().enumerate().skip(1) {
            let dx = if index % 2 == 0 { -1 } else { 1 };
            let dy = (index / 2) as i32;
            resolved.insert(room_id, overlap.position + IVec3::new(dx, dy, 0));
        }
    }
    resolved
}

/// Wiederholt Auflösen und Erkennen, bis keine Overlaps mehr übrig sind
/// oder `max_passes` erreicht ist.
///
/// `max_passes = 1` entspricht dem klassischen Einzeldurchlauf.
pub fn resolve_overlaps_iterative(
    positions: &IndexMap<u64, IVec3>,
    max_passes: u32,
) -> IndexMap<u64, IVec3> {
    let mut current = positions.clone();
    for pass in 1..=max_passes {
        if detect_overlaps(&current).is_empty() {
            break;
        }
        current = resolve_overlaps(&current);
        log::debug!("Overlap-Auflösung: Durchlauf {} von {}", pass, max_passes);
    }
    current
}
