//! Repräsentiert Räume und ihre gerichteten Ausgänge.

use glam::IVec3;
use serde::{Deserialize, Deserializer, Serialize};

/// Richtung eines Ausgangs (Kompass plus Vertikale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExitDirection {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
    Up,
    Down,
}

impl ExitDirection {
    /// Alle Richtungen in Wire-Reihenfolge
    pub const ALL: [ExitDirection; 10] = [
        ExitDirection::North,
        ExitDirection::South,
        ExitDirection::East,
        ExitDirection::West,
        ExitDirection::Northeast,
        ExitDirection::Northwest,
        ExitDirection::Southeast,
        ExitDirection::Southwest,
        ExitDirection::Up,
        ExitDirection::Down,
    ];

    /// Parst den Wire-Namen (z.B. "NORTH"). Unbekannte Namen ergeben `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "NORTH" => Some(ExitDirection::North),
            "SOUTH" => Some(ExitDirection::South),
            "EAST" => Some(ExitDirection::East),
            "WEST" => Some(ExitDirection::West),
            "NORTHEAST" => Some(ExitDirection::Northeast),
            "NORTHWEST" => Some(ExitDirection::Northwest),
            "SOUTHEAST" => Some(ExitDirection::Southeast),
            "SOUTHWEST" => Some(ExitDirection::Southwest),
            "UP" => Some(ExitDirection::Up),
            "DOWN" => Some(ExitDirection::Down),
            _ => None,
        }
    }

    /// Wire-Name der Richtung
    pub fn as_str(&self) -> &'static str {
        match self {
            ExitDirection::North => "NORTH",
            ExitDirection::South => "SOUTH",
            ExitDirection::East => "EAST",
            ExitDirection::West => "WEST",
            ExitDirection::Northeast => "NORTHEAST",
            ExitDirection::Northwest => "NORTHWEST",
            ExitDirection::Southeast => "SOUTHEAST",
            ExitDirection::Southwest => "SOUTHWEST",
            ExitDirection::Up => "UP",
            ExitDirection::Down => "DOWN",
        }
    }
}

/// Ein gerichteter Ausgang eines Raums
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exit {
    /// Richtung des Ausgangs; `None` = Richtung in den Rohdaten unbekannt
    #[serde(default, deserialize_with = "deserialize_direction")]
    pub direction: Option<ExitDirection>,
    /// Ziel-Raum-ID; `None` = Ausgang führt ins Leere / ist unaufgelöst
    #[serde(default)]
    pub to_room_id: Option<u64>,
}

impl Exit {
    /// Erstellt einen Ausgang mit bekannter Richtung
    pub fn new(direction: ExitDirection, to_room_id: u64) -> Self {
        Self {
            direction: Some(direction),
            to_room_id: Some(to_room_id),
        }
    }
}

/// Unbekannte Richtungs-Strings werden zu `None` statt zu einem Parse-Fehler,
/// damit kein Raum wegen fehlerhafter Daten verloren geht.
fn deserialize_direction<'de, D>(deserializer: D) -> Result<Option<ExitDirection>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(ExitDirection::parse))
}

/// Ein Raum innerhalb einer Zone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Raum-ID, eindeutig innerhalb der Zone
    pub id: u64,
    /// Name des Raums (optional)
    #[serde(default)]
    pub name: Option<String>,
    /// Beschreibung (optional)
    #[serde(default)]
    pub description: Option<String>,
    /// Gespeicherte Layout-X-Koordinate (`None` = nie positioniert)
    #[serde(default)]
    pub layout_x: Option<i32>,
    /// Gespeicherte Layout-Y-Koordinate
    #[serde(default)]
    pub layout_y: Option<i32>,
    /// Gespeicherte Layout-Z-Koordinate
    #[serde(default)]
    pub layout_z: Option<i32>,
    /// Alle Ausgänge des Raums
    #[serde(default)]
    pub exits: Vec<Exit>,
}

impl Room {
    /// Erstellt einen Raum ohne Ausgänge und ohne gespeicherte Position
    pub fn new(id: u64) -> Self {
        Self {
            id,
            name: None,
            description: None,
            layout_x: None,
            layout_y: None,
            layout_z: None,
            exits: Vec::new(),
        }
    }

    /// Gespeicherte Z-Koordinate; fehlende Werte gelten als 0
    pub fn saved_z(&self) -> i32 {
        self.layout_z.unwrap_or(0)
    }

    /// Gespeicherte Position; fehlende Koordinaten werden als 0 gewertet
    pub fn saved_position(&self) -> IVec3 {
        IVec3::new(
            self.layout_x.unwrap_or(0),
            self.layout_y.unwrap_or(0),
            self.layout_z.unwrap_or(0),
        )
    }

    /// Prüft ob der Raum einen Ausgang zum Zielraum hat
    pub fn has_exit_to(&self, to_room_id: u64) -> bool {
        self.exits
            .iter()
            .any(|exit| exit.to_room_id == Some(to_room_id))
    }
}
