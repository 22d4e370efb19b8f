//! Laufzeit-Optionen für Layout-Durchläufe.
//!
//! `LayoutOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

/// Standard-Anzahl der Auflösungs-Durchläufe (1 = klassischer Einzeldurchlauf).
pub const DEFAULT_RESOLVE_PASSES: u32 = 1;

/// Alle zur Laufzeit änderbaren Layout-Optionen.
/// Wird als `mud_zone_layout.toml` neben der Binary gespeichert.
///
/// Der Rasterabstand ist bewusst keine Option: die 2-Einheiten-Konvention
/// ist Teil der Wire-Form gegenüber Persistenz und Rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Fester Startraum für die BFS-Platzierung (None = erster Raum der Zone)
    #[serde(default)]
    pub start_room_id: Option<u64>,
    /// Overlaps nach dem Layout automatisch auflösen
    #[serde(default = "default_resolve_overlaps")]
    pub resolve_overlaps: bool,
    /// Maximale Auflösungs-Durchläufe; Werte > 1 prüfen nach jedem Durchlauf
    /// erneut auf Folgekollisionen
    #[serde(default = "default_max_resolve_passes")]
    pub max_resolve_passes: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            start_room_id: None,
            resolve_overlaps: true,
            max_resolve_passes: DEFAULT_RESOLVE_PASSES,
        }
    }
}

/// Serde-Default für `resolve_overlaps` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_resolve_overlaps() -> bool {
    true
}

/// Serde-Default für `max_resolve_passes`.
fn default_max_resolve_passes() -> u32 {
    DEFAULT_RESOLVE_PASSES
}

impl LayoutOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(options) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    options
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("mud_zone_layout"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("mud_zone_layout.toml")
    }
}
