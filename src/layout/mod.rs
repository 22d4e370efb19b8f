//! Layout-Engine: Rasterplatzierung, Overlap- und One-Way-Erkennung.
//!
//! Alle Funktionen sind pure Funktionen über unveränderlichen Eingaben:
//! die ZoneMap wird nie mutiert, jedes Ergebnis ist eine frische Struktur.

pub mod cache;
pub mod direction;
pub mod engine;
pub mod one_way;
pub mod overlap;

pub use cache::LayoutCache;
pub use direction::{offset, offset_or_fallback, opposite, FALLBACK_OFFSET, GRID_SPACING};
pub use engine::layout_rooms;
pub use one_way::{detect_one_way_exits, OneWayExit, OneWayReason};
pub use overlap::{detect_overlaps, resolve_overlaps, resolve_overlaps_iterative, OverlapInfo};
