//! MUD-Zone-Layout-Engine.
//! Kernfunktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod core;
pub mod io;
pub mod layout;
pub mod shared;

pub use core::{Exit, ExitDirection, Room, ZoneMap};
pub use io::{parse_zone, write_layout_report, LayoutReport};
pub use layout::{
    detect_one_way_exits, detect_overlaps, layout_rooms, resolve_overlaps,
    resolve_overlaps_iterative, LayoutCache, OneWayExit, OneWayReason, OverlapInfo,
};
pub use shared::LayoutOptions;
