//! Core-Domänentypen: Räume, Ausgänge, ZoneMap.

pub mod room;
pub mod zone;

pub use room::{Exit, ExitDirection, Room};
pub use zone::ZoneMap;
