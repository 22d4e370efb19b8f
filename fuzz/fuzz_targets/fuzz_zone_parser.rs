//! Fuzz-Target: Zonen-Parser und Layout-Durchlauf dürfen auf keiner
//! Eingabe paniken; degenerierte Zonen müssen ein totales Ergebnis liefern.

#![no_main]

use libfuzzer_sys::fuzz_target;
use mud_zone_layout::layout::{detect_one_way_exits, detect_overlaps, layout_rooms};
use mud_zone_layout::parse_zone;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(zone) = parse_zone(json) else {
        return;
    };

    let positions = layout_rooms(&zone, None);
    assert_eq!(positions.len(), zone.room_count());

    let _ = detect_overlaps(&positions);
    let _ = detect_one_way_exits(&zone);
});
