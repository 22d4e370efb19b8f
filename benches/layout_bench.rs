use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mud_zone_layout::layout::{detect_one_way_exits, detect_overlaps, layout_rooms};
use mud_zone_layout::{parse_zone, Exit, ExitDirection, Room, ZoneMap};
use std::hint::black_box;

fn bench_zone_parsing(c: &mut Criterion) {
    let json_content = include_str!("../tests/fixtures/kupferberg_zone.json");

    c.bench_function("zone_parse_kupferberg", |b| {
        b.iter(|| {
            let zone = parse_zone(black_box(json_content)).expect("Zone parse failed");
            black_box(zone.room_count())
        })
    });
}

/// Baut eine synthetische Gitter-Zone mit symmetrischen N/S/E/W-Ausgängen.
fn build_synthetic_zone(width: u64, height: u64) -> ZoneMap {
    let mut zone = ZoneMap::new();

    for row in 0..height {
        for col in 0..width {
            let id = row * width + col + 1;
            let mut room = Room::new(id);
            if col + 1 < width {
                room.exits.push(Exit::new(ExitDirection::East, id + 1));
            }
            if col > 0 {
                room.exits.push(Exit::new(ExitDirection::West, id - 1));
            }
            if row + 1 < height {
                room.exits.push(Exit::new(ExitDirection::South, id + width));
            }
            if row > 0 {
                room.exits.push(Exit::new(ExitDirection::North, id - width));
            }
            zone.add_room(room);
        }
    }

    zone
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_rooms");

    for &side in &[32u64, 100u64] {
        let zone = build_synthetic_zone(side, side);
        group.bench_with_input(
            BenchmarkId::from_parameter(side * side),
            &zone,
            |b, zone| {
                b.iter(|| {
                    let positions = layout_rooms(black_box(zone), None);
                    black_box(positions.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let zone = build_synthetic_zone(100, 100);
    let positions = layout_rooms(&zone, None);

    c.bench_function("detect_overlaps_10k", |b| {
        b.iter(|| black_box(detect_overlaps(black_box(&positions)).len()))
    });

    c.bench_function("detect_one_way_exits_10k", |b| {
        b.iter(|| black_box(detect_one_way_exits(black_box(&zone)).len()))
    });
}

criterion_group!(benches, bench_zone_parsing, bench_layout, bench_analysis);
criterion_main!(benches);
