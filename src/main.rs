//! Zone-Layout-Report-Werkzeug.
//!
//! Liest eine Zonen-JSON, berechnet das Rasterlayout und schreibt einen
//! Report mit Positionen, Overlap-Gruppen und One-Way-Ausgängen. Die
//! Engine selbst bleibt rein; dieses Werkzeug ist einer ihrer Konsumenten.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use mud_zone_layout::layout::{
    detect_one_way_exits, detect_overlaps, layout_rooms, resolve_overlaps,
    resolve_overlaps_iterative,
};
use mud_zone_layout::{io, LayoutOptions, LayoutReport};

/// Berechnet das Rasterlayout einer MUD-Zone und meldet Inkonsistenzen
#[derive(Parser, Debug)]
#[command(name = "zone-layout-report")]
#[command(version, about, long_about = None)]
struct Args {
    /// Zonendatei (JSON)
    input: PathBuf,

    /// Report-Ausgabedatei; ohne Angabe geht der Report nach stdout
    output: Option<PathBuf>,

    /// Startraum für die BFS-Platzierung (überstimmt die Optionen-Datei)
    #[arg(long)]
    start_room: Option<u64>,

    /// Overlaps nicht auflösen, nur melden
    #[arg(long)]
    no_resolve: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("zone-layout-report v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let options = LayoutOptions::load_from_file(&LayoutOptions::config_path());

    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Zonendatei nicht lesbar: {}", args.input.display()))?;
    let zone = io::parse_zone(&json)?;
    log::info!(
        "Zone '{}' geladen: {} Räume, {} Ausgänge",
        zone.name.as_deref().unwrap_or("unbenannt"),
        zone.room_count(),
        zone.exit_count()
    );

    let start_room_id = args.start_room.or(options.start_room_id);
    let mut positions = layout_rooms(&zone, start_room_id);

    let overlaps = detect_overlaps(&positions);
    if !overlaps.is_empty() {
        log::warn!("{} Overlap-Gruppen erkannt", overlaps.len());
        if options.resolve_overlaps && !args.no_resolve {
            positions = if options.max_resolve_passes <= 1 {
                resolve_overlaps(&positions)
            } else {
                resolve_overlaps_iterative(&positions, options.max_resolve_passes)
            };
        }
    }

    let one_way = detect_one_way_exits(&zone);
    for exit in &one_way {
        log::warn!(
            "One-Way-Ausgang: {} → {} ({})",
            exit.from_room,
            exit.to_room,
            exit.reason.as_code()
        );
    }

    let report = LayoutReport::new(zone.name.clone(), &positions, &overlaps, &one_way);
    let serialized = io::write_layout_report(&report)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, serialized)
                .with_context(|| format!("Report nicht schreibbar: {}", path.display()))?;
            log::info!("Report geschrieben nach: {}", path.display());
        }
        None => println!("{}", serialized),
    }

    log::info!(
        "Fertig: {} Positionen, {} Overlap-Gruppen, {} One-Way-Ausgänge",
        zone.room_count(),
        report.overlap_count(),
        report.one_way_count()
    );

    Ok(())
}
