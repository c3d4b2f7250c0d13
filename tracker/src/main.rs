use anyhow::Context;
use beaconcore::Coordinate;
use clap::Parser;
use generator::profile::{build_walk_track, WalkConfig};
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::DetectionView;
use mission::config::MissionConfig;
use mission::runner::Runner;
use sources::{FixedSource, LocationSource, TrackSource};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;

mod generator;
mod gui_bridge;
mod mission;
mod sources;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for the beacon proximity detector")]
struct Args {
    /// Evaluate one fix (or a generated walk) and emit a summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a mission config (beacons, radius, intensities) from YAML
    #[arg(long)]
    mission: Option<PathBuf>,
    /// Latitude of an ad-hoc fix to evaluate instead of a walk
    #[arg(long)]
    lat: Option<f64>,
    /// Longitude of an ad-hoc fix to evaluate instead of a walk
    #[arg(long)]
    lon: Option<f64>,
    #[arg(long, default_value_t = 60)]
    steps: usize,
    #[arg(long, default_value_t = 25.0)]
    step_meters: f64,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Keep the HTTP bridge alive for incoming fixes
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mission = if let Some(path) = args.mission {
        MissionConfig::load(path)?
    } else {
        MissionConfig::default()
    };

    log::info!(
        "mission with {} beacons, radius {} m",
        mission.beacons.len(),
        mission.radius_meters
    );

    let runner = Runner::new(&mission)?;
    let gui_bridge = GuiBridge::new(Arc::new(runner.clone()));

    if args.offline {
        let mut source: Box<dyn LocationSource> = match (args.lat, args.lon) {
            (Some(lat), Some(lon)) => {
                let fix = Coordinate::new(lat, lon).context("parsing ad-hoc fix")?;
                Box::new(FixedSource::new(fix))
            }
            _ => {
                let walk = WalkConfig {
                    steps: args.steps,
                    step_meters: args.step_meters,
                    seed: args.seed,
                    ..Default::default()
                };
                Box::new(TrackSource::new(build_walk_track(&walk)?))
            }
        };

        let summary = runner.execute(source.as_mut())?;
        let nearest = summary
            .results
            .last()
            .map(|result| result.nearest_target.name.as_str())
            .unwrap_or("none");

        println!(
            "Offline run -> fixes {}, in range {}, rejected {}, last nearest {}",
            summary.results.len(),
            summary.in_range_count,
            summary.rejected_count,
            nearest
        );

        let view = DetectionView::from_summary(&summary, runner.metrics_snapshot());
        gui_bridge.publish(&view)?;
        gui_bridge.publish_status("Offline proximity results ready.");

        let report = format!(
            "fixes={} in_range={} rejected={} nearest={} distances={:?}\n",
            summary.results.len(),
            summary.in_range_count,
            summary.rejected_count,
            nearest,
            summary.beacon_distances
        );
        let report_path = PathBuf::from("tools/data/offline_proximity.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }
    if args.serve {
        gui_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
