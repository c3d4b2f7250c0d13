use crate::generator::profile::{build_walk_track, WalkConfig};
use crate::gui_bridge::model::{BeaconDistance, DetectionView};
use crate::mission::runner::Runner;
use crate::sources::TrackSource;
use anyhow::Result;
use beaconcore::{Coordinate, DetectionResult};
use serde::Deserialize;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

/// A fix in `?lat=..&lon=..` form, mirroring the query-parameter round
/// trip of the legacy pages. Doubles as the JSON body of `/ingest`.
#[derive(Debug, Deserialize)]
struct FixQuery {
    lat: f64,
    lon: f64,
}

fn evaluate_and_store(
    runner: &Runner,
    state: &Arc<RwLock<DetectionView>>,
    query: &FixQuery,
) -> anyhow::Result<DetectionResult> {
    // Built unvalidated on purpose: evaluate_fix rejects and counts bad
    // samples itself.
    let fix = Coordinate {
        latitude: query.lat,
        longitude: query.lon,
    };
    let result = runner.evaluate_fix(fix)?;
    let distances = runner.detector().distances(fix)?;
    let beacon_distances = runner
        .detector()
        .targets()
        .iter()
        .zip(distances)
        .map(|(target, distance)| BeaconDistance {
            name: target.name.clone(),
            distance_meters: distance,
        })
        .collect();

    let mut guard = state.write().unwrap();
    *guard = DetectionView {
        last_position: Some(fix),
        latest: Some(result.clone()),
        beacon_distances,
        metrics: runner.metrics_snapshot(),
    };
    Ok(result)
}

/// Bridge that hosts the detection HTTP endpoint and evaluates incoming fixes.
pub struct GuiBridge {
    state: Arc<RwLock<DetectionView>>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let state = Arc::new(RwLock::new(DetectionView::default()));
        let state_for_filter = state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let get_route = warp::path("detection")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: Arc<RwLock<DetectionView>>| warp::reply::json(&*state.read().unwrap()));

        let query_route = warp::path("evaluate")
            .and(warp::get())
            .and(warp::query::<FixQuery>())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |query: FixQuery,
                 state: Arc<RwLock<DetectionView>>,
                 runner: Arc<Runner>| async move {
                    match evaluate_and_store(&runner, &state, &query) {
                        Ok(result) => Ok::<_, warp::Rejection>(warp::reply::with_status(
                            warp::reply::json(&result),
                            StatusCode::OK,
                        )),
                        Err(err) => {
                            eprintln!("evaluate error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let ingest_route = warp::path("ingest")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .and_then(
                |fix: FixQuery,
                 state: Arc<RwLock<DetectionView>>,
                 runner: Arc<Runner>| async move {
                    match evaluate_and_store(&runner, &state, &fix) {
                        Ok(result) => Ok::<_, warp::Rejection>(warp::reply::with_status(
                            warp::reply::json(&json!({
                                "status": "ok",
                                "in_range": result.in_range,
                                "nearest": result.nearest_target.name,
                            })),
                            StatusCode::OK,
                        )),
                        Err(err) => {
                            eprintln!("ingest error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        let walk_route = warp::path("walk")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .and_then(
                |config: WalkConfig,
                 state: Arc<RwLock<DetectionView>>,
                 runner: Arc<Runner>| async move {
                    let outcome = build_walk_track(&config).and_then(|track| {
                        let mut source = TrackSource::new(track);
                        runner.execute(&mut source)
                    });
                    match outcome {
                        Ok(summary) => {
                            let view =
                                DetectionView::from_summary(&summary, runner.metrics_snapshot());
                            let mut guard = state.write().unwrap();
                            *guard = view;
                            Ok::<_, warp::Rejection>(warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "ok",
                                    "fixes": summary.results.len(),
                                    "in_range": summary.in_range_count,
                                    "rejected": summary.rejected_count,
                                })),
                                StatusCode::OK,
                            ))
                        }
                        Err(err) => {
                            eprintln!("walk error: {}", err);
                            Err(warp::reject::custom(WarpError))
                        }
                    }
                },
            );

        thread::spawn(move || {
            let routes = get_route.or(query_route).or(ingest_route).or(walk_route);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(gui_bind_address()).await;
            });
        });

        Self { state }
    }

    pub fn publish(&self, view: &DetectionView) -> Result<()> {
        let mut guard = self.state.write().unwrap();
        *guard = view.clone();
        println!(
            "[GUI] beacons listed: {}, in range: {}",
            guard.beacon_distances.len(),
            guard
                .latest
                .as_ref()
                .map(|result| result.in_range)
                .unwrap_or(false)
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> DetectionView {
        self.state.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::config::MissionConfig;
    use crate::sources::FixedSource;
    use std::sync::Arc;

    #[test]
    fn gui_bridge_updates_state() {
        let mission = MissionConfig::default();
        let runner = Arc::new(Runner::new(&mission).unwrap());
        let gui = GuiBridge::new(runner.clone());

        let fix = Coordinate::new(mission.beacons[0].lat, mission.beacons[0].lon).unwrap();
        let mut source = FixedSource::new(fix);
        let summary = runner.execute(&mut source).unwrap();
        let view = DetectionView::from_summary(&summary, runner.metrics_snapshot());

        gui.publish(&view).unwrap();
        let snapshot = gui.snapshot();
        assert_eq!(snapshot.last_position, Some(fix));
        assert!(snapshot.latest.unwrap().in_range);
        assert_eq!(snapshot.beacon_distances.len(), 3);
        assert_eq!(snapshot.metrics.evaluations, 1);
    }
}
