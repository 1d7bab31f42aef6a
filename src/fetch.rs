use crate::api;
use crate::config::OverpassConfig;
use crate::domain::{BoundingBox, DistrictGeometry};
use crate::osm;
use eframe::egui;
use log::{debug, info, warn};
use std::sync::mpsc;
use std::thread;

/// What the status readout knows about the current fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Idle,
    Pending,
    Ready,
    Failed(String),
}

/// A finished fetch, tagged with the generation that started it
struct FetchOutcome {
    generation: u64,
    result: Result<DistrictGeometry, String>,
}

/// Runs one background fetch at a time; the latest started fetch wins
///
/// Each started fetch is stamped with the next generation number, and a
/// delivered result is applied only if its stamp still matches. Starting
/// a new fetch (a bounding box change) therefore invalidates whatever is
/// in flight without aborting its request; the late result arrives with
/// an old stamp and is dropped.
pub struct FetchController {
    generation: u64,
    state: FetchState,
    tx: mpsc::Sender<FetchOutcome>,
    rx: mpsc::Receiver<FetchOutcome>,
}

impl FetchController {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            generation: 0,
            state: FetchState::Idle,
            tx,
            rx,
        }
    }

    /// Advance to the next generation, invalidating any fetch in flight
    fn begin(&mut self) -> (u64, mpsc::Sender<FetchOutcome>) {
        self.generation += 1;
        self.state = FetchState::Pending;
        (self.generation, self.tx.clone())
    }

    /// Start a background fetch for the given bounding box
    ///
    /// The fetch runs on its own thread with the blocking HTTP client,
    /// parses the response there, and wakes the UI when done.
    pub fn start(&mut self, bbox: BoundingBox, overpass: OverpassConfig, ctx: &egui::Context) {
        let (generation, tx) = self.begin();
        let ctx = ctx.clone();

        info!(
            "fetch {} starting for ({:.4}, {:.4}) .. ({:.4}, {:.4})",
            generation, bbox.south, bbox.west, bbox.north, bbox.east
        );

        thread::spawn(move || {
            let result = api::fetch_district_geometry(&bbox, &overpass)
                .map(|response| osm::parse_district(&response))
                .map_err(|e| e.to_string());

            // The receiver is gone during shutdown; nothing to deliver then
            let _ = tx.send(FetchOutcome { generation, result });
            ctx.request_repaint();
        });
    }

    /// Drain delivered outcomes, returning freshly applicable geometry
    pub fn poll(&mut self) -> Option<DistrictGeometry> {
        let mut applied = None;
        while let Ok(outcome) = self.rx.try_recv() {
            if let Some(geometry) = self.accept(outcome) {
                applied = Some(geometry);
            }
        }
        applied
    }

    fn accept(&mut self, outcome: FetchOutcome) -> Option<DistrictGeometry> {
        if outcome.generation != self.generation {
            debug!(
                "discarding stale fetch result (generation {}, current {})",
                outcome.generation, self.generation
            );
            return None;
        }

        match outcome.result {
            Ok(geometry) => {
                self.state = FetchState::Ready;
                Some(geometry)
            }
            Err(message) => {
                warn!("fetch {} failed: {}", outcome.generation, message);
                self.state = FetchState::Failed(message);
                None
            }
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RoadClass, RoadPath};

    fn geometry_with_roads(n: usize) -> DistrictGeometry {
        DistrictGeometry {
            roads: (0..n)
                .map(|_| RoadPath::new(vec![(0.0, 0.0), (1.0, 1.0)], RoadClass::Minor))
                .collect(),
            buildings: Vec::new(),
        }
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut fetch = FetchController::new();
        let (old_gen, old_tx) = fetch.begin();
        // Bounding box changes before the first fetch resolves
        let (new_gen, new_tx) = fetch.begin();

        old_tx
            .send(FetchOutcome {
                generation: old_gen,
                result: Ok(geometry_with_roads(1)),
            })
            .unwrap();
        new_tx
            .send(FetchOutcome {
                generation: new_gen,
                result: Ok(geometry_with_roads(2)),
            })
            .unwrap();

        let applied = fetch.poll().unwrap();
        assert_eq!(applied.roads.len(), 2);
        assert_eq!(*fetch.state(), FetchState::Ready);
        assert!(fetch.poll().is_none());
    }

    #[test]
    fn test_stale_result_arriving_last() {
        // Delivery order flipped: the superseded fetch finishes last
        let mut fetch = FetchController::new();
        let (old_gen, old_tx) = fetch.begin();
        let (new_gen, new_tx) = fetch.begin();

        new_tx
            .send(FetchOutcome {
                generation: new_gen,
                result: Ok(geometry_with_roads(2)),
            })
            .unwrap();
        old_tx
            .send(FetchOutcome {
                generation: old_gen,
                result: Ok(geometry_with_roads(1)),
            })
            .unwrap();

        let applied = fetch.poll().unwrap();
        assert_eq!(applied.roads.len(), 2);
        assert!(fetch.poll().is_none());
    }

    #[test]
    fn test_failure_surfaces_one_message() {
        let mut fetch = FetchController::new();
        let (generation, tx) = fetch.begin();

        tx.send(FetchOutcome {
            generation,
            result: Err("Overpass API returned status 504".to_string()),
        })
        .unwrap();

        assert!(fetch.poll().is_none());
        assert_eq!(
            *fetch.state(),
            FetchState::Failed("Overpass API returned status 504".to_string())
        );
    }

    #[test]
    fn test_stale_failure_does_not_clobber_state() {
        let mut fetch = FetchController::new();
        let (old_gen, old_tx) = fetch.begin();
        let (new_gen, new_tx) = fetch.begin();

        new_tx
            .send(FetchOutcome {
                generation: new_gen,
                result: Ok(geometry_with_roads(1)),
            })
            .unwrap();
        assert!(fetch.poll().is_some());
        assert_eq!(*fetch.state(), FetchState::Ready);

        old_tx
            .send(FetchOutcome {
                generation: old_gen,
                result: Err("timed out".to_string()),
            })
            .unwrap();
        assert!(fetch.poll().is_none());
        assert_eq!(*fetch.state(), FetchState::Ready);
    }
}
