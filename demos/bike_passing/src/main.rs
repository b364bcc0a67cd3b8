//! bike_passing — end-to-end run of the scenario_record pipeline.
//!
//! An ego car driven by a fixed-throttle agent overtakes a cyclist riding in
//! the bike lane, past a vending machine that blocks the view.  The run is
//! recorded and exported as a fixed-shape motion record plus a trace plot.
//!
//! Usage: `bike_passing [config.toml]`.  `SCENARIO_RUNNER_ROOT` overrides the
//! output root; `RUST_LOG` the log filter.

mod town;
mod world;

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sr_behavior::{
    Action, BoxedBehavior, Condition, DEFAULT_PLACEMENT_ATTEMPTS, Parallel, ParallelPolicy,
    Sequence, Status, retry_bounded,
};
use sr_core::{ActorId, RunConfig, Timestamp, Vec3};
use sr_history::ActorHistory;
use sr_output::{JsonWriter, export_run};
use sr_runner::{Agent, Control, NoopObserver, Scenario, ScenarioManager};

use town::{BIKE_LANE_Y, EGO_LANE_Y, build_town};
use world::KinematicWorld;

// ── Constants ─────────────────────────────────────────────────────────────────

const SCENARIO_NAME:    &str = "BikePassingby_1";
const EGO_BLUEPRINT:    &str = "vehicle.lincoln.mkz2017";
const BIKE_BLUEPRINT:   &str = "vehicle.diamondback.century";
const PROP_BLUEPRINT:   &str = "static.prop.vendingmachine";
const SEED:             u64  = 7;
const DT:               f64  = 0.05;   // 20 Hz
const CYCLIST_START_X:  f64  = 40.0;
const TRIGGER_DISTANCE: f64  = 25.0;
const CYCLIST_SPEED:    f64  = 5.0;
const EGO_DRIVE_METRES: f64  = 90.0;

// ── Agent ─────────────────────────────────────────────────────────────────────

/// Open-loop agent: full throttle for a while, then cruise.
struct CruiseAgent;

impl Agent for CruiseAgent {
    fn run_step(&mut self, ts: &Timestamp) -> Control {
        let throttle = if ts.elapsed_seconds < 3.0 { 1.0 } else { 0.1 };
        Control { throttle, ..Control::default() }
    }

    fn cleanup(&mut self) {
        tracing::debug!("agent released");
    }
}

// ── Behavior tree ─────────────────────────────────────────────────────────────

type Node = BoxedBehavior<KinematicWorld>;

fn build_tree(ego: ActorId, cyclist: ActorId) -> Node {
    let trigger: Node = Box::new(Condition::new("ego near cyclist", move |w: &mut KinematicWorld| {
        w.distance(ego, cyclist) < TRIGGER_DISTANCE
    }));
    let accelerate: Node = Box::new(Action::new("cyclist accelerates", move |w: &mut KinematicWorld| {
        w.set_target_speed(cyclist, CYCLIST_SPEED);
        Status::Success
    }));
    let drive: Node = Box::new(Condition::new("ego drove far enough", move |w: &mut KinematicWorld| {
        w.odometer(ego) >= EGO_DRIVE_METRES
    }));
    let stop: Node = Box::new(Action::new("cyclist stops", move |w: &mut KinematicWorld| {
        w.set_target_speed(cyclist, 0.0);
        Status::Success
    }));
    let collision: Node = Box::new(Action::new("collision test", move |w: &mut KinematicWorld| {
        if w.distance(ego, cyclist) < 1.0 { Status::Failure } else { Status::Running }
    }));

    let passing: Node = Box::new(Sequence::new("cyclist passing", vec![trigger, accelerate, drive, stop]));
    Box::new(Parallel::new("BikePassingby", ParallelPolicy::SuccessOnOne, vec![passing, collision]))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_thread_names(true))
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    // 1. Configuration.
    let config = match std::env::args_os().nth(1) {
        Some(path) => RunConfig::from_toml_file(Path::new(&path))?,
        None       => RunConfig::default(),
    }
    .apply_env();
    tracing::info!(output = %config.output_dir().display(), "configuration loaded");

    // 2. Map and actors.  The cyclist spawn point slides 1.5 m down the bike
    //    lane on every failed attempt.
    let map = build_town();
    let mut world = KinematicWorld::new(DT, SEED);
    let ego = retry_bounded(DEFAULT_PLACEMENT_ATTEMPTS, |_| {
        world.spawn(EGO_BLUEPRINT, Vec3::new(5.0, EGO_LANE_Y, 0.5), 0.0)
    })?;
    let cyclist = retry_bounded(DEFAULT_PLACEMENT_ATTEMPTS, |attempt| {
        let x = CYCLIST_START_X + 1.5 * f64::from(attempt);
        world.spawn(BIKE_BLUEPRINT, Vec3::new(x, BIKE_LANE_Y, 0.3), 0.0)
    })?;
    let prop_x = world.body(cyclist).map_or(CYCLIST_START_X, |b| b.location.x) - 4.0;
    retry_bounded(DEFAULT_PLACEMENT_ATTEMPTS, |_| {
        world.spawn(PROP_BLUEPRINT, Vec3::new(prop_x, BIKE_LANE_Y - 1.5, 0.3), 180.0)
    })?;

    // 3. Run.
    let scenario = Scenario::new(SCENARIO_NAME, build_tree(ego, cyclist)).with_ego(ego);
    let mut manager = ScenarioManager::new(config.clone())?;
    manager.load_scenario(scenario, Some(Box::new(CruiseAgent)))?;

    let mut history = ActorHistory::new();
    let report = manager.run(&mut world, &mut history, &mut NoopObserver)?;
    manager.cleanup();

    // 4. Export, whatever the outcome.
    let (record, path) = export_run(&config, &report.scenario, &history, &map, &mut JsonWriter::new())?;

    // 5. Summary.
    println!("{report}");
    println!("  world time     : {:.2} s", world.elapsed());
    println!("  actors         : {}", history.actor_count());
    println!("  steps          : {}", history.steps());
    println!("  record fields  : {}", record.len());
    println!("  record         : {}", path.display());
    println!("  trace plot     : {}", path.with_extension("svg").display());
    Ok(())
}
