//! The `ScenarioManager` and its tick loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use sr_behavior::Status;
use sr_core::{RunConfig, Timestamp};
use sr_history::ActorHistory;

use crate::{
    Agent, Health, RunOutcome, RunReport, RunnerError, RunnerResult, Scenario, ScenarioObserver,
    Watchdog, World,
};

// ── StopHandle ────────────────────────────────────────────────────────────────

/// Cloneable handle that cancels a running loop from any thread.
#[derive(Clone, Debug)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Clear the running flag.  The loop finishes its current iteration and
    /// returns with [`RunOutcome::Cancelled`].
    pub fn stop(&self) {
        self.0.store(false, Ordering::Release);
    }
}

// ── ScenarioManager ───────────────────────────────────────────────────────────

/// Loads one scenario at a time and runs it to a terminal state.
///
/// Usage:
///
/// ```rust,ignore
/// let mut manager = ScenarioManager::new(config)?;
/// manager.load_scenario(scenario, None)?;
/// let mut history = ActorHistory::new();
/// let report = manager.run(&mut world, &mut history, &mut NoopObserver)?;
/// manager.cleanup();
/// ```
pub struct ScenarioManager<W: World> {
    config:    RunConfig,
    scenario:  Option<Scenario<W>>,
    agent:     Option<Box<dyn Agent>>,
    /// Lock-step mode; forced on by attaching an agent.
    sync_mode: bool,
    watchdog:  Option<Watchdog>,
    running:   Arc<AtomicBool>,

    // ── Per-run state, cleared by `reset` ─────────────────────────────────
    last_elapsed:    f64,
    ticks:           u64,
    game_seconds:    f64,
    last_status:     Status,
    watchdog_health: Health,
}

impl<W: World> ScenarioManager<W> {
    pub fn new(config: RunConfig) -> RunnerResult<Self> {
        config.validate().map_err(|e| RunnerError::Config(e.to_string()))?;
        Ok(Self {
            sync_mode:       config.sync_mode,
            config,
            scenario:        None,
            agent:           None,
            watchdog:        None,
            running:         Arc::new(AtomicBool::new(false)),
            last_elapsed:    0.0,
            ticks:           0,
            game_seconds:    0.0,
            last_status:     Status::Running,
            watchdog_health: Health::Healthy,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Load a scenario, replacing any previous one, and reset run state.
    ///
    /// Loading arms the running flag.  A [`StopHandle::stop`] issued between
    /// loading and [`run`](Self::run) is honoured: the run returns
    /// [`RunOutcome::Cancelled`] without processing a tick.  A finished run
    /// leaves the flag cleared, so run the same scenario again by reloading.
    ///
    /// Attaching an agent switches to lock-step mode; the scenario must then
    /// name an ego actor for the agent to drive.
    pub fn load_scenario(&mut self, scenario: Scenario<W>, agent: Option<Box<dyn Agent>>) -> RunnerResult<()> {
        if agent.is_some() && scenario.ego.is_none() {
            return Err(RunnerError::Config(format!(
                "scenario {} has an agent but no ego actor",
                scenario.name
            )));
        }
        self.reset();
        if agent.is_some() {
            self.sync_mode = true;
        }
        tracing::info!(scenario = %scenario.name, sync = self.sync_mode, "loaded scenario");
        self.scenario = Some(scenario);
        self.agent = agent;
        Ok(())
    }

    /// Run the loaded scenario until its tree reaches a terminal status, the
    /// watchdog trips, or [`StopHandle::stop`] is called.
    ///
    /// Every processed tick appends one step to `history`.
    pub fn run<O: ScenarioObserver>(
        &mut self,
        world:    &mut W,
        history:  &mut ActorHistory,
        observer: &mut O,
    ) -> RunnerResult<RunReport> {
        let name = match &self.scenario {
            Some(s) => s.name.clone(),
            None    => return Err(RunnerError::NoScenario),
        };
        let timeout = Duration::try_from_secs_f64(self.config.timeout_secs)
            .map_err(|e| RunnerError::Config(e.to_string()))?;

        tracing::info!(scenario = %name, "running scenario");
        observer.on_run_start(&name);
        let start_system = Instant::now();
        let start_game = self.game_seconds;

        self.watchdog = Some(Watchdog::start(timeout)?);

        let result = self.run_loop(world, history, observer);

        self.running.store(false, Ordering::Release);
        if let Some(mut watchdog) = self.watchdog.take() {
            watchdog.stop();
            self.watchdog_health = watchdog.status();
        }
        let outcome = result?;

        let report = RunReport {
            scenario:        name,
            outcome,
            ticks:           self.ticks,
            duration_system: start_system.elapsed(),
            duration_game:   self.game_seconds - start_game,
        };
        if outcome == RunOutcome::Failure {
            tracing::warn!(scenario = %report.scenario, "terminated due to failure");
        }
        tracing::info!("{report}");
        observer.on_run_end(&report);
        Ok(report)
    }

    /// Handle for cancelling the loop from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.running))
    }

    /// Cancel the loop from the owning thread (e.g. a signal handler hook).
    pub fn stop_scenario(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// `false` if the watchdog tripped during the current or last run.
    pub fn running_status(&self) -> bool {
        match &self.watchdog {
            Some(w) => w.status().is_healthy(),
            None    => self.watchdog_health.is_healthy(),
        }
    }

    /// Whether the loop issues world steps itself.
    pub fn sync_mode(&self) -> bool {
        self.sync_mode
    }

    /// Last status returned by the behavior tree.
    pub fn tree_status(&self) -> Status {
        self.last_status
    }

    /// Stop the watchdog, terminate the tree, and release the agent.
    pub fn cleanup(&mut self) {
        if let Some(mut watchdog) = self.watchdog.take() {
            watchdog.stop();
        }
        if let Some(scenario) = self.scenario.as_mut() {
            scenario.tree.terminate();
        }
        if let Some(mut agent) = self.agent.take() {
            agent.cleanup();
        }
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    fn run_loop<O: ScenarioObserver>(
        &mut self,
        world:    &mut W,
        history:  &mut ActorHistory,
        observer: &mut O,
    ) -> RunnerResult<RunOutcome> {
        let mut outcome = None;

        while self.running.load(Ordering::Acquire) {
            let mut progressed = false;
            let mut polled = false;
            if let Some(ts) = world.timestamp() {
                polled = true;
                if let Some(status) = self.tick_scenario(ts, world, history)? {
                    observer.on_tick(&ts, status);
                    progressed = true;
                    match status {
                        Status::Success => outcome = Some(RunOutcome::Success),
                        Status::Failure => outcome = Some(RunOutcome::Failure),
                        Status::Running => {}
                    }
                }
            }

            let healthy = self.watchdog.as_ref().is_none_or(|w| w.status().is_healthy());
            if !healthy {
                tracing::error!(ticks = self.ticks, "watchdog unhealthy; halting world advancement");
                outcome.get_or_insert(RunOutcome::Timeout);
                self.running.store(false, Ordering::Release);
            } else if polled && self.sync_mode && self.running.load(Ordering::Acquire) {
                // Step only after a clock reading, so no frame goes unobserved.
                world.tick();
            } else if !progressed {
                std::thread::yield_now();
            }
        }

        Ok(outcome.unwrap_or(RunOutcome::Cancelled))
    }

    /// Process `ts` if it is a new tick; returns the tree status if it was.
    fn tick_scenario(
        &mut self,
        ts:      Timestamp,
        world:   &mut W,
        history: &mut ActorHistory,
    ) -> RunnerResult<Option<Status>> {
        if !ts.is_after(self.last_elapsed) || !self.running.load(Ordering::Acquire) {
            return Ok(None);
        }
        self.last_elapsed = ts.elapsed_seconds;

        if let Some(w) = &self.watchdog {
            w.update();
        }
        if self.config.debug_mode {
            tracing::debug!("--------- tick {} ---------", ts);
        }

        self.ticks += 1;
        self.game_seconds += ts.delta_seconds;
        history.record_tick(&world.observe_actors())?;

        let scenario = self.scenario.as_mut().ok_or(RunnerError::NoScenario)?;
        if let (Some(agent), Some(ego)) = (self.agent.as_mut(), scenario.ego) {
            let control = agent.run_step(&ts);
            world.apply_control(ego, control);
        }

        let status = scenario.tree.tick(world);
        self.last_status = status;
        if self.config.debug_mode {
            tracing::debug!(tree = scenario.tree.name(), %status, "tree ticked");
        }
        if status.is_terminal() {
            self.running.store(false, Ordering::Release);
        }
        Ok(Some(status))
    }

    /// Clear per-run state and arm the running flag for the next `run`.
    fn reset(&mut self) {
        self.running.store(true, Ordering::Release);
        self.sync_mode       = self.config.sync_mode;
        self.last_elapsed    = 0.0;
        self.ticks           = 0;
        self.game_seconds    = 0.0;
        self.last_status     = Status::Running;
        self.watchdog_health = Health::Healthy;
    }
}
