//! Run configuration and the fixed capacities of the output record.
//!
//! The capacities are part of the benchmark format and are not expected to
//! change; they live in `RunConfig` only so tests can shrink them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

// ── Record constants ──────────────────────────────────────────────────────────

/// Agent rows in every `state/*` array.
pub const NUM_AGENTS: usize = 128;

/// Rows in every `roadgraph_samples/*` array.
pub const NUM_RG_POINTS: usize = 20_000;

/// Sentinel for every unused numeric slot except validity flags.
pub const INVALID: f64 = -1.0;

/// Sentinel for unused validity flags (semantically `false`).
pub const INVALID_VALID: f64 = 0.0;

/// Default arc-length spacing between lane centreline samples, metres.
pub const RG_RESOLUTION_M: f64 = 1.0;

/// Total shards a scenario family is split into (`…-of-00010`).
pub const SHARD_COUNT: u32 = 10;

/// Environment variable that overrides [`RunConfig::output_root`].
pub const OUTPUT_ROOT_ENV: &str = "SCENARIO_RUNNER_ROOT";

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level configuration for one scenario run and its export.
///
/// Typically loaded from a TOML file by the application crate; every field
/// has a default so an empty document is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Watchdog timeout: seconds without a new tick before the run is failed.
    pub timeout_secs: f64,

    /// Lock-step mode: the runner commands every world step itself.
    /// Forced on when an agent is attached.
    pub sync_mode: bool,

    /// Log the behavior-tree status after every tick.
    pub debug_mode: bool,

    /// Spacing between lane centreline samples, metres.
    pub rg_resolution_m: f64,

    /// Agent capacity of the record.
    pub num_agents: usize,

    /// Road-graph point capacity of the record.
    pub num_rg_points: usize,

    /// Root under which `record_dir` is created.  Overridden by
    /// `SCENARIO_RUNNER_ROOT` when [`apply_env`][Self::apply_env] is called.
    pub output_root: PathBuf,

    /// Directory (relative to `output_root`) that receives records and plots.
    pub record_dir: String,

    /// Shard label written into the file name.
    pub shard_id: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timeout_secs:    2.0,
            sync_mode:       false,
            debug_mode:      false,
            rg_resolution_m: RG_RESOLUTION_M,
            num_agents:      NUM_AGENTS,
            num_rg_points:   NUM_RG_POINTS,
            output_root:     PathBuf::from("./"),
            record_dir:      "recordings".to_owned(),
            shard_id:        "00000".to_owned(),
        }
    }
}

impl RunConfig {
    /// Parse a TOML document; missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> CoreResult<Self> {
        let config: RunConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and parse a TOML file.
    pub fn from_toml_file(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Apply environment overrides (currently only `SCENARIO_RUNNER_ROOT`).
    pub fn apply_env(mut self) -> Self {
        if let Some(root) = std::env::var_os(OUTPUT_ROOT_ENV) {
            self.output_root = PathBuf::from(root);
        }
        self
    }

    /// Directory that records and plots are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.output_root.join(&self.record_dir)
    }

    /// Reject values that would make the run or the record meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.timeout_secs > 0.0 && self.timeout_secs.is_finite()) {
            return Err(CoreError::Config(format!(
                "timeout_secs must be positive, got {}",
                self.timeout_secs
            )));
        }
        if !(self.rg_resolution_m > 0.0 && self.rg_resolution_m.is_finite()) {
            return Err(CoreError::Config(format!(
                "rg_resolution_m must be positive, got {}",
                self.rg_resolution_m
            )));
        }
        if self.num_agents == 0 || self.num_rg_points == 0 {
            return Err(CoreError::Config("record capacities must be non-zero".to_owned()));
        }
        Ok(())
    }
}
