//! Run observer trait for progress reporting.

use sr_behavior::Status;
use sr_core::Timestamp;

use crate::RunReport;

/// Callbacks invoked by [`ScenarioManager::run`][crate::ScenarioManager::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl ScenarioObserver for Progress {
///     fn on_tick(&mut self, ts: &Timestamp, status: Status) {
///         if ts.frame % 20 == 0 {
///             println!("{ts}: {status}");
///         }
///     }
/// }
/// ```
pub trait ScenarioObserver {
    /// Called once before the first poll.
    fn on_run_start(&mut self, _scenario: &str) {}

    /// Called after every processed tick with the tree's status.
    fn on_tick(&mut self, _timestamp: &Timestamp, _status: Status) {}

    /// Called once after the loop ends.
    fn on_run_end(&mut self, _report: &RunReport) {}
}

/// A [`ScenarioObserver`] that does nothing.
pub struct NoopObserver;

impl ScenarioObserver for NoopObserver {}
