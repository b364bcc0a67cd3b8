//! One-call export of a finished run.

use std::path::PathBuf;

use sr_core::RunConfig;
use sr_history::ActorHistory;
use sr_roadgraph::{MapSource, RoadGraphSampler};

use crate::writer::RecordWriter;
use crate::{ExportConfig, Exporter, MotionRecord, OutputResult};

/// Finalise `history` over the steps it actually recorded, sample `map`,
/// assemble the record, and write it under `config.output_dir()`.
///
/// Capacity overflow in either the history or the road graph is returned as
/// an error; nothing is written in that case.
pub fn export_run<M, R>(
    config:        &RunConfig,
    scenario_name: &str,
    history:       &ActorHistory,
    map:           &M,
    writer:        &mut R,
) -> OutputResult<(MotionRecord, PathBuf)>
where
    M: MapSource + ?Sized,
    R: RecordWriter + ?Sized,
{
    let states    = history.finalize(config.num_agents, history.steps())?;
    let roadgraph = RoadGraphSampler::from_config(config)?.sample(map)?;

    let exporter = Exporter::new(ExportConfig::from_run_config(config));
    let record   = exporter.export(scenario_name, states, roadgraph)?;
    let path     = exporter.write(&record, writer, scenario_name, &config.shard_id)?;
    Ok((record, path))
}
