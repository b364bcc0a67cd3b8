//! Merge finalised arrays into a [`MotionRecord`] and write it out.

use std::fs;
use std::path::{Path, PathBuf};

use sr_core::{FixedArray, RunConfig};
use sr_history::ActorStates;
use sr_roadgraph::RoadGraph;

use crate::naming::record_file_stem;
use crate::plot::write_plot;
use crate::schema::{Capacities, validate};
use crate::writer::RecordWriter;
use crate::{FieldData, MotionRecord, OutputResult};

/// Where and how records are written.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportConfig {
    /// Directory receiving records and plots; created on first write.
    pub output_dir: PathBuf,
    /// Also write the SVG trace plot next to each record.
    pub plot:       bool,
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), plot: true }
    }

    /// `{output_root}/{record_dir}` of `config`.
    pub fn from_run_config(config: &RunConfig) -> Self {
        Self::new(config.output_dir())
    }
}

/// Builds and writes motion records.
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Assemble a record from already-finalised arrays and check it against
    /// the schema.  Values are moved in unchanged.
    pub fn export(&self, scenario_id: &str, states: ActorStates, roadgraph: RoadGraph) -> OutputResult<MotionRecord> {
        let caps = Capacities {
            num_agents: states.num_agents(),
            num_steps:  states.num_steps(),
            num_points: roadgraph.capacity(),
        };

        let mut record = MotionRecord::new();
        record.insert("scenario/id", FieldData::Text(FixedArray::from_vec(&[1], vec![scenario_id.to_owned()])?));

        record.insert("state/id",       FieldData::Float(states.id));
        record.insert("state/type",     FieldData::Float(states.actor_type));
        record.insert("state/x",        FieldData::Float(states.x));
        record.insert("state/y",        FieldData::Float(states.y));
        record.insert("state/bbox_yaw", FieldData::Float(states.bbox_yaw));
        record.insert("state/length",   FieldData::Float(states.length));
        record.insert("state/width",    FieldData::Float(states.width));
        record.insert("state/valid",    FieldData::Float(states.valid));

        record.insert("roadgraph_samples/xyz",   FieldData::Float(roadgraph.xyz));
        record.insert("roadgraph_samples/dir",   FieldData::Float(roadgraph.dir));
        record.insert("roadgraph_samples/type",  FieldData::Int(roadgraph.rg_type));
        record.insert("roadgraph_samples/id",    FieldData::Int(roadgraph.id));
        record.insert("roadgraph_samples/valid", FieldData::Int(roadgraph.valid));

        validate(&record, &caps)?;
        Ok(record)
    }

    /// Write `record` as `{family}-{shard}-of-00010.{ext}` in the output
    /// directory, then the trace plot as a same-named `.svg`.
    ///
    /// Returns the record path.  A plot failure is logged and swallowed.
    pub fn write<R: RecordWriter + ?Sized>(
        &self,
        record:      &MotionRecord,
        writer:      &mut R,
        family_name: &str,
        shard_id:    &str,
    ) -> OutputResult<PathBuf> {
        fs::create_dir_all(&self.config.output_dir)?;
        let stem = record_file_stem(family_name, shard_id);
        let path = self.config.output_dir.join(format!("{stem}.{}", writer.extension()));

        writer.write_record(record, &path)?;
        tracing::info!(path = %path.display(), fields = record.len(), "wrote motion record");

        if self.config.plot {
            let plot_path = path.with_extension("svg");
            self.write_plot_logged(record, &plot_path);
        }
        Ok(path)
    }

    fn write_plot_logged(&self, record: &MotionRecord, path: &Path) {
        match write_plot(record, path) {
            Ok(()) => tracing::debug!(path = %path.display(), "wrote trace plot"),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to write trace plot"),
        }
    }
}
