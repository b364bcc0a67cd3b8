//! `sr-output` — the fixed-schema motion record and its writers.
//!
//! Two backends are provided, the second behind a Cargo feature:
//!
//! | Feature   | Backend | File written                                 |
//! |-----------|---------|----------------------------------------------|
//! | *(none)*  | JSON    | `{family}-{shard}-of-00010.json`             |
//! | `parquet` | Parquet | `{family}-{shard}-of-00010.parquet`          |
//!
//! Both implement [`RecordWriter`].  Every write is followed by a
//! same-named `.svg` trace plot; a plot failure never fails the export.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sr_output::{JsonWriter, export_run};
//!
//! let report = manager.run(&mut world, &mut history, &mut NoopObserver)?;
//! let (_record, path) = export_run(&config, &report.scenario, &history, &map, &mut JsonWriter::new())?;
//! ```

pub mod error;
pub mod exporter;
pub mod json;
pub mod naming;
pub mod pipeline;
pub mod plot;
pub mod record;
pub mod schema;
pub mod writer;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use error::{OutputError, OutputResult};
pub use exporter::{ExportConfig, Exporter};
pub use json::{JsonWriter, read_json_record};
pub use naming::{record_file_stem, scenario_family};
pub use pipeline::export_run;
pub use record::{DType, FieldData, MotionRecord};
pub use schema::{Capacities, Dim, FieldSpec, SCHEMA, validate};
pub use writer::RecordWriter;

#[cfg(feature = "parquet")]
pub use crate::parquet::ParquetWriter;
