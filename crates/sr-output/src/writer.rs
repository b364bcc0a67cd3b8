//! The `RecordWriter` trait implemented by all backend writers.

use std::path::Path;

use crate::{MotionRecord, OutputResult};

/// Trait implemented by the JSON and Parquet writers.
pub trait RecordWriter {
    /// File extension without the dot, e.g. `"json"`.
    fn extension(&self) -> &'static str;

    /// Serialise `record` to `path`, replacing any existing file.
    fn write_record(&mut self, record: &MotionRecord, path: &Path) -> OutputResult<()>;
}
