//! JSON output backend (default).
//!
//! A record becomes one JSON object keyed by field name:
//!
//! ```json
//! { "state/x": { "dtype": "float", "shape": [128, 91], "data": [ … ] }, … }
//! ```
//!
//! `data` is the row-major flattening of the array.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use sr_core::FixedArray;

use crate::writer::RecordWriter;
use crate::{DType, FieldData, MotionRecord, OutputError, OutputResult};

#[derive(Serialize)]
struct FieldOut<'a, T> {
    dtype: &'static str,
    shape: &'a [usize],
    data:  &'a [T],
}

#[derive(Deserialize)]
struct FieldIn {
    dtype: String,
    shape: Vec<usize>,
    data:  serde_json::Value,
}

struct RecordView<'a>(&'a MotionRecord);

impl Serialize for RecordView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, data) in self.0.fields() {
            let dtype = data.dtype().as_str();
            match data {
                FieldData::Text(a) => {
                    map.serialize_entry(name, &FieldOut { dtype, shape: a.shape(), data: a.as_slice() })?
                }
                FieldData::Float(a) => {
                    map.serialize_entry(name, &FieldOut { dtype, shape: a.shape(), data: a.as_slice() })?
                }
                FieldData::Int(a) => {
                    map.serialize_entry(name, &FieldOut { dtype, shape: a.shape(), data: a.as_slice() })?
                }
            }
        }
        map.end()
    }
}

/// Writes each record as a single JSON document.
#[derive(Clone, Debug, Default)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent the output.  Large records grow considerably.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl RecordWriter for JsonWriter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write_record(&mut self, record: &MotionRecord, path: &Path) -> OutputResult<()> {
        let mut out = BufWriter::new(File::create(path)?);
        if self.pretty {
            serde_json::to_writer_pretty(&mut out, &RecordView(record))?;
        } else {
            serde_json::to_writer(&mut out, &RecordView(record))?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Read a record written by [`JsonWriter`].
pub fn read_json_record(path: &Path) -> OutputResult<MotionRecord> {
    let reader = BufReader::new(File::open(path)?);
    let raw: BTreeMap<String, FieldIn> = serde_json::from_reader(reader)?;

    let mut record = MotionRecord::new();
    for (name, field) in raw {
        let dtype = DType::parse(&field.dtype)
            .ok_or_else(|| OutputError::Malformed(format!("{name}: unknown dtype {}", field.dtype)))?;
        let data = match dtype {
            DType::String => FieldData::Text(FixedArray::from_vec(&field.shape, serde_json::from_value(field.data)?)?),
            DType::Float  => FieldData::Float(FixedArray::from_vec(&field.shape, serde_json::from_value(field.data)?)?),
            DType::Int    => FieldData::Int(FixedArray::from_vec(&field.shape, serde_json::from_value(field.data)?)?),
        };
        record.insert(name, data);
    }
    Ok(record)
}
