//! Parquet output backend (feature `parquet`).
//!
//! A record is written as a single-row file.  Each field is one
//! `FixedSizeList` column holding the row-major flattening of its array; the
//! column's `shape` metadata entry carries the dimensions (`"128,91"`).

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, FixedSizeListArray, Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::RecordWriter;
use crate::{FieldData, MotionRecord, OutputError, OutputResult};

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

fn shape_metadata(shape: &[usize]) -> HashMap<String, String> {
    let dims: Vec<String> = shape.iter().map(ToString::to_string).collect();
    HashMap::from([("shape".to_owned(), dims.join(","))])
}

/// Wrap `values` as a one-row `FixedSizeList` column.
fn list_column(name: &str, values: ArrayRef, shape: &[usize]) -> OutputResult<(Field, ArrayRef)> {
    let size = i32::try_from(values.len())
        .map_err(|_| OutputError::Malformed(format!("{name}: {} elements overflow a list column", values.len())))?;
    let item = Arc::new(Field::new("item", values.data_type().clone(), false));
    let list = FixedSizeListArray::try_new(Arc::clone(&item), size, values, None)?;
    let field = Field::new(name, DataType::FixedSizeList(item, size), false)
        .with_metadata(shape_metadata(shape));
    Ok((field, Arc::new(list)))
}

/// Writes each record as a single-row Parquet file.
#[derive(Clone, Debug, Default)]
pub struct ParquetWriter;

impl ParquetWriter {
    pub fn new() -> Self {
        Self
    }
}

impl RecordWriter for ParquetWriter {
    fn extension(&self) -> &'static str {
        "parquet"
    }

    fn write_record(&mut self, record: &MotionRecord, path: &Path) -> OutputResult<()> {
        let mut fields  = Vec::with_capacity(record.len());
        let mut columns = Vec::with_capacity(record.len());

        for (name, data) in record.fields() {
            let values: ArrayRef = match data {
                FieldData::Text(a)  => Arc::new(StringArray::from(a.as_slice().to_vec())),
                FieldData::Float(a) => Arc::new(Float64Array::from(a.as_slice().to_vec())),
                FieldData::Int(a)   => Arc::new(Int32Array::from(a.as_slice().to_vec())),
            };
            let (field, column) = list_column(name, values, data.shape())?;
            fields.push(field);
            columns.push(column);
        }

        let schema = Arc::new(Schema::new(fields));
        let batch = RecordBatch::try_new(Arc::clone(&schema), columns)?;

        let file = File::create(path)?;
        let mut writer = ArrowWriter::try_new(file, schema, Some(snappy_props()))?;
        writer.write(&batch)?;
        writer.close()?;
        Ok(())
    }
}
