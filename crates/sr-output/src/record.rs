//! The in-memory motion record: named fixed-shape arrays.

use std::collections::BTreeMap;
use std::fmt;

use sr_core::FixedArray;

/// Element type of a record field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    String,
    Float,
    Int,
}

impl DType {
    pub fn as_str(self) -> &'static str {
        match self {
            DType::String => "string",
            DType::Float  => "float",
            DType::Int    => "int",
        }
    }

    pub fn parse(s: &str) -> Option<DType> {
        match s {
            "string" => Some(DType::String),
            "float"  => Some(DType::Float),
            "int"    => Some(DType::Int),
            _        => None,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The array behind one record field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldData {
    Text(FixedArray<String>),
    Float(FixedArray<f64>),
    Int(FixedArray<i32>),
}

impl FieldData {
    pub fn dtype(&self) -> DType {
        match self {
            FieldData::Text(_)  => DType::String,
            FieldData::Float(_) => DType::Float,
            FieldData::Int(_)   => DType::Int,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            FieldData::Text(a)  => a.shape(),
            FieldData::Float(a) => a.shape(),
            FieldData::Int(a)   => a.shape(),
        }
    }
}

/// One exported scenario: field name → fixed-shape array.
///
/// Fields iterate in name order, so serialised records are deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionRecord {
    fields: BTreeMap<String, FieldData>,
}

impl MotionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, data: FieldData) {
        self.fields.insert(name.into(), data);
    }

    pub fn get(&self, name: &str) -> Option<&FieldData> {
        self.fields.get(name)
    }

    pub fn float(&self, name: &str) -> Option<&FixedArray<f64>> {
        match self.fields.get(name)? {
            FieldData::Float(a) => Some(a),
            _ => None,
        }
    }

    pub fn int(&self, name: &str) -> Option<&FixedArray<i32>> {
        match self.fields.get(name)? {
            FieldData::Int(a) => Some(a),
            _ => None,
        }
    }

    /// First element of a string field.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name)? {
            FieldData::Text(a) => a.as_slice().first().map(String::as_str),
            _ => None,
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldData)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
