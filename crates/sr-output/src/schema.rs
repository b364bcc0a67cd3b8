//! The fixed output schema and its validator.
//!
//! | field                               | shape | dtype  | sentinel |
//! |-------------------------------------|-------|--------|----------|
//! | `scenario/id`                       | (1,)  | string | —        |
//! | `state/id`, `state/type`            | (A,)  | float  | -1       |
//! | `state/{x,y,bbox_yaw,length,width}` | (A,S) | float  | -1       |
//! | `state/valid`                       | (A,S) | float  | 0        |
//! | `roadgraph_samples/{xyz,dir}`       | (R,3) | float  | -1       |
//! | `roadgraph_samples/{type,id}`       | (R,1) | int    | -1       |
//! | `roadgraph_samples/valid`           | (R,1) | int    | 0        |
//!
//! `A` = agent capacity, `S` = steps actually run, `R` = road-graph capacity.

use crate::{DType, MotionRecord, OutputError, OutputResult};

/// One axis of a field's shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dim {
    Agents,
    Steps,
    Points,
    Fixed(usize),
}

/// Expected dtype and shape of one field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub name:     &'static str,
    pub dtype:    DType,
    pub dims:     &'static [Dim],
    /// Fill value of unused entries; `None` for string fields.
    pub sentinel: Option<f64>,
}

const fn float(name: &'static str, dims: &'static [Dim], sentinel: f64) -> FieldSpec {
    FieldSpec { name, dtype: DType::Float, dims, sentinel: Some(sentinel) }
}

const fn int(name: &'static str, dims: &'static [Dim], sentinel: f64) -> FieldSpec {
    FieldSpec { name, dtype: DType::Int, dims, sentinel: Some(sentinel) }
}

const AGENTS:      &[Dim] = &[Dim::Agents];
const AGENT_STEPS: &[Dim] = &[Dim::Agents, Dim::Steps];
const POINTS_3:    &[Dim] = &[Dim::Points, Dim::Fixed(3)];
const POINTS_1:    &[Dim] = &[Dim::Points, Dim::Fixed(1)];

/// Every field of a motion record.
pub const SCHEMA: &[FieldSpec] = &[
    FieldSpec { name: "scenario/id", dtype: DType::String, dims: &[Dim::Fixed(1)], sentinel: None },
    float("state/id",                AGENTS,      -1.0),
    float("state/type",              AGENTS,      -1.0),
    float("state/x",                 AGENT_STEPS, -1.0),
    float("state/y",                 AGENT_STEPS, -1.0),
    float("state/bbox_yaw",          AGENT_STEPS, -1.0),
    float("state/length",            AGENT_STEPS, -1.0),
    float("state/width",             AGENT_STEPS, -1.0),
    float("state/valid",             AGENT_STEPS,  0.0),
    float("roadgraph_samples/xyz",   POINTS_3,    -1.0),
    float("roadgraph_samples/dir",   POINTS_3,    -1.0),
    int("roadgraph_samples/type",    POINTS_1,    -1.0),
    int("roadgraph_samples/id",      POINTS_1,    -1.0),
    int("roadgraph_samples/valid",   POINTS_1,     0.0),
];

/// The three variable extents of a record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Capacities {
    pub num_agents: usize,
    pub num_steps:  usize,
    pub num_points: usize,
}

impl Capacities {
    pub fn resolve(&self, dims: &[Dim]) -> Vec<usize> {
        dims.iter()
            .map(|d| match *d {
                Dim::Agents   => self.num_agents,
                Dim::Steps    => self.num_steps,
                Dim::Points   => self.num_points,
                Dim::Fixed(n) => n,
            })
            .collect()
    }
}

pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    SCHEMA.iter().find(|f| f.name == name)
}

/// Check that `record` holds exactly the schema's fields with the right
/// dtypes and shapes.
pub fn validate(record: &MotionRecord, caps: &Capacities) -> OutputResult<()> {
    for spec in SCHEMA {
        let data = record
            .get(spec.name)
            .ok_or_else(|| OutputError::MissingField(spec.name.to_owned()))?;
        if data.dtype() != spec.dtype {
            return Err(OutputError::DType {
                field:    spec.name.to_owned(),
                expected: spec.dtype.as_str(),
                got:      data.dtype().as_str(),
            });
        }
        let expected = caps.resolve(spec.dims);
        if data.shape() != expected.as_slice() {
            return Err(OutputError::Shape {
                field: spec.name.to_owned(),
                expected,
                got: data.shape().to_vec(),
            });
        }
    }
    if let Some((name, _)) = record.fields().find(|(name, _)| field_spec(name).is_none()) {
        return Err(OutputError::UnexpectedField(name.to_owned()));
    }
    Ok(())
}
