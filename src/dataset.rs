// SPDX-License-Identifier: MIT
//! Synthetic record dataset
//!
//! Produces the fixed 12-record sample in two sibling projections: a serde
//! struct for the JSON encoder and a prost message for the protobuf encoder.
//! Every value is a closed-form function of the record index.

use serde::{Deserialize, Serialize, Serializer};

/// Number of records generated per run
pub const RECORD_COUNT: usize = 12;

/// Multiplier for the `x`/`y` coordinates
pub const COORD_STEP: f64 = 1.25;

/// Offset of `y` from `x`
pub const Y_OFFSET: f64 = 0.5;

/// Multiplier for `v1`
#[allow(clippy::approx_constant)]
pub const V1_FACTOR: f64 = 3.14159;

/// Multiplier for `v2`
#[allow(clippy::approx_constant)]
pub const V2_FACTOR: f64 = 2.71828;

/// Divisor for `v3`
pub const V3_DIVISOR: f64 = 7.0;

/// Largest magnitude below which every whole `f64` is an exact integer (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single synthetic record (JSON projection)
///
/// Field order and names are the JSON key order and names. Whole-valued
/// floats are written without a fractional part (`5`, not `5.0`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i32,
    #[serde(serialize_with = "serialize_float")]
    pub x: f64,
    #[serde(serialize_with = "serialize_float")]
    pub y: f64,
    #[serde(serialize_with = "serialize_float")]
    pub v1: f64,
    #[serde(serialize_with = "serialize_float")]
    pub v2: f64,
    #[serde(serialize_with = "serialize_float")]
    pub v3: f64,
    pub name: String,
}

/// Shortest float form, dropping `.0` from whole values
fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// A single synthetic record (protobuf projection)
///
/// ```text
/// message Record {
///   int32  id   = 1;
///   double x    = 2;
///   double y    = 3;
///   double v1   = 4;
///   double v2   = 5;
///   double v3   = 6;
///   string name = 7;
/// }
/// ```
#[derive(Clone, PartialEq, prost::Message)]
pub struct RecordMessage {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(double, tag = "2")]
    pub x: f64,
    #[prost(double, tag = "3")]
    pub y: f64,
    #[prost(double, tag = "4")]
    pub v1: f64,
    #[prost(double, tag = "5")]
    pub v2: f64,
    #[prost(double, tag = "6")]
    pub v3: f64,
    #[prost(string, tag = "7")]
    pub name: String,
}

/// Top-level protobuf message: `message Data { repeated Record records = 1; }`
#[derive(Clone, PartialEq, prost::Message)]
pub struct DataMessage {
    #[prost(message, repeated, tag = "1")]
    pub records: Vec<RecordMessage>,
}

impl From<&Record> for RecordMessage {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            x: record.x,
            y: record.y,
            v1: record.v1,
            v2: record.v2,
            v3: record.v3,
            name: record.name.clone(),
        }
    }
}

impl From<RecordMessage> for Record {
    fn from(message: RecordMessage) -> Self {
        Self {
            id: message.id,
            x: message.x,
            y: message.y,
            v1: message.v1,
            v2: message.v2,
            v3: message.v3,
            name: message.name,
        }
    }
}

/// Build the record at `index` (0-based)
///
/// Pure function of the index: no hidden state, no randomness.
pub fn record_at(index: usize) -> Record {
    let i = index as f64;
    let n = index + 1;

    Record {
        id: n as i32,
        x: i * COORD_STEP,
        y: i * COORD_STEP + Y_OFFSET,
        v1: V1_FACTOR * n as f64,
        v2: V2_FACTOR * (RECORD_COUNT as f64 - i),
        v3: (n * (n + 1)) as f64 / V3_DIVISOR,
        name: format!("item-{:02}", n),
    }
}

/// The dataset in both projections
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Records for the JSON encoder
    pub records: Vec<Record>,

    /// The same records for the protobuf encoder
    pub message: DataMessage,
}

impl Dataset {
    /// Generate the fixed dataset
    pub fn generate() -> Self {
        let records: Vec<Record> = (0..RECORD_COUNT).map(record_at).collect();
        let message = DataMessage {
            records: records.iter().map(RecordMessage::from).collect(),
        };

        tracing::debug!(records = records.len(), "Generated dataset");

        Self { records, message }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
