// SPDX-License-Identifier: MIT
//! Textual (JSON) and schema-based binary (protobuf) encoders
//!
//! Both encoders are thin wrappers over `serde_json` and `prost`. Decoders
//! are provided so the two encodings can be checked against each other.

use crate::dataset::{DataMessage, Dataset, Record};
use prost::Message;

/// Errors that can occur during encoding or decoding
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Protobuf encode error: {0}")]
    ProtobufEncode(#[from] prost::EncodeError),

    #[error("Protobuf decode error: {0}")]
    ProtobufDecode(#[from] prost::DecodeError),
}

/// Serialization format under comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Protobuf,
}

impl Format {
    /// Report label for this format
    pub fn label(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Protobuf => "protobuf",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Encode the dataset in one format
pub fn encode(format: Format, dataset: &Dataset) -> Result<Vec<u8>, EncodeError> {
    match format {
        Format::Json => encode_json(&dataset.records),
        Format::Protobuf => encode_protobuf(&dataset.message),
    }
}

/// Encode records as indented JSON (two-space indent)
pub fn encode_json(records: &[Record]) -> Result<Vec<u8>, EncodeError> {
    let bytes = serde_json::to_vec_pretty(records)?;
    tracing::debug!(bytes = bytes.len(), "Encoded JSON");
    Ok(bytes)
}

/// Decode an indented or compact JSON record array
pub fn decode_json(bytes: &[u8]) -> Result<Vec<Record>, EncodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encode the dataset message using protobuf wire rules
pub fn encode_protobuf(message: &DataMessage) -> Result<Vec<u8>, EncodeError> {
    // Exact capacity: encode never has to grow the buffer
    let mut bytes = Vec::with_capacity(message.encoded_len());
    message.encode(&mut bytes)?;
    tracing::debug!(bytes = bytes.len(), "Encoded protobuf");
    Ok(bytes)
}

/// Decode a protobuf-encoded dataset message
pub fn decode_protobuf(bytes: &[u8]) -> Result<DataMessage, EncodeError> {
    Ok(DataMessage::decode(bytes)?)
}
