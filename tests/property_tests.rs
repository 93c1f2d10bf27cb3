// SPDX-License-Identifier: MIT
//! Property-based tests using proptest
//!
//! Codec framing and encoder round-trips over arbitrary inputs.

use std::io::Read;

use proptest::prelude::*;

use encbench::encoding::{decode_json, decode_protobuf, encode_json, encode_protobuf};
use encbench::{
    Codec, CompressionEngine, DataMessage, Record, RecordMessage, GZIP_FRAMING_OVERHEAD,
};

/// Strategy for records with finite floats and short names
fn record_strategy() -> impl Strategy<Value = Record> {
    (
        any::<i32>(),
        -1.0e9..1.0e9f64,
        -1.0e9..1.0e9f64,
        -1.0e9..1.0e9f64,
        -1.0e9..1.0e9f64,
        -1.0e9..1.0e9f64,
        "[a-z0-9-]{0,16}",
    )
        .prop_map(|(id, x, y, v1, v2, v3, name)| Record {
            id,
            x,
            y,
            v1,
            v2,
            v3,
            name,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// gzip is the raw DEFLATE stream plus a fixed header and trailer
    #[test]
    fn gzip_adds_fixed_framing(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let engine = CompressionEngine::default();
        let report = engine.measure(&data).unwrap();

        prop_assert_eq!(report.raw, data.len());
        prop_assert_eq!(report.gzip, report.deflate + GZIP_FRAMING_OVERHEAD);
    }

    /// Raw DEFLATE output inflates back to the input
    #[test]
    fn deflate_is_lossless(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let engine = CompressionEngine::default();
        let compressed = engine.compress(Codec::Deflate, &data).unwrap();

        let mut decoded = Vec::new();
        flate2::read::DeflateDecoder::new(&compressed[..])
            .read_to_end(&mut decoded)
            .unwrap();
        prop_assert_eq!(decoded, data);
    }

    /// Brotli output is a complete stream that decodes back to the input
    #[test]
    fn brotli_is_finalized(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let engine = CompressionEngine::default();
        let compressed = engine.compress(Codec::Brotli, &data).unwrap();
        prop_assert!(!compressed.is_empty());

        let mut decoded = Vec::new();
        brotli::Decompressor::new(&compressed[..], 4096)
            .read_to_end(&mut decoded)
            .unwrap();
        prop_assert_eq!(decoded, data);
    }

    /// JSON and protobuf carry identical field values
    #[test]
    fn encodings_round_trip(records in prop::collection::vec(record_strategy(), 0..16)) {
        let message = DataMessage {
            records: records.iter().map(RecordMessage::from).collect(),
        };

        let from_json = decode_json(&encode_json(&records).unwrap()).unwrap();
        let from_protobuf: Vec<Record> = decode_protobuf(&encode_protobuf(&message).unwrap())
            .unwrap()
            .records
            .into_iter()
            .map(Record::from)
            .collect();

        prop_assert_eq!(&from_json, &records);
        prop_assert_eq!(&from_protobuf, &records);
    }

    /// Compression is a pure function of its input
    #[test]
    fn compression_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let engine = CompressionEngine::default();
        prop_assert_eq!(engine.measure(&data).unwrap(), engine.measure(&data).unwrap());
    }
}
