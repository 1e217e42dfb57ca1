use bincode::Options;

use crate::record::StudentRecord;
use crate::result::RecordResult;

/// Encode a record into its binary form.
///
/// The byte layout is big-endian with fixed-width integers, so it stays
/// stable across the platforms an embedding system may move records between.
pub fn encode(record: &StudentRecord) -> RecordResult<Vec<u8>> {
    Ok(bincode::DefaultOptions::new()
        .with_big_endian()
        .with_fixint_encoding()
        .serialize(record)?)
}

/// Decode a record from bytes produced by [`encode`].
///
/// # Errors
///
/// Returns [`RecordError::Serializer`](crate::result::RecordError) when the
/// bytes do not describe a record.
pub fn decode(bytes: &[u8]) -> RecordResult<StudentRecord> {
    Ok(bincode::DefaultOptions::new()
        .with_big_endian()
        .with_fixint_encoding()
        .deserialize(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::RecordError;

    #[test]
    fn record_survives_the_codec() {
        let student = StudentRecord {
            id: -5,
            name: "X".to_string(),
        };

        let bytes = encode(&student).expect("Encode failed");
        let decoded = decode(&bytes).expect("Decode failed");

        assert_eq!(decoded, student);
        assert_eq!(decoded.display(), "-5 X");
    }

    #[test]
    fn truncated_bytes_are_a_typed_error() {
        let student = StudentRecord {
            id: 1,
            name: "John".to_string(),
        };

        let bytes = encode(&student).expect("Encode failed");

        assert!(matches!(
            decode(&bytes[..2]),
            Err(RecordError::Serializer(_))
        ));
    }
}
