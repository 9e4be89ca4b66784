//! Central error types for the wire codec.
//!
//! Encode-side failures are always capacity failures (the sink is a
//! fixed, pre-allocated buffer). Decode-side failures are truncation or
//! malformed input. Both propagate synchronously as `Err` through the
//! field callbacks and the message driver to the caller; there is no
//! retry or resync anywhere in the codec.

use core::fmt;

use crate::tag::WireType;

/// All failure conditions of the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The fixed-capacity output buffer cannot take the next write.
    /// Fatal to the encode pass; whatever was written before stays in
    /// the sink (no rollback).
    SinkExhausted {
        /// Bytes the failed write needed.
        needed: usize,
        /// Bytes the sink had left.
        remaining: usize,
    },
    /// The input ended before a complete value was decoded.
    PrematureEndOfStream,
    /// A varint does not fit into 64 bits: more than 10 octets, or a
    /// tenth octet with excess data bits or a continuation bit.
    VarintOverflow,
    /// A decoded value exceeds the range of the field's integer type.
    IntegerOverflow,
    /// Wire type bits are reserved (6, 7) or a long-deprecated group
    /// marker (3, 4).
    InvalidWireType(u8),
    /// Field number outside the valid range; 0 is reserved and never
    /// appears on the wire.
    InvalidFieldNumber(u64),
    /// A declared field arrived with a different wire type than the
    /// field table declares for it.
    WireTypeMismatch {
        field: u32,
        expected: WireType,
        found: WireType,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SinkExhausted { needed, remaining } => write!(
                f,
                "output buffer exhausted: {needed} byte(s) needed, {remaining} remaining"
            ),
            Self::PrematureEndOfStream => write!(f, "premature end of stream"),
            Self::VarintOverflow => write!(f, "varint exceeds 64 bits (at most 10 octets)"),
            Self::IntegerOverflow => write!(f, "decoded value out of range for the field type"),
            Self::InvalidWireType(bits) => write!(f, "invalid wire type {bits}"),
            Self::InvalidFieldNumber(number) => write!(
                f,
                "invalid field number {number} (valid range 1..={})",
                crate::tag::MAX_FIELD_NUMBER
            ),
            Self::WireTypeMismatch { field, expected, found } => write!(
                f,
                "field {field}: expected wire type {expected}, found {found}"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A convenience `Result` type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Every variant must produce a Display string that names the
    /// condition and carries its context values.

    #[test]
    fn sink_exhausted_display() {
        let e = Error::SinkExhausted { needed: 3, remaining: 1 };
        let msg = e.to_string();
        assert!(msg.contains("exhausted"), "{msg}");
        assert!(msg.contains('3'), "{msg}");
        assert!(msg.contains('1'), "{msg}");
    }

    #[test]
    fn premature_end_of_stream_display() {
        let msg = Error::PrematureEndOfStream.to_string();
        assert!(msg.contains("premature"), "{msg}");
    }

    #[test]
    fn varint_overflow_display() {
        let msg = Error::VarintOverflow.to_string();
        assert!(msg.contains("varint"), "{msg}");
        assert!(msg.contains("10"), "{msg}");
    }

    #[test]
    fn integer_overflow_display() {
        let msg = Error::IntegerOverflow.to_string();
        assert!(msg.contains("out of range"), "{msg}");
    }

    #[test]
    fn invalid_wire_type_display() {
        let msg = Error::InvalidWireType(7).to_string();
        assert!(msg.contains("wire type"), "{msg}");
        assert!(msg.contains('7'), "{msg}");
    }

    #[test]
    fn invalid_field_number_display() {
        let msg = Error::InvalidFieldNumber(0).to_string();
        assert!(msg.contains("field number 0"), "{msg}");
        assert!(msg.contains("536870911"), "{msg}");
    }

    #[test]
    fn wire_type_mismatch_display() {
        let e = Error::WireTypeMismatch {
            field: 1,
            expected: WireType::Varint,
            found: WireType::Fixed32,
        };
        let msg = e.to_string();
        assert!(msg.contains("field 1"), "{msg}");
        assert!(msg.contains("varint"), "{msg}");
        assert!(msg.contains("fixed32"), "{msg}");
    }

    #[test]
    fn error_implements_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(Error::PrematureEndOfStream);
        assert!(!e.to_string().is_empty());
    }

    #[test]
    fn error_is_clone_and_eq() {
        let e1 = Error::VarintOverflow;
        let e2 = e1.clone();
        assert_eq!(e1, e2);
    }

    #[test]
    fn result_type_alias_works() {
        let ok: Result<u32> = Ok(42);
        assert_eq!(ok.unwrap(), 42);

        let err: Result<u32> = Err(Error::PrematureEndOfStream);
        assert!(err.is_err());
    }
}
