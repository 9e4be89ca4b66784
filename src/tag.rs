//! Wire tags: field number plus wire type, packed into one varint.
//!
//! `tag = (field_number << 3) | wire_type`. Field numbers run from 1 to
//! 2^29 - 1; number 0 is reserved. Wire types 3 and 4 (the deprecated
//! group markers) and the unassigned values 6 and 7 are rejected on
//! decode.

use core::fmt;

use crate::bytestream::{ByteReader, ByteWriter};
use crate::{varint, Error, Result};

/// Largest valid field number (2^29 - 1).
pub const MAX_FIELD_NUMBER: u32 = (1 << 29) - 1;

/// The payload shape following a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WireType {
    /// Base-128 varint payload (int32/int64/sint32/sint64/bool/enum).
    Varint = 0,
    /// 8-octet little-endian payload.
    Fixed64 = 1,
    /// Length-prefixed payload (string/bytes/embedded message).
    LengthDelimited = 2,
    /// 4-octet little-endian payload.
    Fixed32 = 5,
}

impl WireType {
    /// Decodes the low three tag bits.
    pub fn from_bits(bits: u8) -> Result<Self> {
        match bits {
            0 => Ok(Self::Varint),
            1 => Ok(Self::Fixed64),
            2 => Ok(Self::LengthDelimited),
            5 => Ok(Self::Fixed32),
            other => Err(Error::InvalidWireType(other)),
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Varint => "varint",
            Self::Fixed64 => "fixed64",
            Self::LengthDelimited => "length-delimited",
            Self::Fixed32 => "fixed32",
        };
        f.write_str(name)
    }
}

/// A field's wire tag.
///
/// Opaque to the value codecs: a field callback only forwards the tag it
/// was handed to [`encode`], it never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag {
    number: u32,
    wire_type: WireType,
}

impl FieldTag {
    /// Creates a tag for a declared field.
    ///
    /// # Panics
    ///
    /// Panics if `number` is 0 or exceeds [`MAX_FIELD_NUMBER`]. An
    /// invalid field table is a bug, not a stream condition.
    pub fn new(number: u32, wire_type: WireType) -> Self {
        assert!(
            (1..=MAX_FIELD_NUMBER).contains(&number),
            "field number {number} out of range 1..={MAX_FIELD_NUMBER}"
        );
        Self { number, wire_type }
    }

    /// The field number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The wire type of the field's payload.
    pub fn wire_type(&self) -> WireType {
        self.wire_type
    }
}

/// Writes the tag as a single varint.
pub fn encode(writer: &mut ByteWriter<'_>, tag: FieldTag) -> Result<()> {
    varint::encode(
        writer,
        (u64::from(tag.number) << 3) | u64::from(tag.wire_type as u8),
    )
}

/// Reads one tag from the stream, validating field number and wire type.
pub fn decode(reader: &mut ByteReader<'_>) -> Result<FieldTag> {
    let raw = varint::decode(reader)?;
    let number = raw >> 3;
    if number == 0 || number > u64::from(MAX_FIELD_NUMBER) {
        return Err(Error::InvalidFieldNumber(number));
    }
    let wire_type = WireType::from_bits((raw & 0x7) as u8)?;
    Ok(FieldTag { number: number as u32, wire_type })
}
