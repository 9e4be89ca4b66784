//! Zig-zag signed varint encoding (the `sint32`/`sint64` representation).
//!
//! Signed values are folded onto unsigned ones so that small magnitudes
//! of either sign stay small on the wire: 0 → 0, -1 → 1, 1 → 2, -2 → 3,
//! and so on. The folded value is then written as an ordinary varint.
//! A plain two's-complement varint would cost 10 octets for every
//! negative value; zig-zag keeps -1 at one octet.

use crate::bytestream::{ByteReader, ByteWriter};
use crate::{varint, Result};

/// Maps a signed value to its zig-zag unsigned form.
#[inline]
pub fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag`].
#[inline]
pub fn unzigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Encodes an `i64` as a zig-zag signed varint.
#[inline]
pub fn encode(writer: &mut ByteWriter<'_>, value: i64) -> Result<()> {
    varint::encode(writer, zigzag(value))
}

/// Decodes a zig-zag signed varint from the stream.
#[inline]
pub fn decode(reader: &mut ByteReader<'_>) -> Result<i64> {
    Ok(unzigzag(varint::decode(reader)?))
}
