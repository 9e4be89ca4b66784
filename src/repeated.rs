//! Streaming repeated `sint32` field over a bounded list.
//!
//! The producer walks a borrowed source list and writes one tag +
//! zig-zag varint pair per element, in insertion order; the consumer on
//! the far side rebuilds that order by appending once per occurrence.
//! Neither side materializes the field outside the list, and both
//! borrow it only for the duration of a single pass.

use crate::bytestream::{ByteReader, ByteWriter};
use crate::list::BoundedList;
use crate::message::{DecodeField, EncodeField};
use crate::tag::{self, FieldTag};
use crate::{svarint, Error, Result};

/// Producer for one repeated `sint32` field, bound to its source list
/// for a single encode pass.
pub struct RepeatedSvarintEncoder<'a, const N: usize> {
    source: &'a BoundedList<i32, N>,
}

impl<'a, const N: usize> RepeatedSvarintEncoder<'a, N> {
    pub fn new(source: &'a BoundedList<i32, N>) -> Self {
        Self { source }
    }
}

impl<const N: usize> EncodeField for RepeatedSvarintEncoder<'_, N> {
    /// One tag + value pair per element, in insertion order. The first
    /// failed write aborts the pass; whatever was already written stays
    /// in the sink. The source list is never mutated.
    fn encode(&self, writer: &mut ByteWriter<'_>, field_tag: FieldTag) -> Result<()> {
        for &value in self.source {
            tag::encode(writer, field_tag)?;
            svarint::encode(writer, i64::from(value))?;
        }
        Ok(())
    }
}

/// Consumer for one repeated `sint32` field, accumulating into its
/// destination list across all occurrences of a decode pass.
pub struct RepeatedSvarintDecoder<'a, const N: usize> {
    dest: &'a mut BoundedList<i32, N>,
}

impl<'a, const N: usize> RepeatedSvarintDecoder<'a, N> {
    pub fn new(dest: &'a mut BoundedList<i32, N>) -> Self {
        Self { dest }
    }
}

impl<const N: usize> DecodeField for RepeatedSvarintDecoder<'_, N> {
    /// Decodes exactly one value and appends it. A full list drops the
    /// value without failing the pass; a value outside the `i32` range
    /// is an error.
    fn decode(&mut self, reader: &mut ByteReader<'_>, field_tag: FieldTag) -> Result<()> {
        let raw = svarint::decode(reader)?;
        let value = i32::try_from(raw).map_err(|_| Error::IntegerOverflow)?;
        if !self.dest.push(value) {
            log::debug!(
                "repeated field {}: list full, value {value} dropped",
                field_tag.number()
            );
        }
        Ok(())
    }
}
