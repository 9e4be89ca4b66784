//! Generic field-table message driver.
//!
//! The driver owns the callback protocol of the format: `encode` invokes
//! every declared field's producer exactly once, in table order, and the
//! producer streams all of its occurrences itself. `decode` reads tag
//! after tag and hands each occurrence to the consumer declared for that
//! field number, so a consumer runs once per occurrence and accumulates
//! across invocations. Occurrences of undeclared fields are skipped by
//! wire type, as the format requires.
//!
//! State is threaded through the table entries: a callback borrows its
//! accumulator for the duration of the pass, nothing is global.

use crate::bytestream::{ByteReader, ByteWriter};
use crate::tag::{self, FieldTag, WireType};
use crate::{varint, Error, Result};

/// Producer side of a field: streams the field's occurrences into the
/// sink. Invoked exactly once per encode pass; the tag is forwarded
/// verbatim, never interpreted.
pub trait EncodeField {
    fn encode(&self, writer: &mut ByteWriter<'_>, tag: FieldTag) -> Result<()>;
}

/// Consumer side of a field: decodes exactly one occurrence, with the
/// cursor positioned at the start of the value.
pub trait DecodeField {
    fn decode(&mut self, reader: &mut ByteReader<'_>, tag: FieldTag) -> Result<()>;
}

impl<F> EncodeField for F
where
    F: Fn(&mut ByteWriter<'_>, FieldTag) -> Result<()>,
{
    fn encode(&self, writer: &mut ByteWriter<'_>, tag: FieldTag) -> Result<()> {
        self(writer, tag)
    }
}

impl<F> DecodeField for F
where
    F: FnMut(&mut ByteReader<'_>, FieldTag) -> Result<()>,
{
    fn decode(&mut self, reader: &mut ByteReader<'_>, tag: FieldTag) -> Result<()> {
        self(reader, tag)
    }
}

/// Encodes a message: one producer call per table entry, in table order.
///
/// The first failure aborts the pass; partial output stays in the sink.
pub fn encode(writer: &mut ByteWriter<'_>, fields: &[(FieldTag, &dyn EncodeField)]) -> Result<()> {
    for (tag, field) in fields {
        field.encode(writer, *tag)?;
    }
    Ok(())
}

/// Decodes a message: dispatches every occurrence to its declared
/// consumer until the source is exhausted.
///
/// A declared field number arriving with a different wire type than the
/// table declares is an error. Undeclared field numbers are skipped.
/// The first failure aborts the pass; there is no resync.
pub fn decode(
    reader: &mut ByteReader<'_>,
    fields: &mut [(FieldTag, &mut dyn DecodeField)],
) -> Result<()> {
    while reader.remaining() > 0 {
        let tag = tag::decode(reader)?;
        match fields
            .iter_mut()
            .find(|(declared, _)| declared.number() == tag.number())
        {
            Some((declared, field)) => {
                if declared.wire_type() != tag.wire_type() {
                    return Err(Error::WireTypeMismatch {
                        field: tag.number(),
                        expected: declared.wire_type(),
                        found: tag.wire_type(),
                    });
                }
                field.decode(reader, tag)?;
            }
            None => skip_value(reader, tag)?,
        }
    }
    Ok(())
}

/// Skips one value of an undeclared field.
fn skip_value(reader: &mut ByteReader<'_>, tag: FieldTag) -> Result<()> {
    log::debug!("skipping undeclared field {} ({})", tag.number(), tag.wire_type());
    match tag.wire_type() {
        WireType::Varint => {
            varint::decode(reader)?;
        }
        WireType::Fixed64 => reader.skip(8)?,
        WireType::LengthDelimited => {
            let len = varint::decode(reader)?;
            let len = usize::try_from(len).map_err(|_| Error::PrematureEndOfStream)?;
            reader.skip(len)?;
        }
        WireType::Fixed32 => reader.skip(4)?,
    }
    Ok(())
}
