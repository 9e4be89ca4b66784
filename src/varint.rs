//! Unsigned base-128 varint encoding.
//!
//! Each octet carries 7 data bits and a continuation bit (MSB). The
//! least significant group is written first; the last octet has
//! continuation = 0. A `u64` therefore takes at most 10 octets.

use crate::bytestream::{ByteReader, ByteWriter};
use crate::{Error, Result};

/// Largest encoded size of a `u64` varint.
pub const MAX_ENCODED_LEN: usize = 10;

/// Encodes a `u64` as a varint.
#[inline]
pub fn encode(writer: &mut ByteWriter<'_>, value: u64) -> Result<()> {
    if value < 128 {
        // Fast-Path: Single-Byte (häufigster Fall: kleine Tags, kleine Werte)
        return writer.write_byte(value as u8);
    }
    let mut v = value;
    loop {
        let low7 = (v & 0x7F) as u8;
        v >>= 7;
        if v == 0 {
            return writer.write_byte(low7);
        }
        writer.write_byte(0x80 | low7)?;
    }
}

/// Decodes a varint from the stream.
#[inline]
pub fn decode(reader: &mut ByteReader<'_>) -> Result<u64> {
    let byte = reader.read_byte()?;
    if byte & 0x80 == 0 {
        // Fast-Path: Single-Byte (häufigster Fall: kleine Tags, kleine Werte)
        return Ok(u64::from(byte));
    }
    // Multi-Byte: erstes Oktett bereits gelesen
    let mut result = u64::from(byte & 0x7F);
    let mut shift: u32 = 7;
    loop {
        let byte = reader.read_byte()?;
        let data = u64::from(byte & 0x7F);
        // Beim 10. Oktett (shift 63) ist nur Daten-Bit 0 gültig (u64 hat
        // 64 Bits), und kein Continuation-Bit mehr erlaubt.
        if shift == 63 && (data > 1 || byte & 0x80 != 0) {
            return Err(Error::VarintOverflow);
        }
        result |= data << shift;
        if byte & 0x80 == 0 {
            return Ok(result);
        }
        shift += 7;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(value: u64) -> Vec<u8> {
        let mut buf = [0u8; MAX_ENCODED_LEN];
        let mut w = ByteWriter::new(&mut buf);
        encode(&mut w, value).unwrap();
        let n = w.bytes_written();
        buf[..n].to_vec()
    }

    fn round_trip(value: u64) -> u64 {
        let data = encoded(value);
        let mut r = ByteReader::new(&data);
        let result = decode(&mut r).unwrap();
        assert_eq!(r.remaining(), 0, "trailing bytes after {value}");
        result
    }

    #[test]
    fn encode_decode_0() {
        assert_eq!(round_trip(0), 0);
        assert_eq!(encoded(0), vec![0x00]);
    }

    #[test]
    fn encode_decode_1() {
        assert_eq!(round_trip(1), 1);
    }

    // Max single-byte value (7 data bits)
    #[test]
    fn encode_decode_127() {
        assert_eq!(round_trip(127), 127);
        assert_eq!(encoded(127), vec![0x7F]);
    }

    // Min two-byte value
    #[test]
    fn encode_decode_128() {
        assert_eq!(round_trip(128), 128);
        // low7=0x00 with cont=1, then 0x01 with cont=0
        assert_eq!(encoded(128), vec![0x80, 0x01]);
    }

    // The classic example from the format documentation: 150 → 0x96 0x01
    #[test]
    fn encode_decode_150() {
        assert_eq!(encoded(150), vec![0x96, 0x01]);
        assert_eq!(round_trip(150), 150);
    }

    // Max two-byte value
    #[test]
    fn encode_decode_16383() {
        assert_eq!(round_trip(16383), 16383);
        assert_eq!(encoded(16383), vec![0xFF, 0x7F]);
    }

    #[test]
    fn encode_decode_large_values() {
        assert_eq!(round_trip(u64::MAX / 2), u64::MAX / 2);
        assert_eq!(round_trip(u64::MAX), u64::MAX);
    }

    // u64::MAX needs exactly MAX_ENCODED_LEN octets
    #[test]
    fn u64_max_takes_10_bytes() {
        assert_eq!(encoded(u64::MAX).len(), MAX_ENCODED_LEN);
    }

    #[test]
    fn round_trip_diverse_values() {
        for &val in &[
            0,
            1,
            2,
            63,
            64,
            127,
            128,
            255,
            256,
            16383,
            16384,
            1_000_000,
            u64::MAX,
        ] {
            assert_eq!(round_trip(val), val, "round-trip failed for {val}");
        }
    }

    #[test]
    fn decode_premature_end_of_stream() {
        // Empty stream
        let mut r = ByteReader::new(&[]);
        assert_eq!(decode(&mut r).unwrap_err(), Error::PrematureEndOfStream);

        // Continuation bit set but no more bytes
        let mut r = ByteReader::new(&[0x80]);
        assert_eq!(decode(&mut r).unwrap_err(), Error::PrematureEndOfStream);
    }

    #[test]
    fn decode_overflow_too_many_bytes() {
        // 10 continuation octets (shift reaches 70) then a final octet
        let mut data = vec![0x80; 10];
        data.push(0x01);
        let mut r = ByteReader::new(&data);
        assert_eq!(decode(&mut r).unwrap_err(), Error::VarintOverflow);
    }

    // At shift 63 only data 0 or 1 is valid, and no continuation
    #[test]
    fn decode_overflow_shift63_continuation() {
        let mut data = vec![0x80; 9];
        data.push(0x81); // data=1, continuation=1 → overflow
        let mut r = ByteReader::new(&data);
        assert_eq!(decode(&mut r).unwrap_err(), Error::VarintOverflow);
    }

    #[test]
    fn decode_overflow_shift63_data_too_large() {
        let mut data = vec![0x80; 9];
        data.push(0x02); // data=2 at shift=63 → overflow
        let mut r = ByteReader::new(&data);
        assert_eq!(decode(&mut r).unwrap_err(), Error::VarintOverflow);
    }

    #[test]
    fn encode_sink_exhaustion() {
        // 128 needs two octets, the sink has one
        let mut buf = [0u8; 1];
        let mut w = ByteWriter::new(&mut buf);
        let err = encode(&mut w, 128).unwrap_err();
        assert!(matches!(err, Error::SinkExhausted { .. }));
    }

    #[test]
    fn encode_sink_exhaustion_empty_buffer() {
        let mut buf = [0u8; 0];
        let mut w = ByteWriter::new(&mut buf);
        let err = encode(&mut w, 0).unwrap_err();
        assert!(matches!(err, Error::SinkExhausted { .. }));
    }

    #[test]
    fn sequential_varints_in_one_stream() {
        let mut buf = [0u8; 16];
        let mut w = ByteWriter::new(&mut buf);
        encode(&mut w, 1).unwrap();
        encode(&mut w, 300).unwrap();
        encode(&mut w, 0).unwrap();
        let n = w.bytes_written();

        let mut r = ByteReader::new(&buf[..n]);
        assert_eq!(decode(&mut r).unwrap(), 1);
        assert_eq!(decode(&mut r).unwrap(), 300);
        assert_eq!(decode(&mut r).unwrap(), 0);
        assert_eq!(r.remaining(), 0);
    }
}
