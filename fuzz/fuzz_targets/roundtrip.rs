#![no_main]
use libfuzzer_sys::fuzz_target;
use picopb::list::BoundedList;
use picopb::message::{self, DecodeField, EncodeField};
use picopb::repeated::{RepeatedSvarintDecoder, RepeatedSvarintEncoder};
use picopb::tag::{FieldTag, WireType};
use picopb::{ByteReader, ByteWriter};

fuzz_target!(|data: &[u8]| {
    let mut source: BoundedList<i32, 64> = BoundedList::new();
    for chunk in data.chunks_exact(4) {
        source.push(i32::from_le_bytes(chunk.try_into().unwrap()));
    }

    let numbers = FieldTag::new(1, WireType::Varint);

    // 64 values * (1 tag octet + at most 5 value octets) always fits
    let mut buffer = [0u8; 1024];
    let mut writer = ByteWriter::new(&mut buffer);
    let producer = RepeatedSvarintEncoder::new(&source);
    let fields: [(FieldTag, &dyn EncodeField); 1] = [(numbers, &producer)];
    message::encode(&mut writer, &fields).unwrap();
    let encoded = writer.bytes_written();

    let mut dest: BoundedList<i32, 64> = BoundedList::new();
    let mut reader = ByteReader::new(&buffer[..encoded]);
    let mut consumer = RepeatedSvarintDecoder::new(&mut dest);
    let mut fields: [(FieldTag, &mut dyn DecodeField); 1] = [(numbers, &mut consumer)];
    message::decode(&mut reader, &mut fields).unwrap();

    assert_eq!(source.as_slice(), dest.as_slice());
    assert_eq!(reader.bytes_read(), encoded);
});
