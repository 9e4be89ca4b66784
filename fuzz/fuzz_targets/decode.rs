#![no_main]
use libfuzzer_sys::fuzz_target;
use picopb::list::BoundedList;
use picopb::message::{self, DecodeField};
use picopb::repeated::RepeatedSvarintDecoder;
use picopb::tag::{FieldTag, WireType};
use picopb::ByteReader;

fuzz_target!(|data: &[u8]| {
    let mut dest: BoundedList<i32, 32> = BoundedList::new();
    let mut reader = ByteReader::new(data);
    let mut consumer = RepeatedSvarintDecoder::new(&mut dest);
    let mut fields: [(FieldTag, &mut dyn DecodeField); 1] =
        [(FieldTag::new(1, WireType::Varint), &mut consumer)];
    let _ = message::decode(&mut reader, &mut fields);
});
