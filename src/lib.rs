//! picopb – bounded-memory Protocol Buffers wire codec.
//!
//! Repeated scalar fields are streamed element-by-element through
//! producer/consumer callbacks bound to a fixed-capacity list. All
//! buffers are caller-provided and never grow: running out of sink
//! space fails the encode pass, and a full destination list silently
//! drops further values instead of allocating.
//!
//! # Beispiel
//!
//! ```
//! use picopb::list::BoundedList;
//! use picopb::message::{self, DecodeField, EncodeField};
//! use picopb::repeated::{RepeatedSvarintDecoder, RepeatedSvarintEncoder};
//! use picopb::tag::{FieldTag, WireType};
//! use picopb::{ByteReader, ByteWriter};
//!
//! let numbers = FieldTag::new(1, WireType::Varint);
//!
//! // Encode
//! let mut source: BoundedList<i32, 32> = BoundedList::new();
//! for value in [123, 456, 789] {
//!     source.push(value);
//! }
//! let mut buffer = [0u8; 128];
//! let mut writer = ByteWriter::new(&mut buffer);
//! let producer = RepeatedSvarintEncoder::new(&source);
//! let fields: [(FieldTag, &dyn EncodeField); 1] = [(numbers, &producer)];
//! message::encode(&mut writer, &fields).unwrap();
//! let encoded = writer.bytes_written();
//!
//! // Decode
//! let mut dest: BoundedList<i32, 32> = BoundedList::new();
//! let mut reader = ByteReader::new(&buffer[..encoded]);
//! let mut consumer = RepeatedSvarintDecoder::new(&mut dest);
//! let mut fields: [(FieldTag, &mut dyn DecodeField); 1] = [(numbers, &mut consumer)];
//! message::decode(&mut reader, &mut fields).unwrap();
//!
//! assert_eq!(dest.as_slice(), &[123, 456, 789]);
//! ```

pub mod bytestream;
pub mod error;
pub mod list;
pub mod message;
pub mod repeated;
pub mod svarint;
pub mod tag;
pub mod varint;

pub use error::{Error, Result};

// Public API: streams
pub use bytestream::{ByteReader, ByteWriter};

// Public API: field tags
pub use tag::{FieldTag, WireType, MAX_FIELD_NUMBER};

// Public API: bounded storage
pub use list::BoundedList;

// Public API: driver callbacks
pub use message::{DecodeField, EncodeField};

// Public API: repeated-field codecs
pub use repeated::{RepeatedSvarintDecoder, RepeatedSvarintEncoder};
