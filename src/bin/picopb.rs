//! picopb CLI: encode/decode debug tool for the wire format.
//!
//! Works over a single repeated `sint32` field (number 1), the way a
//! radio-telemetry payload carries its sample list: `encode` prints the
//! hex wire image of the given values, `decode` prints the values of a
//! hex wire image, one per line.

use std::process;

use clap::{Parser, Subcommand};
use picopb::list::BoundedList;
use picopb::message::{self, DecodeField, EncodeField};
use picopb::repeated::{RepeatedSvarintDecoder, RepeatedSvarintEncoder};
use picopb::tag::{FieldTag, WireType};
use picopb::{ByteReader, ByteWriter};

/// Field number of the repeated value field.
const VALUES_FIELD: u32 = 1;
/// Fixed wire buffer per pass.
const BUFFER_SIZE: usize = 8192;
/// Fixed value capacity per pass.
const MAX_VALUES: usize = 1024;

#[derive(Parser)]
#[command(name = "picopb", about = "Encode/decode a repeated sint32 field")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode values to a hex wire image
    Encode {
        /// Values to encode, in order
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
    },
    /// Decode a hex wire image to values
    Decode {
        /// Wire image as hex, e.g. 08f60108900708aa0c
        hex: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Encode { values } => encode(&values),
        Command::Decode { hex } => decode(&hex),
    };
    if let Err(e) = result {
        eprintln!("Fehler: {e}");
        process::exit(1);
    }
}

fn values_field() -> FieldTag {
    FieldTag::new(VALUES_FIELD, WireType::Varint)
}

fn encode(values: &[i32]) -> Result<(), String> {
    let mut source: BoundedList<i32, MAX_VALUES> = BoundedList::new();
    for &value in values {
        if !source.push(value) {
            return Err(format!("zu viele Werte (maximal {MAX_VALUES})"));
        }
    }

    let mut buffer = [0u8; BUFFER_SIZE];
    let mut writer = ByteWriter::new(&mut buffer);
    let producer = RepeatedSvarintEncoder::new(&source);
    let fields: [(FieldTag, &dyn EncodeField); 1] = [(values_field(), &producer)];
    message::encode(&mut writer, &fields).map_err(|e| e.to_string())?;

    println!("{}", to_hex(writer.written()));
    Ok(())
}

fn decode(hex: &str) -> Result<(), String> {
    let data = from_hex(hex)?;
    let mut dest: BoundedList<i32, MAX_VALUES> = BoundedList::new();
    let mut reader = ByteReader::new(&data);
    {
        let mut consumer = RepeatedSvarintDecoder::new(&mut dest);
        let mut fields: [(FieldTag, &mut dyn DecodeField); 1] =
            [(values_field(), &mut consumer)];
        message::decode(&mut reader, &mut fields).map_err(|e| e.to_string())?;
    }

    for value in &dest {
        println!("{value}");
    }
    Ok(())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn from_hex(hex: &str) -> Result<Vec<u8>, String> {
    let hex = hex.trim();
    if !hex.is_ascii() {
        return Err("Hex-Eingabe enthält Nicht-ASCII-Zeichen".into());
    }
    if hex.len() % 2 != 0 {
        return Err("Hex-Eingabe hat ungerade Länge".into());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| format!("ungültiges Hex an Position {i}"))
        })
        .collect()
}
