//! # NMEA 0183 and SeaTalk
//!
//! This library provides the protocol core of a marine instrument bridge:
//!
//! - [`NmeaStreamParser`] rebuilds `$HHHHH,D1,D2,...,Dn*CC\r\n` sentences from a byte stream
//!   and verifies their checksum.
//! - [`nmea_content`] decodes and encodes the individual sentence kinds (`MWV`, `GLL`, `RMB`,
//!   `APB`, `RMC`, `DBT`, `VHW`, `HDM` and the `SEA` SeaTalk tunnel).
//! - [`SeaTalkStreamParser`] rebuilds SeaTalk datagrams from 9-bit bus words.
//! - [`seatalk`] decodes and encodes the individual datagrams.
//!
//! Nothing allocates: messages live in fixed-capacity [`heapless`] buffers, and decoded
//! sentences borrow their text fields from the input.
//!
//! ## Usage
//!
//! ```rust
//! use nmea_seatalk::{
//!     NmeaStreamParser,
//!     nmea_content::{Encode, HDM, NmeaSentence},
//! };
//!
//! let mut parser = NmeaStreamParser::new();
//! for &byte in b"$STHDM,236.3,M*21\r\n" {
//!     if parser.parse(byte) {
//!         let sentence = parser.sentence().unwrap();
//!         assert_eq!(NmeaSentence::decode(sentence), NmeaSentence::HDM(HDM::new(236.3)));
//!     }
//! }
//!
//! let encoded = HDM::new(180.0).encode().unwrap();
//! assert_eq!(encoded.as_str(), "$STHDM,180.0,M*2C\r\n");
//! ```
//!
//! The one-shot [`Nmea0183ParserBuilder`] wraps any nom content parser with the same
//! framing checks, with configurable [`ChecksumMode`] and [`LineEndingMode`].

pub mod error;
pub mod nmea0183;
pub mod nmea_content;
pub mod seatalk;
mod types;

pub use error::{Error, IResult, MessageError};
pub use nmea0183::{
    ChecksumMode, LineEndingMode, Nmea0183ParserBuilder, NmeaStreamParser,
    NmeaStreamParserBuilder,
};
pub use seatalk::SeaTalkStreamParser;
pub use types::*;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;
