//! # NMEA 0183 Content
//!
//! Typed NMEA sentences and the machinery shared by their decoders and encoders.
//!
//! Decoding is best effort: a sentence is split into borrowed [`Fragments`] and each
//! sentence type maps fixed fragment positions to typed fields, falling back to defaults
//! for missing or malformed fields. Encoding formats the fields with fixed precision into
//! a [`Sentence`], appending the checksum and line ending.
//!
//! ```rust
//! use nmea_seatalk::nmea_content::{Decode, Encode, HDM, NmeaSentence};
//!
//! let hdm = HDM::new(236.3);
//! let sentence = hdm.encode().unwrap();
//! assert_eq!(sentence.as_str(), "$STHDM,236.3,M*21\r\n");
//!
//! match NmeaSentence::decode(sentence.as_str()) {
//!     NmeaSentence::HDM(decoded) => assert_eq!(decoded.heading.degrees, 236.3),
//!     _ => unreachable!(),
//! }
//! ```

use core::fmt::{self, Write};

use nom::Parser;

use crate::{
    IResult, MessageError, Nmea0183ParserBuilder, RawMessage,
    nmea0183::{MAX_SENTENCE_LEN, checksum},
};

pub mod parse;
mod sentences;

pub use sentences::*;

/// Maximum number of fragments kept by [`Fields`], address field included.
pub const MAX_FIELDS: usize = 24;

/// Zero-copy splitter over the fragments of an NMEA sentence.
///
/// Fragments are separated by `,`. Splitting stops at the `*` checksum delimiter; without
/// one, a trailing `\r\n` is dropped. Fragment 0 is the address field (`$GPRMC` or `GPRMC`).
///
/// ```rust
/// use nmea_seatalk::nmea_content::Fragments;
///
/// let mut fragments = Fragments::new("$STDBT,24.3,f,,M,,F*23\r\n");
/// assert_eq!(fragments.next(), Some("$STDBT"));
/// assert_eq!(fragments.next(), Some("24.3"));
/// assert_eq!(fragments.next(), Some("f"));
/// assert_eq!(fragments.next(), Some(""));
/// assert_eq!(fragments.nth(2), Some("F"));
/// assert_eq!(fragments.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    inner: core::str::Split<'a, char>,
}

impl<'a> Fragments<'a> {
    pub fn new(sentence: &'a str) -> Self {
        let content = match sentence.find('*') {
            Some(end) => &sentence[..end],
            None => sentence.trim_end_matches(['\r', '\n']),
        };

        Fragments {
            inner: content.split(','),
        }
    }
}

impl<'a> Iterator for Fragments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Positional access to the fragments of a sentence.
///
/// Missing positions read as empty fragments, so decoders never index out of bounds.
#[derive(Debug, Clone, Default)]
pub struct Fields<'a> {
    fragments: heapless::Vec<&'a str, MAX_FIELDS>,
}

impl<'a> Fields<'a> {
    pub fn new(sentence: &'a str) -> Self {
        Fields {
            fragments: Fragments::new(sentence).take(MAX_FIELDS).collect(),
        }
    }

    /// Fragment at `index`, or `""` when the sentence is shorter.
    pub fn get(&self, index: usize) -> &'a str {
        self.fragments.get(index).copied().unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Address field without its start character, e.g. `GPRMC`.
    pub fn address(&self) -> &'a str {
        self.get(0).trim_start_matches(['$', '!'])
    }

    /// Two-letter talker ID, e.g. `GP`.
    pub fn talker(&self) -> &'a str {
        match self.address().len() {
            5 => self.address().get(..2).unwrap_or(""),
            _ => "",
        }
    }

    /// Three-letter sentence identifier following the talker ID, e.g. `RMC`.
    pub fn sentence_type(&self) -> &'a str {
        match self.address().len() {
            5 => self.address().get(2..).unwrap_or(""),
            _ => "",
        }
    }
}

/// An encoded NMEA sentence, `$` through `*hh\r\n`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: heapless::String<MAX_SENTENCE_LEN>,
}

impl Sentence {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl RawMessage for Sentence {
    fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// Builds a [`Sentence`]: address first, fields through [`fmt::Write`], checksum last.
pub(crate) struct SentenceWriter {
    text: heapless::String<MAX_SENTENCE_LEN>,
}

impl SentenceWriter {
    pub(crate) fn new(talker: &str, sentence_type: &str) -> Result<Self, MessageError> {
        let mut writer = SentenceWriter {
            text: heapless::String::new(),
        };
        write!(writer, "${talker}{sentence_type}")?;
        Ok(writer)
    }

    pub(crate) fn finish(mut self) -> Result<Sentence, MessageError> {
        let cc = checksum(&self.text.as_bytes()[1..]);
        write!(self, "*{cc:02X}\r\n")?;
        Ok(Sentence { text: self.text })
    }
}

impl Write for SentenceWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s).map_err(|_| fmt::Error)
    }
}

/// Typed value that can be written as an NMEA sentence.
pub trait Encode {
    /// Talker ID used by [`Encode::encode`].
    const TALKER: &'static str;

    /// Encodes the sentence with the given two-letter talker ID.
    fn encode_as(&self, talker: &str) -> Result<Sentence, MessageError>;

    /// Encodes the sentence with its default talker ID.
    fn encode(&self) -> Result<Sentence, MessageError> {
        self.encode_as(Self::TALKER)
    }
}

/// Typed value that can be read back from an NMEA sentence.
///
/// Decoding never fails. Missing or malformed fields decode to their defaults; the
/// checksum is not verified (that is the framing layer's job).
pub trait Decode<'a>: Sized {
    fn from_fields(fields: &Fields<'a>) -> Self;

    /// Decodes a full sentence (`$…*hh\r\n`) or its bare content.
    fn decode(sentence: &'a str) -> Self {
        Self::from_fields(&Fields::new(sentence))
    }
}

/// Validates framing and checksum of a complete sentence, then decodes it.
///
/// ```rust
/// use nmea_seatalk::nmea_content::{NmeaSentence, parse_sentence};
///
/// let (_, sentence) = parse_sentence("$STHDM,236.3,M*21\r\n").unwrap();
/// assert!(matches!(sentence, NmeaSentence::HDM(_)));
///
/// assert!(parse_sentence("$STHDM,236.3,M*20\r\n").is_err());
/// ```
pub fn parse_sentence(input: &str) -> IResult<&str, NmeaSentence<'_>> {
    Nmea0183ParserBuilder::new()
        .build(NmeaSentence::parser)
        .parse(input)
}

/// Writes the wrapped value, or nothing for [`None`]. Precision and width are forwarded.
pub(crate) struct Opt<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => Ok(()),
        }
    }
}

/// Signed decimal degrees written as `ddmm.mmmmm,N` / `dddmm.mmmmm,E`.
pub(crate) struct Coordinate {
    degrees: f64,
    width: usize,
    hemispheres: (char, char),
}

impl Coordinate {
    pub(crate) fn latitude(degrees: f64) -> Self {
        Coordinate {
            degrees,
            width: 2,
            hemispheres: ('N', 'S'),
        }
    }

    pub(crate) fn longitude(degrees: f64) -> Self {
        Coordinate {
            degrees,
            width: 3,
            hemispheres: ('E', 'W'),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1e-5 minute units, so rounding carries into the degrees
        let units = (self.degrees.abs() * 60.0 * 100_000.0).round() as u64;
        let degrees = units / 6_000_000;
        let minutes = units % 6_000_000;
        let hemisphere = if self.degrees < 0.0 {
            self.hemispheres.1
        } else {
            self.hemispheres.0
        };

        write!(
            f,
            "{degrees:0width$}{:02}.{:05},{hemisphere}",
            minutes / 100_000,
            minutes % 100_000,
            width = self.width,
        )
    }
}

/// `hhmmss.ss`, seconds truncated to hundredths.
pub(crate) struct TimeField(pub crate::Time);

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crate::Time {
            hour,
            minute,
            second,
        } = self.0;
        // the small offset absorbs f32 error below the hundredth
        let hundredths = (second as f64 * 100.0 + 1e-3).floor().clamp(0.0, 5999.0) as u32;
        write!(
            f,
            "{hour:02}{minute:02}{:02}.{:02}",
            hundredths / 100,
            hundredths % 100
        )
    }
}

/// `ddmmyy`
pub(crate) struct DateField(pub crate::Date);

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crate::Date { day, month, year } = self.0;
        write!(f, "{day:02}{month:02}{year:02}")
    }
}
