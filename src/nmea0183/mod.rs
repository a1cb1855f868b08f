//! # NMEA 0183 Framing
//!
//! This module handles the outer structure of NMEA 0183 sentences:
//! `$HHH,D1,D2,...,Dn*CC\r\n` (or `!` instead of `$` for AIS-style sentences).
//!
//! Two framing front-ends share the checksum helpers defined here:
//! - [`Nmea0183ParserBuilder`] builds a one-shot nom parser for a sentence that is already
//!   available as a whole (a log line, a datagram, a test fixture).
//! - [`NmeaStreamParser`] rebuilds sentences from a byte stream, one byte per call.
//!
//! Both are configurable through [`ChecksumMode`]; the one-shot parser additionally through
//! [`LineEndingMode`].

use nom::{
    AsBytes, AsChar, Compare, Err, FindSubstring, Input, Parser,
    branch::alt,
    bytes::complete::{tag, take_until},
    character::complete::{char, one_of},
    combinator::{opt, rest, rest_len, verify},
    error::{ErrorKind, ParseError},
    sequence::terminated,
};

use crate::{Error, IResult};

mod stream;

pub use stream::{NmeaStreamParser, NmeaStreamParserBuilder};

/// Capacity of an NMEA sentence buffer, including the trailing `\r\n`.
pub const MAX_SENTENCE_LEN: usize = 100;

/// Whether a sentence must carry its `*CC` checksum.
///
/// `CC` is the [`checksum`] of the content between the start character and `*`, as two
/// hex digits. A checksum that is present is always verified.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ChecksumMode {
    #[default]
    /// Sentences without `*CC` are dropped.
    Required,

    /// Sentences without `*CC` are accepted. The stream parser then treats the `CR` or `LF`
    /// ending the content as the end of the sentence.
    Optional,
}

/// Whether input handed to the one-shot parser ends in `\r\n`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum LineEndingMode {
    #[default]
    /// Frames as produced by [`NmeaStreamParser`] and the sentence encoders.
    Required,

    /// Lines whose ending was already stripped, e.g. by a line reader.
    Forbidden,
}

/// Creates a configurable one-shot NMEA 0183 framing parser.
///
/// The built parser validates the framing and the checksum, then hands the content
/// between the start character and the `*` delimiter to a content parser such as
/// [`NmeaSentence::parser`](crate::nmea_content::NmeaSentence::parser).
///
/// # Examples
///
/// ```rust
/// use nmea_seatalk::{ChecksumMode, IResult, LineEndingMode, Nmea0183ParserBuilder};
/// use nom::Parser;
///
/// fn content_parser(i: &str) -> IResult<&str, bool> {
///     Ok((i, true))
/// }
///
/// // Strict: checksum and CRLF both required
/// let mut strict_parser = Nmea0183ParserBuilder::new()
///     .checksum_mode(ChecksumMode::Required)
///     .line_ending_mode(LineEndingMode::Required)
///     .build(content_parser);
/// assert!(strict_parser.parse("$STHDM,236.3,M*21\r\n").is_ok());
/// assert!(strict_parser.parse("!STHDM,236.3,M*21\r\n").is_ok());
/// assert!(strict_parser.parse("$STHDM,236.3,M*21").is_err()); // (missing CRLF)
/// assert!(strict_parser.parse("$STHDM,236.3,M\r\n").is_err()); // (missing checksum)
///
/// // Lenient: checksum optional, CRLF forbidden
/// let mut lenient_parser = Nmea0183ParserBuilder::new()
///     .checksum_mode(ChecksumMode::Optional)
///     .line_ending_mode(LineEndingMode::Forbidden)
///     .build(content_parser);
/// assert!(lenient_parser.parse("$STHDM,236.3,M*21").is_ok()); // (with valid checksum)
/// assert!(lenient_parser.parse("$STHDM,236.3,M").is_ok()); // (without checksum)
/// assert!(lenient_parser.parse("$STHDM,236.3,M*99").is_err()); // (invalid checksum)
/// ```
#[must_use]
pub struct Nmea0183ParserBuilder {
    /// Checksum mode for the parser.
    checksum_mode: ChecksumMode,

    /// Line ending mode for the parser.
    line_ending_mode: LineEndingMode,
}

impl Nmea0183ParserBuilder {
    /// Creates a new NMEA 0183 parser builder with default settings.
    ///
    /// The default settings are:
    /// - Checksum mode: [`ChecksumMode::Required`]
    /// - Line ending mode: [`LineEndingMode::Required`]
    pub fn new() -> Self {
        Nmea0183ParserBuilder {
            checksum_mode: ChecksumMode::Required,
            line_ending_mode: LineEndingMode::Required,
        }
    }

    /// Sets the checksum mode for the parser.
    pub fn checksum_mode(mut self, mode: ChecksumMode) -> Self {
        self.checksum_mode = mode;
        self
    }

    /// Sets the line ending mode for the parser.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    /// Wraps `content_parser` in the framing checks.
    ///
    /// Non-ASCII input, a missing `$`/`!`, a malformed tail or a wrong checksum fail with
    /// the matching [`Error`] variant. Otherwise `content_parser` receives the text between
    /// the start character and the tail.
    pub fn build<'a, I, O, F, E>(self, mut content_parser: F) -> impl FnMut(I) -> IResult<I, O, E>
    where
        I: Input + AsBytes + Compare<&'a str> + FindSubstring<&'a str>,
        <I as Input>::Item: AsChar,
        F: Parser<I, Output = O, Error = Error<I, E>>,
        E: ParseError<I>,
    {
        move |i: I| {
            if !i.as_bytes().is_ascii() {
                return Err(nom::Err::Error(Error::NonAscii));
            }

            let (i, _) = one_of("$!").parse(i)?;
            let (cc, data) = alt((take_until("*"), take_until("\r\n"), rest)).parse(i)?;
            let (_, cc) = checksum_crlf(self.checksum_mode, self.line_ending_mode).parse(cc)?;
            let calc_cc = checksum(data.as_bytes());

            if let Some(cc) = cc
                && cc != calc_cc
            {
                return Err(nom::Err::Error(Error::ChecksumMismatch {
                    expected: calc_cc,
                    found: cc,
                }));
            }

            content_parser.parse(data)
        }
    }
}

impl Default for Nmea0183ParserBuilder {
    fn default() -> Self {
        Nmea0183ParserBuilder::new()
    }
}

/// Creates a parser for the `*CC` checksum and CRLF tail of a sentence.
///
/// Returns the received checksum value, or [`None`] when the checksum is optional and
/// absent.
///
/// - cc=[`ChecksumMode::Required`], crlf=[`LineEndingMode::Required`]: Expects `*CC\r\n`
/// - cc=[`ChecksumMode::Required`], crlf=[`LineEndingMode::Forbidden`]: Expects `*CC`
/// - cc=[`ChecksumMode::Optional`], crlf=[`LineEndingMode::Required`]: Expects `\r\n` or `*CC\r\n`
/// - cc=[`ChecksumMode::Optional`], crlf=[`LineEndingMode::Forbidden`]: Expects nothing or `*CC`
fn checksum_crlf<'a, I, E: ParseError<I>>(
    cc: ChecksumMode,
    le: LineEndingMode,
) -> impl FnMut(I) -> nom::IResult<I, Option<u8>, E>
where
    I: Input + AsBytes + Compare<&'a str> + FindSubstring<&'a str>,
    <I as Input>::Item: AsChar,
{
    move |i: I| {
        let (i, _) = crlf(le).parse(i)?;

        let (cc, parse_cc) = match cc {
            ChecksumMode::Required => char('*').map(|_| true).parse(i)?,
            ChecksumMode::Optional => opt(char('*')).map(|asterisk| asterisk.is_some()).parse(i)?,
        };

        if parse_cc {
            let kind = match *cc.as_bytes() {
                [high, low] => match hex_byte(high, low) {
                    Some(value) => return Ok((cc.take_from(2), Some(value))),
                    None => ErrorKind::IsA,
                },
                [] | [_] => ErrorKind::Eof,
                _ => ErrorKind::Count,
            };
            Err(Err::Error(E::from_error_kind(cc, kind)))
        } else if cc.input_len() != 0 {
            Err(Err::Error(E::from_error_kind(cc, ErrorKind::Count)))
        } else {
            Ok((cc, None))
        }
    }
}

/// Strips (or rejects) the CRLF line ending according to `crlf`.
///
/// On success the output is the input without its line ending.
fn crlf<'a, I, E: ParseError<I>>(crlf: LineEndingMode) -> impl Fn(I) -> nom::IResult<I, (), E>
where
    I: Input + Compare<&'a str> + FindSubstring<&'a str>,
{
    move |i: I| {
        let (i, data) = opt(take_until("\r\n")).parse(i)?;

        let data = if crlf == LineEndingMode::Required {
            match data {
                Some(data) => {
                    let (_, _) = consumed(tag("\r\n"), ErrorKind::CrLf).parse(i)?;
                    data
                }
                None => {
                    return Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf)));
                }
            }
        } else if data.is_some() {
            return Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf)));
        } else {
            i
        };

        Ok((data, ()))
    }
}

/// Calculates the NMEA 0183 checksum: the XOR of every byte in `bytes`.
///
/// Callers pass the sentence content only, without the leading `$`/`!` and without
/// the `*` delimiter.
///
/// ```rust
/// use nmea_seatalk::nmea0183::checksum;
///
/// assert_eq!(checksum(b"STHDM,236.3,M"), 0x21);
/// ```
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte)
}

/// Converts one ASCII hex digit (either case) into its value.
pub fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'A'..=b'F' => Some(c - b'A' + 10),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// Converts a pair of ASCII hex digits, most significant first, into a byte.
pub fn hex_byte(high: u8, low: u8) -> Option<u8> {
    Some(hex_digit(high)? << 4 | hex_digit(low)?)
}

/// Ensures that the parser consumes all input.
fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    terminated(
        f,
        verify(rest_len, |len| len == &0)
            .or(move |i| Err(Err::Error(nom::error::make_error(i, e)))),
    )
}

#[cfg(test)]
mod tests {
    mod checksum_crlf;
    mod crlf;
    mod framing;
    mod stream;
}
