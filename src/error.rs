//! # Error Types
//!
//! This module defines the error types used throughout the library.
//!
//! Parsing the text of NMEA sentences goes through [`Error`], a nom-compatible error.
//! Building owned messages (encoded sentences, SeaTalk datagrams) goes through
//! [`MessageError`]. The stream parsers never fail: framing problems reset them and
//! checksum failures are only counted.

use core::fmt;

use nom::error::{ErrorKind, FromExternalError, ParseError};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
///
/// Outside of the parsing code, you can use the [nom::Finish::finish] method to convert
/// it to a more common result type.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// Represents all possible errors that can occur while parsing NMEA text.
#[derive(Debug, PartialEq)]
pub enum Error<I, E> {
    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA messages must be ASCII-only for proper parsing and checksum calculation.
    NonAscii,

    /// The checksum of the sentence was corrupt or incorrect.
    ChecksumMismatch {
        /// The checksum calculated from the message content
        expected: u8,
        /// The checksum found in the message
        found: u8,
    },

    /// The sentence could not be parsed because its format was invalid.
    ///
    /// This wraps nom's standard parsing errors.
    ParsingError(E),

    /// A field was well-formed but out of range, such as minute `61` in a time field.
    ///
    /// Contains the input that caused the error.
    InvalidField(I),
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}

/// Errors raised while building an owned message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageError {
    /// The message does not fit into its fixed-capacity buffer.
    CapacityExceeded {
        /// Capacity of the buffer in bytes
        capacity: usize,
    },

    /// A SeaTalk datagram must hold between 1 and 19 bytes.
    InvalidLength {
        /// Length of the rejected input
        len: usize,
    },
}

impl fmt::Display for MessageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageError::CapacityExceeded { capacity } => {
                write!(f, "message exceeds its {capacity}-byte buffer")
            }
            MessageError::InvalidLength { len } => {
                write!(f, "invalid datagram length {len}")
            }
        }
    }
}

impl core::error::Error for MessageError {}

impl From<fmt::Error> for MessageError {
    fn from(_: fmt::Error) -> Self {
        MessageError::CapacityExceeded {
            capacity: crate::nmea0183::MAX_SENTENCE_LEN,
        }
    }
}
