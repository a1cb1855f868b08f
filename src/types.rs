//! # Shared Value Types
//!
//! Values carried by both protocols: headings, times, dates and the single-letter
//! status and steering indicators, plus the [`RawMessage`] accessor implemented by
//! every encoded message.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Access to the raw wire bytes of an encoded message.
///
/// Implemented by encoded NMEA sentences, raw SeaTalk datagrams and every decoded
/// SeaTalk datagram view, so a transport sink can forward any of them unchanged.
pub trait RawMessage {
    /// The message exactly as it goes on the wire.
    fn as_bytes(&self) -> &[u8];

    /// Length of the message in bytes.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the message holds no bytes at all.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A heading in degrees together with its reference.
///
/// True and magnetic headings are never mixed implicitly; converting between them needs
/// the local magnetic variation, which is the caller's business.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Heading {
    /// Heading in degrees, `[0, 360)`
    pub degrees: f32,
    /// `true` for a magnetic heading, `false` for a true heading
    pub is_magnetic: bool,
}

impl Heading {
    /// A heading relative to true north.
    pub const fn true_north(degrees: f32) -> Self {
        Heading {
            degrees,
            is_magnetic: false,
        }
    }

    /// A heading relative to magnetic north.
    pub const fn magnetic(degrees: f32) -> Self {
        Heading {
            degrees,
            is_magnetic: true,
        }
    }

    /// The NMEA reference letter, `M` or `T`.
    pub const fn reference(&self) -> char {
        if self.is_magnetic { 'M' } else { 'T' }
    }
}

/// Time of day in UTC.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Time {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59.99
    pub second: f32,
}

impl Time {
    pub const fn new(hour: u8, minute: u8, second: f32) -> Self {
        Time {
            hour,
            minute,
            second,
        }
    }
}

/// Calendar date with a two-digit year, as both protocols transmit it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    /// Two-digit year
    pub year: u8,
}

impl Date {
    pub const fn new(day: u8, month: u8, year: u8) -> Self {
        Date { day, month, year }
    }
}

/// Validity flag reused across sentence types.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A - Active / valid
    Active,
    /// V - Void / invalid
    Void,
    /// Anything else, including an empty field
    #[default]
    Unknown,
}

impl Status {
    /// The NMEA letter for this status; `None` for [`Status::Unknown`].
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Status::Active => Some('A'),
            Status::Void => Some('V'),
            Status::Unknown => None,
        }
    }
}

/// Direction of a steering correction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Laterality {
    /// L - Steer left
    Left,
    /// R - Steer right
    Right,
    #[default]
    Unknown,
}

impl Laterality {
    /// The NMEA letter for this direction; `None` for [`Laterality::Unknown`].
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Laterality::Left => Some('L'),
            Laterality::Right => Some('R'),
            Laterality::Unknown => None,
        }
    }
}

#[cfg(feature = "time")]
impl TryFrom<Time> for time::Time {
    type Error = time::error::ComponentRange;

    fn try_from(value: Time) -> Result<Self, Self::Error> {
        let second = value.second.max(0.0);
        let milliseconds = (second.fract() * 1000.0) as u16;

        time::Time::from_hms_milli(
            value.hour,
            value.minute,
            second.trunc() as u8,
            milliseconds,
        )
    }
}

#[cfg(feature = "time")]
impl TryFrom<Date> for time::Date {
    type Error = time::error::ComponentRange;

    fn try_from(value: Date) -> Result<Self, Self::Error> {
        let year = match value.year {
            83..=99 => value.year as i32 + 1900,
            _ => value.year as i32 + 2000,
        };

        let month = time::Month::try_from(value.month)?;
        time::Date::from_calendar_date(year, month, value.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_reference() {
        assert_eq!(Heading::magnetic(236.3).reference(), 'M');
        assert_eq!(Heading::true_north(12.0).reference(), 'T');
        assert!(!Heading::default().is_magnetic);
    }

    #[test]
    fn test_indicator_letters() {
        assert_eq!(Status::Active.as_char(), Some('A'));
        assert_eq!(Status::Void.as_char(), Some('V'));
        assert_eq!(Status::Unknown.as_char(), None);
        assert_eq!(Laterality::Left.as_char(), Some('L'));
        assert_eq!(Laterality::Right.as_char(), Some('R'));
        assert_eq!(Laterality::Unknown.as_char(), None);
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_time_conversions() {
        let time: time::Time = Time::new(4, 54, 31.5).try_into().unwrap();
        assert_eq!(time.hour(), 4);
        assert_eq!(time.minute(), 54);
        assert_eq!(time.second(), 31);
        assert_eq!(time.millisecond(), 500);

        assert!(time::Time::try_from(Time::new(24, 0, 0.0)).is_err());

        let date: time::Date = Date::new(4, 11, 14).try_into().unwrap();
        assert_eq!(date.year(), 2014);
        assert_eq!(date.month(), time::Month::November);
        assert_eq!(date.day(), 4);

        let date: time::Date = Date::new(31, 12, 94).try_into().unwrap();
        assert_eq!(date.year(), 1994);

        assert!(time::Date::try_from(Date::new(4, 13, 14)).is_err());
    }
}
