//! Field parsers.
//!
//! The strict parsers ([`coordinate`], [`time`], [`date`], [`decimal`], [`float`]) are nom
//! parsers that reject malformed or out-of-range input. The `*_from_fragment` converters
//! wrap them for the best-effort decoders and fall back to defaults.

use nom::{
    Parser,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    number::complete,
};

use crate::{Date, Error, Heading, IResult, Laterality, Status, Time};

/// Parses exactly two decimal digits.
fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, |c: char| c.is_ascii_digit()), str::parse).parse(i)
}

/// Parses an unsigned `dddmm.mmmm` coordinate into decimal degrees.
///
/// The degrees are all digits before the last two digits preceding the decimal point;
/// the rest is minutes.
///
/// ```rust
/// use nmea_seatalk::nmea_content::parse::coordinate;
///
/// let (_, degrees) = coordinate("3751.98405").unwrap();
/// assert!((degrees - 37.86640083333333).abs() < 1e-9);
/// ```
pub fn coordinate(i: &str) -> IResult<&str, f64> {
    let (rest, number) = recognize((digit1, opt((char('.'), digit0)))).parse(i)?;
    let whole = number.find('.').unwrap_or(number.len());

    if whole < 2 {
        return Err(nom::Err::Error(Error::InvalidField(number)));
    }

    let degrees = match &number[..whole - 2] {
        "" => 0,
        digits => digits
            .parse::<u16>()
            .map_err(|_| nom::Err::Error(Error::InvalidField(number)))?,
    };
    let minutes = number[whole - 2..]
        .parse::<f64>()
        .map_err(|_| nom::Err::Error(Error::InvalidField(number)))?;

    if minutes >= 60.0 {
        return Err(nom::Err::Error(Error::InvalidField(number)));
    }

    Ok((rest, degrees as f64 + minutes / 60.0))
}

/// Parses `hhmmss.ss`.
pub fn time(i: &str) -> IResult<&str, Time> {
    let (rest, (hour, minute, second)) = (two_digits, two_digits, float).parse(i)?;

    if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
        return Err(nom::Err::Error(Error::InvalidField(i)));
    }

    Ok((rest, Time::new(hour, minute, second)))
}

/// Parses `ddmmyy`.
pub fn date(i: &str) -> IResult<&str, Date> {
    let (rest, (day, month, year)) = (two_digits, two_digits, two_digits).parse(i)?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(nom::Err::Error(Error::InvalidField(i)));
    }

    Ok((rest, Date::new(day, month, year)))
}

/// Parses a decimal number as `f64`.
pub fn decimal(i: &str) -> IResult<&str, f64> {
    complete::double(i)
}

/// Parses a decimal number as `f32`.
pub fn float(i: &str) -> IResult<&str, f32> {
    complete::float(i)
}

/// Converts a coordinate fragment and its hemisphere letter into signed decimal degrees.
///
/// Southern latitudes and western longitudes are negative. Fragments shorter than three
/// characters, or otherwise unparsable, give `0.0`.
pub fn degrees_from_coordinate(value: &str, hemisphere: &str) -> f64 {
    if value.len() < 3 {
        return 0.0;
    }

    let degrees = all_consuming(coordinate)
        .parse(value)
        .map_or(0.0, |(_, degrees)| degrees);

    match hemisphere {
        "S" | "s" | "W" | "w" => -degrees,
        _ => degrees,
    }
}

pub fn time_from_fragment(fragment: &str) -> Time {
    all_consuming(time)
        .parse(fragment)
        .map_or_else(|_| Time::default(), |(_, time)| time)
}

pub fn date_from_fragment(fragment: &str) -> Date {
    all_consuming(date)
        .parse(fragment)
        .map_or_else(|_| Date::default(), |(_, date)| date)
}

/// Number in `fragment`, [`None`] when empty or malformed.
pub fn opt_float_from_fragment(fragment: &str) -> Option<f32> {
    all_consuming(float)
        .parse(fragment)
        .ok()
        .map(|(_, value)| value)
}

/// Number in `fragment`, `0.0` when empty or malformed.
pub fn float_from_fragment(fragment: &str) -> f32 {
    opt_float_from_fragment(fragment).unwrap_or_default()
}

/// `A` is active, `V` is void, anything else unknown.
pub fn status_from_fragment(fragment: &str) -> Status {
    match fragment {
        "A" | "a" => Status::Active,
        "V" | "v" => Status::Void,
        _ => Status::Unknown,
    }
}

pub fn laterality_from_fragment(fragment: &str) -> Laterality {
    match fragment {
        "L" | "l" => Laterality::Left,
        "R" | "r" => Laterality::Right,
        _ => Laterality::Unknown,
    }
}

/// Pairs a heading value with its `T`/`M` reference letter. Anything but `M` is true.
pub fn heading_from_fragments(value: &str, reference: &str) -> Heading {
    Heading {
        degrees: float_from_fragment(value),
        is_magnetic: reference.eq_ignore_ascii_case("M"),
    }
}
