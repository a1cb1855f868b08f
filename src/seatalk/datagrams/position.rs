use super::{fixed_point, half_degrees};
use crate::{Date, Time};

/// `[command, 0x02, degrees, minutes * 100 (LE, 15 bits), hemisphere flag in bit 7]`.
///
/// Minutes are truncated to hundredths.
fn pack_position(command: u8, degrees: f64, hemisphere_flag: bool) -> [u8; 5] {
    let magnitude = degrees.abs();
    let whole = magnitude.trunc();
    let hundredths = ((magnitude - whole) * 6000.0) as u16 & 0x7FFF;
    let [low, high] = hundredths.to_le_bytes();

    [
        command,
        0x02,
        whole as u8,
        low,
        high | if hemisphere_flag { 0x80 } else { 0x00 },
    ]
}

/// Unsigned degrees and the hemisphere flag.
fn unpack_position(bytes: &[u8; 5]) -> (f64, bool) {
    let hundredths = u16::from_le_bytes([bytes[3], bytes[4]]) & 0x7FFF;
    let degrees = bytes[2] as f64 + hundredths as f64 / 6000.0;
    (degrees, bytes[4] & 0x80 != 0)
}

datagram! {
    /// 0x50 - Latitude
    ///
    /// ```text
    /// 50 Z2 XX YY YY
    /// ```
    ///
    /// `XX` degrees and `(YYYY & 0x7FFF) / 100` minutes, little-endian. The top bit of
    /// `YYYY` is set for south.
    Latitude { command: 0x50, len: 5 }
}

impl Latitude {
    /// Latitude in degrees, south negative.
    pub fn new(degrees: f64) -> Self {
        Latitude {
            bytes: pack_position(Self::COMMAND, degrees, degrees < 0.0),
        }
    }

    /// Latitude in degrees, south negative.
    pub fn degrees(&self) -> f64 {
        match unpack_position(&self.bytes) {
            (degrees, true) => -degrees,
            (degrees, false) => degrees,
        }
    }
}

datagram! {
    /// 0x51 - Longitude
    ///
    /// ```text
    /// 51 Z2 XX YY YY
    /// ```
    ///
    /// Same layout as [`Latitude`]; the top bit of `YYYY` is set for east.
    Longitude { command: 0x51, len: 5 }
}

impl Longitude {
    /// Longitude in degrees, west negative. The prime meridian is sent as west.
    pub fn new(degrees: f64) -> Self {
        Longitude {
            bytes: pack_position(Self::COMMAND, degrees, degrees > 0.0),
        }
    }

    /// Longitude in degrees, west negative.
    pub fn degrees(&self) -> f64 {
        match unpack_position(&self.bytes) {
            (degrees, true) => degrees,
            (degrees, false) => -degrees,
        }
    }
}

datagram! {
    /// 0x52 - Speed over ground
    ///
    /// ```text
    /// 52 01 XX XX
    /// ```
    ///
    /// `XXXX / 10` knots, little-endian.
    SpeedOverGround { command: 0x52, len: 4 }
}

impl SpeedOverGround {
    pub fn new(knots: f32) -> Self {
        let [low, high] = fixed_point(knots, 10.0).to_le_bytes();
        SpeedOverGround {
            bytes: [Self::COMMAND, 0x01, low, high],
        }
    }

    pub fn knots(&self) -> f32 {
        u16::from_le_bytes([self.bytes[2], self.bytes[3]]) as f32 / 10.0
    }
}

datagram! {
    /// 0x53 - Magnetic course
    ///
    /// ```text
    /// 53 U0 VW
    /// ```
    ///
    /// `(U & 0x3) * 90 + (VW & 0x3F) * 2 + (U & 0xC) / 8` degrees, half-degree resolution.
    MagneticCourse { command: 0x53, len: 3 }
}

impl MagneticCourse {
    /// Course in degrees, rounded to the nearest half degree.
    pub fn new(degrees: f32) -> Self {
        let half = half_degrees(degrees);
        let quadrant = (half / 180) as u8;
        let remainder = half % 180;

        MagneticCourse {
            bytes: [
                Self::COMMAND,
                quadrant << 4 | ((remainder % 4) as u8) << 6,
                (remainder / 4) as u8 & 0x3F,
            ],
        }
    }

    pub fn degrees(&self) -> f32 {
        let [_, flags, steps] = self.bytes;
        let half =
            ((flags >> 4) & 0x03) as u16 * 180 + (steps & 0x3F) as u16 * 4 + (flags >> 6) as u16;
        half as f32 / 2.0
    }
}

datagram! {
    /// 0x54 - GMT time
    ///
    /// ```text
    /// 54 T1 RS HH
    /// ```
    ///
    /// `HH` hours, minutes in the top six bits of `RS`, seconds in the two low bits of `RS`
    /// followed by `T`.
    GmtTime { command: 0x54, len: 4 }
}

impl GmtTime {
    /// Whole seconds only; the fraction of `time.second` is dropped.
    pub fn new(time: Time) -> Self {
        let second = time.second as u8 & 0x3F;
        GmtTime {
            bytes: [
                Self::COMMAND,
                0x01 | (second & 0x0F) << 4,
                (time.minute << 2) & 0xFC | (second & 0x30) >> 4,
                time.hour,
            ],
        }
    }

    pub fn time(&self) -> Time {
        let [_, low, packed, hour] = self.bytes;
        let second = (packed & 0x03) << 4 | low >> 4;
        Time::new(hour, packed >> 2, second as f32)
    }
}

datagram! {
    /// 0x56 - Date
    ///
    /// ```text
    /// 56 M1 DD YY
    /// ```
    GmtDate { command: 0x56, len: 4 }
}

impl GmtDate {
    pub fn new(date: Date) -> Self {
        GmtDate {
            bytes: [
                Self::COMMAND,
                0x01 | (date.month & 0x0F) << 4,
                date.day,
                date.year,
            ],
        }
    }

    pub fn date(&self) -> Date {
        let [_, month, day, year] = self.bytes;
        Date::new(day, month >> 4, year)
    }
}

datagram! {
    /// 0x99 - Magnetic variation
    ///
    /// ```text
    /// 99 00 XX
    /// ```
    ///
    /// Signed whole degrees as carried on the bus: positive west, negative east.
    MagneticVariation { command: 0x99, len: 3 }
}

impl MagneticVariation {
    pub fn new(degrees: i8) -> Self {
        MagneticVariation {
            bytes: [Self::COMMAND, 0x00, degrees as u8],
        }
    }

    pub fn degrees(&self) -> i8 {
        self.bytes[2] as i8
    }
}
