use core::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    MessageError, Status,
    nmea_content::{
        Decode, Encode, Fields, Opt, Sentence, SentenceWriter,
        parse::{float_from_fragment, status_from_fragment},
    },
};

/// MWV - Wind Speed and Angle
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_mwv_wind_speed_and_angle>
///
/// ```text
///         1   2 3   4 5
///         |   | |   | |
///  $--MWV,x.x,a,x.x,a,A*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MWV {
    /// Wind angle in degrees, 0 to 359
    pub angle: f32,
    /// Whether the angle is relative to the bow or to true north
    pub reference: WindReference,
    pub speed: f32,
    pub speed_unit: SpeedUnit,
    pub status: Status,
}

indicator_enum! {
    /// Reference of an MWV wind angle
    pub enum WindReference {
        /// R - Relative to the bow (apparent wind)
        #[default]
        'R' => Relative,
        /// T - Theoretical, relative to true north
        'T' => True,
    }
}

indicator_enum! {
    /// Unit of an MWV wind speed
    pub enum SpeedUnit {
        /// N - Knots
        #[default]
        'N' => Knots,
        /// K - Kilometers per hour
        'K' => KilometersPerHour,
        /// M - Meters per second
        'M' => MetersPerSecond,
    }
}

impl MWV {
    /// Apparent wind, speed in knots, valid.
    ///
    /// ```rust
    /// use nmea_seatalk::nmea_content::{Encode, MWV};
    ///
    /// let sentence = MWV::relative(315.4, 12.2).encode().unwrap();
    /// assert_eq!(sentence.as_str(), "$WIMWV,315.4,R,12.2,N,A*11\r\n");
    /// ```
    pub fn relative(angle: f32, knots: f32) -> Self {
        MWV {
            angle,
            reference: WindReference::Relative,
            speed: knots,
            speed_unit: SpeedUnit::Knots,
            status: Status::Active,
        }
    }
}

impl<'a> Decode<'a> for MWV {
    fn from_fields(fields: &Fields<'a>) -> Self {
        MWV {
            angle: float_from_fragment(fields.get(1)),
            reference: WindReference::from_fragment(fields.get(2)),
            speed: float_from_fragment(fields.get(3)),
            speed_unit: SpeedUnit::from_fragment(fields.get(4)),
            status: status_from_fragment(fields.get(5)),
        }
    }
}

impl Encode for MWV {
    const TALKER: &'static str = "WI";

    fn encode_as(&self, talker: &str) -> Result<Sentence, MessageError> {
        let mut writer = SentenceWriter::new(talker, "MWV")?;
        write!(
            writer,
            ",{:.1},{},{:.1},{},{}",
            self.angle,
            self.reference.as_char(),
            self.speed,
            self.speed_unit.as_char(),
            Opt(self.status.as_char()),
        )?;
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawMessage;

    #[test]
    fn test_mwv_encode() {
        let sentence = MWV::relative(315.4, 12.2).encode().unwrap();
        assert_eq!(sentence.as_str(), "$WIMWV,315.4,R,12.2,N,A*11\r\n");
        assert_eq!(sentence.len(), 28);
    }

    #[test]
    fn test_mwv_decode() {
        let mwv = MWV::decode("$IIMWV,045.0,T,8.5,M,A*00\r\n");
        assert_eq!(mwv.angle, 45.0);
        assert_eq!(mwv.reference, WindReference::True);
        assert_eq!(mwv.speed, 8.5);
        assert_eq!(mwv.speed_unit, SpeedUnit::MetersPerSecond);
        assert_eq!(mwv.status, Status::Active);

        let mwv = MWV::decode("WIMWV,,,,");
        assert_eq!(mwv.angle, 0.0);
        assert_eq!(mwv.reference, WindReference::Relative);
        assert_eq!(mwv.speed_unit, SpeedUnit::Knots);
        assert_eq!(mwv.status, Status::Unknown);
    }

    #[test]
    fn test_mwv_round_trip() {
        let sentence = MWV::relative(315.4, 12.2).encode().unwrap();
        assert_eq!(MWV::decode(sentence.as_str()), MWV::relative(315.4, 12.2));
    }

    #[test]
    fn test_indicator_letters() {
        assert_eq!(SpeedUnit::from_char('k'), Some(SpeedUnit::KilometersPerHour));
        assert_eq!(SpeedUnit::from_char('S'), None);
        assert_eq!(WindReference::True.as_char(), 'T');
    }
}
