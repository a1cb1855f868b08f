use core::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Date, Heading, MessageError, Status, Time,
    nmea_content::{
        Coordinate, DateField, Decode, Encode, Fields, Opt, Sentence, SentenceWriter, TimeField,
        parse::{
            date_from_fragment, degrees_from_coordinate, float_from_fragment, status_from_fragment,
            time_from_fragment,
        },
    },
};

/// RMC - Recommended Minimum Specific GNSS Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// Mode and navigational status fields of later NMEA revisions are accepted and ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RMC {
    /// Fix time in UTC
    pub time: Time,
    pub status: Status,
    /// Latitude in degrees, south negative
    pub latitude: f64,
    /// Longitude in degrees, west negative
    pub longitude: f64,
    /// Speed over ground in knots
    pub speed_over_ground: f32,
    /// Track made good, always relative to true north
    pub track_made_good: Heading,
    /// Fix date in UTC
    pub date: Date,
    /// Magnetic variation in degrees, west negative
    pub magnetic_variation: f32,
}

impl<'a> Decode<'a> for RMC {
    fn from_fields(fields: &Fields<'a>) -> Self {
        let variation = float_from_fragment(fields.get(10));

        RMC {
            time: time_from_fragment(fields.get(1)),
            status: status_from_fragment(fields.get(2)),
            latitude: degrees_from_coordinate(fields.get(3), fields.get(4)),
            longitude: degrees_from_coordinate(fields.get(5), fields.get(6)),
            speed_over_ground: float_from_fragment(fields.get(7)),
            track_made_good: Heading::true_north(float_from_fragment(fields.get(8))),
            date: date_from_fragment(fields.get(9)),
            magnetic_variation: match fields.get(11) {
                "W" | "w" => -variation,
                _ => variation,
            },
        }
    }
}

impl Encode for RMC {
    const TALKER: &'static str = "GP";

    fn encode_as(&self, talker: &str) -> Result<Sentence, MessageError> {
        let mut writer = SentenceWriter::new(talker, "RMC")?;
        write!(
            writer,
            ",{},{},{},{},{:.1},{:.1},{},{:.1},{}",
            TimeField(self.time),
            Opt(self.status.as_char()),
            Coordinate::latitude(self.latitude),
            Coordinate::longitude(self.longitude),
            self.speed_over_ground,
            self.track_made_good.degrees,
            DateField(self.date),
            self.magnetic_variation.abs(),
            if self.magnetic_variation < 0.0 { 'W' } else { 'E' },
        )?;
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rmc_decode() {
        let rmc =
            RMC::decode("$GPRMC,045431.00,A,3751.98405,N,12218.96980,W,0.078,,041114,,,D*68\r\n");
        assert_eq!(rmc.time, Time::new(4, 54, 31.0));
        assert_eq!(rmc.status, Status::Active);
        assert!((rmc.latitude - 37.86640083333333).abs() < 1e-9);
        assert!((rmc.longitude + 122.31616333333334).abs() < 1e-9);
        assert_eq!(rmc.speed_over_ground, 0.078);
        assert_eq!(rmc.track_made_good, Heading::true_north(0.0));
        assert_eq!(rmc.date, Date::new(4, 11, 14));
        assert_eq!(rmc.magnetic_variation, 0.0);
    }

    #[test]
    fn test_rmc_decode_track_and_variation() {
        let rmc = RMC::decode(
            "$GPRMC,045431.00,A,3751.98405,N,12218.96980,W,0.078,45.2,041114,42.2,W,D*68\r\n",
        );
        assert_eq!(rmc.track_made_good.degrees, 45.2);
        assert!(!rmc.track_made_good.is_magnetic);
        assert_eq!(rmc.magnetic_variation, -42.2);
    }

    #[test]
    fn test_rmc_round_trip() {
        let rmc = RMC {
            time: Time::new(4, 54, 31.0),
            status: Status::Active,
            latitude: 37.86640083333333,
            longitude: -122.31616333333334,
            speed_over_ground: 5.3,
            track_made_good: Heading::true_north(45.2),
            date: Date::new(4, 11, 14),
            magnetic_variation: 13.5,
        };

        let sentence = rmc.encode().unwrap();
        assert!(
            sentence
                .as_str()
                .starts_with("$GPRMC,045431.00,A,3751.98405,N,12218.96980,W,5.3,45.2,041114,13.5,E*")
        );

        let decoded = RMC::decode(sentence.as_str());
        assert_eq!(decoded.time, rmc.time);
        assert_eq!(decoded.speed_over_ground, rmc.speed_over_ground);
        assert_eq!(decoded.track_made_good, rmc.track_made_good);
        assert_eq!(decoded.date, rmc.date);
        assert_eq!(decoded.magnetic_variation, 13.5);
        assert!((decoded.latitude - rmc.latitude).abs() < 1e-6);
        assert!((decoded.longitude - rmc.longitude).abs() < 1e-6);
    }
}
