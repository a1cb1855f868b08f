use core::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Heading, Laterality, MessageError, Status,
    nmea_content::{
        Coordinate, Decode, Encode, Fields, Opt, Sentence, SentenceWriter,
        parse::{
            degrees_from_coordinate, float_from_fragment, laterality_from_fragment,
            status_from_fragment,
        },
    },
};

/// RMB - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmb_recommended_minimum_navigation_information>
///
/// ```text
///         1 2   3 4    5    6       7 8        9 10  11  12  13
///         | |   | |    |    |       | |        | |   |   |   |
///  $--RMB,A,x.x,a,c--c,c--c,llll.ll,a,yyyyy.yy,a,x.x,x.x,x.x,A*hh<CR><LF>
/// ```
///
/// Waypoint IDs borrow from the decoded sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RMB<'a> {
    pub status: Status,
    /// Cross-track error in nautical miles
    pub cross_track_error: f32,
    /// Direction to steer to get back on track
    pub direction_to_steer: Laterality,
    pub origin_waypoint: &'a str,
    pub destination_waypoint: &'a str,
    /// Destination latitude in degrees, south negative
    pub destination_latitude: f64,
    /// Destination longitude in degrees, west negative
    pub destination_longitude: f64,
    /// Range to destination in nautical miles
    pub range_to_destination: f32,
    /// Bearing to destination, relative to true north
    pub bearing_to_destination: Heading,
    /// Destination closing velocity in knots
    pub closing_velocity: f32,
    /// Active once the arrival circle is entered
    pub arrival_status: Status,
}

impl<'a> Decode<'a> for RMB<'a> {
    fn from_fields(fields: &Fields<'a>) -> Self {
        RMB {
            status: status_from_fragment(fields.get(1)),
            cross_track_error: float_from_fragment(fields.get(2)),
            direction_to_steer: laterality_from_fragment(fields.get(3)),
            origin_waypoint: fields.get(4),
            destination_waypoint: fields.get(5),
            destination_latitude: degrees_from_coordinate(fields.get(6), fields.get(7)),
            destination_longitude: degrees_from_coordinate(fields.get(8), fields.get(9)),
            range_to_destination: float_from_fragment(fields.get(10)),
            bearing_to_destination: Heading::true_north(float_from_fragment(fields.get(11))),
            closing_velocity: float_from_fragment(fields.get(12)),
            arrival_status: status_from_fragment(fields.get(13)),
        }
    }
}

impl Encode for RMB<'_> {
    const TALKER: &'static str = "EC";

    fn encode_as(&self, talker: &str) -> Result<Sentence, MessageError> {
        let mut writer = SentenceWriter::new(talker, "RMB")?;
        write!(
            writer,
            ",{},{:.3},{},{},{},{},{},{:.3},{:.3},{:.3},{}",
            Opt(self.status.as_char()),
            self.cross_track_error,
            Opt(self.direction_to_steer.as_char()),
            self.origin_waypoint,
            self.destination_waypoint,
            Coordinate::latitude(self.destination_latitude),
            Coordinate::longitude(self.destination_longitude),
            self.range_to_destination,
            self.bearing_to_destination.degrees,
            self.closing_velocity,
            Opt(self.arrival_status.as_char()),
        )?;
        writer.finish()
    }
}
