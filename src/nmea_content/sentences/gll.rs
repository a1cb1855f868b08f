use core::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    MessageError, Status, Time,
    nmea_content::{
        Coordinate, Decode, Encode, Fields, Opt, Sentence, SentenceWriter, TimeField,
        parse::{degrees_from_coordinate, status_from_fragment, time_from_fragment},
    },
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6
///         |       | |        | |         |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a*hh<CR><LF>
/// ```
///
/// The NMEA 2.3 mode indicator (field 7) is accepted and ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GLL {
    /// Latitude in degrees, south negative
    pub latitude: f64,
    /// Longitude in degrees, west negative
    pub longitude: f64,
    /// Fix time in UTC
    pub time: Time,
    pub status: Status,
}

impl<'a> Decode<'a> for GLL {
    fn from_fields(fields: &Fields<'a>) -> Self {
        GLL {
            latitude: degrees_from_coordinate(fields.get(1), fields.get(2)),
            longitude: degrees_from_coordinate(fields.get(3), fields.get(4)),
            time: time_from_fragment(fields.get(5)),
            status: status_from_fragment(fields.get(6)),
        }
    }
}

impl Encode for GLL {
    const TALKER: &'static str = "GP";

    fn encode_as(&self, talker: &str) -> Result<Sentence, MessageError> {
        let mut writer = SentenceWriter::new(talker, "GLL")?;
        write!(
            writer,
            ",{},{},{},{}",
            Coordinate::latitude(self.latitude),
            Coordinate::longitude(self.longitude),
            TimeField(self.time),
            Opt(self.status.as_char()),
        )?;
        writer.finish()
    }
}
