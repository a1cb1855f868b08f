use core::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    MessageError,
    nmea_content::{
        Decode, Encode, Fields, Opt, Sentence, SentenceWriter, parse::opt_float_from_fragment,
    },
};

/// VHW - Water Speed and Heading
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vhw_water_speed_and_heading>
///
/// ```text
///         1   2 3   4 5   6 7   8
///         |   | |   | |   | |   |
///  $--VHW,x.x,T,x.x,M,x.x,N,x.x,K*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct VHW {
    /// Heading in degrees, true
    pub true_heading: Option<f32>,
    /// Heading in degrees, magnetic
    pub magnetic_heading: Option<f32>,
    /// Speed through water in knots
    pub speed_knots: Option<f32>,
    /// Speed through water in kilometers per hour
    pub speed_kmh: Option<f32>,
}

impl VHW {
    /// Speed through water in knots only.
    ///
    /// ```rust
    /// use nmea_seatalk::nmea_content::{Encode, VHW};
    ///
    /// let sentence = VHW::from_knots(6.39).encode().unwrap();
    /// assert_eq!(sentence.as_str(), "$STVHW,,T,,M,6.4,N,,K*7E\r\n");
    /// ```
    pub fn from_knots(knots: f32) -> Self {
        VHW {
            speed_knots: Some(knots),
            ..VHW::default()
        }
    }
}

impl<'a> Decode<'a> for VHW {
    fn from_fields(fields: &Fields<'a>) -> Self {
        VHW {
            true_heading: opt_float_from_fragment(fields.get(1)),
            magnetic_heading: opt_float_from_fragment(fields.get(3)),
            speed_knots: opt_float_from_fragment(fields.get(5)),
            speed_kmh: opt_float_from_fragment(fields.get(7)),
        }
    }
}

impl Encode for VHW {
    const TALKER: &'static str = "ST";

    fn encode_as(&self, talker: &str) -> Result<Sentence, MessageError> {
        let mut writer = SentenceWriter::new(talker, "VHW")?;
        write!(
            writer,
            ",{:.1},T,{:.1},M,{:.1},N,{:.1},K",
            Opt(self.true_heading),
            Opt(self.magnetic_heading),
            Opt(self.speed_knots),
            Opt(self.speed_kmh),
        )?;
        writer.finish()
    }
}
