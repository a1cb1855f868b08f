use core::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    MessageError,
    nmea_content::{
        Decode, Encode, Fields, Opt, Sentence, SentenceWriter, parse::opt_float_from_fragment,
    },
};

/// DBT - Depth Below Transducer
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_dbt_depth_below_transducer>
///
/// ```text
///         1   2 3   4 5   6
///         |   | |   | |   |
///  $--DBT,x.x,f,x.x,M,x.x,F*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DBT {
    pub depth_feet: Option<f32>,
    pub depth_meters: Option<f32>,
    pub depth_fathoms: Option<f32>,
}

impl DBT {
    /// Depth in feet only, the other units left empty.
    ///
    /// ```rust
    /// use nmea_seatalk::nmea_content::{DBT, Encode};
    ///
    /// let sentence = DBT::from_feet(24.3).encode().unwrap();
    /// assert_eq!(sentence.as_str(), "$STDBT,24.3,f,,M,,F*23\r\n");
    /// ```
    pub fn from_feet(feet: f32) -> Self {
        DBT {
            depth_feet: Some(feet),
            ..DBT::default()
        }
    }

    /// Depth in meters, converted from whichever unit is present.
    pub fn depth(&self) -> Option<f32> {
        self.depth_meters
            .or(self.depth_feet.map(|feet| feet * 0.3048))
            .or(self.depth_fathoms.map(|fathoms| fathoms * 1.8288))
    }
}

impl<'a> Decode<'a> for DBT {
    fn from_fields(fields: &Fields<'a>) -> Self {
        DBT {
            depth_feet: opt_float_from_fragment(fields.get(1)),
            depth_meters: opt_float_from_fragment(fields.get(3)),
            depth_fathoms: opt_float_from_fragment(fields.get(5)),
        }
    }
}

impl Encode for DBT {
    const TALKER: &'static str = "ST";

    fn encode_as(&self, talker: &str) -> Result<Sentence, MessageError> {
        let mut writer = SentenceWriter::new(talker, "DBT")?;
        write!(
            writer,
            ",{:.1},f,{:.1},M,{:.1},F",
            Opt(self.depth_feet),
            Opt(self.depth_meters),
            Opt(self.depth_fathoms),
        )?;
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawMessage;

    #[test]
    fn test_dbt_encode() {
        let sentence = DBT::from_feet(24.3).encode().unwrap();
        assert_eq!(sentence.as_str(), "$STDBT,24.3,f,,M,,F*23\r\n");
        assert_eq!(sentence.len(), 24);
    }

    #[test]
    fn test_dbt_decode() {
        let dbt = DBT::decode("$SDDBT,24.3,f,7.4,M,4.0,F*00\r\n");
        assert_eq!(dbt.depth_feet, Some(24.3));
        assert_eq!(dbt.depth_meters, Some(7.4));
        assert_eq!(dbt.depth_fathoms, Some(4.0));
        assert_eq!(dbt.depth(), Some(7.4));

        let dbt = DBT::decode("$STDBT,24.3,f,,M,,F*23\r\n");
        assert_eq!(dbt, DBT::from_feet(24.3));
        assert!((dbt.depth().unwrap() - 7.40664).abs() < 1e-4);

        assert_eq!(DBT::decode("$STDBT,,f,,M,,F").depth(), None);
    }
}
