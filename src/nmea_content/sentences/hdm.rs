use core::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Heading, MessageError,
    nmea_content::{
        Decode, Encode, Fields, Sentence, SentenceWriter, parse::heading_from_fragments,
    },
};

/// HDM - Heading - Magnetic
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_hdm_heading_magnetic>
///
/// ```text
///         1   2
///         |   |
///  $--HDM,x.x,M*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct HDM {
    pub heading: Heading,
}

impl HDM {
    /// A magnetic heading in degrees.
    pub fn new(degrees: f32) -> Self {
        HDM {
            heading: Heading::magnetic(degrees),
        }
    }
}

impl<'a> Decode<'a> for HDM {
    fn from_fields(fields: &Fields<'a>) -> Self {
        HDM {
            heading: heading_from_fragments(fields.get(1), fields.get(2)),
        }
    }
}

impl Encode for HDM {
    const TALKER: &'static str = "ST";

    fn encode_as(&self, talker: &str) -> Result<Sentence, MessageError> {
        let mut writer = SentenceWriter::new(talker, "HDM")?;
        write!(
            writer,
            ",{:.1},{}",
            self.heading.degrees,
            self.heading.reference()
        )?;
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawMessage;

    #[test]
    fn test_hdm() {
        let sentence = HDM::new(236.3).encode().unwrap();
        assert_eq!(sentence.as_str(), "$STHDM,236.3,M*21\r\n");
        assert_eq!(sentence.len(), 19);

        assert_eq!(HDM::decode(sentence.as_str()), HDM::new(236.3));
        assert_eq!(
            HDM::decode("$HCHDM,12.5,T").heading,
            Heading::true_north(12.5)
        );
    }

    #[test]
    fn test_hdm_keeps_true_reference() {
        let hdm = HDM::decode("$HCHDM,12.5,T*00");
        assert_eq!(hdm.heading, Heading::true_north(12.5));

        let sentence = hdm.encode().unwrap();
        assert_eq!(sentence.as_str(), "$STHDM,12.5,T*0A\r\n");
        assert_eq!(HDM::decode(sentence.as_str()), hdm);
    }
}
