use core::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Heading, Laterality, MessageError,
    nmea_content::{
        Decode, Encode, Fields, Opt, Sentence, SentenceWriter,
        parse::{float_from_fragment, heading_from_fragments, laterality_from_fragment},
    },
};

/// APB - Autopilot Sentence "B"
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_apb_autopilot_sentence_b>
///
/// ```text
///         1 2 3   4 5 6 7 8   9 10   11  12 13  14
///         | | |   | | | | |   | |    |   |  |   |
///  $--APB,A,A,x.x,a,N,A,A,x.x,a,c--c,x.x,a,x.x,a*hh<CR><LF>
/// ```
///
/// Fields 1 and 2 are `V` when the fix is unreliable or the Loran-C cycle lock
/// is lost; fields 6 and 7 are `A` once the arrival circle is entered and the
/// perpendicular is passed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct APB<'a> {
    pub unreliable_fix: bool,
    pub cycle_lock_warning: bool,
    /// Magnitude of the cross-track error
    pub cross_track_error: f32,
    /// Cross-track error unit letter, `N` for nautical miles or `K` for kilometers
    pub cross_track_units: char,
    pub direction_to_steer: Laterality,
    pub arrived: bool,
    pub perpendicular_passed: bool,
    pub bearing_origin_to_destination: Heading,
    pub destination_waypoint: &'a str,
    pub bearing_present_to_destination: Heading,
    pub heading_to_steer: Heading,
}

impl<'a> Decode<'a> for APB<'a> {
    fn from_fields(fields: &Fields<'a>) -> Self {
        APB {
            unreliable_fix: fields.get(1) == "V",
            cycle_lock_warning: fields.get(2) == "V",
            cross_track_error: float_from_fragment(fields.get(3)),
            cross_track_units: fields.get(5).chars().next().unwrap_or('N'),
            direction_to_steer: laterality_from_fragment(fields.get(4)),
            arrived: fields.get(6) == "A",
            perpendicular_passed: fields.get(7) == "A",
            bearing_origin_to_destination: heading_from_fragments(fields.get(8), fields.get(9)),
            destination_waypoint: fields.get(10),
            bearing_present_to_destination: heading_from_fragments(fields.get(11), fields.get(12)),
            heading_to_steer: heading_from_fragments(fields.get(13), fields.get(14)),
        }
    }
}

impl Encode for APB<'_> {
    const TALKER: &'static str = "EC";

    fn encode_as(&self, talker: &str) -> Result<Sentence, MessageError> {
        let flag = |set: bool, letter: char, otherwise: char| if set { letter } else { otherwise };

        let mut writer = SentenceWriter::new(talker, "APB")?;
        write!(
            writer,
            ",{},{},{:.3},{},{},{},{},{:.3},{},{},{:.3},{},{:.3},{}",
            flag(self.unreliable_fix, 'V', 'A'),
            flag(self.cycle_lock_warning, 'V', 'A'),
            self.cross_track_error,
            Opt(self.direction_to_steer.as_char()),
            self.cross_track_units,
            flag(self.arrived, 'A', 'V'),
            flag(self.perpendicular_passed, 'A', 'V'),
            self.bearing_origin_to_destination.degrees,
            self.bearing_origin_to_destination.reference(),
            self.destination_waypoint,
            self.bearing_present_to_destination.degrees,
            self.bearing_present_to_destination.reference(),
            self.heading_to_steer.degrees,
            self.heading_to_steer.reference(),
        )?;
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "$ECAPB,A,A,2.345,L,N,V,V,266.243,T,001,266.197,T,266.197,T*35";

    #[test]
    fn test_apb_decode() {
        let apb = APB::decode(SENTENCE);
        assert!(!apb.unreliable_fix);
        assert!(!apb.cycle_lock_warning);
        assert_eq!(apb.cross_track_error, 2.345);
        assert_eq!(apb.cross_track_units, 'N');
        assert_eq!(apb.direction_to_steer, Laterality::Left);
        assert!(!apb.arrived);
        assert!(!apb.perpendicular_passed);
        assert_eq!(apb.bearing_origin_to_destination, Heading::true_north(266.243));
        assert_eq!(apb.destination_waypoint, "001");
        assert_eq!(apb.bearing_present_to_destination, Heading::true_north(266.197));
        assert_eq!(apb.heading_to_steer, Heading::true_north(266.197));
    }

    #[test]
    fn test_apb_encode() {
        let sentence = APB::decode(SENTENCE).encode().unwrap();
        assert_eq!(sentence.as_str(), "$ECAPB,A,A,2.345,L,N,V,V,266.243,T,001,266.197,T,266.197,T*35\r\n");
    }

    #[test]
    fn test_apb_magnetic_bearings() {
        let apb = APB::decode("$GPAPB,V,V,0.100,R,N,A,A,011.000,M,DEST,012.000,M,013.000,M*00");
        assert!(apb.unreliable_fix);
        assert!(apb.cycle_lock_warning);
        assert_eq!(apb.direction_to_steer, Laterality::Right);
        assert!(apb.arrived);
        assert!(apb.perpendicular_passed);
        assert_eq!(apb.bearing_origin_to_destination, Heading::magnetic(11.0));
        assert_eq!(apb.destination_waypoint, "DEST");
        assert_eq!(apb.heading_to_steer, Heading::magnetic(13.0));

        let sentence = apb.encode_as("GP").unwrap();
        assert!(
            sentence
                .as_str()
                .starts_with("$GPAPB,V,V,0.100,R,N,A,A,11.000,M,DEST,12.000,M,13.000,M*")
        );
    }
}
