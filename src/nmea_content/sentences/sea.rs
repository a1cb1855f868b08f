use core::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    MessageError, RawMessage,
    nmea0183::hex_byte,
    nmea_content::{Decode, Encode, Fields, Sentence, SentenceWriter},
    seatalk::{Datagram, MAX_DATAGRAM_LEN},
};

/// SEA - SeaTalk datagram tunneled through an NMEA channel
///
/// ```text
///         1
///         |
///  $--SEA,hh...hh*hh<CR><LF>
/// ```
///
/// The single field is the raw datagram, two uppercase hex digits per byte.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SEA {
    /// [`None`] unless the field holds one complete datagram
    pub datagram: Option<Datagram>,
}

impl SEA {
    pub fn new(datagram: Datagram) -> Self {
        SEA {
            datagram: Some(datagram),
        }
    }
}

impl<'a> Decode<'a> for SEA {
    fn from_fields(fields: &Fields<'a>) -> Self {
        SEA {
            datagram: datagram_from_hex(fields.get(1)),
        }
    }
}

/// The payload must be whole hex pairs whose byte count matches the length declared in the
/// datagram header.
fn datagram_from_hex(field: &str) -> Option<Datagram> {
    let digits = field.as_bytes();
    if digits.len() % 2 != 0 || digits.len() > 2 * MAX_DATAGRAM_LEN {
        return None;
    }

    let bytes: heapless::Vec<u8, MAX_DATAGRAM_LEN> = digits
        .chunks_exact(2)
        .map(|pair| hex_byte(pair[0], pair[1]))
        .collect::<Option<_>>()?;

    let datagram = Datagram::new(&bytes).ok()?;
    (datagram.declared_len() == Some(datagram.len())).then_some(datagram)
}

impl Encode for SEA {
    const TALKER: &'static str = "ST";

    fn encode_as(&self, talker: &str) -> Result<Sentence, MessageError> {
        let mut writer = SentenceWriter::new(talker, "SEA")?;
        writer.write_char(',')?;
        for byte in self.datagram.iter().flat_map(|datagram| datagram.as_bytes()) {
            write!(writer, "{byte:02X}")?;
        }
        writer.finish()
    }
}
