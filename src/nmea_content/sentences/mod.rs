macro_rules! indicator_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $char:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Maps an indicator letter, in either case, to its variant.
            pub fn from_char(c: char) -> Option<Self> {
                match c.to_ascii_uppercase() {
                    $($char => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The indicator letter as sent on the wire.
            pub const fn as_char(&self) -> char {
                match self {
                    $(Self::$variant => $char,)*
                }
            }

            /// Reads a single-letter fragment; the default variant for anything else.
            pub(crate) fn from_fragment(fragment: &str) -> Self {
                let mut chars = fragment.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c).unwrap_or_default(),
                    _ => Self::default(),
                }
            }
        }
    };
}

mod apb;
mod dbt;
mod gll;
mod hdm;
mod mwv;
mod rmb;
mod rmc;
mod sea;
mod vhw;

pub use apb::APB;
pub use dbt::DBT;
pub use gll::GLL;
pub use hdm::HDM;
pub use mwv::{MWV, SpeedUnit, WindReference};
pub use rmb::RMB;
pub use rmc::RMC;
pub use sea::SEA;
pub use vhw::VHW;

use crate::{
    IResult, MessageError,
    nmea_content::{Decode, Encode, Fields, Sentence},
};

/// A closed enum over every NMEA 0183 sentence type this crate understands.
///
/// [`NmeaSentence::decode`] reads the three-letter sentence identifier that follows the
/// two-letter talker ID and hands the fragments to the matching decoder. Unrecognized
/// identifiers are not an error: the sentence is kept verbatim in
/// [`NmeaSentence::Unknown`] so it can be forwarded unchanged.
///
/// ## Usage with Framing Parser
///
/// ```rust
/// use nmea_seatalk::{Nmea0183ParserBuilder, nmea_content::NmeaSentence};
/// use nom::Parser;
///
/// let mut parser = Nmea0183ParserBuilder::new().build(NmeaSentence::parser);
///
/// let (_, sentence) = parser.parse("$WIMWV,315.4,R,12.2,N,A*11\r\n").unwrap();
/// match sentence {
///     NmeaSentence::MWV(mwv) => {
///         assert_eq!(mwv.angle, 315.4);
///         assert_eq!(mwv.speed, 12.2);
///     }
///     _ => unreachable!(),
/// }
///
/// let (_, sentence) = parser.parse("$GPGGA,123456,data*41\r\n").unwrap();
/// assert_eq!(sentence, NmeaSentence::Unknown("GPGGA,123456,data"));
/// ```
///
/// ## Supported Sentence Types
///
/// | Variant      | Sentence Type                                     | Direction               |
/// |--------------|---------------------------------------------------|-------------------------|
/// | APB([`APB`]) | Autopilot Sentence "B"                            | autopilot input         |
/// | DBT([`DBT`]) | Depth Below Transducer                            | depth                   |
/// | GLL([`GLL`]) | Geographic Position - Latitude/Longitude          | position and time       |
/// | HDM([`HDM`]) | Heading - Magnetic                                | heading                 |
/// | MWV([`MWV`]) | Wind Speed and Angle                              | wind                    |
/// | RMB([`RMB`]) | Recommended Minimum Navigation Information        | waypoint navigation     |
/// | RMC([`RMC`]) | Recommended Minimum Specific GNSS Data            | position, speed, date   |
/// | SEA([`SEA`]) | SeaTalk datagram tunneled through NMEA            | raw SeaTalk             |
/// | VHW([`VHW`]) | Water Speed and Heading                           | speed through water     |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NmeaSentence<'a> {
    /// Autopilot Sentence "B"
    #[cfg_attr(feature = "serde", serde(borrow))]
    APB(APB<'a>),
    /// Depth Below Transducer
    DBT(DBT),
    /// Geographic Position - Latitude/Longitude
    GLL(GLL),
    /// Heading - Magnetic
    HDM(HDM),
    /// Wind Speed and Angle
    MWV(MWV),
    /// Recommended Minimum Navigation Information
    #[cfg_attr(feature = "serde", serde(borrow))]
    RMB(RMB<'a>),
    /// Recommended Minimum Specific GNSS Data
    RMC(RMC),
    /// SeaTalk datagram
    SEA(SEA),
    /// Water Speed and Heading
    VHW(VHW),
    /// Any other sentence, kept as received
    Unknown(&'a str),
}

impl<'a> NmeaSentence<'a> {
    /// Decodes a full sentence or its bare content. Never fails.
    pub fn decode(sentence: &'a str) -> Self {
        let fields = Fields::new(sentence);

        match fields.sentence_type() {
            "APB" => Self::APB(APB::from_fields(&fields)),
            "DBT" => Self::DBT(DBT::from_fields(&fields)),
            "GLL" => Self::GLL(GLL::from_fields(&fields)),
            "HDM" => Self::HDM(HDM::from_fields(&fields)),
            "MWV" => Self::MWV(MWV::from_fields(&fields)),
            "RMB" => Self::RMB(RMB::from_fields(&fields)),
            "RMC" => Self::RMC(RMC::from_fields(&fields)),
            "SEA" => Self::SEA(SEA::from_fields(&fields)),
            "VHW" => Self::VHW(VHW::from_fields(&fields)),
            _ => {
                log::debug!("unrecognized NMEA sentence {:?}", fields.address());
                Self::Unknown(sentence)
            }
        }
    }

    /// Content parser for [`Nmea0183ParserBuilder::build`](crate::Nmea0183ParserBuilder::build).
    ///
    /// Consumes the whole content and always succeeds.
    pub fn parser(i: &'a str) -> IResult<&'a str, Self> {
        Ok(("", Self::decode(i)))
    }

    /// Encodes the sentence with its default talker ID.
    ///
    /// [`NmeaSentence::Unknown`] has no typed fields to encode and yields [`None`].
    pub fn encode(&self) -> Option<Result<Sentence, MessageError>> {
        match self {
            Self::APB(apb) => Some(apb.encode()),
            Self::DBT(dbt) => Some(dbt.encode()),
            Self::GLL(gll) => Some(gll.encode()),
            Self::HDM(hdm) => Some(hdm.encode()),
            Self::MWV(mwv) => Some(mwv.encode()),
            Self::RMB(rmb) => Some(rmb.encode()),
            Self::RMC(rmc) => Some(rmc.encode()),
            Self::SEA(sea) => Some(sea.encode()),
            Self::VHW(vhw) => Some(vhw.encode()),
            Self::Unknown(_) => None,
        }
    }
}
