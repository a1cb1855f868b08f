//! # SeaTalk
//!
//! SeaTalk is a binary instrument bus. Every datagram starts with a command byte, flagged by
//! a ninth bit on the wire; the low nibble of the second byte declares how many bytes follow
//! the three-byte header. There is no checksum.
//!
//! - [`SeaTalkStreamParser`] rebuilds datagrams from the 9-bit words read off the bus.
//! - [`Datagram`] holds one raw datagram of any type.
//! - One struct per supported command byte ([`Depth`], [`WindAngle`], [`Latitude`], ...)
//!   wraps the fixed-length bytes and decodes or encodes its bit-packed fields.
//! - [`SeaTalkMessage`] classifies a raw datagram by its command byte.
//!
//! ```rust
//! use nmea_seatalk::{SeaTalkStreamParser, seatalk::SeaTalkMessage};
//!
//! let mut parser = SeaTalkStreamParser::new();
//! let words = [0x110, 0x01, 0x02, 0x6E];
//!
//! let ready = words.iter().map(|&word| parser.parse(word)).last();
//! assert_eq!(ready, Some(true));
//!
//! match SeaTalkMessage::parse(parser.message().unwrap()).unwrap() {
//!     SeaTalkMessage::WindAngle(wind) => assert_eq!(wind.degrees(), 311.0),
//!     _ => unreachable!(),
//! }
//! ```

use crate::{MessageError, RawMessage};

mod datagrams;
mod stream;

pub use datagrams::*;
pub use stream::SeaTalkStreamParser;

/// Longest possible datagram: three header bytes plus up to sixteen attribute bytes.
pub const MAX_DATAGRAM_LEN: usize = 19;

/// Ninth bit of a bus word, set on the command byte that starts a datagram.
pub const COMMAND_FLAG: u16 = 0x100;

/// A raw SeaTalk datagram of any type, 1 to 19 bytes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    bytes: heapless::Vec<u8, MAX_DATAGRAM_LEN>,
}

impl Datagram {
    /// Copies `bytes` into a datagram.
    ///
    /// Fails with [`MessageError::InvalidLength`] when `bytes` is empty or longer than
    /// [`MAX_DATAGRAM_LEN`].
    pub fn new(bytes: &[u8]) -> Result<Self, MessageError> {
        if bytes.is_empty() {
            return Err(MessageError::InvalidLength { len: 0 });
        }

        let bytes = heapless::Vec::from_slice(bytes)
            .map_err(|_| MessageError::InvalidLength { len: bytes.len() })?;

        Ok(Datagram { bytes })
    }

    /// The command byte, byte 0.
    pub fn command(&self) -> u8 {
        self.bytes[0]
    }

    /// Total length declared by the low nibble of byte 1, [`None`] for a one-byte datagram.
    pub fn declared_len(&self) -> Option<usize> {
        self.bytes
            .get(1)
            .map(|attribute| (attribute & 0x0F) as usize + 3)
    }

    /// The datagram as 9-bit bus words, [`COMMAND_FLAG`] set on the command byte.
    ///
    /// ```rust
    /// use nmea_seatalk::seatalk::Datagram;
    ///
    /// let datagram = Datagram::new(&[0x99, 0x00, 0xF3]).unwrap();
    /// let mut words = datagram.bus_words();
    /// assert_eq!(words.next(), Some(0x199));
    /// assert_eq!(words.next(), Some(0x00));
    /// assert_eq!(words.next(), Some(0xF3));
    /// assert_eq!(words.next(), None);
    /// ```
    pub fn bus_words(&self) -> impl Iterator<Item = u16> + '_ {
        self.bytes.iter().enumerate().map(|(index, &byte)| match index {
            0 => COMMAND_FLAG | byte as u16,
            _ => byte as u16,
        })
    }
}

impl RawMessage for Datagram {
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

macro_rules! seatalk_messages {
    ($($(#[$meta:meta])* $variant:ident),* $(,)?) => {
        /// A SeaTalk datagram classified by its command byte.
        ///
        /// Datagrams with an unsupported command byte, or whose length does not match
        /// their command, are kept verbatim in [`SeaTalkMessage::Unknown`] so they can be
        /// forwarded unchanged.
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum SeaTalkMessage {
            $(
                $(#[$meta])*
                $variant($variant),
            )*
            /// Any other datagram, kept as received
            Unknown(Datagram),
        }

        impl SeaTalkMessage {
            /// Classifies `datagram` by its command byte, byte 0. Never fails.
            pub fn from_datagram(datagram: Datagram) -> Self {
                let bytes = datagram.as_bytes();
                let message = match datagram.command() {
                    $($variant::COMMAND => $variant::from_bytes(bytes).map(Self::$variant),)*
                    _ => None,
                };

                message.unwrap_or_else(|| {
                    log::debug!(
                        "unrecognized SeaTalk datagram, command {:#04x}, {} bytes",
                        datagram.command(),
                        datagram.len(),
                    );
                    Self::Unknown(datagram)
                })
            }

            /// The command byte, byte 0.
            pub fn command(&self) -> u8 {
                match self {
                    $(Self::$variant(_) => $variant::COMMAND,)*
                    Self::Unknown(datagram) => datagram.command(),
                }
            }
        }

        impl RawMessage for SeaTalkMessage {
            fn as_bytes(&self) -> &[u8] {
                match self {
                    $(Self::$variant(message) => message.as_bytes(),)*
                    Self::Unknown(datagram) => datagram.as_bytes(),
                }
            }
        }

        $(
            impl From<$variant> for SeaTalkMessage {
                fn from(message: $variant) -> Self {
                    Self::$variant(message)
                }
            }
        )*
    };
}

seatalk_messages! {
    /// 0x00 Depth below transducer
    Depth,
    /// 0x10 Apparent wind angle
    WindAngle,
    /// 0x11 Apparent wind speed
    WindSpeed,
    /// 0x20 Speed through water
    SpeedThroughWater,
    /// 0x23 Water temperature
    WaterTemperature,
    /// 0x30 Lamp intensity
    LampIntensity,
    /// 0x50 Latitude
    Latitude,
    /// 0x51 Longitude
    Longitude,
    /// 0x52 Speed over ground
    SpeedOverGround,
    /// 0x53 Magnetic course
    MagneticCourse,
    /// 0x54 GMT time
    GmtTime,
    /// 0x56 Date
    GmtDate,
    /// 0x82 Target waypoint name
    TargetWaypointName,
    /// 0x84 Compass heading, autopilot course and rudder position
    CompassHeadingAutopilot,
    /// 0x85 Navigation to waypoint
    NavigationToWaypoint,
    /// 0x92 Set autopilot parameter
    SetAutopilotParameter,
    /// 0x99 Magnetic variation
    MagneticVariation,
    /// 0x9C Compass heading and rudder position
    CompassHeadingRudder,
    /// 0xA2 Arrival info
    ArrivalInfo,
    /// 0xA4 Device query
    DeviceQuery,
}

impl SeaTalkMessage {
    /// Copies `bytes` into a [`Datagram`] and classifies it.
    pub fn parse(bytes: &[u8]) -> Result<Self, MessageError> {
        Datagram::new(bytes).map(Self::from_datagram)
    }

    /// The message as a raw [`Datagram`], e.g. for tunneling it through an NMEA `SEA` sentence.
    pub fn datagram(&self) -> Datagram {
        match self {
            Self::Unknown(datagram) => datagram.clone(),
            message => Datagram {
                bytes: heapless::Vec::from_slice(message.as_bytes()).unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datagram_length_bounds() {
        assert_eq!(
            Datagram::new(&[]),
            Err(MessageError::InvalidLength { len: 0 })
        );
        assert_eq!(
            Datagram::new(&[0u8; 20]),
            Err(MessageError::InvalidLength { len: 20 })
        );
        assert_eq!(Datagram::new(&[0u8; 19]).unwrap().len(), 19);

        let datagram = Datagram::new(&[0xA4]).unwrap();
        assert_eq!(datagram.command(), 0xA4);
        assert_eq!(datagram.declared_len(), None);
    }

    #[test]
    fn test_declared_len() {
        let datagram = Datagram::new(&[0x85, 0x56, 0x10]).unwrap();
        assert_eq!(datagram.declared_len(), Some(9));
    }

    #[test]
    fn test_dispatch_known_commands() {
        let message = SeaTalkMessage::parse(&[0x10, 0x11, 0x02, 0x6E]).unwrap();
        assert!(matches!(message, SeaTalkMessage::WindAngle(_)));
        assert_eq!(message.command(), 0x10);

        let message = SeaTalkMessage::parse(&[0x9C, 0xA1, 0x1C, 0xFC]).unwrap();
        match message {
            SeaTalkMessage::CompassHeadingRudder(heading) => {
                assert_eq!(heading.heading(), 237);
                assert_eq!(heading.rudder(), -4);
            }
            _ => panic!("Unexpected message {message:?}"),
        }

        let message = SeaTalkMessage::parse(&[0x00, 0x42, 0x30, 0x46, 0x05]).unwrap();
        assert!(matches!(message, SeaTalkMessage::Depth(_)));
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let bytes = [0x65, 0x00, 0x02];
        let message = SeaTalkMessage::parse(&bytes).unwrap();
        assert_eq!(
            message,
            SeaTalkMessage::Unknown(Datagram::new(&bytes).unwrap())
        );
        assert_eq!(message.command(), 0x65);
        assert_eq!(message.as_bytes(), &bytes);
    }

    #[test]
    fn test_dispatch_length_mismatch() {
        // wind angle datagram cut short
        let message = SeaTalkMessage::parse(&[0x10, 0x01, 0x02]).unwrap();
        assert!(matches!(message, SeaTalkMessage::Unknown(_)));
    }

    #[test]
    fn test_dispatch_reads_command_from_first_byte() {
        // 0x99 in byte 1 must not be taken for a magnetic variation
        let message = SeaTalkMessage::parse(&[0x01, 0x99, 0x00]).unwrap();
        assert!(matches!(message, SeaTalkMessage::Unknown(_)));
    }

    #[test]
    fn test_message_to_datagram() {
        let message: SeaTalkMessage = MagneticVariation::new(-13).into();
        let datagram = message.datagram();
        assert_eq!(datagram.as_bytes(), &[0x99, 0x00, 0xF3]);
        assert_eq!(SeaTalkMessage::from_datagram(datagram), message);
    }
}
