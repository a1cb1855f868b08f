//! Fixed-length SeaTalk datagrams, grouped by what they report.
//!
//! Bit layouts follow Thomas Knauf's SeaTalk reference,
//! <http://www.thomasknauf.de/seatalk.htm>.

macro_rules! datagram {
    (
        $(#[$meta:meta])*
        $name:ident { command: $command:literal, len: $len:literal }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            bytes: [u8; $len],
        }

        impl $name {
            pub const COMMAND: u8 = $command;
            pub const LEN: usize = $len;

            /// Wraps `bytes` if it holds exactly one datagram with this command byte.
            pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
                let bytes: [u8; $len] = bytes.try_into().ok()?;
                (bytes[0] == Self::COMMAND).then_some($name { bytes })
            }
        }

        impl $crate::RawMessage for $name {
            fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }
        }
    };
}

mod autopilot;
mod environment;
mod navigation;
mod position;

pub use autopilot::*;
pub use environment::*;
pub use navigation::*;
pub use position::*;

/// Packs a whole-degree compass heading as used by the 0x84 and 0x9C datagrams.
///
/// Returns the flag bits of byte 1 (quadrant in bits 4-5, turning right in bit 6, odd degree
/// in bit 7) and the 2-degree steps for the low six bits of byte 2.
fn pack_compass_heading(degrees: u16, turning_right: bool) -> (u8, u8) {
    let degrees = degrees % 360;
    let quadrant = (degrees / 90) as u8;
    let remainder = degrees % 90;

    let mut flags = quadrant << 4 | ((remainder % 2) as u8) << 7;
    if turning_right {
        flags |= 0x40;
    }

    (flags, (remainder / 2) as u8 & 0x3F)
}

fn unpack_compass_heading(byte1: u8, byte2: u8) -> u16 {
    ((byte1 >> 4) & 0x03) as u16 * 90 + (byte2 & 0x3F) as u16 * 2 + (byte1 >> 7) as u16
}

/// Rounds `value` to a fixed-point integer with `scale` steps per unit, saturating.
fn fixed_point(value: f32, scale: f32) -> u16 {
    (value * scale).round() as u16
}

/// Degrees as half-degree steps in `0..720`.
fn half_degrees(degrees: f32) -> u16 {
    fixed_point(degrees.rem_euclid(360.0), 2.0) % 720
}

/// The last four characters of `name`, upper-cased.
fn last_four_upper(name: &str) -> heapless::Vec<u8, 4> {
    let skip = name.chars().count().saturating_sub(4);
    name.chars()
        .skip(skip)
        .map(|c| if c.is_ascii() { c.to_ascii_uppercase() as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_heading_packing() {
        assert_eq!(pack_compass_heading(237, false), (0xA0, 0x1C));
        assert_eq!(pack_compass_heading(237, true), (0xE0, 0x1C));
        assert_eq!(pack_compass_heading(0, false), (0x00, 0x00));
        assert_eq!(pack_compass_heading(360, false), (0x00, 0x00));

        for degrees in 0..360 {
            let (flags, steps) = pack_compass_heading(degrees, true);
            assert_eq!(unpack_compass_heading(flags, steps), degrees);
        }
    }

    #[test]
    fn test_half_degrees() {
        assert_eq!(half_degrees(149.9), 300);
        assert_eq!(half_degrees(359.9), 0);
        assert_eq!(half_degrees(-90.0), 540);
    }

    #[test]
    fn test_last_four_upper() {
        assert_eq!(last_four_upper("superduper").as_slice(), b"UPER");
        assert_eq!(last_four_upper("001").as_slice(), b"001");
        assert_eq!(last_four_upper("").as_slice(), b"");
    }
}
