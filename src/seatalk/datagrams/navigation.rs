use super::{fixed_point, half_degrees, last_four_upper};
use crate::{Heading, Laterality};

/// Longest waypoint name carried by the 0x82 and 0xA2 datagrams.
pub const WAYPOINT_NAME_LEN: usize = 4;

datagram! {
    /// 0x82 - Target waypoint name
    ///
    /// ```text
    /// 82 05 XX xx YY yy ZZ zz
    /// ```
    ///
    /// Four characters of six bits each (`char - 0x30`) packed into `XX`, `YY` and `ZZ`.
    /// Each of those is followed by its bitwise complement.
    TargetWaypointName { command: 0x82, len: 8 }
}

impl TargetWaypointName {
    /// Keeps the last four characters of `name`, upper-cased; shorter names are padded on
    /// the left with `'0'`.
    pub fn new(name: &str) -> Self {
        let name = last_four_upper(name);
        let mut codes = [0u8; WAYPOINT_NAME_LEN];
        for (code, &c) in codes.iter_mut().rev().zip(name.iter().rev()) {
            *code = c.wrapping_sub(0x30) & 0x3F;
        }

        let [c0, c1, c2, c3] = codes;
        let first = c0 | c1 << 6;
        let second = (c1 >> 2) & 0x0F | c2 << 4;
        let third = (c2 >> 4) & 0x03 | c3 << 2;

        TargetWaypointName {
            bytes: [
                Self::COMMAND,
                0x05,
                first,
                !first,
                second,
                !second,
                third,
                !third,
            ],
        }
    }

    pub fn name(&self) -> heapless::String<WAYPOINT_NAME_LEN> {
        let [_, _, first, _, second, _, third, _] = self.bytes;
        let codes = [
            first & 0x3F,
            first >> 6 | (second & 0x0F) << 2,
            second >> 4 | (third & 0x03) << 4,
            third >> 2,
        ];

        codes.iter().map(|&code| (code + 0x30) as char).collect()
    }

    /// Every data byte is followed by its complement.
    pub fn is_valid(&self) -> bool {
        self.bytes[2..]
            .chunks_exact(2)
            .all(|pair| pair[0] ^ pair[1] == 0xFF)
    }
}

datagram! {
    /// 0x85 - Navigation to waypoint
    ///
    /// ```text
    /// 85 X6 XX VU ZW ZZ YF 00 yf
    /// ```
    ///
    /// - Cross-track error `XXX / 100` nautical miles.
    /// - Bearing to destination `(U & 0x3) * 90 + WV / 2` degrees, true when `U & 0x8`.
    /// - Distance to destination `ZZZ / 100` nautical miles when `Y & 1`, `ZZZ / 10` otherwise.
    /// - `Y & 4` asks to steer right; `F` flags which fields are valid.
    /// - `yf` is the complement of `YF`.
    NavigationToWaypoint { command: 0x85, len: 9 }
}

impl NavigationToWaypoint {
    /// Largest cross-track error the datagram carries, in nautical miles.
    pub const MAX_CROSS_TRACK_ERROR: f32 = 40.95;

    /// Largest distance the datagram carries, in nautical miles.
    pub const MAX_DISTANCE: f32 = 409.5;

    /// Distances below this are sent in hundredths of a mile, others in tenths.
    const FINE_DISTANCE_LIMIT: f32 = 10.0;

    /// `mode` holds the field-validity flags sent in the low nibble of `YF`. Larger
    /// cross-track errors and distances are capped.
    pub fn new(
        cross_track_error: f32,
        bearing: Heading,
        distance: f32,
        steer: Laterality,
        mode: u8,
    ) -> Self {
        let cross_track =
            fixed_point(cross_track_error.min(Self::MAX_CROSS_TRACK_ERROR), 100.0);

        let half = half_degrees(bearing.degrees);
        let quadrant = (half / 180) as u8;
        let steps = (half % 180) as u8;

        let (distance, fine) = if distance < Self::FINE_DISTANCE_LIMIT {
            (fixed_point(distance, 100.0), true)
        } else {
            (fixed_point(distance.min(Self::MAX_DISTANCE), 10.0), false)
        };

        let mut flags = mode & 0x0F;
        if fine {
            flags |= 0x10;
        }
        if steer == Laterality::Right {
            flags |= 0x40;
        }

        let reference = if bearing.is_magnetic { 0x00 } else { 0x08 };

        NavigationToWaypoint {
            bytes: [
                Self::COMMAND,
                ((cross_track & 0x0F) as u8) << 4 | 0x06,
                (cross_track >> 4) as u8,
                quadrant | reference | (steps & 0x0F) << 4,
                (steps >> 4) & 0x0F | ((distance & 0x0F) as u8) << 4,
                (distance >> 4) as u8,
                flags,
                0x00,
                !flags,
            ],
        }
    }

    /// Cross-track error in nautical miles.
    pub fn cross_track_error(&self) -> f32 {
        let raw = (self.bytes[2] as u16) << 4 | (self.bytes[1] >> 4) as u16;
        raw as f32 / 100.0
    }

    pub fn bearing(&self) -> Heading {
        let [_, _, _, bearing, mixed, ..] = self.bytes;
        let steps = (bearing >> 4) | (mixed & 0x0F) << 4;
        let half = (bearing & 0x03) as u16 * 180 + steps as u16;
        let degrees = half as f32 / 2.0;

        if bearing & 0x08 != 0 {
            Heading::true_north(degrees)
        } else {
            Heading::magnetic(degrees)
        }
    }

    /// Distance to destination in nautical miles.
    pub fn distance(&self) -> f32 {
        let raw = (self.bytes[4] >> 4) as u16 | (self.bytes[5] as u16) << 4;
        if self.bytes[6] & 0x10 != 0 {
            raw as f32 / 100.0
        } else {
            raw as f32 / 10.0
        }
    }

    pub fn direction_to_steer(&self) -> Laterality {
        if self.bytes[6] & 0x40 != 0 {
            Laterality::Right
        } else {
            Laterality::Left
        }
    }

    /// Field-validity flags: bit 0 cross-track error, bit 1 bearing, bit 2 distance,
    /// bit 3 cross-track error above 0.3 nautical miles.
    pub fn mode(&self) -> u8 {
        self.bytes[6] & 0x0F
    }

    /// The flag byte is followed by its complement.
    pub fn is_valid(&self) -> bool {
        self.bytes[6] ^ self.bytes[8] == 0xFF
    }
}

datagram! {
    /// 0xA2 - Arrival info
    ///
    /// ```text
    /// A2 X4 00 WW XX YY ZZ
    /// ```
    ///
    /// `X & 0x2` once the perpendicular is passed, `X & 0x4` once the arrival circle is
    /// entered. `WW` to `ZZ` are the last four characters of the waypoint name in ASCII.
    ArrivalInfo { command: 0xA2, len: 7 }
}

impl ArrivalInfo {
    /// Keeps the last four characters of `name`, upper-cased; shorter names are padded on
    /// the left with NUL.
    pub fn new(perpendicular_passed: bool, circle_entered: bool, name: &str) -> Self {
        let mut flags = 0x04;
        if perpendicular_passed {
            flags |= 0x20;
        }
        if circle_entered {
            flags |= 0x40;
        }

        let mut bytes = [Self::COMMAND, flags, 0x00, 0x00, 0x00, 0x00, 0x00];
        for (byte, &c) in bytes.iter_mut().rev().zip(last_four_upper(name).iter().rev()) {
            *byte = c;
        }

        ArrivalInfo { bytes }
    }

    pub fn perpendicular_passed(&self) -> bool {
        self.bytes[1] & 0x20 != 0
    }

    pub fn circle_entered(&self) -> bool {
        self.bytes[1] & 0x40 != 0
    }

    /// The waypoint name without padding.
    pub fn name(&self) -> heapless::String<WAYPOINT_NAME_LEN> {
        self.bytes[3..]
            .iter()
            .filter(|&&byte| byte != 0)
            .map(|&byte| if byte.is_ascii() { byte as char } else { '?' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawMessage;

    #[test]
    fn test_target_waypoint_name() {
        let target = TargetWaypointName::new("0001");
        assert_eq!(
            target.as_bytes(),
            &[0x82, 0x05, 0x00, 0xFF, 0x00, 0xFF, 0x04, 0xFB]
        );
        assert_eq!(target.name(), "0001");
        assert!(target.is_valid());
    }

    #[test]
    fn test_target_waypoint_name_normalization() {
        assert_eq!(TargetWaypointName::new("asDf").name(), "ASDF");
        assert_eq!(TargetWaypointName::new("superduper").name(), "UPER");
        assert_eq!(TargetWaypointName::new("1").name(), "0001");
        assert_eq!(
            TargetWaypointName::new("1").as_bytes(),
            TargetWaypointName::new("0001").as_bytes()
        );
    }

    #[test]
    fn test_target_waypoint_name_corrupted() {
        let target =
            TargetWaypointName::from_bytes(&[0x82, 0x05, 0x00, 0xFF, 0x00, 0xFE, 0x04, 0xFB])
                .unwrap();
        assert!(!target.is_valid());
        assert_eq!(target.name(), "0001");
    }

    #[test]
    fn test_navigation_to_waypoint_encode() {
        let navigation = NavigationToWaypoint::new(
            2.61,
            Heading::magnetic(230.0),
            5.13,
            Laterality::Left,
            7,
        );
        assert_eq!(
            navigation.as_bytes(),
            &[0x85, 0x56, 0x10, 0x42, 0x16, 0x20, 0x17, 0x00, 0xE8]
        );
    }

    #[test]
    fn test_navigation_to_waypoint_decode() {
        let navigation = NavigationToWaypoint::from_bytes(&[
            0x85, 0x56, 0x10, 0x42, 0x16, 0x20, 0x17, 0x00, 0xE8,
        ])
        .unwrap();

        assert_eq!(navigation.cross_track_error(), 2.61);
        assert_eq!(navigation.bearing(), Heading::magnetic(230.0));
        assert_eq!(navigation.distance(), 5.13);
        assert_eq!(navigation.direction_to_steer(), Laterality::Left);
        assert_eq!(navigation.mode(), 7);
        assert!(navigation.is_valid());
    }

    #[test]
    fn test_navigation_to_waypoint_coarse_distance() {
        let navigation = NavigationToWaypoint::new(
            0.0,
            Heading::true_north(45.5),
            123.4,
            Laterality::Right,
            0x0F,
        );

        assert_eq!(navigation.distance(), 123.4);
        assert_eq!(navigation.bearing(), Heading::true_north(45.5));
        assert_eq!(navigation.direction_to_steer(), Laterality::Right);
        assert_eq!(navigation.mode(), 0x0F);
        assert_eq!(navigation.as_bytes()[6] & 0x10, 0);
        assert!(navigation.is_valid());

        let capped = NavigationToWaypoint::new(
            99.0,
            Heading::magnetic(0.0),
            1000.0,
            Laterality::Left,
            0,
        );
        assert_eq!(capped.cross_track_error(), 40.95);
        assert_eq!(capped.distance(), 409.5);
    }

    #[test]
    fn test_arrival_info() {
        let arrival = ArrivalInfo::new(false, true, "001");
        assert_eq!(
            arrival.as_bytes(),
            &[0xA2, 0x44, 0x00, 0x00, b'0', b'0', b'1']
        );
        assert!(arrival.circle_entered());
        assert!(!arrival.perpendicular_passed());
        assert_eq!(arrival.name(), "001");

        let arrival = ArrivalInfo::new(true, false, "superduper");
        assert_eq!(arrival.as_bytes(), &[0xA2, 0x24, 0x00, b'U', b'P', b'E', b'R']);
        assert_eq!(arrival.name(), "UPER");
    }
}
