use super::{half_degrees, pack_compass_heading, unpack_compass_heading};

datagram! {
    /// 0x84 - Compass heading, autopilot course and rudder position
    ///
    /// ```text
    /// 84 U6 VW XY 0Z 0M RR SS TT
    /// ```
    ///
    /// - Heading `(U & 0x3) * 90 + (VW & 0x3F) * 2 + (U & 0x8) / 8` degrees; `U & 0x4` while
    ///   turning right.
    /// - Autopilot course `(V & 0xC) / 4 * 90 + XY / 2` degrees.
    /// - `Z` holds the autopilot mode, `M` the alarms, `RR` the signed rudder position.
    CompassHeadingAutopilot { command: 0x84, len: 9 }
}

impl CompassHeadingAutopilot {
    /// Autopilot steers to the set course; standby when clear
    pub const MODE_AUTO: u8 = 0x02;
    /// Autopilot steers to the apparent wind
    pub const MODE_VANE: u8 = 0x04;
    /// Autopilot steers along the track to a waypoint
    pub const MODE_TRACK: u8 = 0x08;

    /// `heading` in whole degrees, `mode` a combination of the `MODE_*` flags.
    pub fn new(
        heading: u16,
        turning_right: bool,
        autopilot_course: f32,
        mode: u8,
        rudder: i8,
    ) -> Self {
        let (flags, steps) = pack_compass_heading(heading, turning_right);
        let course = half_degrees(autopilot_course);
        let course_quadrant = (course / 180) as u8;

        CompassHeadingAutopilot {
            bytes: [
                Self::COMMAND,
                flags | 0x06,
                steps | course_quadrant << 6,
                (course % 180) as u8,
                mode & 0x0F,
                0x00,
                rudder as u8,
                0x00,
                0x08,
            ],
        }
    }

    /// Compass heading in whole degrees.
    pub fn heading(&self) -> u16 {
        unpack_compass_heading(self.bytes[1], self.bytes[2])
    }

    pub fn turning_right(&self) -> bool {
        self.bytes[1] & 0x40 != 0
    }

    /// Course the autopilot steers, in degrees.
    pub fn autopilot_course(&self) -> f32 {
        let half = (self.bytes[2] >> 6) as u16 * 180 + self.bytes[3] as u16;
        half as f32 / 2.0
    }

    pub fn is_standby(&self) -> bool {
        self.bytes[4] & Self::MODE_AUTO == 0
    }

    pub fn is_auto_mode(&self) -> bool {
        self.bytes[4] & Self::MODE_AUTO != 0
    }

    pub fn is_vane_mode(&self) -> bool {
        self.bytes[4] & Self::MODE_VANE != 0
    }

    pub fn is_track_mode(&self) -> bool {
        self.bytes[4] & Self::MODE_TRACK != 0
    }

    pub fn off_course_alarm(&self) -> bool {
        self.bytes[5] & 0x04 != 0
    }

    pub fn wind_shift_alarm(&self) -> bool {
        self.bytes[5] & 0x08 != 0
    }

    /// Rudder position in degrees, positive to starboard.
    pub fn rudder(&self) -> i8 {
        self.bytes[6] as i8
    }
}

datagram! {
    /// 0x92 - Set autopilot parameter
    ///
    /// ```text
    /// 92 02 XX YY 00
    /// ```
    ///
    /// Sets parameter `XX` to `YY`.
    SetAutopilotParameter { command: 0x92, len: 5 }
}

impl SetAutopilotParameter {
    pub fn new(parameter: u8, value: u8) -> Self {
        SetAutopilotParameter {
            bytes: [Self::COMMAND, 0x02, parameter, value, 0x00],
        }
    }

    pub fn parameter(&self) -> u8 {
        self.bytes[2]
    }

    pub fn value(&self) -> u8 {
        self.bytes[3]
    }
}

datagram! {
    /// 0x9C - Compass heading and rudder position
    ///
    /// ```text
    /// 9C U1 VW RR
    /// ```
    ///
    /// Short form of [`CompassHeadingAutopilot`] with the same heading layout.
    CompassHeadingRudder { command: 0x9C, len: 4 }
}

impl CompassHeadingRudder {
    /// `heading` in whole degrees, `rudder` in degrees positive to starboard.
    pub fn new(heading: u16, turning_right: bool, rudder: i8) -> Self {
        let (flags, steps) = pack_compass_heading(heading, turning_right);
        CompassHeadingRudder {
            bytes: [Self::COMMAND, flags | 0x01, steps, rudder as u8],
        }
    }

    /// Compass heading in whole degrees.
    pub fn heading(&self) -> u16 {
        unpack_compass_heading(self.bytes[1], self.bytes[2])
    }

    pub fn turning_right(&self) -> bool {
        self.bytes[1] & 0x40 != 0
    }

    /// Rudder position in degrees, positive to starboard.
    pub fn rudder(&self) -> i8 {
        self.bytes[3] as i8
    }
}

datagram! {
    /// 0xA4 - Device query
    ///
    /// ```text
    /// A4 02 00 00 00
    /// A4 12 II VV WW
    /// ```
    ///
    /// The first form asks every device on the bus to identify itself; devices answer with
    /// the second, carrying their unit ID and main and minor software versions.
    DeviceQuery { command: 0xA4, len: 5 }
}

impl DeviceQuery {
    /// The broadcast query.
    pub fn new() -> Self {
        DeviceQuery {
            bytes: [Self::COMMAND, 0x02, 0x00, 0x00, 0x00],
        }
    }

    pub fn is_broadcast(&self) -> bool {
        self.bytes[1] == 0x02
    }

    /// Unit ID of an answering device, [`None`] for the broadcast query.
    pub fn unit_id(&self) -> Option<u8> {
        (self.bytes[1] == 0x12).then_some(self.bytes[2])
    }
}

impl Default for DeviceQuery {
    fn default() -> Self {
        DeviceQuery::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawMessage;

    const ST1000: [u8; 9] = [0x84, 0xA6, 0x1C, 0x00, 0x04, 0x00, 0xFC, 0x00, 0x08];

    #[test]
    fn test_compass_heading_autopilot_decode() {
        let heading = CompassHeadingAutopilot::from_bytes(&ST1000).unwrap();

        assert_eq!(heading.heading(), 237);
        assert!(!heading.turning_right());
        assert_eq!(heading.autopilot_course(), 0.0);
        assert!(heading.is_vane_mode());
        assert!(!heading.is_auto_mode());
        assert!(heading.is_standby());
        assert!(!heading.is_track_mode());
        assert!(!heading.off_course_alarm());
        assert!(!heading.wind_shift_alarm());
        assert_eq!(heading.rudder(), -4);
    }

    #[test]
    fn test_compass_heading_autopilot_encode() {
        let heading = CompassHeadingAutopilot::new(
            237,
            false,
            0.0,
            CompassHeadingAutopilot::MODE_VANE,
            -4,
        );
        assert_eq!(heading.as_bytes(), &ST1000);

        let heading = CompassHeadingAutopilot::new(
            91,
            true,
            271.5,
            CompassHeadingAutopilot::MODE_AUTO | CompassHeadingAutopilot::MODE_TRACK,
            12,
        );
        assert_eq!(heading.heading(), 91);
        assert!(heading.turning_right());
        assert_eq!(heading.autopilot_course(), 271.5);
        assert!(heading.is_auto_mode());
        assert!(heading.is_track_mode());
        assert!(!heading.is_standby());
        assert_eq!(heading.rudder(), 12);
    }

    #[test]
    fn test_compass_heading_autopilot_alarms() {
        let mut bytes = ST1000;
        bytes[5] = 0x0C;
        let heading = CompassHeadingAutopilot::from_bytes(&bytes).unwrap();
        assert!(heading.off_course_alarm());
        assert!(heading.wind_shift_alarm());
    }

    #[test]
    fn test_set_autopilot_parameter() {
        let parameter = SetAutopilotParameter::new(0x0C, 14);
        assert_eq!(parameter.as_bytes(), &[0x92, 0x02, 0x0C, 0x0E, 0x00]);
        assert_eq!(parameter.parameter(), 0x0C);
        assert_eq!(parameter.value(), 14);
    }

    #[test]
    fn test_compass_heading_rudder() {
        let heading = CompassHeadingRudder::new(237, false, 0);
        assert_eq!(heading.as_bytes(), &[0x9C, 0xA1, 0x1C, 0x00]);

        let heading = CompassHeadingRudder::from_bytes(&[0x9C, 0xA1, 0x1C, 0xFC]).unwrap();
        assert_eq!(heading.heading(), 237);
        assert!(!heading.turning_right());
        assert_eq!(heading.rudder(), -4);

        let heading = CompassHeadingRudder::new(359, true, 30);
        assert_eq!(heading.heading(), 359);
        assert!(heading.turning_right());
        assert_eq!(heading.rudder(), 30);
    }

    #[test]
    fn test_device_query() {
        let query = DeviceQuery::new();
        assert_eq!(query.as_bytes(), &[0xA4, 0x02, 0x00, 0x00, 0x00]);
        assert!(query.is_broadcast());
        assert_eq!(query.unit_id(), None);

        let answer = DeviceQuery::from_bytes(&[0xA4, 0x12, 0x05, 0x01, 0x02]).unwrap();
        assert!(!answer.is_broadcast());
        assert_eq!(answer.unit_id(), Some(0x05));
    }
}
