use super::fixed_point;

datagram! {
    /// 0x00 - Depth below transducer
    ///
    /// ```text
    /// 00 02 YZ XX XX
    /// ```
    ///
    /// Depth is `XXXX / 10` feet, little-endian. Alarm and unit flags live in byte 2.
    Depth { command: 0x00, len: 5 }
}

impl Depth {
    /// Depth in feet, rounded to a tenth.
    pub fn new(feet: f32) -> Self {
        let [low, high] = fixed_point(feet, 10.0).to_le_bytes();
        Depth {
            bytes: [Self::COMMAND, 0x02, 0x00, low, high],
        }
    }

    pub fn feet(&self) -> f32 {
        u16::from_le_bytes([self.bytes[3], self.bytes[4]]) as f32 / 10.0
    }

    pub fn meters(&self) -> f32 {
        self.feet() * 0.3048
    }

    pub fn anchor_alarm(&self) -> bool {
        self.bytes[2] & 0x80 != 0
    }

    /// The instrument displays metric units.
    pub fn metric_display(&self) -> bool {
        self.bytes[2] & 0x40 != 0
    }

    pub fn transducer_defective(&self) -> bool {
        self.bytes[2] & 0x04 != 0
    }

    pub fn deep_alarm(&self) -> bool {
        self.bytes[2] & 0x02 != 0
    }

    pub fn shallow_alarm(&self) -> bool {
        self.bytes[2] & 0x01 != 0
    }
}

datagram! {
    /// 0x10 - Apparent wind angle
    ///
    /// ```text
    /// 10 01 XX YY
    /// ```
    ///
    /// `XXYY / 2` degrees right of the bow, big-endian.
    WindAngle { command: 0x10, len: 4 }
}

impl WindAngle {
    pub fn new(degrees: f32) -> Self {
        let [high, low] = super::half_degrees(degrees).to_be_bytes();
        WindAngle {
            bytes: [Self::COMMAND, 0x01, high, low],
        }
    }

    pub fn degrees(&self) -> f32 {
        u16::from_be_bytes([self.bytes[2], self.bytes[3]]) as f32 / 2.0
    }
}

datagram! {
    /// 0x11 - Apparent wind speed
    ///
    /// ```text
    /// 11 01 XX 0Y
    /// ```
    ///
    /// `(XX & 0x7F) + Y / 10` knots. Bit 7 of `XX` selects meters per second on the display.
    WindSpeed { command: 0x11, len: 4 }
}

impl WindSpeed {
    pub fn new(knots: f32) -> Self {
        let tenths = fixed_point(knots, 10.0);
        WindSpeed {
            bytes: [
                Self::COMMAND,
                0x01,
                (tenths / 10).min(0x7F) as u8,
                (tenths % 10) as u8,
            ],
        }
    }

    pub fn knots(&self) -> f32 {
        let tenths = (self.bytes[2] & 0x7F) as u16 * 10 + (self.bytes[3] & 0x0F) as u16;
        tenths as f32 / 10.0
    }

    pub fn metric_display(&self) -> bool {
        self.bytes[2] & 0x80 != 0
    }
}

datagram! {
    /// 0x20 - Speed through water
    ///
    /// ```text
    /// 20 01 XX XX
    /// ```
    ///
    /// `XXXX / 10` knots, little-endian.
    SpeedThroughWater { command: 0x20, len: 4 }
}

impl SpeedThroughWater {
    pub fn new(knots: f32) -> Self {
        let [low, high] = fixed_point(knots, 10.0).to_le_bytes();
        SpeedThroughWater {
            bytes: [Self::COMMAND, 0x01, low, high],
        }
    }

    pub fn knots(&self) -> f32 {
        u16::from_le_bytes([self.bytes[2], self.bytes[3]]) as f32 / 10.0
    }
}

datagram! {
    /// 0x23 - Water temperature
    ///
    /// ```text
    /// 23 Z1 XX YY
    /// ```
    ///
    /// `XX` degrees Celsius, `YY` degrees Fahrenheit. `Z & 4` flags a defective or
    /// disconnected sensor.
    WaterTemperature { command: 0x23, len: 4 }
}

impl WaterTemperature {
    pub fn new(celsius: f32) -> Self {
        WaterTemperature {
            bytes: [
                Self::COMMAND,
                0x01,
                celsius.round() as i8 as u8,
                (celsius * 1.8 + 32.0).round() as u8,
            ],
        }
    }

    pub fn celsius(&self) -> f32 {
        self.bytes[2] as i8 as f32
    }

    pub fn fahrenheit(&self) -> f32 {
        self.bytes[3] as f32
    }

    pub fn sensor_defective(&self) -> bool {
        self.bytes[1] & 0x40 != 0
    }
}

datagram! {
    /// 0x30 - Set lamp intensity
    ///
    /// ```text
    /// 30 00 0X
    /// ```
    ///
    /// `X` is 0, 4, 8 or 12 for levels L0 to L3.
    LampIntensity { command: 0x30, len: 3 }
}

impl LampIntensity {
    /// Intensity level 0 to 3, higher levels are capped.
    pub fn new(level: u8) -> Self {
        LampIntensity {
            bytes: [Self::COMMAND, 0x00, level.min(3) * 4],
        }
    }

    pub fn level(&self) -> u8 {
        (self.bytes[2] & 0x0F) / 4
    }
}
