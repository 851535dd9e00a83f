use core::fmt;

use heapless::Vec;

/// One sample on the sensor's native scale, widened so synthetic windows can
/// exceed the `i16` range.
pub type Sample = i32;

/// ESP-NOW payload limit.
pub const PAYLOAD_MAX: usize = 250;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GestureLabel {
    Up,
    Down,
    Left,
    Right,
    Other,
}

impl GestureLabel {
    /// Directional candidates in tie-break order.
    pub const DIRECTIONS: [GestureLabel; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Other => "other",
        }
    }

    pub const fn is_direction(self) -> bool {
        !matches!(self, Self::Other)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw 6-axis IMU output for a single poll.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Reading {
    pub ax: i16,
    pub ay: i16,
    pub az: i16,
    pub gx: i16,
    pub gy: i16,
    pub gz: i16,
}

impl Reading {
    pub const fn new(ax: i16, ay: i16, az: i16, gx: i16, gy: i16, gz: i16) -> Self {
        Self {
            ax,
            ay,
            az,
            gx,
            gy,
            gz,
        }
    }

    pub const fn axis(&self, axis: Axis) -> i16 {
        match axis {
            Axis::AccelX => self.ax,
            Axis::AccelY => self.ay,
            Axis::AccelZ => self.az,
            Axis::GyroX => self.gx,
            Axis::GyroY => self.gy,
            Axis::GyroZ => self.gz,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    AccelX,
    AccelY,
    AccelZ,
    GyroX,
    GyroY,
    GyroZ,
}

impl Axis {
    pub const ALL: [Axis; 6] = [
        Self::AccelX,
        Self::AccelY,
        Self::AccelZ,
        Self::GyroX,
        Self::GyroY,
        Self::GyroZ,
    ];

    /// Lowercase config name, e.g. `gyro_x`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AccelX => "accel_x",
            Self::AccelY => "accel_y",
            Self::AccelZ => "accel_z",
            Self::GyroX => "gyro_x",
            Self::GyroY => "gyro_y",
            Self::GyroZ => "gyro_z",
        }
    }

    pub const fn variant_name(self) -> &'static str {
        match self {
            Self::AccelX => "AccelX",
            Self::AccelY => "AccelY",
            Self::AccelZ => "AccelZ",
            Self::GyroX => "GyroX",
            Self::GyroY => "GyroY",
            Self::GyroZ => "GyroZ",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.name() == name)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which reading components feed the lateral and vertical buffers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AxisMap {
    pub lateral: Axis,
    pub vertical: Axis,
}

impl AxisMap {
    pub const fn new(lateral: Axis, vertical: Axis) -> Self {
        Self { lateral, vertical }
    }

    /// Returns `(lateral, vertical)`.
    pub const fn extract(&self, reading: &Reading) -> (Sample, Sample) {
        (
            reading.axis(self.lateral) as Sample,
            reading.axis(self.vertical) as Sample,
        )
    }
}

impl Default for AxisMap {
    fn default() -> Self {
        Self::new(Axis::GyroY, Axis::GyroX)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PeerAddress(pub [u8; 6]);

impl PeerAddress {
    pub const BROADCAST: PeerAddress = PeerAddress([0xFF; 6]);

    pub const fn octets(&self) -> &[u8; 6] {
        &self.0
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, octet) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(":")?;
            }
            write!(f, "{octet:02X}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InboundMessage {
    pub sender: PeerAddress,
    pub payload: Vec<u8, PAYLOAD_MAX>,
    pub timestamp_us: u32,
}

impl InboundMessage {
    /// Payload bytes past [`PAYLOAD_MAX`] are dropped.
    pub fn new(sender: PeerAddress, payload: &[u8], timestamp_us: u32) -> Self {
        let len = payload.len().min(PAYLOAD_MAX);
        Self {
            sender,
            payload: Vec::from_slice(&payload[..len]).unwrap_or_default(),
            timestamp_us,
        }
    }

    pub fn spell(&self) -> Option<GestureLabel> {
        crate::wire::decode_spell(&self.payload)
    }
}
