// @generated by gesture_config_compiler. Do not edit.

pub const LATERAL_AXIS: spellcast::Axis = spellcast::Axis::GyroY;
pub const VERTICAL_AXIS: spellcast::Axis = spellcast::Axis::GyroX;
pub const SAMPLE_INTERVAL_MS: u32 = 10;
pub const COOLDOWN_MS: u32 = 10;
pub const ESPNOW_CHANNEL: u8 = 1;
