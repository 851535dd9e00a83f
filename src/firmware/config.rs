use spellcast::{AxisMap, LoopSettings, PeerAddress};

// LATERAL_AXIS, VERTICAL_AXIS, SAMPLE_INTERVAL_MS, COOLDOWN_MS, ESPNOW_CHANNEL
include!(concat!(env!("OUT_DIR"), "/gesture_config.rs"));

// esp-radio allocates its buffers from this heap as well.
pub(crate) const HEAP_BYTES: usize = 72 * 1024;
pub(crate) const I2C_FREQ_KHZ: u32 = 100;
pub(crate) const I2C_TRANSACTION_TIMEOUT_MS: u64 = 40;
pub(crate) const CAPTURE_TRACE_ENABLED: bool = cfg!(feature = "capture-trace");

pub(crate) fn loop_settings() -> LoopSettings {
    LoopSettings {
        axes: AxisMap::new(LATERAL_AXIS, VERTICAL_AXIS),
        sample_interval_ms: SAMPLE_INTERVAL_MS,
        cooldown_ms: COOLDOWN_MS,
        destination: PeerAddress::BROADCAST,
    }
}
