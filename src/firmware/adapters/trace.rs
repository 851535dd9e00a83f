use esp_println::println;
use spellcast::{Reading, SensorOps};

use super::super::config::CAPTURE_TRACE_ENABLED;

/// Logs every reading taken during capture when `capture-trace` is enabled.
pub(crate) struct TracingSensor<S> {
    inner: S,
    seq: u32,
}

impl<S> TracingSensor<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner, seq: 0 }
    }
}

impl<S: SensorOps> SensorOps for TracingSensor<S> {
    type Error = S::Error;

    fn read(&mut self) -> Result<Reading, Self::Error> {
        let reading = self.inner.read()?;
        if CAPTURE_TRACE_ENABLED {
            self.seq = self.seq.wrapping_add(1);
            println!(
                "capture: seq={} a=({},{},{}) g=({},{},{})",
                self.seq, reading.ax, reading.ay, reading.az, reading.gx, reading.gy, reading.gz
            );
        }
        Ok(reading)
    }
}
