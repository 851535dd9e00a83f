use embassy_time::Timer;
use spellcast::SleepOps;

#[derive(Clone, Copy, Default)]
pub(crate) struct EmbassySleep;

impl SleepOps for EmbassySleep {
    async fn sleep_ms(&mut self, millis: u32) {
        Timer::after_millis(millis as u64).await;
    }

    async fn idle(&mut self) {
        embassy_futures::yield_now().await;
    }
}
