use esp_println::println;
use spellcast::GestureLoop;

use super::super::{adapters::EmbassySleep, config::loop_settings, types::WandContext};
use super::diagnostics::log_tick;

#[embassy_executor::task]
pub(super) async fn wand_task(context: WandContext) {
    let WandContext {
        imu,
        trigger,
        transport,
        wifi_controller,
    } = context;
    // ESP-NOW stops when the controller is dropped.
    let _wifi_controller = wifi_controller;

    let settings = loop_settings();
    println!(
        "wand: ready lateral={} vertical={} interval_ms={} cooldown_ms={}",
        settings.axes.lateral, settings.axes.vertical, settings.sample_interval_ms, settings.cooldown_ms
    );

    let mut wand = GestureLoop::new(imu, trigger, transport, EmbassySleep, settings);
    let fault = wand.run(log_tick).await;
    panic!("wand: fault {}", fault);
}
