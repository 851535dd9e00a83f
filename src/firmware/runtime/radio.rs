use esp_println::println;
use esp_radio::{
    esp_now::EspNow,
    wifi::{ClientConfig, ModeConfig, WifiController, WifiError},
};
use static_cell::StaticCell;

use super::super::config::ESPNOW_CHANNEL;

/// Brings Wi-Fi up in station mode without associating, which is all
/// ESP-NOW needs. The broadcast peer is registered by the driver.
pub(super) fn start(
    wifi: esp_hal::peripherals::WIFI<'static>,
) -> Result<(WifiController<'static>, EspNow<'static>), &'static str> {
    static RADIO_CTRL: StaticCell<esp_radio::Controller<'static>> = StaticCell::new();

    let radio_ctrl = esp_radio::init().map_err(|err| {
        println!("espnow: esp_radio::init err={:?}", err);
        "espnow: esp_radio::init failed"
    })?;
    let radio_ctrl = RADIO_CTRL.init(radio_ctrl);
    let (mut controller, ifaces) =
        esp_radio::wifi::new(radio_ctrl, wifi, Default::default()).map_err(wifi_error_reason)?;

    controller
        .set_config(&ModeConfig::Client(ClientConfig::default()))
        .map_err(wifi_error_reason)?;
    controller.start().map_err(wifi_error_reason)?;

    let esp_now = ifaces.esp_now;
    esp_now.set_channel(ESPNOW_CHANNEL).map_err(|err| {
        println!("espnow: set_channel err={:?}", err);
        "espnow: set_channel failed"
    })?;
    match esp_now.version() {
        Ok(version) => println!("espnow: ready version={} channel={}", version, ESPNOW_CHANNEL),
        Err(err) => println!("espnow: ready version_err={:?} channel={}", err, ESPNOW_CHANNEL),
    }

    Ok((controller, esp_now))
}

fn wifi_error_reason(err: WifiError) -> &'static str {
    match err {
        WifiError::InvalidArguments => "espnow: wifi init failed invalid_args",
        WifiError::Unsupported => "espnow: wifi init failed unsupported",
        WifiError::NotInitialized => "espnow: wifi init failed not_initialized",
        _ => "espnow: wifi init failed other",
    }
}
