use esp_radio::wifi::WifiController;
use spellcast::EdgeTrigger;
use wand::{
    drivers::lsm6ds3::Lsm6ds3,
    platform::{BusyDelay, HalI2c},
};

use super::adapters::{ButtonLevel, EspNowTransport, TracingSensor};

pub(crate) type WandImu = TracingSensor<Lsm6ds3<HalI2c<'static>, BusyDelay>>;
pub(crate) type WandTrigger = EdgeTrigger<ButtonLevel<'static>>;

/// Everything the wand task owns. The Wi-Fi controller must outlive ESP-NOW.
pub(crate) struct WandContext {
    pub(crate) imu: WandImu,
    pub(crate) trigger: WandTrigger,
    pub(crate) transport: EspNowTransport<'static>,
    pub(crate) wifi_controller: WifiController<'static>,
}
