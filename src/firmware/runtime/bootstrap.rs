use esp_hal::{
    gpio::{Input, InputConfig, Pull},
    i2c::master::{Config as I2cConfig, I2c, SoftwareTimeout},
    time::{Duration as HalDuration, Rate},
    timer::timg::TimerGroup,
};
use esp_println::println;
use esp_rtos::embassy::Executor;
use spellcast::EdgeTrigger;
use static_cell::StaticCell;
use wand::{
    drivers::lsm6ds3::Lsm6ds3,
    platform::{BusyDelay, HalI2c},
};

use super::super::{
    adapters::{ButtonLevel, EspNowTransport, TracingSensor},
    config::{HEAP_BYTES, I2C_FREQ_KHZ, I2C_TRANSACTION_TIMEOUT_MS},
    types::WandContext,
};
use super::{radio, wand_task::wand_task};

pub fn run() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());
    esp_alloc::heap_allocator!(size: HEAP_BYTES);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);
    println!("wand: boot");

    let i2c_cfg = I2cConfig::default()
        .with_frequency(Rate::from_khz(I2C_FREQ_KHZ))
        .with_software_timeout(SoftwareTimeout::Transaction(HalDuration::from_millis(
            I2C_TRANSACTION_TIMEOUT_MS,
        )));
    // IMU breakout: SDA on GPIO22, SCL on GPIO23.
    let i2c = match I2c::new(peripherals.I2C0, i2c_cfg) {
        Ok(bus) => bus.with_sda(peripherals.GPIO22).with_scl(peripherals.GPIO23),
        Err(err) => {
            println!("wand: i2c config err={:?}", err);
            halt_forever();
        }
    };

    let mut imu = match Lsm6ds3::new(HalI2c::new(i2c), BusyDelay::new()) {
        Ok(imu) => imu,
        Err(err) => {
            println!("imu: probe err={:?}", err);
            halt_forever();
        }
    };
    match imu.init() {
        Ok(who_am_i) => println!(
            "imu: ready addr=0x{:02X} who_am_i=0x{:02X}",
            imu.address(),
            who_am_i
        ),
        Err(err) => {
            println!("imu: init err={:?}", err);
            halt_forever();
        }
    }

    // BOOT button, active low.
    let button = Input::new(
        peripherals.GPIO0,
        InputConfig::default().with_pull(Pull::Up),
    );

    let (wifi_controller, esp_now) = match radio::start(peripherals.WIFI) {
        Ok(parts) => parts,
        Err(reason) => {
            println!("{}", reason);
            halt_forever();
        }
    };

    let context = WandContext {
        imu: TracingSensor::new(imu),
        trigger: EdgeTrigger::new(ButtonLevel::new(button)),
        transport: EspNowTransport::new(esp_now),
        wifi_controller,
    };

    static EXECUTOR: StaticCell<Executor> = StaticCell::new();
    let executor = EXECUTOR.init(Executor::new());
    executor.run(move |spawner| {
        spawner.must_spawn(wand_task(context));
    });
}

fn halt_forever() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
