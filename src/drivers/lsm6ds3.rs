use spellcast::{Reading, SensorOps};

use crate::platform::{DelayOps, I2cOps};

pub const LSM6DS3_ADDR_PRIMARY: u8 = 0x6A;
pub const LSM6DS3_ADDR_SECONDARY: u8 = 0x6B;

const REG_WHO_AM_I: u8 = 0x0F;
const REG_CTRL1_XL: u8 = 0x10;
const REG_CTRL2_G: u8 = 0x11;
const REG_CTRL3_C: u8 = 0x12;
const REG_OUTX_L_G: u8 = 0x22;

const WHO_AM_I_LSM6DS3: u8 = 0x69;
const WHO_AM_I_LSM6DS3TR_C: u8 = 0x6A;

const CTRL3_SW_RESET: u8 = 0x01;
// Block data update + register auto-increment for the 12-byte burst.
const CTRL3_BDU_IF_INC: u8 = 0x44;
// 416 Hz, +/-2 g.
const CTRL1_XL_416HZ_2G: u8 = 0x60;
// 416 Hz, 245 dps: a wrist flick saturates near +/-32767.
const CTRL2_G_416HZ_245DPS: u8 = 0x60;
const RESET_SETTLE_MS: u32 = 10;

#[derive(Debug)]
pub enum Lsm6ds3Error<E> {
    Bus(E),
    NotFound,
    UnexpectedId(u8),
}

impl<E> From<E> for Lsm6ds3Error<E> {
    fn from(err: E) -> Self {
        Self::Bus(err)
    }
}

pub struct Lsm6ds3<I2C, D> {
    i2c: I2C,
    delay: D,
    addr: u8,
}

impl<I2C, D> Lsm6ds3<I2C, D>
where
    I2C: I2cOps,
    D: DelayOps,
{
    /// Finds the sensor on either SA0 strap.
    pub fn new(mut i2c: I2C, delay: D) -> Result<Self, Lsm6ds3Error<I2C::Error>> {
        for addr in [LSM6DS3_ADDR_PRIMARY, LSM6DS3_ADDR_SECONDARY] {
            if i2c.probe(addr)? {
                return Ok(Self { i2c, delay, addr });
            }
        }
        Err(Lsm6ds3Error::NotFound)
    }

    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Resets and configures accel and gyro; returns the WHO_AM_I value.
    pub fn init(&mut self) -> Result<u8, Lsm6ds3Error<I2C::Error>> {
        let who_am_i = self.read_reg(REG_WHO_AM_I)?;
        if who_am_i != WHO_AM_I_LSM6DS3 && who_am_i != WHO_AM_I_LSM6DS3TR_C {
            return Err(Lsm6ds3Error::UnexpectedId(who_am_i));
        }

        self.write_reg(REG_CTRL3_C, CTRL3_SW_RESET)?;
        self.delay.delay_ms(RESET_SETTLE_MS);
        self.write_reg(REG_CTRL3_C, CTRL3_BDU_IF_INC)?;
        self.write_reg(REG_CTRL1_XL, CTRL1_XL_416HZ_2G)?;
        self.write_reg(REG_CTRL2_G, CTRL2_G_416HZ_245DPS)?;
        Ok(who_am_i)
    }

    pub fn read_motion_raw(&mut self) -> Result<Reading, I2C::Error> {
        let mut raw = [0u8; 12];
        self.i2c
            .write_read(self.addr, &[REG_OUTX_L_G], &mut raw)?;
        Ok(decode_motion(&raw))
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, I2C::Error> {
        let mut value = [0u8; 1];
        self.i2c.write_read(self.addr, &[reg], &mut value)?;
        Ok(value[0])
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.addr, &[reg, value])
    }
}

impl<I2C, D> SensorOps for Lsm6ds3<I2C, D>
where
    I2C: I2cOps,
    D: DelayOps,
{
    type Error = I2C::Error;

    fn read(&mut self) -> Result<Reading, Self::Error> {
        self.read_motion_raw()
    }
}

/// Output registers start at OUTX_L_G: gyro X/Y/Z, then accel X/Y/Z, little endian.
pub fn decode_motion(raw: &[u8; 12]) -> Reading {
    let word = |idx: usize| i16::from_le_bytes([raw[idx], raw[idx + 1]]);
    Reading {
        gx: word(0),
        gy: word(2),
        gz: word(4),
        ax: word(6),
        ay: word(8),
        az: word(10),
    }
}

#[cfg(test)]
mod tests {
    use super::decode_motion;

    #[test]
    fn decodes_gyro_before_accel() {
        let raw = [
            0x01, 0x00, 0x02, 0x00, 0xFF, 0x7F, 0x00, 0x80, 0xFE, 0xFF, 0x10, 0x00,
        ];
        let reading = decode_motion(&raw);
        assert_eq!((reading.gx, reading.gy, reading.gz), (1, 2, i16::MAX));
        assert_eq!((reading.ax, reading.ay, reading.az), (i16::MIN, -2, 16));
    }
}
