use color_eyre::Result;
use color_eyre::eyre::eyre;
use windows_sys::Win32::System::Power::{GetSystemPowerStatus, SYSTEM_POWER_STATUS};

use super::PlatformExtensions;
use crate::system::provider::BatteryReading;

const AC_ONLINE: u8 = 1;
const NO_SYSTEM_BATTERY: u8 = 128;
const UNKNOWN_PERCENT: u8 = 255;
const UNKNOWN_LIFETIME: u32 = u32::MAX;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery() -> Result<Option<BatteryReading>> {
        let mut status = unsafe { std::mem::zeroed::<SYSTEM_POWER_STATUS>() };
        let ok = unsafe { GetSystemPowerStatus(&mut status) };
        if ok == 0 {
            return Err(eyre!("GetSystemPowerStatus failed"));
        }
        if status.BatteryFlag & NO_SYSTEM_BATTERY != 0
            || status.BatteryLifePercent == UNKNOWN_PERCENT
        {
            return Ok(None);
        }
        let seconds_remaining = if status.BatteryLifeTime == UNKNOWN_LIFETIME {
            -1
        } else {
            i64::from(status.BatteryLifeTime)
        };
        Ok(Some(BatteryReading {
            percent: f64::from(status.BatteryLifePercent),
            plugged_in: status.ACLineStatus == AC_ONLINE,
            seconds_remaining,
        }))
    }
}
