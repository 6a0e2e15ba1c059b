use color_eyre::Result;

use super::PlatformExtensions;
use crate::system::provider::BatteryReading;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery() -> Result<Option<BatteryReading>> {
        Ok(None)
    }
}
