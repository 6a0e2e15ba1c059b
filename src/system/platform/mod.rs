use color_eyre::Result;

use super::provider::BatteryReading;

pub trait PlatformExtensions {
    /// `Ok(None)` when no battery is present.
    fn battery() -> Result<Option<BatteryReading>>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod unsupported;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
use unsupported as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

pub fn battery() -> Result<Option<BatteryReading>> {
    platform_impl::Platform::battery()
}
