use std::path::Path;
use std::time::Duration;

use color_eyre::Result;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemoryReading {
    pub total_bytes: u64,
    pub used_bytes: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwapReading {
    pub total_bytes: u64,
}

/// Raw battery state as reported by the OS. `seconds_remaining <= 0` means
/// the OS could not estimate a discharge time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatteryReading {
    pub percent: f64,
    pub plugged_in: bool,
    pub seconds_remaining: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessReading {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiskReading {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OsIdentity {
    pub system_name: String,
    pub release: String,
    pub machine_arch: String,
    pub processor: String,
}

/// Point-in-time queries against the host. Every call may fail; the
/// sampling loop decides which failures are fatal for a tick.
pub trait MetricsProvider {
    /// Global CPU utilization measured over `window`. Blocks for the
    /// duration of the window.
    fn cpu_percent(&mut self, window: Duration) -> Result<f64>;
    fn memory(&mut self) -> Result<MemoryReading>;
    fn swap(&mut self) -> Result<SwapReading>;
    /// `Ok(None)` when the host has no battery.
    fn battery(&mut self) -> Result<Option<BatteryReading>>;
    fn processes(&mut self) -> Result<Vec<ProcessReading>>;
    fn cpu_count(&mut self, logical: bool) -> Result<Option<usize>>;
    fn cpu_frequency_mhz(&mut self) -> Result<f64>;
    fn disk_usage(&mut self, path: &Path) -> Result<DiskReading>;
    fn network_interface_names(&mut self) -> Result<Vec<String>>;
    fn os_identity(&mut self) -> Result<OsIdentity>;
}

impl<T: MetricsProvider + ?Sized> MetricsProvider for Box<T> {
    fn cpu_percent(&mut self, window: Duration) -> Result<f64> {
        (**self).cpu_percent(window)
    }

    fn memory(&mut self) -> Result<MemoryReading> {
        (**self).memory()
    }

    fn swap(&mut self) -> Result<SwapReading> {
        (**self).swap()
    }

    fn battery(&mut self) -> Result<Option<BatteryReading>> {
        (**self).battery()
    }

    fn processes(&mut self) -> Result<Vec<ProcessReading>> {
        (**self).processes()
    }

    fn cpu_count(&mut self, logical: bool) -> Result<Option<usize>> {
        (**self).cpu_count(logical)
    }

    fn cpu_frequency_mhz(&mut self) -> Result<f64> {
        (**self).cpu_frequency_mhz()
    }

    fn disk_usage(&mut self, path: &Path) -> Result<DiskReading> {
        (**self).disk_usage(path)
    }

    fn network_interface_names(&mut self) -> Result<Vec<String>> {
        (**self).network_interface_names()
    }

    fn os_identity(&mut self) -> Result<OsIdentity> {
        (**self).os_identity()
    }
}
