use std::time::Duration;

use serde::Serialize;

use super::process::ProcessInfo;
use super::provider::BatteryReading;

/// Everything gathered during one tick. Built once, handed to the
/// presenter, then dropped.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub cpu_percent: f64,
    pub memory_used_gb: f64,
    pub memory_total_gb: f64,
    pub memory_available_gb: f64,
    pub battery: Option<BatteryInfo>,
    pub processes: Vec<ProcessInfo>,
    pub system: SystemInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatteryInfo {
    pub percent: f64,
    pub time_remaining: TimeRemaining,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TimeRemaining {
    Charging,
    Unknown,
    Remaining(Duration),
}

impl TimeRemaining {
    pub fn classify(reading: &BatteryReading) -> Self {
        if reading.plugged_in {
            TimeRemaining::Charging
        } else if reading.seconds_remaining <= 0 {
            TimeRemaining::Unknown
        } else {
            TimeRemaining::Remaining(Duration::from_secs(reading.seconds_remaining as u64))
        }
    }
}

impl From<&BatteryReading> for BatteryInfo {
    fn from(reading: &BatteryReading) -> Self {
        BatteryInfo {
            percent: reading.percent,
            time_remaining: TimeRemaining::classify(reading),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SystemInfo {
    pub os_name: String,
    pub os_release: String,
    pub machine_arch: String,
    pub processor: String,
    pub physical_cores: Option<usize>,
    pub logical_cores: Option<usize>,
    pub memory_total_gb: f64,
    pub swap_total_gb: f64,
    pub network_interfaces: Vec<String>,
    pub cpu_frequency_mhz: f64,
    pub disk_total_gb: f64,
    pub disk_free_gb: f64,
}

/// Read-only copies of the rolling series, oldest sample first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryView {
    pub cpu_percent: Vec<f64>,
    pub memory_used_gb: Vec<f64>,
}
