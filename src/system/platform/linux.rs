use std::fs;
use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};

use super::PlatformExtensions;
use crate::system::provider::BatteryReading;

const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery() -> Result<Option<BatteryReading>> {
        read_battery(Path::new(POWER_SUPPLY_ROOT))
    }
}

fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}

fn read_f64(path: &Path) -> Option<f64> {
    read_trimmed(path)?.parse().ok()
}

/// Scans a `power_supply` class directory. The first supply of type
/// `Battery` wins; any online `Mains` supply counts as plugged in.
pub(super) fn read_battery(root: &Path) -> Result<Option<BatteryReading>> {
    if !root.exists() {
        return Ok(None);
    }
    let entries = fs::read_dir(root)
        .wrap_err_with(|| format!("failed to list {}", root.display()))?;

    let mut battery_dir = None;
    let mut mains_online = false;
    let mut dirs: Vec<_> = entries.flatten().map(|e| e.path()).collect();
    dirs.sort();

    for dir in dirs {
        match read_trimmed(&dir.join("type")).as_deref() {
            Some("Battery") if battery_dir.is_none() => battery_dir = Some(dir),
            Some("Mains") => {
                if read_f64(&dir.join("online")) == Some(1.0) {
                    mains_online = true;
                }
            }
            _ => {}
        }
    }

    let Some(dir) = battery_dir else {
        return Ok(None);
    };

    let percent = read_f64(&dir.join("capacity"))
        .ok_or_else(|| eyre!("battery at {} has no readable capacity", dir.display()))?;
    let status = read_trimmed(&dir.join("status")).unwrap_or_default();
    let plugged_in = mains_online || status == "Charging" || status == "Full";

    Ok(Some(BatteryReading {
        percent,
        plugged_in,
        seconds_remaining: seconds_remaining(&dir),
    }))
}

// energy_* is in µWh with power_now in µW; charge_* in µAh with current_now in µA.
fn seconds_remaining(dir: &Path) -> i64 {
    let pair = |now: &str, rate: &str| {
        let now = read_f64(&dir.join(now))?;
        let rate = read_f64(&dir.join(rate))?;
        (rate > 0.0).then(|| (now / rate * 3600.0) as i64)
    };
    pair("energy_now", "power_now")
        .or_else(|| pair("charge_now", "current_now"))
        .unwrap_or(-1)
}
