use std::process::Command;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};

use super::PlatformExtensions;
use crate::system::provider::BatteryReading;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn battery() -> Result<Option<BatteryReading>> {
        let output = Command::new("pmset")
            .args(["-g", "batt"])
            .output()
            .wrap_err("failed to run pmset")?;
        if !output.status.success() {
            return Err(eyre!("pmset exited with {}", output.status));
        }
        Ok(parse_pmset(&String::from_utf8_lossy(&output.stdout)))
    }
}

// Output looks like:
//   Now drawing from 'Battery Power'
//    -InternalBattery-0 (id=1234)	82%; discharging; 4:12 remaining present: true
fn parse_pmset(text: &str) -> Option<BatteryReading> {
    let plugged_in = text.contains("'AC Power'");
    let line = text.lines().find(|l| l.contains("InternalBattery"))?;
    let (_, rest) = line.split_once('\t').or_else(|| line.split_once(')'))?;
    let mut fields = rest.split(';').map(str::trim);

    let percent = fields.next()?.trim_end_matches('%').trim().parse().ok()?;
    let _state = fields.next();
    let seconds_remaining = fields
        .next()
        .and_then(|f| f.split_whitespace().next())
        .and_then(|clock| clock.split_once(':'))
        .and_then(|(h, m)| Some(h.parse::<i64>().ok()? * 3600 + m.parse::<i64>().ok()? * 60))
        .unwrap_or(-1);

    Some(BatteryReading {
        percent,
        plugged_in,
        seconds_remaining,
    })
}
