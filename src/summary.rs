//! Text panels derived from a [`Snapshot`]. Shared by the dashboard tabs and
//! the headless `--print` mode.

use crate::format::{format_hms, round2, truncate_unicode};
use crate::system::process::ProcessInfo;
use crate::system::snapshot::{BatteryInfo, Snapshot, SystemInfo, TimeRemaining};

pub const BATTERY_UNAVAILABLE: &str = "Battery status unavailable";

pub fn cpu_summary(snapshot: &Snapshot) -> String {
    format!("CPU Utilization: {:.2}%", snapshot.cpu_percent)
}

pub fn memory_summary(snapshot: &Snapshot) -> String {
    format!(
        "Memory in Use: {:.2} GB\nAvailable Memory: {:.2} GB",
        snapshot.memory_used_gb, snapshot.memory_available_gb
    )
}

pub fn time_remaining_label(time: TimeRemaining) -> String {
    match time {
        TimeRemaining::Charging => "Plugged in (Charging)".to_string(),
        TimeRemaining::Unknown => "Calculating...".to_string(),
        TimeRemaining::Remaining(duration) => format_hms(duration),
    }
}

pub fn battery_summary(battery: Option<&BatteryInfo>) -> String {
    match battery {
        Some(info) => format!(
            "Battery Percent: {}%\nEstimated Time Remaining: {}",
            round2(info.percent),
            time_remaining_label(info.time_remaining)
        ),
        None => BATTERY_UNAVAILABLE.to_string(),
    }
}

fn optional_count(count: Option<usize>) -> String {
    count.map_or_else(|| "Unknown".to_string(), |n| n.to_string())
}

pub fn system_summary(info: &SystemInfo) -> String {
    [
        "System Information:".to_string(),
        format!(
            "OS: {} {} ({})",
            info.os_name, info.os_release, info.machine_arch
        ),
        format!("Processor: {}", info.processor),
        format!(
            "CPU Cores: {} (Logical: {})",
            optional_count(info.physical_cores),
            optional_count(info.logical_cores)
        ),
        format!("RAM: {:.2} GB", info.memory_total_gb),
        format!("Swap Memory: {:.2} GB", info.swap_total_gb),
        format!("Network Interfaces: {}", info.network_interfaces.join(", ")),
        format!("CPU Frequency: {:.2} MHz", info.cpu_frequency_mhz),
        format!("Total Disk Space: {:.2} GB", info.disk_total_gb),
        format!("Available Disk Space: {:.2} GB", info.disk_free_gb),
    ]
    .join("\n")
}

/// Table cells for one process: pid, name, cpu, memory.
pub fn process_row(process: &ProcessInfo) -> [String; 4] {
    [
        process.pid.to_string(),
        process.name.clone(),
        format!("{}%", process.cpu_percent),
        format!("{}%", process.memory_percent),
    ]
}

/// Every text panel in tab order, used by `--print`.
pub fn full_report(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    out.push_str(&cpu_summary(snapshot));
    out.push_str("\n\n");
    out.push_str(&memory_summary(snapshot));
    out.push_str("\n\n");
    out.push_str(&battery_summary(snapshot.battery.as_ref()));
    out.push_str("\n\n");
    out.push_str(&format!(
        "{:>8}  {:<24} {:>12} {:>15}\n",
        "PID", "Name", "CPU Percent", "Memory Percent"
    ));
    for process in &snapshot.processes {
        let [pid, name, cpu, mem] = process_row(process);
        out.push_str(&format!(
            "{pid:>8}  {:<24} {cpu:>12} {mem:>15}\n",
            truncate_unicode(&name, 24)
        ));
    }
    out.push('\n');
    out.push_str(&system_summary(&snapshot.system));
    out
}
