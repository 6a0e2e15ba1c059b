use serde::Serialize;

use crate::format::round2;
use crate::system::provider::ProcessReading;

/// Pid the kernel reports for its idle/scheduler placeholder.
pub const IDLE_PID: u32 = 0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
}

impl From<ProcessReading> for ProcessInfo {
    fn from(reading: ProcessReading) -> Self {
        ProcessInfo {
            pid: reading.pid,
            name: reading.name,
            cpu_percent: round2(reading.cpu_percent),
            memory_percent: round2(reading.memory_percent),
        }
    }
}

/// Builds the process list for one tick. Order follows the provider; the
/// idle placeholder is dropped.
pub fn build_process_list(readings: Vec<ProcessReading>) -> Vec<ProcessInfo> {
    readings
        .into_iter()
        .filter(|p| p.pid != IDLE_PID)
        .map(ProcessInfo::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(pid: u32, name: &str, cpu: f64, mem: f64) -> ProcessReading {
        ProcessReading {
            pid,
            name: name.to_string(),
            cpu_percent: cpu,
            memory_percent: mem,
        }
    }

    #[test]
    fn idle_pid_is_excluded() {
        let list = build_process_list(vec![
            reading(0, "idle", 99.0, 0.0),
            reading(42, "shell", 1.234, 0.5),
            reading(7, "daemon", 0.0, 12.3456),
        ]);
        let pids: Vec<u32> = list.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![42, 7]);
    }

    #[test]
    fn percentages_are_rounded_to_two_places() {
        let list = build_process_list(vec![reading(5, "worker", 3.14159, 2.71828)]);
        assert_eq!(list[0].cpu_percent, 3.14);
        assert_eq!(list[0].memory_percent, 2.72);
        assert_eq!(list[0].name, "worker");
    }

    #[test]
    fn empty_input_gives_empty_list() {
        assert!(build_process_list(Vec::new()).is_empty());
    }
}
