use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::eyre;

use super::provider::{
    BatteryReading, DiskReading, MemoryReading, MetricsProvider, OsIdentity, ProcessReading,
    SwapReading,
};

pub const GIB: u64 = 1_073_741_824;

#[derive(Clone, Debug)]
pub enum FakeBattery {
    Present(BatteryReading),
    Absent,
    Broken,
}

/// Scriptable provider for sampling-loop and UI tests.
#[derive(Clone, Debug)]
pub struct FakeProvider {
    pub cpu: f64,
    pub memory: MemoryReading,
    pub battery: FakeBattery,
    pub processes: Vec<ProcessReading>,
    pub fail_cpu: bool,
    pub fail_memory: bool,
    pub fail_processes: bool,
    pub fail_disk: bool,
    pub cpu_windows: Vec<Duration>,
    pub disk_paths: Vec<PathBuf>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        FakeProvider {
            cpu: 20.0,
            memory: MemoryReading {
                total_bytes: 16 * GIB,
                used_bytes: 8 * GIB,
            },
            battery: FakeBattery::Absent,
            processes: vec![
                ProcessReading {
                    pid: 0,
                    name: "idle".into(),
                    cpu_percent: 95.0,
                    memory_percent: 0.0,
                },
                ProcessReading {
                    pid: 101,
                    name: "editor".into(),
                    cpu_percent: 12.3456,
                    memory_percent: 3.14159,
                },
                ProcessReading {
                    pid: 202,
                    name: "shell".into(),
                    cpu_percent: 0.5,
                    memory_percent: 0.125,
                },
            ],
            fail_cpu: false,
            fail_memory: false,
            fail_processes: false,
            fail_disk: false,
            cpu_windows: Vec::new(),
            disk_paths: Vec::new(),
        }
    }
}

impl MetricsProvider for FakeProvider {
    fn cpu_percent(&mut self, window: Duration) -> Result<f64> {
        self.cpu_windows.push(window);
        if self.fail_cpu {
            return Err(eyre!("cpu sensor offline"));
        }
        Ok(self.cpu)
    }

    fn memory(&mut self) -> Result<MemoryReading> {
        if self.fail_memory {
            return Err(eyre!("memory query failed"));
        }
        Ok(self.memory)
    }

    fn swap(&mut self) -> Result<SwapReading> {
        Ok(SwapReading { total_bytes: 2 * GIB })
    }

    fn battery(&mut self) -> Result<Option<BatteryReading>> {
        match &self.battery {
            FakeBattery::Present(reading) => Ok(Some(*reading)),
            FakeBattery::Absent => Ok(None),
            FakeBattery::Broken => Err(eyre!("battery sensor unreadable")),
        }
    }

    fn processes(&mut self) -> Result<Vec<ProcessReading>> {
        if self.fail_processes {
            return Err(eyre!("process table unavailable"));
        }
        Ok(self.processes.clone())
    }

    fn cpu_count(&mut self, logical: bool) -> Result<Option<usize>> {
        Ok(Some(if logical { 8 } else { 4 }))
    }

    fn cpu_frequency_mhz(&mut self) -> Result<f64> {
        Ok(2400.0)
    }

    fn disk_usage(&mut self, path: &Path) -> Result<DiskReading> {
        self.disk_paths.push(path.to_path_buf());
        if self.fail_disk {
            return Err(eyre!("disk not mounted"));
        }
        Ok(DiskReading {
            total_bytes: 512 * GIB,
            free_bytes: 128 * GIB,
        })
    }

    fn network_interface_names(&mut self) -> Result<Vec<String>> {
        Ok(vec!["eth0".to_string(), "lo".to_string()])
    }

    fn os_identity(&mut self) -> Result<OsIdentity> {
        Ok(OsIdentity {
            system_name: "Linux".into(),
            release: "6.1.0".into(),
            machine_arch: "x86_64".into(),
            processor: "Test CPU @ 2.40GHz".into(),
        })
    }
}
