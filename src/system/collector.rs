use std::path::Path;
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use sysinfo::{Disks, Networks, ProcessRefreshKind, ProcessesToUpdate, System};

use super::platform;
use super::provider::{
    BatteryReading, DiskReading, MemoryReading, MetricsProvider, OsIdentity, ProcessReading,
    SwapReading,
};

/// [`MetricsProvider`] backed by `sysinfo`, with battery state read through
/// the per-OS platform layer.
pub struct Collector {
    sys: System,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        Collector { sys }
    }
}

impl MetricsProvider for Collector {
    fn cpu_percent(&mut self, window: Duration) -> Result<f64> {
        self.sys.refresh_cpu_usage();
        std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        self.sys.refresh_cpu_usage();
        let usage = self.sys.global_cpu_usage();
        if !usage.is_finite() {
            return Err(eyre!("cpu usage is not a number"));
        }
        Ok(f64::from(usage))
    }

    fn memory(&mut self) -> Result<MemoryReading> {
        self.sys.refresh_memory();
        let total_bytes = self.sys.total_memory();
        if total_bytes == 0 {
            return Err(eyre!("total memory reported as zero"));
        }
        Ok(MemoryReading {
            total_bytes,
            used_bytes: self.sys.used_memory(),
        })
    }

    fn swap(&mut self) -> Result<SwapReading> {
        Ok(SwapReading {
            total_bytes: self.sys.total_swap(),
        })
    }

    fn battery(&mut self) -> Result<Option<BatteryReading>> {
        platform::battery()
    }

    fn processes(&mut self) -> Result<Vec<ProcessReading>> {
        let _span = tracing::debug_span!("collector.processes").entered();

        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        let total = self.sys.total_memory();
        if total == 0 {
            return Err(eyre!("cannot compute memory share without total memory"));
        }

        Ok(self
            .sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessReading {
                pid: pid.as_u32(),
                name: process.name().to_string_lossy().to_string(),
                cpu_percent: f64::from(process.cpu_usage()),
                memory_percent: process.memory() as f64 / total as f64 * 100.0,
            })
            .collect())
    }

    fn cpu_count(&mut self, logical: bool) -> Result<Option<usize>> {
        if logical {
            let count = self.sys.cpus().len();
            Ok((count > 0).then_some(count))
        } else {
            Ok(System::physical_core_count())
        }
    }

    fn cpu_frequency_mhz(&mut self) -> Result<f64> {
        self.sys.refresh_cpu_frequency();
        self.sys
            .cpus()
            .first()
            .map(|cpu| cpu.frequency() as f64)
            .ok_or_else(|| eyre!("no cpus reported"))
    }

    fn disk_usage(&mut self, path: &Path) -> Result<DiskReading> {
        let disks = Disks::new_with_refreshed_list();
        disks
            .list()
            .iter()
            .filter(|disk| path.starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().as_os_str().len())
            .map(|disk| DiskReading {
                total_bytes: disk.total_space(),
                free_bytes: disk.available_space(),
            })
            .ok_or_else(|| eyre!("no mounted disk contains {}", path.display()))
    }

    fn network_interface_names(&mut self) -> Result<Vec<String>> {
        let networks = Networks::new_with_refreshed_list();
        let mut names: Vec<String> = networks.list().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn os_identity(&mut self) -> Result<OsIdentity> {
        let processor = self
            .sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .unwrap_or_default();
        Ok(OsIdentity {
            system_name: System::name().unwrap_or_else(|| "Unknown".to_string()),
            release: System::kernel_version().unwrap_or_default(),
            machine_arch: std::env::consts::ARCH.to_string(),
            processor,
        })
    }
}
