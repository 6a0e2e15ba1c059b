//! Fixed-cadence sampling loop: pulls readings from a [`MetricsProvider`],
//! keeps the CPU and memory series, and hands each [`Snapshot`] to a
//! [`Presenter`]. Timing goes through a [`Scheduler`] so ticks can be driven
//! by hand in tests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;

use crate::format::bytes_to_gb;
use crate::system::process::build_process_list;
use crate::system::provider::MetricsProvider;
use crate::system::series::BoundedSeries;
use crate::system::snapshot::{BatteryInfo, HistoryView, Snapshot, SystemInfo};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Blocking window the CPU query averages over.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_millis(500);

/// Multiplier applied to raw CPU utilization before it is stored and shown.
/// This is a display calibration, not a measured quantity: scaled values can
/// exceed 100 and are cut off by the chart's fixed 0-100 axis.
pub const CPU_DISPLAY_SCALE: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A snapshot was rendered and the next tick scheduled.
    Rendered,
    /// A query failed; nothing was rendered but the next tick was scheduled.
    Skipped,
    /// The loop is stopped and nothing further is scheduled.
    Stopped,
}

pub trait Presenter {
    fn render(&mut self, snapshot: Snapshot, history: HistoryView);
    fn is_alive(&self) -> bool;
}

pub trait Scheduler {
    fn schedule_after(&mut self, delay: Duration);
}

pub struct SamplingLoop<P> {
    provider: P,
    cpu: BoundedSeries,
    memory: BoundedSeries,
    state: LoopState,
    disk_path: PathBuf,
    ticks: u64,
}

impl<P: MetricsProvider> SamplingLoop<P> {
    pub fn new(provider: P, disk_path: impl Into<PathBuf>) -> Self {
        SamplingLoop {
            provider,
            cpu: BoundedSeries::default(),
            memory: BoundedSeries::default(),
            state: LoopState::Running,
            disk_path: disk_path.into(),
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Moves the loop to `Stopped`. Returns `true` only for the call that
    /// performed the transition.
    pub fn shutdown(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.state = LoopState::Stopped;
        tracing::info!(ticks = self.ticks, "sampling loop stopped");
        true
    }

    pub fn cpu_series(&self) -> &BoundedSeries {
        &self.cpu
    }

    pub fn memory_series(&self) -> &BoundedSeries {
        &self.memory
    }

    pub fn history(&self) -> HistoryView {
        HistoryView {
            cpu_percent: self.cpu.values(),
            memory_used_gb: self.memory.values(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn disk_path(&self) -> &Path {
        &self.disk_path
    }

    /// Runs one full cycle and schedules the next one while the presenter
    /// is alive. A failed query skips the render but not the reschedule.
    pub fn tick(
        &mut self,
        presenter: &mut impl Presenter,
        scheduler: &mut impl Scheduler,
    ) -> TickOutcome {
        if self.state == LoopState::Stopped {
            return TickOutcome::Stopped;
        }

        let outcome = match self.sample() {
            Ok(snapshot) => {
                presenter.render(snapshot, self.history());
                TickOutcome::Rendered
            }
            Err(err) => {
                tracing::warn!(tick = self.ticks, error = %err, "metrics query failed, skipping tick");
                TickOutcome::Skipped
            }
        };

        if self.state == LoopState::Running && presenter.is_alive() {
            scheduler.schedule_after(TICK_INTERVAL);
            outcome
        } else {
            self.shutdown();
            TickOutcome::Stopped
        }
    }

    /// Queries the provider once and updates both series. Any failure other
    /// than the battery aborts the remaining steps.
    pub fn sample(&mut self) -> Result<Snapshot> {
        self.ticks += 1;
        let _span = tracing::debug_span!("sampler.sample", tick = self.ticks).entered();

        let cpu_percent = self.provider.cpu_percent(CPU_SAMPLE_WINDOW)? * CPU_DISPLAY_SCALE;
        self.cpu.append(cpu_percent);

        let memory = self.provider.memory()?;
        let memory_used_gb = bytes_to_gb(memory.used_bytes);
        let memory_total_gb = bytes_to_gb(memory.total_bytes);
        self.memory.append(memory_used_gb);

        let battery = self.read_battery();
        let processes = build_process_list(self.provider.processes()?);
        let system = self.read_system_info(memory_total_gb)?;

        tracing::debug!(
            tick = self.ticks,
            cpu_percent,
            memory_used_gb,
            processes = processes.len(),
            battery = battery.is_some(),
            "sample collected"
        );

        Ok(Snapshot {
            tick: self.ticks,
            cpu_percent,
            memory_used_gb,
            memory_total_gb,
            memory_available_gb: memory_total_gb - memory_used_gb,
            battery,
            processes,
            system,
        })
    }

    fn read_battery(&mut self) -> Option<BatteryInfo> {
        match self.provider.battery() {
            Ok(Some(reading)) => Some(BatteryInfo::from(&reading)),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = %err, "unable to read battery status");
                None
            }
        }
    }

    fn read_system_info(&mut self, memory_total_gb: f64) -> Result<SystemInfo> {
        let identity = self.provider.os_identity()?;
        let disk = self.provider.disk_usage(&self.disk_path)?;
        Ok(SystemInfo {
            os_name: identity.system_name,
            os_release: identity.release,
            machine_arch: identity.machine_arch,
            processor: identity.processor,
            physical_cores: self.provider.cpu_count(false)?,
            logical_cores: self.provider.cpu_count(true)?,
            memory_total_gb,
            swap_total_gb: bytes_to_gb(self.provider.swap()?.total_bytes),
            network_interfaces: self.provider.network_interface_names()?,
            cpu_frequency_mhz: self.provider.cpu_frequency_mhz()?,
            disk_total_gb: bytes_to_gb(disk.total_bytes),
            disk_free_gb: bytes_to_gb(disk.free_bytes),
        })
    }
}
