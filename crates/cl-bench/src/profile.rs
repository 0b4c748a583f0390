use std::ptr;

use opencl3::{command_queue::CommandQueue, kernel::Kernel};

#[cfg(feature = "metrics")]
use crate::metrics::record;
#[cfg(feature = "metrics")]
use std::time::Instant;

use crate::ClError;

/// Summe der Geräte‑Laufzeiten und Anzahl abgeschlossener Durchläufe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunningAverage {
    total_ns: u64,
    runs: u64,
}

impl RunningAverage {
    pub fn push(&mut self, elapsed_ns: u64) {
        self.total_ns += elapsed_ns;
        self.runs += 1;
    }

    pub fn runs(&self) -> u64 {
        self.runs
    }

    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }

    /// Gesamtzeit / abgeschlossene Durchläufe, in ms
    pub fn average_ms(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.total_ns as f64 / self.runs as f64 / 1e6
    }
}

/// Eine Messung: Kernel‑Laufzeit laut Profiling‑Zählern
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub iteration: usize,
    pub elapsed_ns: u64,
    pub average: RunningAverage,
}

/// Ein Single‑Work‑Item‑Launch (global = local = 1), danach explizites Warten.
/// Liefert END − START des Events in ns.
pub fn launch_task(queue: &CommandQueue, kernel: &Kernel) -> Result<u64, ClError> {
    let global = [1usize];
    let local = [1usize];

    #[cfg(feature = "metrics")]
    let t = Instant::now();

    let evt = unsafe {
        queue.enqueue_nd_range_kernel(kernel.get(), 1, ptr::null(), global.as_ptr(), local.as_ptr(), &[])?
    };
    evt.wait()?;

    #[cfg(feature = "metrics")]
    record("kernel_launch", t);

    let start = evt.profiling_command_start()?;
    let end = evt.profiling_command_end()?;
    Ok(end.saturating_sub(start))
}

/// `iterations` Launches nacheinander; `on_sample` nach jedem Durchlauf.
/// Ein Fehler aus `on_sample` bricht die Schleife sofort ab.
pub fn run_profiled<F>(
    queue: &CommandQueue,
    kernel: &Kernel,
    iterations: usize,
    on_sample: F,
) -> Result<RunningAverage, ClError>
where
    F: FnMut(&Sample) -> Result<(), ClError>,
{
    run_samples(iterations, || launch_task(queue, kernel), on_sample)
}

/// Schleife ohne OpenCL: `launch` liefert die Laufzeit eines Durchlaufs in ns
pub fn run_samples<L, F>(iterations: usize, mut launch: L, mut on_sample: F) -> Result<RunningAverage, ClError>
where
    L: FnMut() -> Result<u64, ClError>,
    F: FnMut(&Sample) -> Result<(), ClError>,
{
    let mut avg = RunningAverage::default();
    for iteration in 0..iterations {
        let elapsed_ns = launch()?;
        avg.push(elapsed_ns);
        on_sample(&Sample { iteration, elapsed_ns, average: avg })?;
    }
    Ok(avg)
}
