//! Feste Parameter des Vektor‑Additions‑Benchmarks.

use std::path::PathBuf;

/// Anzahl Elemente pro Vektor
pub const SIZE: usize = 100_000;
/// Kernel‑Durchläufe im Profiling‑Loop
pub const ITERATIONS: usize = 100;
/// absolute Toleranz beim Ergebnisvergleich
pub const TOLERANCE: f32 = 1e-4;
/// vorkompiliertes Kernel‑Image, relativ zum Arbeitsverzeichnis
pub const KERNEL_PATH: &str = "bin/add/add.aocx";
pub const ENTRY_POINT: &str = "add";
/// Eingabewerte liegen in `[0, INPUT_RANGE)`
pub const INPUT_RANGE: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub size: usize,
    pub iterations: usize,
    pub tolerance: f32,
    pub kernel_path: PathBuf,
    pub entry_point: String,
    pub input_range: f32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: SIZE,
            iterations: ITERATIONS,
            tolerance: TOLERANCE,
            kernel_path: PathBuf::from(KERNEL_PATH),
            entry_point: ENTRY_POINT.to_owned(),
            input_range: INPUT_RANGE,
        }
    }
}

impl BenchConfig {
    /// Bytes pro Host‑/Device‑Vektor
    pub fn size_bytes(&self) -> usize {
        self.size * std::mem::size_of::<f32>()
    }
}
