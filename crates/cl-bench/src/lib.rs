// ─── Module ───────────────────────────────────────────────────────────
mod error;
pub mod buffer;
pub mod config;
pub mod harness;
pub mod host;
pub mod kernel;
pub mod matmul;
pub mod profile;
pub mod select;
pub mod session;
pub mod validate;

#[cfg(feature = "metrics")]
mod metrics;
#[cfg(feature = "metrics")]
pub use metrics::{record, summary, ALLOCS, ALLOC_BYTES};

// ─── Re-Exports ───────────────────────────────────────────────────────
pub use buffer::{DeviceBuffer, Empty, Ready, ensure_same_size};
pub use config::BenchConfig;
pub use error::{ClError, report_status};
pub use harness::run_vec_add;
pub use host::HostData;
pub use profile::RunningAverage;
pub use session::Session;
pub use validate::{Verdict, report_verdict, validate};
