// 2025 Thomas Bicanic – MIT License

use std::{io, process::ExitCode};

use cl_bench::{BenchConfig, run_vec_add};

#[cfg(feature = "metrics")]
use cl_bench::summary;

fn main() -> ExitCode {
    env_logger::init();

    let config = BenchConfig::default();
    let mut rng = rand::thread_rng();
    let stdin = io::stdin();
    let stdout = io::stdout();

    // Handles werden innerhalb von run_vec_add freigegeben, auch im Fehlerfall
    let result = run_vec_add(&config, &mut rng, &mut stdin.lock(), &mut stdout.lock());

    #[cfg(feature = "metrics")]
    summary();

    match result {
        Ok(verdict) if verdict.passed() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            if let Some(code) = e.status() {
                cl_bench::report_status(code);
            }
            log::error!("vec_add aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
