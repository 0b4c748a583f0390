// 2025 Thomas Bicanic – MIT License
//
// Matrix-Multiplikation – nur das Gerüst: Auswahl, Session, Host-Puffer.
// Es wird kein Kernel gestartet.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use cl_bench::{
    ClError, Session,
    matmul::{A_COLS, A_ROWS, B_COLS, B_ROWS, HostMatrices, MatmulDims},
    select::{choose_device, choose_platform},
};

fn run() -> Result<(), ClError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    /* ---------- 1. Plattform & Gerät ----------------------------- */
    let platform = choose_platform(&mut input, &mut out)?;
    let (device_ids, selected) = choose_device(&platform, &mut input, &mut out)?;

    /* ---------- 2. Kontext & Queue ------------------------------- */
    writeln!(out, "INFO: Creating context for the discovered devices.")?;
    let _session = Session::new(&device_ids, selected)?;

    /* ---------- 3. Host-Puffer ----------------------------------- */
    writeln!(out, "INFO: Allocating buffers on host to hold the data.")?;
    let dims = MatmulDims::new(A_ROWS, A_COLS, B_ROWS, B_COLS)?;
    let mut host = HostMatrices::random(dims, 0.1, &mut rand::thread_rng());
    let t = host.compute_golden();

    writeln!(
        out,
        "INFO: M = {}, N = {}, K = {} ({} bytes on host), host reference in {:.3} ms.",
        dims.m,
        dims.n,
        dims.k,
        host.size_bytes(),
        t.as_secs_f64() * 1e3
    )?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(code) = e.status() {
                cl_bench::report_status(code);
            }
            log::error!("matmul aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
