//! Vektor‑Addition als linearer Ablauf: Auswahl → Session → Daten →
//! Kernel → Profiling‑Loop → Verifikation. Alle Handles sind lokale Werte
//! und werden auf jedem Pfad (auch bei `?`) in umgekehrter Reihenfolge freigegeben.

use std::io::{BufRead, Write};

use opencl3::types::cl_int;
use rand::Rng;

use crate::{
    BenchConfig, ClError, DeviceBuffer, HostData, Ready, Session, Verdict,
    kernel::LoadedKernel,
    profile::run_profiled,
    select::{choose_device, choose_platform},
    validate::{report_verdict, validate},
};

pub fn run_vec_add<R, W, G>(
    config: &BenchConfig,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> Result<Verdict, ClError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    /* ---------- 1. Plattform & Gerät ----------------------------- */
    let platform = choose_platform(input, out)?;
    let (device_ids, selected) = choose_device(&platform, input, out)?;

    /* ---------- 2. Kontext & Profiling-Queue --------------------- */
    writeln!(out, "INFO: Creating context for the discovered devices.")?;
    let session = Session::new(&device_ids, selected)?;
    drop(device_ids);
    let queue = session.queue();

    /* ---------- 3. Hostdaten & Referenz -------------------------- */
    writeln!(out, "INFO: Allocating buffers on host to hold the data.")?;
    let mut host = HostData::random(config.size, config.input_range, rng);
    let host_time = host.compute_golden();
    writeln!(
        out,
        "INFO: Host reference computed in {:.3} ms.",
        host_time.as_secs_f64() * 1e3
    )?;

    /* ---------- 4. Device-Buffer & Host → Device ----------------- */
    writeln!(out, "INFO: Allocating buffers on device and transferring inputs.")?;
    let a_dev = DeviceBuffer::<Ready>::from_slice(session.context(), queue, &host.a)?;
    let b_dev = DeviceBuffer::<Ready>::from_slice(session.context(), queue, &host.b)?;
    let out_dev = DeviceBuffer::<Ready>::from_slice(session.context(), queue, &host.out)?;

    /* ---------- 5. Kernel laden & bauen -------------------------- */
    writeln!(out, "INFO: Loading kernel binary {}.", config.kernel_path.display())?;
    let loaded = LoadedKernel::load(
        session.context(),
        session.device_id(),
        &config.kernel_path,
        &config.entry_point,
    )?;
    let kernel = loaded.kernel();

    let n = cl_int::try_from(config.size).map_err(|_| ClError::InvalidSize(config.size))?;
    unsafe {
        kernel.set_arg(0, a_dev.raw())?;
        kernel.set_arg(1, b_dev.raw())?;
        kernel.set_arg(2, out_dev.raw())?;
        kernel.set_arg(3, &n)?;
    }

    /* ---------- 6. Ausführen & Profiling ------------------------- */
    writeln!(out, "INFO: Launching kernel {} times.", config.iterations)?;
    let total = run_profiled(queue, kernel, config.iterations, |s| {
        writeln!(
            out,
            "Iteration {:>3}: kernel {:.6} ms, running average {:.6} ms",
            s.iteration,
            s.elapsed_ns as f64 * 1e-6,
            s.average.average_ms(),
        )?;
        Ok(())
    })?;
    log::info!(
        "{} launches, {:.6} ms average device time",
        total.runs(),
        total.average_ms()
    );

    /* ---------- 7. Device → Host & Verifikation ------------------ */
    out_dev.read(queue, &mut host.out)?;
    let verdict = validate(&host.out, &host.golden, config.tolerance)?;
    report_verdict(out, &verdict)?;

    Ok(verdict)
}
