//! Laden und Bauen des vorkompilierten Kernel‑Images (.aocx).

use std::{fs, path::Path};

use opencl3::{
    context::Context,
    kernel::Kernel,
    program::Program,
    types::cl_device_id,
};

use crate::ClError;

/// Image komplett einlesen. Fehlt die Datei, ist das fatal.
pub fn read_kernel_binary(path: &Path) -> Result<Vec<u8>, ClError> {
    let bytes = fs::read(path).map_err(|source| ClError::KernelNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("kernel binary {} read: {} bytes", path.display(), bytes.len());
    Ok(bytes)
}

/// Programm + Einstiegspunkt. Kernel wird vor dem Programm freigegeben.
pub struct LoadedKernel {
    kernel: Kernel,
    _program: Program,
}

impl LoadedKernel {
    /// Binary lesen, für genau ein Gerät bauen, `entry_point` extrahieren.
    /// Die Bytes leben nur bis nach dem Build.
    pub fn load(ctx: &Context, device: cl_device_id, path: &Path, entry_point: &str) -> Result<Self, ClError> {
        let binary = read_kernel_binary(path)?;
        let program = build_from_binary(ctx, device, &binary)?;
        drop(binary);

        let kernel = Kernel::create(&program, entry_point)?;
        log::debug!("kernel {entry_point:?} extracted");
        Ok(Self { kernel, _program: program })
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }
}

fn build_from_binary(ctx: &Context, device: cl_device_id, binary: &[u8]) -> Result<Program, ClError> {
    let mut program = unsafe { Program::create_from_binary(ctx, &[device], &[binary])? };

    if let Err(e) = program.build(&[device], "") {
        let log = program.get_build_log(device).unwrap_or_default();
        log::error!("program build failed ({e}):\n{log}");
        return Err(ClError::Build { log });
    }
    Ok(program)
}
