use std::{io, path::PathBuf};

// ─── Fehler‑Typ ───────────────────────────────────────────────────────
#[derive(thiserror::Error, Debug)]
pub enum ClError {
    #[error("OpenCL error code {0}")]
    Api(i32),
    #[error("Invalid buffer size: {0}")]
    InvalidSize(usize),
    #[error("transfer size mismatch: device buffer holds {expected} bytes, host slice has {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("{what} index {index} out of range ({count} available)")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        count: usize,
    },
    #[error("invalid selection: {0:?}")]
    InvalidSelection(String),
    #[error("kernel binary {} not found", path.display())]
    KernelNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("program build failed:\n{log}")]
    Build { log: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ClError {
    /// OpenCL‑Statuscode, falls der Fehler aus der API stammt
    pub fn status(&self) -> Option<i32> {
        match self {
            ClError::Api(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<opencl3::error_codes::ClError> for ClError {
    #[inline]
    fn from(err: opencl3::error_codes::ClError) -> Self {
        ClError::Api(err.0)
    }
}

impl From<i32> for ClError {
    #[inline]
    fn from(code: i32) -> Self {
        ClError::Api(code)
    }
}

/// Negative Statuscodes melden: `Error Code : <n>`.
/// Gibt `true` zurück, wenn der Status ein Fehler war.
pub fn report_status(status: i32) -> bool {
    if status < 0 {
        log::error!("Error Code : {status}");
        true
    } else {
        false
    }
}
