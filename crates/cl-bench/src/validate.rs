use std::io::{self, Write};

use crate::{ClError, ensure_same_size};

/// Ergebnis des Element‑Vergleichs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Pass,
    /// erster abweichender Index; danach wird nicht weiter verglichen
    Fail { index: usize, expected: f32, actual: f32 },
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// `|actual - expected| <= tolerance` für jedes Element.
/// NaN liegt nie innerhalb der Toleranz; ungleiche Längen sind ein Fehler.
pub fn validate(actual: &[f32], expected: &[f32], tolerance: f32) -> Result<Verdict, ClError> {
    ensure_same_size(expected.len(), actual.len())?;
    Ok(actual
        .iter()
        .zip(expected)
        .position(|(&a, &e)| !((a - e).abs() <= tolerance))
        .map_or(Verdict::Pass, |index| Verdict::Fail {
            index,
            expected: expected[index],
            actual: actual[index],
        }))
}

/// `PASSED` bzw. erste Abweichung mit beiden Werten + `FAILED`
pub fn report_verdict<W: Write>(out: &mut W, verdict: &Verdict) -> io::Result<()> {
    match *verdict {
        Verdict::Pass => writeln!(out, "PASSED"),
        Verdict::Fail { index, expected, actual } => {
            writeln!(out, "Mismatch at {index}: expected {expected}, got {actual}")?;
            writeln!(out, "FAILED")
        }
    }
}
