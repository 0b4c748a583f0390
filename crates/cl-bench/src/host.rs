use std::time::{Duration, Instant};

use rand::Rng;

use crate::{ClError, ensure_same_size};

/// Host‑seitige Vektoren des Benchmarks.
/// `golden` ist die Referenz, `out` nimmt das Geräteergebnis auf.
#[derive(Debug, Clone)]
pub struct HostData {
    pub a: Vec<f32>,
    pub b: Vec<f32>,
    pub out: Vec<f32>,
    pub golden: Vec<f32>,
}

impl HostData {
    /// Zufallseingaben in `[0, range)`, Ausgabe genullt, Referenz noch leer
    pub fn random<R: Rng>(size: usize, range: f32, rng: &mut R) -> Self {
        let a = (0..size).map(|_| rng.gen_range(0.0..range)).collect();
        let b = (0..size).map(|_| rng.gen_range(0.0..range)).collect();
        Self::with_inputs(a, b, size)
    }

    /// Eingaben müssen gleich lang sein
    pub fn from_inputs(a: Vec<f32>, b: Vec<f32>) -> Result<Self, ClError> {
        ensure_same_size(a.len(), b.len())?;
        let n = a.len();
        Ok(Self::with_inputs(a, b, n))
    }

    fn with_inputs(a: Vec<f32>, b: Vec<f32>, n: usize) -> Self {
        Self { a, b, out: vec![0.0; n], golden: vec![0.0; n] }
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Referenz auf dem Host berechnen; die Zeit dient nur der Ausgabe
    pub fn compute_golden(&mut self) -> Duration {
        let t = Instant::now();
        add_into(&self.a, &self.b, &mut self.golden);
        t.elapsed()
    }
}

/// `dst[i] = a[i] + b[i]`
pub fn add_into(a: &[f32], b: &[f32], dst: &mut [f32]) {
    for ((d, &x), &y) in dst.iter_mut().zip(a).zip(b) {
        *d = x + y;
    }
}
