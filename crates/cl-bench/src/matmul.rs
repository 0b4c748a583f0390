//! Host‑Seite des Matrix‑Multiplikations‑Gerüsts (`C = A · B`, row‑major, f64).

use std::time::{Duration, Instant};

use rand::Rng;

use crate::ClError;

pub const A_ROWS: usize = 64;
pub const A_COLS: usize = 32;
pub const B_ROWS: usize = 32;
pub const B_COLS: usize = 48;

/// M × K mal K × N
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatmulDims {
    pub m: usize,
    pub n: usize,
    pub k: usize,
}

impl MatmulDims {
    pub fn new(a_rows: usize, a_cols: usize, b_rows: usize, b_cols: usize) -> Result<Self, ClError> {
        if a_cols != b_rows {
            return Err(ClError::SizeMismatch { expected: a_cols, actual: b_rows });
        }
        if a_rows == 0 || a_cols == 0 || b_cols == 0 {
            return Err(ClError::InvalidSize(0));
        }
        Ok(Self { m: a_rows, n: b_cols, k: a_cols })
    }
}

impl Default for MatmulDims {
    fn default() -> Self {
        Self { m: A_ROWS, n: B_COLS, k: A_COLS }
    }
}

#[derive(Debug, Clone)]
pub struct HostMatrices {
    pub dims: MatmulDims,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
    pub golden: Vec<f64>,
}

impl HostMatrices {
    /// A und B zufällig in `[0, range)`, C und golden genullt
    pub fn random<R: Rng>(dims: MatmulDims, range: f64, rng: &mut R) -> Self {
        let MatmulDims { m, n, k } = dims;
        Self {
            dims,
            a: (0..m * k).map(|_| rng.gen_range(0.0..range)).collect(),
            b: (0..k * n).map(|_| rng.gen_range(0.0..range)).collect(),
            c: vec![0.0; m * n],
            golden: vec![0.0; m * n],
        }
    }

    pub fn compute_golden(&mut self) -> Duration {
        let t = Instant::now();
        matmul_into(self.dims, &self.a, &self.b, &mut self.golden);
        t.elapsed()
    }

    /// Bytes aller vier Host‑Matrizen
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of::<f64>() * (self.a.len() + self.b.len() + self.c.len() + self.golden.len())
    }
}

/// naive i‑k‑j Schleife, `dst` wird überschrieben
pub fn matmul_into(dims: MatmulDims, a: &[f64], b: &[f64], dst: &mut [f64]) {
    let MatmulDims { m, n, k } = dims;
    dst.fill(0.0);
    for i in 0..m {
        let row = &mut dst[i * n..(i + 1) * n];
        for p in 0..k {
            let aip = a[i * k + p];
            for (d, &bpj) in row.iter_mut().zip(&b[p * n..(p + 1) * n]) {
                *d += aip * bpj;
            }
        }
    }
}
