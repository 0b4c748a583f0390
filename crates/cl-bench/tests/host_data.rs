use cl_bench::{
    HostData, RunningAverage,
    buffer::ensure_same_size,
    ClError,
    config::{BenchConfig, INPUT_RANGE, SIZE},
    matmul::{matmul_into, HostMatrices, MatmulDims},
};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn random_inputs_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let host = HostData::random(SIZE, INPUT_RANGE, &mut rng);

    assert_eq!(host.len(), SIZE);
    assert_eq!(host.b.len(), SIZE);
    assert!(host.a.iter().chain(&host.b).all(|&x| (0.0..INPUT_RANGE).contains(&x)));
    assert!(host.out.iter().all(|&x| x == 0.0));
}

#[test]
fn golden_is_exact_elementwise_sum() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut host = HostData::random(10_000, INPUT_RANGE, &mut rng);
    host.compute_golden();

    for i in 0..host.len() {
        assert_eq!(host.golden[i], host.a[i] + host.b[i]);
    }
}

#[test]
fn default_config_matches_benchmark_constants() {
    let cfg = BenchConfig::default();
    assert_eq!(cfg.size, 100_000);
    assert_eq!(cfg.iterations, 100);
    assert_eq!(cfg.tolerance, 0.0001);
    assert_eq!(cfg.kernel_path.to_str(), Some("bin/add/add.aocx"));
    assert_eq!(cfg.entry_point, "add");
    assert_eq!(cfg.size_bytes(), 400_000);
}

#[test]
fn running_average_divides_by_completed_runs() {
    let mut avg = RunningAverage::default();
    assert_eq!(avg.average_ms(), 0.0);

    avg.push(1_000_000);
    assert_eq!(avg.average_ms(), 1.0);
    avg.push(3_000_000);
    assert_eq!(avg.runs(), 2);
    assert_eq!(avg.total_ns(), 4_000_000);
    assert_eq!(avg.average_ms(), 2.0);
}

#[test]
fn transfer_sizes_must_match() {
    assert!(ensure_same_size(400, 400).is_ok());
    assert!(matches!(
        ensure_same_size(400, 396),
        Err(ClError::SizeMismatch { expected: 400, actual: 396 })
    ));
}

#[test]
fn matmul_dims_require_matching_inner_dimension() {
    assert!(matches!(MatmulDims::new(4, 3, 2, 5), Err(ClError::SizeMismatch { .. })));
    let d = MatmulDims::new(4, 3, 3, 5).unwrap();
    assert_eq!((d.m, d.n, d.k), (4, 5, 3));
}

#[test]
fn matmul_reference_small() {
    // [1 2; 3 4] · [5 6; 7 8] = [19 22; 43 50]
    let dims = MatmulDims::new(2, 2, 2, 2).unwrap();
    let mut c = vec![9.0; 4];
    matmul_into(dims, &[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0], &mut c);
    assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn matmul_host_buffers_have_expected_shapes() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut host = HostMatrices::random(MatmulDims::default(), 0.1, &mut rng);
    host.compute_golden();

    let MatmulDims { m, n, k } = host.dims;
    assert_eq!(host.a.len(), m * k);
    assert_eq!(host.b.len(), k * n);
    assert_eq!(host.golden.len(), m * n);
    assert_eq!(host.size_bytes(), 8 * (m * k + k * n + 2 * m * n));

    let g01: f64 = (0..k).map(|p| host.a[p] * host.b[p * n + 1]).sum();
    assert!((host.golden[1] - g01).abs() < 1e-12);
}
