use cl_bench::{ClError, HostData, Verdict, config::TOLERANCE, report_verdict, validate};

fn report(verdict: &Verdict) -> String {
    let mut out = Vec::new();
    report_verdict(&mut out, verdict).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn two_element_scenario_passes() {
    let mut host = HostData::from_inputs(vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
    host.compute_golden();
    assert_eq!(host.golden, vec![4.0, 6.0]);

    let v = validate(&[4.0, 6.0], &host.golden, TOLERANCE).unwrap();
    assert_eq!(v, Verdict::Pass);
    assert_eq!(report(&v), "PASSED\n");
}

#[test]
fn two_element_scenario_fails_with_both_values() {
    let golden = [4.0_f32, 6.0];
    let v = validate(&[4.0, 6.1], &golden, TOLERANCE).unwrap();
    match v {
        Verdict::Fail { index, expected, actual } => {
            assert_eq!(index, 1);
            assert_eq!(expected, 6.0);
            assert_eq!(actual, 6.1);
        }
        Verdict::Pass => panic!("6.1 must not pass against 6.0"),
    }
    assert_eq!(report(&v), "Mismatch at 1: expected 6, got 6.1\nFAILED\n");
}

#[test]
fn stops_at_first_mismatch() {
    let golden = vec![0.5_f32; 100_000];
    let mut out = golden.clone();
    out[41_999] += 1.0;
    out[77_000] -= 1.0;

    let v = validate(&out, &golden, TOLERANCE).unwrap();
    assert!(matches!(v, Verdict::Fail { index: 41_999, .. }));
    assert!(!v.passed());
    // nur die erste Abweichung wird ausgegeben
    assert_eq!(report(&v), "Mismatch at 41999: expected 0.5, got 1.5\nFAILED\n");
}

#[test]
fn difference_within_tolerance_passes() {
    let golden = [0.1_f32, 0.2];
    let out = [0.1 + 0.00005, 0.2 - 0.00005];
    assert!(validate(&out, &golden, TOLERANCE).unwrap().passed());
}

#[test]
fn nan_never_passes() {
    let v = validate(&[f32::NAN], &[0.0], TOLERANCE).unwrap();
    assert!(matches!(v, Verdict::Fail { index: 0, .. }));
}

#[test]
fn truncated_result_is_an_error_not_a_pass() {
    let err = validate(&[4.0], &[4.0, 6.0], TOLERANCE).unwrap_err();
    assert!(matches!(err, ClError::SizeMismatch { expected: 2, actual: 1 }));

    // auch zu lange Ergebnisse
    assert!(validate(&[4.0, 6.0, 0.0], &[4.0, 6.0], TOLERANCE).is_err());
}

#[test]
fn inputs_of_different_length_are_rejected() {
    let err = HostData::from_inputs(vec![1.0, 2.0], vec![3.0]).unwrap_err();
    assert!(matches!(err, ClError::SizeMismatch { expected: 2, actual: 1 }));
}
