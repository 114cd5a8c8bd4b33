use quantum::{apply_cnot, apply_h, gates::hadamard, measure_all};
use rng::ONDRng;
use statevec::Register;

#[test]
fn bell_state_amplitudes() {
    let mut psi = Register::with_rng(2, 2, ONDRng::new(b"bell")).unwrap();

    apply_h(&mut psi, 0).unwrap();
    apply_cnot(&mut psi, 0, 1).unwrap();

    let s = std::f64::consts::FRAC_1_SQRT_2;
    let expected = [s, 0.0, 0.0, s];
    for (i, (a, e)) in psi.amplitudes().iter().zip(expected).enumerate() {
        assert!((a.re - e).abs() < 1e-12, "amp[{}] = {}", i, a);
        assert!(a.im.abs() < 1e-12, "amp[{}] = {}", i, a);
    }
}

#[test]
fn bell_state_z_correlation() {
    let mut counts = [[0usize; 2]; 2];

    for shot in 0..100 {
        let rng = ONDRng::new(format!("seed-{}", shot).as_bytes());
        let mut psi = Register::with_rng(2, 2, rng).unwrap();

        psi.apply_single(0, &hadamard()).unwrap();
        apply_cnot(&mut psi, 0, 1).unwrap();

        let m0 = psi.measure(0).unwrap();
        let m1 = psi.measure(1).unwrap();

        counts[m0][m1] += 1;
    }

    assert_eq!(counts[0][1], 0, "Found |01> in Bell state");
    assert_eq!(counts[1][0], 0, "Found |10> in Bell state");

    assert!(
        counts[0][0] > 0,
        "Never observed |00>, counts = {:?}",
        counts
    );
    assert!(
        counts[1][1] > 0,
        "Never observed |11>, counts = {:?}",
        counts
    );
}

#[test]
fn measured_bell_pair_collapses_to_basis_state() {
    let mut psi = Register::with_rng(2, 2, ONDRng::new(b"collapse")).unwrap();
    apply_h(&mut psi, 0).unwrap();
    apply_cnot(&mut psi, 0, 1).unwrap();

    let outcomes = measure_all(&mut psi).unwrap();
    assert_eq!(outcomes[0], outcomes[1]);
    let k = outcomes[0] * 3;
    assert!((psi.probabilities()[k] - 1.0).abs() < 1e-12);
}
