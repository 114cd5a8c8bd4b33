use quantum::{
    apply_cpermute, apply_permute, apply_phase3, apply_rx3, apply_rz3, measure_all,
    trinary::permute,
};
use rng::ONDRng;
use statevec::{QuditError, Register};

const CYCLES: [&[usize]; 3] = [&[0, 1, 2], &[1, 2, 0], &[2, 0, 1]];

#[test]
fn permute_moves_zero_to_one() {
    let mut reg = Register::with_rng(3, 1, ONDRng::new(b"permute")).unwrap();
    reg.apply_single(0, &permute([1, 2, 0]).unwrap()).unwrap();
    assert_eq!(reg.probabilities(), vec![0.0, 1.0, 0.0]);
}

#[test]
fn permute_cycles_amplitudes() {
    // a|0> + b|1> + c|2> -> c|0> + a|1> + b|2>
    let mut reg = Register::with_rng(3, 1, ONDRng::new(b"cycle")).unwrap();
    apply_rz3(&mut reg, 0, 0.5).unwrap();
    apply_rx3(&mut reg, 0, 0.9).unwrap();
    let before = reg.amplitudes().to_vec();
    apply_permute(&mut reg, 0, &[1, 2, 0]).unwrap();
    let after = reg.amplitudes();
    assert!((after[1] - before[0]).norm() < 1e-12);
    assert!((after[2] - before[1]).norm() < 1e-12);
    assert!((after[0] - before[2]).norm() < 1e-12);
}

#[test]
fn phase_keeps_probabilities() {
    let mut reg = Register::with_rng(3, 2, ONDRng::new(b"phase")).unwrap();
    apply_rz3(&mut reg, 1, 0.7).unwrap();
    apply_rx3(&mut reg, 1, 1.3).unwrap();
    let before = reg.probabilities();
    apply_phase3(&mut reg, 1, 0.4, -2.0).unwrap();
    for (a, b) in reg.probabilities().iter().zip(&before) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn cpermute_entangles_control_and_target() {
    for shot in 0..60 {
        let rng = ONDRng::new(format!("trinary-bell-{}", shot).as_bytes());
        let mut reg = Register::with_rng(3, 2, rng).unwrap();
        apply_rz3(&mut reg, 0, std::f64::consts::FRAC_PI_4).unwrap();
        apply_rx3(&mut reg, 0, std::f64::consts::FRAC_PI_4).unwrap();
        apply_cpermute(&mut reg, 0, 1, &CYCLES).unwrap();

        // target starts at 0 and is cycled by the control value
        let outcomes = measure_all(&mut reg).unwrap();
        assert_eq!(outcomes[1], outcomes[0], "outcomes = {:?}", outcomes);
    }
}

#[test]
fn cpermute_control_on_higher_qudit() {
    let mut reg = Register::with_rng(3, 2, ONDRng::new(b"high")).unwrap();
    reg.set_state(3).unwrap(); // qudit 1 = 1, qudit 0 = 0
    apply_cpermute(&mut reg, 1, 0, &CYCLES).unwrap();
    assert!((reg.probabilities()[4] - 1.0).abs() < 1e-12);
}

#[test]
fn bad_permutation_leaves_state() {
    let mut reg = Register::with_rng(3, 1, ONDRng::new(b"bad")).unwrap();
    assert_eq!(
        apply_permute(&mut reg, 0, &[0, 2, 2]),
        Err(QuditError::InvalidPermutation(vec![0, 2, 2]))
    );
    assert!(apply_permute(&mut reg, 0, &[1, 0]).is_err());
    assert_eq!(reg.probabilities()[0], 1.0);
}
