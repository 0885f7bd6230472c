//! End-to-end circuit scenarios exercised against the public `Simulator` API,
//! as opposed to the unit tests colocated with the simulator's internals.

use simplex_core::Simulator;

#[test]
fn single_qubit_x_is_deterministic() {
    let mut sim = Simulator::with_seed(2, 1);
    sim.x(0);
    assert!(sim.meas_z(0, None));
    assert!(!sim.meas_z(1, None));
    assert!(sim.is_deterministic());
}

#[test]
fn hadamard_leaves_other_qubit_deterministic() {
    let mut sim = Simulator::with_seed(2, 1);
    sim.h(1);
    assert!(!sim.meas_z(0, Some(false)));
    assert!(sim.is_deterministic());
    sim.meas_z(1, Some(true));
    assert!(!sim.is_deterministic());
}

#[test]
fn cx_after_x_entangles_both_qubits_to_one() {
    let mut sim = Simulator::with_seed(2, 1);
    sim.x(0);
    sim.cx(0, 1);
    assert!(sim.meas_z(0, None));
    assert!(sim.meas_z(1, None));
    assert!(sim.is_deterministic());
}

#[test]
fn ghz_chain_of_thirty_qubits_agrees_and_is_random() {
    let mut sim = Simulator::with_seed(30, 7);
    sim.h(0);
    for target in 1..30 {
        sim.cx(0, target);
    }
    let first = sim.meas_z(0, None);
    for target in 1..30 {
        assert_eq!(sim.meas_z(target, None), first);
    }
    assert!(!sim.is_deterministic());
}

#[test]
fn ghz_three_qubit_coin_histogram_matches_reference() {
    let mut histogram = [0usize; 8];
    for coins in 0..8usize {
        let mut sim = Simulator::with_seed(3, 99);
        sim.h(0);
        sim.cx(0, 1);
        sim.cx(0, 2);
        let bits = [
            (coins >> 2) & 1 == 1,
            (coins >> 1) & 1 == 1,
            coins & 1 == 1,
        ];
        let outcomes = [
            sim.meas_z(0, Some(bits[0])),
            sim.meas_z(1, Some(bits[1])),
            sim.meas_z(2, Some(bits[2])),
        ];
        let idx = (usize::from(outcomes[0]) << 2)
            | (usize::from(outcomes[1]) << 1)
            | usize::from(outcomes[2]);
        histogram[idx] += 1;
    }
    assert_eq!(histogram, [4, 0, 0, 0, 0, 0, 0, 4]);
}

#[test]
fn forking_at_a_measurement_explores_both_branches() {
    let mut sim = Simulator::with_seed(1, 3);
    sim.h(0);
    let mut branch_zero = sim.clone();
    let mut branch_one = sim.clone();
    let outcome_zero = branch_zero.meas_z(0, Some(false));
    let outcome_one = branch_one.meas_z(0, Some(true));
    assert!(!outcome_zero);
    assert!(outcome_one);
}

#[test]
fn cz_entangles_phase_without_entangling_bit_value() {
    let mut sim = Simulator::with_seed(2, 5);
    sim.x(0);
    sim.cz(0, 1);
    assert!(sim.meas_z(0, None));
    assert!(!sim.meas_z(1, None));
    assert!(sim.is_deterministic());
}

#[test]
fn inverse_circuit_returns_to_computational_zero() {
    let forward: Vec<(&str, usize, Option<usize>)> = vec![
        ("h", 0, None),
        ("cx", 0, Some(1)),
        ("s", 1, None),
        ("cx", 1, Some(0)),
        ("cz", 0, Some(1)),
        ("x", 1, None),
    ];

    let apply = |sim: &mut Simulator, name: &str, a: usize, b: Option<usize>| match (name, b) {
        ("h", None) => sim.h(a),
        ("x", None) => sim.x(a),
        ("s", None) => sim.s(a),
        ("sdg", None) => sim.sdg(a),
        ("cx", Some(k)) => sim.cx(a, k),
        ("cz", Some(k)) => sim.cz(a, k),
        _ => unreachable!("unsupported op in this test table"),
    };

    let inverse_of = |name: &str| match name {
        "s" => "sdg",
        "sdg" => "s",
        other => other,
    };

    let mut sim = Simulator::with_seed(2, 11);
    for &(name, a, b) in &forward {
        apply(&mut sim, name, a, b);
    }
    for &(name, a, b) in forward.iter().rev() {
        apply(&mut sim, inverse_of(name), a, b);
    }

    assert!(!sim.meas_z(0, Some(false)));
    assert!(!sim.meas_z(1, Some(false)));
    assert!(sim.is_deterministic());
}

#[test]
fn debug_display_reports_qubit_count_and_sections() {
    let mut sim = Simulator::with_seed(2, 1);
    sim.h(0);
    sim.cx(0, 1);
    let text = sim.to_string();
    assert!(text.starts_with("n: 2"));
    assert!(text.contains("A:"));
    assert!(text.contains("Q:"));
    assert!(text.contains("<-->"));
}
