use gridtune_core::{Component, GtError, Scorer, TargetVector};

fn two_component_model() -> Vec<Component> {
    vec![
        Component::new(
            "Front Wing",
            10.0,
            5.0,
            1.0,
            vec![("A".to_string(), 0.2), ("B".to_string(), -0.1)],
        ),
        Component::new(
            "Rear Wing",
            20.0,
            5.0,
            1.0,
            vec![("A".to_string(), -0.05), ("B".to_string(), 0.3)],
        ),
    ]
}

#[test]
fn outcome_is_linear_in_midpoint_deviation() {
    let components = two_component_model();
    let target = TargetVector::new(vec![("A".to_string(), 0.0), ("B".to_string(), 0.0)]);
    let scorer = Scorer::new(&components, &target).unwrap();

    // Settings +2 and -1 from the midpoints.
    let outcomes = scorer.outcomes(&[12.0, 19.0]);
    // A: 2*0.2 + (-1)*(-0.05) = 0.45; B: 2*(-0.1) + (-1)*0.3 = -0.5
    assert_eq!(outcomes[0].0, "A");
    assert!((outcomes[0].1 - 0.45).abs() < 1e-12);
    assert_eq!(outcomes[1].0, "B");
    assert!((outcomes[1].1 + 0.5).abs() < 1e-12);
}

#[test]
fn deviation_is_l1_over_aspects() {
    let components = two_component_model();
    let target = TargetVector::new(vec![("A".to_string(), 0.4), ("B".to_string(), -0.4)]);
    let scorer = Scorer::new(&components, &target).unwrap();

    // outcomes 0.45 and -0.5 -> |0.05| + |-0.1| = 0.15
    let s = scorer.score(&[12.0, 19.0]);
    assert!((s - 0.15).abs() < 1e-12);

    // Midpoint tuple: outcomes are zero, deviation is |target| summed.
    let s0 = scorer.score(&[10.0, 20.0]);
    assert!((s0 - 0.8).abs() < 1e-12);
}

#[test]
fn score_is_invariant_under_aspect_permutation() {
    let components = two_component_model();
    let tuple = [13.0, 17.0];

    let fwd = TargetVector::new(vec![("A".to_string(), 0.4), ("B".to_string(), -0.4)]);
    let rev = TargetVector::new(vec![("B".to_string(), -0.4), ("A".to_string(), 0.4)]);

    let s_fwd = Scorer::new(&components, &fwd).unwrap().score(&tuple);
    let s_rev = Scorer::new(&components, &rev).unwrap().score(&tuple);
    assert!((s_fwd - s_rev).abs() < 1e-12);
}

#[test]
fn missing_coefficient_is_an_error_not_zero() {
    let components = vec![
        Component::new("Wing", 0.0, 1.0, 1.0, vec![("A".to_string(), 0.5)]),
        Component::new(
            "Gears",
            0.0,
            1.0,
            1.0,
            vec![("A".to_string(), 0.1), ("B".to_string(), 0.2)],
        ),
    ];
    let target = TargetVector::new(vec![("A".to_string(), 0.0), ("B".to_string(), 0.0)]);
    match Scorer::new(&components, &target) {
        Err(GtError::Configuration(_)) | Err(GtError::Lookup(_)) => {}
        other => panic!("expected hard error, got {:?}", other.map(|_| ())),
    }
}
