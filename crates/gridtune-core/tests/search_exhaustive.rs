use gridtune_core::domain::build_domain;
use gridtune_core::search::exhaustive::{combination_count, search_exhaustive};
use gridtune_core::{Component, TargetVector};

#[test]
fn achievable_target_scores_zero() {
    let c = Component::new("Wing", 0.0, 4.0, 1.0, vec![("A".to_string(), 0.25)]);
    let domains = vec![build_domain(&c).unwrap()];
    let target = TargetVector::new(vec![("A".to_string(), 0.75)]);

    let (best, score) = search_exhaustive(&domains, &[c], &target).unwrap();
    assert!((best[0] - 3.0).abs() < 1e-9);
    assert!(score.abs() < 1e-12);
}

#[test]
fn picks_the_closer_of_two_settings() {
    // Domain {-1, 0, 1}, coefficient 0.5, target 0.4: setting 1 gives
    // outcome 0.5 (deviation 0.1) and must beat setting 0 (deviation 0.4).
    let c = Component::new("Wing", 0.0, 1.0, 1.0, vec![("A".to_string(), 0.5)]);
    let domains = vec![build_domain(&c).unwrap()];
    let target = TargetVector::new(vec![("A".to_string(), 0.4)]);

    let (best, score) = search_exhaustive(&domains, &[c], &target).unwrap();
    assert!((best[0] - 1.0).abs() < 1e-9);
    assert!((score - 0.1).abs() < 1e-9);
}

#[test]
fn ties_resolve_to_the_first_tuple_in_enumeration_order() {
    // Settings -1 and +1 both deviate by 0.5; ascending order visits -1 first.
    let components = [Component::new(
        "Wing",
        0.0,
        1.0,
        1.0,
        vec![("A".to_string(), 0.5)],
    )];
    let domains = vec![build_domain(&components[0]).unwrap()];
    let target = TargetVector::new(vec![("A".to_string(), 0.0)]);

    let (best, score) = search_exhaustive(&domains, &components, &target).unwrap();
    assert!((best[0] - 0.0).abs() < 1e-9);
    assert!(score.abs() < 1e-12);

    // Now force the tie between the two extremes only.
    let sparse = vec![vec![-1.0, 1.0]];
    let (best, score) = search_exhaustive(&sparse, &components, &target).unwrap();
    assert!((best[0] + 1.0).abs() < 1e-9, "first-encountered must win");
    assert!((score - 0.5).abs() < 1e-12);
}

#[test]
fn last_component_varies_fastest() {
    // Two components whose settings cancel pairwise: every tuple with
    // a+b == 0 scores identically. The first such tuple in odometer order is
    // (a = -1, b = +1): the first component holds its lowest setting while
    // the second scans.
    let a = Component::new("A", 0.0, 1.0, 1.0, vec![("X".to_string(), 1.0)]);
    let b = Component::new("B", 0.0, 1.0, 1.0, vec![("X".to_string(), 1.0)]);
    let domains = vec![build_domain(&a).unwrap(), build_domain(&b).unwrap()];
    let target = TargetVector::new(vec![("X".to_string(), 0.0)]);

    let (best, score) = search_exhaustive(&domains, &[a, b], &target).unwrap();
    assert!(score.abs() < 1e-12);
    assert!((best[0] + 1.0).abs() < 1e-9);
    assert!((best[1] - 1.0).abs() < 1e-9);
}

#[test]
fn combination_count_is_the_domain_product() {
    let domains = vec![vec![0.0; 101], vec![0.0; 11], vec![0.0; 3]];
    assert_eq!(combination_count(&domains), 101 * 11 * 3);
}

#[test]
fn reference_car_domains_all_tile() {
    let components = gridtune_core::model::defaults::reference_components();
    let mut sizes = Vec::new();
    for c in &components {
        let d = build_domain(c).unwrap();
        assert_eq!(d.len() % 2, 1, "{} grid must be odd", c.name);
        sizes.push(d.len());
    }
    assert_eq!(sizes, vec![101, 101, 11, 11, 17, 17]);
}
