//! End-to-end tests: generators → semigroup → gap graph → dominating set

use semigap_domination::app::solver::{SearchMethod, SolverOptions, domination_number_with_options};
use semigap_domination::domain::domination::is_dominating_set;
use semigap_domination::{
    AnalysisOptions, DEFAULT_LIMIT_FACTOR, InputError, analyze, build_gap_graph,
    build_gap_graph_with_limit, domination_number, generate_semigroup, perfect_circle_layout,
};

// =============================================================================
// Scenario: generators [3, 5], limit factor 4
// =============================================================================

#[test]
fn test_three_five_semigroup() {
    let s = generate_semigroup(&[3, 5], 4).unwrap();

    assert_eq!(s.bound(), 20);
    for x in [0, 3, 5, 6, 8, 9, 10, 11] {
        assert!(s.contains(x));
    }
    for x in [1, 2, 4, 7] {
        assert!(!s.contains(x));
    }
}

#[test]
fn test_three_five_graph_and_domination() {
    let gg = build_gap_graph_with_limit(&[3, 5], 4).unwrap();

    assert_eq!(gg.gaps, vec![1, 2, 4, 7]);
    assert!(gg.graph.has_edge(1, 4)); // 3 ∈ S
    assert!(!gg.graph.has_edge(1, 2)); // 1 ∉ S

    // 7 is adjacent to every other gap
    let result = domination_number(&gg.graph);
    assert_eq!(result.set, vec![7]);
    assert_eq!(result.size, 1);
    assert!(is_dominating_set(&gg.graph, &result.set));
}

// =============================================================================
// Larger semigroups
// =============================================================================

#[test]
fn test_six_seven_uses_greedy_and_stays_valid() {
    let gg = build_gap_graph(&[6, 7]).unwrap();
    assert_eq!(gg.gaps.len(), 15);

    let greedy = domination_number(&gg.graph);
    assert_eq!(greedy.method, SearchMethod::Greedy);
    assert!(is_dominating_set(&gg.graph, &greedy.set));

    let exact = domination_number_with_options(
        &gg.graph,
        SolverOptions::default().with_exact_threshold(15),
    )
    .unwrap();
    assert_eq!(exact.method, SearchMethod::Exact);
    assert!(is_dominating_set(&gg.graph, &exact.set));
    assert!(greedy.size >= exact.size);
}

#[test]
fn test_many_generator_sets_yield_valid_sets() {
    let cases: &[&[u32]] = &[
        &[2, 3],
        &[3, 4],
        &[3, 7],
        &[4, 5],
        &[4, 6, 9],
        &[5, 6, 7],
        &[5, 8],
        &[7, 8],
        &[7, 11, 13],
    ];

    for generators in cases {
        let gg = build_gap_graph(generators).unwrap();
        let result = domination_number(&gg.graph);

        assert_eq!(result.size, result.set.len());
        assert!(
            is_dominating_set(&gg.graph, &result.set),
            "generators {:?}",
            generators
        );
    }
}

#[test]
fn test_no_gaps() {
    let gg = build_gap_graph(&[1]).unwrap();
    let result = domination_number(&gg.graph);

    assert!(result.set.is_empty());
    assert_eq!(result.size, 0);
    assert!(perfect_circle_layout(&gg.graph).is_empty());
}

#[test]
fn test_layout_is_bijective() {
    let gg = build_gap_graph(&[5, 7]).unwrap();
    let layout = perfect_circle_layout(&gg.graph);

    assert_eq!(layout.len(), gg.gaps.len());
    assert!(gg.gaps.iter().all(|g| layout.contains_key(g)));
}

// =============================================================================
// Analysis report
// =============================================================================

#[test]
fn test_analysis_report_consistent() {
    let report = analyze(&[4, 7], &AnalysisOptions::default().with_layout(true)).unwrap();

    assert_eq!(report.limit_factor, DEFAULT_LIMIT_FACTOR);
    assert_eq!(report.bound, 7 * DEFAULT_LIMIT_FACTOR);
    assert_eq!(report.invariants.genus, report.gaps.len());
    assert_eq!(report.invariants.frobenius_number, Some(17));
    assert_eq!(report.layout.as_ref().map(|l| l.len()), Some(report.gaps.len()));
}

#[test]
fn test_invalid_input_surfaces_immediately() {
    assert!(matches!(
        analyze(&[0, 3], &AnalysisOptions::default()),
        Err(InputError::ZeroGenerator { index: 0 })
    ));
    assert!(matches!(
        analyze(&[3, 5], &AnalysisOptions::default().with_limit_factor(0)),
        Err(InputError::ZeroLimitFactor)
    ));
}
