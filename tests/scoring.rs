use cvss_calc::catalog;
use cvss_calc::engine::{base_score, compute_score, compute_score_with, Formula};
use cvss_calc::types::metric::{
    AttackComplexity, AttackVector, ImpactLevel, MetricKey, PrivilegesRequired, Scope,
    UserInteraction,
};
use cvss_calc::vector::{decode_vector, encode_metrics, encode_vector};
use cvss_calc::{BaseMetrics, CvssError, Selection};
use proptest::prelude::*;
use rstest::rstest;
use strum::IntoEnumIterator;

fn every_combination() -> Vec<BaseMetrics> {
    let mut all = Vec::new();
    for attack_vector in AttackVector::iter() {
        for attack_complexity in AttackComplexity::iter() {
            for privileges_required in PrivilegesRequired::iter() {
                for user_interaction in UserInteraction::iter() {
                    for scope in Scope::iter() {
                        for confidentiality in ImpactLevel::iter() {
                            for integrity in ImpactLevel::iter() {
                                for availability in ImpactLevel::iter() {
                                    all.push(BaseMetrics {
                                        attack_vector,
                                        attack_complexity,
                                        privileges_required,
                                        user_interaction,
                                        scope,
                                        confidentiality,
                                        integrity,
                                        availability,
                                    });
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    all
}

fn is_tenth(score: f64) -> bool {
    let scaled = score * 10.0;
    (scaled - scaled.round()).abs() < 1e-9
}

#[test]
fn every_combination_scores_within_range() {
    let combos = every_combination();
    assert_eq!(combos.len(), 2592);

    for metrics in combos {
        let selection = Selection::from(metrics);
        for formula in [Formula::Simplified, Formula::Official] {
            let score = compute_score_with(&selection, formula).expect("complete selection");
            assert!(
                (0.0..=10.0).contains(&score),
                "{} scored {score} with {formula:?}",
                encode_metrics(&metrics)
            );
            assert!(is_tenth(score), "{score} is not a multiple of 0.1");
        }
    }
}

#[test]
fn every_combination_vector_decodes_to_same_selection() {
    for metrics in every_combination() {
        let selection = Selection::from(metrics);
        let vector = encode_vector(&selection).expect("complete selection");
        assert_eq!(decode_vector(&vector).expect("own output decodes"), selection);
    }
}

#[rstest]
#[case::weakest(
    [("AV", "Physical"), ("AC", "High"), ("PR", "High"), ("UI", "Required"),
     ("S", "Unchanged"), ("C", "None"), ("I", "None"), ("A", "None")],
    0.2
)]
#[case::strongest(
    [("AV", "Network"), ("AC", "Low"), ("PR", "None"), ("UI", "None"),
     ("S", "Unchanged"), ("C", "High"), ("I", "High"), ("A", "High")],
    9.8
)]
#[case::scope_changed_is_ignored(
    [("AV", "Network"), ("AC", "Low"), ("PR", "None"), ("UI", "None"),
     ("S", "Changed"), ("C", "High"), ("I", "High"), ("A", "High")],
    9.8
)]
#[case::local_low_impact(
    [("AV", "Local"), ("AC", "Low"), ("PR", "Low"), ("UI", "None"),
     ("S", "Unchanged"), ("C", "Low"), ("I", "None"), ("A", "None")],
    3.3
)]
fn known_selections_score_exactly(#[case] pairs: [(&str, &str); 8], #[case] expected: f64) {
    let selection = Selection::from_pairs(pairs).expect("pairs are valid");
    assert_eq!(compute_score(&selection).expect("complete selection"), expected);
}

#[rstest]
#[case::log4shell("AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:H/A:H", 10.0)]
#[case::heartbleed("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:N/A:N", 7.5)]
#[case::physical_access("AV:P/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H", 6.8)]
#[case::no_impact("AV:N/AC:L/PR:N/UI:N/S:U/C:N/I:N/A:N", 0.0)]
fn official_formula_matches_published_scores(#[case] vector: &str, #[case] expected: f64) {
    let selection = decode_vector(vector).expect("vector is valid");
    assert_eq!(
        compute_score_with(&selection, Formula::Official).expect("complete selection"),
        expected
    );
}

#[test]
fn known_vector_encodes_exactly() {
    let selection = Selection::from_pairs([
        ("AV", "Network"),
        ("AC", "Low"),
        ("PR", "None"),
        ("UI", "None"),
        ("S", "Unchanged"),
        ("C", "High"),
        ("I", "None"),
        ("A", "Low"),
    ])
    .expect("pairs are valid");
    assert_eq!(
        encode_vector(&selection).expect("complete selection"),
        "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:N/A:L"
    );
}

#[test]
fn missing_attack_vector_is_an_invalid_selection() {
    let mut selection = Selection::default();
    selection.remove(MetricKey::AV);

    let err = compute_score(&selection).expect_err("AV is required");
    assert!(matches!(err, CvssError::InvalidSelection(_)));
    let err = encode_vector(&selection).expect_err("AV is required");
    assert!(matches!(err, CvssError::InvalidSelection(_)));
}

#[test]
fn default_vector_decodes_to_catalog_defaults() {
    let vector = encode_vector(&Selection::default()).expect("defaults are complete");
    let decoded = decode_vector(&vector).expect("own output decodes");

    for def in catalog::all() {
        assert_eq!(decoded.get(def.key), Some(def.default_value()), "{}", def.name);
    }
}

fn arb_metrics() -> impl Strategy<Value = BaseMetrics> {
    (
        prop::sample::select(AttackVector::iter().collect::<Vec<_>>()),
        prop::sample::select(AttackComplexity::iter().collect::<Vec<_>>()),
        prop::sample::select(PrivilegesRequired::iter().collect::<Vec<_>>()),
        prop::sample::select(UserInteraction::iter().collect::<Vec<_>>()),
        prop::sample::select(Scope::iter().collect::<Vec<_>>()),
        prop::sample::select(ImpactLevel::iter().collect::<Vec<_>>()),
        prop::sample::select(ImpactLevel::iter().collect::<Vec<_>>()),
        prop::sample::select(ImpactLevel::iter().collect::<Vec<_>>()),
    )
        .prop_map(|(av, ac, pr, ui, s, c, i, a)| BaseMetrics {
            attack_vector: av,
            attack_complexity: ac,
            privileges_required: pr,
            user_interaction: ui,
            scope: s,
            confidentiality: c,
            integrity: i,
            availability: a,
        })
}

proptest! {
    #[test]
    fn scoring_and_encoding_are_deterministic(metrics in arb_metrics()) {
        let selection = Selection::from(metrics);
        let first = compute_score(&selection).expect("complete selection");
        let second = compute_score(&selection.clone()).expect("complete selection");
        prop_assert_eq!(first, second);
        prop_assert_eq!(
            encode_vector(&selection).expect("complete selection"),
            encode_vector(&selection).expect("complete selection")
        );
    }

    #[test]
    fn official_never_exceeds_simplified_for_unchanged_scope(metrics in arb_metrics()) {
        let metrics = BaseMetrics { scope: Scope::Unchanged, ..metrics };
        let official = base_score(&metrics, Formula::Official);
        let simplified = base_score(&metrics, Formula::Simplified);
        prop_assert!(official <= simplified + 1e-9);
    }
}
