use knn_classifier::{KnnClassifier, Label};
use proptest::prelude::*;

const DIM: usize = 3;

/// Up to 24 examples of length `DIM` with labels drawn from a small set
fn example_set() -> impl Strategy<Value = Vec<(Vec<f32>, Label)>> {
    prop::collection::vec(
        (prop::collection::vec(-100.0f32..100.0, DIM), -3i32..4),
        0..24,
    )
}

fn query_vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0f32..100.0, DIM)
}

fn build(examples: &[(Vec<f32>, Label)]) -> KnnClassifier {
    let mut knn = KnnClassifier::new(DIM).unwrap();
    for (features, label) in examples {
        knn.add_example(features, *label).unwrap();
    }
    knn
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_label_is_a_stored_label(
        examples in example_set(),
        query in query_vector(),
        k in 1usize..30,
    ) {
        let mut knn = build(&examples);
        let k = k.min(knn.count());
        prop_assume!(k > 0);

        let result = knn.classify(&query, k).unwrap().unwrap();
        prop_assert!(examples.iter().any(|(_, label)| *label == result.label));
    }

    #[test]
    fn prop_confidence_bounds(
        examples in example_set(),
        query in query_vector(),
        k in 1usize..30,
    ) {
        let mut knn = build(&examples);
        let k = k.min(knn.count());
        prop_assume!(k > 0);

        let result = knn.classify(&query, k).unwrap().unwrap();
        prop_assert!(result.confidence >= 1.0 / k as f32 - 1e-6);
        prop_assert!(result.confidence <= 1.0);
        prop_assert_eq!(knn.confidence(), Some(result.confidence));
    }

    #[test]
    fn prop_impossible_when_k_out_of_range(
        examples in example_set(),
        query in query_vector(),
        extra in 1usize..5,
    ) {
        let mut knn = build(&examples);

        prop_assert!(knn.classify(&query, 0).unwrap().is_none());
        prop_assert!(knn.confidence().is_none());

        let k = knn.count() + extra;
        prop_assert!(knn.classify(&query, k).unwrap().is_none());
        prop_assert!(knn.confidence().is_none());
    }

    #[test]
    fn prop_classify_is_idempotent(
        examples in example_set(),
        query in query_vector(),
        k in 1usize..30,
    ) {
        let mut knn = build(&examples);

        let first = knn.classify(&query, k).unwrap();
        let first_confidence = knn.confidence();
        let second = knn.classify(&query, k).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_confidence, knn.confidence());
    }

    #[test]
    fn prop_clear_class_removes_exactly_that_class(
        examples in example_set(),
        label in -3i32..4,
    ) {
        let mut knn = build(&examples);
        let before = knn.count();
        let in_class = knn.count_by_class(label);

        let removed = knn.clear_class(label);

        prop_assert_eq!(removed, in_class);
        prop_assert_eq!(knn.count(), before - in_class);
        prop_assert_eq!(knn.count_by_class(label), 0);
    }

    #[test]
    fn prop_clear_class_keeps_survivor_order(
        examples in example_set(),
        label in -3i32..4,
    ) {
        let mut knn = build(&examples);
        knn.clear_class(label);

        let expected: Vec<&Vec<f32>> = examples
            .iter()
            .filter(|(_, l)| *l != label)
            .map(|(features, _)| features)
            .collect();
        let actual: Vec<&[f32]> = knn.examples().map(|e| e.features()).collect();

        prop_assert_eq!(expected.len(), actual.len());
        for (e, a) in expected.iter().zip(actual.iter()) {
            prop_assert_eq!(e.as_slice(), *a);
        }
    }

    #[test]
    fn prop_clear_all_makes_classify_impossible(
        examples in example_set(),
        query in query_vector(),
        k in 1usize..30,
    ) {
        let mut knn = build(&examples);
        knn.clear_all_classes();

        prop_assert_eq!(knn.count(), 0);
        prop_assert!(knn.classify(&query, k).unwrap().is_none());
    }

    #[test]
    fn prop_single_neighbor_is_the_closest_example(
        examples in example_set(),
        query in query_vector(),
    ) {
        let mut knn = build(&examples);
        prop_assume!(knn.count() > 0);

        let neighbors = knn.nearest_neighbors(&query, 1).unwrap();
        let best = examples
            .iter()
            .map(|(features, _)| {
                features.iter()
                    .zip(query.iter())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f32>()
                    .sqrt()
            })
            .fold(f32::INFINITY, f32::min);

        prop_assert_eq!(neighbors[0].distance, best);
        let result = knn.classify(&query, 1).unwrap().unwrap();
        prop_assert_eq!(result.label, neighbors[0].label);
    }
}
