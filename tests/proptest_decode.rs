use proptest::prelude::*;
use yolopost::config::InputSize;
use yolopost::decode::decode;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn decode_keeps_exactly_rows_above_threshold(
        (_, outputs) in proptest_helpers::arb_outputs(3, 12, 4),
        threshold in proptest_helpers::unit_value(),
    ) {
        let candidates = decode(&outputs, InputSize::new(416, 416), threshold)
            .expect("generated outputs decode");

        let expected = outputs
            .iter()
            .flat_map(|tensor| tensor.rows().into_iter().map(|row| row.to_vec()))
            .filter(|row| {
                proptest_helpers::row_confidence(row).is_some_and(|conf| conf > threshold)
            })
            .count();

        prop_assert_eq!(candidates.len(), expected);
        for candidate in &candidates {
            prop_assert!(candidate.confidence > threshold);
        }
    }

    #[test]
    fn decode_produces_integer_pixel_boxes(
        (num_classes, outputs) in proptest_helpers::arb_outputs(2, 8, 3),
        width in 1u32..=1024,
        height in 1u32..=1024,
    ) {
        let candidates = decode(&outputs, InputSize::new(width, height), 0.0)
            .expect("generated outputs decode");

        for candidate in &candidates {
            prop_assert!(candidate.class_id < num_classes);
            let (left, top, w, h) = candidate.bbox.to_xywh();
            for value in [left, top, w, h] {
                prop_assert_eq!(value, value.trunc());
            }
            prop_assert!(w >= 0.0 && w <= width as f32);
            prop_assert!(h >= 0.0 && h <= height as f32);
        }
    }

    #[test]
    fn decode_picks_first_maximum_score(
        row in proptest_helpers::arb_row(5),
    ) {
        let outputs = vec![ndarray::Array2::from_shape_vec((1, row.len()), row.clone())
            .expect("single row tensor")];
        let candidates = decode(&outputs, InputSize::default(), 0.0).expect("decode");

        let scores = &row[4..];
        let best = scores.iter().copied().fold(f32::MIN, f32::max);
        if best > 0.0 {
            prop_assert_eq!(candidates.len(), 1);
            let first_max = scores.iter().position(|&s| s == best).expect("max is present");
            prop_assert_eq!(candidates[0].class_id, first_max);
            prop_assert_eq!(candidates[0].confidence, best);
        } else {
            prop_assert!(candidates.is_empty());
        }
    }
}
