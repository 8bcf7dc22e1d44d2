use proptest::prelude::*;
use yolopost::nms::suppress;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn kept_candidates_are_confident_and_ordered(
        candidates in proptest_helpers::arb_candidates(24, 3),
        confidence in proptest_helpers::unit_value(),
        iou in proptest_helpers::unit_value(),
    ) {
        let kept = suppress(&candidates, confidence, iou);

        let mut seen = std::collections::BTreeSet::new();
        for &idx in &kept {
            prop_assert!(idx < candidates.len());
            prop_assert!(seen.insert(idx), "index {} kept twice", idx);
            prop_assert!(candidates[idx].confidence > confidence);
        }
        for pair in kept.windows(2) {
            prop_assert!(candidates[pair[0]].confidence >= candidates[pair[1]].confidence);
        }
    }

    #[test]
    fn kept_boxes_overlap_less_than_threshold(
        candidates in proptest_helpers::arb_candidates(24, 3),
        iou in (1u16..=1000).prop_map(|v| v as f32 / 1000.0),
    ) {
        let kept = suppress(&candidates, 0.0, iou);

        for (pos, &a) in kept.iter().enumerate() {
            for &b in &kept[pos + 1..] {
                let overlap = candidates[a].bbox.iou(&candidates[b].bbox);
                prop_assert!(
                    overlap < iou,
                    "kept {} and {} overlap with IoU {} >= {}",
                    a, b, overlap, iou
                );
            }
        }
    }

    #[test]
    fn every_dropped_candidate_is_covered_by_a_kept_one(
        candidates in proptest_helpers::arb_candidates(24, 3),
        confidence in proptest_helpers::unit_value(),
        iou in proptest_helpers::unit_value(),
    ) {
        let kept = suppress(&candidates, confidence, iou);

        for (idx, candidate) in candidates.iter().enumerate() {
            if candidate.confidence <= confidence || kept.contains(&idx) {
                continue;
            }
            let covered = kept.iter().any(|&k| {
                let overlap = candidates[k].bbox.iou(&candidate.bbox);
                candidates[k].confidence >= candidate.confidence
                    && overlap > 0.0
                    && overlap >= iou
            });
            prop_assert!(covered, "candidate {} dropped without a covering box", idx);
        }
    }

    #[test]
    fn suppression_is_idempotent(
        candidates in proptest_helpers::arb_candidates(24, 3),
        iou in proptest_helpers::unit_value(),
    ) {
        let kept = suppress(&candidates, 0.0, iou);
        let survivors: Vec<_> = kept.iter().map(|&idx| candidates[idx]).collect();

        let again = suppress(&survivors, 0.0, iou);
        prop_assert_eq!(again, (0..survivors.len()).collect::<Vec<_>>());
    }
}
