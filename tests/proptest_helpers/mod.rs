#![allow(dead_code)]

use ndarray::Array2;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use yolopost::decode::Candidate;
use yolopost::geom::{BBoxXYXY, Pixel};
use yolopost::tensor::RawOutput;

/// Tolerance for values that went through three-decimal rounding.
pub const EPS_ROUNDED: f32 = 5e-4 + 1e-6;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// A value in `[0, 1]` on a 1/1000 grid, so thresholds compare exactly.
pub fn unit_value() -> impl Strategy<Value = f32> {
    (0u16..=1000).prop_map(|v| v as f32 / 1000.0)
}

/// One output row: `cx, cy, w, h` followed by `num_classes` scores.
pub fn arb_row(num_classes: usize) -> BoxedStrategy<Vec<f32>> {
    (
        unit_value(),
        unit_value(),
        unit_value(),
        unit_value(),
        proptest::collection::vec(unit_value(), num_classes..=num_classes),
    )
        .prop_map(|(cx, cy, w, h, scores)| {
            let mut row = vec![cx, cy, w, h];
            row.extend(scores);
            row
        })
        .boxed()
}

/// Between one and `max_tensors` tensors sharing a row width, each with up
/// to `max_rows` rows. Also yields the class count.
pub fn arb_outputs(
    max_tensors: usize,
    max_rows: usize,
    max_classes: usize,
) -> BoxedStrategy<(usize, Vec<RawOutput>)> {
    assert!(max_tensors > 0, "max_tensors must be > 0");
    assert!(max_classes > 0, "max_classes must be > 0");

    (1usize..=max_classes)
        .prop_flat_map(move |num_classes| {
            let tensor = proptest::collection::vec(arb_row(num_classes), 0..=max_rows)
                .prop_map(move |rows| rows_to_tensor(rows, num_classes));
            (
                Just(num_classes),
                proptest::collection::vec(tensor, 1..=max_tensors),
            )
        })
        .boxed()
}

/// A pixel box inside a `side` x `side` input with integer corners.
pub fn arb_pixel_box(side: u32) -> BoxedStrategy<BBoxXYXY<Pixel>> {
    (0..side, 0..side, 1..=side, 1..=side)
        .prop_map(move |(left, top, w, h)| {
            let w = w.min(side - left).max(1);
            let h = h.min(side - top).max(1);
            BBoxXYXY::from_xywh(left as f32, top as f32, w as f32, h as f32)
        })
        .boxed()
}

pub fn arb_candidates(max: usize, num_classes: usize) -> BoxedStrategy<Vec<Candidate>> {
    let candidate = (0..num_classes, unit_value(), arb_pixel_box(416)).prop_map(
        |(class_id, confidence, bbox)| Candidate {
            class_id,
            confidence,
            bbox,
        },
    );
    proptest::collection::vec(candidate, 0..=max).boxed()
}

fn rows_to_tensor(rows: Vec<Vec<f32>>, num_classes: usize) -> RawOutput {
    let ncols = 4 + num_classes;
    let nrows = rows.len();
    let flat: Vec<f32> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, ncols), flat).expect("rows share the generated width")
}

/// Largest class score of a row, or `None` when it has no scores.
pub fn row_confidence(row: &[f32]) -> Option<f32> {
    row[4..].iter().copied().reduce(f32::max)
}
