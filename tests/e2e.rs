mod common;

use common::synthetic_grid::{grid_with_primes, speckled_grid};
use ulam_goodness::grid::{GridView, SegmentMask, UlamGrid, ORIGIN};
use ulam_goodness::{
    detect_axis_segments, detect_diagonal_segments, detect_segments, score, DetectError,
    DetectionOptions, RunExtent,
};

#[test]
fn single_diagonal_of_six_scores_six_percent() {
    let _ = env_logger::builder().is_test(true).try_init();
    let cells: Vec<_> = (0..6).map(|i| (i, i)).collect();
    let grid = grid_with_primes(10, &cells);
    let opts = DetectionOptions::default();

    let mask = detect_diagonal_segments(&grid, &opts).unwrap();
    let marked: Vec<_> = mask.marked_cells().collect();
    assert_eq!(marked, cells, "diagonal mask should cover exactly the run");

    let s = score(&grid, &opts).unwrap();
    assert_eq!(s, 6.0 / 100.0, "unexpected score {s}");
}

#[test]
fn mirrored_grid_gives_mirrored_diagonal_mask() {
    let opts = DetectionOptions::default();
    for (size, density, seed) in [(17usize, 0.55, 1u64), (24, 0.7, 7), (31, 0.4, 42)] {
        let grid = speckled_grid(size, density, seed);
        let direct = detect_diagonal_segments(&grid, &opts).unwrap();
        let flipped = detect_diagonal_segments(&grid.mirrored(), &opts).unwrap();
        assert!(
            direct.count() > 0,
            "fixture {size}/{density}/{seed} should contain some diagonal runs"
        );
        assert_eq!(flipped.mirrored(), direct, "size {size} seed {seed}");
    }
}

#[test]
fn mirror_symmetry_holds_for_smoothed_diagonals_too() {
    let grid = speckled_grid(20, 0.6, 3);
    let opts = DetectionOptions::default().with_extent(RunExtent::Smoothed);
    let direct = detect_diagonal_segments(&grid, &opts).unwrap();
    let flipped = detect_diagonal_segments(&grid.mirrored(), &opts).unwrap();
    assert_eq!(flipped.mirrored(), direct);
}

#[test]
fn trimmed_axis_detection_is_mirror_symmetric() {
    let grid = speckled_grid(21, 0.65, 11);
    let opts = DetectionOptions {
        gap_tolerance: 2,
        min_run: 4,
        ..Default::default()
    };
    let direct = detect_axis_segments(&grid, &opts).unwrap();
    let flipped = detect_axis_segments(&grid.mirrored(), &opts).unwrap();
    assert_eq!(flipped.mirrored(), direct);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let grid = speckled_grid(40, 0.5, 9);
    let opts = DetectionOptions::default();
    let first = (
        detect_diagonal_segments(&grid, &opts).unwrap(),
        detect_axis_segments(&grid, &opts).unwrap(),
        score(&grid, &opts).unwrap(),
    );
    let second = (
        detect_diagonal_segments(&grid, &opts).unwrap(),
        detect_axis_segments(&grid, &opts).unwrap(),
        score(&grid, &opts).unwrap(),
    );
    assert_eq!(first.0, second.0);
    assert_eq!(first.1, second.1);
    assert_eq!(first.2.to_bits(), second.2.to_bits());
}

#[test]
fn concurrent_calls_share_one_grid() {
    let grid = speckled_grid(33, 0.5, 5);
    let opts = DetectionOptions::default();
    let expected = score(&grid, &opts).unwrap();
    let results: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| score(&grid, &opts).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.iter().all(|&r| r == expected), "{results:?} vs {expected}");
}

#[test]
fn score_bounds_on_uniform_grids() {
    for size in [5usize, 8, 13] {
        let zeros = UlamGrid::zeros(size, size).unwrap();
        assert_eq!(score(&zeros, &DetectionOptions::default()).unwrap(), 0.0);

        let ones = UlamGrid::new(size, size, vec![1; size * size]).unwrap();
        for min_run in [1, size / 2 + 1, size] {
            let opts = DetectionOptions {
                min_run,
                ..Default::default()
            };
            assert_eq!(
                score(&ones, &opts).unwrap(),
                1.0,
                "size {size} min_run {min_run}"
            );
        }
    }
}

#[test]
fn min_run_longer_than_grid_marks_nothing() {
    let grid = UlamGrid::new(6, 6, vec![1; 36]).unwrap();
    let opts = DetectionOptions {
        min_run: 7,
        ..Default::default()
    };
    assert_eq!(score(&grid, &opts).unwrap(), 0.0);
}

#[test]
fn origin_marker_counts_as_on() {
    let mut grid = grid_with_primes(9, &[(4, 1), (4, 2), (4, 3), (4, 5)]);
    grid.set(4, 4, ORIGIN).unwrap();
    let mask = detect_axis_segments(&grid, &DetectionOptions::default()).unwrap();
    let marked: Vec<_> = mask.marked_cells().collect();
    assert_eq!(marked, vec![(4, 1), (4, 2), (4, 3), (4, 4), (4, 5)]);
}

#[test]
fn gap_tolerance_controls_bridging_on_diagonals() {
    // Two diagonal pieces of three separated by two missing cells.
    let cells = [(0, 0), (1, 1), (2, 2), (5, 5), (6, 6), (7, 7)];
    let grid = grid_with_primes(10, &cells);

    let tight = DetectionOptions::default();
    assert!(detect_diagonal_segments(&grid, &tight).unwrap().is_empty());

    let loose = DetectionOptions {
        gap_tolerance: 2,
        ..Default::default()
    };
    let mask = detect_diagonal_segments(&grid, &loose).unwrap();
    assert_eq!(mask.count(), 8);
    assert!(mask.get(3, 3) && mask.get(4, 4));
    assert_eq!(mask.shape(), grid.shape());
}

#[test]
fn malformed_json_grids_are_invalid_input() {
    for text in ["[[0,1],[1]]", "[[0,1],[3,0]]", "[]"] {
        let parsed = serde_json::from_str::<Vec<Vec<i64>>>(text).unwrap();
        let err = UlamGrid::try_from(parsed).unwrap_err();
        assert!(
            matches!(err, DetectError::InvalidInput(_)),
            "{text} gave {err:?}"
        );
    }
}

/// Width-checked view over codes the spiral generator never emits.
struct ConstantView {
    rows: Vec<Vec<i64>>,
}

impl GridView for ConstantView {
    type Cell = i64;

    fn rows(&self) -> usize {
        self.rows.len()
    }

    fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    fn row(&self, r: usize) -> &[i64] {
        &self.rows[r]
    }
}

#[test]
fn detection_entry_points_reject_malformed_views() {
    let opts = DetectionOptions::default();
    for empty in [SegmentMask::new(0, 0), SegmentMask::new(0, 7)] {
        let err = score(&empty, &opts).unwrap_err();
        assert!(matches!(err, DetectError::InvalidInput(_)), "got {err:?}");
        let err = detect_diagonal_segments(&empty, &opts).unwrap_err();
        assert!(matches!(err, DetectError::InvalidInput(_)), "got {err:?}");
        let err = detect_segments(&empty, &[], &opts).unwrap_err();
        assert!(matches!(err, DetectError::InvalidInput(_)), "got {err:?}");
    }

    let sevens = ConstantView {
        rows: vec![vec![7; 6]; 6],
    };
    let err = score(&sevens, &opts).unwrap_err();
    assert!(matches!(err, DetectError::InvalidInput(_)), "got {err:?}");
}
