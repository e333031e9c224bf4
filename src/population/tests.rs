use super::{patterns::*, Grid, Transform};
use crate::{ConfigError, OutOfBounds, Topology};
use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng};
use rstest::rstest;

const SEED: u64 = 42;

fn grid_with(rows: usize, cols: usize, topology: Topology, alive: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::blank(rows, cols, topology);
    for &(row, col) in alive {
        grid.set(row, col, true);
    }
    grid
}

fn sorted(cells: impl Iterator<Item = (usize, usize)>) -> Vec<(usize, usize)> {
    let mut v = cells.collect::<Vec<_>>();
    v.sort();
    v
}

#[test]
fn test_new_divides_pixels_by_cell_size() {
    let grid = Grid::new(1600, 850, 8, Topology::Legacy).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (106, 200));
    assert_eq!(grid.population(), 0);
}

#[test]
fn test_new_rejects_bad_dimensions() {
    assert_eq!(
        Grid::new(100, 100, 0, Topology::Legacy),
        Err(ConfigError::ZeroCellSize)
    );
    assert_eq!(
        Grid::new(7, 100, 8, Topology::Legacy),
        Err(ConfigError::GridTooSmall {
            width_px: 7,
            height_px: 100,
            cell_size: 8
        })
    );
}

#[rstest]
fn test_interior_neighbor_count(
    #[values(Topology::Legacy, Topology::Clamped, Topology::Torus)] topology: Topology,
) {
    const N: usize = 24;
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let mut grid = Grid::blank(N, N, topology);
    for row in 0..N {
        for col in 0..N {
            grid.set(row, col, rng.gen_bool(0.4));
        }
    }

    // Legacy never counts row 0 or column 0, so start one further in.
    let first = if topology == Topology::Legacy { 2 } else { 1 };
    for row in first..N - 1 {
        for col in first..N - 1 {
            let mut expected = 0;
            for i in row - 1..=row + 1 {
                for j in col - 1..=col + 1 {
                    if (i, j) != (row, col) && grid.get(i, j) {
                        expected += 1;
                    }
                }
            }
            assert_eq!(grid.neighbor_count(row, col), expected, "at ({row}, {col})");
        }
    }
}

#[test]
fn test_legacy_ignores_first_row_and_column() {
    let alive = [(0, 0), (0, 1), (1, 0), (0, 2), (2, 0)];

    let legacy = grid_with(4, 4, Topology::Legacy, &alive);
    assert_eq!(legacy.neighbor_count(1, 1), 0);

    let clamped = grid_with(4, 4, Topology::Clamped, &alive);
    assert_eq!(clamped.neighbor_count(1, 1), 5);
}

#[test]
fn test_legacy_blinker_on_first_row_dies() {
    // Row 0 is never counted, so nothing survives or is born next to it.
    let legacy = grid_with(5, 5, Topology::Legacy, &[(0, 1), (0, 2), (0, 3)]).advance();
    assert_eq!(legacy.population(), 0);

    let clamped = grid_with(5, 5, Topology::Clamped, &[(0, 1), (0, 2), (0, 3)]).advance();
    assert_eq!(sorted(clamped.live_cells()), vec![(0, 2), (1, 2)]);
}

#[test]
fn test_torus_wraps_blinker() {
    let grid = grid_with(5, 5, Topology::Torus, &[(2, 4), (2, 0), (2, 1)]).advance();
    assert_eq!(sorted(grid.live_cells()), vec![(1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_torus_counts_each_wrapped_neighbor_once() {
    let lone = grid_with(1, 1, Topology::Torus, &[(0, 0)]);
    assert_eq!(lone.neighbor_count(0, 0), 0);
    assert_eq!(lone.advance().population(), 0);

    let full = grid_with(2, 2, Topology::Torus, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        assert_eq!(full.neighbor_count(row, col), 3);
    }

    let strip = grid_with(1, 5, Topology::Torus, &[(0, 0), (0, 1), (0, 4)]);
    assert_eq!(strip.neighbor_count(0, 0), 2);
}

#[test]
#[should_panic]
fn test_blank_rejects_zero_rows() {
    Grid::blank(0, 4, Topology::Legacy);
}

#[test]
fn test_single_cell_dies() {
    let grid = grid_with(5, 5, Topology::Legacy, &[(2, 2)]).advance();
    assert_eq!(grid.population(), 0);
}

#[test]
fn test_block_is_still_life() {
    let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
    let grid = grid_with(6, 6, Topology::Legacy, &block);
    assert_eq!(grid.clone().advance(), grid);
}

#[test]
fn test_glider() {
    const OFFSET: usize = 3;
    let glider = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]
        .map(|(row, col)| (row + OFFSET, col + OFFSET));

    let mut grid = grid_with(12, 12, Topology::Legacy, &glider).advance();
    let phase_1 = [(2, 1), (2, 3), (3, 2), (3, 3), (4, 2)]
        .map(|(row, col)| (row + OFFSET, col + OFFSET));
    assert_eq!(sorted(grid.live_cells()), phase_1.to_vec());

    for _ in 0..3 {
        grid = grid.advance();
    }
    let shifted = glider.map(|(row, col)| (row + 1, col + 1));
    assert_eq!(sorted(grid.live_cells()), sorted(shifted.into_iter()));
}

#[rstest]
#[case(1, 1)]
#[case(3, 7)]
#[case(106, 200)]
fn test_randomize_extremes(#[case] rows: usize, #[case] cols: usize) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);

    let grid = Grid::blank(rows, cols, Topology::Legacy).randomize(0., &mut rng);
    assert_eq!(grid.population(), 0);

    let grid = grid.randomize(1., &mut rng);
    assert_eq!(grid.population(), rows * cols);

    let grid = grid.clear().randomize(2.5, &mut rng);
    assert_eq!(grid.population(), rows * cols);
}

#[test]
fn test_randomize_keeps_shape() {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let grid = Grid::blank(40, 60, Topology::Torus).randomize(0.1, &mut rng);
    assert_eq!((grid.rows(), grid.cols(), grid.topology()), (40, 60, Topology::Torus));
    assert!(grid.population() > 0 && grid.population() < 40 * 60 / 2);
}

#[test]
fn test_live_cells_order() {
    let grid = Grid::blank(3, 4, Topology::Legacy);
    assert_eq!(grid.live_cells().count(), 0);

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    let grid = grid.randomize(1., &mut rng);
    let cells = grid.live_cells().collect::<Vec<_>>();
    let expected = (0..4)
        .flat_map(|col| (0..3).map(move |row| (row, col)))
        .collect::<Vec<_>>();
    assert_eq!(cells, expected);

    // restartable
    assert_eq!(grid.live_cells().collect::<Vec<_>>(), cells);
}

#[test]
fn test_puffer_orientations_mirror_each_other() {
    let mut direct = Grid::blank(60, 30, Topology::Legacy);
    let mut mirrored = Grid::blank(60, 30, Topology::Legacy);

    stamp(&mut direct, &BLINK_PUFFER_1, 10, 10, BLINK_PUFFER_1.orientation(0).unwrap()).unwrap();
    stamp(&mut mirrored, &BLINK_PUFFER_1, 40, 2, BLINK_PUFFER_1.orientation(1).unwrap()).unwrap();

    assert_eq!(direct.population(), BLINK_PUFFER_1.offsets.len());
    for (dr, dc) in BLINK_PUFFER_1.offsets {
        let (row, col) = ((10 + dr) as usize, (10 - dc) as usize);
        assert!(direct.get(row, col));
        assert!(mirrored.get(50 - row, 12 - col));
    }
    assert_eq!(
        sorted(direct.live_cells().map(|(row, col)| (50 - row, 12 - col))),
        sorted(mirrored.live_cells())
    );
}

#[rstest]
#[case(0, |(n, m): (i64, i64)| (20 - m, 20 + n))]
#[case(1, |(n, m): (i64, i64)| (20 - n, 20 + m))]
#[case(2, |(n, m): (i64, i64)| (20 + m, 20 + n))]
#[case(3, |(n, m): (i64, i64)| (20 + n, 20 - m))]
fn test_queen_bee_orientations(
    #[case] rotation: usize,
    #[case] place: fn((i64, i64)) -> (i64, i64),
) {
    let mut grid = Grid::blank(40, 40, Topology::Legacy);
    let transform = QUEEN_BEE.orientation(rotation).unwrap();
    stamp(&mut grid, &QUEEN_BEE, 20, 20, transform).unwrap();

    let expected = QUEEN_BEE
        .offsets
        .iter()
        .map(|&offset| place(offset))
        .map(|(row, col)| (row as usize, col as usize));
    assert_eq!(sorted(grid.live_cells()), sorted(expected));
}

#[test]
fn test_unsupported_orientation() {
    assert_eq!(BI_GUN.orientation(1), None);
    assert_eq!(TIME_BOMB.orientation(1), Some(Transform::FlipRows));
    assert_eq!(QUEEN_BEE.orientation(4), None);
}

#[test]
fn test_out_of_bounds_stamp_is_rejected() {
    let mut grid = Grid::blank(30, 30, Topology::Legacy);
    grid.set(5, 5, true);

    let err = stamp(&mut grid, &BLINK_PUFFER_1, 0, 0, Transform::FlipCols).unwrap_err();
    assert_eq!(
        err,
        OutOfBounds {
            pattern: "blink puffer 1",
            row: 1,
            col: -1,
            rows: 30,
            cols: 30
        }
    );
    assert_eq!(sorted(grid.live_cells()), vec![(5, 5)]);

    let err = stamp(&mut grid, &BI_GUN, 0, 0, Transform::Identity).unwrap_err();
    assert_eq!((err.row, err.col), (7, 34));
    assert_eq!(grid.population(), 1);
}

#[test]
fn test_seed_default() {
    let mut grid = Grid::new(1600, 850, 8, Topology::Legacy).unwrap();
    assert!(seed_default(&mut grid).is_empty());
    assert_eq!(
        grid.population(),
        2 * BLINK_PUFFER_1.offsets.len() + BI_GUN.offsets.len()
    );
}

#[test]
fn test_seed_default_on_small_grid() {
    let mut grid = Grid::new(400, 400, 8, Topology::Legacy).unwrap();
    let rejected = seed_default(&mut grid);
    assert_eq!(
        rejected.iter().map(|e| e.pattern).collect::<Vec<_>>(),
        vec!["blink puffer 1", "bi-gun"]
    );
    assert_eq!(grid.population(), BLINK_PUFFER_1.offsets.len());
}

#[test]
fn test_patterns_have_distinct_offsets() {
    for pattern in PATTERNS {
        let mut offsets = pattern.offsets.to_vec();
        offsets.sort();
        offsets.dedup();
        assert_eq!(offsets.len(), pattern.offsets.len(), "{}", pattern.name);
    }
}
