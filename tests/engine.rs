use std::collections::BTreeSet;

use life_grid::{BoundaryMode, Engine, presets};

fn engine_with(width: usize, height: usize, mode: BoundaryMode, cells: &[(i32, i32)]) -> Engine {
    let mut engine = Engine::new(width, height).unwrap();
    engine.set_boundary_mode(mode);
    for &(x, y) in cells {
        engine.set_cell(x, y, true);
    }
    engine
}

fn live(engine: &Engine) -> BTreeSet<(usize, usize)> {
    engine.live_cells().collect()
}

fn set(cells: &[(usize, usize)]) -> BTreeSet<(usize, usize)> {
    cells.iter().copied().collect()
}

#[test]
fn empty_grid_stays_empty() {
    for mode in BoundaryMode::all() {
        let mut engine = engine_with(12, 9, mode, &[]);
        engine.step();
        assert_eq!(engine.population(), 0);
    }
}

#[test]
fn isolated_cell_dies() {
    for mode in BoundaryMode::all() {
        let mut engine = engine_with(7, 7, mode, &[(3, 3)]);
        engine.step();
        assert_eq!(engine.population(), 0, "{:?}", mode);

        // Corner cell too: no neighbors either way
        let mut engine = engine_with(7, 7, mode, &[(0, 0)]);
        engine.step();
        assert_eq!(engine.population(), 0, "{:?}", mode);
    }
}

#[test]
fn block_is_still_life() {
    let block = [(2, 2), (3, 2), (2, 3), (3, 3)];
    for mode in BoundaryMode::all() {
        let mut engine = engine_with(6, 6, mode, &block);
        let before = engine.grid().clone();
        engine.step();
        assert_eq!(engine.grid(), &before, "{:?}", mode);
    }
}

#[test]
fn blinker_has_period_two() {
    let blinker = [(3, 2), (3, 3), (3, 4)];
    for mode in BoundaryMode::all() {
        let mut engine = engine_with(7, 7, mode, &blinker);
        let start = engine.grid().clone();

        engine.step();
        assert_ne!(engine.grid(), &start, "{:?}", mode);
        assert_eq!(live(&engine), set(&[(2, 3), (3, 3), (4, 3)]));

        engine.step();
        assert_eq!(engine.grid(), &start, "{:?}", mode);
    }
}

#[test]
fn clamped_five_by_five_blinker_scenario() {
    let mut engine = engine_with(5, 5, BoundaryMode::Clamped, &[(1, 1), (1, 2), (1, 3)]);

    engine.step();
    assert_eq!(live(&engine), set(&[(0, 2), (1, 2), (2, 2)]));

    engine.step();
    assert_eq!(live(&engine), set(&[(1, 1), (1, 2), (1, 3)]));
    assert_eq!(engine.generation(), 2);
}

#[test]
fn wrapped_edge_pattern_matches_shifted_copy() {
    // Horizontal blinker straddling the left/right edge, and the same blinker 5 cells in
    let straddling = [(9, 5), (0, 5), (1, 5)];
    let shifted = [(4, 5), (5, 5), (6, 5)];

    let mut edge = engine_with(10, 10, BoundaryMode::Wrapped, &straddling);
    let mut inner = engine_with(10, 10, BoundaryMode::Wrapped, &shifted);

    for _ in 0..3 {
        edge.step();
        inner.step();
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(edge.get_cell(x, y), inner.get_cell((x + 5) % 10, y), "({}, {})", x, y);
            }
        }
    }
}

#[test]
fn clamped_edge_pattern_evolves_differently() {
    let straddling = [(9, 5), (0, 5), (1, 5)];
    let mut wrapped = engine_with(10, 10, BoundaryMode::Wrapped, &straddling);
    let mut clamped = engine_with(10, 10, BoundaryMode::Clamped, &straddling);

    wrapped.step();
    clamped.step();

    assert_eq!(wrapped.population(), 3);
    assert_eq!(clamped.population(), 0);
    assert_ne!(wrapped.grid(), clamped.grid());
}

#[test]
fn glider_crosses_the_torus() {
    let mut engine = Engine::new(8, 8).unwrap();
    assert!(engine.stamp_pattern(&presets::GLIDER, 0, 0));
    let start = engine.grid().clone();

    // A glider moves one cell diagonally every 4 generations
    for _ in 0..32 {
        engine.step();
    }
    assert_eq!(engine.grid(), &start);
}

#[test]
fn pentadecathlon_has_period_fifteen() {
    let mut engine = Engine::new(40, 40).unwrap();
    assert!(engine.stamp_pattern(&presets::PENTADECATHLON, 18, 15));
    let start = engine.grid().clone();

    for generation in 1..=15 {
        engine.step();
        if generation < 15 {
            assert_ne!(engine.grid(), &start, "repeated early at generation {}", generation);
        }
    }
    assert_eq!(engine.grid(), &start);
}

#[test]
fn rejected_stamp_leaves_grid_untouched() {
    let mut engine = Engine::new(75, 75).unwrap();
    engine.set_cell(10, 10, true);
    engine.set_cell(74, 74, true);
    let before = engine.grid().clone();

    // Gun needs 37x10; anchor 39 overflows by one column
    assert!(!engine.stamp_pattern(&presets::GOSPER_GLIDER_GUN, 39, 0));
    assert!(!engine.stamp_pattern(&presets::GOSPER_GLIDER_GUN, 0, 66));
    assert!(!engine.stamp_pattern(&presets::PENTADECATHLON, -1, 0));
    assert_eq!(engine.grid(), &before);

    assert!(engine.stamp_pattern(&presets::GOSPER_GLIDER_GUN, 38, 65));
    assert_eq!(engine.population(), 2 + 36);
}

#[test]
fn stamp_merges_with_existing_cells() {
    let mut engine = Engine::new(10, 10).unwrap();
    engine.set_cell(0, 0, true);
    assert!(engine.stamp_pattern(&presets::BLOCK, 0, 0));
    assert_eq!(live(&engine), set(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
}

#[test]
fn out_of_range_access_is_harmless() {
    let mut engine = Engine::new(5, 5).unwrap();
    for &(x, y) in &[(-1, 0), (0, -1), (5, 0), (0, 5), (i32::MIN, i32::MAX)] {
        engine.set_cell(x, y, true);
        engine.toggle_cell(x, y);
        assert!(!engine.get_cell(x, y));
    }
    assert_eq!(engine.population(), 0);
}

#[test]
fn mutators_take_effect_on_next_step() {
    let mut engine = engine_with(7, 7, BoundaryMode::Wrapped, &[(3, 2), (3, 3), (3, 4)]);
    engine.step();
    engine.set_boundary_mode(BoundaryMode::Clamped);
    engine.toggle_cell(3, 3);
    assert_eq!(live(&engine), set(&[(2, 3), (4, 3)]));
    engine.step();
    assert_eq!(engine.population(), 0);
}

#[test]
fn randomize_extremes_and_clear() {
    let mut engine = Engine::new(33, 17).unwrap();
    engine.randomize(100).unwrap();
    assert_eq!(engine.population(), 33 * 17);

    engine.randomize(0).unwrap();
    assert_eq!(engine.population(), 0);

    engine.randomize(100).unwrap();
    engine.clear();
    engine.clear();
    assert_eq!(engine.population(), 0);
}

#[test]
fn single_row_and_column_grids_step() {
    // Tiny tori count the same neighbor more than once; this must not panic
    for (w, h) in [(1, 1), (1, 5), (5, 1), (2, 2)] {
        for mode in BoundaryMode::all() {
            let mut engine = Engine::new(w, h).unwrap();
            engine.set_boundary_mode(mode);
            engine.randomize(50).unwrap();
            engine.step();
        }
    }
}
