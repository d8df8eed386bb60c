//! Rule tests - evolution semantics on the bounded field

use tui_life::core::patterns::{BLINKER, BLOCK, GLIDER};
use tui_life::core::{step, Grid, Simulation, SimpleRng};
use tui_life::types::GRID_SIZE;

#[test]
fn test_block_never_changes() {
    let mut grid = Grid::new();
    BLOCK.stamp(&mut grid, 30, 30);

    let mut current = grid.clone();
    for _ in 0..10 {
        let (next, delta) = step(&current);
        assert_eq!(next, grid);
        assert_eq!(delta.born, 0);
        assert_eq!(delta.died, 0);
        assert_eq!(delta.alive, 4);
        current = next;
    }
}

#[test]
fn test_blinker_oscillates_with_period_two() {
    let mut horizontal = Grid::new();
    BLINKER.stamp(&mut horizontal, 20, 20);

    let (vertical, delta) = step(&horizontal);
    // The row of three becomes a column of three around the same center.
    assert_eq!(delta.born, 2);
    assert_eq!(delta.died, 2);
    assert_eq!(delta.alive, 3);
    assert!(vertical.is_alive(19, 21));
    assert!(vertical.is_alive(20, 21));
    assert!(vertical.is_alive(21, 21));

    let (back, _) = step(&vertical);
    assert_eq!(back, horizontal);
}

#[test]
fn test_glider_translates_one_diagonal_every_four_steps() {
    let mut grid = Grid::new();
    GLIDER.stamp(&mut grid, 10, 10);

    let mut expected = Grid::new();
    GLIDER.stamp(&mut expected, 11, 11);

    for _ in 0..4 {
        grid = step(&grid).0;
    }
    assert_eq!(grid, expected);
}

#[test]
fn test_advance_is_pure() {
    let mut rng = SimpleRng::new(777);
    let grid = Grid::seeded(&mut rng);

    let (a, delta_a) = step(&grid);
    let (b, delta_b) = step(&grid);
    assert_eq!(a, b);
    assert_eq!(delta_a, delta_b);
}

#[test]
fn test_conservation_holds_for_every_advance() {
    // alive_after = alive_before - died + born, exactly, on every step.
    let mut sim = Simulation::new(31337);
    for _ in 0..200 {
        let before = sim.population() as i64;
        let delta = sim.advance();
        let after = sim.population() as i64;

        assert_eq!(after, before - delta.died as i64 + delta.born as i64);
        assert_eq!(delta.alive as i64, after);
    }
}

#[test]
fn test_border_stays_dead_through_a_long_run() {
    let mut sim = Simulation::new(2026);
    for _ in 0..100 {
        sim.advance();
        for i in 0..GRID_SIZE {
            assert!(!sim.grid().is_alive(0, i));
            assert!(!sim.grid().is_alive(GRID_SIZE - 1, i));
            assert!(!sim.grid().is_alive(i, 0));
            assert!(!sim.grid().is_alive(i, GRID_SIZE - 1));
        }
    }
}

#[test]
fn test_empty_grid_is_a_fixed_point() {
    let mut sim = Simulation::from_grid(Grid::new());
    for _ in 0..50 {
        let delta = sim.advance();
        assert_eq!(delta.born, 0);
        assert_eq!(delta.died, 0);
        assert_eq!(delta.alive, 0);
    }
    assert_eq!(sim.population(), 0);
}

#[test]
fn test_full_interior_collapses_to_four_corners() {
    // With every interior cell alive, only the four interior corners have a
    // survivable neighbor count (exactly 3); everything else dies of
    // overcrowding and nothing is born.
    let mut grid = Grid::new();
    for r in 1..GRID_SIZE - 1 {
        for c in 1..GRID_SIZE - 1 {
            grid.set(r, c, true);
        }
    }
    let interior = (GRID_SIZE - 2) * (GRID_SIZE - 2);

    let (next, delta) = step(&grid);
    assert_eq!(delta.born, 0);
    assert_eq!(delta.died, (interior - 4) as u32);
    assert_eq!(delta.alive, 4);

    for (r, c) in [(1, 1), (1, 62), (62, 1), (62, 62)] {
        assert!(next.is_alive(r, c), "corner ({}, {}) should survive", r, c);
    }
    assert_eq!(next.population(), 4);
}

#[test]
fn test_seeded_simulation_is_reproducible() {
    let mut a = Simulation::new(555);
    let mut b = Simulation::new(555);

    for _ in 0..50 {
        assert_eq!(a.advance(), b.advance());
    }
    assert_eq!(a.grid(), b.grid());
}
