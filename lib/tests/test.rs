use lifeboard_lib::{
    next_generation, parse_dimensions, patterns, Board, Clock, ClockState, Config, Dimensions,
    Grid, Observer, Snapshot, Transition,
};
use rand::{rngs::StdRng, SeedableRng};
use std::{cell::RefCell, error::Error, time::Duration};

fn shifted(grid: &Grid, dr: usize, dc: usize) -> Grid {
    grid.cells().map(|(r, c)| (r + dr, c + dc)).collect()
}

fn step_n(grid: &Grid, rows: usize, columns: usize, n: usize) -> Grid {
    (0..n).fold(grid.clone(), |grid, _| next_generation(&grid, rows, columns).0)
}

#[test]
fn blinker() -> Result<(), Box<dyn Error>> {
    let start: Grid = vec![(10, 9), (10, 10), (10, 11)].into_iter().collect();
    let once = step_n(&start, 20, 20, 1);
    assert_ne!(once, start);
    assert_eq!(
        once,
        vec![(9, 10), (10, 10), (11, 10)].into_iter().collect::<Grid>()
    );
    assert_eq!(step_n(&start, 20, 20, 2), start);
    Ok(())
}

#[test]
fn glider() -> Result<(), Box<dyn Error>> {
    let start = patterns::load("glider", 30, 30)?.grid;
    let mut grid = start.clone();
    for k in 1..=5 {
        grid = step_n(&grid, 30, 30, 4);
        assert_eq!(grid, shifted(&start, k, k));
    }
    Ok(())
}

#[test]
fn lwss() -> Result<(), Box<dyn Error>> {
    let start = patterns::load("lwss", 20, 40)?.grid;
    assert_eq!(step_n(&start, 20, 40, 4), shifted(&start, 0, 2));
    Ok(())
}

#[test]
fn oscillators() -> Result<(), Box<dyn Error>> {
    for (id, period) in [("blinker", 2), ("toad", 2), ("beacon", 2), ("pulsar", 3)] {
        let load = patterns::load(id, 0, 0)?;
        let Dimensions { rows, columns } = load.viewport;
        for p in 1..period {
            assert_ne!(step_n(&load.grid, rows, columns, p), load.grid, "{}", id);
        }
        assert_eq!(step_n(&load.grid, rows, columns, period), load.grid, "{}", id);
    }
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn snapshot_round_trip() -> Result<(), Box<dyn Error>> {
    let mut board = Config::new(100, 100).board();
    board.randomize_with(0.3, &mut StdRng::seed_from_u64(7))?;
    board.toggle(500, 3);
    let json = board.to_json();

    let mut restored = Config::new(100, 100).board();
    restored.load_json(&json)?;
    assert_eq!(restored.grid(), board.grid());
    assert_eq!(Snapshot::from_json(&json)?, board.snapshot());
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn snapshot_from_other_writers() -> Result<(), Box<dyn Error>> {
    // Unordered rows and columns, duplicates and empty rows.
    let json = r#"{"12": [4, 1, 4], "3": [], "0": [7]}"#;
    let mut board = Board::default();
    board.load_json(json)?;
    let expected: Grid = vec![(0, 7), (12, 1), (12, 4)].into_iter().collect();
    assert_eq!(board.grid(), &expected);
    Ok(())
}

#[test]
fn empty_board_stays_empty() {
    let mut board = Config::new(50, 50).board();
    for _ in 0..10 {
        assert!(board.step().is_empty());
    }
    assert_eq!(board.population(), 0);
    assert_eq!(board.generation(), 10);
}

#[test]
fn isolated_cell_dies() {
    let mut board = Config::new(10, 10).board();
    board.toggle(0, 0);
    board.step();
    assert_eq!(board.population(), 0);
}

#[test]
fn boundary_counts_only_cells_in_range() {
    // A block in the corner is still, even though cells outside the board
    // would make it crowded if they were counted.
    let mut board = Config::new(2, 2).board();
    for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1), (0, 2), (1, 2), (2, 0), (2, 1)] {
        board.toggle(r, c);
    }
    board.step();
    assert_eq!(board.population(), 8);

    // Overpopulation inside the board.
    let mut board = Config::new(5, 5).board();
    for (r, c) in [(1, 1), (1, 3), (2, 2), (3, 1), (3, 3)] {
        board.toggle(r, c);
    }
    board.step();
    assert!(!board.is_alive(2, 2));
}

#[test]
fn random_fill_density() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        let mut board = Config::new(100, 100).board();
        board.randomize_with(0.5, &mut rng)?;
        assert!((4000..=6000).contains(&board.population()));
    }
    Ok(())
}

#[test]
fn dimensions_fallback() {
    assert_eq!(parse_dimensions("30x", 10, 20), (30, 20));
}

/// Stops the clock once a number of generations has been reached.
struct StopAfter<'a> {
    clock: &'a Clock,
    target: u64,
    seen: Vec<u64>,
}

impl Observer for StopAfter<'_> {
    fn generation_advanced(&mut self, generation: u64, _: &[Transition]) {
        self.seen.push(generation);
        if generation >= self.target {
            self.clock.stop();
        }
    }
}

#[tokio::test(start_paused = true)]
async fn clock_stopped_by_observer() -> Result<(), Box<dyn Error>> {
    let clock = Clock::new();
    let observer = StopAfter {
        clock: &clock,
        target: 5,
        seen: Vec::new(),
    };
    let board = RefCell::new(Config::new(20, 20).set_speed(10).board_with_observer(observer));
    board.borrow_mut().load_pattern("glider")?;

    let started = tokio::time::Instant::now();
    clock.start(&board).await;

    assert_eq!(clock.state(), ClockState::Idle);
    let board = board.borrow();
    assert_eq!(board.generation(), 5);
    assert_eq!(board.observer().seen, vec![1, 2, 3, 4, 5]);
    assert!(started.elapsed() >= Duration::from_millis(50));
    Ok(())
}
