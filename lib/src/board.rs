//! The board.

use crate::{
    cells::Transition,
    config::Config,
    dimensions::Dimensions,
    error::Error,
    generation::next_generation,
    grid::Grid,
    patterns,
    random,
    snapshot::Snapshot,
    traits::Observer,
};
use log::{debug, info};
use rand::Rng;

/// The board: a grid of living cells, its size, and a generation counter.
///
/// Every edit goes through the board so that the observer hears about
/// generation steps, zoom and resize requests.
#[derive(Debug)]
pub struct Board<O: Observer = ()> {
    /// Board configuration.
    config: Config,

    /// The living cells.
    grid: Grid,

    /// Number of generation steps since the board was created.
    generation: u64,

    observer: O,
}

impl Default for Board<()> {
    fn default() -> Self {
        Board::new(Config::default(), ())
    }
}

impl<O: Observer> Board<O> {
    /// Creates an empty board.
    pub fn new(config: Config, observer: O) -> Self {
        Board {
            config,
            grid: Grid::new(),
            generation: 0,
            observer,
        }
    }

    /// Board configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The living cells.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Number of rows the rule is applied to.
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    /// Number of columns the rule is applied to.
    pub fn columns(&self) -> usize {
        self.config.columns
    }

    /// The size of the board.
    pub fn dimensions(&self) -> Dimensions {
        self.config.dimensions()
    }

    /// Number of generation steps taken so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Interval between two generations while running, in milliseconds.
    pub fn speed(&self) -> u64 {
        self.config.speed
    }

    /// Sets the interval between two generations.
    pub fn set_speed(&mut self, speed: u64) {
        self.config.speed = speed;
    }

    /// Resizes the board from an `RxC` descriptor.
    ///
    /// A side that does not parse keeps its current value.
    /// Cells outside the new size are kept, but no longer evolve.
    pub fn set_dimensions(&mut self, spec: &str) -> Dimensions {
        let dimensions = self.dimensions().parse_or_keep(spec);
        self.resize(dimensions);
        dimensions
    }

    /// Resizes the board.
    pub fn resize(&mut self, dimensions: Dimensions) {
        self.config.rows = dimensions.rows;
        self.config.columns = dimensions.columns;
    }

    /// Whether the cell at `(row, column)` is alive.
    pub fn is_alive(&self, row: usize, column: usize) -> bool {
        self.grid.is_alive(row, column)
    }

    /// Flips a cell. Returns whether it is now alive.
    pub fn toggle(&mut self, row: usize, column: usize) -> bool {
        self.grid.toggle(row, column)
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Kills every cell. The generation counter keeps going.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Advances one generation.
    ///
    /// The next grid is computed from the current one and then swapped in,
    /// so the computation only ever reads the old state.
    pub fn step(&mut self) -> Vec<Transition> {
        let (next, transitions) = next_generation(&self.grid, self.rows(), self.columns());
        self.grid = next;
        self.generation += 1;
        debug!(
            "Generation {}: {} cells, {} changed",
            self.generation,
            self.grid.population(),
            transitions.len()
        );
        self.observer.generation_advanced(self.generation, &transitions);
        transitions
    }

    /// Replaces the grid with a preset pattern.
    ///
    /// The board grows to the pattern's minimum size if needed. The observer
    /// is asked to zoom first (if the pattern suggests a zoom level), then to
    /// resize. An unknown id leaves the board as it is.
    pub fn load_pattern(&mut self, id: &str) -> Result<(), Error> {
        let load = patterns::load(id, self.rows(), self.columns())?;
        info!("Loading pattern {:?} into a {} board", id, load.viewport);
        if let Some(zoom) = load.zoom {
            self.observer.zoom_change_requested(zoom);
        }
        self.observer.viewport_change_requested(load.viewport);
        self.resize(load.viewport);
        self.grid = load.grid;
        Ok(())
    }

    /// Fills every row of the board with random cells,
    /// each alive with the given probability.
    pub fn randomize(&mut self, probability: f64) -> Result<(), Error> {
        self.randomize_with(probability, &mut rand::thread_rng())
    }

    /// Like [`randomize`](Self::randomize), with the given random number generator.
    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        probability: f64,
        rng: &mut R,
    ) -> Result<(), Error> {
        let (rows, columns) = (self.rows(), self.columns());
        random::fill(&mut self.grid, rows, columns, probability, rng)?;
        info!(
            "Random fill of {}x{} with p = {}: {} cells",
            rows,
            columns,
            probability,
            self.grid.population()
        );
        Ok(())
    }

    /// Saves the grid.
    pub fn snapshot(&self) -> Snapshot {
        self.grid.snapshot()
    }

    /// Replaces the grid with a snapshot.
    ///
    /// A malformed snapshot leaves the board as it is.
    pub fn load_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), Error> {
        let grid = snapshot.to_grid()?;
        info!("Loaded snapshot with {} cells", grid.population());
        self.grid = grid;
        Ok(())
    }

    /// Saves the grid as JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> String {
        self.snapshot().to_json()
    }

    /// Replaces the grid with a snapshot in JSON.
    #[cfg(feature = "serde")]
    pub fn load_json(&mut self, json: &str) -> Result<(), Error> {
        let snapshot = Snapshot::from_json(json)?;
        self.load_snapshot(&snapshot)
    }

    /// Displays the board in [Plaintext](https://conwaylife.com/wiki/Plaintext).
    ///
    /// Only the cells inside the board's size are shown.
    pub fn display(&self) -> String {
        self.grid.plaintext(self.rows(), self.columns())
    }

    /// A one-line summary of the board.
    pub fn summary(&self) -> String {
        format!(
            "Gen: {}  Cells: {}  Size: {}",
            self.generation,
            self.population(),
            self.dimensions()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::State;

    #[derive(Debug, PartialEq)]
    enum Event {
        Generation(u64, usize),
        Zoom(u32),
        Viewport(Dimensions),
    }

    /// Keeps every notification, in the order they arrive.
    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl Observer for Recorder {
        fn generation_advanced(&mut self, generation: u64, transitions: &[Transition]) {
            self.events.push(Event::Generation(generation, transitions.len()));
        }

        fn zoom_change_requested(&mut self, zoom: u32) {
            self.events.push(Event::Zoom(zoom));
        }

        fn viewport_change_requested(&mut self, viewport: Dimensions) {
            self.events.push(Event::Viewport(viewport));
        }
    }

    #[test]
    fn step_counts_and_notifies() {
        let mut board = Config::new(5, 5).board_with_observer(Recorder::default());
        board.toggle(2, 1);
        board.toggle(2, 2);
        board.toggle(2, 3);

        let transitions = board.step();
        assert_eq!(board.generation(), 1);
        assert_eq!(transitions.len(), 4);
        assert!(transitions.contains(&Transition {
            row: 1,
            column: 2,
            state: State::Alive
        }));
        assert!(board.is_alive(1, 2) && board.is_alive(3, 2));

        board.step();
        assert_eq!(board.generation(), 2);
        assert_eq!(
            board.observer().events,
            vec![Event::Generation(1, 4), Event::Generation(2, 4)]
        );
    }

    #[test]
    fn pattern_replaces_grid_and_requests_viewport() -> Result<(), Error> {
        let mut board = Config::new(10, 10).board_with_observer(Recorder::default());
        board.toggle(9, 9);
        board.load_pattern("pulsar")?;
        assert!(!board.is_alive(9, 9));
        assert_eq!(board.population(), 48);
        assert_eq!(board.dimensions(), Dimensions::new(17, 17));
        Ok(())
    }

    #[test]
    fn zoom_is_requested_before_viewport() -> Result<(), Error> {
        let mut board = Config::new(10, 10).board_with_observer(Recorder::default());
        board.load_pattern("pulsar")?;
        assert_eq!(
            board.observer().events,
            vec![Event::Zoom(30), Event::Viewport(Dimensions::new(17, 17))]
        );
        assert_eq!(board.observer().events[1], Event::Viewport(board.dimensions()));
        Ok(())
    }

    #[test]
    fn pattern_without_zoom() -> Result<(), Error> {
        let mut board = Config::new(50, 50).board_with_observer(Recorder::default());
        board.load_pattern("glider")?;
        assert_eq!(
            board.observer().events,
            vec![Event::Viewport(Dimensions::new(50, 50))]
        );
        Ok(())
    }

    #[test]
    fn unknown_pattern_keeps_grid() {
        let mut board = Board::default();
        board.toggle(1, 1);
        assert!(board.load_pattern("nope").is_err());
        assert!(board.is_alive(1, 1));
        assert_eq!(board.population(), 1);
    }

    #[test]
    fn malformed_snapshot_keeps_grid() {
        let mut board = Board::default();
        board.toggle(1, 1);
        let mut snapshot = Snapshot::new();
        snapshot.insert("0", vec![0]);
        snapshot.insert("row", vec![1]);
        assert!(matches!(
            board.load_snapshot(&snapshot),
            Err(Error::MalformedSnapshot(_))
        ));
        assert!(board.is_alive(1, 1));
        assert!(!board.is_alive(0, 0));
    }

    #[test]
    fn set_dimensions_falls_back() {
        let mut board = Config::new(10, 20).board();
        assert_eq!(board.set_dimensions("30x"), Dimensions::new(30, 20));
        assert_eq!(board.rows(), 30);
        assert_eq!(board.columns(), 20);
    }

    #[test]
    fn display() {
        let mut board = Config::new(2, 3).board();
        board.toggle(0, 1);
        board.toggle(1, 2);
        assert_eq!(board.display(), ".o.\n..o\n");
        assert_eq!(board.summary(), "Gen: 0  Cells: 2  Size: 2x3");
    }
}
