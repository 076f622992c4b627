//! Running the board from the command line.

use crate::{
    args::{parse_config, Args, Seed},
    error::CliError,
};
use lifeboard_lib::{
    patterns, Board, Clock, Config, Dimensions, Grid, Observer, State, Transition,
};
use log::{info, warn};
use std::{cell::RefCell, fs, path::Path};
use tokio::runtime;

/// Prints every generation, and stops the clock once enough have passed.
///
/// The observer only hears about changes, so it keeps its own copy of the
/// grid and applies the transitions to it.
pub(crate) struct Printer<'a> {
    clock: &'a Clock,
    target: u64,
    quiet: bool,
    grid: Grid,
    viewport: Dimensions,
}

impl<'a> Printer<'a> {
    pub(crate) fn new(clock: &'a Clock, target: u64, quiet: bool) -> Self {
        Printer {
            clock,
            target,
            quiet,
            grid: Grid::new(),
            viewport: Dimensions::default(),
        }
    }

    /// Starts mirroring the given board.
    fn sync(&mut self, grid: &Grid, viewport: Dimensions) {
        self.grid = grid.clone();
        self.viewport = viewport;
    }

    /// What would be printed now.
    fn frame(&self, generation: u64) -> String {
        format!(
            "Gen: {}  Cells: {}  Size: {}\n{}",
            generation,
            self.grid.population(),
            self.viewport,
            self.grid.plaintext(self.viewport.rows, self.viewport.columns)
        )
    }
}

impl Observer for Printer<'_> {
    fn generation_advanced(&mut self, generation: u64, transitions: &[Transition]) {
        for transition in transitions {
            match transition.state {
                State::Alive => self.grid.insert(transition.row, transition.column),
                State::Dead => {
                    self.grid.remove(transition.row, transition.column);
                }
            }
        }
        if !self.quiet {
            println!("{}", self.frame(generation));
        }
        if generation >= self.target {
            self.clock.stop();
        }
    }

    fn zoom_change_requested(&mut self, zoom: u32) {
        info!("Suggested zoom level: {}", zoom);
    }

    fn viewport_change_requested(&mut self, viewport: Dimensions) {
        self.viewport = viewport;
    }
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(CliError::io(path))
}

/// Reads the configuration file, if any.
fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    match path {
        Some(path) => {
            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default();
            parse_config(&read(path)?, extension)
        }
        None => Ok(Config::default()),
    }
}

/// Fills the board before it starts running.
pub(crate) fn seed<O: Observer>(board: &mut Board<O>, seed: &Seed) -> Result<(), CliError> {
    match seed {
        Seed::Empty => warn!("Starting from an empty board"),
        Seed::Pattern(id) => board.load_pattern(id)?,
        Seed::Random(probability) => board.randomize(*probability)?,
        Seed::Load(path) => board.load_json(&read(path)?)?,
    }
    Ok(())
}

/// Runs the program.
pub(crate) fn run(args: Args) -> Result<(), CliError> {
    if args.list {
        for id in patterns::ids() {
            if let Some(pattern) = patterns::get(id) {
                println!("{:<20}{}", id, pattern.name);
            }
        }
        return Ok(());
    }

    let config = args.apply(load_config(args.config_file.as_deref())?);
    let clock = Clock::new();
    let mut board = config.board_with_observer(Printer::new(&clock, args.generations, args.quiet));
    seed(&mut board, &args.seed)?;

    let (grid, dimensions) = (board.grid().clone(), board.dimensions());
    board.observer_mut().sync(&grid, dimensions);
    if !args.quiet {
        println!("{}", board.observer().frame(0));
    }

    let board = RefCell::new(board);
    let runtime = runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(CliError::Runtime)?;
    runtime.block_on(clock.start(&board));

    let board = board.into_inner();
    info!("{}", board.summary());
    let json = board.to_json();
    match &args.save {
        Some(path) => fs::write(path, json).map_err(CliError::io(path))?,
        None => println!("{}", json),
    }
    Ok(())
}
