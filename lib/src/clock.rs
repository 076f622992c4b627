//! Running the board at a fixed pace.

use crate::{board::Board, traits::Observer};
use log::info;
use std::cell::{Cell, RefCell};
use tokio::time;

/// What the clock is doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClockState {
    /// Not running.
    Idle,
    /// Stepping the board, one generation per interval.
    Running,
    /// Asked to stop. The loop is still waiting out its current interval.
    StopRequested,
}

/// Steps a board again and again, waiting the board's
/// [`speed`](Board::speed) between two generations.
///
/// Everything happens on the current task: [`start`](Self::start) returns a
/// future that runs the loop, and the only point where other tasks get to
/// run is the wait between two generations. The board is borrowed mutably
/// only while a step is being computed, so other tasks on the same thread
/// may edit it during the wait. The next step then starts from whatever the
/// grid is at that moment.
///
/// Stopping is cooperative. [`stop`](Self::stop) only flips the state; the
/// loop notices after its current wait is over, so it may take up to one
/// interval to halt, and no further generation is computed.
#[derive(Debug)]
pub struct Clock {
    state: Cell<ClockState>,
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new()
    }
}

impl Clock {
    pub fn new() -> Self {
        Clock {
            state: Cell::new(ClockState::Idle),
        }
    }

    pub fn state(&self) -> ClockState {
        self.state.get()
    }

    /// Whether the loop is running and has not been asked to stop.
    pub fn is_running(&self) -> bool {
        self.state.get() == ClockState::Running
    }

    /// Runs the board until stopped.
    ///
    /// * If the clock is already running, this returns at once.
    /// * If a stop was requested but the loop is still waiting, the request
    ///   is withdrawn and this returns at once; the waiting loop goes on.
    /// * Otherwise this steps the board, waits, and repeats until the state
    ///   is found to be anything but [`ClockState::Running`] after a wait.
    ///
    /// The interval is read from the board right before each wait, so a new
    /// speed applies from the next wait on.
    pub async fn start<O: Observer>(&self, board: &RefCell<Board<O>>) {
        match self.state.get() {
            ClockState::Running => return,
            ClockState::StopRequested => {
                info!("Clock resumed before stopping");
                self.state.set(ClockState::Running);
                return;
            }
            ClockState::Idle => {}
        }

        self.state.set(ClockState::Running);
        info!("Clock started");
        loop {
            let interval = {
                let mut board = board.borrow_mut();
                board.step();
                board.config().interval()
            };
            time::sleep(interval).await;
            if self.state.get() != ClockState::Running {
                break;
            }
        }
        self.state.set(ClockState::Idle);
        info!("Clock stopped");
    }

    /// Asks the loop to stop after its current wait.
    ///
    /// Does nothing unless the clock is running.
    pub fn stop(&self) {
        if self.state.get() == ClockState::Running {
            self.state.set(ClockState::StopRequested);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::time::Duration;
    use tokio::{task, time::Instant};

    fn board(speed: u64) -> RefCell<Board> {
        RefCell::new(Config::new(8, 8).set_speed(speed).board())
    }

    #[tokio::test(start_paused = true)]
    async fn stop_right_after_start() {
        let board = board(1500);
        let clock = Clock::new();
        let started = Instant::now();
        tokio::join!(clock.start(&board), async {
            task::yield_now().await;
            assert_eq!(clock.state(), ClockState::Running);
            clock.stop();
            assert_eq!(clock.state(), ClockState::StopRequested);
        });
        assert_eq!(board.borrow().generation(), 1);
        assert_eq!(clock.state(), ClockState::Idle);
        // The stop only lands once the pending wait is over.
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_during_second_wait() {
        let board = board(1000);
        let clock = Clock::new();
        tokio::join!(clock.start(&board), async {
            time::sleep(Duration::from_millis(1500)).await;
            assert_eq!(board.borrow().generation(), 2);
            clock.stop();
        });
        assert_eq!(board.borrow().generation(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn new_speed_applies_from_next_wait() {
        let board = board(1000);
        let clock = Clock::new();
        tokio::join!(clock.start(&board), async {
            time::sleep(Duration::from_millis(500)).await;
            board.borrow_mut().set_speed(100);
            time::sleep(Duration::from_millis(650)).await;
            clock.stop();
        });
        // Generations at 0, 1000 and 1100 ms; the stop at 1150 ms lands at 1200 ms.
        assert_eq!(board.borrow().generation(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn second_start_is_a_no_op() {
        let board = board(1000);
        let clock = Clock::new();
        tokio::join!(clock.start(&board), async {
            task::yield_now().await;
            clock.start(&board).await;
            assert_eq!(board.borrow().generation(), 1);
            clock.stop();
        });
        assert_eq!(board.borrow().generation(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn start_withdraws_pending_stop() {
        let board = board(1000);
        let clock = Clock::new();
        tokio::join!(clock.start(&board), async {
            time::sleep(Duration::from_millis(500)).await;
            clock.stop();
            time::sleep(Duration::from_millis(200)).await;
            clock.start(&board).await;
            assert!(clock.is_running());
            time::sleep(Duration::from_millis(500)).await;
            clock.stop();
        });
        // Generations at 0 and 1000 ms; the second stop lands at 2000 ms.
        assert_eq!(board.borrow().generation(), 2);
        assert_eq!(clock.state(), ClockState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn edits_during_wait_are_seen() {
        let board = board(1000);
        let clock = Clock::new();
        tokio::join!(clock.start(&board), async {
            time::sleep(Duration::from_millis(500)).await;
            {
                let mut edit = board.borrow_mut();
                edit.toggle(3, 2);
                edit.toggle(3, 3);
                edit.toggle(3, 4);
            }
            time::sleep(Duration::from_millis(1000)).await;
            clock.stop();
        });
        let board = board.borrow();
        assert_eq!(board.generation(), 2);
        assert!(board.is_alive(2, 3) && board.is_alive(3, 3) && board.is_alive(4, 3));
        assert_eq!(board.population(), 3);
    }

    #[tokio::test]
    async fn stop_when_idle_does_nothing() {
        let clock = Clock::new();
        clock.stop();
        assert_eq!(clock.state(), ClockState::Idle);
    }
}
