//=========================================================================
// Core Game Loop
//
// Owns the live game state and runs it on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Create the game state once the window reports its drawable area
// - Apply input batches from the platform in arrival order
// - Run one simulation step per tick of a fixed-rate ticker
// - Publish a frame snapshot after every change for the renderer
//
// Notes:
// The loop handles exactly one signal at a time (see `EventCollector`),
// so input and simulation never mutate the state concurrently and the
// renderer only ever sees finished snapshots. Communication with the
// platform happens exclusively through channels.
//
//=========================================================================

//=== Public Modules ======================================================

pub mod game;
pub mod input;
pub mod platform_bridge;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::Duration;

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{debug, error, info, trace, warn};

//=== Internal Modules ====================================================

use game::{DrawableArea, GameState};
use platform_bridge::{CoreSignal, EventCollector, Frame, FrameSink, PlatformEvent};

//=== TickControl =========================================================

/// Whether the loop keeps running after handling a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== CoreLoop ============================================================

/// Single-threaded owner of the game state.
pub(crate) struct CoreLoop<F: FrameSink> {
    collector: EventCollector,
    sink: F,
    tick_period: Duration,
    state: Option<GameState>,
    ticks: u64,
}

impl<F: FrameSink> CoreLoop<F> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(receiver: Receiver<PlatformEvent>, sink: F, tick_period: Duration) -> Self {
        Self {
            collector: EventCollector::new(receiver),
            sink,
            tick_period,
            state: None,
            ticks: 0,
        }
    }

    //--- spawn() ----------------------------------------------------------
    //
    // Moves the loop onto its own thread. The thread ends when the window
    // closes, the platform hangs up, or the frame sink disconnects.
    //
    pub(crate) fn spawn(self) -> thread::JoinHandle<()> {
        thread::spawn(move || self.run())
    }

    //--- run() ------------------------------------------------------------

    /// Handles signals until told to stop.
    pub(crate) fn run(mut self) {
        loop {
            let signal = self.collector.next_signal();
            if self.handle(signal) == TickControl::Exit {
                break;
            }
        }

        info!(
            target: "core",
            "Core loop exiting after {} ticks (best run: {})",
            self.ticks,
            self.state.map_or(0, |s| s.score.highest)
        );
    }

    //--- Signal Handling --------------------------------------------------

    fn handle(&mut self, signal: CoreSignal) -> TickControl {
        match signal {
            CoreSignal::WindowCreated { width, height } => self.on_window_created(width, height),
            CoreSignal::Inputs(batch) => self.on_inputs(&batch),
            CoreSignal::Tick => self.on_tick(),
            CoreSignal::Exit => TickControl::Exit,
        }
    }

    fn on_window_created(&mut self, width: u32, height: u32) -> TickControl {
        if self.state.is_some() {
            warn!(target: "core", "Duplicate window report ignored ({}x{})", width, height);
            return TickControl::Continue;
        }

        let Some(area) = DrawableArea::new(width, height) else {
            error!(target: "core", "Unusable drawable area {}x{}", width, height);
            return TickControl::Exit;
        };

        info!(target: "core", "Game started on a {}x{} drawable area", width, height);
        self.state = Some(GameState::new(area));
        self.collector.start_ticking(self.tick_period);
        self.publish()
    }

    fn on_inputs(&mut self, batch: &[crate::core::input::InputEvent]) -> TickControl {
        let Some(state) = self.state.as_mut() else {
            debug!(target: "core", "Dropping {} input events received before the window", batch.len());
            return TickControl::Continue;
        };

        let moved = input::apply_batch(state, batch);
        trace!(
            target: "core::input",
            "Applied {} events ({} moved the paddle), paddle at {}",
            batch.len(),
            moved,
            state.paddle.center_x
        );

        self.publish()
    }

    fn on_tick(&mut self) -> TickControl {
        let Some(state) = self.state.as_mut() else {
            return TickControl::Continue;
        };

        let best_before = state.score.highest;
        let outcome = game::step(state);
        self.ticks += 1;

        if !outcome.is_quiet() {
            trace!(target: "game", "Tick {}: {:?}", self.ticks, outcome);
        }

        if outcome.paddle_hit {
            debug!(target: "game", "Hit, run now {}", state.score.hits);
            if state.score.highest > best_before {
                info!(target: "game", "New best run: {}", state.score.highest);
            }
        }
        if outcome.missed {
            debug!(target: "game", "Miss at tick {}, run reset", self.ticks);
        }

        self.publish()
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends the current snapshot. Stops the loop if nobody is listening.
    fn publish(&self) -> TickControl {
        let Some(state) = self.state else {
            return TickControl::Continue;
        };

        let frame = Frame { state, tick: self.ticks };
        if self.sink.publish(frame) {
            TickControl::Continue
        } else {
            warn!(target: "core", "Frame receiver disconnected");
            TickControl::Exit
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
