//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side multiplexer for platform events and the simulation ticker.
//
// Architecture:
// ```text
//   Receiver<PlatformEvent> ─┐
//                            ├─ select! ─► CoreSignal ─► core loop
//   tick(period)  ───────────┘
// ```
//
// One signal is handed out at a time, so input handling and simulation
// steps are strictly serialized on the calling thread. The ticker stays
// silent (`never()`) until `start_ticking()` is called.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use crossbeam_channel::{never, select, tick, Receiver};
use log::debug;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== CoreSignal ==========================================================

/// Next unit of work for the core loop.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CoreSignal {
    /// The window reported its drawable size.
    WindowCreated { width: u32, height: u32 },

    /// Ordered input batch from one platform frame.
    Inputs(Vec<InputEvent>),

    /// The ticker fired; run one simulation step.
    Tick,

    /// Window closed or platform gone; stop the loop.
    Exit,
}

//=== EventCollector ======================================================

/// Blocks on platform events and ticks, yielding one [`CoreSignal`] at a time.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    ticker: Receiver<Instant>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            ticker: never(),
        }
    }

    /// Starts the fixed-rate ticker. Replaces any previous ticker.
    pub(crate) fn start_ticking(&mut self, period: Duration) {
        debug!(target: "core", "Ticker started ({:?} period)", period);
        self.ticker = tick(period);
    }

    /// Blocks until a platform event arrives or the ticker fires.
    pub(crate) fn next_signal(&self) -> CoreSignal {
        select! {
            recv(self.receiver) -> msg => match msg {
                Ok(event) => Self::translate(event),
                Err(_) => CoreSignal::Exit,
            },
            recv(self.ticker) -> _ => CoreSignal::Tick,
        }
    }

    fn translate(event: PlatformEvent) -> CoreSignal {
        match event {
            PlatformEvent::WindowCreated { width, height } => {
                CoreSignal::WindowCreated { width, height }
            }
            PlatformEvent::Inputs(batch) => CoreSignal::Inputs(batch),
            PlatformEvent::WindowClosed => CoreSignal::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crossbeam_channel::unbounded;

    #[test]
    fn window_created_is_forwarded() {
        let (tx, rx) = unbounded();
        let collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowCreated { width: 1024, height: 602 }).unwrap();

        assert_eq!(
            collector.next_signal(),
            CoreSignal::WindowCreated { width: 1024, height: 602 }
        );
    }

    #[test]
    fn inputs_keep_their_order() {
        let (tx, rx) = unbounded();
        let collector = EventCollector::new(rx);

        let batch = vec![
            InputEvent::KeyDown { key: KeyCode::ArrowLeft, repeat: false },
            InputEvent::PointerMoved { x: 10.0, y: 20.0 },
        ];
        tx.send(PlatformEvent::Inputs(batch.clone())).unwrap();

        assert_eq!(collector.next_signal(), CoreSignal::Inputs(batch));
    }

    #[test]
    fn window_closed_means_exit() {
        let (tx, rx) = unbounded();
        let collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.next_signal(), CoreSignal::Exit);
    }

    #[test]
    fn disconnect_means_exit() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.next_signal(), CoreSignal::Exit);
    }

    #[test]
    fn ticker_fires_once_started() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        collector.start_ticking(Duration::from_millis(1));

        assert_eq!(collector.next_signal(), CoreSignal::Tick);
    }
}
