use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

/// Phase notifications broadcast alongside the flag, so collaborators that
/// are not polling the flag (menu navigation, back-to-top) can react to the
/// same transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    Start,
    End,
}

/// Shared "a programmatic scroll is in flight" flag.
///
/// All writes go through [`start`](Self::start) and [`end`](Self::end);
/// consumers only read. Repeated starts are idempotent, and callers are
/// responsible for pairing every start with exactly one end. Only one
/// programmatic scroll is assumed in flight at a time.
#[derive(Debug, Clone)]
pub struct AutoScrollSignal {
    active: Arc<AtomicBool>,
    events: broadcast::Sender<ScrollPhase>,
}

impl Default for AutoScrollSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoScrollSignal {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            active: Arc::new(AtomicBool::new(false)),
            events,
        }
    }

    /// Mark a programmatic scroll as started. Listeners observe the flag
    /// before the scroll command is issued.
    pub fn start(&self) {
        self.active.store(true, Ordering::SeqCst);
        // No receivers is fine; the flag alone still carries the state.
        let _ = self.events.send(ScrollPhase::Start);
    }

    /// Mark the scroll as finished, after layout has settled.
    pub fn end(&self) {
        self.active.store(false, Ordering::SeqCst);
        let _ = self.events.send(ScrollPhase::End);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Subscribe to start/end notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<ScrollPhase> {
        self.events.subscribe()
    }
}
