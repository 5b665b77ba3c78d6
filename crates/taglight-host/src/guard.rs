//! Single-flight guard for tap resolution.

/// Tap resolution state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TapState {
    /// No resolution in progress.
    #[default]
    Idle,
    /// A resolution started at `offset` and has not finished yet.
    InFlight {
        /// The offset the in-flight tap was resolved at.
        offset: usize,
    },
}

/// Allows at most one tap resolution at a time per view.
///
/// A tap arriving while another is still being dispatched is dropped, not queued.
#[derive(Debug, Clone, Default)]
pub struct TapGuard {
    state: TapState,
}

impl TapGuard {
    /// Create an idle guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> TapState {
        self.state
    }

    /// Returns `true` while a resolution is in flight.
    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, TapState::InFlight { .. })
    }

    /// Start a resolution. Returns `false` (and changes nothing) if one is already in flight.
    pub fn try_begin(&mut self, offset: usize) -> bool {
        if self.is_in_flight() {
            return false;
        }
        self.state = TapState::InFlight { offset };
        true
    }

    /// Finish the current resolution. Idempotent.
    pub fn finish(&mut self) {
        self.state = TapState::Idle;
    }
}
