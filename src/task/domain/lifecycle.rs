//! Lifecycle tracking for in-flight create operations.

/// Phase of the most recent create operation.
///
/// A terminal phase lasts until the outcome is acknowledged, which returns
/// the lifecycle to [`CreatePhase::Idle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CreatePhase {
    /// No create has run yet.
    #[default]
    Idle,
    /// A create request is outstanding.
    Pending,
    /// The last create to settle was accepted by the server.
    Fulfilled,
    /// The last create to settle was rejected.
    Rejected,
}

/// Create-operation state machine backing the loading flag.
///
/// Overlapping creates are counted so that the flag stays raised until the
/// last outstanding request settles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateLifecycle {
    phase: CreatePhase,
    in_flight: usize,
}

impl CreateLifecycle {
    /// Returns the phase of the most recent create.
    #[must_use]
    pub const fn phase(&self) -> CreatePhase {
        self.phase
    }

    /// Returns `true` while at least one create is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub(crate) const fn begin(&mut self) {
        self.in_flight += 1;
        self.phase = CreatePhase::Pending;
    }

    pub(crate) const fn fulfil(&mut self) {
        self.settle(CreatePhase::Fulfilled);
    }

    pub(crate) const fn reject(&mut self) {
        self.settle(CreatePhase::Rejected);
    }

    pub(crate) const fn acknowledge(&mut self) {
        if matches!(self.phase, CreatePhase::Fulfilled | CreatePhase::Rejected) {
            self.phase = CreatePhase::Idle;
        }
    }

    const fn settle(&mut self, outcome: CreatePhase) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.phase = if self.in_flight == 0 {
            outcome
        } else {
            CreatePhase::Pending
        };
    }
}
