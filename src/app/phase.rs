use tracing::debug;

/// Lifecycle of a single run. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunPhase {
    Idle,
    Seeding,
    Generating,
    Dispatching,
    Classifying,
    Reporting,
    Done,
}

impl RunPhase {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Seeding => "seeding",
            Self::Generating => "generating",
            Self::Dispatching => "dispatching",
            Self::Classifying => "classifying",
            Self::Reporting => "reporting",
            Self::Done => "done",
        }
    }
}

#[derive(Debug)]
pub(super) struct PhaseTracker {
    current: RunPhase,
}

impl PhaseTracker {
    pub(super) const fn new() -> Self {
        Self {
            current: RunPhase::Idle,
        }
    }

    pub(super) fn advance(&mut self, next: RunPhase) {
        debug_assert!(next > self.current, "run phases only move forward");
        debug!("Run phase: {} -> {}", self.current.as_str(), next.as_str());
        self.current = next;
    }

    pub(super) const fn current(&self) -> RunPhase {
        self.current
    }
}
