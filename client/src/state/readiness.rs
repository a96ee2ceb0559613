//! One-shot readiness gate for the app shell.
//!
//! DESIGN
//! ======
//! The shell waits on the provider bootstrap exactly once per page load.
//! Instead of an implicit suspense, the wait is an explicit three-state
//! machine: `Initializing` moves to either `Ready` or `Failed`, and both of
//! those are terminal. Later navigations therefore never bring the loading
//! fallback back.

#[cfg(test)]
#[path = "readiness_test.rs"]
mod readiness_test;

/// Phase of the provider bootstrap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ShellPhase {
    #[default]
    Initializing,
    Ready,
    /// Bootstrap failed; the reason is shown on the error view.
    Failed(String),
}

/// Gate wrapping [`ShellPhase`] with terminal-state enforcement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadinessGate {
    phase: ShellPhase,
}

impl ReadinessGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> &ShellPhase {
        &self.phase
    }

    /// Move to `Ready`. Returns `false` if the gate already left `Initializing`.
    pub fn mark_ready(&mut self) -> bool {
        self.transition(ShellPhase::Ready)
    }

    /// Move to `Failed`. Returns `false` if the gate already left `Initializing`.
    pub fn mark_failed(&mut self, reason: impl Into<String>) -> bool {
        self.transition(ShellPhase::Failed(reason.into()))
    }

    /// Whether the loading boundary is shown instead of page content.
    #[must_use]
    pub fn shows_fallback(&self) -> bool {
        matches!(self.phase, ShellPhase::Initializing)
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.phase, ShellPhase::Ready)
    }

    /// Failure reason, if the bootstrap failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            ShellPhase::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    fn transition(&mut self, next: ShellPhase) -> bool {
        if !self.shows_fallback() {
            return false;
        }
        self.phase = next;
        true
    }
}
