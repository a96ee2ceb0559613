//! Root context handle passed to every page and component.
//!
//! DESIGN
//! ======
//! All shell-wide signals travel together in one `Copy` handle, provided
//! once by `App` and read with [`use_shell`]. Components depend on the
//! handle, never on free-standing globals.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use leptos::prelude::*;

use super::modal::ModalState;
use super::readiness::ReadinessGate;
use super::session::{ProviderAccess, SessionSnapshot, resolve_bootstrap};
use super::toast::ToastState;
use super::ui::UiState;
use crate::net::types::{Bootstrap, Organization, User};

#[derive(Clone, Copy)]
pub struct ShellContext {
    pub gate: RwSignal<ReadinessGate>,
    pub session: RwSignal<SessionSnapshot>,
    pub toasts: RwSignal<ToastState>,
    pub modal: RwSignal<ModalState>,
    pub ui: RwSignal<UiState>,
}

impl ShellContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            gate: RwSignal::new(ReadinessGate::new()),
            session: RwSignal::new(SessionSnapshot::default()),
            toasts: RwSignal::new(ToastState::default()),
            modal: RwSignal::new(ModalState::default()),
            ui: RwSignal::new(UiState::default()),
        }
    }

    /// Record the bootstrap answer and release or fail the gate.
    ///
    /// The session is only replaced when this answer releases the gate; a
    /// shell that already failed keeps showing its error over stale data.
    pub fn apply_bootstrap(&self, result: Result<Bootstrap, String>) {
        match resolve_bootstrap(result) {
            Ok(snapshot) => {
                let mut released = false;
                self.gate.update(|gate| released = gate.mark_ready());
                if released {
                    self.session.set(snapshot);
                }
            }
            Err(reason) => {
                #[cfg(feature = "hydrate")]
                log::error!("shell bootstrap failed: {reason}");
                self.gate.update(|gate| {
                    gate.mark_failed(reason);
                });
            }
        }
    }
}

impl Default for ShellContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderAccess for ShellContext {
    fn current_user(&self) -> Option<User> {
        self.session.with(|snapshot| snapshot.current_user())
    }

    fn current_organization(&self) -> Option<Organization> {
        self.session.with(|snapshot| snapshot.current_organization())
    }

    fn data_ready(&self) -> bool {
        self.session.with(|snapshot| snapshot.data_ready())
    }
}

/// Create the shell handle and provide it to the component tree.
pub fn provide_shell_context() -> ShellContext {
    let shell = ShellContext::new();
    provide_context(shell);
    shell
}

/// Read the shell handle provided by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` tree.
pub fn use_shell() -> ShellContext {
    expect_context::<ShellContext>()
}
