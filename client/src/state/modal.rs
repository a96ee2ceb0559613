//! Global modal slot.
//!
//! At most one modal is open at a time; opening another replaces it.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::net::types::Organization;

/// Dialogs the modal host knows how to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalKind {
    /// Share an organization invite link.
    InviteMembers { organization: Organization },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<ModalKind>,
}

impl ModalState {
    pub fn open(&mut self, kind: ModalKind) {
        self.open = Some(kind);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<&ModalKind> {
        self.open.as_ref()
    }
}

/// Shareable link that lands a teammate on the organization's dashboard.
#[must_use]
pub fn invite_link(origin: &str, organization: &Organization) -> String {
    format!("{}/dashboard?org={}", origin.trim_end_matches('/'), organization.id)
}
