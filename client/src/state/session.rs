//! Provider-owned session data as seen by the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider owns users and organizations; the data backend owns
//! readiness. Components only read them through [`ProviderAccess`], so the
//! navbar and pages never depend on how the bootstrap was obtained.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{BackendStatus, Bootstrap, FeatureFlags, Organization, Session, User};

/// Narrow read-only view over the provider context.
pub trait ProviderAccess {
    fn current_user(&self) -> Option<User>;
    fn current_organization(&self) -> Option<Organization>;
    fn data_ready(&self) -> bool;
}

/// Last known provider state, filled in by the bootstrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session: Session,
    pub backend: BackendStatus,
    pub flags: FeatureFlags,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            session: Session::anonymous(),
            backend: BackendStatus { ready: false, configured: true, version: None },
            flags: FeatureFlags::default(),
        }
    }
}

impl From<Bootstrap> for SessionSnapshot {
    fn from(bootstrap: Bootstrap) -> Self {
        Self { session: bootstrap.session, backend: bootstrap.backend, flags: bootstrap.flags }
    }
}

impl ProviderAccess for SessionSnapshot {
    fn current_user(&self) -> Option<User> {
        self.session.user.clone()
    }

    fn current_organization(&self) -> Option<Organization> {
        self.session.active_organization().cloned()
    }

    fn data_ready(&self) -> bool {
        self.backend.ready
    }
}

/// Decide the shell outcome for a bootstrap answer.
///
/// A backend that answered but is not ready counts as a failed bootstrap,
/// since page content needs the data context.
///
/// # Errors
///
/// Returns the failure reason shown on the shell error view.
pub fn resolve_bootstrap(result: Result<Bootstrap, String>) -> Result<SessionSnapshot, String> {
    let bootstrap = result?;
    if !bootstrap.backend.ready {
        return Err("data backend is not ready".to_owned());
    }
    Ok(SessionSnapshot::from(bootstrap))
}

/// Whether the navbar's invite action is rendered.
///
/// Gated behind a product flag; even with the flag on it needs an active
/// organization to invite into.
#[must_use]
pub fn invite_visible(flags: FeatureFlags, organization: Option<&Organization>) -> bool {
    flags.invite_members && organization.is_some()
}
