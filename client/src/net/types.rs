//! Shared DTOs for the browser/server boundary.
//!
//! DESIGN
//! ======
//! The server relays identity and data-backend answers in exactly these
//! shapes, so the same types deserialize provider responses on the server
//! and `/api/*` responses in the browser.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A signed-in user as reported by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Up to two uppercase initials, used when no avatar image is available.
    #[must_use]
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() { "?".to_owned() } else { initials }
    }
}

/// A tenant that scopes which boards and members are visible.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Identity session: the user plus the organizations they belong to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub active_organization_id: Option<String>,
}

impl Session {
    /// Session with no user and no memberships.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolve the active organization id against the membership list.
    ///
    /// An id that is not among `organizations` resolves to `None`.
    #[must_use]
    pub fn active_organization(&self) -> Option<&Organization> {
        let id = self.active_organization_id.as_deref()?;
        self.organizations.iter().find(|org| org.id == id)
    }
}

/// Readiness report of the reactive data backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub ready: bool,
    /// `false` when the server runs without a data backend (local development).
    #[serde(default = "default_true")]
    pub configured: bool,
    #[serde(default)]
    pub version: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Product toggles delivered with the bootstrap payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default)]
    pub invite_members: bool,
}

/// Everything the app shell waits for before rendering page content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bootstrap {
    pub session: Session,
    pub backend: BackendStatus,
    #[serde(default)]
    pub flags: FeatureFlags,
}

/// Body of `POST /api/session/organization`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchOrganizationRequest {
    pub organization_id: String,
}

/// Error body returned by `/api/*` handlers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
