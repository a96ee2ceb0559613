//! Dashboard route: navbar plus the organization-scoped board panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Board listing belongs to the data backend; this page only frames it with
//! the navbar and echoes the active organization and search term.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::navbar::Navbar;
use crate::net::api::SIGN_IN_ENDPOINT;
use crate::net::types::Organization;
use crate::state::session::ProviderAccess;
use crate::state::shell::use_shell;
use crate::util::search::SEARCH_PARAM;

/// Heading for the board panel.
#[must_use]
pub fn dashboard_heading(organization: Option<&Organization>, search: Option<&str>) -> String {
    let Some(organization) = organization else {
        return "Select or create an organization".to_owned();
    };
    match search.map(str::trim).filter(|term| !term.is_empty()) {
        Some(term) => format!("{} boards matching “{term}”", organization.name),
        None => format!("{} boards", organization.name),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let shell = use_shell();
    let query = use_query_map();
    let signed_in = move || shell.current_user().is_some();

    let heading = move || {
        let organization = shell.current_organization();
        let search = query.with(|q| q.get(SEARCH_PARAM));
        dashboard_heading(organization.as_ref(), search.as_deref())
    };

    view! {
        <div class="dashboard-page">
            <Navbar/>
            <main class="dashboard-page__main">
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <div class="dashboard-page__empty">
                                <h2>"Sign in to view your boards"</h2>
                                <a class="btn btn--primary" href=SIGN_IN_ENDPOINT rel="external">
                                    "Sign in"
                                </a>
                            </div>
                        }
                    }
                >
                    <h2 class="dashboard-page__heading">{heading}</h2>
                </Show>
            </main>
        </div>
    }
}
