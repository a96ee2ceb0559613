//! Branded loading placeholder shown while the shell bootstraps.

use leptos::prelude::*;

/// Pulsing logo, centered in the viewport. Stateless; a missing logo
/// degrades to blank space.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="progressbar" aria-label="Loading">
            <img class="loading__logo" src="/logo.svg" alt="logo" width="240" height="120"/>
        </div>
    }
}
