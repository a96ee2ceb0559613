//! Top bar for public marketing pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                <img src="/logo.svg" alt="ThinkSpace" width="120" height="60"/>
            </A>
            <nav class="site-header__links">
                <A href="/features" attr:class="site-header__link">"Features"</A>
                <A href="/dashboard" attr:class="btn btn--primary site-header__cta">"Dashboard"</A>
            </nav>
        </header>
    }
}
