//! Footer for public marketing pages.

use leptos::prelude::*;

pub const COPYRIGHT_YEAR: u16 = 2025;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="site-footer__brand">"BoardScape"</span>
            <span class="site-footer__copy">{format!("© {COPYRIGHT_YEAR} ThinkSpace. All rights reserved.")}</span>
        </footer>
    }
}
