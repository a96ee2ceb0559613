//! Inline SVG rendering for catalog glyphs.

use leptos::prelude::*;

use crate::content::features::FeatureIcon;

/// Stroked 24x24 icon in the current text color.
#[component]
pub fn Icon(icon: FeatureIcon, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
