//! Dashboard search box bound to the `?search=` query parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::util::search::SEARCH_PARAM;

/// Text input that mirrors its value into the dashboard URL after a short
/// debounce, so the board list can filter from the query string.
#[component]
pub fn SearchInput() -> impl IntoView {
    let query = use_query_map();
    let value = RwSignal::new(query.with_untracked(|q| q.get(SEARCH_PARAM).unwrap_or_default()));

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let generation = StoredValue::new(0_u64);

    let on_input = move |ev| {
        let term = event_target_value(&ev);
        value.set(term.clone());

        #[cfg(feature = "hydrate")]
        {
            use crate::util::search::{SEARCH_DEBOUNCE_MS, build_search_url};

            let current = generation.get_value() + 1;
            generation.set_value(current);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(SEARCH_DEBOUNCE_MS)).await;
                if generation.get_value() != current {
                    return;
                }
                navigate(
                    &build_search_url("/dashboard", &term),
                    leptos_router::NavigateOptions { replace: true, ..Default::default() },
                );
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = term;
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon" aria-hidden="true">"⌕"</span>
            <input
                class="search-input__field"
                type="search"
                placeholder="Search boards"
                aria-label="Search boards"
                prop:value=move || value.get()
                on:input=on_input
            />
        </div>
    }
}
