//! Browser viewport width tracking.
//!
//! Writes `window.innerWidth` into `UiState` on mount and on every `resize`.
//! Requires a browser environment; SSR keeps the default width.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Keep `ui.viewport_width` in sync with the browser window.
pub fn track_viewport_width(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        let read_width = move || {
            web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
        };
        if let Some(width) = read_width() {
            ui.update(|u| u.viewport_width = width);
        }
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(width) = read_width() {
                if (ui.get_untracked().viewport_width - width).abs() > f64::EPSILON {
                    ui.update(|u| u.viewport_width = width);
                }
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}
