//! Local UI chrome state (viewport width and the layouts derived from it).
//!
//! DESIGN
//! ======
//! Responsive switching is driven by a measured width rather than CSS-only
//! visibility, so which widgets exist is a pure function that tests can
//! exercise without a browser.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Width at which the dashboard switches to its wide layout (Tailwind `lg`).
pub const WIDE_BREAKPOINT_PX: f64 = 1024.0;

/// Width assumed during server rendering, before the browser reports one.
pub const SSR_VIEWPORT_WIDTH_PX: f64 = 1280.0;

#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub viewport_width: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self { viewport_width: SSR_VIEWPORT_WIDTH_PX }
    }
}

impl UiState {
    #[must_use]
    pub fn navbar_layout(&self) -> NavbarLayout {
        NavbarLayout::for_width(self.viewport_width)
    }
}

/// Which navbar widgets are rendered at a given width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarLayout {
    pub show_search: bool,
    pub show_organization_switcher: bool,
    pub show_user_button: bool,
}

impl NavbarLayout {
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        let wide = width >= WIDE_BREAKPOINT_PX;
        Self { show_search: wide, show_organization_switcher: !wide, show_user_button: true }
    }
}
