//! Application state modules.
//!
//! DESIGN
//! ======
//! Plain structs hold the data; `shell` bundles them into signals provided at
//! the root. Keeping the structs signal-free lets the rules (gate transitions,
//! toast limits, layout breakpoints) be tested without a browser.

pub mod modal;
pub mod readiness;
pub mod session;
pub mod shell;
pub mod toast;
pub mod ui;
