//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome and provider widgets while reading/writing
//! shared state from the shell context.

pub mod app_shell;
pub mod icon;
pub mod invite_button;
pub mod loading;
pub mod modal_host;
pub mod navbar;
pub mod organization_switcher;
pub mod search_input;
pub mod site_footer;
pub mod site_header;
pub mod toaster;
pub mod user_button;
