//! Dashboard header row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes identity widgets and the search box. Which widgets exist depends
//! only on the measured viewport width; the navbar owns no state of its own
//! and only reads the active organization.

use leptos::prelude::*;

use super::invite_button::InviteButton;
use super::organization_switcher::OrganizationSwitcher;
use super::search_input::SearchInput;
use super::user_button::UserButton;
use crate::state::session::{ProviderAccess, invite_visible};
use crate::state::shell::use_shell;
use crate::state::ui::UiState;
use crate::util::appearance::navbar_appearance;

#[component]
pub fn Navbar() -> impl IntoView {
    let shell = use_shell();
    let appearance = navbar_appearance();
    let switcher_appearance = appearance.clone();
    let layout = Memo::new(move |_| shell.ui.with(UiState::navbar_layout));

    let invite_organization = move || {
        let organization = shell.current_organization();
        let flags = shell.session.with(|s| s.flags);
        if invite_visible(flags, organization.as_ref()) { organization } else { None }
    };

    view! {
        <nav class="navbar">
            {move || {
                layout
                    .get()
                    .show_search
                    .then(|| view! { <div class="navbar__search"><SearchInput/></div> })
            }}
            {move || {
                let appearance = switcher_appearance.clone();
                layout
                    .get()
                    .show_organization_switcher
                    .then(|| view! { <div class="navbar__org"><OrganizationSwitcher appearance=appearance/></div> })
            }}
            {move || invite_organization().map(|organization| view! { <InviteButton organization=organization/> })}
            <UserButton appearance=appearance/>
        </nav>
    }
}
