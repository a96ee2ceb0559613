//! Root application component with routing and the shell context.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::app_shell::AppShell;
use crate::pages::{dashboard::DashboardPage, features::FeaturesPage};
use crate::state::shell::provide_shell_context;

const INTER_FONT_HREF: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="font-inter">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shell context once, then routes every page through
/// `AppShell` so the readiness gate and global hosts wrap all content.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_shell_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/thinkspace.css"/>
        <Link rel="stylesheet" href=INTER_FONT_HREF/>
        <Title text="ThinkSpace"/>
        <Meta name="description" content="Digital collaboration whiteboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=AppShell>
                    <Route path=StaticSegment("") view=FeaturesPage/>
                    <Route path=StaticSegment("features") view=FeaturesPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
