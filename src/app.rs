mod contact;
mod design;
mod header;
mod homepage;
mod preferences;
mod projects;
mod scroll;
mod section;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::tokens::css_variables;
use design::DesignPage;
use header::{Header, SITE};
use homepage::HomePage;
use preferences::provide_motion_settings;
use projects::{ProjectPage, ProjectsPage};
use scroll::provide_scroll_hub;

pub use section::{Reveal, ScrollSection};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // one scroll/resize listener pair for the whole page
    provide_scroll_hub();
    provide_motion_settings();

    view! {
        <Title formatter=|title| format!("{title} - {SITE}") />
        <Style>{css_variables()}</Style>

        <Router>
            <Header />
            <main class="flex flex-col flex-grow items-center w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/projects/:name") view=ProjectPage />
                    <Route path=path!("/design") view=DesignPage />
                </Routes>
            </main>
            <footer class="w-full py-8 text-center type-caption text-muted">
                {format!("{SITE} · built {}", env!("BUILD_TIME").get(..10).unwrap_or_default())}
            </footer>
        </Router>
    }
}
