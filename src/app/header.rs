use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use super::preferences::MotionToggle;

pub const SITE: &str = "rowanavery.dev";

const NAV: [(&str, &str); 4] = [
    ("/", "home"),
    ("/projects", "projects"),
    ("/design", "design"),
    ("/#contact", "contact"),
];

/// Last path segment, or the site name at the root.
fn dir_from_pathname(pathname: &str) -> &str {
    match pathname.trim_end_matches('/').rsplit('/').next() {
        Some(dir) if !dir.is_empty() => dir,
        _ => SITE,
    }
}

#[component]
fn Ps1(path: Signal<String>) -> impl IntoView {
    view! {
        <span class="text-green">"➜"</span>
        " "
        <span class="text-cyan">{move || dir_from_pathname(&path.get()).to_string()}</span>
        " "
        <span class="text-blue">
            <span>"git:("</span>
            <span class="text-red">"main"</span>
            <span>")"</span>
        </span>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    let is_active = move |href: &str| {
        let current = pathname.get();
        match href {
            "/" => current == "/",
            h if h.starts_with("/#") => false,
            h => current.starts_with(h),
        }
    };

    view! {
        <header class="sticky top-0 z-50 bg-background/80 backdrop-blur border-b border-muted/20">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-4 flex flex-wrap items-center justify-between gap-4">
                <A href="/" attr:class="text-lg font-bold">
                    <Ps1 path=pathname.into() />
                </A>
                <nav class="flex gap-6 text-sm">
                    {NAV
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class=move || {
                                        if is_active(href) {
                                            "text-purple"
                                        } else {
                                            "text-muted hover:text-foreground transition-colors duration-200"
                                        }
                                    }
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <MotionToggle />
                </nav>
            </div>
        </header>
    }
}
