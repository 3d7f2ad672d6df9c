use leptos::prelude::*;
use leptos_meta::Title;

use super::section::{Reveal, ScrollSection};
use crate::motion::{ContentType, Intensity, ProfileTable};
use crate::tokens::{deprecated_aliases, lookup, Resolved, PALETTE, SPACING, TYPE_SCALE};

#[component]
pub fn DesignPage() -> impl IntoView {
    view! {
        <Title text="Design system" />
        <div class="w-full">
            <ScrollSection id="type" content=ContentType::TextPrimary class="py-16">
                <div class="max-w-5xl mx-auto px-6">
                    <Reveal index=0>
                        <h1 class="type-h1 mb-10">"Design system"</h1>
                    </Reveal>
                    <TypeScale />
                </div>
            </ScrollSection>
            <ScrollSection id="space-color" content=ContentType::TextSecondary class="py-16">
                <div class="max-w-5xl mx-auto px-6 grid gap-12 lg:grid-cols-2">
                    <Reveal index=0>
                        <Spacing />
                    </Reveal>
                    <Reveal index=1>
                        <Palette />
                    </Reveal>
                </div>
            </ScrollSection>
            <ScrollSection id="aliases" content=ContentType::TextSecondary intensity=Intensity::Subtle class="py-16">
                <Reveal index=0 class="max-w-5xl mx-auto px-6">
                    <Aliases />
                </Reveal>
            </ScrollSection>
            <ScrollSection id="motion" content=ContentType::Interactive class="py-16">
                <Reveal index=0 class="max-w-5xl mx-auto px-6">
                    <Profiles />
                </Reveal>
            </ScrollSection>
        </div>
    }
}

#[component]
fn TypeScale() -> impl IntoView {
    TYPE_SCALE
        .iter()
        .enumerate()
        .map(|(i, step)| {
            view! {
                <Reveal index={i + 1} class="mb-6 border-b border-muted/20 pb-4">
                    <p class="type-caption text-muted mb-1">
                        {format!(
                            "{} · {}rem / {} · {}",
                            step.name,
                            step.size_rem,
                            step.line_height,
                            step.weight,
                        )}
                    </p>
                    <p style=step.style()>"The quick brown fox jumps over the lazy dog"</p>
                </Reveal>
            }
        })
        .collect_view()
}

#[component]
fn Spacing() -> impl IntoView {
    view! {
        <h2 class="type-h2 mb-6">"Spacing"</h2>
        <ul class="space-y-2">
            {SPACING
                .iter()
                .map(|s| {
                    view! {
                        <li class="flex items-center gap-4">
                            <span class="type-caption text-muted w-16">{format!("space-{}", s.name)}</span>
                            <span
                                class="inline-block h-3 bg-purple/60 rounded-sm"
                                style=format!("width: var(--space-{})", s.name)
                            ></span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn Palette() -> impl IntoView {
    view! {
        <h2 class="type-h2 mb-6">"Palette"</h2>
        <ul class="grid grid-cols-2 gap-3">
            {PALETTE
                .iter()
                .map(|c| {
                    view! {
                        <li class="flex items-center gap-3">
                            <span
                                class="inline-block w-8 h-8 rounded border border-muted/30"
                                style=format!("background: var(--palette-{})", c.name)
                            ></span>
                            <span class="type-caption">{c.name} " " <span class="text-muted">{c.hex}</span></span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

fn describe(token: Resolved) -> String {
    match token {
        Resolved::Type(s) => format!("{} · {}rem / {}", s.name, s.size_rem, s.line_height),
        Resolved::Space(s) => format!("space-{} · {}rem", s.name, s.rem),
        Resolved::Color(s) => format!("{} · {}", s.name, s.hex),
    }
}

#[component]
fn Aliases() -> impl IntoView {
    view! {
        <h2 class="type-h2 mb-2">"Deprecated names"</h2>
        <p class="type-body text-muted mb-6">
            "Older names still resolve, onto exactly one canonical token each."
        </p>
        <table class="w-full type-caption">
            <tbody>
                {deprecated_aliases()
                    .filter_map(|(alias, _)| Some((alias, lookup(alias)?)))
                    .map(|(alias, found)| {
                        view! {
                            <tr class="border-b border-muted/20">
                                <td class="py-2 text-red line-through">{alias}</td>
                                <td class="py-2">{describe(found.token)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn Profiles() -> impl IntoView {
    view! {
        <h2 class="type-h2 mb-2">"Motion profiles"</h2>
        <p class="type-body text-muted mb-6">
            "Opacity and blur per content type and intensity. Sections on this site fade in "
            "through the first fifth of their scroll, hold, then ease out."
        </p>
        <table class="w-full type-caption">
            <thead>
                <tr class="text-left text-muted">
                    <th class="py-2">"content"</th>
                    {Intensity::ALL
                        .into_iter()
                        .map(|i| view! { <th class="py-2">{i.as_str()}</th> })
                        .collect_view()}
                    <th class="py-2">"timing"</th>
                </tr>
            </thead>
            <tbody>
                {ProfileTable::builtin()
                    .iter()
                    .map(|p| {
                        view! {
                            <tr class="border-b border-muted/20">
                                <td class="py-2 text-cyan">{p.content_type.as_str()}</td>
                                {Intensity::ALL
                                    .into_iter()
                                    .map(|i| {
                                        let level = p.level(i);
                                        view! {
                                            <td class="py-2">
                                                {format!("{:.2} / {}px", level.opacity, level.blur_px)}
                                            </td>
                                        }
                                    })
                                    .collect_view()}
                                <td class="py-2 text-muted">
                                    {format!("{}ms {}", p.duration_ms, p.easing.css())}
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
