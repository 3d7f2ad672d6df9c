use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::contact::ContactForm;
use super::projects::{get_projects_server, ProjectCard};
use super::section::{Reveal, ScrollSection};
use crate::motion::{ContentType, Intensity};
use crate::projects::featured;

const HERO_IMAGE: &str = "/img/hero.svg";
const WORK_IMAGE: &str = "/img/work-texture.svg";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="w-full page-content">
            <Hero />
            <About />
            <Featured />
            <Principles />
            <Contact />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <ScrollSection
            id="hero"
            content=ContentType::Hero
            intensity=Intensity::Enhanced
            image=HERO_IMAGE
            class="min-h-[90vh] flex items-center"
        >
            <div class="max-w-5xl mx-auto px-6 py-24">
                <Reveal index=0>
                    <p class="text-cyan text-sm tracking-widest uppercase mb-6">"Engineer & designer"</p>
                </Reveal>
                <Reveal index=1>
                    <h1 class="type-display mb-8">"I build quiet software for loud problems."</h1>
                </Reveal>
                <Reveal index=2>
                    <p class="type-body-lg text-muted max-w-2xl mb-10">
                        "Storage engines, on-call tooling, and the occasional printed map. "
                        "I care about the seam between how a system works and how it feels to use."
                    </p>
                </Reveal>
                <Reveal index=3 class="flex flex-wrap gap-4">
                    <A
                        href="/projects"
                        attr:class="bg-purple/20 hover:bg-purple/30 text-purple px-6 py-3 rounded-md font-medium transition-all duration-200 border border-purple/30"
                    >
                        "See the work"
                    </A>
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-md font-medium text-muted hover:text-foreground transition-colors duration-200"
                    >
                        "Get in touch"
                    </a>
                </Reveal>
            </div>
        </ScrollSection>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <ScrollSection id="about" content=ContentType::TextPrimary class="py-24">
            <div class="max-w-5xl mx-auto px-6 grid gap-12 lg:grid-cols-2">
                <Reveal index=0>
                    <h2 class="type-h2 mb-6">"About"</h2>
                    <p class="type-body mb-4 leading-relaxed">
                        "I've spent ten years moving between backend systems and interface work. "
                        "Most of my favourite projects sit where both matter: a database whose "
                        "recovery story fits on one page, a dashboard an exhausted on-call engineer "
                        "can read at 3am."
                    </p>
                </Reveal>
                <Reveal index=1>
                    <div class="bg-surface/40 p-6 rounded-lg border-l-4 border-cyan">
                        <p class="type-caption text-cyan mb-3">"Currently"</p>
                        <ul class="type-body space-y-2">
                            <li>"Writing a compaction scheduler in Rust"</li>
                            <li>"Drawing trail maps for the local hiking club"</li>
                            <li>"Open to staff-level roles and short consulting work"</li>
                        </ul>
                    </div>
                </Reveal>
            </div>
        </ScrollSection>
    }
}

#[component]
fn Featured() -> impl IntoView {
    let projects = Resource::new(
        || (),
        |_| async move { get_projects_server(String::new()).await.unwrap_or_default() },
    );
    view! {
        <ScrollSection
            id="work"
            content=ContentType::Gallery
            intensity=Intensity::Subtle
            image=WORK_IMAGE
            class="py-24"
        >
            <div class="max-w-6xl mx-auto px-6">
                <Reveal index=0>
                    <h2 class="type-h2 mb-10">"Selected work"</h2>
                </Reveal>
                <Suspense fallback=|| view! { <p class="text-muted">"Loading projects..."</p> }>
                    <div class="grid gap-8 md:grid-cols-2">
                        {move || {
                            projects
                                .get()
                                .map(|projects| {
                                    featured(&projects)
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, meta)| {
                                            view! {
                                                <Reveal index={i + 1}>
                                                    <ProjectCard meta=meta />
                                                </Reveal>
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </div>
                </Suspense>
            </div>
        </ScrollSection>
    }
}

#[component]
fn Principles() -> impl IntoView {
    let items = [
        ("Measure first", "Profiles and traces before opinions."),
        ("Small surfaces", "Fewer knobs, each one documented."),
        ("Readable failure", "Errors that say what to do next."),
        ("Type is interface", "Hierarchy does half the UX work."),
    ];
    view! {
        <ScrollSection id="principles" content=ContentType::TextSecondary class="py-24">
            <div class="max-w-5xl mx-auto px-6">
                <Reveal index=0>
                    <h2 class="type-h2 mb-10">"How I work"</h2>
                </Reveal>
                <div class="grid gap-6 sm:grid-cols-2">
                    {items
                        .into_iter()
                        .enumerate()
                        .map(|(i, (title, body))| {
                            view! {
                                <Reveal index={i + 1} class="p-6 rounded-lg bg-surface/30">
                                    <h3 class="type-h3 mb-2">{title}</h3>
                                    <p class="type-body text-muted">{body}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </ScrollSection>
    }
}

#[component]
fn Contact() -> impl IntoView {
    view! {
        <ScrollSection
            id="contact"
            content=ContentType::Interactive
            intensity=Intensity::Moderate
            class="py-24"
        >
            <div class="max-w-2xl mx-auto px-6">
                <Reveal index=0>
                    <h2 class="type-h2 mb-4 text-center">"Let's talk"</h2>
                    <p class="type-body text-muted mb-10 text-center">
                        "A project, a role, or a question about one of the write-ups. I read everything."
                    </p>
                </Reveal>
                <Reveal index=1>
                    <ContactForm />
                </Reveal>
            </div>
        </ScrollSection>
    }
}
