use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};
use server_fn::codec::GetUrl;

use super::section::{Reveal, ScrollSection};
#[cfg(feature = "ssr")]
use crate::projects::{get_project, get_projects};
use crate::{
    motion::{ContentType, Intensity},
    projects::{all_tags, Project, ProjectMeta},
};

#[server(input = GetUrl)]
pub async fn get_projects_server(tag: String) -> Result<Vec<ProjectMeta>, ServerFnError> {
    get_projects(tag).await.map_err(|e| {
        tracing::error!("listing projects failed: {e}");
        ServerFnError::new(e)
    })
}

#[server(input = GetUrl)]
pub async fn get_project_server(name: String) -> Result<Project, ServerFnError> {
    get_project(name).await.map_err(ServerFnError::new)
}

#[component]
pub fn ProjectCard(meta: ProjectMeta) -> impl IntoView {
    let href = format!("/projects/{}", meta.name);
    view! {
        <A
            href=href
            attr:class="block h-full p-6 rounded-lg bg-surface/40 border border-muted/20 hover:border-purple/50 transition-colors duration-200"
        >
            <p class="type-caption text-muted mb-2">
                {meta.date.format("%B %Y").to_string()} " · " {meta.role}
            </p>
            <h3 class="type-h3 mb-3">{meta.title}</h3>
            <p class="type-body text-muted mb-4">{meta.summary}</p>
            <ul class="flex flex-wrap gap-2">
                {meta
                    .tags
                    .into_iter()
                    .map(|t| view! { <li class="type-caption text-cyan">"#" {t}</li> })
                    .collect_view()}
            </ul>
        </A>
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let query = use_query_map();
    let tag = move || query.read().get("tag").unwrap_or_default();
    let all = Resource::new(
        || (),
        |_| async move { get_projects_server(String::new()).await.unwrap_or_default() },
    );
    let projects = Resource::new(tag, |tag| async move {
        get_projects_server(tag).await.unwrap_or_default()
    });

    view! {
        <Title text="Projects" />
        <ScrollSection id="projects" content=ContentType::Gallery class="w-full py-16">
            <div class="max-w-6xl mx-auto px-6">
                <Reveal index=0>
                    <h1 class="type-h1 mb-4">"Projects"</h1>
                    <p class="type-body-lg text-muted mb-8">
                        "Things I've built, with notes on what went wrong along the way."
                    </p>
                </Reveal>
                <Suspense fallback=|| ()>
                    <Reveal index=1 class="flex flex-wrap gap-3 mb-10">
                        <A href="/projects" attr:class="type-caption text-muted hover:text-foreground">
                            "all"
                        </A>
                        {move || {
                            all.get()
                                .map(|projects| {
                                    all_tags(&projects)
                                        .into_iter()
                                        .map(|t| {
                                            let href = format!("/projects?tag={t}");
                                            view! {
                                                <A
                                                    href=href
                                                    attr:class="type-caption text-cyan hover:text-foreground"
                                                >
                                                    "#"
                                                    {t}
                                                </A>
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </Reveal>
                </Suspense>
                <Suspense fallback=|| view! { <p class="text-muted">"Loading..."</p> }>
                    <div class="grid gap-8 md:grid-cols-2">
                        {move || {
                            projects
                                .get()
                                .map(|projects| {
                                    if projects.is_empty() {
                                        return view! {
                                            <p class="text-muted">"Nothing tagged like that yet."</p>
                                        }
                                            .into_any();
                                    }
                                    projects
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, meta)| {
                                            view! {
                                                <Reveal index={i + 2}>
                                                    <ProjectCard meta=meta />
                                                </Reveal>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                })
                        }}
                    </div>
                </Suspense>
            </div>
        </ScrollSection>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let name = move || params.read().get("name").unwrap_or_default();
    let project = Resource::new(name, |name| async move { get_project_server(name).await.ok() });

    view! {
        <Suspense fallback=|| view! { <p class="text-muted">"Loading..."</p> }>
            {move || {
                project
                    .get()
                    .map(|project| match project {
                        Some(project) => view! { <ProjectDetail project=project /> }.into_any(),
                        None => {
                            view! {
                                <Title text="Not found" />
                                <p class="py-24 text-center">
                                    "No such project. " <A href="/projects">"Back to the list"</A>
                                </p>
                            }
                                .into_any()
                        }
                    })
            }}
        </Suspense>
    }
}

#[component]
fn ProjectDetail(project: Project) -> impl IntoView {
    let Project { meta, content } = project;
    view! {
        <Title text=meta.title.clone() />
        <article class="w-full">
            <ScrollSection
                id="project-hero"
                content=ContentType::Hero
                intensity=Intensity::Moderate
                image=meta.hero_image.clone()
                class="py-24"
            >
                <div class="max-w-4xl mx-auto px-6">
                    <Reveal index=0>
                        <p class="type-caption text-muted mb-4">
                            {meta.date.format("%B %Y").to_string()} " · " {meta.role.clone()}
                        </p>
                    </Reveal>
                    <Reveal index=1>
                        <h1 class="type-display mb-6">{meta.title.clone()}</h1>
                    </Reveal>
                    <Reveal index=2>
                        <p class="type-body-lg text-muted">{meta.summary.clone()}</p>
                    </Reveal>
                </div>
            </ScrollSection>
            <ScrollSection id="project-body" content=ContentType::TextPrimary class="py-16">
                <Reveal index=0 class="max-w-3xl mx-auto px-6 prose prose-invert">
                    <div inner_html=content></div>
                </Reveal>
            </ScrollSection>
        </article>
    }
}
