use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Option<Project>>> =
    LazyLock::new(DashMap::new);
pub static GLOBAL_LIST_CACHE: LazyLock<DashMap<String, Vec<ProjectMeta>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "projects"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Showcase;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    summary: String,
    role: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    hero_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub role: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub hero_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMeta,
    pub content: String,
}

#[derive(Error, Debug, Clone)]
pub enum ProjectError {
    #[error("Project not found")]
    NotFound,
    #[error("Couldn't parse projects")]
    ParseError,
}

/// Embedded file name -> route name (`"tidepool.md"` -> `"tidepool"`).
pub fn slug(file: &str) -> &str {
    file.strip_suffix(".md").unwrap_or(file)
}

/// Newest first; an empty tag means no filtering. Tags compare case-insensitively.
pub fn filter_by_tag(mut projects: Vec<ProjectMeta>, tag: &str) -> Vec<ProjectMeta> {
    if !tag.is_empty() {
        projects.retain(|p| p.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)));
    }
    projects.sort_by(|a, b| b.date.cmp(&a.date));
    projects
}

pub fn featured(projects: &[ProjectMeta]) -> Vec<ProjectMeta> {
    projects.iter().filter(|p| p.featured).cloned().collect()
}

/// Every tag in use, sorted and without duplicates.
pub fn all_tags(projects: &[ProjectMeta]) -> Vec<String> {
    let mut tags = projects
        .iter()
        .flat_map(|p| p.tags.iter().map(|t| t.to_lowercase()))
        .collect::<Vec<_>>();
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(feature = "ssr")]
fn parse_meta(name: &str, content: &str) -> Option<ProjectMeta> {
    let matter = Matter::<YAML>::new();
    let fm = matter.parse_with_struct::<FrontMatter>(content)?;
    Some(ProjectMeta {
        name: slug(name).to_string(),
        title: fm.data.title,
        summary: fm.data.summary,
        role: fm.data.role,
        date: fm.data.date,
        tags: fm.data.tags,
        featured: fm.data.featured,
        hero_image: fm.data.hero_image,
    })
}

#[cfg(feature = "ssr")]
fn render(content: &str) -> String {
    let matter = Matter::<YAML>::new();
    let body = matter.parse(content).content;
    let parser = Parser::new_ext(&body, Options::all());
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(feature = "ssr")]
fn read(file: &str) -> Option<String> {
    let content = Showcase::get(file)?;
    String::from_utf8(content.data.into()).ok()
}

#[cfg(feature = "ssr")]
pub async fn get_projects(tag: String) -> Result<Vec<ProjectMeta>, ProjectError> {
    // only the full list is cached; tags come straight from the query string
    let cache = &*GLOBAL_LIST_CACHE;
    if let Some(r) = cache.get("") {
        return Ok(filter_by_tag(r.clone(), &tag));
    }
    let projects = Showcase::iter()
        .map(|file| {
            let content = read(&file).ok_or(ProjectError::ParseError)?;
            parse_meta(&file, &content).ok_or(ProjectError::ParseError)
        })
        .collect::<Result<Vec<_>, _>>()?;
    let projects = filter_by_tag(projects, "");
    cache.insert(String::new(), projects.clone());
    Ok(filter_by_tag(projects, &tag))
}

#[cfg(feature = "ssr")]
pub async fn get_project(name: String) -> Result<Project, ProjectError> {
    let file = format!("{name}.md");
    // unknown names never reach the cache
    let content = read(&file).ok_or(ProjectError::NotFound)?;
    let cache = &*GLOBAL_PROJECT_CACHE;
    cache
        .entry(name)
        .or_insert_with(move || {
            let meta = parse_meta(&file, &content)?;
            Some(Project {
                meta,
                content: render(&content),
            })
        })
        .clone()
        .ok_or(ProjectError::ParseError)
}
