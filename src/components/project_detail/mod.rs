//! Project detail page: title, description, tags, image slider, modal.
//!
//! The page resolves its project from the already-loaded projects
//! document. An unknown id, a missing document, or a fetch failure
//! redirects back to the index instead of rendering a broken page.

mod modal;
mod slider;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config;
use crate::models::{Project, Remote, Route};
use crate::utils::dom;
use crate::utils::format::tag_chip_style;

use modal::ImageModal;
use slider::Slider;

/// Outcome of resolving the requested project id against the projects
/// document.
#[derive(Debug, Clone, PartialEq)]
enum DetailResolution {
    /// Document still loading; render a placeholder.
    Pending,
    /// Project found; render it.
    Found(Project),
    /// Unknown id or failed document; leave for the index page.
    Redirect,
}

fn resolve_project(state: &Remote<Vec<Project>>, id: u32) -> DetailResolution {
    match state {
        Remote::Loading => DetailResolution::Pending,
        Remote::Failed(_) => DetailResolution::Redirect,
        Remote::Ready(projects) => match projects.iter().find(|p| p.id == id) {
            Some(project) => DetailResolution::Found(project.clone()),
            None => DetailResolution::Redirect,
        },
    }
}

#[component]
pub fn ProjectDetail(id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let resolution = Memo::new(move |_| resolve_project(&ctx.projects.get(), id));

    // Redirect without a history entry so the back button skips the
    // broken detail URL.
    Effect::new(move |_| {
        if resolution.get() == DetailResolution::Redirect {
            leptos::logging::warn!("project {} not found, redirecting to index", id);
            Route::Home.replace();
        }
    });

    // Full-size image modal; opening locks page scroll.
    let modal_src = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if let DetailResolution::Found(project) = resolution.get() {
            dom::set_document_title(&format!("{} - {}", project.title, config::APP_NAME));
        }
    });

    view! {
        <section class="project-detail">
            {move || match resolution.get() {
                DetailResolution::Pending => {
                    view! { <div class="grid-status">"Loading project..."</div> }.into_any()
                }
                DetailResolution::Redirect => ().into_any(),
                DetailResolution::Found(project) => {
                    let link = project.link.clone();
                    let link_href = link.clone().unwrap_or_default();
                    view! {
                        <a class="detail-back" href="#/">
                            <Icon icon=ic::BACK />
                            " Back to projects"
                        </a>

                        <h1 class="detail-title">{project.title.clone()}</h1>

                        <div class="detail-tags">
                            {project
                                .tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <span
                                            class="detail-tag-item"
                                            style=tag_chip_style(&tag.color)
                                        >
                                            {tag.name.clone()}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <Slider images=project.detail_images.clone() modal_src=modal_src />

                        // Description is an HTML fragment in the data file.
                        <div class="detail-description" inner_html=project.description.clone()></div>

                        <Show when=move || link.is_some()>
                            <a
                                class="detail-link"
                                href=link_href.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "Visit project "
                                <Icon icon=ic::EXTERNAL_LINK />
                            </a>
                        </Show>
                    }
                        .into_any()
                }
            }}

            <ImageModal src=modal_src />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, title: &str) -> Project {
        Project {
            id,
            title: title.to_string(),
            description: String::new(),
            thumbnail: String::new(),
            detail_images: Vec::new(),
            tags: Vec::new(),
            link: None,
        }
    }

    #[test]
    fn known_id_resolves_to_the_project() {
        let state = Remote::Ready(vec![project(1, "One"), project(2, "Two")]);
        assert_eq!(
            resolve_project(&state, 2),
            DetailResolution::Found(project(2, "Two"))
        );
    }

    #[test]
    fn unknown_id_redirects_to_the_index() {
        let state = Remote::Ready(vec![project(1, "One")]);
        assert_eq!(resolve_project(&state, 99), DetailResolution::Redirect);
    }

    #[test]
    fn failed_document_redirects_to_the_index() {
        let state = Remote::Failed("HTTP error: 500".to_string());
        assert_eq!(resolve_project(&state, 1), DetailResolution::Redirect);
    }

    #[test]
    fn loading_document_stays_pending() {
        assert_eq!(
            resolve_project(&Remote::Loading, 1),
            DetailResolution::Pending
        );
    }
}
