//! Projects grid: each card links to its detail page.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{Project, Remote, Route};
use crate::utils::format::tag_chip_style;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let projects = ctx.projects;

    view! {
        <section id="projects" class="projects">
            <h2 class="section-title">"Projects"</h2>
            <div class="projects-grid">
                {move || match projects.get() {
                    Remote::Loading => {
                        view! { <div class="grid-status">"Loading projects..."</div> }.into_any()
                    }
                    Remote::Failed(_) => {
                        view! {
                            <div class="grid-status grid-error">
                                "An error occurred while loading projects."
                            </div>
                        }
                            .into_any()
                    }
                    Remote::Ready(_) => {
                        view! {
                            <For
                                each=move || projects.get().ready().cloned().unwrap_or_default()
                                key=|project| project.id
                                children=move |project| view! { <ProjectCard project=project /> }
                            />
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let href = Route::Project { id: project.id }.to_hash();

    view! {
        <a class="project-card" href=href data-project-id=project.id.to_string()>
            <div class="project-thumbnail">
                <img src=project.thumbnail.clone() alt=project.title.clone() loading="lazy" />
            </div>
            <div class="project-info">
                <h3 class="project-title">{project.title.clone()}</h3>
                <div class="project-tags">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="project-tag-item" style=tag_chip_style(&tag.color)>
                                    {tag.name.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </a>
    }
}
