//! Skills grid with dynamically built category filters.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config;
use crate::models::{Remote, Skill, SkillFilter, category_counts};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let skills = ctx.skills;
    let filter = RwSignal::new(SkillFilter::All);

    // One button per category (plus "All"), each with its card count.
    let filter_buttons = move || {
        let Remote::Ready(list) = skills.get() else {
            return Vec::new();
        };

        let mut filters = vec![(SkillFilter::All, list.len())];
        filters.extend(
            category_counts(&list)
                .into_iter()
                .map(|(category, count)| (SkillFilter::Category(category), count)),
        );

        filters
            .into_iter()
            .map(|(f, count)| {
                let label = f.label().to_string();
                let class = {
                    let f = f.clone();
                    move || {
                        if filter.get() == f {
                            "filter-btn active"
                        } else {
                            "filter-btn"
                        }
                    }
                };
                view! {
                    <button class=class on:click=move |_| filter.set(f.clone())>
                        {label}
                        " "
                        <span class="filter-count">{count}</span>
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section id="skills" class="skills">
            <h2 class="section-title">"Skills"</h2>
            <div class="skills-filters">{filter_buttons}</div>
            <div class="skills-grid">
                {move || match skills.get() {
                    Remote::Loading => {
                        view! { <div class="grid-status">"Loading skills..."</div> }.into_any()
                    }
                    Remote::Failed(_) => {
                        view! {
                            <div class="grid-status grid-error">
                                "An error occurred while loading skills."
                            </div>
                        }
                            .into_any()
                    }
                    Remote::Ready(_) => {
                        view! {
                            <For
                                each=move || skills.get().ready().cloned().unwrap_or_default()
                                key=|skill| skill.id
                                children=move |skill| {
                                    view! { <SkillCard skill=skill filter=filter /> }
                                }
                            />
                        }
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

/// One skill card. Filtered-out cards are hidden, not removed, so the
/// grid doesn't reflow from scratch on every filter change.
#[component]
fn SkillCard(skill: Skill, filter: RwSignal<SkillFilter>) -> impl IntoView {
    let (logo_src, set_logo_src) = signal(skill.logo.clone());

    let class = {
        let skill = skill.clone();
        move || {
            if filter.get().matches(&skill) {
                "skill-card"
            } else {
                "skill-card hidden"
            }
        }
    };

    view! {
        <div class=class data-skill-id=skill.id.to_string() data-category=skill.category.clone()>
            <div class="skill-logo">
                <img
                    src=move || logo_src.get()
                    alt=format!("{} logo", skill.name)
                    loading="lazy"
                    on:error=move |_| set_logo_src.set(config::PLACEHOLDER_LOGO.to_string())
                />
            </div>
            <div class="skill-info">
                <div class="skill-name">{skill.name.clone()}</div>
                <div class="skill-category">{skill.category.clone()}</div>
            </div>
        </div>
    }
}
