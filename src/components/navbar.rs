//! Navigation bar component.
//!
//! Handles the mobile hamburger menu, the scroll shadow, and active-link
//! highlighting. The menu locks page scroll while open and closes on any
//! link or overlay click.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config;
use crate::models::Route;
use crate::utils::dom;

/// Section anchors shown in the menu, in display order.
const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// The section considered active at a given scroll position.
///
/// A section counts once its top edge has scrolled to within
/// [`config::ACTIVE_SECTION_OFFSET_PX`] of the viewport top; the last such
/// section wins.
fn active_section(scroll_y: f64, sections: &[(String, f64)]) -> Option<String> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - config::ACTIVE_SECTION_OFFSET_PX)
        .next_back()
        .map(|(id, _)| id.clone())
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);
    let (active, set_active) = signal(String::new());

    // Track scroll position for the shadow and the active link
    // (runs once on mount; checks the initial position immediately).
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let on_scroll = move || {
            let y = dom::scroll_y();
            set_scrolled.set(y > config::NAV_SCROLL_SHADOW_PX);
            set_active.set(active_section(y, &dom::section_offsets()).unwrap_or_default());
        };
        on_scroll();

        let closure = Closure::wrap(Box::new(on_scroll) as Box<dyn Fn()>);
        if let Some(window) = web_sys::window() {
            let _ =
                window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }

        // The navbar remounts on every route change, so the listener must
        // come off with it; a forgotten closure here would accumulate one
        // leaked listener per navigation.
        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    closure.as_ref().unchecked_ref(),
                );
            }
        });
    }

    let close_menu = move || {
        set_menu_open.set(false);
        dom::set_body_scroll_locked(false);
    };

    let toggle_menu = move |_| {
        let open = !menu_open.get();
        set_menu_open.set(open);
        dom::set_body_scroll_locked(open);
    };

    let navbar_class = move || {
        if scrolled.get() {
            "navbar scrolled"
        } else {
            "navbar"
        }
    };

    view! {
        <nav class=navbar_class>
            <a class="nav-logo" href="#/">{config::APP_NAME}</a>

            <button
                class=move || if menu_open.get() { "hamburger active" } else { "hamburger" }
                on:click=toggle_menu
                aria-label="Toggle navigation menu"
            >
                {move || {
                    if menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }
                }}
            </button>

            <div
                class=move || if menu_open.get() { "nav-overlay active" } else { "nav-overlay" }
                on:click=move |_| close_menu()
            ></div>

            <ul class=move || if menu_open.get() { "nav-menu active" } else { "nav-menu" }>
                {NAV_LINKS
                    .iter()
                    .map(|&(id, label)| {
                        view! {
                            <li>
                                <a
                                    class=move || {
                                        if active.get() == id { "nav-link active" } else { "nav-link" }
                                    }
                                    href=format!("#{}", id)
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        close_menu();
                                        if Route::current() == Route::Home {
                                            dom::scroll_to_section(id);
                                        } else {
                                            // Detail pages have no sections; go home first.
                                            Route::Home.push();
                                        }
                                    }
                                >
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("home".to_string(), 0.0),
            ("skills".to_string(), 600.0),
            ("projects".to_string(), 1400.0),
        ]
    }

    #[test]
    fn topmost_section_is_active_at_the_top() {
        assert_eq!(active_section(0.0, &sections()), Some("home".to_string()));
    }

    #[test]
    fn section_activates_within_the_offset_band() {
        // 100 px before its top edge reaches the viewport top.
        assert_eq!(active_section(500.0, &sections()), Some("skills".to_string()));
        assert_eq!(active_section(499.0, &sections()), Some("home".to_string()));
    }

    #[test]
    fn last_qualifying_section_wins() {
        assert_eq!(
            active_section(5000.0, &sections()),
            Some("projects".to_string())
        );
    }

    #[test]
    fn no_sections_means_no_active_link() {
        assert_eq!(active_section(100.0, &[]), None);
    }
}
