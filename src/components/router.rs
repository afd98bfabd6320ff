//! Application router component.
//!
//! Handles URL-based routing with hash history. The URL hash is the source
//! of truth: the route signal is re-derived from it on every hashchange
//! event, so browser back/forward buttons work automatically.

use leptos::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::navbar::Navbar;
use crate::components::project_detail::ProjectDetail;
use crate::components::projects::ProjectsSection;
use crate::components::skills::SkillsSection;
use crate::models::Route;

/// Main application router.
///
/// - `#/` → index page (navbar, hero, skills, projects, contact)
/// - `#/project/{id}` → project detail page
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Each route is its own page; start it at the top.
    Effect::new(move |_| {
        route.track();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        {move || match route.get() {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::Project { id } => view! { <ProjectDetailPage id=id /> }.into_any(),
        }}
    }
}

/// Index page: every section-based component on one scrollable page.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Navbar />
        <main>
            <section id="home" class="hero">
                <h1 class="hero-title">"Hi, I build things for the web."</h1>
                <p class="hero-subtitle">
                    "Designer and developer crafting small, careful interfaces."
                </p>
            </section>
            <SkillsSection />
            <ProjectsSection />
            <ContactSection />
        </main>
        <footer class="site-footer">
            <p>"© 2026 · built with Rust and Leptos"</p>
        </footer>
    }
}

/// Project detail page for one project id.
#[component]
fn ProjectDetailPage(id: u32) -> impl IntoView {
    view! {
        <Navbar />
        <main>
            <ProjectDetail id=id />
        </main>
    }
}
