//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! startup sequence: components are registered with the [`ComponentLoader`]
//! and loaded in dependency order once the tree is mounted. A partial
//! failure leaves the rest of the page working; only a failure of the
//! initialization sequence itself raises the floating error panel.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config;
use crate::core::ComponentLoader;
#[cfg(target_arch = "wasm32")]
use crate::core::LoadReport;
use crate::core::error::{LoadError, RegistrationError};
use crate::models::{Project, Remote, Skill};
use crate::utils::fetch_json_cached;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; any child component can
/// access it with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Skills document, published by the `skills` component load.
    pub skills: RwSignal<Remote<Vec<Skill>>>,
    /// Projects document, published by the `projects` component load.
    pub projects: RwSignal<Remote<Vec<Project>>>,
    /// Failure of the initialization sequence itself (not of an
    /// individual component).
    pub init_error: RwSignal<Option<String>>,
}

impl AppContext {
    /// Creates a new application context with both documents loading.
    pub fn new() -> Self {
        Self {
            skills: RwSignal::new(Remote::Loading),
            projects: RwSignal::new(Remote::Loading),
            init_error: RwSignal::new(None),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Component registration
// ============================================================================

/// Register every page component with the loader.
///
/// Dependency lists are empty: the widgets are independent in practice,
/// and the ordering mechanism exists for future additions (it is fully
/// exercised by the loader's own tests).
fn register_components(
    loader: &mut ComponentLoader,
    ctx: AppContext,
) -> Result<(), RegistrationError> {
    loader.register("navbar", &[], || verify_mount(".navbar"))?;
    loader.register("skills", &[], move || load_skills(ctx))?;
    loader.register("projects", &[], move || load_projects(ctx))?;
    loader.register("project-detail", &[], || verify_mount(".project-detail"))?;
    Ok(())
}

/// Check that a component's mount point exists.
///
/// Absence is not a failure: the element legitimately isn't there on
/// pages that don't render that component.
async fn verify_mount(selector: &'static str) -> Result<(), LoadError> {
    let found = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .is_some();
    if !found {
        leptos::logging::warn!("mount '{}' not found on this page", selector);
    }
    Ok(())
}

/// Fetch the skills document and publish it into the context.
async fn load_skills(ctx: AppContext) -> Result<(), LoadError> {
    use crate::models::SkillsDocument;

    match fetch_json_cached::<SkillsDocument>(config::SKILLS_DATA_URL, config::cache::SKILLS_KEY)
        .await
    {
        Ok(doc) => {
            ctx.skills.set(Remote::Ready(doc.skills));
            Ok(())
        }
        Err(err) => {
            ctx.skills.set(Remote::Failed(err.to_string()));
            Err(LoadError::Fetch(err))
        }
    }
}

/// Fetch the projects document and publish it into the context.
async fn load_projects(ctx: AppContext) -> Result<(), LoadError> {
    use crate::models::ProjectsDocument;

    match fetch_json_cached::<ProjectsDocument>(
        config::PROJECTS_DATA_URL,
        config::cache::PROJECTS_KEY,
    )
    .await
    {
        Ok(doc) => {
            ctx.projects.set(Remote::Ready(doc.projects));
            Ok(())
        }
        Err(err) => {
            ctx.projects.set(Remote::Failed(err.to_string()));
            Err(LoadError::Fetch(err))
        }
    }
}

/// Run the full initialization sequence.
///
/// Individual component failures are tolerated (the loader reports them
/// and the affected widget shows its own inline error); only a rejected
/// registration surfaces the floating panel.
#[cfg(target_arch = "wasm32")]
async fn init_components(ctx: AppContext) {
    let mut loader = ComponentLoader::new();
    if let Err(err) = register_components(&mut loader, ctx) {
        leptos::logging::error!("initialization failed: {}", err);
        ctx.init_error.set(Some(err.to_string()));
        return;
    }

    let report = loader.load_all().await;
    dispatch_ready_event(&report);
}

/// Broadcast the `app:ready` event with timestamp and elapsed duration,
/// for optional external listeners.
#[cfg(target_arch = "wasm32")]
fn dispatch_ready_event(report: &LoadReport) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&detail, &"timestamp".into(), &js_sys::Date::now().into());
    let _ = js_sys::Reflect::set(&detail, &"duration".into(), &report.duration_ms.into());

    let init = web_sys::CustomEventInit::new();
    init.set_detail(&detail);

    if let Ok(event) = web_sys::CustomEvent::new_with_event_init_dict("app:ready", &init) {
        let _ = window.dispatch_event(&event);
    }
}

// ============================================================================
// Root component
// ============================================================================

/// Root application component.
///
/// - Creates and provides the global AppContext
/// - Kicks off the component loader once on startup
/// - Wraps the app in an ErrorBoundary for graceful rendering errors
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        init_components(ctx).await;
    });

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="app-error">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul class="app-error-list">
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <button on:click=|_| reload_page()>"Reload Page"</button>
                </div>
            }
        }>
            <AppRouter />
            <InitErrorPanel />
        </ErrorBoundary>
    }
}

/// Floating, dismissible panel shown when initialization itself failed.
///
/// Auto-dismisses after a fixed delay; the manual action reloads the page.
#[component]
fn InitErrorPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Arm the auto-dismiss timer whenever an error appears.
    Effect::new(move |_| {
        if ctx.init_error.get().is_some() {
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(config::INIT_ERROR_DISMISS_MS).await;
                ctx.init_error.set(None);
            });
        }
    });

    view! {
        <Show when=move || ctx.init_error.get().is_some()>
            <div class="init-error" role="alert">
                <h3>"Application Error"</h3>
                <p>
                    "The application failed to initialize properly: "
                    {move || ctx.init_error.get().unwrap_or_default()}
                </p>
                <div class="init-error-actions">
                    <button on:click=|_| reload_page()>"Refresh Page"</button>
                    <button on:click=move |_| ctx.init_error.set(None)>"Dismiss"</button>
                </div>
            </div>
        </Show>
    }
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_wires_every_page_component() {
        let mut loader = ComponentLoader::new();
        register_components(&mut loader, AppContext::new()).unwrap();
        assert_eq!(loader.len(), 4);
    }
}
