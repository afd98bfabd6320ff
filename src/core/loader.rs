//! Centralized loader for data-driven components.
//!
//! Components register a name, an async load function, and the names of the
//! components they depend on. [`ComponentLoader::load_all`] then runs every
//! load function exactly once, strictly sequentially, in dependency order,
//! and reports aggregate results. One component failing never aborts the
//! run; only its dependents are skipped (they fail with a synthesized
//! missing-dependency error).
//!
//! Invalid registrations are rejected up front: duplicate names and
//! dependency edges that close a cycle return a [`RegistrationError`]
//! instead of producing duplicate load attempts or a mis-ordered sort.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

use leptos::logging::{log, warn};

use super::error::{LoadError, RegistrationError};

/// Boxed future returned by component load functions.
///
/// Not `Send`: everything runs on the browser main thread.
pub type LoadFuture = Pin<Box<dyn Future<Output = Result<(), LoadError>>>>;

type LoadFn = Box<dyn Fn() -> LoadFuture>;

/// One registered component.
struct Registration {
    name: String,
    load: LoadFn,
    dependencies: Vec<String>,
    loaded: bool,
    error: Option<String>,
}

/// A recorded component failure.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    /// Name of the failed component.
    pub component: String,
    /// Human-readable failure message.
    pub error: String,
    /// Wall-clock timestamp of the failure (ms since the Unix epoch).
    pub timestamp_ms: f64,
}

/// Aggregate result of a [`ComponentLoader::load_all`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// Number of registered components.
    pub total: usize,
    /// Number of components that loaded successfully.
    pub loaded: usize,
    /// Number of components that failed (including cascade failures).
    pub failed: usize,
    /// Every recorded failure, in load order.
    pub errors: Vec<LoadFailure>,
    /// Total wall-clock duration of the run in milliseconds.
    pub duration_ms: f64,
}

/// Dependency-ordered async initializer for independent UI components.
#[derive(Default)]
pub struct ComponentLoader {
    components: Vec<Registration>,
    loaded: HashSet<String>,
    failed: HashSet<String>,
    errors: Vec<LoadFailure>,
}

impl ComponentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component to be loaded.
    ///
    /// `dependencies` are names of components that must have loaded
    /// successfully before this one runs. They do not have to be registered
    /// yet (or at all) at this point; an unknown name simply means the
    /// component will fail with a missing-dependency error at load time.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::DuplicateName`] if `name` is already
    /// taken, and [`RegistrationError::CyclicDependency`] if one of the new
    /// edges closes a cycle through already-registered components.
    pub fn register<F, Fut>(
        &mut self,
        name: impl Into<String>,
        dependencies: &[&str],
        load: F,
    ) -> Result<(), RegistrationError>
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<(), LoadError>> + 'static,
    {
        let name = name.into();

        if self.index_of(&name).is_some() {
            return Err(RegistrationError::DuplicateName(name));
        }
        if dependencies.iter().any(|dep| self.reaches(dep, &name)) {
            return Err(RegistrationError::CyclicDependency(name));
        }

        self.components.push(Registration {
            name,
            load: Box::new(move || Box::pin(load()) as LoadFuture),
            dependencies: dependencies.iter().map(|s| s.to_string()).collect(),
            loaded: false,
            error: None,
        });
        Ok(())
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Load all registered components in dependency order.
    ///
    /// Strictly sequential: component N+1 is not attempted until component
    /// N's future settles, so the reported duration is the sum of all
    /// component durations. Always completes; every component ends up in
    /// exactly one of the loaded or failed sets.
    pub async fn load_all(&mut self) -> LoadReport {
        let start = now_ms();

        for idx in self.sort_by_dependencies() {
            self.load_component(idx).await;
        }

        let report = LoadReport {
            total: self.components.len(),
            loaded: self.loaded.len(),
            failed: self.failed.len(),
            errors: self.errors.clone(),
            duration_ms: now_ms() - start,
        };
        self.log_results(&report);
        report
    }

    /// Attempt to load a single component by index.
    async fn load_component(&mut self, idx: usize) {
        let missing: Vec<String> = self.components[idx]
            .dependencies
            .iter()
            .filter(|dep| !self.loaded.contains(*dep))
            .cloned()
            .collect();

        if !missing.is_empty() {
            let name = self.components[idx].name.clone();
            self.handle_error(idx, format!("missing dependencies: {}", missing.join(", ")));
            warn!("component '{}' skipped: unmet dependencies", name);
            return;
        }

        // The returned future owns its captures, so the borrow of the
        // registration ends before the await point.
        let future = (self.components[idx].load)();
        match future.await {
            Ok(()) => {
                let name = self.components[idx].name.clone();
                self.components[idx].loaded = true;
                self.loaded.insert(name.clone());
                log!("component '{}' loaded", name);
            }
            Err(err) => {
                self.handle_error(idx, err.to_string());
            }
        }
    }

    /// Record a component failure and surface it in the UI if possible.
    fn handle_error(&mut self, idx: usize, message: String) {
        let name = self.components[idx].name.clone();
        warn!("component '{}' failed: {}", name, message);

        self.components[idx].error = Some(message.clone());
        self.failed.insert(name.clone());
        self.errors.push(LoadFailure {
            component: name.clone(),
            error: message.clone(),
            timestamp_ms: now_ms(),
        });

        #[cfg(target_arch = "wasm32")]
        show_error_panel(&name, &message);
    }

    /// Post-order DFS linearization of the dependency graph.
    ///
    /// Registration order is the tie-break between independent components.
    /// Dependency names with no matching registration are skipped here;
    /// they surface as missing-dependency failures at load time instead.
    fn sort_by_dependencies(&self) -> Vec<usize> {
        let mut sorted = Vec::with_capacity(self.components.len());
        let mut visited = HashSet::new();
        for idx in 0..self.components.len() {
            self.visit(idx, &mut visited, &mut sorted);
        }
        sorted
    }

    fn visit(&self, idx: usize, visited: &mut HashSet<usize>, sorted: &mut Vec<usize>) {
        if !visited.insert(idx) {
            return;
        }
        for dep in &self.components[idx].dependencies {
            if let Some(dep_idx) = self.index_of(dep) {
                self.visit(dep_idx, visited, sorted);
            }
        }
        sorted.push(idx);
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.components.iter().position(|c| c.name == name)
    }

    /// Whether `target` is reachable from `from` along registered
    /// dependency edges (including the trivial `from == target` case).
    fn reaches(&self, from: &str, target: &str) -> bool {
        if from == target {
            return true;
        }
        let Some(idx) = self.index_of(from) else {
            return false;
        };
        self.components[idx]
            .dependencies
            .iter()
            .any(|dep| self.reaches(dep, target))
    }

    fn log_results(&self, report: &LoadReport) {
        log!(
            "component loader: {}/{} loaded, {} failed in {:.2}ms",
            report.loaded,
            report.total,
            report.failed,
            report.duration_ms
        );
        for failure in &report.errors {
            warn!("  {}: {}", failure.component, failure.error);
        }
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch.
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

/// Replace the content of the component's tagged container with a
/// user-visible error panel, if such a container exists.
#[cfg(target_arch = "wasm32")]
fn show_error_panel(name: &str, message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let selector = format!("[data-component=\"{}\"]", name);
    if let Some(container) = document.query_selector(&selector).ok().flatten() {
        container.set_inner_html(&format!(
            "<div class=\"component-error\">\
                <p class=\"component-error-title\">{} could not be loaded</p>\
                <p class=\"component-error-detail\">{}</p>\
            </div>",
            name, message
        ));
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    fn ok_recording(order: &Rc<RefCell<Vec<String>>>, name: &str) -> impl Fn() -> LoadFuture + use<> {
        let order = Rc::clone(order);
        let name = name.to_string();
        move || {
            let order = Rc::clone(&order);
            let name = name.clone();
            Box::pin(async move {
                order.borrow_mut().push(name);
                Ok(())
            })
        }
    }

    #[tokio::test]
    async fn loads_dependencies_before_dependents() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut loader = ComponentLoader::new();

        // Register the dependent first to force the sort to reorder.
        loader
            .register("gallery", &["data"], ok_recording(&order, "gallery"))
            .unwrap();
        loader
            .register("navbar", &[], ok_recording(&order, "navbar"))
            .unwrap();
        loader
            .register("data", &[], ok_recording(&order, "data"))
            .unwrap();

        let report = loader.load_all().await;
        assert_eq!(report.loaded, 3);
        assert_eq!(report.failed, 0);

        let order = order.borrow();
        let pos = |name: &str| order.iter().position(|n| n == name).unwrap();
        assert!(pos("data") < pos("gallery"));
    }

    #[tokio::test]
    async fn dependent_of_failed_component_is_never_invoked() {
        let invoked = Rc::new(Cell::new(false));
        let mut loader = ComponentLoader::new();

        loader
            .register("data", &[], || {
                Box::pin(async { Err(LoadError::Message("boom".into())) }) as LoadFuture
            })
            .unwrap();
        let flag = Rc::clone(&invoked);
        loader
            .register("gallery", &["data"], move || {
                let flag = Rc::clone(&flag);
                Box::pin(async move {
                    flag.set(true);
                    Ok(())
                }) as LoadFuture
            })
            .unwrap();

        let report = loader.load_all().await;
        assert!(!invoked.get(), "dependent load function must not run");
        assert_eq!(report.loaded, 0);
        assert_eq!(report.failed, 2);

        let gallery = report
            .errors
            .iter()
            .find(|e| e.component == "gallery")
            .unwrap();
        assert_eq!(gallery.error, "missing dependencies: data");
    }

    #[tokio::test]
    async fn unregistered_dependency_fails_the_dependent() {
        let invoked = Rc::new(Cell::new(false));
        let mut loader = ComponentLoader::new();

        let flag = Rc::clone(&invoked);
        loader
            .register("gallery", &["ghost"], move || {
                let flag = Rc::clone(&flag);
                Box::pin(async move {
                    flag.set(true);
                    Ok(())
                }) as LoadFuture
            })
            .unwrap();

        let report = loader.load_all().await;
        assert!(!invoked.get());
        assert_eq!(report.errors[0].error, "missing dependencies: ghost");
    }

    #[tokio::test]
    async fn load_all_accounts_for_every_component() {
        let mut loader = ComponentLoader::new();
        loader
            .register("a", &[], || Box::pin(async { Ok(()) }) as LoadFuture)
            .unwrap();
        loader
            .register("b", &[], || {
                Box::pin(async { Err(LoadError::Message("nope".into())) }) as LoadFuture
            })
            .unwrap();
        loader
            .register("c", &["b"], || Box::pin(async { Ok(()) }) as LoadFuture)
            .unwrap();

        let report = loader.load_all().await;
        assert_eq!(report.total, 3);
        assert_eq!(report.loaded + report.failed, report.total);
    }

    #[tokio::test]
    async fn registration_order_is_preserved_for_independent_components() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut loader = ComponentLoader::new();
        for name in ["navbar", "skills", "projects"] {
            loader.register(name, &[], ok_recording(&order, name)).unwrap();
        }

        loader.load_all().await;
        assert_eq!(*order.borrow(), vec!["navbar", "skills", "projects"]);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut loader = ComponentLoader::new();
        loader
            .register("navbar", &[], || Box::pin(async { Ok(()) }) as LoadFuture)
            .unwrap();
        let err = loader
            .register("navbar", &[], || Box::pin(async { Ok(()) }) as LoadFuture)
            .unwrap_err();
        assert_eq!(err, RegistrationError::DuplicateName("navbar".into()));
    }

    #[test]
    fn cycle_is_rejected_at_registration() {
        let mut loader = ComponentLoader::new();
        // Dangling forward reference is fine on its own.
        loader
            .register("a", &["b"], || Box::pin(async { Ok(()) }) as LoadFuture)
            .unwrap();
        let err = loader
            .register("b", &["a"], || Box::pin(async { Ok(()) }) as LoadFuture)
            .unwrap_err();
        assert_eq!(err, RegistrationError::CyclicDependency("b".into()));
    }

    #[test]
    fn self_dependency_is_rejected() {
        let mut loader = ComponentLoader::new();
        let err = loader
            .register("a", &["a"], || Box::pin(async { Ok(()) }) as LoadFuture)
            .unwrap_err();
        assert_eq!(err, RegistrationError::CyclicDependency("a".into()));
    }
}
