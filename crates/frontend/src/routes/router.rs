//! History-backed navigation over the route table.
//!
//! In-app navigation pushes a history entry and updates a single path
//! signal that [`RouterView`] renders from; `popstate` keeps the signal
//! in sync with the back and forward buttons. The 401 handler instead
//! uses [`force_navigate`], a full document load that starts the next
//! page from a clean slate. On non-wasm targets the browser pieces are
//! replaced by thread-local records so navigation is unit-testable.

use leptos::prelude::*;

use super::routes::{normalize_path, resolve};
use crate::layout::top_header::TopHeader;

/// Handle to the current navigation state.
///
/// `Copy` like the other context stores, so event handlers can capture
/// it by value.
#[derive(Clone, Copy)]
pub struct RouterHandle {
    path: RwSignal<String>,
}

impl RouterHandle {
    /// Start from the path the document was loaded at.
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(current_path()),
        }
    }

    /// Current normalized path. Reactive.
    pub fn current(&self) -> String {
        self.path.get()
    }

    /// Navigate within the app: push a history entry and re-render,
    /// without reloading the document.
    pub fn navigate(&self, to: &str) {
        push_history(to);
        self.path.set(normalize_path(to));
    }

    fn sync_from_location(&self) {
        self.path.set(current_path());
    }
}

/// Put the router into context for the whole app
pub fn provide_router(router: RouterHandle) {
    provide_context(router);
}

/// Hook to access the router
pub fn use_router() -> RouterHandle {
    use_context::<RouterHandle>().expect("RouterHandle not found in component tree")
}

/// Renders whatever entry the current path resolves to, plus the top
/// bar unless the entry opted out of it.
#[component]
pub fn RouterView() -> impl IntoView {
    let router = use_router();
    listen_for_popstate(router);

    view! {
        <Show when=move || !resolve(&router.current()).hide_top_bar>
            <TopHeader />
        </Show>
        {move || (resolve(&router.current()).view)()}
    }
}

#[cfg(target_arch = "wasm32")]
fn current_path() -> String {
    let path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default();
    normalize_path(&path)
}

#[cfg(target_arch = "wasm32")]
fn push_history(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn listen_for_popstate(router: RouterHandle) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        router.sync_from_location();
    });
    let _ = window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    // The listener must outlive this scope and is never removed.
    closure.forget();
}

/// Leave the app with a full document navigation.
///
/// Used when the session expires: the next page load re-runs startup
/// and restores nothing from the dropped session.
#[cfg(target_arch = "wasm32")]
pub fn force_navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static CURRENT_PATH: std::cell::RefCell<String> = std::cell::RefCell::new("/".to_string());
    static FORCED_NAVIGATIONS: std::cell::RefCell<Vec<String>> =
        std::cell::RefCell::new(Vec::new());
}

#[cfg(not(target_arch = "wasm32"))]
fn current_path() -> String {
    CURRENT_PATH.with(|path| path.borrow().clone())
}

#[cfg(not(target_arch = "wasm32"))]
fn push_history(path: &str) {
    CURRENT_PATH.with(|current| *current.borrow_mut() = normalize_path(path));
}

#[cfg(not(target_arch = "wasm32"))]
fn listen_for_popstate(_router: RouterHandle) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn force_navigate(path: &str) {
    CURRENT_PATH.with(|current| *current.borrow_mut() = normalize_path(path));
    FORCED_NAVIGATIONS.with(|log| log.borrow_mut().push(path.to_string()));
}

/// Drain the record of full-page navigations. Test support.
#[cfg(not(target_arch = "wasm32"))]
pub fn take_forced_navigations() -> Vec<String> {
    FORCED_NAVIGATIONS.with(|log| std::mem::take(&mut *log.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_updates_current_path() {
        let router = RouterHandle::new();
        router.navigate("/register");

        assert_eq!(router.current(), "/register");
        assert_eq!(current_path(), "/register");
    }

    #[test]
    fn test_navigate_normalizes_the_stored_path() {
        let router = RouterHandle::new();
        router.navigate("/login/");

        assert_eq!(router.current(), "/login");
    }

    #[test]
    fn test_force_navigate_is_recorded() {
        take_forced_navigations();

        force_navigate("/login");

        assert_eq!(current_path(), "/login");
        assert_eq!(take_forced_navigations(), vec!["/login".to_string()]);
        assert!(take_forced_navigations().is_empty());
    }
}
