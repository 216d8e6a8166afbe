//! Application shell and route source.
//!
//! The URL hash is the source of truth: the route signal is derived from
//! it on mount and kept in sync through `hashchange` events, so browser
//! back/forward buttons work automatically. The content region here is a
//! placeholder — the real screens live outside this crate — but the
//! navigation bar below it is the genuine article.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::nav::NavigationBar;
use crate::core::ports::{SharedIdentity, SharedRouter};
use crate::models::ThemeMode;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Shell wiring the route signal to the navigation bar.
#[component]
pub fn AppRouter(
    router: SharedRouter,
    identity: SharedIdentity,
    #[prop(into)] theme: Signal<ThemeMode>,
) -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(router.current_route());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let listener_router = router.clone();
        let closure = Closure::wrap(Box::new(move || {
            route.set(listener_router.current_route());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! {
        <main class=css::screen>
            <h1 class=css::screenTitle>{move || route_memo.get().screen_title()}</h1>
        </main>

        <NavigationBar route=route_memo router=router identity=identity theme=theme />
    }
}
