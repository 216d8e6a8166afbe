//! Root application module.
//!
//! Builds the browser-backed collaborators (hash router, session store,
//! color-scheme theme signal) and injects them into the shell. The
//! top-level error boundary is the last line of defense for defects the
//! navigation bar's own supervision does not cover.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::AppRouter;
use crate::core::history::HashRouter;
use crate::core::ports::{SharedIdentity, SharedRouter};
use crate::core::session::SessionStore;
use crate::models::ThemeMode;

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let router: SharedRouter = Arc::new(HashRouter);
    let identity: SharedIdentity = Arc::new(SessionStore::new());

    let prefers_dark = use_media_query("(prefers-color-scheme: dark)");
    let theme = Signal::derive(move || {
        if prefers_dark.get() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0f172a;
                    color: #e2e8f0;
                    font-family: sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ef4444; margin-bottom: 1rem;">
                            "Algo salió mal"
                        </h1>
                        <p style="color: #94a3b8; margin-bottom: 2rem;">
                            "Ocurrió un error inesperado. Por favor recarga la página."
                        </p>
                        <details style="
                            text-align: left;
                            background: #1e293b;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #64748b;">
                                "Detalles del error"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #ef4444;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #8bc34a;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Recargar página"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter router=router identity=identity theme=theme />
        </ErrorBoundary>
    }
}
