//! Recovery boundary supervising the navigation bar's render tree.
//!
//! A broken navigation bar must never crash the host screen. The
//! boundary owns a tagged health state: while `Healthy` it runs the
//! supervised render attempt; a failed attempt flips it to `Failed`,
//! which renders a fixed-height inline notice with a retry control
//! instead. Retry is an explicit transition back to `Healthy`.

use leptos::prelude::*;

use crate::core::error::NavError;
use crate::models::RecoveryState;
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/nav/recovery.module.css");

/// Supervisor wrapper for the bar's subtree.
///
/// This is the only place in the subsystem that fully swallows a render
/// failure; everything below it reports errors upward as `Result`s.
#[component]
pub fn RecoveryBoundary<F>(
    /// Render attempt for the supervised subtree; re-run after a retry.
    attempt: F,
) -> impl IntoView
where
    F: Fn() -> Result<AnyView, NavError> + Send + Sync + 'static,
{
    let state = RwSignal::new(RecoveryState::default());

    view! {
        {move || match state.get() {
            RecoveryState::Failed { .. } => retry_notice(state),
            RecoveryState::Healthy => match attempt() {
                Ok(content) => content,
                Err(err) => {
                    log::error(&format!("Navigation bar render failed: {err}"));
                    // Untracked write: this run already returns the notice,
                    // and the retry button is what re-renders.
                    state.update_untracked(|s| s.fail(err.to_string()));
                    retry_notice(state)
                }
            },
        }}
    }
}

fn retry_notice(state: RwSignal<RecoveryState>) -> AnyView {
    view! {
        <div class=css::notice role="alert">
            <span class=css::noticeText>"Error en navegación"</span>
            <button class=css::retryButton on:click=move |_| state.update(|s| s.retry())>
                "Reintentar"
            </button>
        </div>
    }
    .into_any()
}
