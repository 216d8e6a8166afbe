//! Center action button.
//!
//! The raised middle button whose glyph and destination depend on the
//! current route: relaxation shortcut on the student dashboard, upload
//! shortcut on the teacher dashboard, home everywhere else.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons;
use crate::config::DEBOUNCE_WINDOW_MS;
use crate::core::nav;
use crate::core::ports::SharedRouter;
use crate::core::resolver;
use crate::models::{ActivationState, GlyphId, NavRoute};
use crate::utils::time::now_ms;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

/// Route-aware center button.
///
/// Navigation runs here, not in the hosting bar: the press resolves the
/// current route's action and fires it, then runs the optional caller
/// hook. A rejected navigation falls back to the student dashboard with
/// replace semantics.
#[component]
pub fn CenterActionButton(
    route: Memo<NavRoute>,
    router: SharedRouter,
    #[prop(into, optional)] on_press: Option<Callback<()>>,
    test_id: &'static str,
) -> impl IntoView {
    let state = RwSignal::new(ActivationState::new());
    let action = Memo::new(move |_| resolver::center_action(&route.get()));

    let handle_click = move |_| {
        let current = route.get_untracked();
        let activated = state
            .try_update(|s| {
                nav::center_activation(s, now_ms(), DEBOUNCE_WINDOW_MS, &current, router.as_ref())
            })
            .unwrap_or(None);
        if activated.is_some()
            && let Some(hook) = on_press
        {
            hook.run(());
        }
    };

    let button_class = move || {
        if state.with(|s| s.is_pressed()) {
            format!("{} {}", css::centerButton, css::centerButtonPressed)
        } else {
            css::centerButton.to_string()
        }
    };

    view! {
        <button
            class=button_class
            on:click=handle_click
            on:pointerdown=move |_| state.update(|s| s.press_start())
            on:pointerup=move |_| state.update(|s| s.press_end())
            on:pointerleave=move |_| state.update(|s| s.press_cancel())
            aria-label=move || action.get().label
            data-testid=test_id
        >
            {move || match action.get().glyph {
                GlyphId::Meditation => view! {
                    <span class=css::centerEmoji>{icons::MEDITATION_EMOJI}</span>
                }
                .into_any(),
                other => {
                    let icon = icons::glyph_icon(other);
                    view! {
                        <span class=css::centerIcon>
                            <Icon icon=icon />
                        </span>
                    }
                    .into_any()
                }
            }}
        </button>
    }
}
