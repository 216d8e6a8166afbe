//! Lateral navigation button (the bar's outer slots).

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons;
use crate::config::DEBOUNCE_WINDOW_MS;
use crate::core::nav;
use crate::core::ports::SharedRouter;
use crate::models::{ActivationState, Destination, GlyphId};
use crate::utils::time::now_ms;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

/// Pressable destination button for the bar's outer slots.
///
/// Owns its press/debounce state and runs the shared activation pipeline
/// against the injected router: a press that clears the debounce gate
/// navigates to `destination` (replace retry on rejection), then runs
/// the optional caller hook. `is_active` is driven from outside and only
/// affects the rendered variant.
#[component]
pub fn LateralButton(
    /// Base glyph; the active state renders its filled variant.
    glyph: GlyphId,
    #[prop(into)] is_active: Signal<bool>,
    #[prop(into)] destination: Signal<Destination>,
    router: SharedRouter,
    #[prop(into, optional)] on_press: Option<Callback<()>>,
    label: &'static str,
    test_id: &'static str,
) -> impl IntoView {
    let state = RwSignal::new(ActivationState::new());

    let handle_click = move |_| {
        let dest = destination.get_untracked();
        let activated = state
            .try_update(|s| {
                nav::lateral_activation(s, now_ms(), DEBOUNCE_WINDOW_MS, router.as_ref(), dest)
            })
            .unwrap_or(None);
        if activated.is_some()
            && let Some(hook) = on_press
        {
            hook.run(());
        }
    };

    let button_class = move || {
        let mut classes = vec![css::navButton];
        if is_active.get() {
            classes.push(css::navButtonActive);
        }
        if state.with(|s| s.is_pressed()) {
            classes.push(css::navButtonPressed);
        }
        classes.join(" ")
    };

    view! {
        <button
            class=button_class
            on:click=handle_click
            on:pointerdown=move |_| state.update(|s| s.press_start())
            on:pointerup=move |_| state.update(|s| s.press_end())
            on:pointerleave=move |_| state.update(|s| s.press_cancel())
            aria-label=label
            aria-current=move || is_active.get().then_some("page")
            data-testid=test_id
        >
            <span class=move || {
                if is_active.get() { css::iconActive } else { css::iconInactive }
            }>
                {move || {
                    let id = if is_active.get() { glyph.active_variant() } else { glyph };
                    let icon = icons::glyph_icon(id);
                    view! { <Icon icon=icon /> }
                }}
            </span>
        </button>
    }
}
