//! Profile button with live avatar.
//!
//! A lateral-slot variant that subscribes to the identity collaborator
//! and renders the signed-in user's avatar, falling back to initials
//! when there is no image (or the image fails to load).

use leptos::prelude::*;

use crate::config::DEBOUNCE_WINDOW_MS;
use crate::core::nav;
use crate::core::ports::{SharedIdentity, SharedRouter};
use crate::models::{
    ActivationState, Destination, IdentityUpdate, NAME_PLACEHOLDER, UserIdentitySummary,
};
use crate::utils::log;
use crate::utils::time::now_ms;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

/// Profile destination button.
///
/// Presses run the same activation pipeline as the other lateral slot,
/// always targeting the profile screen. The identity subscription is
/// opened on mount and dropped on unmount; it must never outlive the
/// button, so the guard is tied to the component's cleanup.
#[component]
pub fn ProfileButton(
    #[prop(into)] is_active: Signal<bool>,
    router: SharedRouter,
    identity: SharedIdentity,
    #[prop(into, optional)] on_press: Option<Callback<()>>,
    label: &'static str,
    test_id: &'static str,
) -> impl IntoView {
    let state = RwSignal::new(ActivationState::new());
    let summary = RwSignal::new(None::<UserIdentitySummary>);

    let subscription = identity.subscribe(Box::new(move |update| match update {
        IdentityUpdate::SignedIn(next) => summary.set(Some(next)),
        IdentityUpdate::SignedOut => summary.set(None),
    }));
    on_cleanup(move || drop(subscription));

    let handle_click = move |_| {
        let activated = state
            .try_update(|s| {
                nav::lateral_activation(
                    s,
                    now_ms(),
                    DEBOUNCE_WINDOW_MS,
                    router.as_ref(),
                    Destination::Profile,
                )
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
            <span class=css::avatarWrap>
                <Avatar summary=summary />
                <Show when=move || is_active.get()>
                    <span class=css::activeIndicator></span>
                </Show>
            </span>
        </button>
    }
}

/// Avatar rendering: remote image when a URL is present, initials
/// otherwise. A failed image load switches to initials for the rest of
/// the mount.
#[component]
fn Avatar(#[prop(into)] summary: Signal<Option<UserIdentitySummary>>) -> impl IntoView {
    let image_failed = RwSignal::new(false);

    view! {
        {move || {
            let current = summary.get();
            let url = current.as_ref().and_then(|s| s.avatar_url.clone());
            match url {
                Some(url) if !image_failed.get() => {
                    let src = url.clone();
                    view! {
                        <img
                            class=css::avatarImage
                            src=src
                            alt=""
                            on:error=move |_| {
                                log::warn(&format!("Avatar image failed to load: {url}"));
                                image_failed.set(true);
                            }
                        />
                    }
                    .into_any()
                }
                _ => {
                    let initials = current
                        .map(|s| s.initials())
                        .unwrap_or_else(|| NAME_PLACEHOLDER.to_string());
                    view! { <span class=css::avatarFallback>{initials}</span> }.into_any()
                }
            }
        }}
    }
}
