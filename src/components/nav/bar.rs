//! Bottom navigation bar composition root.
//!
//! Lays out home, center, and profile buttons in a fixed three-slot row,
//! derives each button's active flag and the home destination from the
//! current route, and hands every button the injected router so presses
//! run the shared activation pipeline. The whole row renders under a
//! [`RecoveryBoundary`].

use leptos::prelude::*;

use super::center::CenterActionButton;
use super::lateral::LateralButton;
use super::profile::ProfileButton;
use super::recovery::RecoveryBoundary;
use crate::components::icons;
use crate::core::ports::{SharedIdentity, SharedRouter};
use crate::core::resolver;
use crate::models::{GlyphId, NavRoute, ThemeMode};

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

pub const HOME_BUTTON_TEST_ID: &str = "bottom-nav-home-button";
pub const CENTER_BUTTON_TEST_ID: &str = "bottom-nav-center-button";
pub const PROFILE_BUTTON_TEST_ID: &str = "bottom-nav-profile-button";

/// Every glyph the row mounts through the theme table. Verified before
/// each render attempt; the meditation glyph is absent because it
/// renders as an emoji, not a themed icon.
const ROW_GLYPHS: &[GlyphId] = &[
    GlyphId::Home,
    GlyphId::HomeFill,
    GlyphId::Add,
    GlyphId::Fallback,
];

/// The bar itself.
///
/// Collaborators are injected: the route signal, the router, and the
/// identity store arrive as props, and the theme is optional — a host
/// without theming gets the light variant. Per-button hooks are
/// pass-through extras for the hosting screen, run only after an
/// effective activation.
#[component]
pub fn NavigationBar(
    route: Memo<NavRoute>,
    router: SharedRouter,
    identity: SharedIdentity,
    #[prop(into, optional)] theme: Option<Signal<ThemeMode>>,
    #[prop(into, optional)] on_home_press: Option<Callback<()>>,
    #[prop(into, optional)] on_center_press: Option<Callback<()>>,
    #[prop(into, optional)] on_profile_press: Option<Callback<()>>,
    #[prop(optional)] test_id: Option<&'static str>,
) -> impl IntoView {
    let theme = theme.unwrap_or_else(|| Signal::derive(ThemeMode::default));

    let home_active = Signal::derive(move || resolver::home_is_active(&route.get()));
    let profile_active = Signal::derive(move || resolver::profile_is_active(&route.get()));
    // Stay on the teacher dashboard when already there
    let home_destination = Signal::derive(move || resolver::home_destination(&route.get()));

    let container_class = move || {
        let variant = if theme.get().is_dark() { css::dark } else { css::light };
        format!("{} {}", css::container, variant)
    };

    view! {
        <RecoveryBoundary attempt=move || {
            icons::verify_glyphs(ROW_GLYPHS)?;
            let home_router = router.clone();
            let center_router = router.clone();
            let profile_router = router.clone();
            let identity = identity.clone();
            let container_class = container_class.clone();
            Ok(
                view! {
                    <nav class=container_class data-testid=test_id>
                        <div class=css::slot>
                            <LateralButton
                                glyph=GlyphId::Home
                                is_active=home_active
                                destination=home_destination
                                router=home_router
                                on_press=move |()| {
                                    if let Some(hook) = on_home_press {
                                        hook.run(());
                                    }
                                }
                                label="Ir a inicio"
                                test_id=HOME_BUTTON_TEST_ID
                            />
                        </div>
                        <div class=css::slotCenter>
                            <CenterActionButton
                                route=route
                                router=center_router
                                on_press=move |()| {
                                    if let Some(hook) = on_center_press {
                                        hook.run(());
                                    }
                                }
                                test_id=CENTER_BUTTON_TEST_ID
                            />
                        </div>
                        <div class=css::slot>
                            <ProfileButton
                                is_active=profile_active
                                router=profile_router
                                identity=identity
                                on_press=move |()| {
                                    if let Some(hook) = on_profile_press {
                                        hook.run(());
                                    }
                                }
                                label="Ir a perfil"
                                test_id=PROFILE_BUTTON_TEST_ID
                            />
                        </div>
                    </nav>
                }
                    .into_any(),
            )
        } />
    }
}
