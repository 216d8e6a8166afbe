//! Route-driven icon, label, and destination resolution.
//!
//! Every function here is total over [`NavRoute`]: unrecognized routes
//! take the fallback arm instead of failing, so a bad route can never
//! break the bar's render.

use crate::models::{Destination, GlyphId, NavRoute};

/// What the center button shows and does on the current route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CenterAction {
    pub glyph: GlyphId,
    pub label: &'static str,
    pub destination: Destination,
}

/// Resolve the center slot for the current route.
///
/// Unrecognized routes silently fall back to the student dashboard;
/// that behavior is deliberately not extended to new route kinds.
pub fn center_action(route: &NavRoute) -> CenterAction {
    match route {
        NavRoute::StudentDashboard => CenterAction {
            glyph: GlyphId::Meditation,
            label: "Abrir modo ZEN",
            destination: Destination::Zen,
        },
        NavRoute::TeacherDashboard => CenterAction {
            glyph: GlyphId::Add,
            label: "Agregar contenido",
            destination: Destination::UploadVideos,
        },
        _ => CenterAction {
            glyph: GlyphId::Home,
            label: "Acción principal",
            destination: Destination::StudentDashboard,
        },
    }
}

/// Whether the home slot renders as active on `route`.
///
/// Both dashboard variants count, as does the landing path.
pub fn home_is_active(route: &NavRoute) -> bool {
    matches!(
        route,
        NavRoute::Root | NavRoute::StudentDashboard | NavRoute::TeacherDashboard
    )
}

/// Whether the profile slot renders as active on `route`.
pub fn profile_is_active(route: &NavRoute) -> bool {
    *route == NavRoute::Profile
}

/// Where the home button navigates from `route`.
///
/// Teachers stay on their own dashboard; everyone else lands on the
/// student dashboard.
pub fn home_destination(route: &NavRoute) -> Destination {
    if *route == NavRoute::TeacherDashboard {
        Destination::TeacherDashboard
    } else {
        Destination::StudentDashboard
    }
}
