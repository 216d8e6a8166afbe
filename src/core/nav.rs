//! Activation pipeline: debounce gate, resolution, navigation with retry.
//!
//! The buttons call into these functions from their press handlers; the
//! functions are synchronous and carry no component state, so the whole
//! gesture path is testable against a mock router.

use crate::core::ports::RouterPort;
use crate::core::resolver::{self, CenterAction};
use crate::models::{ActivationState, Destination, NavMode, NavRoute};
use crate::utils::log;

/// How a navigation request ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// First attempt succeeded
    Pushed,
    /// First attempt was rejected; the replace retry succeeded
    Replaced,
    /// Both attempts were rejected; the failure was logged and dropped
    Abandoned,
}

/// Navigate to `primary`, retrying once with replace semantics on
/// rejection.
///
/// The retry targets `fallback`, which is the same destination for the
/// lateral buttons but the student dashboard for the center button. A
/// second rejection is logged and swallowed; the user may simply press
/// again.
pub fn navigate_with_fallback(
    router: &dyn RouterPort,
    primary: Destination,
    fallback: Destination,
) -> NavOutcome {
    match router.navigate(primary, NavMode::Push) {
        Ok(()) => NavOutcome::Pushed,
        Err(err) => {
            log::warn(&format!(
                "Navigation to {} failed ({}); retrying with replace",
                primary.path(),
                err
            ));
            match router.navigate(fallback, NavMode::Replace) {
                Ok(()) => NavOutcome::Replaced,
                Err(err) => {
                    log::error(&format!(
                        "Fallback navigation to {} failed: {}",
                        fallback.path(),
                        err
                    ));
                    NavOutcome::Abandoned
                }
            }
        }
    }
}

/// Handle a lateral-button press.
///
/// Returns `None` when the debounce window suppresses the press;
/// otherwise navigates to `dest` (with a replace retry on rejection)
/// and reports the outcome.
pub fn lateral_activation(
    state: &mut ActivationState,
    now: f64,
    window_ms: f64,
    router: &dyn RouterPort,
    dest: Destination,
) -> Option<NavOutcome> {
    if !state.try_activate(now, window_ms) {
        return None;
    }
    Some(navigate_with_fallback(router, dest, dest))
}

/// Handle a center-button press.
///
/// Resolves the route-specific action, navigates to its destination, and
/// returns the action alongside the navigation outcome so the component
/// can run the caller's secondary hook. `None` means the press was
/// debounced away.
pub fn center_activation(
    state: &mut ActivationState,
    now: f64,
    window_ms: f64,
    route: &NavRoute,
    router: &dyn RouterPort,
) -> Option<(CenterAction, NavOutcome)> {
    if !state.try_activate(now, window_ms) {
        return None;
    }
    let action = resolver::center_action(route);
    let outcome =
        navigate_with_fallback(router, action.destination, Destination::StudentDashboard);
    Some((action, outcome))
}
