//! Debounce policy for button activations.
//!
//! The timestamp itself lives in each button's [`ActivationState`]; this
//! module holds only the comparison logic so it can be tested in isolation.
//!
//! [`ActivationState`]: crate::models::ActivationState

/// Decide whether an activation at `now` may run.
///
/// The very first activation (no prior timestamp) is always allowed.
/// The window is inclusive at its boundary: an activation exactly
/// `window_ms` after the previous one is allowed.
pub fn should_allow(now: f64, last: Option<f64>, window_ms: f64) -> bool {
    match last {
        None => true,
        Some(last) => now - last >= window_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: f64 = 300.0;

    #[test]
    fn test_first_activation_always_allowed() {
        assert!(should_allow(0.0, None, WINDOW));
        assert!(should_allow(1234.5, None, WINDOW));
    }

    #[test]
    fn test_within_window_suppressed() {
        assert!(!should_allow(250.0, Some(0.0), WINDOW));
        assert!(!should_allow(299.9, Some(0.0), WINDOW));
        assert!(!should_allow(1050.0, Some(1000.0), WINDOW));
    }

    #[test]
    fn test_boundary_is_allowed() {
        assert!(should_allow(300.0, Some(0.0), WINDOW));
        assert!(should_allow(1300.0, Some(1000.0), WINDOW));
    }

    #[test]
    fn test_past_window_allowed() {
        assert!(should_allow(301.0, Some(0.0), WINDOW));
        assert!(should_allow(10_000.0, Some(0.0), WINDOW));
    }

    #[test]
    fn test_clock_moving_backwards_suppressed() {
        assert!(!should_allow(100.0, Some(500.0), WINDOW));
    }
}
