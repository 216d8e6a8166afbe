//! Per-button interaction state.
//!
//! Each button instance owns one [`ActivationState`]: the press phase for
//! visual feedback plus the timestamp of the last effective activation for
//! debouncing. The state is created on mount and discarded on unmount.

use crate::models::debounce;

/// Press phase of a single button.
///
/// `Pressed` holds only between a press-start and the matching
/// press-end or press-cancel (e.g. the pointer leaves the hit area).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PressPhase {
    #[default]
    Idle,
    Pressed,
}

/// Transient interaction state owned by one button instance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActivationState {
    phase: PressPhase,
    last_activation: Option<f64>,
}

impl ActivationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self) -> bool {
        self.phase == PressPhase::Pressed
    }

    pub fn press_start(&mut self) {
        self.phase = PressPhase::Pressed;
    }

    pub fn press_end(&mut self) {
        self.phase = PressPhase::Idle;
    }

    pub fn press_cancel(&mut self) {
        self.phase = PressPhase::Idle;
    }

    /// Gate an activation at `now` through the debounce window.
    ///
    /// Returns `true` and records the timestamp when the activation may
    /// run; returns `false` without mutating when it is suppressed. The
    /// recorded timestamp is monotonically non-decreasing: a stale clock
    /// reading fails the window check and leaves the state untouched.
    pub fn try_activate(&mut self, now: f64, window_ms: f64) -> bool {
        if !debounce::should_allow(now, self.last_activation, window_ms) {
            return false;
        }
        self.last_activation = Some(now);
        true
    }

    /// Timestamp of the last effective activation, if any.
    pub fn last_activation(&self) -> Option<f64> {
        self.last_activation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: f64 = 300.0;

    #[test]
    fn test_press_cycle() {
        let mut state = ActivationState::new();
        assert!(!state.is_pressed());

        state.press_start();
        assert!(state.is_pressed());

        state.press_end();
        assert!(!state.is_pressed());

        state.press_start();
        state.press_cancel();
        assert!(!state.is_pressed());
    }

    #[test]
    fn test_press_phase_is_orthogonal_to_activation() {
        let mut state = ActivationState::new();
        state.press_start();
        assert!(state.try_activate(0.0, WINDOW));
        // Activating does not end the press
        assert!(state.is_pressed());
    }

    #[test]
    fn test_rapid_presses_activate_once() {
        let mut state = ActivationState::new();
        let mut allowed = 0;
        // Ten presses within 50ms of each other
        for i in 0..10 {
            if state.try_activate(i as f64 * 5.0, WINDOW) {
                allowed += 1;
            }
        }
        assert_eq!(allowed, 1);
        assert_eq!(state.last_activation(), Some(0.0));
    }

    #[test]
    fn test_activation_at_boundary_allowed() {
        let mut state = ActivationState::new();
        assert!(state.try_activate(0.0, WINDOW));
        assert!(!state.try_activate(250.0, WINDOW));
        assert!(state.try_activate(300.0, WINDOW));
        assert_eq!(state.last_activation(), Some(300.0));
    }

    #[test]
    fn test_suppressed_activation_does_not_mutate() {
        let mut state = ActivationState::new();
        assert!(state.try_activate(1000.0, WINDOW));
        assert!(!state.try_activate(1100.0, WINDOW));
        assert_eq!(state.last_activation(), Some(1000.0));
    }

    #[test]
    fn test_timestamp_is_monotonic_under_backwards_clock() {
        let mut state = ActivationState::new();
        assert!(state.try_activate(1000.0, WINDOW));
        assert!(!state.try_activate(400.0, WINDOW));
        assert_eq!(state.last_activation(), Some(1000.0));
    }
}
