//! Supervision state for the navigation bar's recovery boundary.

/// Health of the supervised render tree.
///
/// `Healthy -> fail -> Failed -> retry -> Healthy`. While `Failed`, the
/// boundary renders a retry notice instead of its children; the stored
/// message is what the failing render reported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RecoveryState {
    #[default]
    Healthy,
    Failed {
        message: String,
    },
}

impl RecoveryState {
    pub fn has_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Record a render failure.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Self::Failed {
            message: message.into(),
        };
    }

    /// User-driven transition back to a healthy render attempt.
    pub fn retry(&mut self) {
        *self = Self::Healthy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_healthy() {
        assert!(!RecoveryState::default().has_failed());
    }

    #[test]
    fn test_fail_then_retry_round_trip() {
        let mut state = RecoveryState::default();

        state.fail("boom");
        assert!(state.has_failed());
        assert_eq!(
            state,
            RecoveryState::Failed {
                message: "boom".to_string()
            }
        );

        state.retry();
        assert_eq!(state, RecoveryState::Healthy);
    }

    #[test]
    fn test_second_failure_replaces_message() {
        let mut state = RecoveryState::default();
        state.fail("first");
        state.fail("second");
        assert_eq!(
            state,
            RecoveryState::Failed {
                message: "second".to_string()
            }
        );
    }
}
