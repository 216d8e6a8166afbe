//! Signed-in user summary consumed by the profile button.

use serde::{Deserialize, Serialize};

/// Placeholder shown when no usable display name exists.
pub const NAME_PLACEHOLDER: &str = "--";

/// Snapshot of the signed-in user, replaced wholesale on every
/// identity notification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentitySummary {
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl UserIdentitySummary {
    pub fn new(display_name: impl Into<String>, avatar_url: Option<String>) -> Self {
        Self {
            display_name: display_name.into(),
            avatar_url,
        }
    }

    /// Initials for the fallback avatar.
    ///
    /// First letters of the first two whitespace-separated words,
    /// uppercased; a single word yields one letter; an empty or
    /// whitespace-only name yields the fixed placeholder.
    pub fn initials(&self) -> String {
        let mut words = self.display_name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let second = words.next().and_then(|w| w.chars().next());

        match (first, second) {
            (Some(a), Some(b)) => a.to_uppercase().chain(b.to_uppercase()).collect(),
            (Some(a), None) => a.to_uppercase().collect(),
            _ => NAME_PLACEHOLDER.to_string(),
        }
    }
}

/// Notification delivered to identity subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentityUpdate {
    SignedIn(UserIdentitySummary),
    SignedOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_two_words() {
        let summary = UserIdentitySummary::new("maria lopez", None);
        assert_eq!(summary.initials(), "ML");
    }

    #[test]
    fn test_initials_from_single_word() {
        let summary = UserIdentitySummary::new("admin", None);
        assert_eq!(summary.initials(), "A");
    }

    #[test]
    fn test_initials_ignore_extra_words() {
        let summary = UserIdentitySummary::new("ana maria torres", None);
        assert_eq!(summary.initials(), "AM");
    }

    #[test]
    fn test_initials_placeholder_for_empty_name() {
        assert_eq!(UserIdentitySummary::default().initials(), NAME_PLACEHOLDER);
        assert_eq!(
            UserIdentitySummary::new("   ", None).initials(),
            NAME_PLACEHOLDER
        );
    }

    #[test]
    fn test_summary_round_trips_through_json() {
        let summary = UserIdentitySummary::new(
            "maria lopez",
            Some("https://example.com/a.png".to_string()),
        );
        let raw = serde_json::to_string(&summary).unwrap();
        assert_eq!(serde_json::from_str::<UserIdentitySummary>(&raw).unwrap(), summary);
    }
}
