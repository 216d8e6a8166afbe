//! Hash-based routes and navigation destinations for the bottom bar.

use crate::config::APP_NAME;

/// Current location, parsed from the URL hash on every navigation.
///
/// Only the locations the navigation bar reacts to are distinguished;
/// everything else collapses into [`NavRoute::Unknown`]. Equality
/// comparison is the only operation the bar performs on a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavRoute {
    /// Landing path: #/ or empty hash
    Root,
    /// Student dashboard: #/dashboard
    StudentDashboard,
    /// Teacher dashboard: #/dashboard-teacher
    TeacherDashboard,
    /// Profile screen: #/profile
    Profile,
    /// Video upload screen: #/subirvideos
    UploadVideos,
    /// Any path the bar has no opinion about
    Unknown,
}

impl NavRoute {
    /// Parse a URL hash into a route.
    ///
    /// Unrecognized paths map to [`NavRoute::Unknown`] rather than failing.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = path.strip_suffix('/').unwrap_or(path);

        match path {
            "" => Self::Root,
            "/dashboard" => Self::StudentDashboard,
            "/dashboard-teacher" => Self::TeacherDashboard,
            "/profile" => Self::Profile,
            "/subirvideos" => Self::UploadVideos,
            _ => Self::Unknown,
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Screen title shown in the shell's content region.
    pub fn screen_title(&self) -> &'static str {
        match self {
            Self::StudentDashboard => "Panel de estudiante",
            Self::TeacherDashboard => "Panel de docente",
            Self::Profile => "Perfil",
            Self::UploadVideos => "Subir videos",
            Self::Root | Self::Unknown => APP_NAME,
        }
    }
}

/// Symbolic navigation target, resolved to a fixed path.
///
/// The mapping is static; there is no runtime mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    StudentDashboard,
    TeacherDashboard,
    Profile,
    UploadVideos,
    /// Relaxation screen shortcut offered on the student dashboard
    Zen,
}

impl Destination {
    /// Path string for this destination.
    pub fn path(&self) -> &'static str {
        match self {
            Self::StudentDashboard => "/dashboard",
            Self::TeacherDashboard => "/dashboard-teacher",
            Self::Profile => "/profile",
            Self::UploadVideos => "/subirvideos",
            Self::Zen => "/ZEN",
        }
    }

    /// URL hash for this destination.
    pub fn hash(&self) -> String {
        format!("#{}", self.path())
    }
}

/// How a navigation request manipulates browser history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// Add a history entry
    Push,
    /// Replace the current entry
    Replace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(NavRoute::from_hash(""), NavRoute::Root);
        assert_eq!(NavRoute::from_hash("#"), NavRoute::Root);
        assert_eq!(NavRoute::from_hash("#/"), NavRoute::Root);
        assert_eq!(NavRoute::from_hash("#/dashboard"), NavRoute::StudentDashboard);
        assert_eq!(
            NavRoute::from_hash("#/dashboard-teacher"),
            NavRoute::TeacherDashboard
        );
        assert_eq!(NavRoute::from_hash("#/profile"), NavRoute::Profile);
        assert_eq!(NavRoute::from_hash("#/subirvideos"), NavRoute::UploadVideos);
    }

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(NavRoute::from_hash("#/dashboard/"), NavRoute::StudentDashboard);
        assert_eq!(NavRoute::from_hash("#/profile/"), NavRoute::Profile);
    }

    #[test]
    fn test_unrecognized_paths_are_unknown() {
        assert_eq!(NavRoute::from_hash("#/ZEN"), NavRoute::Unknown);
        assert_eq!(NavRoute::from_hash("#/watch"), NavRoute::Unknown);
        assert_eq!(NavRoute::from_hash("#/no/such/screen"), NavRoute::Unknown);
    }

    #[test]
    fn test_destination_hashes() {
        assert_eq!(Destination::StudentDashboard.hash(), "#/dashboard");
        assert_eq!(Destination::TeacherDashboard.hash(), "#/dashboard-teacher");
        assert_eq!(Destination::Profile.hash(), "#/profile");
        assert_eq!(Destination::UploadVideos.hash(), "#/subirvideos");
        assert_eq!(Destination::Zen.hash(), "#/ZEN");
    }

    #[test]
    fn test_destination_round_trips_through_parsing() {
        assert_eq!(
            NavRoute::from_hash(&Destination::StudentDashboard.hash()),
            NavRoute::StudentDashboard
        );
        assert_eq!(
            NavRoute::from_hash(&Destination::Profile.hash()),
            NavRoute::Profile
        );
        // The relaxation screen is a destination but not a route the bar tracks
        assert_eq!(NavRoute::from_hash(&Destination::Zen.hash()), NavRoute::Unknown);
    }
}
