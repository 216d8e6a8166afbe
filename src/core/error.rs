//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages:
//!
//! - [`NavError`] - Navigation and render failures inside the bottom bar

use std::fmt;

/// Failures the navigation subsystem absorbs.
///
/// Nothing here escapes to the hosting screen; every variant is either
/// retried with replace semantics, logged, or surfaced as an inline
/// retry notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// Browser window not available
    NoWindow,
    /// Browser history API not available
    NoHistory,
    /// The router rejected the navigation request
    RouteRejected(String),
    /// A descendant failed while rendering
    RenderFailed(String),
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::NoHistory => write!(f, "Browser history not available"),
            Self::RouteRejected(msg) => write!(f, "Navigation rejected: {}", msg),
            Self::RenderFailed(msg) => write!(f, "Render failed: {}", msg),
        }
    }
}

impl std::error::Error for NavError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            NavError::RouteRejected("transition in flight".to_string()).to_string(),
            "Navigation rejected: transition in flight"
        );
        assert_eq!(NavError::NoWindow.to_string(), "Browser window not available");
        assert_eq!(
            NavError::RenderFailed("missing glyph".to_string()).to_string(),
            "Render failed: missing glyph"
        );
    }
}
