//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the shell.
pub const APP_NAME: &str = "SEAMI";

// =============================================================================
// Interaction Configuration
// =============================================================================

/// Minimum time between two effective activations of the same button.
pub const DEBOUNCE_WINDOW_MS: f64 = 300.0;

// =============================================================================
// Session Configuration
// =============================================================================

/// localStorage key for the signed-in user summary.
pub const SESSION_KEY: &str = "seami_session";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
