//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`NavRoute`], [`Destination`], [`NavMode`] - Hash-based navigation
//! - [`ActivationState`], [`PressPhase`] - Per-button press/debounce state
//! - [`GlyphId`] - Semantic icon identifiers
//! - [`UserIdentitySummary`], [`IdentityUpdate`] - Signed-in user snapshot
//! - [`RecoveryState`] - Recovery boundary supervision state
//! - [`ThemeMode`] - Dark/light style selection

mod button;
pub mod debounce;
mod glyph;
mod identity;
mod recovery;
mod route;
mod theme;

pub use button::{ActivationState, PressPhase};
pub use glyph::GlyphId;
pub use identity::{IdentityUpdate, NAME_PLACEHOLDER, UserIdentitySummary};
pub use recovery::RecoveryState;
pub use route::{Destination, NavMode, NavRoute};
pub use theme::ThemeMode;
