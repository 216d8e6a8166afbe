//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic glyph identifiers to the selected theme's
//! icons; identifiers without a themed icon fall back to a generic star.

use icondata::Icon;

use crate::config::IconTheme;
use crate::core::error::NavError;
use crate::models::GlyphId;
use crate::utils::log;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    // Lucide has no filled house variant; the active glyph reuses the
    // outline icon.
    pub use icondata::{LuHouse as Home, LuHouse as HomeFill, LuPlus as Add, LuStar as Fallback};
}

mod bootstrap {
    pub use icondata::{
        BsHouse as Home, BsHouseFill as HomeFill, BsPlusLg as Add, BsStarFill as Fallback,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(HOME_FILL, HomeFill);
themed_icon!(ADD, Add);
themed_icon!(FALLBACK, Fallback);

/// The meditation glyph has no vector icon in either theme and renders
/// as this emoji instead.
pub const MEDITATION_EMOJI: &str = "🧘";

// =============================================================================
// Glyph Resolution
// =============================================================================

/// Resolve a semantic glyph to its themed icon.
///
/// Identifiers the theme table has no icon for are substituted with the
/// generic fallback and logged; the caller always gets a renderable icon.
pub fn glyph_icon(id: GlyphId) -> Icon {
    match themed(id) {
        Some(icon) => icon,
        None => {
            log::warn(&format!("No themed icon for {id:?}; using fallback"));
            FALLBACK
        }
    }
}

/// Check that the selected theme maps every glyph in `ids`.
///
/// The navigation row runs this before mounting, so a gap in the theme
/// table surfaces as a recoverable render failure instead of a
/// half-drawn bar.
pub fn verify_glyphs(ids: &[GlyphId]) -> Result<(), NavError> {
    for id in ids {
        if themed(*id).is_none() {
            return Err(NavError::RenderFailed(format!("no themed icon for {id:?}")));
        }
    }
    Ok(())
}

fn themed(id: GlyphId) -> Option<Icon> {
    match id {
        GlyphId::Home => Some(HOME),
        GlyphId::HomeFill => Some(HOME_FILL),
        GlyphId::Add => Some(ADD),
        GlyphId::Fallback => Some(FALLBACK),
        GlyphId::Meditation => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_glyphs_are_covered() {
        let row = [GlyphId::Home, GlyphId::HomeFill, GlyphId::Add, GlyphId::Fallback];
        assert!(verify_glyphs(&row).is_ok());
    }

    #[test]
    fn test_unmapped_glyph_is_reported() {
        let err = verify_glyphs(&[GlyphId::Home, GlyphId::Meditation]).unwrap_err();
        assert!(matches!(err, NavError::RenderFailed(_)));
    }
}
