//! Semantic glyph identifiers for the navigation buttons.
//!
//! Components resolve these to concrete themed icons via
//! `components::icons`; keeping the identifiers here lets the resolver
//! logic stay free of icon-library types.

/// Glyph shown inside a navigation button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphId {
    /// House outline (lateral home slot, center fallback)
    Home,
    /// Filled house (home slot while active)
    HomeFill,
    /// Plus sign (center slot on the teacher dashboard)
    Add,
    /// Meditation figure (center slot on the student dashboard)
    Meditation,
    /// Generic star shown when a themed icon is missing
    Fallback,
}

impl GlyphId {
    /// Filled counterpart used while the button's destination is active.
    ///
    /// Glyphs without a filled variant return themselves.
    pub fn active_variant(self) -> Self {
        match self {
            Self::Home => Self::HomeFill,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_variant_of_home() {
        assert_eq!(GlyphId::Home.active_variant(), GlyphId::HomeFill);
    }

    #[test]
    fn test_active_variant_is_identity_elsewhere() {
        assert_eq!(GlyphId::Add.active_variant(), GlyphId::Add);
        assert_eq!(GlyphId::Meditation.active_variant(), GlyphId::Meditation);
        assert_eq!(GlyphId::HomeFill.active_variant(), GlyphId::HomeFill);
    }
}
