//! Theme mode read (never written) by the navigation bar.

/// Color scheme of the hosting application.
///
/// The bar only selects a style variant from this; when the host does not
/// supply a theme, the bar falls back to [`ThemeMode::Light`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
