//! Bottom navigation bar.
//!
//! - [`NavigationBar`] - Composition root (three-slot row + supervision)
//! - [`LateralButton`] - Home/profile destination buttons
//! - [`CenterActionButton`] - Route-aware raised center button
//! - [`ProfileButton`] - Lateral variant with a live avatar
//! - [`RecoveryBoundary`] - Render supervisor with inline retry

mod bar;
mod center;
mod lateral;
mod profile;
mod recovery;

pub use bar::{
    CENTER_BUTTON_TEST_ID, HOME_BUTTON_TEST_ID, NavigationBar, PROFILE_BUTTON_TEST_ID,
};
pub use center::CenterActionButton;
pub use lateral::LateralButton;
pub use profile::ProfileButton;
pub use recovery::RecoveryBoundary;
