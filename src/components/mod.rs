//! UI components built with Leptos.
//!
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`nav`] - Bottom navigation bar subsystem
//! - [`router`] - Application shell and route source

pub mod icons;
pub mod nav;
pub mod router;

pub use router::AppRouter;
