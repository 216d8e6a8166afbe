//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Safe accessors for the window and its storage
//! - [`log`] - Console logging with a native fallback
//! - [`time`] - Millisecond wall-clock access

pub mod dom;
pub mod log;
pub mod time;
