//! Core logic for the navigation subsystem.
//!
//! This module provides:
//! - [`error`] - Error types absorbed by the subsystem
//! - [`ports`] - Router/identity collaborator interfaces
//! - [`resolver`] - Route-driven icon, label, and destination resolution
//! - [`nav`] - Activation pipeline (debounce, navigate, retry)
//! - [`history`] - Browser hash router
//! - [`session`] - localStorage-backed identity store

pub mod error;
pub mod history;
pub mod nav;
pub mod ports;
pub mod resolver;
pub mod session;
