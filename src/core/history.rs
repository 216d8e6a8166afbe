//! Browser-backed router using hash navigation.
//!
//! `Push` goes through `location.hash` so the browser records a history
//! entry and fires `hashchange` (which the shell's route signal listens
//! to); `Replace` rewrites the current entry via the History API without
//! notifying listeners of a new entry.

use wasm_bindgen::JsValue;

use crate::core::error::NavError;
use crate::core::ports::RouterPort;
use crate::models::{Destination, NavMode, NavRoute};
use crate::utils::dom;

/// [`RouterPort`] implementation over the browser window.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashRouter;

impl RouterPort for HashRouter {
    fn current_route(&self) -> NavRoute {
        NavRoute::current()
    }

    fn navigate(&self, dest: Destination, mode: NavMode) -> Result<(), NavError> {
        let window = dom::window().ok_or(NavError::NoWindow)?;
        let hash = dest.hash();

        match mode {
            NavMode::Push => window
                .location()
                .set_hash(&hash)
                .map_err(|err| NavError::RouteRejected(format!("{err:?}"))),
            NavMode::Replace => {
                let history = window.history().map_err(|_| NavError::NoHistory)?;
                history
                    .replace_state_with_url(&JsValue::NULL, "", Some(&hash))
                    .map_err(|err| NavError::RouteRejected(format!("{err:?}")))
            }
        }
    }
}
