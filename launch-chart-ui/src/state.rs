//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The chart effects read `selected_site` and `payload_range`, so changing
//! either widget re-runs the matching query.

use launch_data::options::DropdownOption;
use launch_db::Database;
use launch_records::{PayloadRange, SiteSelection};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded launch table (None until loaded)
    pub db: Signal<Option<Database>>,
    pub loading: Signal<bool>,
    pub error_msg: Signal<Option<String>>,
    /// Current dropdown value; `ALL` on startup
    pub selected_site: Signal<SiteSelection>,
    /// Dropdown options, `All Sites` first
    pub site_options: Signal<Vec<DropdownOption>>,
    /// Current slider value. None until the dataset bounds are known.
    pub payload_range: Signal<Option<PayloadRange>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(SiteSelection::All),
            site_options: Signal::new(Vec::new()),
            payload_range: Signal::new(None),
        }
    }

    /// Record a fatal load error and leave the loading state.
    pub fn fail(&mut self, message: String) {
        log::error!("{}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
