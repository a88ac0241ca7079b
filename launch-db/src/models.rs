//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// One pie slice: a label and a count of launches.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: i64,
}

/// A single launch plotted as payload mass against outcome class.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub flight_number: Option<u32>,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    /// 1 = success, 0 = failure
    pub class: i64,
    pub booster_version: Option<String>,
    pub booster_category: String,
}

/// Smallest and largest payload mass in the table, in kilograms.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}
