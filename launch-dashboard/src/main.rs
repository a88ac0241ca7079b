//! SpaceX Launch Records Dashboard
//!
//! A site dropdown drives a success pie chart; the dropdown together with a
//! payload range slider drives a payload vs outcome scatter plot.
//!
//! Data flow:
//! 1. `build.rs` copies `spacex_launch_dash.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database and the
//!    dropdown options and initial slider value are derived from it.
//! 4. One effect re-renders the pie whenever the selected site changes;
//!    another re-renders the scatter whenever the site or payload range changes.

use launch_chart_ui::components::{
    ChartContainer, DashboardHeader, ErrorDisplay, LoadingSpinner, PayloadRangeSlider,
    SiteSelector,
};
use launch_chart_ui::js_bridge;
use launch_chart_ui::state::AppState;
use launch_data::figure::{payload_scatter, success_pie};
use launch_data::options::{site_options, DropdownOption};
use launch_data::slider::PayloadSlider;
use launch_db::Database;
use launch_records::PayloadRange;
use dioxus::prelude::*;

/// The launch dataset.
const LAUNCH_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

const TITLE: &str = "SpaceX Launch Records Dashboard";

/// Chart container DOM element IDs used by D3.js to render into.
const PIE_CHART_ID: &str = "success-pie-chart";
const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("launch-dashboard-root"))
        .launch(App);
}

/// Everything derived from the dataset once at startup.
struct LoadedDashboard {
    db: Database,
    options: Vec<DropdownOption>,
    initial_range: PayloadRange,
    summary: String,
}

fn load_dashboard(csv_data: &str) -> anyhow::Result<LoadedDashboard> {
    let db = Database::from_csv(csv_data)?;
    let sites = db.query_launch_sites()?;
    let bounds = db.query_payload_bounds()?;
    let launches = db.query_launch_count()?;
    Ok(LoadedDashboard {
        options: site_options(&sites),
        initial_range: PayloadSlider::default().initial_range(bounds),
        summary: format!("{} launches from {} launch sites", launches, sites.len()),
        db,
    })
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut summary = use_signal(String::new);

    // Load the dataset on mount
    use_effect(move || {
        set_document_title(TITLE);
        match load_dashboard(LAUNCH_CSV) {
            Ok(loaded) => {
                state.site_options.set(loaded.options);
                state.payload_range.set(Some(loaded.initial_range));
                summary.set(loaded.summary);
                state.db.set(Some(loaded.db));
                state.loading.set(false);
            }
            Err(e) => state.fail(format!("{:#}", e)),
        }
    });

    // Pie chart: depends on the site dropdown only
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let selection = (state.selected_site)();

        js_bridge::init_charts();
        match success_pie(&db, &selection) {
            Ok(figure) => {
                if figure.is_empty() {
                    log::warn!("no launches for site '{}', pie is empty", selection);
                }
                js_bridge::render_pie_chart(PIE_CHART_ID, &figure);
            }
            Err(e) => {
                log::error!("pie query failed: {:#}", e);
                js_bridge::destroy_chart(PIE_CHART_ID);
            }
        }
    });

    // Scatter chart: depends on the site dropdown and the payload slider
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let selection = (state.selected_site)();
        let range = (state.payload_range)();

        js_bridge::init_charts();
        match payload_scatter(&db, &selection, range) {
            Ok(figure) => js_bridge::render_scatter_chart(SCATTER_CHART_ID, &figure),
            Err(e) => {
                log::error!("scatter query failed: {:#}", e);
                js_bridge::destroy_chart(SCATTER_CHART_ID);
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            DashboardHeader {
                title: TITLE.to_string(),
                subtitle: summary(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                SiteSelector {}

                ChartContainer {
                    id: PIE_CHART_ID.to_string(),
                    label: "Launch success pie chart".to_string(),
                }

                PayloadRangeSlider {}

                ChartContainer {
                    id: SCATTER_CHART_ID.to_string(),
                    label: "Payload vs launch outcome scatter chart".to_string(),
                }
            }
        }
    }
}
