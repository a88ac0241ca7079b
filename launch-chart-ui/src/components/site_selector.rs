//! Searchable launch site dropdown.

use crate::state::AppState;
use dioxus::prelude::*;
use launch_data::options::{search_options, DropdownOption, SITE_PLACEHOLDER};
use launch_records::SiteSelection;

/// Launch site dropdown with a search box.
///
/// The search text narrows the listed options; the current selection stays
/// listed even when it does not match, so the `select` never silently shows
/// a different site than the one driving the charts.
#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let mut query = use_signal(String::new);

    let options = state.site_options.read().clone();
    let selected = (state.selected_site)();
    let search_text = query();
    let mut visible: Vec<DropdownOption> = search_options(&options, &search_text)
        .into_iter()
        .cloned()
        .collect();
    if !visible.iter().any(|opt| opt.value == selected.as_value()) {
        if let Some(current) = options.iter().find(|opt| opt.value == selected.as_value()) {
            visible.insert(0, current.clone());
        }
    }

    let on_search = move |evt: Event<FormData>| {
        query.set(evt.value());
    };

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::info!("site selection changed to '{}'", value);
        state.selected_site.set(SiteSelection::from_value(&value));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "site-dropdown",
                style: "font-weight: bold;",
                "Launch Site: "
            }
            input {
                r#type: "search",
                placeholder: SITE_PLACEHOLDER,
                value: "{search_text}",
                oninput: on_search,
                style: "flex: 1; max-width: 260px;",
            }
            select {
                id: "site-dropdown",
                onchange: on_change,
                for opt in visible.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == selected.as_value(),
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
