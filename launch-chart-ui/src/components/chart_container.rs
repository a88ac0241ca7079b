//! Chart container component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    /// Accessible name for the chart region
    pub label: String,
    #[props(default = 420)]
    pub min_height: u32,
}

/// A container div for one D3.js chart.
///
/// The inner render target is left without Dioxus-managed children since
/// the renderers clear and redraw it on every update.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; margin: 8px 0;",
        props.min_height
    );

    rsx! {
        div {
            "role": "figure",
            "aria-label": "{props.label}",
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
