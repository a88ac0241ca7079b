//! Load failure panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown in place of the widgets when the launch dataset cannot be loaded.
/// Multi-line messages (an error chain) keep their line breaks.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            "role": "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Could not load launch records" }
            pre {
                style: "margin: 8px 0 0 0; white-space: pre-wrap; font-family: inherit;",
                "{props.message}"
            }
        }
    }
}
