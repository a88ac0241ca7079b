//! Page title banner.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: String,
    /// One-line summary under the title, e.g. the dataset size
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Centered dashboard title.
#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    rsx! {
        div {
            style: "text-align: center; margin-bottom: 16px;",
            h1 {
                style: "margin: 0; color: #503D36; font-size: 40px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px; color: #757575;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
