//! Payload mass range slider.

use crate::state::AppState;
use dioxus::prelude::*;
use launch_data::slider::PayloadSlider;

/// Two-thumb payload range control over 0 to 10000 kg.
///
/// Each thumb is a native range input; a change snaps to the 1000 kg grid
/// and re-orders the pair if the thumbs crossed.
#[component]
pub fn PayloadRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let slider = use_hook(PayloadSlider::default);
    let range = (state.payload_range)().unwrap_or_else(|| slider.initial_range(None));

    let low_slider = slider.clone();
    let on_low_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            state
                .payload_range
                .set(Some(low_slider.range_from_thumbs(value, range.high)));
        }
    };

    let high_slider = slider.clone();
    let on_high_change = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<f64>() {
            state
                .payload_range
                .set(Some(high_slider.range_from_thumbs(range.low, value)));
        }
    };

    let span = slider.max - slider.min;
    let marks: Vec<(f64, String)> = slider
        .marks
        .iter()
        .map(|m| ((m.value - slider.min) * 100.0 / span, m.label.clone()))
        .collect();

    rsx! {
        div {
            style: "margin: 8px 0 16px 0; max-width: 720px;",
            p {
                style: "margin: 0 0 6px 0;",
                "Payload range (Kg): "
                strong { "{range.low} to {range.high}" }
            }
            label {
                style: "display: flex; gap: 8px; align-items: center;",
                span { style: "width: 32px; font-size: 12px; color: #616161;", "Min" }
                input {
                    r#type: "range",
                    id: "payload-slider-min",
                    min: "{slider.min}",
                    max: "{slider.max}",
                    step: "{slider.step}",
                    value: "{range.low}",
                    onchange: on_low_change,
                    style: "flex: 1;",
                }
            }
            label {
                style: "display: flex; gap: 8px; align-items: center;",
                span { style: "width: 32px; font-size: 12px; color: #616161;", "Max" }
                input {
                    r#type: "range",
                    id: "payload-slider-max",
                    min: "{slider.min}",
                    max: "{slider.max}",
                    step: "{slider.step}",
                    value: "{range.high}",
                    onchange: on_high_change,
                    style: "flex: 1;",
                }
            }
            div {
                style: "position: relative; height: 16px; margin-left: 40px; font-size: 11px; color: #757575;",
                for (left, label) in marks.iter() {
                    span {
                        style: "position: absolute; left: {left}%; transform: translateX(-50%);",
                        "{label}"
                    }
                }
            }
        }
    }
}
