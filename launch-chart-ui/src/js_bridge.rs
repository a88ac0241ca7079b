//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderers live in `assets/js/*.js`, are embedded at compile
//! time, and are evaluated as globals (no ES modules) once D3 has loaded.

use launch_data::figure::{PieFigure, ScatterFigure};
use serde::Serialize;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// Global functions promoted to `window.*` once the scripts are evaluated.
const CHART_GLOBALS: [&str; 6] = [
    "renderPieChart",
    "renderScatterChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
    "escapeHtml",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Launch dashboard JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
///
/// JSON string syntax is a subset of JS string syntax, so serde_json's
/// escaping covers quotes, backslashes and newlines.
pub fn js_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Build the script that waits for D3, evaluates the chart scripts at
/// global scope and marks the bridge ready.
fn init_script() -> String {
    let all_js = [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS].join("\n");
    let promote: String = CHART_GLOBALS
        .iter()
        .map(|name| {
            format!(
                "if (typeof {name} !== 'undefined') window.{name} = {name};\n",
                name = name
            )
        })
        .collect();
    format!(
        r#"
        (function() {{
            if (window.__launchChartsReady || window.__launchChartsPending) return;
            window.__launchChartsPending = true;
            window.__launchChartScripts = {scripts};
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__launchChartScripts);
                    delete window.__launchChartScripts;
                    {promote}
                    window.__launchChartsReady = true;
                    console.log('Launch dashboard charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        scripts = js_string_literal(&all_js),
        promote = promote,
    )
}

/// Initialize the chart scripts. Safe to call repeatedly; only the first
/// call does any work.
pub fn init_charts() {
    let _ = js_sys::eval(&init_script());
}

/// Build the polling render call for one renderer.
///
/// Waits for the chart scripts and the container element before calling
/// `window.{renderer}(containerId, figureJson)`.
fn render_script(renderer: &str, container_id: &str, figure_json: &str) -> String {
    format!(
        r#"
        (function() {{
            var containerId = {container};
            var poll = setInterval(function() {{
                if (window.__launchChartsReady &&
                    typeof window.{renderer} !== 'undefined' &&
                    document.getElementById(containerId)) {{
                    clearInterval(poll);
                    try {{
                        window.{renderer}(containerId, {figure});
                    }} catch(e) {{ console.error('[launch] {renderer} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        renderer = renderer,
        container = js_string_literal(container_id),
        figure = js_string_literal(figure_json),
    )
}

fn render<T: Serialize>(renderer: &str, container_id: &str, figure: &T) {
    match serde_json::to_string(figure) {
        Ok(json) => call_js(&render_script(renderer, container_id, &json)),
        Err(e) => log::error!("failed to serialize figure for {}: {}", renderer, e),
    }
}

/// Render the success pie chart into `container_id`.
pub fn render_pie_chart(container_id: &str, figure: &PieFigure) {
    render("renderPieChart", container_id, figure);
}

/// Render the payload/outcome scatter chart into `container_id`.
pub fn render_scatter_chart(container_id: &str, figure: &ScatterFigure) {
    render("renderScatterChart", container_id, figure);
}

/// Clear whatever chart is drawn in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string_literal(container_id)
    ));
}
