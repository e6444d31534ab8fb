//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js renders every chart; the bridge JS in `assets/js/` is
//! evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module provides safe Rust wrappers that serialize figures and
//! call those globals.

/// URL of the pinned Plotly.js build injected when no `<script>` tag
/// already provides one.
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

// Embed the bridge JS at compile time
static PLOTLY_BRIDGE_JS: &str = include_str!("../assets/js/plotly-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CVD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-Plotly polling loop.
///
/// Injects the Plotly.js CDN script when the page doesn't already carry
/// one, then evaluates the bridge functions at global scope once Plotly
/// is ready and promotes them to `window.*`. Safe to call on every
/// render; the work happens once.
pub fn init_charts() {
    // Store the bridge source on window so the polling callback can eval
    // it at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__cvdChartScripts = {};",
        serde_json::to_string(PLOTLY_BRIDGE_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__cvdChartsReady || window.__cvdChartsInit) return;
            window.__cvdChartsInit = true;
            if (typeof Plotly === 'undefined' && !document.getElementById('cvd-plotly-cdn')) {{
                var s = document.createElement('script');
                s.id = 'cvd-plotly-cdn';
                s.src = '{PLOTLY_CDN}';
                document.head.appendChild(s);
            }}
            var waitForPlotly = setInterval(function() {{
                if (typeof Plotly !== 'undefined') {{
                    clearInterval(waitForPlotly);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__cvdChartScripts);
                    delete window.__cvdChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderFigure !== 'undefined') window.renderFigure = renderFigure;
                    if (typeof bindHover !== 'undefined') window.bindHover = bindHover;
                    window.__cvdChartsReady = true;
                    console.log('CVD charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Render a Plotly figure (data/layout/frames JSON) into a container.
///
/// Uses a polling loop to wait for Plotly.js to load, the bridge to
/// initialize, and the container DOM element to exist. When `bind_hover`
/// is set, the container's `plotly_hover` events are re-dispatched as
/// `cvd-hover-{container_id}` document events carrying the hovered
/// country (see [`crate::hover`]).
pub fn render_figure(container_id: &str, figure_json: &str, bind_hover: bool) {
    let escaped_figure = figure_json.replace('\'', "\\'").replace('\n', "");
    let bind_call = if bind_hover {
        format!("window.bindHover('{container_id}');")
    } else {
        String::new()
    };
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cvdChartsReady &&
                    typeof window.renderFigure !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderFigure('{container_id}', '{escaped_figure}');
                        {bind_call}
                    }} catch(e) {{ console.error('[CVD] renderFigure error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) {{ if (window.Plotly) Plotly.purge(el); el.innerHTML = ''; }}",
        container_id
    ));
}
