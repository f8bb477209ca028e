//! Dashboard Page
//!
//! Serves the single dashboard page. The page is static: it populates
//! its widgets from the widget endpoints, then re-fetches both chart
//! specs from the chart endpoints whenever a widget changes. Charts
//! are drawn client-side with Plotly from a CDN; no figure rendering
//! happens on the server.

use axum::response::Html;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>Launch Records Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.35.0.min.js"></script>
    <style>
      body {
        font-family: "Inter", system-ui, sans-serif;
        margin: 0 auto;
        padding: 1rem 2rem;
        max-width: 960px;
        background: #ffffff;
        color: #111827;
      }
      h1 {
        text-align: center;
        color: #d62728;
        font-size: 40px;
      }
      label { color: blue; font-size: 20px; }
      select {
        color: blue;
        display: block;
        width: 100%;
        padding: 0.4rem;
        margin: 0.5rem 0 1rem 0;
        font-size: 16px;
      }
      .slider { display: flex; align-items: center; gap: 0.75rem; margin: 0.5rem 0 1rem 0; }
      .slider input[type="range"] { flex: 1; }
      .slider span { min-width: 6rem; color: #374151; }
      .chart { margin-bottom: 1.5rem; }
    </style>
  </head>
  <body>
    <h1>Launch Records Dashboard</h1>

    <label for="site-dropdown">Launch Site:</label>
    <select id="site-dropdown"></select>

    <div id="success-pie-chart" class="chart"></div>

    <label>Payload Range (Kg):</label>
    <div class="slider">
      <input type="range" id="payload-low" />
      <input type="range" id="payload-high" />
      <span id="payload-label"></span>
    </div>

    <div id="success-payload-scatter-chart" class="chart"></div>

    <script>
      const dropdown = document.getElementById("site-dropdown");
      const lowInput = document.getElementById("payload-low");
      const highInput = document.getElementById("payload-high");
      const payloadLabel = document.getElementById("payload-label");

      async function fetchJson(url) {
        const resp = await fetch(url);
        if (!resp.ok) throw new Error(`${url}: ${resp.status}`);
        return resp.json();
      }

      async function initWidgets() {
        const sites = await fetchJson("/api/v1/sites");
        for (const name of sites.options) {
          const opt = document.createElement("option");
          opt.value = name;
          opt.textContent = name;
          dropdown.appendChild(opt);
        }
        dropdown.value = sites.selected;

        const range = await fetchJson("/api/v1/payload-range");
        for (const input of [lowInput, highInput]) {
          input.min = range.min;
          input.max = range.max;
          input.step = range.step;
        }
        lowInput.value = range.selected[0];
        highInput.value = range.selected[1];
        updatePayloadLabel();
      }

      function updatePayloadLabel() {
        payloadLabel.textContent = `${lowInput.value} - ${highInput.value} kg`;
      }

      async function refreshPie() {
        const site = encodeURIComponent(dropdown.value);
        const spec = await fetchJson(`/api/v1/charts/pie?site=${site}`);
        Plotly.newPlot(
          "success-pie-chart",
          [{ type: "pie", labels: spec.labels, values: spec.values }],
          { title: { text: spec.title } }
        );
      }

      async function refreshScatter() {
        const site = encodeURIComponent(dropdown.value);
        const low = encodeURIComponent(lowInput.value);
        const high = encodeURIComponent(highInput.value);
        const spec = await fetchJson(
          `/api/v1/charts/scatter?site=${site}&low=${low}&high=${high}`
        );

        // One trace per booster category so each gets its own color.
        const byBooster = new Map();
        for (const p of spec.points) {
          if (!byBooster.has(p.booster_category)) {
            byBooster.set(p.booster_category, { x: [], y: [] });
          }
          const trace = byBooster.get(p.booster_category);
          trace.x.push(p.payload_mass_kg);
          trace.y.push(p.outcome);
        }
        const traces = [...byBooster.entries()].map(([name, t]) => ({
          type: "scatter",
          mode: "markers",
          name,
          x: t.x,
          y: t.y,
        }));

        Plotly.newPlot("success-payload-scatter-chart", traces, {
          title: { text: spec.title, font: { color: "blue", size: 16 } },
          xaxis: { title: { text: spec.x_field } },
          yaxis: { title: { text: spec.y_field } },
        });
      }

      function refreshCharts() {
        refreshPie().catch(console.error);
        refreshScatter().catch(console.error);
      }

      dropdown.addEventListener("change", refreshCharts);
      for (const input of [lowInput, highInput]) {
        input.addEventListener("change", () => {
          updatePayloadLabel();
          refreshCharts();
        });
        input.addEventListener("input", updatePayloadLabel);
      }

      initWidgets().then(refreshCharts).catch(console.error);
    </script>
  </body>
</html>
"#;
