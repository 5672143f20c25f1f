use crate::Result;
use crate::model::ChartData;

/// Render a self-contained interactive HTML line chart (data embedded as JSON).
///
/// Important: we avoid `format!()` because the HTML contains many `{}` from JS
/// template literals (e.g., `${x}`), which would conflict with Rust formatting.
pub fn render_html_chart(data: &ChartData) -> Result<String> {
    // `</` inside a label must not close the script element.
    let json = serde_json::to_string(data)?.replace("</", "<\\/");

    const TEMPLATE: &str = r##"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Benchmark results</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  h1 { font-size: 18px; margin: 0; }
  .container { display: flex; padding: 12px 16px; gap: 16px; }
  .chart { flex: 1; position: relative; }
  .legend { width: 240px; font-size: 14px; }

  .legend-item { cursor: pointer; user-select: none; padding: 2px 4px; border-radius: 4px; display: flex; align-items: center; gap: 8px; }
  .legend-item:hover { background: #f3f3f3; }
  .legend-item.hidden { color: #aaa; }
  .swatch { display: inline-block; width: 20px; height: 3px; }
  .muted { color: #777; font-size: 12px; }

  svg text { font-size: 12px; fill: #333; }
  .grid { stroke: #eee; }
  .axis { stroke: #999; }
  #tooltip { position: absolute; pointer-events: none; background: white; border: 1px solid #ddd; border-radius: 4px; padding: 4px 8px; font-size: 13px; display: none; }
</style>
</head>
<body>
<header>
  <h1 id="title"></h1>
  <div id="meta" class="muted"></div>
</header>

<div class="container">
  <div class="chart">
    <svg id="plot" width="900" height="540"></svg>
    <div id="tooltip"></div>
  </div>
  <div class="legend">
    <div class="muted">click to show/hide</div>
    <div id="legend"></div>
  </div>
</div>

<script>
// Embedded chart data (JSON object literal)
const DATA = __DATA__;

const COLORS = [
  "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
  "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf"
];

const SVG_NS = "http://www.w3.org/2000/svg";
const MARGIN = { top: 20, right: 20, bottom: 50, left: 70 };

const state = {
  hidden: new Set()
};

function color(i) {
  return COLORS[i % COLORS.length];
}

function el(name, attrs, text) {
  const e = document.createElementNS(SVG_NS, name);
  for (const [k, v] of Object.entries(attrs)) e.setAttribute(k, v);
  if (text !== undefined) e.textContent = text;
  return e;
}

function extent() {
  const xs = DATA.x;
  const xMin = xs.length ? Math.min(...xs) : 0;
  const xMax = xs.length ? Math.max(...xs) : 1;
  let yMin = 0;
  let yMax = 1;
  for (const s of DATA.series) {
    if (state.hidden.has(s.label)) continue;
    for (const v of s.values) {
      yMin = Math.min(yMin, v);
      yMax = Math.max(yMax, v);
    }
  }
  return { xMin, xMax: xMax === xMin ? xMin + 1 : xMax, yMin, yMax };
}

function renderPlot() {
  const svg = document.getElementById("plot");
  svg.innerHTML = "";

  const width = Number(svg.getAttribute("width"));
  const height = Number(svg.getAttribute("height"));
  const w = width - MARGIN.left - MARGIN.right;
  const h = height - MARGIN.top - MARGIN.bottom;
  const { xMin, xMax, yMin, yMax } = extent();

  const sx = (x) => MARGIN.left + ((x - xMin) / (xMax - xMin)) * w;
  const sy = (y) => MARGIN.top + h - ((y - yMin) / (yMax - yMin)) * h;

  // Grid + y ticks
  const Y_TICKS = 5;
  for (let i = 0; i <= Y_TICKS; i++) {
    const v = yMin + ((yMax - yMin) * i) / Y_TICKS;
    const y = sy(v);
    svg.appendChild(el("line", { x1: MARGIN.left, x2: MARGIN.left + w, y1: y, y2: y, class: "grid" }));
    svg.appendChild(el("text", { x: MARGIN.left - 8, y: y + 4, "text-anchor": "end" }, Math.round(v)));
  }

  // x ticks at every axis point
  for (const x of DATA.x) {
    const px = sx(x);
    svg.appendChild(el("line", { x1: px, x2: px, y1: MARGIN.top, y2: MARGIN.top + h, class: "grid" }));
    svg.appendChild(el("text", { x: px, y: MARGIN.top + h + 18, "text-anchor": "middle" }, x));
  }

  svg.appendChild(el("line", { x1: MARGIN.left, x2: MARGIN.left + w, y1: MARGIN.top + h, y2: MARGIN.top + h, class: "axis" }));
  svg.appendChild(el("line", { x1: MARGIN.left, x2: MARGIN.left, y1: MARGIN.top, y2: MARGIN.top + h, class: "axis" }));
  svg.appendChild(el("text", { x: MARGIN.left + w / 2, y: height - 8, "text-anchor": "middle" }, DATA.x_label));
  svg.appendChild(el("text", {
    x: 16, y: MARGIN.top + h / 2, "text-anchor": "middle",
    transform: `rotate(-90 16 ${MARGIN.top + h / 2})`
  }, DATA.y_label));

  DATA.series.forEach((s, i) => {
    if (state.hidden.has(s.label)) return;
    const c = color(i);
    const pts = s.values.map((v, j) => `${sx(DATA.x[j])},${sy(v)}`).join(" ");
    svg.appendChild(el("polyline", { points: pts, fill: "none", stroke: c, "stroke-width": 2 }));

    s.values.forEach((v, j) => {
      const dot = el("circle", { cx: sx(DATA.x[j]), cy: sy(v), r: 3, fill: c });
      dot.addEventListener("mouseenter", () => showTooltip(dot, s.label, DATA.x[j], v));
      dot.addEventListener("mouseleave", hideTooltip);
      svg.appendChild(dot);
    });
  });
}

function escapeHtml(s) {
  return String(s)
    .replaceAll("&", "&amp;")
    .replaceAll("<", "&lt;")
    .replaceAll(">", "&gt;")
    .replaceAll('"', "&quot;")
    .replaceAll("'", "&#39;");
}

function showTooltip(dot, label, x, y) {
  const tip = document.getElementById("tooltip");
  tip.innerHTML = `<b>${escapeHtml(label)}</b><br>${escapeHtml(DATA.x_label)}: ${x}<br>${escapeHtml(DATA.y_label)}: ${y}`;
  tip.style.left = (Number(dot.getAttribute("cx")) + 10) + "px";
  tip.style.top = (Number(dot.getAttribute("cy")) + 10) + "px";
  tip.style.display = "block";
}

function hideTooltip() {
  document.getElementById("tooltip").style.display = "none";
}

function renderLegend() {
  const root = document.getElementById("legend");
  root.innerHTML = "";

  DATA.series.forEach((s, i) => {
    const row = document.createElement("div");
    row.className = "legend-item" + (state.hidden.has(s.label) ? " hidden" : "");
    row.innerHTML = `<span class="swatch" style="background:${color(i)}"></span>${escapeHtml(s.label)}`;
    row.onclick = () => {
      if (state.hidden.has(s.label)) state.hidden.delete(s.label);
      else state.hidden.add(s.label);
      renderLegend();
      renderPlot();
    };
    root.appendChild(row);
  });
}

document.getElementById("title").textContent = DATA.title;
document.title = DATA.title;
document.getElementById("meta").textContent =
  `${DATA.series.length} labels, ${DATA.x.length} sizes`;

renderLegend();
renderPlot();
</script>
</body>
</html>
"##;

    Ok(TEMPLATE.replace("__DATA__", &json))
}
