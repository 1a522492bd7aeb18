//! Deterministic SVG rendering of chart data, one renderer per chart kind.
//! Only this module knows pixel layout; the chart modules stay in data space.

use eframe::egui::Color32;

use crate::charts::{ChartData, bar, heatmap, pie, regression, scatter, violin};
use crate::color::ColorMap;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 50.0;

const ACCENT: &str = "#cb7b5d";
const INK: &str = "#222222";

pub fn render(chart: &ChartData, title: &str) -> String {
    let mut s = Svg::new(title);
    match chart {
        ChartData::Bar(d) => render_bar(&mut s, d),
        ChartData::Scatter(d) => render_scatter(&mut s, d),
        ChartData::Violin(d) => render_violin(&mut s, d),
        ChartData::Heatmap(d) => render_heatmap(&mut s, d),
        ChartData::Pie(d) => render_pie(&mut s, d),
        ChartData::Regression(d) => render_regression(&mut s, d),
    }
    s.finish()
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

struct Svg {
    parts: Vec<String>,
}

impl Svg {
    fn new(title: &str) -> Self {
        let parts = vec![
            format!(r#"<svg width="{WIDTH}" height="{HEIGHT}" xmlns="http://www.w3.org/2000/svg">"#),
            format!(r##"<rect width="{WIDTH}" height="{HEIGHT}" fill="#ffffff"/>"##),
            format!(
                r#"<text x="{}" y="28" fill="{INK}" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle">{}</text>"#,
                WIDTH / 2.0,
                escape(title)
            ),
        ];
        Svg { parts }
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.parts.push(format!(
            r#"<rect x="{x:.2}" y="{y:.2}" width="{w:.2}" height="{h:.2}" fill="{fill}"/>"#
        ));
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.parts.push(format!(
            r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{fill}" fill-opacity="0.8"/>"#
        ));
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        self.parts.push(format!(
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{stroke}" stroke-width="{width}"/>"#
        ));
    }

    fn polygon(&mut self, points: &[[f64; 2]], fill: &str) {
        let pts: Vec<String> = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p[0], p[1]))
            .collect();
        self.parts.push(format!(
            r#"<polygon points="{}" fill="{fill}" fill-opacity="0.85" stroke="{INK}" stroke-width="0.5"/>"#,
            pts.join(" ")
        ));
    }

    fn text(&mut self, x: f64, y: f64, size: u32, anchor: &str, content: &str) {
        self.parts.push(format!(
            r#"<text x="{x:.2}" y="{y:.2}" fill="{INK}" font-family="sans-serif" font-size="{size}" text-anchor="{anchor}">{}</text>"#,
            escape(content)
        ));
    }

    /// Plot-area frame with axis labels.
    fn axes(&mut self, x_label: &str, y_label: &str) {
        let (x0, y0, x1, y1) = plot_area();
        self.line(x0, y1, x1, y1, INK, 1.0);
        self.line(x0, y0, x0, y1, INK, 1.0);
        self.text((x0 + x1) / 2.0, HEIGHT - 12.0, 12, "middle", x_label);
        self.parts.push(format!(
            r#"<text x="16" y="{:.2}" fill="{INK}" font-family="sans-serif" font-size="12" text-anchor="middle" transform="rotate(-90 16 {:.2})">{}</text>"#,
            (y0 + y1) / 2.0,
            (y0 + y1) / 2.0,
            escape(y_label)
        ));
    }

    fn finish(mut self) -> String {
        self.parts.push("</svg>".to_string());
        self.parts.join("\n")
    }
}

/// (x0, y0, x1, y1) of the plot area in pixel space, y downwards.
fn plot_area() -> (f64, f64, f64, f64) {
    (
        MARGIN_LEFT,
        MARGIN_TOP,
        WIDTH - MARGIN_RIGHT,
        HEIGHT - MARGIN_BOTTOM,
    )
}

/// Linear data→pixel scale; degenerate domains map to the midpoint.
struct Scale {
    d0: f64,
    d1: f64,
    p0: f64,
    p1: f64,
}

impl Scale {
    fn new(d0: f64, d1: f64, p0: f64, p1: f64) -> Self {
        Scale { d0, d1, p0, p1 }
    }

    fn map(&self, v: f64) -> f64 {
        if (self.d1 - self.d0).abs() < f64::EPSILON {
            return (self.p0 + self.p1) / 2.0;
        }
        self.p0 + (v - self.d0) / (self.d1 - self.d0) * (self.p1 - self.p0)
    }
}

fn hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

// ---------------------------------------------------------------------------
// Per-kind renderers
// ---------------------------------------------------------------------------

fn render_bar(s: &mut Svg, data: &bar::BarData) {
    s.axes("state", "fire_size");
    let (x0, y0, x1, y1) = plot_area();
    let Some((_, max)) = min_max(data.bars.iter().map(|(_, v)| *v)) else {
        return;
    };
    let y = Scale::new(0.0, max.max(f64::MIN_POSITIVE), y1, y0);

    let slot = (x1 - x0) / data.bars.len() as f64;
    for (i, (state, total)) in data.bars.iter().enumerate() {
        let cx = x0 + slot * (i as f64 + 0.5);
        let top = y.map(*total);
        s.rect(cx - slot * 0.3, top, slot * 0.6, y1 - top, ACCENT);
        s.text(cx, y1 + 16.0, 11, "middle", state);
    }
    s.text(x0 - 6.0, y0 + 4.0, 10, "end", &format!("{max:.1}"));
}

fn render_scatter(s: &mut Svg, data: &scatter::ScatterData) {
    s.axes("longitude", "latitude");
    let (x0, y0, x1, y1) = plot_area();
    let all = data.groups.iter().flat_map(|g| g.points.iter());
    let Some((lon_lo, lon_hi)) = min_max(all.clone().map(|p| p[0])) else {
        return;
    };
    let (lat_lo, lat_hi) = min_max(all.map(|p| p[1])).unwrap();
    let x = Scale::new(lon_lo, lon_hi, x0 + 10.0, x1 - 10.0);
    let y = Scale::new(lat_lo, lat_hi, y1 - 10.0, y0 + 10.0);

    let colors = ColorMap::new(data.groups.iter().map(|g| g.class.clone()));
    for group in &data.groups {
        let fill = hex(colors.color_for(&group.class));
        for p in &group.points {
            let r = scatter::marker_radius(p[2], data.max_fire_size) as f64;
            s.circle(x.map(p[0]), y.map(p[1]), r, &fill);
        }
    }
}

fn render_violin(s: &mut Svg, data: &violin::ViolinData) {
    s.axes("", "fire_size");
    let (x0, y0, x1, y1) = plot_area();
    let Some(b) = &data.box_stats else {
        return;
    };
    let span = (b.max - b.min).max(f64::MIN_POSITIVE);
    let y = Scale::new(b.min - 0.05 * span, b.max + 0.05 * span, y1, y0);
    let cx = (x0 + x1) / 2.0;
    // One violin half-width in pixels.
    let wx = (x1 - x0) * 0.35 / violin::MAX_HALF_WIDTH;

    if !data.outline.is_empty() {
        let mut ring: Vec<[f64; 2]> = data
            .outline
            .iter()
            .map(|&(v, w)| [cx + w * wx, y.map(v)])
            .collect();
        ring.extend(data.outline.iter().rev().map(|&(v, w)| [cx - w * wx, y.map(v)]));
        s.polygon(&ring, "#648fff");
    }

    // Box overlay.
    let bw = (x1 - x0) * 0.06;
    s.line(cx, y.map(b.min), cx, y.map(b.max), INK, 1.0);
    s.rect(cx - bw, y.map(b.q3), 2.0 * bw, y.map(b.q1) - y.map(b.q3), "#ffffff");
    s.line(cx - bw, y.map(b.median), cx + bw, y.map(b.median), INK, 1.5);

    // All points beside the body.
    let px = x0 + (x1 - x0) * 0.08;
    for (i, &v) in data.values.iter().enumerate() {
        s.circle(px + 3.0 * (i % 9) as f64, y.map(v), 2.0, ACCENT);
    }
    s.text(x0 - 6.0, y.map(b.max) + 4.0, 10, "end", &format!("{:.1}", b.max));
    s.text(x0 - 6.0, y.map(b.min) + 4.0, 10, "end", &format!("{:.1}", b.min));
}

fn render_heatmap(s: &mut Svg, data: &heatmap::HeatmapData) {
    s.axes("discovery_month", "discovery_year");
    let (x0, y0, x1, y1) = plot_area();
    // Reserve bands for the two marginals.
    let marg_h = (y1 - y0) * 0.25;
    let marg_w = (x1 - x0) * 0.12;
    let grid_x1 = x1 - marg_w - 8.0;
    let grid_y0 = y0 + marg_h + 8.0;
    let cell_w = (grid_x1 - x0) / 12.0;

    // Month marginal (top).
    let max = data.max_count.max(1) as f64;
    for (m, &count) in data.month_counts.iter().enumerate() {
        let h = marg_h * count as f64 / max;
        s.rect(x0 + cell_w * m as f64 + 1.0, y0 + marg_h - h, cell_w - 2.0, h, ACCENT);
    }

    // Single-year row of cells.
    for (m, &count) in data.month_counts.iter().enumerate() {
        let fill = hex(heatmap::cell_color(count, data.max_count));
        s.rect(x0 + cell_w * m as f64 + 1.0, grid_y0, cell_w - 2.0, y1 - grid_y0 - 2.0, &fill);
        s.text(x0 + cell_w * (m as f64 + 0.5), y1 + 16.0, 11, "middle", &format!("{}", m + 1));
    }
    s.text(x0 - 6.0, (grid_y0 + y1) / 2.0, 11, "end", &data.year.to_string());

    // Degenerate year marginal (right): one bar for the total.
    if data.total > 0 {
        s.rect(grid_x1 + 8.0, grid_y0, marg_w, y1 - grid_y0 - 2.0, ACCENT);
        s.text(
            grid_x1 + 8.0 + marg_w / 2.0,
            (grid_y0 + y1) / 2.0,
            11,
            "middle",
            &data.total.to_string(),
        );
    }
}

fn render_pie(s: &mut Svg, data: &pie::PieData) {
    let (x0, y0, x1, y1) = plot_area();
    let cx = (x0 + x1) / 2.0;
    let cy = (y0 + y1) / 2.0;
    let radius = ((x1 - x0).min(y1 - y0)) / 2.0 - 10.0;

    let colors = ColorMap::new(data.slices.iter().map(|sl| sl.state.clone()));
    for slice in &data.slices {
        // SVG y grows downwards, so flip the wedge.
        let ring: Vec<[f64; 2]> = pie::wedge_points(slice)
            .iter()
            .map(|p| [cx + p[0] * radius, cy - p[1] * radius])
            .collect();
        s.polygon(&ring, &hex(colors.color_for(&slice.state)));

        let mid = (slice.start_angle + slice.end_angle) / 2.0;
        let lx = cx + mid.cos() * radius * 1.08;
        let ly = cy - mid.sin() * radius * 1.08;
        let anchor = if mid.cos() < 0.0 { "end" } else { "start" };
        s.text(
            lx,
            ly,
            11,
            anchor,
            &format!("{} ({:.1}%)", slice.state, slice.fraction * 100.0),
        );
    }
}

fn render_regression(s: &mut Svg, data: &regression::RegressionData) {
    s.axes("Temperature (Cont.)", "Fire Size");
    let (x0, y0, x1, y1) = plot_area();
    let (tx_lo, tx_hi) = min_max(data.points.iter().map(|p| p[0])).unwrap_or((0.0, 1.0));
    let fy = data
        .points
        .iter()
        .map(|p| p[1])
        .chain([data.predict(tx_lo), data.predict(tx_hi)]);
    let (fy_lo, fy_hi) = min_max(fy).unwrap_or((0.0, 1.0));
    let x = Scale::new(tx_lo, tx_hi, x0 + 10.0, x1 - 10.0);
    let y = Scale::new(fy_lo, fy_hi, y1 - 10.0, y0 + 10.0);

    for p in &data.points {
        s.circle(x.map(p[0]), y.map(p[1]), 2.5, "#648fff");
    }
    s.line(
        x.map(tx_lo),
        y.map(data.predict(tx_lo)),
        x.map(tx_hi),
        y.map(data.predict(tx_hi)),
        "#ff0000",
        2.0,
    );
}
