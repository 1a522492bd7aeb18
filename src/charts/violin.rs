use eframe::egui::{Color32, Ui};
use egui_plot::{BoxElem, BoxPlot, BoxSpread, Plot, PlotPoints, Points, Polygon};

use crate::data::model::FireDataset;
use crate::data::summary::quantile;

// ---------------------------------------------------------------------------
// Violin: fire size distribution, single group
// ---------------------------------------------------------------------------

/// A single-group violin of `fire_size`: mirrored density outline, box
/// overlay, and all points shown.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViolinData {
    /// All fire sizes in the view, row order.
    pub values: Vec<f64>,
    pub box_stats: Option<BoxStats>,
    /// Density profile as (fire_size, half_width) pairs, half widths
    /// normalised so the widest point is [`MAX_HALF_WIDTH`]. Empty when the
    /// view is empty or the values are degenerate (all equal).
    pub outline: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Half of the violin body's maximum width in plot units.
pub const MAX_HALF_WIDTH: f64 = 0.4;

const KDE_SAMPLES: usize = 64;

pub fn build(dataset: &FireDataset, indices: &[usize]) -> ViolinData {
    let values: Vec<f64> = indices.iter().map(|&i| dataset.records[i].fire_size).collect();

    let mut sorted = values.clone();
    sorted.sort_by(f64::total_cmp);

    let box_stats = (!sorted.is_empty()).then(|| BoxStats {
        min: sorted[0],
        q1: quantile(&sorted, 0.25).unwrap_or(sorted[0]),
        median: quantile(&sorted, 0.5).unwrap_or(sorted[0]),
        q3: quantile(&sorted, 0.75).unwrap_or(sorted[0]),
        max: sorted[sorted.len() - 1],
    });

    ViolinData {
        outline: kde_outline(&sorted),
        values,
        box_stats,
    }
}

/// Gaussian KDE profile over sorted values (Silverman's bandwidth), sampled
/// on an even grid padded by three bandwidths, normalised to the maximum
/// half width. Degenerates to an empty outline when the bandwidth collapses.
fn kde_outline(sorted: &[f64]) -> Vec<(f64, f64)> {
    let n = sorted.len();
    if n < 2 {
        return Vec::new();
    }

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std = (sorted.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1) as f64).sqrt();
    let iqr = quantile(sorted, 0.75).unwrap_or(0.0) - quantile(sorted, 0.25).unwrap_or(0.0);

    let mut spread = std.min(iqr / 1.34);
    if spread <= 0.0 {
        spread = std;
    }
    let bandwidth = 0.9 * spread * (n as f64).powf(-0.2);
    if bandwidth <= 0.0 || !bandwidth.is_finite() {
        return Vec::new();
    }

    let lo = sorted[0] - 3.0 * bandwidth;
    let hi = sorted[n - 1] + 3.0 * bandwidth;
    let step = (hi - lo) / (KDE_SAMPLES - 1) as f64;

    let mut profile: Vec<(f64, f64)> = (0..KDE_SAMPLES)
        .map(|k| {
            let y = lo + k as f64 * step;
            let density: f64 = sorted
                .iter()
                .map(|&v| {
                    let z = (y - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            (y, density)
        })
        .collect();

    let peak = profile.iter().map(|&(_, d)| d).fold(0.0, f64::max);
    if peak <= 0.0 {
        return Vec::new();
    }
    for (_, d) in &mut profile {
        *d = *d / peak * MAX_HALF_WIDTH;
    }
    profile
}

pub fn draw(ui: &mut Ui, data: &ViolinData) {
    Plot::new("violin_plot")
        .x_axis_label("")
        .y_axis_label("fire_size")
        .include_x(-1.0)
        .include_x(1.0)
        .height(320.0)
        .show(ui, |plot_ui| {
            // Mirrored density outline around x = 0.
            if !data.outline.is_empty() {
                let mut ring: Vec<[f64; 2]> =
                    data.outline.iter().map(|&(y, w)| [w, y]).collect();
                ring.extend(data.outline.iter().rev().map(|&(y, w)| [-w, y]));
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(ring))
                        .fill_color(Color32::from_rgba_unmultiplied(100, 143, 255, 90))
                        .name("density"),
                );
            }

            // Box overlay.
            if let Some(b) = &data.box_stats {
                let spread = BoxSpread::new(b.min, b.q1, b.median, b.q3, b.max);
                plot_ui.box_plot(BoxPlot::new(vec![
                    BoxElem::new(0.0, spread).box_width(0.25).whisker_width(0.15),
                ]));
            }

            // All points, offset beside the body with a deterministic jitter.
            let points: PlotPoints = data
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| [-0.7 + 0.02 * (i % 9) as f64, v])
                .collect();
            plot_ui.points(Points::new(points).radius(2.0).name("fire_size"));
        });
}
