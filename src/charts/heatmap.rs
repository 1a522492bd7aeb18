use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Polygon};

use crate::data::model::FireDataset;

// ---------------------------------------------------------------------------
// Heatmap: discovery counts over (month, year) with marginal histograms
// ---------------------------------------------------------------------------

/// 2D count bins over (discovery_month, discovery_year). The view is already
/// filtered to a single year, so the y axis carries exactly one bin and the
/// year marginal degenerates to a single bar; the month marginal is the
/// per-month histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapData {
    pub year: i32,
    /// Count per discovery month, index 0 = January.
    pub month_counts: [usize; 12],
    pub max_count: usize,
    pub total: usize,
}

pub fn build(dataset: &FireDataset, indices: &[usize], year: i32) -> HeatmapData {
    let mut month_counts = [0usize; 12];
    for &i in indices {
        let month = dataset.records[i].discovery_month;
        if (1..=12).contains(&month) {
            month_counts[(month - 1) as usize] += 1;
        } else {
            log::warn!("record {i}: discovery_month {month} out of range, skipped");
        }
    }
    HeatmapData {
        year,
        max_count: month_counts.iter().copied().max().unwrap_or(0),
        total: month_counts.iter().sum(),
        month_counts,
    }
}

/// Cell colour: dark background blended towards the accent by count.
pub fn cell_color(count: usize, max_count: usize) -> Color32 {
    const BASE: (u8, u8, u8) = (40, 42, 54);
    const ACCENT: (u8, u8, u8) = (203, 123, 93);
    if max_count == 0 {
        return Color32::from_rgb(BASE.0, BASE.1, BASE.2);
    }
    let t = count as f32 / max_count as f32;
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    Color32::from_rgb(lerp(BASE.0, ACCENT.0), lerp(BASE.1, ACCENT.1), lerp(BASE.2, ACCENT.2))
}

pub fn draw(ui: &mut Ui, data: &HeatmapData) {
    // Month marginal on top.
    Plot::new("heatmap_marginal_x")
        .x_axis_label("")
        .height(70.0)
        .include_x(0.5)
        .include_x(12.5)
        .show_axes([false, true])
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = data
                .month_counts
                .iter()
                .enumerate()
                .map(|(m, &c)| Bar::new((m + 1) as f64, c as f64).width(0.9))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).color(Color32::from_rgb(203, 123, 93)));
        });

    // Main month × year grid (one year row).
    let year = data.year as f64;
    Plot::new("heatmap")
        .x_axis_label("discovery_month")
        .y_axis_label("discovery_year")
        .include_x(0.5)
        .include_x(12.5)
        .include_y(year - 0.5)
        .include_y(year + 0.5)
        .height(180.0)
        .show(ui, |plot_ui| {
            for (m, &count) in data.month_counts.iter().enumerate() {
                let x = (m + 1) as f64;
                let cell: Vec<[f64; 2]> = vec![
                    [x - 0.5, year - 0.5],
                    [x + 0.5, year - 0.5],
                    [x + 0.5, year + 0.5],
                    [x - 0.5, year + 0.5],
                ];
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(cell))
                        .fill_color(cell_color(count, data.max_count))
                        .name(format!("month {} — {count}", m + 1)),
                );
            }
        });

    // Degenerate year marginal: the single-bin total.
    Plot::new("heatmap_marginal_y")
        .x_axis_label("count")
        .height(70.0)
        .show_axes([true, false])
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(vec![Bar::new(year, data.total as f64).width(0.9)])
                    .horizontal()
                    .color(Color32::from_rgb(203, 123, 93)),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    #[test]
    fn counts_bin_by_month() {
        let mut a = record(2015, "CA", 1.0);
        a.discovery_month = 6;
        let mut b = record(2015, "CA", 1.0);
        b.discovery_month = 6;
        let mut c = record(2015, "TX", 1.0);
        c.discovery_month = 1;
        let ds = FireDataset::new(vec![a, b, c]);

        let data = build(&ds, &[0, 1, 2], 2015);
        assert_eq!(data.month_counts[5], 2);
        assert_eq!(data.month_counts[0], 1);
        assert_eq!(data.max_count, 2);
        assert_eq!(data.total, 3);
    }

    #[test]
    fn out_of_range_months_are_skipped() {
        let mut a = record(2015, "CA", 1.0);
        a.discovery_month = 13;
        let ds = FireDataset::new(vec![a]);
        let data = build(&ds, &[0], 2015);
        assert_eq!(data.total, 0);
    }

    #[test]
    fn empty_view_has_zero_bins() {
        let ds = FireDataset::new(vec![record(2015, "CA", 1.0)]);
        let data = build(&ds, &[], 1999);
        assert_eq!(data.month_counts, [0; 12]);
        assert_eq!(data.max_count, 0);
    }

    #[test]
    fn zero_max_count_still_has_a_cell_color() {
        // Empty cells blend at t = 0, never divide by zero.
        assert_eq!(cell_color(0, 0), Color32::from_rgb(40, 42, 54));
        assert_eq!(cell_color(5, 5), Color32::from_rgb(203, 123, 93));
    }
}
