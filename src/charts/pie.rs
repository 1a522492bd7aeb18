use std::collections::BTreeMap;
use std::f64::consts::TAU;

use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Polygon};

use crate::color::ColorMap;
use crate::data::model::FireDataset;

// ---------------------------------------------------------------------------
// Pie: fires per state
// ---------------------------------------------------------------------------

/// One slice per state, weighted by record **count** (the pinned policy:
/// the original chart took only a names column, so slices are counts, not
/// fire-size totals). States in sorted order; angles in radians, clockwise
/// from 12 o'clock.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PieData {
    pub slices: Vec<PieSlice>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub state: String,
    pub count: usize,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

pub fn build(dataset: &FireDataset, indices: &[usize]) -> PieData {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for &i in indices {
        *counts.entry(dataset.records[i].state.clone()).or_default() += 1;
    }
    let total: usize = counts.values().sum();
    if total == 0 {
        return PieData::default();
    }

    let mut slices = Vec::with_capacity(counts.len());
    let mut cumulative = 0.0;
    for (state, count) in counts {
        let fraction = count as f64 / total as f64;
        let start_angle = TAU / 4.0 - TAU * cumulative;
        cumulative += fraction;
        let end_angle = TAU / 4.0 - TAU * cumulative;
        slices.push(PieSlice {
            state,
            count,
            fraction,
            start_angle,
            end_angle,
        });
    }
    PieData { slices, total }
}

/// Wedge outline for a slice: unit-circle arc plus the centre point.
pub fn wedge_points(slice: &PieSlice) -> Vec<[f64; 2]> {
    // Sample the arc finely enough that even thin slices get a few segments.
    let sweep = slice.start_angle - slice.end_angle;
    let steps = ((sweep / 0.05).ceil() as usize).max(2);
    let mut ring = vec![[0.0, 0.0]];
    for k in 0..=steps {
        let a = slice.start_angle - sweep * k as f64 / steps as f64;
        ring.push([a.cos(), a.sin()]);
    }
    ring
}

pub fn draw(ui: &mut Ui, data: &PieData) {
    let colors = ColorMap::new(data.slices.iter().map(|s| s.state.clone()));

    Plot::new("pie_chart")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .height(320.0)
        .show(ui, |plot_ui| {
            for slice in &data.slices {
                let label = format!(
                    "{} — {} ({:.1}%)",
                    slice.state,
                    slice.count,
                    slice.fraction * 100.0
                );
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(wedge_points(slice)))
                        .fill_color(colors.color_for(&slice.state))
                        .name(label),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    #[test]
    fn slices_count_records_per_state() {
        let ds = FireDataset::new(vec![
            record(2015, "CA", 10.0),
            record(2015, "CA", 5.0),
            record(2015, "TX", 20.0),
        ]);
        let data = build(&ds, &[0, 1, 2]);
        assert_eq!(data.total, 3);
        assert_eq!(data.slices.len(), 2);
        assert_eq!(data.slices[0].state, "CA");
        assert_eq!(data.slices[0].count, 2);
        assert!((data.slices[0].fraction - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn fractions_sum_to_one_and_angles_are_contiguous() {
        let ds = FireDataset::new(vec![
            record(2015, "CA", 1.0),
            record(2015, "OR", 1.0),
            record(2015, "TX", 1.0),
            record(2015, "TX", 1.0),
        ]);
        let data = build(&ds, &[0, 1, 2, 3]);
        let sum: f64 = data.slices.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        for pair in data.slices.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-12);
        }
        let last = data.slices.last().unwrap();
        assert!((data.slices[0].start_angle - last.end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn empty_view_builds_an_empty_pie() {
        let ds = FireDataset::new(vec![record(2015, "CA", 1.0)]);
        let data = build(&ds, &[]);
        assert!(data.slices.is_empty());
        assert_eq!(data.total, 0);
    }

    #[test]
    fn wedges_stay_on_the_unit_circle() {
        let ds = FireDataset::new(vec![record(2015, "CA", 1.0), record(2015, "TX", 1.0)]);
        let data = build(&ds, &[0, 1]);
        for slice in &data.slices {
            for p in wedge_points(slice).iter().skip(1) {
                let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
                assert!((r - 1.0).abs() < 1e-9);
            }
        }
    }
}
