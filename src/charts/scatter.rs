use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::model::FireDataset;

// ---------------------------------------------------------------------------
// Scatter: fire locations, coloured by size class, sized by fire size
// ---------------------------------------------------------------------------

/// One point per record at (longitude, latitude), grouped by
/// `fire_size_class` for colouring; groups in sorted class order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScatterData {
    pub groups: Vec<ScatterGroup>,
    /// Largest fire size in the view, for marker-radius scaling.
    pub max_fire_size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGroup {
    pub class: String,
    /// (longitude, latitude, fire_size) per record.
    pub points: Vec<[f64; 3]>,
}

pub fn build(dataset: &FireDataset, indices: &[usize]) -> ScatterData {
    let mut by_class: BTreeMap<String, Vec<[f64; 3]>> = BTreeMap::new();
    let mut max_fire_size: f64 = 0.0;
    for &i in indices {
        let r = &dataset.records[i];
        max_fire_size = max_fire_size.max(r.fire_size);
        by_class
            .entry(r.fire_size_class.clone())
            .or_default()
            .push([r.longitude, r.latitude, r.fire_size]);
    }
    ScatterData {
        groups: by_class
            .into_iter()
            .map(|(class, points)| ScatterGroup { class, points })
            .collect(),
        max_fire_size,
    }
}

/// Marker radius in points for a fire size, area-proportional.
pub fn marker_radius(fire_size: f64, max_fire_size: f64) -> f32 {
    if max_fire_size <= 0.0 {
        return 2.0;
    }
    2.0 + 8.0 * ((fire_size / max_fire_size).clamp(0.0, 1.0).sqrt() as f32)
}

pub fn draw(ui: &mut Ui, data: &ScatterData) {
    let colors = ColorMap::new(data.groups.iter().map(|g| g.class.clone()));

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label("longitude")
        .y_axis_label("latitude")
        .height(320.0)
        .show(ui, |plot_ui| {
            for group in &data.groups {
                let color = colors.color_for(&group.class);
                // One Points element per record: egui_plot radii are
                // per-element, and the radius encodes fire_size.
                for p in &group.points {
                    let points: PlotPoints = vec![[p[0], p[1]]].into();
                    plot_ui.points(
                        Points::new(points)
                            .name(&group.class)
                            .color(color)
                            .radius(marker_radius(p[2], data.max_fire_size)),
                    );
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    #[test]
    fn points_group_by_size_class_in_sorted_order() {
        let mut a = record(2015, "CA", 10.0);
        a.fire_size_class = "C".into();
        let mut b = record(2015, "CA", 5.0);
        b.fire_size_class = "A".into();
        let mut c = record(2015, "TX", 1.0);
        c.fire_size_class = "C".into();
        let ds = FireDataset::new(vec![a, b, c]);

        let data = build(&ds, &[0, 1, 2]);
        let classes: Vec<&str> = data.groups.iter().map(|g| g.class.as_str()).collect();
        assert_eq!(classes, vec!["A", "C"]);
        assert_eq!(data.groups[1].points.len(), 2);
        assert_eq!(data.max_fire_size, 10.0);
    }

    #[test]
    fn radius_grows_with_fire_size() {
        assert!(marker_radius(100.0, 100.0) > marker_radius(1.0, 100.0));
        // Degenerate scale still yields a drawable radius.
        assert!(marker_radius(0.0, 0.0) > 0.0);
    }
}
