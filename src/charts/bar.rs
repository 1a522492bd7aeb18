use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::data::model::FireDataset;

// ---------------------------------------------------------------------------
// Bar chart: total fire size per state
// ---------------------------------------------------------------------------

/// One bar per state present in the filtered rows, in sorted state order.
///
/// Aggregation policy: a state with multiple rows gets the **sum** of its
/// `fire_size` values. This is pinned here rather than inherited from any
/// charting default.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BarData {
    pub bars: Vec<(String, f64)>,
}

pub fn build(dataset: &FireDataset, indices: &[usize]) -> BarData {
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for &i in indices {
        let r = &dataset.records[i];
        *sums.entry(r.state.clone()).or_default() += r.fire_size;
    }
    BarData {
        bars: sums.into_iter().collect(),
    }
}

pub fn draw(ui: &mut Ui, data: &BarData) {
    let bars: Vec<Bar> = data
        .bars
        .iter()
        .enumerate()
        .map(|(i, (state, total))| Bar::new(i as f64, *total).name(state).width(0.6))
        .collect();

    let labels: Vec<String> = data.bars.iter().map(|(s, _)| s.clone()).collect();

    Plot::new("bar_chart")
        .legend(Legend::default())
        .x_axis_label("state")
        .y_axis_label("fire_size")
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round() as i64;
            if (mark.value - i as f64).abs() < 1e-6 && (0..labels.len() as i64).contains(&i) {
                labels[i as usize].clone()
            } else {
                String::new()
            }
        })
        .height(320.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter_by_year;
    use crate::data::model::tests::record;

    #[test]
    fn repeated_states_sum_their_fire_sizes() {
        // The documented aggregation policy: CA appears twice in 2015,
        // so its bar carries 10 + 5 = 15.
        let ds = FireDataset::new(vec![
            record(2015, "CA", 10.0),
            record(2015, "CA", 5.0),
            record(2016, "TX", 20.0),
        ]);
        let data = build(&ds, &filter_by_year(&ds, 2015));
        assert_eq!(data.bars, vec![("CA".to_string(), 15.0)]);
    }

    #[test]
    fn states_appear_in_sorted_order() {
        let ds = FireDataset::new(vec![
            record(2015, "TX", 1.0),
            record(2015, "CA", 2.0),
            record(2015, "OR", 3.0),
        ]);
        let data = build(&ds, &[0, 1, 2]);
        let states: Vec<&str> = data.bars.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(states, vec!["CA", "OR", "TX"]);
    }

    #[test]
    fn empty_view_builds_an_empty_chart() {
        let ds = FireDataset::new(vec![record(2015, "CA", 10.0)]);
        assert!(build(&ds, &[]).bars.is_empty());
    }
}
