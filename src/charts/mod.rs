/// Chart builders: pure functions from a filtered view to plot-ready data.
///
/// Each chart kind lives in its own module with a `build` step (testable,
/// no UI types beyond colours) and a `draw` step (egui_plot). The dashboard
/// dispatches through [`render`]; the export helper consumes the same
/// [`ChartData`] values, so the live plot and the exported PNG agree.

pub mod bar;
pub mod heatmap;
pub mod pie;
pub mod regression;
pub mod scatter;
pub mod violin;

use thiserror::Error;

use crate::data::model::FireDataset;

// ---------------------------------------------------------------------------
// Chart kinds and the selection variant
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Scatter,
    Violin,
    Heatmap,
    Pie,
    Regression,
}

impl ChartKind {
    /// All kinds, in the fixed order used by the "All" selection.
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Bar,
        ChartKind::Scatter,
        ChartKind::Violin,
        ChartKind::Heatmap,
        ChartKind::Pie,
        ChartKind::Regression,
    ];

    /// Sidebar / subheading label.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::Violin => "Violin Plot",
            ChartKind::Heatmap => "Heatmap",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Regression => "Linear Regression",
        }
    }

    /// Deterministic file stem for the exported PNG.
    pub fn file_stem(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar_chart",
            ChartKind::Scatter => "scatter_plot",
            ChartKind::Violin => "violin_plot",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Pie => "pie_chart",
            ChartKind::Regression => "linear_regression",
        }
    }

    /// Chart title; the year is the only dynamic part.
    pub fn title(self, year: i32) -> String {
        match self {
            ChartKind::Bar => format!("Fire Size by State in {year}"),
            ChartKind::Scatter => format!("Scatter Plot in {year}"),
            ChartKind::Violin => format!("Violin Plot of Fire Size in {year}"),
            ChartKind::Heatmap => {
                format!("Heatmap of Fire Discoveries Over Months and Years in {year}")
            }
            ChartKind::Pie => format!("Distribution of Fires by State in {year}"),
            ChartKind::Regression => format!("Linear Regression in {year}"),
        }
    }
}

/// The sidebar selection: one chart, or all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartChoice {
    #[default]
    All,
    Single(ChartKind),
}

impl ChartChoice {
    /// The chart kinds this choice expands to, in render order.
    pub fn kinds(self) -> Vec<ChartKind> {
        match self {
            ChartChoice::All => ChartKind::ALL.to_vec(),
            ChartChoice::Single(kind) => vec![kind],
        }
    }
}

// ---------------------------------------------------------------------------
// Errors and the artifact type
// ---------------------------------------------------------------------------

/// Non-fatal chart build failure, reported inline for the affected chart
/// while the rest of the page still renders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("insufficient data for linear regression: {0}")]
    InsufficientData(String),
}

/// A built chart, ready for the live plot or the PNG exporter.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Bar(bar::BarData),
    Scatter(scatter::ScatterData),
    Violin(violin::ViolinData),
    Heatmap(heatmap::HeatmapData),
    Pie(pie::PieData),
    Regression(regression::RegressionData),
}

impl ChartData {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartData::Bar(_) => ChartKind::Bar,
            ChartData::Scatter(_) => ChartKind::Scatter,
            ChartData::Violin(_) => ChartKind::Violin,
            ChartData::Heatmap(_) => ChartKind::Heatmap,
            ChartData::Pie(_) => ChartKind::Pie,
            ChartData::Regression(_) => ChartKind::Regression,
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Build one chart over the filtered view given by `indices`.
///
/// Every kind except regression accepts an empty view and produces a blank
/// artifact; regression needs at least two usable rows.
pub fn build(
    kind: ChartKind,
    dataset: &FireDataset,
    indices: &[usize],
    year: i32,
) -> Result<ChartData, ChartError> {
    match kind {
        ChartKind::Bar => Ok(ChartData::Bar(bar::build(dataset, indices))),
        ChartKind::Scatter => Ok(ChartData::Scatter(scatter::build(dataset, indices))),
        ChartKind::Violin => Ok(ChartData::Violin(violin::build(dataset, indices))),
        ChartKind::Heatmap => Ok(ChartData::Heatmap(heatmap::build(dataset, indices, year))),
        ChartKind::Pie => Ok(ChartData::Pie(pie::build(dataset, indices))),
        ChartKind::Regression => {
            regression::build(dataset, indices).map(ChartData::Regression)
        }
    }
}

/// Build every chart the current selection asks for, in render order.
/// A failed chart never aborts the others.
pub fn render(
    choice: ChartChoice,
    dataset: &FireDataset,
    indices: &[usize],
    year: i32,
) -> Vec<(ChartKind, Result<ChartData, ChartError>)> {
    choice
        .kinds()
        .into_iter()
        .map(|kind| (kind, build(kind, dataset, indices, year)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter_by_year;
    use crate::data::model::tests::record;
    use crate::data::model::FireDataset;

    #[test]
    fn all_choice_yields_six_charts_in_fixed_order() {
        let ds = FireDataset::new(vec![record(2015, "CA", 10.0), record(2015, "CA", 5.0)]);
        let view = filter_by_year(&ds, 2015);
        let artifacts = render(ChartChoice::All, &ds, &view, 2015);

        let kinds: Vec<ChartKind> = artifacts.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, ChartKind::ALL.to_vec());
        for (kind, result) in &artifacts {
            assert!(result.is_ok(), "{kind:?} failed on a non-empty view");
            assert_eq!(result.as_ref().unwrap().kind(), *kind);
        }
    }

    #[test]
    fn single_choice_yields_exactly_one_chart() {
        let ds = FireDataset::new(vec![record(2015, "CA", 10.0)]);
        let artifacts = render(ChartChoice::Single(ChartKind::Pie), &ds, &[0], 2015);
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].0, ChartKind::Pie);
    }

    #[test]
    fn empty_view_builds_blank_artifacts_except_regression() {
        let ds = FireDataset::new(vec![record(2015, "CA", 10.0)]);
        let empty: Vec<usize> = Vec::new();
        for kind in ChartKind::ALL {
            let result = build(kind, &ds, &empty, 1999);
            match kind {
                ChartKind::Regression => {
                    assert!(matches!(result, Err(ChartError::InsufficientData(_))))
                }
                _ => assert!(result.is_ok(), "{kind:?} failed on an empty view"),
            }
        }
    }

    #[test]
    fn failed_regression_does_not_abort_all_mode() {
        // One row: regression is undefined, everything else still builds.
        let ds = FireDataset::new(vec![record(2015, "CA", 10.0)]);
        let artifacts = render(ChartChoice::All, &ds, &[0], 2015);
        assert_eq!(artifacts.len(), 6);
        let failures: Vec<ChartKind> = artifacts
            .iter()
            .filter(|(_, r)| r.is_err())
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(failures, vec![ChartKind::Regression]);
    }

    #[test]
    fn export_file_stems_are_the_documented_names() {
        let stems: Vec<&str> = ChartKind::ALL.iter().map(|k| k.file_stem()).collect();
        assert_eq!(
            stems,
            vec![
                "bar_chart",
                "scatter_plot",
                "violin_plot",
                "heatmap",
                "pie_chart",
                "linear_regression"
            ]
        );
    }
}
