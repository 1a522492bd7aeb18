use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use super::ChartError;
use crate::data::model::FireDataset;

// ---------------------------------------------------------------------------
// Linear regression: fire size vs. temperature with an OLS trend line
// ---------------------------------------------------------------------------

/// Scatter of (`Temp_cont`, `fire_size`) with a single-variable OLS trend
/// line fitted on `Temp_cont` alone, matching the trend line the original
/// dashboard displayed. Rows with a null temperature are excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionData {
    /// (temperature, fire_size) per usable record.
    pub points: Vec<[f64; 2]>,
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionData {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit `fire_size ~ Temp_cont` over the filtered view.
///
/// Errors with [`ChartError::InsufficientData`] when fewer than two rows
/// carry a temperature (OLS undefined, including the empty view and the
/// all-null column) or when the temperatures have no variation.
pub fn build(dataset: &FireDataset, indices: &[usize]) -> Result<RegressionData, ChartError> {
    let points: Vec<[f64; 2]> = indices
        .iter()
        .filter_map(|&i| {
            let r = &dataset.records[i];
            r.temp_cont.map(|t| [t, r.fire_size])
        })
        .collect();

    if points.len() < 2 {
        return Err(ChartError::InsufficientData(format!(
            "{} row(s) with a temperature value, need at least 2",
            points.len()
        )));
    }

    let n = points.len() as f64;
    let x_mean = points.iter().map(|p| p[0]).sum::<f64>() / n;
    let y_mean = points.iter().map(|p| p[1]).sum::<f64>() / n;
    let sxx: f64 = points.iter().map(|p| (p[0] - x_mean) * (p[0] - x_mean)).sum();
    if sxx <= 0.0 {
        return Err(ChartError::InsufficientData(
            "temperature values are all identical".to_string(),
        ));
    }
    let sxy: f64 = points
        .iter()
        .map(|p| (p[0] - x_mean) * (p[1] - y_mean))
        .sum();

    let slope = sxy / sxx;
    Ok(RegressionData {
        intercept: y_mean - slope * x_mean,
        slope,
        points,
    })
}

pub fn draw(ui: &mut Ui, data: &RegressionData) {
    let x_min = data.points.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
    let x_max = data.points.iter().map(|p| p[0]).fold(f64::NEG_INFINITY, f64::max);

    Plot::new("linear_regression")
        .legend(Legend::default())
        .x_axis_label("Temperature (Cont.)")
        .y_axis_label("Fire Size")
        .height(320.0)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(PlotPoints::from(data.points.clone()))
                    .radius(2.5)
                    .name("fires"),
            );
            let trend: PlotPoints =
                vec![[x_min, data.predict(x_min)], [x_max, data.predict(x_max)]].into();
            plot_ui.line(
                Line::new(trend)
                    .color(Color32::RED)
                    .width(2.0)
                    .name("OLS trend"),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn with_temp(temp: Option<f64>, fire_size: f64) -> crate::data::model::FireRecord {
        let mut r = record(2015, "CA", fire_size);
        r.temp_cont = temp;
        r
    }

    #[test]
    fn recovers_an_exact_linear_relationship() {
        // fire_size = 2·temp + 1
        let ds = FireDataset::new(vec![
            with_temp(Some(10.0), 21.0),
            with_temp(Some(20.0), 41.0),
            with_temp(Some(30.0), 61.0),
        ]);
        let fit = build(&ds, &[0, 1, 2]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.predict(25.0) - 51.0).abs() < 1e-12);
    }

    #[test]
    fn single_row_is_insufficient() {
        let ds = FireDataset::new(vec![with_temp(Some(10.0), 5.0)]);
        assert!(matches!(
            build(&ds, &[0]),
            Err(ChartError::InsufficientData(_))
        ));
    }

    #[test]
    fn all_null_temperatures_are_insufficient() {
        let ds = FireDataset::new(vec![
            with_temp(None, 5.0),
            with_temp(None, 6.0),
            with_temp(None, 7.0),
        ]);
        assert!(build(&ds, &[0, 1, 2]).is_err());
    }

    #[test]
    fn constant_temperature_is_degenerate() {
        let ds = FireDataset::new(vec![with_temp(Some(10.0), 5.0), with_temp(Some(10.0), 9.0)]);
        assert!(matches!(
            build(&ds, &[0, 1]),
            Err(ChartError::InsufficientData(_))
        ));
    }

    #[test]
    fn null_rows_are_excluded_from_the_fit() {
        let ds = FireDataset::new(vec![
            with_temp(Some(0.0), 0.0),
            with_temp(None, 999.0),
            with_temp(Some(10.0), 10.0),
        ]);
        let fit = build(&ds, &[0, 1, 2]).unwrap();
        assert_eq!(fit.points.len(), 2);
        assert!((fit.slope - 1.0).abs() < 1e-12);
    }
}
