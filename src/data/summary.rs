use super::model::{FireDataset, NumericColumn};

// ---------------------------------------------------------------------------
// Descriptive statistics (the "describe" table)
// ---------------------------------------------------------------------------

/// Descriptive statistics for one numeric column of a filtered view.
///
/// `count` counts non-null cells only; every other field is `None` when no
/// value exists to compute it from (empty view, or all cells null). `std` is
/// the sample standard deviation (n − 1) and is `None` for fewer than two
/// values.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: NumericColumn,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub median: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Summarize every numeric column over the filtered view given by `indices`.
pub fn summarize(dataset: &FireDataset, indices: &[usize]) -> Vec<ColumnSummary> {
    NumericColumn::ALL
        .iter()
        .map(|&column| {
            let mut values: Vec<f64> = indices
                .iter()
                .filter_map(|&i| column.value(&dataset.records[i]))
                .collect();
            values.sort_by(f64::total_cmp);
            summarize_column(column, &values)
        })
        .collect()
}

/// Stats over a column's non-null values, which must be sorted ascending.
fn summarize_column(column: NumericColumn, sorted: &[f64]) -> ColumnSummary {
    let count = sorted.len();
    let mean = (count > 0).then(|| sorted.iter().sum::<f64>() / count as f64);
    let std = mean.filter(|_| count > 1).map(|m| {
        let ss: f64 = sorted.iter().map(|v| (v - m) * (v - m)).sum();
        (ss / (count - 1) as f64).sqrt()
    });

    ColumnSummary {
        column,
        count,
        mean,
        std,
        min: sorted.first().copied(),
        q25: quantile(sorted, 0.25),
        median: quantile(sorted, 0.5),
        q75: quantile(sorted, 0.75),
        max: sorted.last().copied(),
    }
}

/// Linear-interpolation quantile over sorted values (`q` in `[0, 1]`).
/// Shared with the violin chart's box overlay.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filter_by_year;
    use crate::data::model::tests::record;
    use crate::data::model::FireDataset;

    fn summary_for(
        dataset: &FireDataset,
        indices: &[usize],
        column: NumericColumn,
    ) -> ColumnSummary {
        summarize(dataset, indices)
            .into_iter()
            .find(|s| s.column == column)
            .unwrap()
    }

    #[test]
    fn single_row_view_has_count_one_and_exact_mean() {
        let ds = FireDataset::new(vec![
            record(2015, "CA", 10.0),
            record(2015, "CA", 5.0),
            record(2016, "TX", 20.0),
        ]);
        let view = filter_by_year(&ds, 2016);
        let s = summary_for(&ds, &view, NumericColumn::FireSize);
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, Some(20.0));
        assert_eq!(s.min, Some(20.0));
        assert_eq!(s.max, Some(20.0));
        assert_eq!(s.std, None);
    }

    #[test]
    fn quartiles_interpolate_linearly() {
        let ds = FireDataset::new(vec![
            record(2015, "CA", 1.0),
            record(2015, "CA", 2.0),
            record(2015, "CA", 3.0),
            record(2015, "CA", 4.0),
        ]);
        let view = filter_by_year(&ds, 2015);
        let s = summary_for(&ds, &view, NumericColumn::FireSize);
        assert_eq!(s.q25, Some(1.75));
        assert_eq!(s.median, Some(2.5));
        assert_eq!(s.q75, Some(3.25));
    }

    #[test]
    fn sample_std_uses_n_minus_one() {
        let ds = FireDataset::new(vec![record(2015, "CA", 10.0), record(2015, "CA", 14.0)]);
        let s = summary_for(&ds, &[0, 1], NumericColumn::FireSize);
        // variance = ((10-12)^2 + (14-12)^2) / 1 = 8
        assert!((s.std.unwrap() - 8.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_view_summarizes_without_failing() {
        let ds = FireDataset::new(vec![record(2015, "CA", 10.0)]);
        for s in summarize(&ds, &[]) {
            assert_eq!(s.count, 0);
            assert_eq!(s.mean, None);
            assert_eq!(s.min, None);
        }
    }

    #[test]
    fn null_covariates_are_excluded_from_count() {
        let mut a = record(2015, "CA", 10.0);
        a.temp_cont = None;
        let b = record(2015, "CA", 5.0);
        let ds = FireDataset::new(vec![a, b]);
        let s = summary_for(&ds, &[0, 1], NumericColumn::TempCont);
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, Some(20.0));
    }
}
