use crate::charts::ChartChoice;
use crate::data::filter::filter_by_year;
use crate::data::model::FireDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once at startup and never mutated; user interaction
/// only changes the selection fields and the cached filtered indices.
pub struct AppState {
    /// Loaded dataset, read-only for the session.
    pub dataset: FireDataset,

    /// Current chart selection.
    pub chart_choice: ChartChoice,

    /// Selected discovery year.
    pub year: i32,

    /// `(min, max)` discovery year of the dataset; `None` when it is empty
    /// (the "no data" condition, in which the year selector is not shown).
    pub year_range: Option<(i32, i32)>,

    /// Indices of records matching the selected year (cached).
    pub visible_indices: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state: year bounds from the dataset, default year
    /// at the minimum, filtered view cached.
    pub fn new(dataset: FireDataset) -> Self {
        let year_range = dataset.year_range();
        let year = year_range.map(|(min, _)| min).unwrap_or_default();
        let mut state = AppState {
            dataset,
            chart_choice: ChartChoice::default(),
            year,
            year_range,
            visible_indices: Vec::new(),
            status_message: None,
        };
        state.refilter();
        state
    }

    /// Recompute `visible_indices` from the current year.
    pub fn refilter(&mut self) {
        self.visible_indices = filter_by_year(&self.dataset, self.year);
    }

    /// Change the selected year and refilter.
    pub fn set_year(&mut self, year: i32) {
        if self.year != year {
            self.year = year;
            self.refilter();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    #[test]
    fn default_year_is_the_dataset_minimum() {
        let state = AppState::new(FireDataset::new(vec![
            record(2016, "TX", 20.0),
            record(2013, "CA", 10.0),
        ]));
        assert_eq!(state.year_range, Some((2013, 2016)));
        assert_eq!(state.year, 2013);
        assert_eq!(state.visible_indices, vec![1]);
    }

    #[test]
    fn visible_rows_always_match_the_selected_year() {
        let mut state = AppState::new(FireDataset::new(vec![
            record(2015, "CA", 10.0),
            record(2016, "TX", 20.0),
            record(2015, "OR", 5.0),
        ]));
        state.set_year(2016);
        for &i in &state.visible_indices {
            assert_eq!(state.dataset.records[i].discovery_year, state.year);
        }
        assert_eq!(state.visible_indices, vec![1]);
    }

    #[test]
    fn empty_dataset_degrades_to_the_no_data_state() {
        let state = AppState::new(FireDataset::default());
        assert_eq!(state.year_range, None);
        assert!(state.visible_indices.is_empty());
    }
}
