use super::model::FireDataset;

// ---------------------------------------------------------------------------
// Year filter
// ---------------------------------------------------------------------------

/// Return indices of records whose `discovery_year` equals `year` exactly.
///
/// Order-preserving, so a filtered view keeps the dataset's row order. An
/// empty result is valid; every downstream chart and the summary accept it.
pub fn filter_by_year(dataset: &FireDataset, year: i32) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.discovery_year == year)
        .map(|(i, _)| i)
        .collect()
}
