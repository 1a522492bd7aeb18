use serde::Deserialize;

// ---------------------------------------------------------------------------
// FireRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single wildfire record (one row of the source CSV).
///
/// The three `*_cont` weather covariates are nullable in the source data,
/// hence `Option<f64>`.
#[derive(Debug, Clone, Deserialize)]
pub struct FireRecord {
    pub discovery_year: i32,
    pub state: String,
    pub fire_size: f64,
    pub fire_size_class: String,
    pub longitude: f64,
    pub latitude: f64,
    pub discovery_month: u32,
    #[serde(rename = "Temp_cont")]
    pub temp_cont: Option<f64>,
    #[serde(rename = "Wind_cont")]
    pub wind_cont: Option<f64>,
    #[serde(rename = "Hum_cont")]
    pub hum_cont: Option<f64>,
}

/// Column names that must be present in the input CSV header.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "discovery_year",
    "state",
    "fire_size",
    "fire_size_class",
    "longitude",
    "latitude",
    "discovery_month",
    "Temp_cont",
    "Wind_cont",
    "Hum_cont",
];

// ---------------------------------------------------------------------------
// FireDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Loaded once at startup, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FireDataset {
    pub records: Vec<FireRecord>,
}

impl FireDataset {
    pub fn new(records: Vec<FireRecord>) -> Self {
        FireDataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(min, max)` of `discovery_year`, or `None` for an empty dataset.
    ///
    /// The `None` case is the user-visible "no data" condition; the year
    /// selector must not be shown without a valid range.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().map(|r| r.discovery_year);
        let first = years.next()?;
        let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
        Some((min, max))
    }
}

// ---------------------------------------------------------------------------
// Numeric columns – used by the summary table
// ---------------------------------------------------------------------------

/// The numeric columns of the dataset, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    DiscoveryYear,
    FireSize,
    Longitude,
    Latitude,
    DiscoveryMonth,
    TempCont,
    WindCont,
    HumCont,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 8] = [
        NumericColumn::DiscoveryYear,
        NumericColumn::FireSize,
        NumericColumn::Longitude,
        NumericColumn::Latitude,
        NumericColumn::DiscoveryMonth,
        NumericColumn::TempCont,
        NumericColumn::WindCont,
        NumericColumn::HumCont,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::DiscoveryYear => "discovery_year",
            NumericColumn::FireSize => "fire_size",
            NumericColumn::Longitude => "longitude",
            NumericColumn::Latitude => "latitude",
            NumericColumn::DiscoveryMonth => "discovery_month",
            NumericColumn::TempCont => "Temp_cont",
            NumericColumn::WindCont => "Wind_cont",
            NumericColumn::HumCont => "Hum_cont",
        }
    }

    /// The column's value for a record, `None` where the cell is null.
    pub fn value(self, record: &FireRecord) -> Option<f64> {
        match self {
            NumericColumn::DiscoveryYear => Some(record.discovery_year as f64),
            NumericColumn::FireSize => Some(record.fire_size),
            NumericColumn::Longitude => Some(record.longitude),
            NumericColumn::Latitude => Some(record.latitude),
            NumericColumn::DiscoveryMonth => Some(record.discovery_month as f64),
            NumericColumn::TempCont => record.temp_cont,
            NumericColumn::WindCont => record.wind_cont,
            NumericColumn::HumCont => record.hum_cont,
        }
    }
}
