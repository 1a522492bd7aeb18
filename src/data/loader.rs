use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{FireDataset, FireRecord, REQUIRED_COLUMNS};

// ---------------------------------------------------------------------------
// Startup CSV load
// ---------------------------------------------------------------------------

/// Load the wildfire dataset from a CSV file.
///
/// The header is validated before any row is parsed: every column in
/// [`REQUIRED_COLUMNS`] must be present, otherwise this fails immediately
/// with a message listing the missing columns. Extra columns are ignored.
/// Empty cells in the `*_cont` covariate columns become `None`; any other
/// malformed cell fails with the offending row number.
pub fn load_csv(path: &Path) -> Result<FireDataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening dataset {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == col))
        .collect();
    if !missing.is_empty() {
        bail!(
            "dataset {} is missing required column(s): {}",
            path.display(),
            missing.join(", ")
        );
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<FireRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        records.push(record);
    }

    Ok(FireDataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "discovery_year,state,fire_size,fire_size_class,\
longitude,latitude,discovery_month,Temp_cont,Wind_cont,Hum_cont";

    fn write_csv(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        write!(file, "{body}").unwrap();
        file
    }

    #[test]
    fn loads_rows_with_nullable_covariates() {
        let file = write_csv(
            "2015,CA,10.5,B,-120.1,38.2,6,21.5,3.1,40.0\n\
             2016,TX,20.0,C,-98.0,31.0,7,,,\n",
        );
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].state, "CA");
        assert_eq!(ds.records[0].temp_cont, Some(21.5));
        assert_eq!(ds.records[1].temp_cont, None);
        assert_eq!(ds.records[1].hum_cont, None);
    }

    #[test]
    fn missing_columns_fail_at_startup() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "discovery_year,state,fire_size").unwrap();
        writeln!(file, "2015,CA,10.5").unwrap();

        let err = load_csv(file.path()).unwrap_err().to_string();
        assert!(err.contains("missing required column"), "{err}");
        assert!(err.contains("Temp_cont"), "{err}");
    }

    #[test]
    fn malformed_row_reports_row_number() {
        let file = write_csv("2015,CA,not-a-number,B,-120.1,38.2,6,21.5,3.1,40.0\n");
        let err = format!("{:#}", load_csv(file.path()).unwrap_err());
        assert!(err.contains("CSV row 1"), "{err}");
    }

    #[test]
    fn unreadable_path_is_an_error() {
        assert!(load_csv(Path::new("/nonexistent/fires.csv")).is_err());
    }
}
