use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no rows")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct PlacementRecord {
    cgpa: f64,
    iq: f64,
    placement: u8,
}

/// Aggregate statistics over the placement dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub total_students: u64,
    pub placed_students: u64,
    pub placement_rate: f64,
    pub avg_cgpa: f64,
    pub avg_iq: f64,
    pub data_source: String,
}

impl DatasetSummary {
    /// Fixed figures served when no dataset could be loaded.
    pub fn demo() -> Self {
        Self {
            total_students: 100,
            placed_students: 65,
            placement_rate: 65.0,
            avg_cgpa: 7.2,
            avg_iq: 128.5,
            data_source: "demo".into(),
        }
    }

    pub fn is_demo(&self) -> bool {
        self.data_source == "demo"
    }

    /// Load from a CSV file with `cgpa`, `iq`, `placement` headers.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let reader = csv::Reader::from_path(path)?;
        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        summarize(reader, source)
    }

    pub fn from_reader<R: Read>(rdr: R, source: impl Into<String>) -> Result<Self, DatasetError> {
        summarize(csv::Reader::from_reader(rdr), source.into())
    }
}

fn summarize<R: Read>(mut reader: csv::Reader<R>, source: String) -> Result<DatasetSummary, DatasetError> {
    let mut total: u64 = 0;
    let mut placed: u64 = 0;
    let mut cgpa_sum = 0.0;
    let mut iq_sum = 0.0;

    for record in reader.deserialize::<PlacementRecord>() {
        let record = record?;
        total += 1;
        if record.placement == 1 {
            placed += 1;
        }
        cgpa_sum += record.cgpa;
        iq_sum += record.iq;
    }

    if total == 0 {
        return Err(DatasetError::Empty);
    }

    let n = total as f64;
    Ok(DatasetSummary {
        total_students: total,
        placed_students: placed,
        placement_rate: round2(placed as f64 / n * 100.0),
        avg_cgpa: round2(cgpa_sum / n),
        avg_iq: round2(iq_sum / n),
        data_source: source,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_csv() {
        let data = "\
,cgpa,iq,placement
0,6.8,123,1
1,5.9,106,0
2,5.3,121,0
3,7.4,132,1
";
        let summary = DatasetSummary::from_reader(data.as_bytes(), "placement.csv").unwrap();
        assert_eq!(summary.total_students, 4);
        assert_eq!(summary.placed_students, 2);
        assert_eq!(summary.placement_rate, 50.0);
        assert_eq!(summary.avg_cgpa, 6.35);
        assert_eq!(summary.avg_iq, 120.5);
        assert_eq!(summary.data_source, "placement.csv");
        assert!(!summary.is_demo());
    }

    #[test]
    fn test_rates_rounded_to_two_places() {
        let data = "cgpa,iq,placement\n7,120,1\n7,120,0\n7,120,0\n";
        let summary = DatasetSummary::from_reader(data.as_bytes(), "x.csv").unwrap();
        assert_eq!(summary.placement_rate, 33.33);
    }

    #[test]
    fn test_empty_dataset_is_error() {
        let data = "cgpa,iq,placement\n";
        assert!(matches!(
            DatasetSummary::from_reader(data.as_bytes(), "x.csv"),
            Err(DatasetError::Empty)
        ));
    }

    #[test]
    fn test_malformed_row_is_error() {
        let data = "cgpa,iq,placement\nhigh,120,1\n";
        assert!(matches!(
            DatasetSummary::from_reader(data.as_bytes(), "x.csv"),
            Err(DatasetError::Csv(_))
        ));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(DatasetSummary::from_path(Path::new("/no/such/placement.csv")).is_err());
    }
}
