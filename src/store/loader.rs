//! Reading expense data files
//!
//! Data files are read once and never written back. Two formats are accepted,
//! chosen by file extension:
//!
//! - `.json`: an array of records (`date`, `category`, `amount`, optional
//!   `timeStamp`/`time_of_day`, optional `currency`)
//! - `.csv`: a header row `date,category,amount,time_of_day,currency`

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{FintrixError, FintrixResult};
use crate::models::{ExpenseRecord, Money};

/// Largest amount a single record may carry
pub const MAX_RECORD_AMOUNT: Money = Money::from_units(1_000_000_000_000);

/// Supported data file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Csv,
}

impl DataFormat {
    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> FintrixResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(FintrixError::Validation(format!(
                "Unsupported data file {}: expected .json or .csv",
                path.display()
            ))),
        }
    }
}

/// Read and validate records from a data file
pub fn load_records(path: &Path) -> FintrixResult<Vec<ExpenseRecord>> {
    let format = DataFormat::from_path(path)?;
    let file = File::open(path)
        .map_err(|e| FintrixError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let records = read_records(BufReader::new(file), format)?;
    debug!(path = %path.display(), count = records.len(), "loaded expense records");
    Ok(records)
}

/// Parse and validate records from any reader
pub fn read_records<R: Read>(reader: R, format: DataFormat) -> FintrixResult<Vec<ExpenseRecord>> {
    let records: Vec<ExpenseRecord> = match format {
        DataFormat::Json => serde_json::from_reader(reader)?,
        DataFormat::Csv => {
            let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
            csv_reader
                .deserialize()
                .collect::<Result<Vec<ExpenseRecord>, csv::Error>>()?
        }
    };

    validate(&records)?;
    Ok(records)
}

/// Reject records the aggregation engine would otherwise sum blindly
fn validate(records: &[ExpenseRecord]) -> FintrixResult<()> {
    for (index, record) in records.iter().enumerate() {
        let position = index + 1;
        if record.amount.is_negative() {
            return Err(FintrixError::invalid_field(
                position,
                "amount",
                format!("{} is negative", record.amount),
            ));
        }
        if record.amount > MAX_RECORD_AMOUNT {
            return Err(FintrixError::invalid_field(
                position,
                "amount",
                format!("{} exceeds the maximum of {}", record.amount, MAX_RECORD_AMOUNT),
            ));
        }
        if record.category.trim().is_empty() {
            return Err(FintrixError::invalid_field(
                position,
                "category",
                "must not be empty",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_detect_format() {
        assert_eq!(DataFormat::from_path(Path::new("a.json")).unwrap(), DataFormat::Json);
        assert_eq!(DataFormat::from_path(Path::new("a.CSV")).unwrap(), DataFormat::Csv);
        assert!(DataFormat::from_path(Path::new("a.txt")).is_err());
        assert!(DataFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_read_json() {
        let json = r#"[
            {"date": "2025-01-05", "category": "food", "amount": 15, "timeStamp": "11:00AM", "currency": "$"},
            {"date": "2025-02-03", "category": "food", "amount": 10.5}
        ]"#;
        let records = read_records(json.as_bytes(), DataFormat::Json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].amount.cents(), 1050);
    }

    #[test]
    fn test_read_csv() {
        let csv = "date,category,amount,time_of_day,currency\n\
                   2025-01-05,food,15,11:00AM,$\n\
                   2025-01-12, transport ,40.25,08:30AM,€\n";
        let records = read_records(csv.as_bytes(), DataFormat::Csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].category, "transport");
        assert_eq!(records[1].amount.cents(), 4025);
        assert_eq!(records[1].currency, "€");
    }

    #[test]
    fn test_rejects_negative_amount() {
        let json = r#"[{"date": "2025-01-05", "category": "refund", "amount": -5}]"#;
        let err = read_records(json.as_bytes(), DataFormat::Json).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn test_rejects_oversized_amount() {
        let json = r#"[
            {"date": "2025-01-05", "category": "food", "amount": 50000000000000000},
            {"date": "2025-01-06", "category": "food", "amount": 50000000000000000}
        ]"#;
        let err = read_records(json.as_bytes(), DataFormat::Json).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("exceeds the maximum"));

        let json = r#"[{"date": "2025-01-05", "category": "food", "amount": 1000000000000}]"#;
        let records = read_records(json.as_bytes(), DataFormat::Json).unwrap();
        assert_eq!(records[0].amount, MAX_RECORD_AMOUNT);
    }

    #[test]
    fn test_rejects_bad_date() {
        let json = r#"[{"date": "05/01/2025", "category": "food", "amount": 5}]"#;
        let err = read_records(json.as_bytes(), DataFormat::Json).unwrap_err();
        assert!(matches!(err, FintrixError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let mut file = File::create(&path).unwrap();
        write!(file, r#"[{{"date": "2025-03-01", "category": "utilities", "amount": 95}}]"#).unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records[0].category, "utilities");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_records(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, FintrixError::Io(_)));
    }
}
