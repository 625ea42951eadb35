//! CSV loader
//!
//! Reads the launch CSV into a [`LaunchTable`]. The four required columns are
//! located by header name; every other column is carried through untouched.

use std::io::Read;
use std::path::Path;

use super::error::{DataLoadError, DataResult};
use super::types::{LaunchRecord, LaunchTable, Outcome};

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

/// Column indices resolved from the header row
struct ColumnMap {
    site: usize,
    payload: usize,
    booster: usize,
    class: usize,
    extra: Vec<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> DataResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DataLoadError::MissingColumn(name.to_string()))
        };

        let site = find(COL_LAUNCH_SITE)?;
        let payload = find(COL_PAYLOAD_MASS)?;
        let booster = find(COL_BOOSTER_CATEGORY)?;
        let class = find(COL_CLASS)?;

        let required = [site, payload, booster, class];
        let extra = (0..headers.len())
            .filter(|idx| !required.contains(idx))
            .collect();

        Ok(Self {
            site,
            payload,
            booster,
            class,
            extra,
        })
    }
}

/// Load the launch table from a CSV file
pub fn load(path: &Path) -> DataResult<LaunchTable> {
    let file = std::fs::File::open(path)?;
    let table = load_from_reader(file)?;

    tracing::info!(
        path = %path.display(),
        rows = table.len(),
        sites = table.sites().len(),
        payload_range = %table.payload_range(),
        "Loaded launch records"
    );

    Ok(table)
}

/// Load the launch table from any reader (useful for testing)
pub fn load_from_reader<R: Read>(reader: R) -> DataResult<LaunchTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::from_headers(&headers)?;

    let extra_columns = columns
        .extra
        .iter()
        .map(|&idx| headers[idx].trim().to_string())
        .collect();

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let payload_kg = parse_payload(cell(columns.payload)).ok_or_else(|| {
            DataLoadError::InvalidValue {
                line,
                column: COL_PAYLOAD_MASS.to_string(),
                value: cell(columns.payload).to_string(),
            }
        })?;

        let outcome = parse_class(cell(columns.class)).ok_or_else(|| DataLoadError::InvalidValue {
            line,
            column: COL_CLASS.to_string(),
            value: cell(columns.class).to_string(),
        })?;

        let extra = columns
            .extra
            .iter()
            .map(|&idx| cell(idx).to_string())
            .collect();

        records.push(
            LaunchRecord::new(
                cell(columns.site),
                payload_kg,
                cell(columns.booster),
                outcome,
            )
            .extra(extra),
        );
    }

    LaunchTable::new(records, extra_columns)
}

fn parse_payload(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

/// Accepts `0`/`1` and their float spellings (`0.0`/`1.0`)
fn parse_class(raw: &str) -> Option<Outcome> {
    if let Ok(v) = raw.parse::<u8>() {
        return Outcome::try_from(v).ok();
    }
    match raw.parse::<f64>().ok()? {
        v if v == 0.0 => Some(Outcome::Failure),
        v if v == 1.0 => Some(Outcome::Success),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,1,677.0,F9 v1.0  B0005,v1.0
3,4,VAFB SLC-4E,0,500.0,F9 v1.1  B1003,v1.1
4,5,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT";

    #[test]
    fn test_load_sample() {
        let table = load_from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.len(), 5);
        assert_eq!(table.sites(), &["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);

        let first = &table.records()[0];
        assert_eq!(first.site, "CCAFS LC-40");
        assert_eq!(first.payload_kg, 0.0);
        assert_eq!(first.booster_category, "v1.0");
        assert_eq!(first.outcome, Outcome::Failure);

        let range = table.payload_range();
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 2490.0);
    }

    #[test]
    fn test_pass_through_columns() {
        let table = load_from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.extra_columns(), &["", "Flight Number", "Booster Version"]);
        assert_eq!(table.records()[4].extra, vec!["4", "5", "F9 FT B1031.1"]);
        assert_eq!(table.records()[2].extra[1], "3");
    }

    #[test]
    fn test_missing_required_column() {
        let csv_data = "Launch Site,class,Payload Mass (kg)
CCAFS LC-40,1,500";
        let result = load_from_reader(csv_data.as_bytes());
        match result {
            Err(DataLoadError::MissingColumn(col)) => assert_eq!(col, COL_BOOSTER_CATEGORY),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_class_reports_line() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,500,v1.0
CCAFS LC-40,yes,600,v1.0";
        let result = load_from_reader(csv_data.as_bytes());
        match result {
            Err(DataLoadError::InvalidValue { line, column, value }) => {
                assert_eq!(line, 3);
                assert_eq!(column, COL_CLASS);
                assert_eq!(value, "yes");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_payload_rejected() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,-5,v1.0";
        let result = load_from_reader(csv_data.as_bytes());
        assert!(matches!(result, Err(DataLoadError::InvalidValue { .. })));
    }

    #[test]
    fn test_float_class_accepted() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1.0,500,v1.0
CCAFS LC-40,0.0,600,v1.0";
        let table = load_from_reader(csv_data.as_bytes()).unwrap();
        assert_eq!(table.records()[0].outcome, Outcome::Success);
        assert_eq!(table.records()[1].outcome, Outcome::Failure);
    }

    #[test]
    fn test_short_row_is_csv_error() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,500,v1.0
KSC LC-39A,1,2490";
        let result = load_from_reader(csv_data.as_bytes());
        assert!(
            matches!(result, Err(DataLoadError::Csv(_))),
            "Expected Csv error, got {:?}",
            result
        );
    }

    #[test]
    fn test_header_only_is_empty() {
        let csv_data = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";
        let result = load_from_reader(csv_data.as_bytes());
        assert!(matches!(result, Err(DataLoadError::Empty)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = load(file.path()).unwrap();
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(DataLoadError::Io(_))));
    }
}
