//! Tabular export - serde records to CSV files
//!
//! The serialized field order of each record struct is the column
//! order, so every writer here receives an ordered field mapping and
//! produces one spreadsheet-compatible file per batch.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::catalog::Category;

/// Errors from writing or encoding fixture files
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write '{0}'")]
    Write(PathBuf, #[source] csv::Error),

    #[error("failed to encode records")]
    Encode(#[from] csv::Error),
}

/// Output path for one category's fixture file
pub fn fixture_path(out_dir: &Path, category: Category) -> PathBuf {
    out_dir.join(format!("{}.csv", category.file_stem()))
}

/// Write a record batch as a CSV file with a header row.
/// Returns the number of data rows written.
pub fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<usize, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(|e| ExportError::Write(path.to_path_buf(), e))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| ExportError::Write(path.to_path_buf(), e))?;
    }
    writer
        .flush()
        .map_err(|e| ExportError::Write(path.to_path_buf(), csv::Error::from(e)))?;

    Ok(records.len())
}

/// Render a record batch to (headers, rows) of display strings, going
/// through the same serde path as the file writer so previews always
/// match what would be written.
pub fn tabulate<T: Serialize>(
    records: &[T],
) -> Result<(Vec<String>, Vec<Vec<String>>), ExportError> {
    let mut buf: Vec<u8> = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    let headers = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::with_capacity(records.len());
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(String::from).collect());
    }
    Ok((headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use tempfile::TempDir;

    #[derive(Serialize)]
    struct Row {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Stock Quantity")]
        quantity: u32,
        #[serde(rename = "Purchase Price")]
        price: i64,
    }

    fn sample() -> Vec<Row> {
        vec![
            Row { name: "Masque CPAP Nasal".to_string(), quantity: 12, price: 31 },
            Row { name: "Filtre, HEPA".to_string(), quantity: 80, price: 7 },
        ]
    }

    #[test]
    fn test_write_csv_emits_header_and_rows() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.csv");

        let written = write_csv(&path, &sample()).unwrap();
        assert_eq!(written, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next().unwrap(), "Name,Stock Quantity,Purchase Price");
        assert_eq!(lines.next().unwrap(), "Masque CPAP Nasal,12,31");
        // embedded comma gets quoted
        assert_eq!(lines.next().unwrap(), "\"Filtre, HEPA\",80,7");
    }

    #[test]
    fn test_write_csv_empty_batch_writes_empty_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.csv");

        let rows: Vec<Row> = Vec::new();
        assert_eq!(write_csv(&path, &rows).unwrap(), 0);

        // serde-based writers only learn the header from the first
        // record, so an empty batch yields an empty file
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_write_csv_bad_path_errors() {
        let err = write_csv(Path::new("/nonexistent/dir/out.csv"), &sample()).unwrap_err();
        assert!(matches!(err, ExportError::Write(_, _)));
    }

    #[test]
    fn test_tabulate_matches_field_order() {
        let (headers, rows) = tabulate(&sample()).unwrap();
        assert_eq!(headers, vec!["Name", "Stock Quantity", "Purchase Price"]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Masque CPAP Nasal", "12", "31"]);
        assert_eq!(rows[1], vec!["Filtre, HEPA", "80", "7"]);
    }

    #[test]
    fn test_fixture_path_per_category() {
        let dir = Path::new("fixtures");
        assert_eq!(
            fixture_path(dir, Category::MedicalDevice),
            dir.join("import_medical_devices_yuwell.csv")
        );
        assert_eq!(
            fixture_path(dir, Category::SparePart),
            dir.join("import_spare_parts.csv")
        );
    }
}
