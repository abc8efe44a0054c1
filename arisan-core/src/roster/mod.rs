//! Roster import from CSV, spreadsheets and plain text.
//!
//! Importers only produce raw strings. Trimming, dedup and ordering happen
//! when the names reach [`crate::CycleState::set_participants`].

pub mod template;

pub use template::{template_workbook, write_template};

use crate::{ArisanError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Csv,
    Spreadsheet,
    Text,
}

impl RosterFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(RosterFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(RosterFormat::Spreadsheet),
            "txt" => Ok(RosterFormat::Text),
            _ => Err(ArisanError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Read raw names from a roster file, picking the reader by extension
pub fn import_file(path: &Path, column: &str) -> Result<Vec<String>> {
    let names = match RosterFormat::from_path(path)? {
        RosterFormat::Csv => {
            let file = std::fs::File::open(path)?;
            read_csv(file, column)?
        }
        RosterFormat::Spreadsheet => read_spreadsheet(path, column)?,
        RosterFormat::Text => parse_lines(&std::fs::read_to_string(path)?),
    };

    tracing::info!("Imported {} rows from {}", names.len(), path.display());
    Ok(names)
}

/// One name per line
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.to_string()).collect()
}

pub fn read_csv<R: Read>(reader: R, column: &str) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let idx = find_column(rdr.headers()?.iter(), column)?;

    let mut names = Vec::new();
    for record in rdr.records() {
        let record = record?;
        names.push(record.get(idx).unwrap_or_default().to_string());
    }
    Ok(names)
}

/// Reads the first sheet of an xlsx/xls/ods workbook
pub fn read_spreadsheet(path: &Path, column: &str) -> Result<Vec<String>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ArisanError::file_parse("workbook has no sheets"))??;

    let mut rows = range.rows();
    let header: Vec<String> = match rows.next() {
        Some(row) => row.iter().map(cell_text).collect(),
        None => Vec::new(),
    };
    let idx = find_column(header.iter().map(String::as_str), column)?;

    Ok(rows
        .map(|row| row.get(idx).map(cell_text).unwrap_or_default())
        .collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn find_column<'a>(headers: impl Iterator<Item = &'a str>, column: &str) -> Result<usize> {
    let wanted = column.trim().to_lowercase();
    headers
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
        .position(|h| h == wanted)
        .ok_or_else(|| ArisanError::MissingColumn {
            column: column.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sanitize, ArisanConfig};
    use tempfile::tempdir;

    #[test]
    fn test_read_csv_matches_column_loosely() {
        let data = "id, Nama \n1,Budi\n2,  Ani\n3,\n4,Cici\n";
        let names = read_csv(data.as_bytes(), "nama").unwrap();
        assert_eq!(names, vec!["Budi", "  Ani", "", "Cici"]);
        assert_eq!(sanitize(names).names(), vec!["Ani", "Budi", "Cici"]);
    }

    #[test]
    fn test_read_csv_short_rows() {
        let data = "nama,kota\nAni,Bandung\nBudi\n";
        let names = read_csv(data.as_bytes(), "nama").unwrap();
        assert_eq!(names, vec!["Ani", "Budi"]);

        let data = "kota,nama\nBandung\n";
        let names = read_csv(data.as_bytes(), "nama").unwrap();
        assert_eq!(names, vec![""]);
    }

    #[test]
    fn test_read_csv_missing_column() {
        let data = "name\nAni\n";
        let err = read_csv(data.as_bytes(), "nama").unwrap_err();
        assert!(matches!(err, ArisanError::MissingColumn { ref column } if column == "nama"));
    }

    #[test]
    fn test_read_csv_malformed() {
        let data: &[u8] = b"nama\n\xff\xfe\n";
        assert!(matches!(
            read_csv(data, "nama"),
            Err(ArisanError::FileParse(_))
        ));
    }

    #[test]
    fn test_parse_lines() {
        let names = parse_lines("Ani\r\nBudi\n\n Cici ");
        assert_eq!(sanitize(names).names(), vec!["Ani", "Budi", "Cici"]);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            RosterFormat::from_path(Path::new("peserta.CSV")).unwrap(),
            RosterFormat::Csv
        );
        assert_eq!(
            RosterFormat::from_path(Path::new("peserta.xlsx")).unwrap(),
            RosterFormat::Spreadsheet
        );
        assert_eq!(
            RosterFormat::from_path(Path::new("peserta.txt")).unwrap(),
            RosterFormat::Text
        );
        assert!(matches!(
            RosterFormat::from_path(Path::new("peserta.pdf")),
            Err(ArisanError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_template_round_trips_through_import() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("template.xlsx");
        let config = ArisanConfig::default();

        write_template(&path, &config).unwrap();
        let names = import_file(&path, &config.name_column).unwrap();
        assert_eq!(names, vec!["Ani", "Budi", "Cici", "Dedi"]);
    }

    #[test]
    fn test_import_csv_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("peserta.csv");
        std::fs::write(&path, "nama\nDedi\nani\n").unwrap();

        let names = import_file(&path, "nama").unwrap();
        assert_eq!(sanitize(names).names(), vec!["ani", "Dedi"]);
    }

    #[test]
    fn test_import_corrupt_spreadsheet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        assert!(matches!(
            import_file(&path, "nama"),
            Err(ArisanError::FileParse(_))
        ));
    }
}
