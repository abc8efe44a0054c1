use crate::history::{HistoryLedger, SeedOrigin};
use crate::{ArisanConfig, ArisanError, Result};
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::path::Path;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Spreadsheet headers, in column order
pub const HISTORY_HEADERS: [&str; 4] = ["Putaran", "Waktu", "Seed", "Pemenang"];

// Largest integer an xlsx number cell holds exactly
const MAX_EXACT_NUMBER: u64 = 1 << 53;

/// One history row as it appears in exports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub round: u32,
    pub timestamp: String,
    pub seed: u64,
    pub seed_origin: SeedOrigin,
    pub winner: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ArisanError::export(format!(
                "unsupported export format: {}",
                path.display()
            ))),
        }
    }
}

/// Rows sorted by round, timestamps in local time
pub fn history_rows(history: &HistoryLedger) -> Vec<HistoryRow> {
    let mut rows: Vec<HistoryRow> = history
        .records()
        .iter()
        .map(|r| HistoryRow {
            round: r.round,
            timestamp: r
                .timestamp
                .with_timezone(&Local)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
            seed: r.seed,
            seed_origin: r.seed_origin,
            winner: r.winner.to_string(),
        })
        .collect();
    rows.sort_by_key(|r| r.round);
    rows
}

fn build_workbook(rows: &[HistoryRow], config: &ArisanConfig) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&config.history_sheet)?;

    for (col, header) in HISTORY_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet.write_number(r, 0, row.round as f64)?;
        worksheet.write_string(r, 1, &row.timestamp)?;
        if row.seed <= MAX_EXACT_NUMBER {
            worksheet.write_number(r, 2, row.seed as f64)?;
        } else {
            worksheet.write_string(r, 2, row.seed.to_string())?;
        }
        worksheet.write_string(r, 3, &row.winner)?;
    }
    worksheet.set_column_width(1, 20)?;
    worksheet.set_column_width(3, 24)?;

    Ok(workbook)
}

pub fn history_xlsx(history: &HistoryLedger, config: &ArisanConfig) -> Result<Vec<u8>> {
    Ok(build_workbook(&history_rows(history), config)?.save_to_buffer()?)
}

pub fn history_csv(history: &HistoryLedger) -> Result<String> {
    let export_err = |e: csv::Error| ArisanError::export(e.to_string());

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(HISTORY_HEADERS).map_err(export_err)?;
    for row in history_rows(history) {
        wtr.write_record([
            row.round.to_string(),
            row.timestamp,
            row.seed.to_string(),
            row.winner,
        ])
        .map_err(export_err)?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| ArisanError::export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ArisanError::export(e.to_string()))
}

pub fn history_json(history: &HistoryLedger) -> Result<String> {
    Ok(serde_json::to_string_pretty(&history_rows(history))?)
}

/// Write the history to `path`, format picked by extension
pub fn export_history(path: &Path, history: &HistoryLedger, config: &ArisanConfig) -> Result<()> {
    match ExportFormat::from_path(path)? {
        ExportFormat::Xlsx => build_workbook(&history_rows(history), config)?.save(path)?,
        ExportFormat::Csv => std::fs::write(path, history_csv(history)?)?,
        ExportFormat::Json => std::fs::write(path, history_json(history)?)?,
    }

    tracing::info!(
        "Exported {} draws to {}",
        history.len(),
        path.display()
    );
    Ok(())
}
