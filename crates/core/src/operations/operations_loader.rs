//! Reading operation batches from JSON, CSV and spreadsheet exports.
//!
//! The `read_*` functions are strict and return a [`LoadError`]. The `load_*`
//! functions wrap them for batch use: any failure is logged and turns into an
//! empty batch.

use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use log::{error, info, warn};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::constants::DEFAULT_CSV_DELIMITER;

use super::operations_errors::LoadError;
use super::operations_model::{CurrencyInfo, OperationAmount, OperationId, OperationRecord};

/// Reads a JSON array of operations.
///
/// Empty input is an empty batch. Elements that are not JSON objects are
/// skipped with a warning; a wrong-typed field only leaves that field unset
/// (see [`OperationRecord::from_json`]).
pub fn read_operations_json<R: Read>(mut reader: R) -> Result<Vec<OperationRecord>, LoadError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items = match serde_json::from_str::<Value>(&content)? {
        Value::Array(items) => items,
        other => return Err(LoadError::NotAnArray(json_type_name(&other).to_string())),
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match OperationRecord::from_json(item) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Skipping operation #{}: {}", index, e),
        }
    }
    Ok(records)
}

/// Reads a delimited operations export with a header row.
///
/// Recognized columns are `id`, `state`, `date`, `amount`, `currency_name`,
/// `currency_code`, `from`, `to` and `description`; any other column is kept
/// in [`OperationRecord::extra`]. Blank cells are treated as absent.
pub fn read_operations_csv<R: Read>(
    reader: R,
    delimiter: u8,
) -> Result<Vec<OperationRecord>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut records = Vec::new();
    for (index, row) in rdr.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping CSV row #{}: {}", index + 1, e);
                continue;
            }
        };

        let cells: BTreeMap<&str, &str> = headers
            .iter()
            .map(String::as_str)
            .zip(row.iter())
            .filter(|(_, value)| !value.trim().is_empty())
            .collect();
        records.push(record_from_cells(cells));
    }
    Ok(records)
}

fn record_from_cells(mut cells: BTreeMap<&str, &str>) -> OperationRecord {
    let mut take = |key: &str| cells.remove(key).map(str::to_string);

    let id = take("id").map(|raw| match raw.trim().parse::<i64>() {
        Ok(n) => OperationId::Number(n),
        Err(_) => OperationId::Text(raw),
    });
    let state = take("state");
    let date = take("date");
    let description = take("description");
    let from = take("from");
    let to = take("to");
    let amount = take("amount");
    let currency_name = take("currency_name");
    let currency_code = take("currency_code");

    let currency = if currency_name.is_some() || currency_code.is_some() {
        Some(CurrencyInfo {
            name: currency_name,
            code: currency_code,
            ..CurrencyInfo::default()
        })
    } else {
        None
    };
    let operation_amount = if amount.is_some() || currency.is_some() {
        Some(OperationAmount {
            amount,
            currency,
            ..OperationAmount::default()
        })
    } else {
        None
    };

    let extra = cells
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect();

    OperationRecord {
        id,
        state,
        date,
        description,
        from,
        to,
        operation_amount,
        extra,
    }
}

/// Worksheet to read from a workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    /// Zero-based position in the workbook
    Index(usize),
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::Index(0)
    }
}

/// Reads one worksheet of an `.xlsx`, `.xlsm`, `.xlsb`, `.xls` or `.ods`
/// workbook. The first row is the header; columns map as in
/// [`read_operations_csv`].
pub fn read_operations_excel(
    path: &Path,
    sheet: &SheetSelector,
) -> Result<Vec<OperationRecord>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }
    let mut workbook = open_workbook_auto(path)?;

    let range = match sheet {
        SheetSelector::Index(index) => workbook
            .worksheet_range_at(*index)
            .ok_or_else(|| LoadError::SheetNotFound(format!("#{}", index)))??,
        SheetSelector::Name(name) => {
            if !workbook.sheet_names().iter().any(|n| n == name) {
                return Err(LoadError::SheetNotFound(name.clone()));
            }
            workbook.worksheet_range(name)?
        }
    };

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(row) => row.iter().map(|c| cell_text(c).trim().to_string()).collect(),
        None => return Ok(Vec::new()),
    };

    let records = rows
        .map(|row| {
            let texts: Vec<String> = row.iter().map(cell_text).collect();
            let cells: BTreeMap<&str, &str> = headers
                .iter()
                .map(String::as_str)
                .zip(texts.iter().map(String::as_str))
                .filter(|(_, value)| !value.trim().is_empty())
                .collect();
            record_from_cells(cells)
        })
        .collect();
    Ok(records)
}

/// Cell contents as the text a CSV export would carry.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) => s.clone(),
        // whole numbers (ids, round amounts) without a trailing ".0"
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}

/// Loads a JSON export; any failure is logged and yields an empty batch.
pub fn load_operations_json(path: &Path) -> Vec<OperationRecord> {
    info!("Reading operations from {}", path.display());
    let result = open(path).and_then(read_operations_json);
    finish_load(path, result)
}

/// Loads a CSV export; any failure is logged and yields an empty batch.
pub fn load_operations_csv(path: &Path, delimiter: u8) -> Vec<OperationRecord> {
    info!("Reading operations from {}", path.display());
    let result = open(path).and_then(|file| read_operations_csv(file, delimiter));
    finish_load(path, result)
}

/// Loads one worksheet of a workbook; any failure is logged and yields an
/// empty batch.
pub fn load_operations_excel(path: &Path, sheet: &SheetSelector) -> Vec<OperationRecord> {
    info!("Reading operations from {} ({:?})", path.display(), sheet);
    finish_load(path, read_operations_excel(path, sheet))
}

/// Loads an export, picking the reader from the file extension.
///
/// `.json`, `.csv` (`;`-delimited) and workbooks (first worksheet) are
/// understood; anything else is reported and yields an empty batch.
pub fn load_operations(path: &Path) -> Vec<OperationRecord> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => load_operations_json(path),
        "csv" => load_operations_csv(path, DEFAULT_CSV_DELIMITER),
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => {
            load_operations_excel(path, &SheetSelector::default())
        }
        _ => finish_load(
            path,
            Err(LoadError::UnsupportedFormat(format!(".{}", extension))),
        ),
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }
    Ok(File::open(path)?)
}

fn finish_load(path: &Path, result: Result<Vec<OperationRecord>, LoadError>) -> Vec<OperationRecord> {
    match result {
        Ok(records) if records.is_empty() => {
            warn!("{} contains no operations", path.display());
            records
        }
        Ok(records) => {
            info!("Read {} operations from {}", records.len(), path.display());
            records
        }
        Err(e) => {
            error!("Failed to read operations from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
