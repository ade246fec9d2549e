use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;

use crate::{Dataset, FitError, Result};

/// Loads a two-column table from a CSV file.
///
/// # Errors
/// Fails if the file cannot be opened or its contents are not a valid table, see
/// [`read_table`].
pub fn load_table(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let dataset = read_table(File::open(path)?)?;
    info!("loaded {} samples from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Reads a two-column table.
///
/// The first row holds the column names, which become the axis labels. Every other row is an
/// `(x, y)` pair. Columns past the second are ignored and so are rows where both cells are
/// blank.
///
/// # Errors
/// Fails if there are fewer than two columns, no data rows, a cell is not a number, or a row
/// holds only one of its two values.
pub fn read_table<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.len() < 2 {
        return Err(FitError::InvalidInput("the table needs at least two columns"));
    }

    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);

        let x = record.get(0).unwrap_or_default();
        let y = record.get(1).unwrap_or_default();

        match (x.is_empty(), y.is_empty()) {
            (true, true) => continue,
            (false, false) => {
                xs.push(parse_cell(x, row, &headers, 0)?);
                ys.push(parse_cell(y, row, &headers, 1)?);
            }
            (x_missing, _) => {
                let column = if x_missing { 0 } else { 1 };
                return Err(FitError::MissingCell {
                    row,
                    column: column_name(&headers, column),
                });
            }
        }
    }

    if xs.is_empty() {
        return Err(FitError::InvalidInput("the table has no data rows"));
    }

    let x_label = headers.get(0).map(str::to_string);
    let y_label = headers.get(1).map(str::to_string);

    Ok(Dataset::new(xs, ys)?.with_labels(x_label, y_label))
}

fn parse_cell(value: &str, row: usize, headers: &StringRecord, column: usize) -> Result<f64> {
    value.parse().map_err(|_| FitError::MalformedCell {
        row,
        column: column_name(headers, column),
        value: value.to_string(),
    })
}

fn column_name(headers: &StringRecord, column: usize) -> String {
    headers.get(column).unwrap_or_default().to_string()
}
