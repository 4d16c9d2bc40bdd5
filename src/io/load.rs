//! CSV table loading

use super::table::Table;
use admet_eval_common::{AdmetError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a CSV file with a header row.
///
/// The dataset name used in diagnostics defaults to the file name; callers
/// usually rename it with [`Table::with_name`].
///
/// # Example
///
/// ```no_run
/// use admet_eval::io::read_table;
///
/// let predictions = read_table("predictions.csv")?.with_name("Results file");
/// println!("{} rows", predictions.n_rows());
/// # Ok::<(), admet_eval::AdmetError>(())
/// ```
pub fn read_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| AdmetError::io(format!("opening {}", path.display()), e))?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    read_csv(file, name)
}

/// Read CSV from any reader.
pub fn read_csv<R: Read>(reader: R, name: impl Into<String>) -> Result<Table> {
    let name = name.into();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| AdmetError::csv(format!("reading header of {name}"), e))?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut table = Table::new(name.clone(), headers);
    for record in rdr.records() {
        let record = record.map_err(|e| AdmetError::csv(format!("reading {name}"), e))?;
        table.push_row(record.iter())?;
    }

    log::debug!("loaded {name}: {} rows, {} columns", table.n_rows(), table.headers().len());
    Ok(table)
}
