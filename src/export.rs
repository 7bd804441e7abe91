use crate::types::SelectedTable;

use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes the selected table as a UTF-8 CSV file, creating the parent
/// directory when absent.
pub fn write_csv(table: &SelectedTable, path: &Path) -> Result<(), ExportError> {
    write_delimited(&table.headers, &table.rows, path)
}

pub fn write_delimited(
    headers: &[String],
    rows: &[Vec<String>],
    path: &Path,
) -> Result<(), ExportError> {
    ensure_parent_dir(path)?;

    // Fallback-selected rows are verbatim and may not share one width.
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Persists the raw fetched page for manual inspection when no table could
/// be selected.
pub fn write_debug_page(html: &str, path: &Path) -> Result<(), ExportError> {
    ensure_parent_dir(path)?;
    fs::write(path, html)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
