//! Normalizes a previously scraped innings CSV: junk columns out, dates and
//! scores coerced, fixed fills, duplicate rows dropped.

use crate::export::{self, ExportError};
use crate::types::Dataset;
use crate::utils::CleanStats;

use chrono::NaiveDate;
use std::collections::HashSet;
use std::io;
use std::path::Path;

const DATE_COLUMN: &str = "Start Date";
const SCORE_COLUMN: &str = "Score";
const RESULT_COLUMN: &str = "Result";
const TARGET_COLUMN: &str = "Target";
const LEAD_COLUMN: &str = "Lead";

const DATE_INPUT_FORMAT: &str = "%d %b %Y";
const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

// Synthetic names produced by header reconciliation, plus unlabelled index
// columns some exports carry.
const JUNK_COLUMN_MARKERS: [&str; 2] = ["Unnamed", "Column"];

#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Reads `input`, cleans it, and writes the result to `output`, creating the
/// output's parent directory when absent.
pub fn clean_file(input: &Path, output: &Path) -> Result<CleanStats, CleanError> {
    let dataset = read_dataset(input)?;
    let rows_in = dataset.rows.len();

    let cleaned = clean(dataset);
    export::write_delimited(&cleaned.headers, &cleaned.rows, output)?;

    Ok(CleanStats::new(rows_in, cleaned.rows.len(), cleaned.headers))
}

/// Loads a delimited file. Short rows are padded with empty cells and long
/// rows truncated so every row matches the header width.
pub fn read_dataset(path: &Path) -> Result<Dataset, CleanError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows))
}

pub fn clean(dataset: Dataset) -> Dataset {
    let dataset = drop_junk_columns(dataset);
    let dataset = coerce_column(dataset, DATE_COLUMN, normalize_date);
    let dataset = coerce_column(dataset, SCORE_COLUMN, normalize_score);
    let dataset = coerce_column(dataset, RESULT_COLUMN, |v| fill_empty(v, "Unknown"));
    let dataset = coerce_column(dataset, TARGET_COLUMN, |v| fill_empty(v, "0"));
    let dataset = coerce_column(dataset, LEAD_COLUMN, |v| fill_empty(v, "0"));
    let dataset = drop_empty_rows(dataset);
    drop_duplicate_rows(dataset)
}

fn drop_junk_columns(dataset: Dataset) -> Dataset {
    let keep: Vec<usize> = dataset
        .headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !JUNK_COLUMN_MARKERS.iter().any(|marker| h.contains(marker)))
        .map(|(i, _)| i)
        .collect();

    let headers = keep.iter().map(|&i| dataset.headers[i].clone()).collect();
    let rows = dataset
        .rows
        .iter()
        .map(|row| {
            keep.iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    Dataset::new(headers, rows)
}

fn coerce_column<F>(mut dataset: Dataset, name: &str, coerce: F) -> Dataset
where
    F: Fn(&str) -> String,
{
    if let Some(idx) = dataset.column_index(name) {
        for row in &mut dataset.rows {
            if let Some(cell) = row.get_mut(idx) {
                *cell = coerce(cell);
            }
        }
    } else {
        log::warn!("Column '{}' not present, skipping", name);
    }
    dataset
}

fn normalize_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT) {
        Ok(date) => date.format(DATE_OUTPUT_FORMAT).to_string(),
        Err(_) => String::new(),
    }
}

fn normalize_score(value: &str) -> String {
    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 => format!("{}", n as i64),
        Ok(n) if n.is_finite() => n.to_string(),
        _ => String::new(),
    }
}

fn fill_empty(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn drop_empty_rows(mut dataset: Dataset) -> Dataset {
    dataset.rows.retain(|row| row.iter().any(|c| !c.is_empty()));
    dataset
}

fn drop_duplicate_rows(mut dataset: Dataset) -> Dataset {
    let mut seen = HashSet::new();
    dataset.rows.retain(|row| seen.insert(row.clone()));
    dataset
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn dataset(headers: &[&str], rows: &[&[&str]]) -> Dataset {
        Dataset::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_drops_unnamed_and_synthetic_columns() {
        let input = dataset(
            &["Team", "Unnamed: 0", "Column_13", "Score"],
            &[&["Australia", "0", "x", "384"]],
        );

        let cleaned = clean(input);

        assert_eq!(cleaned.headers, vec!["Team", "Score"]);
        assert_eq!(cleaned.rows, vec![vec!["Australia", "384"]]);
    }

    #[test]
    fn test_parses_start_date_to_iso() {
        let input = dataset(
            &["Team", "Start Date"],
            &[&["Australia", "15 Mar 1877"], &["England", "garbage"]],
        );

        let cleaned = clean(input);

        assert_eq!(cleaned.rows[0][1], "1877-03-15");
        assert_eq!(cleaned.rows[1][1], "");
    }

    #[test]
    fn test_unparseable_score_becomes_null_marker() {
        let input = dataset(
            &["Team", "Score"],
            &[&["Australia", "not a number"], &["England", "196"]],
        );

        let cleaned = clean(input);

        // Row is retained because the other column is non-null.
        assert_eq!(cleaned.rows[0], vec!["Australia", ""]);
        assert_eq!(cleaned.rows[1], vec!["England", "196"]);
    }

    #[test]
    fn test_fills_result_target_and_lead() {
        let input = dataset(
            &["Result", "Target", "Lead"],
            &[&["", "", ""], &["won", "275", "98"]],
        );

        let cleaned = clean(input);

        assert_eq!(cleaned.rows[0], vec!["Unknown", "0", "0"]);
        assert_eq!(cleaned.rows[1], vec!["won", "275", "98"]);
    }

    #[test]
    fn test_drops_rows_null_in_every_column() {
        let input = dataset(&["Team", "Score"], &[&["", ""], &["Australia", "384"]]);

        let cleaned = clean(input);

        assert_eq!(cleaned.rows, vec![vec!["Australia", "384"]]);
    }

    #[test]
    fn test_fill_happens_before_empty_row_drop() {
        // A row that is empty apart from fillable columns survives, because
        // the fills run first.
        let input = dataset(&["Result", "Score"], &[&["", ""]]);

        let cleaned = clean(input);

        assert_eq!(cleaned.rows, vec![vec!["Unknown", ""]]);
    }

    #[test]
    fn test_duplicate_rows_keep_first_occurrence() {
        let input = dataset(
            &["Team", "Score"],
            &[
                &["Australia", "384"],
                &["England", "196"],
                &["Australia", "384"],
            ],
        );

        let cleaned = clean(input);

        assert_eq!(
            cleaned.rows,
            vec![vec!["Australia", "384"], vec!["England", "196"]]
        );
    }

    #[test]
    fn test_missing_named_columns_are_skipped() {
        let input = dataset(&["Team"], &[&["Australia"]]);

        let cleaned = clean(input);

        assert_eq!(cleaned.rows, vec![vec!["Australia"]]);
    }

    #[test]
    fn test_clean_file_round_trip() {
        let dir = tempdir().expect("tempdir");
        let input = dir.path().join("innings.csv");
        let output = dir.path().join("cleaned").join("innings_clean.csv");
        fs::write(
            &input,
            "Team,Start Date,Score,Result\n\
             Australia,15 Mar 1877,245,won\n\
             Australia,15 Mar 1877,245,won\n\
             England,garbage,bad,\n",
        )
        .expect("write input");

        let stats = clean_file(&input, &output).expect("clean failed");

        assert_eq!(stats.rows_in, 3);
        assert_eq!(stats.rows_out, 2);

        let contents = fs::read_to_string(&output).expect("read output");
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "Team,Start Date,Score,Result");
        assert_eq!(lines[1], "Australia,1877-03-15,245,won");
        assert_eq!(lines[2], "England,,,Unknown");
    }

    #[test]
    fn test_read_dataset_pads_short_rows() {
        let dir = tempdir().expect("tempdir");
        let input = dir.path().join("ragged.csv");
        fs::write(&input, "a,b,c\n1,2\n").expect("write input");

        let dataset = read_dataset(&input).expect("read failed");

        assert_eq!(dataset.rows, vec![vec!["1", "2", ""]]);
    }
}
