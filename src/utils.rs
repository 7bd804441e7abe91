use crate::types::SelectedTable;

#[derive(Debug)]
pub struct ScrapeStats {
    pub rows: usize,
    pub columns: Vec<String>,
}

impl ScrapeStats {
    pub fn from_table(table: &SelectedTable) -> ScrapeStats {
        ScrapeStats {
            rows: table.rows.len(),
            columns: table.headers.clone(),
        }
    }
}

impl std::fmt::Display for ScrapeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\nStatistics:")?;
        writeln!(f, "  Rows:    {}", self.rows)?;
        writeln!(f, "  Columns: {}", self.columns.join(", "))
    }
}

#[derive(Debug)]
pub struct CleanStats {
    pub rows_in: usize,
    pub rows_out: usize,
    pub columns: Vec<String>,
}

impl CleanStats {
    pub fn new(rows_in: usize, rows_out: usize, columns: Vec<String>) -> CleanStats {
        CleanStats {
            rows_in,
            rows_out,
            columns,
        }
    }
}

impl std::fmt::Display for CleanStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\nStatistics:")?;
        writeln!(f, "  Rows in:      {}", self.rows_in)?;
        writeln!(f, "  Rows out:     {}", self.rows_out)?;
        writeln!(f, "  Rows dropped: {}", self.rows_in - self.rows_out)?;
        writeln!(f, "  Columns:      {}", self.columns.join(", "))
    }
}
