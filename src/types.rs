use serde::{Deserialize, Serialize};

/// One HTML table reduced to text cells, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGrid {
    pub rows: Vec<Vec<String>>,
    /// True when any `th` cell anywhere in the table mentions "Inn" or "Score".
    pub has_innings_header: bool,
}

impl TableGrid {
    pub fn new(rows: Vec<Vec<String>>, has_innings_header: bool) -> Self {
        Self {
            rows,
            has_innings_header,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SelectedTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A delimited file loaded into memory. Missing values are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
