pub mod cleaner;
pub mod export;
pub mod parser;
pub mod scraper;
pub mod types;
pub mod utils;

pub use scraper::WebScraper;

use std::time::Duration;

/// Team 1 (Australia), all formats, one row per team innings.
pub const INNINGS_URL: &str =
    "https://stats.espncricinfo.com/ci/engine/team/1.html?class=11;template=results;type=team;view=innings";

// Cricinfo rejects obvious bot user agents.
pub(crate) const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fixed politeness delay before the one request each run makes.
pub const REQUEST_DELAY: Duration = Duration::from_secs(1);

pub const DEFAULT_RAW_CSV: &str = "data/cricinfo_innings_data.csv";
pub const DEFAULT_DEBUG_PAGE: &str = "data/debug_page.html";
pub const DEFAULT_CLEAN_CSV: &str = "data/cleaned/cricinfo_innings_data_clean.csv";
