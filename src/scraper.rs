use crate::parser::select_innings_table;
use crate::types::SelectedTable;

use reqwest::Client;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Outcome of one scrape run. `NoTable` carries the raw page so the caller
/// can persist it for offline inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    Table(SelectedTable),
    NoTable { page: String },
}

#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
}

impl WebScraper {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(crate::USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(html)
    }

    pub async fn scrape_innings(&self, url: &str) -> Result<ScrapeOutcome, ScrapeError> {
        let html = self.fetch_page(url).await?;
        match select_innings_table(&html) {
            Some(table) => Ok(ScrapeOutcome::Table(table)),
            None => Ok(ScrapeOutcome::NoTable { page: html }),
        }
    }
}
