use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use cricscrape::scraper::{ScrapeOutcome, WebScraper};
use cricscrape::utils::ScrapeStats;
use cricscrape::{cleaner, export};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "cricscrape")]
#[command(about = "An ESPN Cricinfo innings statistics scraper", long_about = None)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "info",
        global = true,
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the innings statistics page and export the innings table as CSV
    Scrape {
        #[arg(
            long,
            default_value = cricscrape::INNINGS_URL,
            help = "Statistics page to fetch"
        )]
        url: String,

        #[arg(
            long,
            default_value = cricscrape::DEFAULT_RAW_CSV,
            help = "Path of the CSV file to write"
        )]
        out: PathBuf,

        #[arg(
            long,
            default_value = cricscrape::DEFAULT_DEBUG_PAGE,
            help = "Where to save the raw page when no table is found"
        )]
        debug_file: PathBuf,

        #[arg(
            short = 'o',
            long = "output",
            value_enum,
            default_value = "text",
            help = "Report format"
        )]
        format: OutputFormat,
    },
    /// Normalize a previously scraped CSV and write the cleaned copy
    Clean {
        #[arg(
            long,
            default_value = cricscrape::DEFAULT_RAW_CSV,
            help = "CSV file to clean"
        )]
        input: PathBuf,

        #[arg(
            long,
            default_value = cricscrape::DEFAULT_CLEAN_CSV,
            help = "Path of the cleaned CSV file to write"
        )]
        output: PathBuf,
    },
}

fn serialize_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Error serializing to JSON: {}", e);
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    match cli.command {
        Commands::Scrape {
            url,
            out,
            debug_file,
            format,
        } => {
            let scraper = WebScraper::new().unwrap_or_else(|e| {
                log::error!("Error creating scraper: {}", e);
                process::exit(1);
            });

            log::info!("Fetching innings data from {}...", url);
            tokio::time::sleep(cricscrape::REQUEST_DELAY).await;

            let outcome = scraper.scrape_innings(&url).await.unwrap_or_else(|e| {
                log::error!("Error fetching the statistics page: {}", e);
                process::exit(1);
            });

            match outcome {
                ScrapeOutcome::Table(table) => {
                    export::write_csv(&table, &out).unwrap_or_else(|e| {
                        log::error!("Error writing {}: {}", out.display(), e);
                        process::exit(1);
                    });

                    match format {
                        OutputFormat::Json => serialize_json(&table),
                        OutputFormat::Text => {
                            println!("Data successfully saved to {}", out.display());
                            print!("{}", ScrapeStats::from_table(&table));
                        }
                    }
                }
                ScrapeOutcome::NoTable { page } => {
                    export::write_debug_page(&page, &debug_file).unwrap_or_else(|e| {
                        log::error!("Error writing {}: {}", debug_file.display(), e);
                        process::exit(1);
                    });

                    log::warn!("No innings data found. The page structure might be different.");
                    println!(
                        "Page content saved to {} for inspection",
                        debug_file.display()
                    );
                }
            }
        }

        Commands::Clean { input, output } => {
            log::info!("Cleaning {}...", input.display());

            let stats = cleaner::clean_file(&input, &output).unwrap_or_else(|e| {
                log::error!("Error cleaning {}: {}", input.display(), e);
                process::exit(1);
            });

            println!("Cleaned data saved to {}", output.display());
            print!("{}", stats);
        }
    }
}
