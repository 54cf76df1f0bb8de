//! Hunts for png images on the web, outward from a single seed page.
//!
//! The interesting part lives in [`crawler`]: a pool of worker threads
//! sharing a frontier of pending urls, a visited set and a sink of confirmed
//! pngs, coordinated by one condition variable so that the crawl stops
//! exactly when the target is met or the reachable link graph runs dry.

mod cli;
mod crawler;
mod error;
mod logger;
mod panic;

pub use cli::Profile;
pub use crawler::{
    Configuration, CrawlMaster, CrawlReport, Downloaded, Downloader, HttpConfiguration,
    HttpDownloader,
};
pub use error::Error;
pub use logger::init_logger;
pub use structopt::StructOpt;

pub const fn default_user_agent() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
}
