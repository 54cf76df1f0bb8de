//! The crawler façade.

mod classify;
mod counter;
mod downloader;
mod frontier;
mod master;
mod parser;
mod sink;
mod state;
mod visited;
mod worker;

pub use self::counter::Counter;
pub use self::downloader::{Downloaded, Downloader, HttpDownloader};
pub use self::master::{CrawlMaster, CrawlReport};

use crate::error::Error;

/// How a crawl gets its collaborators. The one non-trivial job is handing
/// every worker a downloader of its own; handles are never shared between
/// threads.
pub trait Configuration: Send + Sync {
    /// Builds a fresh downloader. Called once per worker, before the
    /// worker's thread starts.
    fn downloader(&self) -> Result<Box<dyn Downloader>, Error>;
}

/// Crawls the real web: one blocking HTTP client per worker.
#[derive(Debug, Clone)]
pub struct HttpConfiguration {
    user_agent: String,
}

impl HttpConfiguration {
    pub fn new(user_agent: impl Into<String>) -> HttpConfiguration {
        HttpConfiguration {
            user_agent: user_agent.into(),
        }
    }
}

impl Default for HttpConfiguration {
    fn default() -> HttpConfiguration {
        HttpConfiguration::new(crate::default_user_agent())
    }
}

impl Configuration for HttpConfiguration {
    fn downloader(&self) -> Result<Box<dyn Downloader>, Error> {
        Ok(Box::new(HttpDownloader::new(&self.user_agent)?))
    }
}
