use http::StatusCode;
use std::sync::Arc;
use url::Url;

use crate::error::Error;

use super::classify::{self, Classification};
use super::counter::Counter;
use super::downloader::{Downloaded, Downloader};
use super::parser;
use super::state::CrawlState;

/// The outcome of crawling one url.
#[derive(Debug)]
pub(crate) enum Crawled {
    /// An html page, with the followable links found on it.
    Page {
        status_code: StatusCode,
        links: Vec<Url>,
    },
    /// A confirmed png.
    Png { status_code: StatusCode },
    /// Served as a png, but the signature check failed.
    CorruptPng { status_code: StatusCode },
    /// Processable, but neither html nor png.
    Uninteresting { status_code: StatusCode },
    /// A status not worth processing. The url is dropped.
    BadStatus { status_code: StatusCode },
    /// Transport failure. The url is dropped, never retried.
    Error(Error),
}

/// One crawl worker. Owns its downloader outright; everything shared goes
/// through the [`CrawlState`].
pub(crate) struct CrawlWorker {
    downloader: Box<dyn Downloader>,
    state: Arc<CrawlState>,
    counter: Arc<Counter>,
}

impl CrawlWorker {
    pub fn new(
        downloader: Box<dyn Downloader>,
        state: Arc<CrawlState>,
        counter: Arc<Counter>,
    ) -> CrawlWorker {
        CrawlWorker {
            downloader,
            state,
            counter,
        }
    }

    /// Downloads and classifies one url. Touches no shared state.
    fn crawl(&mut self, page_url: &Url) -> Crawled {
        let downloaded = match self.downloader.download(page_url) {
            Ok(downloaded) => downloaded,
            Err(error) => return Crawled::Error(error),
        };

        match downloaded {
            Downloaded::Page {
                status_code,
                effective_url,
                content_type,
                content,
                fragment,
            } => {
                if !classify::is_processable(status_code) {
                    return Crawled::BadStatus { status_code };
                }

                self.counter.add_to_download_count(content.len());

                if let Some(seq) = fragment {
                    log::debug!("at {}: fragment sequence {}", page_url, seq);
                }

                match classify::classify(content_type.as_deref(), &content) {
                    Classification::Html => {
                        // Hrefs resolve against where the response actually
                        // came from, not where we asked.
                        let links = parser::extract_links(&effective_url, &content);
                        log::debug!("at {}: found {} links", page_url, links.len());

                        Crawled::Page { status_code, links }
                    }
                    Classification::ValidPng => Crawled::Png { status_code },
                    Classification::InvalidPng => Crawled::CorruptPng { status_code },
                    Classification::Other => Crawled::Uninteresting { status_code },
                }
            }
            Downloaded::BadStatus { status_code } => Crawled::BadStatus { status_code },
        }
    }

    /// Applies the outcome of one crawl to the shared state.
    fn store(&self, page_url: &Url, crawled: Crawled) {
        match crawled {
            Crawled::Page { links, .. } => self.state.push_discovered(links),
            Crawled::Png { .. } => {
                self.counter.register_png();
                self.state.record_png(page_url.clone());
            }
            Crawled::CorruptPng { .. } => {
                log::warn!("at {}: served as png, but the signature disagrees", page_url);
            }
            Crawled::Uninteresting { .. } => {}
            Crawled::BadStatus { status_code } => {
                self.counter.register_error();
                log::warn!("at {}: got status {}", page_url, status_code);
            }
            Crawled::Error(error) => {
                self.counter.register_error();
                log::warn!("at {}: {}", page_url, error);
            }
        }
    }

    /// Crawls until the frontier dries out or the target is reached.
    pub fn run(mut self) {
        log::info!("worker started");

        while let Some(page_url) = self.state.next_url() {
            log::debug!("crawling {}", page_url);
            self.counter.register_fetched();

            let crawled = self.crawl(&page_url);
            self.store(&page_url, crawled);

            self.state.finish();
        }

        log::info!("crawl drained, worker stopping");
    }
}
