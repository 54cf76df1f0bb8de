use std::sync::Arc;
use std::thread;
use url::Url;

use crate::cli::Profile;
use crate::error::Error;

use super::counter::Counter;
use super::state::CrawlState;
use super::worker::CrawlWorker;
use super::Configuration;

/// What a finished crawl leaves behind.
#[derive(Debug)]
pub struct CrawlReport {
    /// The confirmed png urls, in the order they were found. At most as
    /// many as the link graph could provide; at least the target, when the
    /// graph was large enough.
    pub pngs: Vec<Url>,
    /// Every url that was dispatched to a worker.
    pub visited: Vec<String>,
}

/// Owns a crawl from seed to joined workers.
pub struct CrawlMaster<C> {
    configuration: C,
}

impl<C: Configuration> CrawlMaster<C> {
    pub fn new(configuration: C) -> CrawlMaster<C> {
        CrawlMaster { configuration }
    }

    /// Runs the crawl to completion and reports what was found.
    pub fn start(&self, seed: Url, profile: &Profile) -> Result<CrawlReport, Error> {
        // Set panics to be logged:
        crate::panic::log_panics();

        let state = Arc::new(CrawlState::new(profile.target));
        let counter = Arc::new(Counter::default());

        log::info!("seeding crawl at {}", seed);
        state.enqueue(seed);

        // With nothing to find there is nothing to fetch: the crawl is
        // born draining and the workers exit on their first check.
        if profile.target == 0 {
            state.shut_down();
        }

        // One downloader per worker, built up front so that client
        // configuration failures surface before any thread starts.
        let downloaders = (0..profile.workers)
            .map(|_| self.configuration.downloader())
            .collect::<Result<Vec<_>, _>>()?;

        let handles = downloaders
            .into_iter()
            .enumerate()
            .map(|(worker_id, downloader)| {
                let worker =
                    CrawlWorker::new(downloader, Arc::clone(&state), Arc::clone(&counter));
                thread::Builder::new()
                    .name(format!("findpng-wrk-{}", worker_id))
                    .spawn(move || worker.run())
                    .map_err(Error::Io)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut panicked = false;
        for handle in handles {
            if handle.join().is_err() {
                panicked = true;
            }
        }

        log::info!(
            "crawl done: {} fetched, {} pngs, {} dropped, {} bytes downloaded; \
             {} urls visited, {} still pending",
            counter.n_fetched(),
            counter.n_pngs(),
            counter.n_errors(),
            counter.n_downloaded(),
            state.visited_count(),
            state.pending_count(),
        );

        if panicked {
            return Err(Error::WorkerPanicked);
        }

        Ok(CrawlReport {
            pngs: state.take_results(),
            visited: state.visited_urls(),
        })
    }
}
