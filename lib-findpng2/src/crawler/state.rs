//! The shared state of one crawl and its synchronization discipline.
//!
//! Lock order: the dispatch lock comes before the visited lock. The results
//! lock is only ever taken while holding no other lock, and may itself be
//! held while taking the dispatch lock to flag the end of the crawl. No
//! cycles.

use std::sync::{Condvar, Mutex, MutexGuard};
use url::Url;

use super::frontier::Frontier;
use super::sink::ResultSink;
use super::visited::VisitedSet;

/// Everything the termination predicate reads, guarded by a single lock so
/// that it can be evaluated atomically.
#[derive(Debug, Default)]
struct Dispatch {
    frontier: Frontier,
    /// Workers currently between dispatch and completion of a fetch.
    in_flight: usize,
    /// Workers currently asleep on the condvar.
    waiters: usize,
    /// Once set, stays set: the crawl is draining and workers exit on
    /// their next check.
    done: bool,
}

/// The shared state of a crawl, threaded through workers by `Arc`.
pub(crate) struct CrawlState {
    dispatch: Mutex<Dispatch>,
    available: Condvar,
    visited: Mutex<VisitedSet>,
    results: Mutex<ResultSink>,
    target: usize,
}

impl CrawlState {
    pub fn new(target: usize) -> CrawlState {
        CrawlState {
            dispatch: Mutex::default(),
            available: Condvar::new(),
            visited: Mutex::default(),
            results: Mutex::default(),
            target,
        }
    }

    fn lock_dispatch(&self) -> MutexGuard<'_, Dispatch> {
        self.dispatch.lock().expect("dispatch lock poisoned")
    }

    /// Puts a url on the frontier, waking a sleeper if there is one.
    pub fn enqueue(&self, url: Url) {
        let mut dispatch = self.lock_dispatch();
        dispatch.frontier.push(url);
        if dispatch.waiters > 0 {
            self.available.notify_all();
        }
    }

    /// Blocks until there is a url to crawl or the crawl is over. A
    /// returned url has been claimed against the visited set and counted as
    /// in flight; the caller must pair it with a call to [`finish`].
    ///
    /// Returns `None` exactly when the crawl has drained: either the target
    /// was reached, or the frontier was empty with nobody in flight, in
    /// which case no work can ever appear again.
    ///
    /// [`finish`]: CrawlState::finish
    pub fn next_url(&self) -> Option<Url> {
        loop {
            let mut dispatch = self.lock_dispatch();

            // Wait for work, but detect global quiescence before going to
            // sleep: only in-flight workers can push, so an empty frontier
            // with nobody in flight can never refill.
            while dispatch.frontier.is_empty() && !dispatch.done {
                if dispatch.in_flight == 0 {
                    dispatch.done = true;
                    self.available.notify_all();
                    break;
                }
                dispatch.waiters += 1;
                dispatch = self
                    .available
                    .wait(dispatch)
                    .expect("dispatch lock poisoned");
                dispatch.waiters -= 1;
            }

            if dispatch.done {
                return None;
            }

            let url = match dispatch.frontier.pop() {
                Some(url) => url,
                None => continue,
            };

            // Test-and-insert under both locks: a url is dispatched to at
            // most one worker for the whole crawl.
            {
                let mut visited = self.visited.lock().expect("visited lock poisoned");
                if visited.contains(&url) {
                    continue;
                }
                visited.insert(&url);
            }

            dispatch.in_flight += 1;
            return Some(url);
        }
    }

    /// Pushes the urls discovered on a page, waking sleepers as they land.
    pub fn push_discovered(&self, urls: Vec<Url>) {
        for url in urls {
            self.enqueue(url);
        }
    }

    /// Appends a confirmed png to the sink. Reaching the target flips the
    /// crawl into draining and releases every sleeper.
    pub fn record_png(&self, url: Url) {
        let mut results = self.results.lock().expect("results lock poisoned");
        results.append(url);
        if results.len() >= self.target {
            let mut dispatch = self.lock_dispatch();
            dispatch.done = true;
            self.available.notify_all();
        }
    }

    /// Marks the end of one dispatched fetch and re-evaluates the
    /// termination predicate.
    pub fn finish(&self) {
        let mut dispatch = self.lock_dispatch();
        dispatch.in_flight -= 1;
        if dispatch.frontier.is_empty() && dispatch.in_flight == 0 {
            dispatch.done = true;
            self.available.notify_all();
        }
    }

    /// Ends the crawl unconditionally. Used when the target is zero: the
    /// crawl is born draining and no fetch ever happens.
    pub fn shut_down(&self) {
        let mut dispatch = self.lock_dispatch();
        dispatch.done = true;
        self.available.notify_all();
    }

    /// Urls still sitting on the frontier. Once all workers have joined,
    /// these are the ones the crawl never got to.
    pub fn pending_count(&self) -> usize {
        self.lock_dispatch().frontier.len()
    }

    /// Urls claimed so far.
    pub fn visited_count(&self) -> usize {
        self.visited.lock().expect("visited lock poisoned").len()
    }

    /// Drains the sink. Only meaningful once all workers have joined.
    pub fn take_results(&self) -> Vec<Url> {
        self.results.lock().expect("results lock poisoned").take()
    }

    /// Snapshots the visited set, in its internal iteration order. Only
    /// meaningful once all workers have joined.
    pub fn visited_urls(&self) -> Vec<String> {
        self.visited
            .lock()
            .expect("visited lock poisoned")
            .iter()
            .map(str::to_owned)
            .collect()
    }

    #[cfg(test)]
    fn is_done(&self) -> bool {
        self.lock_dispatch().done
    }
}
