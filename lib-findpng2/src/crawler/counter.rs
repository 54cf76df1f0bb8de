use std::sync::atomic::{AtomicUsize, Ordering};

/// Crawl statistics, shared by every worker. Purely informational: the
/// termination protocol never reads these.
#[derive(Debug, Default)]
pub struct Counter {
    /// Urls actually dispatched to a fetch.
    fetched_count: AtomicUsize,
    /// Fetches lost to transport failures or bad statuses.
    error_count: AtomicUsize,
    /// Pngs that passed the signature check.
    png_count: AtomicUsize,
    download_count: AtomicUsize,
}

impl Counter {
    pub fn register_fetched(&self) {
        self.fetched_count.fetch_add(1, Ordering::Release);
    }

    pub fn register_error(&self) {
        self.error_count.fetch_add(1, Ordering::Release);
    }

    pub fn register_png(&self) {
        self.png_count.fetch_add(1, Ordering::Release);
    }

    pub fn add_to_download_count(&self, amount: usize) {
        self.download_count.fetch_add(amount, Ordering::Relaxed);
    }

    pub fn n_fetched(&self) -> usize {
        self.fetched_count.load(Ordering::Acquire)
    }

    pub fn n_errors(&self) -> usize {
        self.error_count.load(Ordering::Acquire)
    }

    pub fn n_pngs(&self) -> usize {
        self.png_count.load(Ordering::Acquire)
    }

    pub fn n_downloaded(&self) -> usize {
        self.download_count.load(Ordering::Relaxed)
    }
}
