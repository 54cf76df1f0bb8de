use std::collections::HashSet;
use url::Url;

/// The urls already claimed by some worker. Once a url is in here, it stays
/// in here for the rest of the crawl.
///
/// The set owns its keys: every inserted url is copied, so no worker ever
/// aliases another collection's storage.
#[derive(Debug, Default)]
pub(crate) struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    /// Claims a url. Returns whether it was newly inserted, i.e. whether
    /// the caller now owns the fetch for it.
    pub fn insert(&mut self, url: &Url) -> bool {
        self.urls.insert(url.as_str().to_owned())
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.urls.contains(url.as_str())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Iterates in the set's internal order; used for the visited log.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}
