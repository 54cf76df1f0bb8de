use url::Url;

/// The pending-work collection: urls waiting to be crawled, last in, first
/// out. The LIFO order gives the crawl a depth-first bias per page.
///
/// Duplicates may coexist here. Deduplication happens at dispatch time
/// against the visited set, not at insertion.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    urls: Vec<Url>,
}

impl Frontier {
    pub fn push(&mut self, url: Url) {
        self.urls.push(url);
    }

    pub fn pop(&mut self) -> Option<Url> {
        self.urls.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn pops_in_lifo_order() {
        let mut frontier = Frontier::default();
        frontier.push(url("http://example.test/first"));
        frontier.push(url("http://example.test/second"));
        frontier.push(url("http://example.test/third"));

        assert_eq!(frontier.pop(), Some(url("http://example.test/third")));
        assert_eq!(frontier.pop(), Some(url("http://example.test/second")));
        assert_eq!(frontier.pop(), Some(url("http://example.test/first")));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn tolerates_duplicates() {
        let mut frontier = Frontier::default();
        frontier.push(url("http://example.test/"));
        frontier.push(url("http://example.test/"));

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), frontier.pop());
        assert!(frontier.is_empty());
    }

    #[test]
    fn survives_growth() {
        let mut frontier = Frontier::default();
        for i in 0..10_000 {
            frontier.push(url(&format!("http://example.test/page/{}", i)));
        }

        assert_eq!(frontier.len(), 10_000);
        assert_eq!(frontier.pop(), Some(url("http://example.test/page/9999")));
    }
}
