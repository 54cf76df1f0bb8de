use url::Url;

/// The confirmed png urls, in the order they were found. Append-only while
/// workers are alive; drained once, after they have all joined.
#[derive(Debug, Default)]
pub(crate) struct ResultSink {
    urls: Vec<Url>,
}

impl ResultSink {
    pub fn append(&mut self, url: Url) {
        self.urls.push(url);
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn take(&mut self) -> Vec<Url> {
        std::mem::take(&mut self.urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn preserves_insertion_order() {
        let mut sink = ResultSink::default();
        sink.append(url("http://example.test/a.png"));
        sink.append(url("http://example.test/b.png"));
        sink.append(url("http://example.test/a.png"));

        assert_eq!(sink.len(), 3);
        assert_eq!(
            sink.take(),
            vec![
                url("http://example.test/a.png"),
                url("http://example.test/b.png"),
                url("http://example.test/a.png"),
            ],
        );
    }
}
