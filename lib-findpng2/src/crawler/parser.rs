use lazy_static::lazy_static;
use scraper::{Html, Selector};
use url::{ParseError, Url};

use crate::error::Error;

/// Joins a raw href against the page it appeared on, with the common
/// problems accounted for.
///
/// Fragment-only and query-only hrefs resolve back to the base page and are
/// accepted; the visited set absorbs the re-crawl. Anything that is not
/// `http(s)` once resolved is rejected.
pub(crate) fn checked_join(base_url: &Url, raw: &str) -> Result<Url, Error> {
    // Empty hrefs carry no information at all.
    if raw.is_empty() {
        return Err(Error::Custom(format!("empty link on {}", base_url)));
    }

    // Absolute hrefs parse on their own; relative ones resolve against the
    // effective url of the fetch.
    let url = raw.parse().or_else(|err| {
        if err == ParseError::RelativeUrlWithoutBase {
            base_url.join(raw)
        } else {
            Err(err)
        }
    })?;

    // Now, make sure this is really the web (not mail, ftp and what not):
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::Custom(format!("unaccepted scheme: {}", raw)));
    }

    Ok(url)
}

/// Pulls every anchor href out of a document, in document order.
fn tree_search(html: &Html) -> Vec<String> {
    lazy_static! {
        static ref ANCHOR: Selector =
            Selector::parse("a").expect("failed to parse statics selector");
    }

    html.select(&ANCHOR)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses a page body and yields the absolute `http(s)` urls it links to.
///
/// Parsing is best effort: malformed markup degrades to whatever the parser
/// salvages, and an unusable body degrades to zero links, never to an
/// error.
pub(crate) fn extract_links(base_url: &Url, content: &[u8]) -> Vec<Url> {
    let html = Html::parse_document(&String::from_utf8_lossy(content));

    tree_search(&html)
        .into_iter()
        .filter_map(|raw| match checked_join(base_url, &raw) {
            Ok(url) => Some(url),
            Err(err) => {
                log::debug!("at {}: discarding {:?}: {}", base_url, raw, err);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://example.test/dir/page.html").unwrap()
    }

    #[test]
    fn joins_relative_hrefs_against_the_base() {
        assert_eq!(
            checked_join(&base(), "/a.png").unwrap().as_str(),
            "http://example.test/a.png",
        );
        assert_eq!(
            checked_join(&base(), "sibling.html").unwrap().as_str(),
            "http://example.test/dir/sibling.html",
        );
        assert_eq!(
            checked_join(&base(), "http://other.test/x").unwrap().as_str(),
            "http://other.test/x",
        );
    }

    #[test]
    fn fragment_and_query_hrefs_resolve_to_the_base_page() {
        assert_eq!(
            checked_join(&base(), "#section").unwrap().as_str(),
            "http://example.test/dir/page.html#section",
        );
        assert_eq!(
            checked_join(&base(), "?page=2").unwrap().as_str(),
            "http://example.test/dir/page.html?page=2",
        );
    }

    #[test]
    fn rejects_non_web_schemes_and_empty_hrefs() {
        assert!(checked_join(&base(), "mailto:someone@example.test").is_err());
        assert!(checked_join(&base(), "ftp://example.test/file").is_err());
        assert!(checked_join(&base(), "javascript:void(0)").is_err());
        assert!(checked_join(&base(), "").is_err());
    }

    #[test]
    fn extracts_anchors_in_document_order() {
        let body = br#"<html><body>
            <a href="/first">one</a>
            <p><a href="/second">two</a></p>
            <a name="no-href">three</a>
            <a href="/third">four</a>
        </body></html>"#;

        let links = extract_links(&base(), body);
        let raw: Vec<_> = links.iter().map(Url::as_str).collect();
        assert_eq!(
            raw,
            vec![
                "http://example.test/first",
                "http://example.test/second",
                "http://example.test/third",
            ],
        );
    }

    #[test]
    fn skips_unfollowable_links_but_keeps_the_rest() {
        let body = br#"<a href="mailto:x@y">mail</a>
            <a href="ftp://z/">ftp</a>
            <a href="/keep.png">keep</a>"#;

        let links = extract_links(&base(), body);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].as_str(), "http://example.test/keep.png");
    }

    #[test]
    fn malformed_html_is_parsed_best_effort() {
        let body = b"<html><a href='/salvaged'><td></zzz><a href=";
        let links = extract_links(&base(), body);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].as_str(), "http://example.test/salvaged");
    }

    #[test]
    fn extraction_is_idempotent() {
        let body = br#"<a href="/a">a</a><a href="/b">b</a><a href="/a">a again</a>"#;

        let first = extract_links(&base(), body);
        let second = extract_links(&base(), body);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn unparseable_body_yields_no_links() {
        let links = extract_links(&base(), &[0xFF, 0xFE, 0x00, 0x01]);
        assert!(links.is_empty());
    }
}
