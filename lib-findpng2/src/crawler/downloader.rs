use http::StatusCode;
use url::Url;

use crate::error::Error;

/// Initial capacity of the receive buffer. Bodies beyond this grow the
/// buffer with the usual amortized doubling.
const RECV_BUF_SIZE: usize = 1024 * 1024;

/// How many 3xx hops the client follows before handing the chain back.
const MAX_REDIRECTS: usize = 5;

/// Custom header some lab servers use to number image fragments.
const FRAGMENT_HEADER: &str = "X-Ece252-Fragment";

/// What one GET brought back, after the client followed redirects.
#[derive(Debug)]
pub enum Downloaded {
    Page {
        status_code: StatusCode,
        /// Where the response was actually produced. This is the base for
        /// resolving relative hrefs, not the url that was asked for.
        effective_url: Url,
        content_type: Option<String>,
        content: Vec<u8>,
        /// Decimal value of the `X-Ece252-Fragment` header, when present.
        /// Informational only.
        fragment: Option<i64>,
    },
    BadStatus {
        status_code: StatusCode,
    },
}

/// The fetch side of a worker. One instance per worker thread, never
/// shared; this is also the seam the coordinator tests run through.
pub trait Downloader: Send {
    fn download(&mut self, page_url: &Url) -> Result<Downloaded, Error>;
}

/// A `Downloader` over a blocking `reqwest` client. The client, and with it
/// the cookie jar and connection pool, is reused across all requests of the
/// owning worker.
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    pub fn new(user_agent: &str) -> Result<HttpDownloader, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .cookie_store(true)
            .gzip(true)
            .deflate(true)
            .build()?;

        Ok(HttpDownloader { client })
    }
}

impl Downloader for HttpDownloader {
    fn download(&mut self, page_url: &Url) -> Result<Downloaded, Error> {
        let mut response = self.client.get(page_url.clone()).send()?;

        let status_code = response.status();
        if status_code.is_client_error() || status_code.is_server_error() {
            return Ok(Downloaded::BadStatus { status_code });
        }

        let effective_url = response.url().clone();
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
        let fragment = response
            .headers()
            .get(FRAGMENT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse().ok());

        let mut content = Vec::with_capacity(RECV_BUF_SIZE);
        response.copy_to(&mut content)?;

        Ok(Downloaded::Page {
            status_code,
            effective_url,
            content_type,
            content,
            fragment,
        })
    }
}
