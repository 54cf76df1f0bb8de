use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("url parse error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("a worker thread panicked; see the log")]
    WorkerPanicked,
    #[error("{0}")]
    Custom(String),
}

impl From<String> for Error {
    fn from(this: String) -> Error {
        Error::Custom(this)
    }
}
