use http::StatusCode;

/// The png magic: the 8 bytes every valid png file starts with.
/// See the png specification: https://www.w3.org/TR/png/
pub(crate) const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

const CT_HTML: &str = "text/html";
const CT_PNG: &str = "image/png";

/// What a processable response turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classification {
    /// An html page; the body goes through link extraction.
    Html,
    /// A png whose signature checks out; the url is a find.
    ValidPng,
    /// Served as a png, but the signature disagrees.
    InvalidPng,
    /// Anything else. Of no interest to the crawl; no side effects.
    Other,
}

/// Whether a response is worth processing at all: success, or a redirect
/// chain that ended on a 3xx after the client gave up following it.
pub(crate) fn is_processable(status_code: StatusCode) -> bool {
    status_code.is_success() || status_code.is_redirection()
}

pub(crate) fn is_png(content: &[u8]) -> bool {
    content.len() >= PNG_SIGNATURE.len() && content[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

/// Routes a processable body by its Content-Type header. The match is by
/// substring, so parameters like `; charset=utf-8` don't get in the way.
pub(crate) fn classify(content_type: Option<&str>, content: &[u8]) -> Classification {
    let content_type = match content_type {
        Some(content_type) => content_type,
        None => return Classification::Other,
    };

    if content_type.contains(CT_HTML) {
        Classification::Html
    } else if content_type.contains(CT_PNG) {
        if is_png(content) {
            Classification::ValidPng
        } else {
            Classification::InvalidPng
        }
    } else {
        Classification::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_is_routed_to_extraction() {
        assert_eq!(
            classify(Some("text/html; charset=utf-8"), b"<html></html>"),
            Classification::Html,
        );
        assert_eq!(classify(Some("text/html"), b""), Classification::Html);
    }

    #[test]
    fn png_signature_decides_validity() {
        let mut body = PNG_SIGNATURE.to_vec();
        body.extend_from_slice(b"rest of the file");
        assert_eq!(classify(Some("image/png"), &body), Classification::ValidPng);

        body[7] = 0x0B;
        assert_eq!(
            classify(Some("image/png"), &body),
            Classification::InvalidPng,
        );
    }

    #[test]
    fn truncated_png_is_invalid() {
        assert_eq!(
            classify(Some("image/png"), &PNG_SIGNATURE[..7]),
            Classification::InvalidPng,
        );
        assert_eq!(classify(Some("image/png"), b""), Classification::InvalidPng);
    }

    #[test]
    fn everything_else_is_other() {
        assert_eq!(
            classify(Some("application/json"), b"{}"),
            Classification::Other,
        );
        assert_eq!(classify(Some("image/jpeg"), b"\xff\xd8"), Classification::Other);
        assert_eq!(classify(None, b"anything"), Classification::Other);
    }

    #[test]
    fn processable_means_2xx_or_3xx() {
        assert!(is_processable(StatusCode::OK));
        assert!(is_processable(StatusCode::NO_CONTENT));
        assert!(is_processable(StatusCode::MOVED_PERMANENTLY));
        assert!(is_processable(StatusCode::from_u16(399).unwrap()));

        assert!(!is_processable(StatusCode::BAD_REQUEST));
        assert!(!is_processable(StatusCode::NOT_FOUND));
        assert!(!is_processable(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!is_processable(StatusCode::CONTINUE));
    }
}
