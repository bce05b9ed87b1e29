// * PDF Link Classifier
// * Decides from the URL text alone whether a link targets a PDF, so the
// * crawler can route it to the document path before any request is issued.

use tracing::trace;
use url::{ParseError, Url};

use crate::config::constants::{PDF_EXTENSION, RELATIVE_BASE};

// * Returns true when the path, or any query parameter value, ends in `.pdf`.
// * Never fails: anything unparseable is simply not a PDF.
pub fn looks_like_pdf_url(raw: &str) -> bool {
    let Some(url) = parse_lenient(raw) else {
        return false;
    };

    let verdict = ends_with_pdf(url.path())
        || url
            .query()
            .is_some_and(|query| query_values(query).any(ends_with_pdf));

    trace!(url = raw, is_pdf = verdict, "Classified link");
    verdict
}

// * Relative hrefs are resolved against a placeholder base so `/a/b.pdf`
// * classifies the same as its absolute form.
fn parse_lenient(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_BASE)
            .and_then(|base| base.join(raw))
            .ok(),
        Err(e) => {
            trace!(url = raw, error = %e, "Unparseable link, classifying as non-PDF");
            None
        }
    }
}

// * Raw (still percent-encoded) values of `name=value` pairs. Bare names carry no value.
fn query_values(query: &str) -> impl Iterator<Item = &str> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').map(|(_, value)| value))
}

// * The parser has already turned literal spaces into `%20`, so an encoded
// * space counts as trailing whitespace too.
fn trim_trailing_noise(mut segment: &str) -> &str {
    loop {
        let trimmed = segment.trim_end_matches(|c: char| c == '/' || c.is_whitespace());
        let trimmed = trimmed.strip_suffix("%20").unwrap_or(trimmed);
        if trimmed.len() == segment.len() {
            return trimmed;
        }
        segment = trimmed;
    }
}

fn ends_with_pdf(segment: &str) -> bool {
    let segment = trim_trailing_noise(segment);
    let suffix = PDF_EXTENSION.as_bytes();
    segment.len() >= suffix.len()
        && segment.as_bytes()[segment.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}
