// * Link Triage
// * Composes normalization and PDF classification for the link-discovery step:
// * one call yields the frontier key and the fetch path for a discovered href.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::errors::UrlError;
use crate::engine::normalization::normalize_url;
use crate::engine::pdf_detection::looks_like_pdf_url;

// * Fetch/parse path the crawler should take for a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStrategy {
    // * Download and hand to the PDF parser
    Pdf,
    // * Fetch and parse as an HTML page
    Html,
}

// * A discovered link, ready for the visited-set and frontier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredLink {
    // * Dedup key produced by `normalize_url`
    pub canonical: String,
    pub strategy: FetchStrategy,
}

impl DiscoveredLink {
    pub fn is_pdf(&self) -> bool {
        self.strategy == FetchStrategy::Pdf
    }
}

// * Triages a raw href. Classification reads the raw input, not the canonical
// * form, so the two verdicts stay independent of each other.
pub fn triage_link(raw: &str) -> Result<DiscoveredLink, UrlError> {
    let canonical = normalize_url(raw)?;
    let strategy = if looks_like_pdf_url(raw) {
        FetchStrategy::Pdf
    } else {
        FetchStrategy::Html
    };

    debug!(url = raw, canonical = %canonical, ?strategy, "Triaged link");

    Ok(DiscoveredLink { canonical, strategy })
}
