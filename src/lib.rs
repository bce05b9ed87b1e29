// * PDF-Harvest crawler core
// * Link canonicalization and PDF routing for the document crawler.
// * Everything in `engine` is pure: no I/O, no shared state, safe from any worker.

pub mod config;
pub mod engine;
pub mod ops;

// * Re-exports for convenient access
pub use engine::errors::UrlError;
pub use engine::normalization::normalize_url;
pub use engine::pdf_detection::looks_like_pdf_url;
pub use engine::triage::{triage_link, DiscoveredLink, FetchStrategy};
