// * Configuration Constants
// * Central location for the link classification tunables

// * Suffix that marks a link as a PDF document (matched case-insensitively)
pub const PDF_EXTENSION: &str = ".pdf";

// * Placeholder base for resolving relative hrefs during classification only.
// * The `.invalid` TLD is reserved and never resolves.
pub const RELATIVE_BASE: &str = "http://relative.invalid/";
