pub mod errors;
pub mod normalization;
pub mod pdf_detection;
pub mod triage;
