// * Operations
// * Logging setup for the crawler that embeds this crate.
// * The library itself only emits `tracing` events and never installs a subscriber.

pub mod telemetry;

pub use telemetry::{init_tracing, init_tracing_pretty, init_tracing_with_level};
