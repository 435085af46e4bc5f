//! CLI command handlers. Each command writes to the given writer so it can be
//! tested without a terminal.

mod bench;
mod demo;
mod inspect;
mod sanitize;

pub use bench::run_bench;
pub use demo::run_demo;
pub use inspect::run_inspect;
pub use sanitize::run_sanitize;
