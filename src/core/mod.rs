// arpsleuth - core/mod.rs
//
// Core filter and report logic.
// Generic over BufRead/Write so tests run against in-memory buffers.
// Must NOT depend on: app layer, terminal prompts, or process exit.

pub mod filter;
pub mod report;
