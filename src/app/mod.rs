// arpsleuth - app/mod.rs
//
// Application layer: input resolution and pipeline orchestration.
// Owns the terminal interaction the core layer must not perform.

pub mod input;
pub mod run;
