// arpsleuth - lib.rs
//
// Library entry point, exposing all modules for integration testing
// and potential future programmatic use.
//
// Binary-only concerns (banner, exit codes, the press-enter pause) live
// in `main.rs` and are not part of the library surface.

pub mod app;
pub mod core;
pub mod util;
