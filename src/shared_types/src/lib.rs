//! Foreign type definitions for the esp-led-remote core, generated by `build.rs`
//! into `generated/`.
