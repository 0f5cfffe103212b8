//! Library surface of the PSF loader CLI.
//!
//! The binary in `main.rs` is a thin shell over these modules; integration
//! tests drive the same command implementations directly.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod report;
pub mod summary;
