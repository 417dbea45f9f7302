//! prompter CLI - demo shell over a command tree
//!
//! Command-line entry point for the prompter demo.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![allow(clippy::uninlined_format_args)]

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    cli::run()
}
