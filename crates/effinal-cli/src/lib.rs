//! Command-line driver for the effinal checker.
//!
//! Loads AST documents produced by a front end, runs every compilation unit
//! through a [`CompilationTask`](effinal_checker::CompilationTask) with the
//! effectively-final plugin registered, and reports the diagnostics.

pub mod args;
pub mod config;
pub mod driver;
pub mod fs;
pub mod reporter;
pub mod tracing_config;

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod args_tests;

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod config_tests;

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod driver_tests;

#[cfg(test)]
#[path = "../tests/fs_tests.rs"]
mod fs_tests;

#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod reporter_tests;
