//! Command-line front end for the JVS to C# converter.
//!
//! The rewriting itself lives in [`jvs2ntk_rewrite`]; this crate adds
//! argument parsing, project configuration, logging and file I/O.

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::{Cli, Mode, convert_file};
pub use config::{Config, ConfigError, ModeConfig};
