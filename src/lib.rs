//! Mvn Shepherd - Sequential Maven build automation
//!
//! This crate provides functionality for:
//! - Building a configured list of Maven modules in order, with a per-module
//!   timing report
//! - Pruning aged artifact directories from the local repository
//! - Fail-fast or keep-going handling of module build failures

pub mod builder;
pub mod cleaner;
pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, ShepherdError};
