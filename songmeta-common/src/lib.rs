//! # songmeta common library
//!
//! Shared code for the songmeta service crates:
//! - Error types
//! - Bootstrap configuration loading and resolution

pub mod config;
pub mod error;

pub use config::{ConfigOverrides, ServiceConfig, TomlConfig};
pub use error::{Error, Result};
