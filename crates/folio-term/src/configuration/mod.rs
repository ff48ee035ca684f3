//! Configuration management for the terminal interface.
//!
//! This module provides centralized configuration handling for the theme,
//! the content file, and logging.

mod config;

pub use config::*;
