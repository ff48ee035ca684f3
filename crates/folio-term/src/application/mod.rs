//! Application layer orchestrating the terminal interface.
//!
//! This module handles user interactions, command-line parsing, and the main
//! UI loop. It coordinates between the domain logic and infrastructure
//! components.

pub mod cli;
pub mod ui;
