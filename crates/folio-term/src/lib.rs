//! Terminal user interface for a personal portfolio.
//!
//! This crate renders a portfolio — biography, projects, blog previews, and
//! contact links — as a simulated shell session. A command line at the bottom
//! of the screen accepts a small fixed vocabulary (`cat about.txt`,
//! `ls projects/`, ...) that switches between the five named sections.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Content, Event, Section, TerminalCommand};
pub use domain::services::AppStateProps;
