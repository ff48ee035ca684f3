//! Infrastructure layer providing the content tables.
//!
//! The rest of the application treats content as an ordered, read-only set of
//! records; this module decides whether those records come from the built-in
//! defaults or from a user-provided content file.

pub mod content;

pub use content::ContentManager;
