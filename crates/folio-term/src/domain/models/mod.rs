pub mod command;
pub mod content;
pub mod event;
pub mod section;

pub use command::TerminalCommand;
pub use content::{BlogPost, ContactLink, Content, Profile, Project, ProjectStatus};
pub use event::Event;
pub use section::Section;
