#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use super::Section;

/// A recognized terminal command. The vocabulary is fixed: every command is a
/// literal alias for one of the five sections, and anything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    CatAbout,
    LsProjects,
    LsBlog,
    CatContact,
    Help,
    Clear,
}

impl TerminalCommand {
    /// Normalize a raw input string and match it against the alias table.
    /// Unmatched input yields `None`; the caller clears the buffer either way
    /// and leaves the active section untouched on a miss.
    pub fn parse(raw: &str) -> Option<TerminalCommand> {
        let normalized = raw.trim().to_lowercase();

        match normalized.as_str() {
            "cat about.txt" | "about" => Some(TerminalCommand::CatAbout),
            "ls projects/" | "projects" => Some(TerminalCommand::LsProjects),
            "ls blog/" | "blog" => Some(TerminalCommand::LsBlog),
            "cat contact.txt" | "contact" => Some(TerminalCommand::CatContact),
            "help" => Some(TerminalCommand::Help),
            "clear" => Some(TerminalCommand::Clear),
            _ => None,
        }
    }

    /// The section this command switches to. `clear` resets to the initial
    /// About view rather than blanking the screen.
    pub fn target(&self) -> Section {
        match self {
            TerminalCommand::CatAbout => Section::About,
            TerminalCommand::LsProjects => Section::Projects,
            TerminalCommand::LsBlog => Section::Blog,
            TerminalCommand::CatContact => Section::Contact,
            TerminalCommand::Help => Section::Help,
            TerminalCommand::Clear => Section::About,
        }
    }
}
