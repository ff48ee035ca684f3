#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use tui_textarea::Input;
use tui_textarea::Key;

use super::Scroll;
use super::Theme;
use super::Themes;
use super::Typewriter;
use crate::domain::models::Content;
use crate::domain::models::Section;
use crate::domain::models::TerminalCommand;
use crate::infrastructure::ContentManager;

pub struct AppStateProps {
    pub theme_name: String,
    pub content_file: String,
}

/// All mutable UI state, owned exclusively by the main loop. Timer tasks and
/// the input stream never touch it directly; they send events instead.
pub struct AppState {
    pub content: Content,
    pub cursor_visible: bool,
    pub input: String,
    pub scroll: Scroll,
    pub section: Section,
    pub theme: Theme,
    pub typewriter: Typewriter,
}

impl AppState {
    pub async fn new(props: AppStateProps) -> Result<AppState> {
        let theme = Themes::get(&props.theme_name)?;
        let content = ContentManager::load(&props.content_file).await?;
        let typewriter = Typewriter::new(content.profile.names.clone());

        return Ok(AppState {
            content,
            cursor_visible: true,
            input: "".to_string(),
            scroll: Scroll::default(),
            section: Section::default(),
            theme,
            typewriter,
        });
    }

    /// Edit the command buffer. Only printable characters and backspace do
    /// anything; everything else falls through untouched.
    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input {
                key: Key::Char(c),
                ctrl: false,
                alt: false,
                ..
            } => {
                self.input.push(c);
            }
            Input {
                key: Key::Backspace,
                ..
            } => {
                self.input.pop();
            }
            _ => {}
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        self.input.push_str(text);
    }

    /// Submit the buffer to the interpreter. The buffer is cleared whether or
    /// not the input matched; an unmatched command is a silent no-op and the
    /// active section stays where it was.
    pub fn submit_input(&mut self) {
        let raw = std::mem::take(&mut self.input);

        if let Some(command) = TerminalCommand::parse(&raw) {
            tracing::debug!(command = ?command, "command matched");
            self.set_section(command.target());
        } else {
            tracing::debug!(input = raw, "command ignored");
        }
    }

    /// Fixed navigation controls submit a canonical alias straight to the
    /// interpreter, discarding whatever was typed.
    pub fn navigate(&mut self, section: Section) {
        self.input.clear();

        if let Some(command) = TerminalCommand::parse(section.canonical_alias()) {
            self.set_section(command.target());
        }
    }

    pub fn handle_cursor_blink(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    fn set_section(&mut self, section: Section) {
        self.section = section;
        self.scroll.first();
    }
}
