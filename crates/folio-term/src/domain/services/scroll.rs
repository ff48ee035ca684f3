#[cfg(test)]
#[path = "scroll_test.rs"]
mod tests;

use ratatui::widgets::ScrollbarState;

/// Vertical scroll position for the section body, kept in sync with the
/// rendered line count and the viewport height on every draw.
#[derive(Default)]
pub struct Scroll {
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
    entries: u16,
    viewport: u16,
}

impl Scroll {
    pub fn up(&mut self) {
        self.set_position(self.position.saturating_sub(1));
    }

    pub fn down(&mut self) {
        self.set_position(self.position.saturating_add(1));
    }

    pub fn up_page(&mut self) {
        self.set_position(self.position.saturating_sub(self.viewport));
    }

    pub fn down_page(&mut self) {
        self.set_position(self.position.saturating_add(self.viewport));
    }

    pub fn first(&mut self) {
        self.set_position(0);
    }

    pub fn set_state(&mut self, entries: usize, viewport: usize) {
        self.entries = u16::try_from(entries).unwrap_or(u16::MAX);
        self.viewport = u16::try_from(viewport).unwrap_or(u16::MAX);
        self.set_position(self.position);
    }

    fn max_position(&self) -> u16 {
        return self.entries.saturating_sub(self.viewport);
    }

    fn set_position(&mut self, position: u16) {
        self.position = position.min(self.max_position());
        self.scrollbar_state = ScrollbarState::new(self.max_position().into())
            .position(self.position.into());
    }
}
