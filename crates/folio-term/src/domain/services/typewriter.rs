#[cfg(test)]
#[path = "typewriter_test.rs"]
mod tests;

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(120);
pub const DELETE_DELAY: Duration = Duration::from_millis(80);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);
pub const SWAP_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Cyclic typewriter animation over an ordered list of names.
///
/// Each call to [`Typewriter::advance`] performs one transition and returns
/// the delay until the next tick, so the owning loop can reschedule its timer
/// with the phase-appropriate interval: characters appear at 120ms, the full
/// name holds for 2s, deletion runs at 80ms, and a 400ms pause separates one
/// name from the next.
pub struct Typewriter {
    names: Vec<String>,
    name_index: usize,
    display: String,
    phase: Phase,
}

impl Typewriter {
    pub fn new(names: Vec<String>) -> Typewriter {
        return Typewriter {
            names,
            name_index: 0,
            display: "".to_string(),
            phase: Phase::Typing,
        };
    }

    /// The substring currently on screen.
    pub fn display(&self) -> &str {
        return &self.display;
    }

    /// Advance one tick and return the delay until the next one.
    pub fn advance(&mut self) -> Duration {
        if self.names.is_empty() {
            return HOLD_DELAY;
        }

        match self.phase {
            Phase::Typing => {
                let name = self.names[self.name_index].clone();
                let next_len = self.display.chars().count() + 1;
                self.display = name.chars().take(next_len).collect();

                if self.display == name {
                    self.phase = Phase::Holding;
                    return HOLD_DELAY;
                }

                return TYPE_DELAY;
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                return DELETE_DELAY;
            }
            Phase::Deleting => {
                self.display.pop();

                if self.display.is_empty() {
                    self.name_index = (self.name_index + 1) % self.names.len();
                    self.phase = Phase::Typing;
                    return SWAP_DELAY;
                }

                return DELETE_DELAY;
            }
        }
    }
}
