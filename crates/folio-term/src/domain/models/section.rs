#[cfg(test)]
#[path = "section_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumVariantNames};

/// The five views the terminal can display. This is the single piece of
/// mutable navigation state; it only changes through the command interpreter.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumVariantNames,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    About,
    Projects,
    Blog,
    Contact,
    Help,
}

impl Section {
    /// The command string the fixed navigation controls submit. These are
    /// already in canonical form, so the interpreter accepts them verbatim.
    pub fn canonical_alias(&self) -> &'static str {
        match self {
            Section::About => "cat about.txt",
            Section::Projects => "ls projects/",
            Section::Blog => "ls blog/",
            Section::Contact => "cat contact.txt",
            Section::Help => "help",
        }
    }

    /// Label shown in the tab bar.
    pub fn title(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Blog => "blog",
            Section::Contact => "contact",
            Section::Help => "help",
        }
    }

    pub fn index(&self) -> usize {
        Section::iter().position(|e| e == *self).unwrap_or(0)
    }

    pub fn next(&self) -> Section {
        let sections = Section::iter().collect::<Vec<Section>>();
        sections[(self.index() + 1) % sections.len()]
    }

    pub fn previous(&self) -> Section {
        let sections = Section::iter().collect::<Vec<Section>>();
        sections[(self.index() + sections.len() - 1) % sections.len()]
    }
}
