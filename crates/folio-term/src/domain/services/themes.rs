#[cfg(test)]
#[path = "themes_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use ratatui::style::Color;
use strum::IntoEnumIterator;
use strum::VariantNames;
use strum_macros::{Display, EnumIter, EnumVariantNames};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumVariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum ThemeName {
    Green,
    Amber,
    Mono,
}

/// Phosphor palette used by every widget. `text` is the body color, `accent`
/// highlights names and headers, `dim` is for chrome and tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: ThemeName,
    pub text: Color,
    pub accent: Color,
    pub dim: Color,
}

pub struct Themes {}

impl Themes {
    pub fn get(name: &str) -> Result<Theme> {
        let Some(theme_name) = ThemeName::iter().find(|e| e.to_string() == name) else {
            bail!(
                "unknown theme '{name}', possible values are: {}",
                ThemeName::VARIANTS.join(", ")
            );
        };

        let theme = match theme_name {
            ThemeName::Green => Theme {
                name: theme_name,
                text: Color::Rgb(51, 255, 51),
                accent: Color::Rgb(179, 255, 179),
                dim: Color::Rgb(0, 153, 0),
            },
            ThemeName::Amber => Theme {
                name: theme_name,
                text: Color::Rgb(255, 176, 0),
                accent: Color::Rgb(255, 214, 128),
                dim: Color::Rgb(153, 106, 0),
            },
            ThemeName::Mono => Theme {
                name: theme_name,
                text: Color::Gray,
                accent: Color::White,
                dim: Color::DarkGray,
            },
        };

        return Ok(theme);
    }
}
