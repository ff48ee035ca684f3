use strum::IntoEnumIterator;

use super::*;
use crate::domain::models::TerminalCommand;

#[test]
fn it_defaults_to_about() {
    assert_eq!(Section::default(), Section::About);
}

#[test]
fn it_cycles_forward_through_all_sections() {
    let mut section = Section::About;
    let mut seen = vec![section];
    for _ in 0..4 {
        section = section.next();
        seen.push(section);
    }

    assert_eq!(seen, Section::iter().collect::<Vec<Section>>());
    assert_eq!(section.next(), Section::About);
}

#[test]
fn it_cycles_backward() {
    assert_eq!(Section::About.previous(), Section::Help);
    assert_eq!(Section::Help.previous(), Section::Contact);
    assert_eq!(Section::Projects.previous(), Section::About);
}

#[test]
fn canonical_aliases_round_trip_through_the_interpreter() {
    for section in Section::iter() {
        let command = TerminalCommand::parse(section.canonical_alias())
            .unwrap_or_else(|| panic!("alias for {section} did not parse"));
        assert_eq!(command.target(), section);
    }
}
