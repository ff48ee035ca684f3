use super::*;

#[test]
fn it_parses_every_alias_form() {
    let cases = [
        ("cat about.txt", TerminalCommand::CatAbout),
        ("about", TerminalCommand::CatAbout),
        ("ls projects/", TerminalCommand::LsProjects),
        ("projects", TerminalCommand::LsProjects),
        ("ls blog/", TerminalCommand::LsBlog),
        ("blog", TerminalCommand::LsBlog),
        ("cat contact.txt", TerminalCommand::CatContact),
        ("contact", TerminalCommand::CatContact),
        ("help", TerminalCommand::Help),
        ("clear", TerminalCommand::Clear),
    ];

    for (raw, expected) in cases {
        assert_eq!(TerminalCommand::parse(raw), Some(expected), "alias {raw}");
    }
}

#[test]
fn it_normalizes_case_and_whitespace() {
    assert_eq!(
        TerminalCommand::parse("  About  "),
        Some(TerminalCommand::CatAbout)
    );
    assert_eq!(
        TerminalCommand::parse("LS PROJECTS/"),
        Some(TerminalCommand::LsProjects)
    );
    assert_eq!(
        TerminalCommand::parse("\tCat Contact.TXT\n"),
        Some(TerminalCommand::CatContact)
    );
}

#[test]
fn it_rejects_unknown_input() {
    assert_eq!(TerminalCommand::parse("xyz"), None);
    assert_eq!(TerminalCommand::parse(""), None);
    assert_eq!(TerminalCommand::parse("ls  projects/"), None);
    assert_eq!(TerminalCommand::parse("cat about"), None);
    assert_eq!(TerminalCommand::parse("exit"), None);
}

#[test]
fn it_maps_commands_to_sections() {
    assert_eq!(TerminalCommand::CatAbout.target(), Section::About);
    assert_eq!(TerminalCommand::LsProjects.target(), Section::Projects);
    assert_eq!(TerminalCommand::LsBlog.target(), Section::Blog);
    assert_eq!(TerminalCommand::CatContact.target(), Section::Contact);
    assert_eq!(TerminalCommand::Help.target(), Section::Help);
}

#[test]
fn it_maps_clear_back_to_about() {
    assert_eq!(TerminalCommand::Clear.target(), Section::About);
}
