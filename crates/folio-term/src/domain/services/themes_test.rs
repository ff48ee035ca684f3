use super::*;

#[test]
fn it_resolves_every_known_theme() {
    for name in ["green", "amber", "mono"] {
        let theme = Themes::get(name).unwrap();
        assert_eq!(theme.name.to_string(), name);
    }
}

#[test]
fn it_uses_distinct_colors_within_a_theme() {
    let theme = Themes::get("green").unwrap();
    assert_ne!(theme.text, theme.accent);
    assert_ne!(theme.text, theme.dim);
    assert_ne!(theme.accent, theme.dim);
}

#[test]
fn it_rejects_unknown_names() {
    let err = Themes::get("solarized").unwrap_err();
    assert!(err.to_string().contains("possible values"));
    assert!(err.to_string().contains("green, amber, mono"));
}
