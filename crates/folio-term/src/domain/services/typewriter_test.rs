use super::*;

fn typewriter() -> Typewriter {
    return Typewriter::new(vec!["Ada".to_string(), "Lin".to_string()]);
}

#[test]
fn it_types_one_character_per_tick() {
    let mut tw = typewriter();

    assert_eq!(tw.advance(), TYPE_DELAY);
    assert_eq!(tw.display(), "A");
    assert_eq!(tw.advance(), TYPE_DELAY);
    assert_eq!(tw.display(), "Ad");
}

#[test]
fn it_holds_after_the_full_name() {
    let mut tw = typewriter();

    tw.advance();
    tw.advance();
    assert_eq!(tw.advance(), HOLD_DELAY);
    assert_eq!(tw.display(), "Ada");
}

#[test]
fn it_deletes_back_to_empty_and_advances_to_the_next_name() {
    let mut tw = typewriter();

    // Type "Ada" in full, then the hold tick flips to deleting.
    for _ in 0..3 {
        tw.advance();
    }
    assert_eq!(tw.advance(), DELETE_DELAY);
    assert_eq!(tw.display(), "Ada");

    assert_eq!(tw.advance(), DELETE_DELAY);
    assert_eq!(tw.display(), "Ad");
    assert_eq!(tw.advance(), DELETE_DELAY);
    assert_eq!(tw.display(), "A");
    assert_eq!(tw.advance(), SWAP_DELAY);
    assert_eq!(tw.display(), "");

    // The next typed character belongs to the second name.
    assert_eq!(tw.advance(), TYPE_DELAY);
    assert_eq!(tw.display(), "L");
}

#[test]
fn it_wraps_back_to_the_first_name() {
    let mut tw = typewriter();

    // Full cycle for both names: type (3), hold (1), delete (3) each.
    for _ in 0..14 {
        tw.advance();
    }
    assert_eq!(tw.display(), "");

    tw.advance();
    assert_eq!(tw.display(), "A");
}

#[test]
fn it_survives_an_empty_name_list() {
    let mut tw = Typewriter::new(vec![]);

    assert_eq!(tw.advance(), HOLD_DELAY);
    assert_eq!(tw.display(), "");
}
