use safemark::render;

#[test]
fn test_bold_and_italic() {
    assert_eq!(
        render("**bold** and *italic*").unwrap(),
        "<b>bold</b> and <i>italic</i>"
    );
}

#[test]
fn test_repeated_pairs() {
    assert_eq!(render("*a* *b*").unwrap(), "<i>a</i> <i>b</i>");
}

#[test]
fn test_unclosed_emphasis_is_left_open() {
    assert_eq!(render("*unclosed").unwrap(), "<i>unclosed");
    assert_eq!(render("**unclosed").unwrap(), "<b>unclosed");
}

#[test]
fn test_triple_star_is_bold_then_italic() {
    // no nesting repair: tags close in marker order
    assert_eq!(render("***x***").unwrap(), "<b><i>x</b></i>");
}

#[test]
fn test_lone_star_toggles() {
    assert_eq!(render("a * b").unwrap(), "a <i> b");
}

#[test]
fn test_escaped_star_is_entity() {
    assert_eq!(render("\\*not\\*").unwrap(), "&#42;not&#42;");
    assert_eq!(render("2 \\* 3").unwrap(), "2 &#42; 3");
}

#[test]
fn test_emphasis_across_paragraphs() {
    assert_eq!(render("**a\n\nb**").unwrap(), "<b>a<br />\n<br />b</b>");
}

#[test]
fn test_underscore_is_not_emphasis() {
    assert_eq!(render("_a_").unwrap(), "&#45;a&#45;");
}

#[test]
fn test_state_does_not_leak_between_calls() {
    assert_eq!(render("*a").unwrap(), "<i>a");
    assert_eq!(render("*a").unwrap(), "<i>a");
}
