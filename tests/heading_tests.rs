use safemark::{ErrorKind, RenderError, render};

#[test]
fn test_basic_heading() {
    assert_eq!(render("# Title").unwrap(), "<h1>Title</h1>\n");
}

#[test]
fn test_heading_levels() {
    assert_eq!(render("## Two").unwrap(), "<h2>Two</h2>\n");
    assert_eq!(render("###### Six").unwrap(), "<h6>Six</h6>\n");
}

#[test]
fn test_heading_overflow_clamps_to_h6() {
    assert_eq!(render("####### Over").unwrap(), "<h6>Over</h6>\n");
    assert_eq!(render("############ Way over").unwrap(), "<h6>Way over</h6>\n");
}

#[test]
fn test_hash_without_space_is_text() {
    assert_eq!(render("#NoSpace").unwrap(), "&#35;NoSpace");
    assert_eq!(render("##x").unwrap(), "&#35;&#35;x");
    assert_eq!(render("#").unwrap(), "&#35;");
}

#[test]
fn test_hash_mid_line_is_text() {
    assert_eq!(render("a # b").unwrap(), "a &#35; b");
}

#[test]
fn test_empty_heading() {
    assert_eq!(render("# ").unwrap(), "<h1></h1>\n");
}

#[test]
fn test_heading_with_emphasis() {
    assert_eq!(
        render("## Hello **World**").unwrap(),
        "<h2>Hello <b>World</b></h2>\n"
    );
}

#[test]
fn test_heading_escapes_specials() {
    assert_eq!(render("# a_b #c").unwrap(), "<h1>a&#45;b &#35;c</h1>\n");
    assert_eq!(render("# \\*star\\*").unwrap(), "<h1>&#42;star&#42;</h1>\n");
}

#[test]
fn test_heading_followed_by_text() {
    assert_eq!(render("# Title\nbody").unwrap(), "<h1>Title</h1>\nbody");
    assert_eq!(render("x\n# T").unwrap(), "x<h1>T</h1>\n");
}

#[test]
fn test_emphasis_spans_heading_boundary() {
    // emphasis state is shared across the whole render call
    assert_eq!(render("# *open\nx*").unwrap(), "<h1><i>open</h1>\nx</i>");
}

#[test]
fn test_raw_angle_in_heading_is_fatal() {
    let err = render("# a < b").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert_eq!(err.offset(), Some(4));

    let err = render("# a > b").unwrap_err();
    assert!(matches!(err, RenderError::RawHtml { byte: b'>', .. }));
}

#[test]
fn test_escaped_angles_in_heading() {
    assert_eq!(render("# \\<b\\>").unwrap(), "<h1>&lt;b&gt;</h1>\n");
}

#[test]
fn test_angle_after_heading_line_is_fine() {
    assert_eq!(render("# T\n<x").unwrap(), "<h1>T</h1>\n&lt;x");
}
