use safemark::{ErrorKind, RenderError, render};

#[test]
fn test_balanced_passthrough() {
    assert_eq!(render("<output>x</output>").unwrap(), "<output>x</output>");
}

#[test]
fn test_content_is_still_escaped() {
    assert_eq!(
        render("<output><b>x</b></output>").unwrap(),
        "<output>&lt;b&gt;x&lt;/b&gt;</output>"
    );
}

#[test]
fn test_markdown_inside_passthrough() {
    assert_eq!(
        render("<output>a\n# T\n</output>").unwrap(),
        "<output>a<h1>T</h1>\n</output>"
    );
}

#[test]
fn test_unclosed_open_is_kept() {
    assert_eq!(render("<output>").unwrap(), "<output>");
}

#[test]
fn test_nested_passthrough() {
    let input = "<output><output></output></output>";
    assert_eq!(render(input).unwrap(), input);
}

#[test]
fn test_stray_close_is_fatal() {
    let err = render("</output>").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnbalancedPassthrough);
    assert_eq!(err, RenderError::UnbalancedPassthrough { offset: 0 });

    assert_eq!(
        render("<output></output></output>"),
        Err(RenderError::UnbalancedPassthrough { offset: 17 })
    );
}

#[test]
fn test_only_exact_tags_pass() {
    assert_eq!(render("<script>").unwrap(), "&lt;script&gt;");
    assert_eq!(render("<OUTPUT>").unwrap(), "&lt;OUTPUT&gt;");
    assert_eq!(render("<output >").unwrap(), "&lt;output &gt;");
}

#[test]
fn test_passthrough_in_quote() {
    assert_eq!(
        render("> <output>x</output>").unwrap(),
        "<blockquote><output>x</output></blockquote>\n"
    );
}
