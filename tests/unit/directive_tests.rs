/*!
 * Tests for the shared lang-directive grammar
 */

use multilang::directive::{
    self, Bracket, DirectiveScope, LangDirective,
};

#[test]
fn test_parse_with_angle_brackets_should_capture_parts() {
    let d = LangDirective::parse("<!--lang:en-->", 3).unwrap();
    assert_eq!(d.open, Bracket::Angle);
    assert_eq!(d.payload, "en");
    assert_eq!(d.close, Bracket::Angle);
    assert_eq!(d.line, 3);
}

#[test]
fn test_parse_with_square_brackets_should_capture_parts() {
    let d = LangDirective::parse("[!--lang:es--]", 1).unwrap();
    assert_eq!(d.open, Bracket::Square);
    assert_eq!(d.close, Bracket::Square);
    assert_eq!(d.payload, "es");
}

#[test]
fn test_parse_with_mixed_brackets_should_still_parse() {
    // mixed pairs are syntactically accepted; only the validator flags them
    let d = LangDirective::parse("[!--lang:en-->", 1).unwrap();
    assert_eq!(d.open, Bracket::Square);
    assert_eq!(d.close, Bracket::Angle);

    let d = LangDirective::parse("<!--lang:es--]", 1).unwrap();
    assert_eq!(d.open, Bracket::Angle);
    assert_eq!(d.close, Bracket::Square);
}

#[test]
fn test_parse_with_plain_text_should_return_none() {
    assert!(LangDirective::parse("just a line of prose", 1).is_none());
    // a bare clause without brackets fails the grammar
    assert!(LangDirective::parse("--lang:en--", 1).is_none());
}

#[test]
fn test_scope_with_wildcard_should_be_all() {
    let d = LangDirective::parse("<!--lang:*-->", 1).unwrap();
    assert!(d.is_wildcard());
    assert_eq!(d.scope(), DirectiveScope::All);
    assert!(d.scope().includes("anything"));
}

#[test]
fn test_scope_with_comma_list_should_split_codes() {
    let d = LangDirective::parse("<!--lang:en,es-->", 1).unwrap();
    assert!(!d.is_wildcard());
    let scope = d.scope();
    assert!(scope.includes("en"));
    assert!(scope.includes("es"));
    assert!(!scope.includes("it"));
}

#[test]
fn test_header_directive_payload_with_version_line_should_extract() {
    let payload = directive::header_directive_payload("<!--multilang v1 en:doc.md-->");
    assert_eq!(payload, Some("v1 en:doc.md"));
}

#[test]
fn test_header_directive_payload_with_other_text_should_return_none() {
    assert!(directive::header_directive_payload("<!--lang:en-->").is_none());
    assert!(directive::header_directive_payload("plain line").is_none());
    // must sit at the start of the line
    assert!(directive::header_directive_payload("  <!--multilang buttons-->").is_none());
}

#[test]
fn test_is_buttons_directive_with_repeated_closer_should_match() {
    assert!(directive::is_buttons_directive("<!--multilang buttons-->"));
    assert!(directive::is_buttons_directive("<!--multilang buttons-->-->"));
    assert!(!directive::is_buttons_directive("<!--multilang v1 en:a.md-->"));
}

#[test]
fn test_is_fence_marker_with_fence_lines_should_match() {
    assert!(directive::is_fence_marker("```"));
    assert!(directive::is_fence_marker("```rust"));
    assert!(directive::is_fence_marker("   ```"));
    assert!(directive::is_fence_marker("```  "));
    assert!(!directive::is_fence_marker("``inline``"));
    assert!(!directive::is_fence_marker("text"));
}

#[test]
fn test_rtrim_should_strip_trailing_whitespace_only() {
    assert_eq!(directive::rtrim("abc \t\r"), "abc");
    assert_eq!(directive::rtrim("  abc"), "  abc");
}

#[test]
fn test_contains_loose_lang_clause_should_flag_bare_clauses() {
    assert!(directive::contains_loose_lang_clause("foo --lang:en-- bar"));
    assert!(!directive::contains_loose_lang_clause("foo lang:en bar"));
}
