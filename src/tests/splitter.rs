use super::split;
use crate::language::CommentPattern;

fn slashes() -> CommentPattern {
    CommentPattern::new("//").unwrap()
}

fn pairs(source: &str) -> Vec<(String, String)> {
    split(source, &slashes())
        .into_iter()
        .map(|s| (s.doc_text, s.code_text))
        .collect()
}

#[test]
fn test_single_comment_then_code() {
    assert_eq!(
        pairs("// hello\nx := 1\n"),
        vec![("hello\n".to_string(), "x := 1\n".to_string())]
    );
}

#[test]
fn test_two_comment_groups() {
    assert_eq!(
        pairs("// a\nfoo()\n// b\nbar()\n"),
        vec![
            ("a\n".to_string(), "foo()\n".to_string()),
            ("b\n".to_string(), "bar()\n".to_string()),
        ]
    );
}

#[test]
fn test_code_only_file_is_one_section() {
    let sections = split("package main\n\nfunc main() {}\n", &slashes());
    assert_eq!(sections.len(), 1);
    assert!(sections[0].doc_text.is_empty());
    assert_eq!(sections[0].code_text, "package main\n\nfunc main() {}\n");
}

#[test]
fn test_comment_only_file_is_one_section() {
    let sections = split("// one\n// two\n", &slashes());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].doc_text, "one\ntwo\n");
    assert!(sections[0].code_text.is_empty());
}

#[test]
fn test_trailing_comment_section_has_empty_code() {
    assert_eq!(
        pairs("x()\n// the end\n"),
        vec![
            (String::new(), "x()\n".to_string()),
            ("the end\n".to_string(), String::new()),
        ]
    );
}

#[test]
fn test_empty_input_yields_one_empty_section() {
    let sections = split("", &slashes());
    assert_eq!(sections.len(), 1);
    assert!(sections[0].is_empty());
}

#[test]
fn test_blank_line_between_comments_does_not_split() {
    // The blank line is code, but only a comment *after* code opens a new section.
    assert_eq!(
        pairs("// a\n\n// b\nx\n"),
        vec![
            ("a\n".to_string(), "\n".to_string()),
            ("b\n".to_string(), "x\n".to_string()),
        ]
    );
}

#[test]
fn test_consecutive_comments_extend_documentation() {
    let sections = split("// # Title\n//\n// Body text.\nfn main() {}\n", &slashes());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].doc_text, "# Title\n\nBody text.\n");
}

#[test]
fn test_indented_comment_is_documentation() {
    let sections = split("fn f() {\n    // inside\n    g();\n}\n", &slashes());
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0].code_text, "fn f() {\n");
    assert_eq!(sections[1].doc_text, "inside\n");
    assert_eq!(sections[1].code_text, "    g();\n}\n");
}

#[test]
fn test_only_one_space_is_stripped() {
    let sections = split("//   indented\n", &slashes());
    assert_eq!(sections[0].doc_text, "  indented\n");
}

#[test]
fn test_trailing_comment_on_code_line_stays_code() {
    let sections = split("x := 1 // note\n", &slashes());
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].code_text, "x := 1 // note\n");
}

#[test]
fn test_missing_final_newline_is_added() {
    assert_eq!(
        pairs("// a\nb"),
        vec![("a\n".to_string(), "b\n".to_string())]
    );
}

#[test]
fn test_split_is_deterministic() {
    let source = "// a\nfoo()\n\n// b\n// c\nbar()\n// d\n";
    assert_eq!(split(source, &slashes()), split(source, &slashes()));
}
