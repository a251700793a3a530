use super::{highlight_sections, Occurrence, Sentinel};
use crate::error::{Error, Result};
use crate::highlight::Highlighter;
use crate::section::Section;
use std::cell::Cell;

const SEP: &str = "/*[docfold-separator]*/";

fn sentinel() -> Sentinel {
    Sentinel::new(SEP).unwrap()
}

fn sections(code: &[&str]) -> Vec<Section> {
    code.iter()
        .map(|c| Section {
            code_text: (*c).to_string(),
            ..Section::default()
        })
        .collect()
}

fn code_html(sections: &[Section]) -> Vec<&str> {
    sections
        .iter()
        .map(|s| s.code_html.as_deref().unwrap())
        .collect()
}

/// Leaves text untouched and counts calls.
#[derive(Default)]
struct Identity {
    calls: Cell<usize>,
}

impl Highlighter for Identity {
    fn highlight(&self, code: &str) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(code.to_string())
    }
}

/// Wraps each separator, together with the whitespace after it, in one comment span.
struct GreedyComments;

impl Highlighter for GreedyComments {
    fn highlight(&self, code: &str) -> Result<String> {
        let mut out = String::new();
        let mut rest = code;
        while let Some(i) = rest.find(SEP) {
            out.push_str(&rest[..i]);
            let after = &rest[i + SEP.len()..];
            let ws = after.len() - after.trim_start().len();
            out.push_str("<span class=\"comment\">");
            out.push_str(&rest[i..i + SEP.len() + ws]);
            out.push_str("</span>");
            rest = &after[ws..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Wraps each separator, together with the newline before it, in one comment span.
struct LeadingComments;

impl Highlighter for LeadingComments {
    fn highlight(&self, code: &str) -> Result<String> {
        let wrapped = format!("<span class=\"comment\">\n{SEP}</span>");
        Ok(code.replace(&format!("\n{SEP}"), &wrapped))
    }
}

/// Escapes markup characters and otherwise leaves text alone.
struct Escaping;

impl Highlighter for Escaping {
    fn highlight(&self, code: &str) -> Result<String> {
        Ok(crate::highlight::escape(code))
    }
}

/// Loses every separator.
struct Lossy;

impl Highlighter for Lossy {
    fn highlight(&self, code: &str) -> Result<String> {
        Ok(code.replace(SEP, ""))
    }
}

struct Broken;

impl Highlighter for Broken {
    fn highlight(&self, _code: &str) -> Result<String> {
        Err(Error::Highlight("tokeniser exploded".to_string()))
    }
}

#[test]
fn test_join_places_separators_between_fragments_only() {
    assert_eq!(sentinel().join(["a\n", "b\n", "c\n"]), format!("a\n{SEP}b\n{SEP}c\n"));
    assert_eq!(sentinel().join(["only\n"]), "only\n");
}

#[test]
fn test_find_literal_and_wrapped() {
    let highlighted = format!("x{SEP}y<span class=\"comment\">{SEP} \t</span>z");
    let found = sentinel().find(&highlighted);
    assert_eq!(found.len(), 2);
    let end = 1 + SEP.len();
    assert_eq!(
        found[0],
        Occurrence {
            span: 1..end,
            leading: end..end,
            trailing: end..end,
        }
    );
    let wrapped_start = 2 + SEP.len();
    let carry_start = wrapped_start + "<span class=\"comment\">".len() + SEP.len();
    assert_eq!(found[1].span.start, wrapped_start);
    assert!(found[1].leading.is_empty());
    assert_eq!(&highlighted[found[1].trailing.clone()], " \t");
    assert_eq!(found[1].trailing.start, carry_start);
    assert_eq!(&highlighted[found[1].span.end..], "z");
}

#[test]
fn test_rejoin_highlights_once() {
    let mut secs = sections(&["a()\n", "b()\n", "c()\n"]);
    let highlighter = Identity::default();
    highlight_sections(&mut secs, &highlighter, &sentinel()).unwrap();
    assert_eq!(highlighter.calls.get(), 1);
    assert_eq!(code_html(&secs), vec!["a()\n", "b()\n", "c()\n"]);
}

#[test]
fn test_wrapped_whitespace_moves_to_following_section() {
    let mut secs = sections(&["a()\n", "    b()\n", "\tc()\n"]);
    highlight_sections(&mut secs, &GreedyComments, &sentinel()).unwrap();
    assert_eq!(code_html(&secs), vec!["a()\n", "    b()\n", "\tc()\n"]);
}

#[test]
fn test_wrapped_leading_whitespace_moves_to_following_section() {
    let mut secs = sections(&["a()\n", "b()\n", "c()\n"]);
    highlight_sections(&mut secs, &LeadingComments, &sentinel()).unwrap();
    assert_eq!(code_html(&secs), vec!["a()", "\nb()", "\nc()\n"]);
}

#[test]
fn test_whitespace_on_both_sides_is_carried_in_order() {
    let highlighted = format!("a<span class=\"comment\">\n{SEP} </span>b\n");
    let slices = sentinel().split(&highlighted, 2).unwrap();
    assert_eq!(slices, vec!["a".to_string(), "\n b\n".to_string()]);
}

#[test]
fn test_escaped_separator_is_found() {
    let angled = Sentinel::new("<#[docfold-separator]#>").unwrap();
    let mut secs = sections(&["x = 1\n", "y = \"<b>\"\n"]);
    highlight_sections(&mut secs, &Escaping, &angled).unwrap();
    assert_eq!(
        code_html(&secs),
        vec!["x = 1\n", "y = &quot;&lt;b&gt;&quot;\n"]
    );
}

#[test]
fn test_token_crossing_a_separator_is_reopened() {
    let highlighted = format!(
        "<span class=\"k\">s</span> <span class=\"string\">`one\n{SEP}two\n{SEP}three`</span>\n"
    );
    let slices = sentinel().split(&highlighted, 3).unwrap();
    assert_eq!(
        slices,
        vec![
            "<span class=\"k\">s</span> <span class=\"string\">`one\n</span>".to_string(),
            "<span class=\"string\">two\n</span>".to_string(),
            "<span class=\"string\">three`</span>\n".to_string(),
        ]
    );
}

#[test]
fn test_carry_whitespace_is_not_duplicated() {
    let highlighted = format!("a\n<span class=\"k\">{SEP}  </span>b\n");
    let slices = sentinel().split(&highlighted, 2).unwrap();
    assert_eq!(slices, vec!["a\n".to_string(), "  b\n".to_string()]);
    assert_eq!(slices.concat(), "a\n  b\n");
}

#[test]
fn test_empty_code_sections_are_kept() {
    let mut secs = sections(&["a()\n", "", "b()\n", ""]);
    highlight_sections(&mut secs, &GreedyComments, &sentinel()).unwrap();
    assert_eq!(code_html(&secs), vec!["a()\n", "", "b()\n", ""]);
}

#[test]
fn test_single_section_needs_no_separator() {
    let mut secs = sections(&["only()\n"]);
    highlight_sections(&mut secs, &Identity::default(), &sentinel()).unwrap();
    assert_eq!(code_html(&secs), vec!["only()\n"]);
}

#[test]
fn test_missing_separators_are_fatal() {
    let mut secs = sections(&["a()\n", "b()\n"]);
    let err = highlight_sections(&mut secs, &Lossy, &sentinel()).unwrap_err();
    assert!(matches!(
        err,
        Error::StructuralMismatch {
            expected: 1,
            found: 0
        }
    ));
    assert!(secs.iter().all(|s| s.code_html.is_none()));
}

#[test]
fn test_separator_in_source_is_fatal() {
    let mut secs = sections(&[&format!("x = \"{SEP}\"\n"), "b()\n"]);
    let err = highlight_sections(&mut secs, &Identity::default(), &sentinel()).unwrap_err();
    assert!(matches!(
        err,
        Error::StructuralMismatch {
            expected: 1,
            found: 2
        }
    ));
}

#[test]
fn test_highlighter_failure_propagates() {
    let mut secs = sections(&["a()\n", "b()\n"]);
    let err = highlight_sections(&mut secs, &Broken, &sentinel()).unwrap_err();
    assert!(matches!(err, Error::Highlight(_)));
    assert!(secs.iter().all(|s| s.code_html.is_none()));
}
