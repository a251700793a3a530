//! Format trait for documentation markup parsed with tree-sitter.
//!
//! Section prose is markdown today, but the outline only needs a grammar and a query that
//! captures headings, so other markups can slot in behind the same trait.

pub mod markdown;

/// Tree-sitter grammar and heading query for one documentation markup.
pub trait Format {
    /// Grammar used to parse documentation text.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing whole heading nodes as `@heading`.
    fn heading_query(&self) -> &str;
    /// Heading depth for a heading node's marker child kind, if it is one.
    fn marker_level(&self, kind: &str) -> Option<usize>;
    /// Node kind holding the heading text.
    fn title_kind(&self) -> &str;
}
