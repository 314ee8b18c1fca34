//! Shared error utilities

use miette::{NamedSource, SourceSpan};
use std::path::Path;

/// Create a NamedSource labelled with the document path
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), content)
}

/// Build a single-character span from a 1-based line and column
///
/// Positions past the end of the source collapse to an empty span at the end.
pub fn span_at(source: &str, line: usize, column: usize) -> SourceSpan {
    let line_start = line_to_offset(source, line.saturating_sub(1));
    let offset = line_start + column.saturating_sub(1);
    span_at_offset(source, offset)
}

/// Build a single-character span at a byte offset, clamped to the source
pub fn span_at_offset(source: &str, offset: usize) -> SourceSpan {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    if offset == source.len() {
        return SourceSpan::new(offset.into(), 0);
    }
    let len = source[offset..].chars().next().map_or(0, char::len_utf8);
    SourceSpan::new(offset.into(), len)
}

/// Calculate byte offset from a 0-based line number
fn line_to_offset(source: &str, target_line: usize) -> usize {
    let mut current_line = 0;

    for (idx, ch) in source.char_indices() {
        if current_line == target_line {
            return idx;
        }

        if ch == '\n' {
            current_line += 1;
        }
    }

    source.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_at_first_line() {
        let span = span_at("abc\ndef\n", 1, 2);
        assert_eq!(span.offset(), 1);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_span_at_later_line() {
        let span = span_at("abc\ndef\n", 2, 1);
        assert_eq!(span.offset(), 4);
    }

    #[test]
    fn test_span_past_end_is_empty() {
        let span = span_at("abc", 5, 1);
        assert_eq!(span.offset(), 3);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_span_respects_multibyte_chars() {
        let span = span_at_offset("é!", 0);
        assert_eq!(span.len(), 2);
    }
}
