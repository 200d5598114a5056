//! Greedy word wrap against a column width.
//!
//! Words are never split: a single word wider than the column sits alone on
//! its own (overfull) line. Explicit `\n` starts a new line.

use super::font_metrics::FontMetricTable;

/// Breaks `text` into lines no wider than `max_width_mm` at `size_pt`.
/// An empty or whitespace-only string yields no lines.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_mm: f32,
) -> Vec<String> {
    let space_w = metrics.space_width_mm(size_pt);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_w = metrics.width_mm(word, size_pt);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space_w + word_w > max_width_mm {
                // Line full, start a new one.
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

/// Number of printed lines `text` occupies; same algorithm as `wrap_text`.
pub fn line_count(text: &str, metrics: &FontMetricTable, size_pt: f32, max_width_mm: f32) -> usize {
    wrap_text(text, metrics, size_pt, max_width_mm).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::blocks::FontStyle;
    use crate::layout::font_metrics::{get_metrics, FontFamily};

    fn helvetica() -> &'static FontMetricTable {
        get_metrics(FontFamily::Helvetica, FontStyle::Normal)
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(wrap_text("", helvetica(), 9.0, 100.0).is_empty());
        assert!(wrap_text("   ", helvetica(), 9.0, 100.0).is_empty());
    }

    #[test]
    fn test_short_text_single_line() {
        let lines = wrap_text("Shipped the thing", helvetica(), 9.0, 190.0);
        assert_eq!(lines, vec!["Shipped the thing"]);
    }

    #[test]
    fn test_collapses_internal_whitespace() {
        let lines = wrap_text("a   b\tc", helvetica(), 9.0, 190.0);
        assert_eq!(lines, vec!["a b c"]);
    }

    #[test]
    fn test_long_text_wraps_without_losing_words() {
        let text = "Designed a multi-tenant event store on PostgreSQL partitions that sustains \
                    20k writes per second, replaced three legacy queues and cut infrastructure \
                    spend by a third across two regions while keeping latency flat";
        let lines = wrap_text(text, helvetica(), 9.0, 190.0);
        assert_eq!(lines.len(), 2, "got {lines:?}");
        let rejoined = lines.join(" ");
        let words: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined.split(' ').collect::<Vec<_>>(), words);
        for line in &lines {
            assert!(helvetica().width_mm(line, 9.0) <= 190.0 + 1e-3);
        }
    }

    #[test]
    fn test_overlong_word_gets_own_line() {
        let lines = wrap_text("a Supercalifragilisticexpialidocious b", helvetica(), 10.0, 20.0);
        assert_eq!(lines, vec!["a", "Supercalifragilisticexpialidocious", "b"]);
    }

    #[test]
    fn test_explicit_newlines_break() {
        let lines = wrap_text("one\ntwo", helvetica(), 10.0, 190.0);
        assert_eq!(lines, vec!["one", "two"]);
        assert_eq!(line_count("one\ntwo", helvetica(), 10.0, 190.0), 2);
    }
}
