//! # Search and Highlight
//!
//! A pure projection of a query over a small, static corpus of element
//! texts. Every keystroke recomputes the whole projection; there is no index.
//!
//! - empty query: every item visible, original text restored verbatim
//! - query shorter than the minimum: nothing changes
//! - otherwise: items containing the query (case-insensitively) are shown
//!   with each match marked, the rest hidden

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A run of item text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    /// Plain text.
    Text(String),
    /// Text matching the query.
    Mark(String),
}

/// How one corpus item should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    /// Whether the item is shown.
    pub visible: bool,
    /// Text split into plain and marked runs.
    pub segments: Vec<Segment>,
}

impl ItemView {
    fn plain(text: &str) -> Self {
        Self {
            visible: true,
            segments: vec![Segment::Text(text.to_string())],
        }
    }

    /// Whether any run is marked.
    #[must_use]
    pub fn has_marks(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Mark(_)))
    }

    /// The text with markers removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Text(t) | Segment::Mark(t) => t.as_str(),
            })
            .collect()
    }
}

/// Result of applying a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query is too short; leave the page as it is.
    Unchanged,
    /// The query was cleared; restore every item.
    Reset(Vec<ItemView>),
    /// The query filtered the corpus.
    Filtered(Vec<ItemView>),
}

/// Search state over a fixed corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIndex {
    items: Vec<String>,
    visible: Vec<bool>,
    query: String,
    min_chars: usize,
}

impl SearchIndex {
    /// Index the original texts. All items start visible.
    #[must_use]
    pub fn new(items: Vec<String>, min_chars: usize) -> Self {
        let visible = vec![true; items.len()];
        Self {
            items,
            visible,
            query: String::new(),
            min_chars,
        }
    }

    /// Original item texts.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The last applied query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether item `index` is currently shown.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Number of items currently shown.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Apply a new query.
    pub fn apply(&mut self, raw: &str) -> SearchOutcome {
        let query = raw.trim();

        if query.is_empty() {
            self.query.clear();
            self.visible.fill(true);
            return SearchOutcome::Reset(self.items.iter().map(|t| ItemView::plain(t)).collect());
        }

        if query.chars().count() < self.min_chars {
            return SearchOutcome::Unchanged;
        }

        self.query = query.to_string();
        let views: Vec<ItemView> = self
            .items
            .iter()
            .map(|text| highlight(text, query))
            .collect();
        for (flag, view) in self.visible.iter_mut().zip(&views) {
            *flag = view.visible;
        }
        tracing::debug!(
            "Search '{query}' matched {} of {}",
            self.visible_count(),
            self.items.len()
        );
        SearchOutcome::Filtered(views)
    }
}

/// Split `text` into plain and marked runs for `query`.
#[must_use]
pub fn highlight(text: &str, query: &str) -> ItemView {
    let ranges = match_ranges(text, query);
    if ranges.is_empty() {
        return ItemView {
            visible: false,
            segments: vec![Segment::Text(text.to_string())],
        };
    }

    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            segments.push(Segment::Text(text[cursor..range.start].to_string()));
        }
        segments.push(Segment::Mark(text[range.clone()].to_string()));
        cursor = range.end;
    }
    if cursor < text.len() {
        segments.push(Segment::Text(text[cursor..].to_string()));
    }

    ItemView {
        visible: true,
        segments,
    }
}

/// Byte ranges of non-overlapping case-insensitive occurrences of `needle`.
#[must_use]
pub fn match_ranges(haystack: &str, needle: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = haystack.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if let Some(len) = match_len(&chars[i..], &needle) {
            let end = chars.get(i + len).map_or(haystack.len(), |(b, _)| *b);
            ranges.push(chars[i].0..end);
            i += len;
        } else {
            i += 1;
        }
    }
    ranges
}

/// Number of haystack chars consumed by a match starting at `chars[0]`.
fn match_len(chars: &[(usize, char)], needle: &[char]) -> Option<usize> {
    let mut pos = 0;
    for (consumed, (_, c)) in chars.iter().enumerate() {
        for lower in c.to_lowercase() {
            if needle.get(pos) != Some(&lower) {
                return None;
            }
            pos += 1;
        }
        if pos == needle.len() {
            return Some(consumed + 1);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> SearchIndex {
        SearchIndex::new(
            vec![
                "Getting Started".to_string(),
                "Architecture Overview".to_string(),
                "Conflict Detection".to_string(),
            ],
            2,
        )
    }

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Hello hello", "HELLO"), vec![0..5, 6..11]);
        assert!(match_ranges("abc", "x").is_empty());
        assert!(match_ranges("abc", "").is_empty());
    }

    #[test]
    fn test_match_ranges_non_overlapping() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![0..2, 2..4]);
    }

    #[test]
    fn test_match_ranges_multibyte() {
        let text = "Über café";
        let ranges = match_ranges(text, "ÜBER");
        assert_eq!(ranges, vec![0..5]);
        assert_eq!(&text[match_ranges(text, "CAFÉ")[0].clone()], "café");
    }

    #[test]
    fn test_highlight_segments() {
        let view = highlight("Conflict Detection", "detect");
        assert!(view.visible);
        assert_eq!(
            view.segments,
            vec![
                Segment::Text("Conflict ".to_string()),
                Segment::Mark("Detect".to_string()),
                Segment::Text("ion".to_string()),
            ]
        );
        assert_eq!(view.plain_text(), "Conflict Detection");
    }

    #[test]
    fn test_unique_match_shows_only_that_item() {
        let mut index = corpus();
        let SearchOutcome::Filtered(views) = index.apply("archi") else {
            panic!("expected filtered outcome");
        };
        assert_eq!(views.iter().filter(|v| v.visible).count(), 1);
        assert!(views[1].visible);
        assert!(views[1].has_marks());
        assert!(!views[0].visible);
        assert!(!views[0].has_marks());
        assert_eq!(index.visible_count(), 1);
    }

    #[test]
    fn test_short_query_is_unchanged() {
        let mut index = corpus();
        index.apply("conf");
        assert_eq!(index.visible_count(), 1);

        assert_eq!(index.apply("c"), SearchOutcome::Unchanged);
        assert_eq!(index.visible_count(), 1);
        assert_eq!(index.query(), "conf");
    }

    #[test]
    fn test_empty_query_restores_originals() {
        let mut index = corpus();
        index.apply("started");
        let SearchOutcome::Reset(views) = index.apply("") else {
            panic!("expected reset outcome");
        };
        for (view, original) in views.iter().zip(index.items()) {
            assert!(view.visible);
            assert!(!view.has_marks());
            assert_eq!(&view.plain_text(), original);
        }
        assert_eq!(index.visible_count(), 3);
        assert_eq!(index.query(), "");
    }

    #[test]
    fn test_whitespace_query_counts_as_empty() {
        let mut index = corpus();
        assert!(matches!(index.apply("   "), SearchOutcome::Reset(_)));
    }

    #[test]
    fn test_no_match_hides_everything() {
        let mut index = corpus();
        index.apply("zzz");
        assert_eq!(index.visible_count(), 0);
        assert!(!index.is_visible(0));
    }
}
