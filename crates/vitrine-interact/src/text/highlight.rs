//! Match highlighting over arbitrary text.
//!
//! Partitions a string into segments around case-insensitive occurrences of
//! a literal query, for callers that render plain vs. emphasized spans. The
//! partition is lossless: concatenating the segment texts in order
//! reconstructs the input exactly.
//!
//! # Example
//!
//! ```
//! use vitrine_interact::text::highlight;
//!
//! let segments = highlight("Interactive Design", "in");
//! let marked: String = segments
//!     .iter()
//!     .map(|s| {
//!         if s.is_match {
//!             format!("[{}]", s.text)
//!         } else {
//!             s.text.to_string()
//!         }
//!     })
//!     .collect();
//! assert_eq!(marked, "[In]teractive Design");
//! ```

use regex::RegexBuilder;

/// One slice of a highlighted partition.
///
/// Segments borrow from the input text; the partition is zero-copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSegment<'a> {
    /// The slice of the original text.
    pub text: &'a str,
    /// Whether this slice matched the query.
    pub is_match: bool,
}

impl<'a> MatchSegment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    fn matched(text: &'a str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}

/// A compiled query, reusable across the items of a rendered list.
///
/// The query is matched as a literal substring: it is escaped before the
/// pattern is built, unconditionally, so no character can reach the pattern
/// engine with its special meaning intact. Matching is case-insensitive and
/// substring-based, not whole-word — a query of "in" matches inside "Sing"
/// and "Interactive" alike.
#[derive(Debug, Clone)]
pub struct Highlighter {
    /// `None` for the no-highlight cases (empty/whitespace query, and the
    /// defensive pattern-build failure arm).
    pattern: Option<regex::Regex>,
}

impl Highlighter {
    /// Compile a query.
    ///
    /// An empty or whitespace-only query produces a highlighter that marks
    /// nothing — the defined no-highlight behavior, not an error.
    pub fn new(query: &str) -> Self {
        if query.trim().is_empty() {
            return Self { pattern: None };
        }

        // The escape is a hard invariant; there is no raw-pattern entry
        // point. Build failure is unreachable for an escaped literal, and
        // the arm degrades to no highlighting rather than panicking.
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .ok();
        Self { pattern }
    }

    /// Whether this highlighter can mark anything.
    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Partition `text` into alternating plain and matched segments.
    ///
    /// Matches are found left-to-right, non-overlapping, greedy. Empty
    /// segments (e.g. before a match at position 0) are omitted; the
    /// concatenation of the returned texts still reconstructs `text`
    /// exactly.
    pub fn segments<'a>(&self, text: &'a str) -> Vec<MatchSegment<'a>> {
        let Some(pattern) = &self.pattern else {
            return vec![MatchSegment::plain(text)];
        };

        let mut segments = Vec::new();
        let mut cursor = 0;

        for found in pattern.find_iter(text) {
            if found.start() > cursor {
                segments.push(MatchSegment::plain(&text[cursor..found.start()]));
            }
            segments.push(MatchSegment::matched(found.as_str()));
            cursor = found.end();
        }

        if cursor < text.len() || segments.is_empty() {
            segments.push(MatchSegment::plain(&text[cursor..]));
        }

        segments
    }
}

/// One-shot convenience over [`Highlighter`].
///
/// Compiles `query` and partitions `text` in a single call. Prefer holding a
/// [`Highlighter`] when highlighting many items against the same query.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<MatchSegment<'a>> {
    Highlighter::new(query).segments(text)
}
