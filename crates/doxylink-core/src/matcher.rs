//! Longest-match symbol scanner
//!
//! Symbols are stored in a byte trie. At every candidate start position the
//! scanner walks the trie as far as the text allows and keeps the longest
//! symbol that also ends on an identifier boundary, so `FooBar` is never
//! reported as `Foo` followed by `Bar`, and `Foo` is never found inside
//! `FooBarBaz`.

use std::collections::BTreeMap;
use std::ops::Range;

/// Whether `c` continues an identifier-like token
pub fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug, Clone, Default)]
struct Node {
    children: BTreeMap<u8, usize>,
    /// Symbol id when a symbol ends at this node
    terminal: Option<usize>,
}

/// A match of one symbol in a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatch {
    /// Byte range of the match in the scanned text
    pub range: Range<usize>,
    /// Id of the matched symbol, see [`SymbolMatcher::symbol`]
    pub symbol: usize,
}

/// Immutable set of symbol names with a longest-match scanner
#[derive(Debug, Clone)]
pub struct SymbolMatcher {
    nodes: Vec<Node>,
    symbols: Vec<String>,
}

impl Default for SymbolMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolMatcher {
    /// Create an empty matcher
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            symbols: Vec::new(),
        }
    }

    /// Build a matcher from symbol names, keeping the first of any duplicates
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matcher = Self::new();
        for symbol in symbols {
            matcher.insert(symbol.as_ref());
        }
        matcher
    }

    /// Add a symbol; returns `false` for empty or already known names
    pub fn insert(&mut self, symbol: &str) -> bool {
        if symbol.is_empty() {
            return false;
        }

        let mut node = 0;
        for &byte in symbol.as_bytes() {
            node = match self.nodes[node].children.get(&byte) {
                Some(&next) => next,
                None => {
                    self.nodes.push(Node::default());
                    let next = self.nodes.len() - 1;
                    self.nodes[node].children.insert(byte, next);
                    next
                }
            };
        }

        if self.nodes[node].terminal.is_some() {
            return false;
        }
        self.nodes[node].terminal = Some(self.symbols.len());
        self.symbols.push(symbol.to_string());
        true
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol name for a match id
    pub fn symbol(&self, id: usize) -> &str {
        &self.symbols[id]
    }

    /// All symbols in insertion order
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Exact membership test
    pub fn contains(&self, name: &str) -> bool {
        let mut node = 0;
        for byte in name.as_bytes() {
            match self.nodes[node].children.get(byte) {
                Some(&next) => node = next,
                None => return false,
            }
        }
        self.nodes[node].terminal.is_some()
    }

    /// Find every non-overlapping match inside `regions` of `text`
    ///
    /// Regions must start and end on char boundaries. A match never extends
    /// past the end of the region it starts in, but identifier boundaries are
    /// checked against the whole text.
    pub fn find_all(&self, text: &str, regions: &[Range<usize>]) -> Vec<SymbolMatch> {
        let mut found = Vec::new();
        if self.is_empty() {
            return found;
        }

        for region in regions {
            let mut pos = region.start;
            while pos < region.end {
                if starts_at_boundary(text, pos) {
                    if let Some((end, symbol)) = self.longest_at(text, pos, region.end) {
                        found.push(SymbolMatch {
                            range: pos..end,
                            symbol,
                        });
                        pos = end;
                        continue;
                    }
                }
                pos += char_len_at(text, pos);
            }
        }

        found
    }

    /// Longest symbol starting at `start`, ending no later than `limit`
    fn longest_at(&self, text: &str, start: usize, limit: usize) -> Option<(usize, usize)> {
        let bytes = text.as_bytes();
        let mut node = 0;
        let mut best = None;
        let mut pos = start;

        while pos < limit {
            match self.nodes[node].children.get(&bytes[pos]) {
                Some(&next) => node = next,
                None => break,
            }
            pos += 1;
            if let Some(id) = self.nodes[node].terminal {
                if ends_at_boundary(text, &self.symbols[id], pos) {
                    best = Some((pos, id));
                }
            }
        }

        best
    }
}

fn char_len_at(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(1, char::len_utf8)
}

/// A match may start at `pos` unless it would continue an identifier
fn starts_at_boundary(text: &str, pos: usize) -> bool {
    let first = text[pos..].chars().next();
    let previous = text[..pos].chars().next_back();
    match (first, previous) {
        (Some(first), Some(previous)) => !(is_identifier_char(first) && is_identifier_char(previous)),
        _ => true,
    }
}

fn ends_at_boundary(text: &str, symbol: &str, end: usize) -> bool {
    let last = symbol.chars().next_back();
    let next = text[end..].chars().next();
    match (last, next) {
        (Some(last), Some(next)) => !(is_identifier_char(last) && is_identifier_char(next)),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(matcher: &SymbolMatcher, text: &str) -> Vec<String> {
        matcher
            .find_all(text, &[0..text.len()])
            .into_iter()
            .map(|m| text[m.range].to_string())
            .collect()
    }

    #[test]
    fn test_longest_symbol_wins() {
        let matcher = SymbolMatcher::from_symbols(["Foo", "FooBar"]);
        assert_eq!(names(&matcher, "FooBar and Foo"), vec!["FooBar", "Foo"]);

        // Insertion order does not matter
        let matcher = SymbolMatcher::from_symbols(["FooBar", "Foo"]);
        assert_eq!(names(&matcher, "FooBar"), vec!["FooBar"]);
    }

    #[test]
    fn test_no_match_inside_identifier() {
        let matcher = SymbolMatcher::from_symbols(["Foo", "FooBar"]);
        assert!(names(&matcher, "FooBarBaz MyFoo Foo_1 Foo2").is_empty());
        assert_eq!(names(&matcher, "(Foo), Foo."), vec!["Foo", "Foo"]);
    }

    #[test]
    fn test_shorter_symbol_when_longer_fails_boundary() {
        let matcher = SymbolMatcher::from_symbols(["NSAppleScript", "NSAppleScript Additions"]);
        assert_eq!(
            names(&matcher, "NSAppleScript Additionsx"),
            vec!["NSAppleScript"]
        );
        assert_eq!(
            names(&matcher, "NSAppleScript Additions."),
            vec!["NSAppleScript Additions"]
        );
    }

    #[test]
    fn test_punctuated_symbols() {
        let matcher = SymbolMatcher::from_symbols(["NSString(Extras)"]);
        assert_eq!(
            names(&matcher, "see NSString(Extras)for more"),
            vec!["NSString(Extras)"]
        );
    }

    #[test]
    fn test_match_stays_inside_region() {
        let matcher = SymbolMatcher::from_symbols(["FooBar", "Foo"]);
        let text = "FooBar";
        // The region stops after "Foo", and "Foo" is followed by an identifier char
        assert!(matcher.find_all(text, &[0..3]).is_empty());

        let text = "Foo Foo";
        let found = matcher.find_all(text, &[4..7]);
        assert_eq!(found, vec![SymbolMatch { range: 4..7, symbol: 1 }]);
    }

    #[test]
    fn test_case_sensitive_and_unicode() {
        let matcher = SymbolMatcher::from_symbols(["Café", "foo"]);
        assert_eq!(names(&matcher, "Foo Café éCafé"), vec!["Café"]);
    }

    #[test]
    fn test_duplicates_and_empty() {
        let mut matcher = SymbolMatcher::new();
        assert!(matcher.insert("Foo"));
        assert!(!matcher.insert("Foo"));
        assert!(!matcher.insert(""));
        assert_eq!(matcher.len(), 1);
        assert!(matcher.contains("Foo"));
        assert!(!matcher.contains("Fo"));
        assert!(SymbolMatcher::new().find_all("Foo", &[0..3]).is_empty());
    }
}
