//! Lightweight markup scanning over document bodies
//!
//! The linker edits bodies as text, so it needs to know which bytes are
//! character data and which belong to tags, comments, CDATA sections,
//! processing instructions or entity references. The scanner tracks the
//! element stack, which is what makes protected regions structural: a
//! `name` element nested at any depth, with everything inside it, is one
//! region.

use std::ops::Range;

/// Element that carries a resolved or unresolved reference
pub const REFERENCE_ELEMENT: &str = "ref";

/// Attribute holding a reference's locator
pub const LOCATOR_ATTRIBUTE: &str = "id";

/// Kind of a scanned segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind<'a> {
    /// Character data
    Text,
    /// `<name ...>`
    Start(&'a str),
    /// `</name>`
    End(&'a str),
    /// `<name ... />`
    Empty(&'a str),
    /// `&amp;`, `&#x20;`, ...
    Reference,
    /// Comments, CDATA, processing instructions, declarations, unterminated markup
    Opaque,
}

/// A contiguous piece of a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind<'a>,
    pub range: Range<usize>,
}

/// Split a body into segments covering every byte exactly once
pub fn scan(body: &str) -> Vec<Segment<'_>> {
    let bytes = body.as_bytes();
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let (kind, end) = match bytes[pos] {
            b'<' => scan_markup(body, pos),
            b'&' => match reference_end(body, pos) {
                Some(end) => (SegmentKind::Reference, end),
                None => {
                    pos += 1;
                    continue;
                }
            },
            _ => {
                pos += 1;
                continue;
            }
        };

        if text_start < pos {
            segments.push(Segment {
                kind: SegmentKind::Text,
                range: text_start..pos,
            });
        }
        segments.push(Segment {
            kind,
            range: pos..end,
        });
        pos = end;
        text_start = end;
    }

    if text_start < bytes.len() {
        segments.push(Segment {
            kind: SegmentKind::Text,
            range: text_start..bytes.len(),
        });
    }

    segments
}

/// Byte ranges of character data
pub fn text_ranges(body: &str) -> Vec<Range<usize>> {
    scan(body)
        .into_iter()
        .filter(|segment| segment.kind == SegmentKind::Text)
        .map(|segment| segment.range)
        .collect()
}

/// Regions covered by any of the named elements, tags included
///
/// An element nested inside an already protected element does not open a
/// second region. An element left open protects the rest of the body.
pub fn protected_regions(body: &str, elements: &[&str]) -> Vec<Range<usize>> {
    let mut regions = Vec::new();
    let mut depth = 0usize;
    let mut open: Option<(usize, usize)> = None;

    for segment in scan(body) {
        match segment.kind {
            SegmentKind::Start(name) => {
                if open.is_none() && elements.contains(&name) {
                    open = Some((segment.range.start, depth));
                }
                depth += 1;
            }
            SegmentKind::End(_) => {
                depth = depth.saturating_sub(1);
                if let Some((start, open_depth)) = open {
                    if depth <= open_depth {
                        regions.push(start..segment.range.end);
                        open = None;
                    }
                }
            }
            SegmentKind::Empty(name) => {
                if open.is_none() && elements.contains(&name) {
                    regions.push(segment.range);
                }
            }
            SegmentKind::Text | SegmentKind::Reference | SegmentKind::Opaque => {}
        }
    }

    if let Some((start, _)) = open {
        regions.push(start..body.len());
    }

    regions
}

/// A body with its reference tags removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub body: String,
    /// The input zones, shifted onto the stripped body
    pub zones: Vec<Range<usize>>,
    /// Number of tags removed
    pub removed: usize,
}

/// Unwrap every reference outside `zones` back to its display text
///
/// Start, end and empty `ref` tags are dropped; their content stays. Nested
/// references therefore collapse in a single pass.
pub fn strip_references(body: &str, zones: &[Range<usize>]) -> Stripped {
    let mut out = String::with_capacity(body.len());
    let mut removed_spans: Vec<Range<usize>> = Vec::new();
    let mut cursor = 0;

    for segment in scan(body) {
        let is_reference = matches!(
            segment.kind,
            SegmentKind::Start(name) | SegmentKind::End(name) | SegmentKind::Empty(name)
                if name == REFERENCE_ELEMENT
        );
        if !is_reference || overlaps_any(&segment.range, zones) {
            continue;
        }
        out.push_str(&body[cursor..segment.range.start]);
        cursor = segment.range.end;
        removed_spans.push(segment.range);
    }
    out.push_str(&body[cursor..]);

    let shift = |point: usize| -> usize {
        point
            - removed_spans
                .iter()
                .filter(|span| span.end <= point)
                .map(|span| span.end - span.start)
                .sum::<usize>()
    };
    let zones = zones.iter().map(|zone| shift(zone.start)..shift(zone.end)).collect();

    Stripped {
        body: out,
        zones,
        removed: removed_spans.len(),
    }
}

/// Escape a value for use inside a double-quoted attribute
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Serialized form of a resolved reference
pub fn reference_markup(display_text: &str, locator: &str) -> String {
    format!(
        "<{REFERENCE_ELEMENT} {LOCATOR_ATTRIBUTE}=\"{}\">{display_text}</{REFERENCE_ELEMENT}>",
        escape_attribute(locator)
    )
}

pub(crate) fn overlaps_any(range: &Range<usize>, zones: &[Range<usize>]) -> bool {
    zones
        .iter()
        .any(|zone| range.start < zone.end && zone.start < range.end)
}

fn scan_markup(body: &str, start: usize) -> (SegmentKind<'_>, usize) {
    let rest = &body[start..];
    let until = |terminator: &str, skip: usize| -> usize {
        rest[skip..]
            .find(terminator)
            .map_or(body.len(), |at| start + skip + at + terminator.len())
    };

    if rest.starts_with("<!--") {
        return (SegmentKind::Opaque, until("-->", 4));
    }
    if rest.starts_with("<![CDATA[") {
        return (SegmentKind::Opaque, until("]]>", 9));
    }
    if rest.starts_with("<?") {
        return (SegmentKind::Opaque, until("?>", 2));
    }
    if rest.starts_with("<!") {
        return (SegmentKind::Opaque, declaration_end(body, start));
    }

    let Some(end) = tag_end(body, start) else {
        return (SegmentKind::Opaque, body.len());
    };
    let inner = &body[start + 1..end - 1];
    let (closing, inner) = match inner.strip_prefix('/') {
        Some(inner) => (true, inner),
        None => (false, inner),
    };
    let name_len = inner
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(inner.len());
    let name = &inner[..name_len];

    let kind = if closing {
        SegmentKind::End(name)
    } else if inner.ends_with('/') {
        SegmentKind::Empty(name)
    } else {
        SegmentKind::Start(name)
    };
    (kind, end)
}

/// End of a tag starting at `start`, skipping `>` inside quoted attribute values
fn tag_end(body: &str, start: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (offset, &byte) in body.as_bytes()[start + 1..].iter().enumerate() {
        match (quote, byte) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(byte),
            (None, b'>') => return Some(start + 1 + offset + 1),
            (None, b'<') => return None,
            (None, _) => {}
        }
    }
    None
}

/// End of a `<!DOCTYPE ...>` style declaration, allowing an internal subset
fn declaration_end(body: &str, start: usize) -> usize {
    let mut depth = 0usize;
    for (offset, &byte) in body.as_bytes()[start..].iter().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            b'>' if depth == 0 => return start + offset + 1,
            _ => {}
        }
    }
    body.len()
}

fn reference_end(body: &str, start: usize) -> Option<usize> {
    let rest = &body.as_bytes()[start + 1..];
    let len = rest
        .iter()
        .take(32)
        .position(|&b| b == b';')?;
    let name = &rest[..len];
    let valid = !name.is_empty()
        && name
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'#' | b'_' | b'-' | b'.' | b':'));
    valid.then_some(start + 1 + len + 1)
}
