//! Cross-linking of document bodies
//!
//! The linker rewrites bare mentions of known symbols into `ref` elements.
//! Every run starts by unwrapping the references already present, so
//! linking a document again with a different index or catalog never leaves
//! stale or nested references behind.
//!
//! Passes run in a fixed order and each one only sees character data that
//! no earlier pass has claimed:
//!
//! 1. one pass per catalog group, in catalog order
//! 2. one pass per entity kind (classes, categories, protocols), skipped
//!    when the index has no entity of that kind
//!
//! Text inside a document's exclusion zones is never scanned.

use std::ops::Range;

use crate::catalog::ExternalSymbolCatalog;
use crate::document::Document;
use crate::entity::EntityKind;
use crate::error::{DocumentFailure, LinkError};
use crate::index::EntityIndex;
use crate::markup;
use crate::path::PathResolver;

/// Options for a linking run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// Log every resolved reference at info level
    pub verbose: bool,
}

/// A reference found by one of the passes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceMarker {
    pub display_text: String,
    /// Where the reference points; `None` means it cannot be emitted
    pub locator: Option<String>,
    /// Byte range of the display text in the stripped body
    pub span: Range<usize>,
}

impl ReferenceMarker {
    /// Serialized `ref` element, or `None` for an unresolved marker
    pub fn to_markup(&self) -> Option<String> {
        self.locator
            .as_deref()
            .map(|locator| markup::reference_markup(&self.display_text, locator))
    }
}

/// A rewritten document body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedDocument {
    pub body: String,
    /// Exclusion zones of the input, moved onto the new body
    pub exclusion_zones: Vec<Range<usize>>,
    /// Emitted references in body order
    pub references: Vec<ReferenceMarker>,
    /// Display text of references that were left as plain text
    pub downgraded: Vec<String>,
}

/// Outcome of linking a set of documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Documents rewritten successfully
    pub linked: usize,
    /// References emitted over all documents
    pub references: usize,
    /// Documents that could not be linked
    pub failures: Vec<DocumentFailure>,
    /// Non-fatal problems, such as downgraded references
    pub warnings: Vec<DocumentFailure>,
}

/// Rewrites document bodies against a frozen index and catalog
#[derive(Debug, Clone, Copy)]
pub struct TextLinker<'a> {
    index: &'a EntityIndex,
    catalog: &'a ExternalSymbolCatalog,
    options: LinkOptions,
}

impl<'a> TextLinker<'a> {
    pub fn new(index: &'a EntityIndex, catalog: &'a ExternalSymbolCatalog, options: LinkOptions) -> Self {
        Self {
            index,
            catalog,
            options,
        }
    }

    /// Link one document
    ///
    /// Fails with [`LinkError::MalformedDocument`] when the document has no
    /// kind, since project locators depend on it.
    pub fn link(&self, document: &Document) -> Result<LinkedDocument, LinkError> {
        let source_kind = document.kind.ok_or_else(|| {
            LinkError::MalformedDocument(format!("{}: missing kind", document.id))
        })?;

        let stripped = markup::strip_references(&document.body, &document.exclusion_zones);
        if stripped.removed > 0 {
            log::debug!("{}: stripped {} existing references", document.id, stripped.removed);
        }
        let body = stripped.body;
        let zones = stripped.zones;
        let text = markup::text_ranges(&body);

        let mut claims: Vec<Range<usize>> = Vec::new();
        let mut markers: Vec<ReferenceMarker> = Vec::new();

        for group in self.catalog.groups() {
            let matcher = group.matcher();
            if matcher.is_empty() {
                continue;
            }
            let free = free_ranges(&text, &zones, &claims);
            let found = matcher.find_all(&body, &free);
            log::debug!("{}: {} matches from {}", document.id, found.len(), group.label());
            for hit in found {
                let symbol = matcher.symbol(hit.symbol);
                markers.push(ReferenceMarker {
                    display_text: symbol.to_string(),
                    locator: group.locator_for(symbol),
                    span: hit.range.clone(),
                });
                claims.push(hit.range);
            }
        }

        for target_kind in EntityKind::ALL {
            let Some(matcher) = self.index.matcher(target_kind) else {
                continue;
            };
            let free = free_ranges(&text, &zones, &claims);
            let found = matcher.find_all(&body, &free);
            log::debug!(
                "{}: {} matches from project {}",
                document.id,
                found.len(),
                target_kind.folder()
            );
            for hit in found {
                let name = matcher.symbol(hit.symbol);
                markers.push(ReferenceMarker {
                    display_text: name.to_string(),
                    locator: Some(PathResolver::resolve(source_kind, target_kind, name)),
                    span: hit.range.clone(),
                });
                claims.push(hit.range);
            }
        }

        markers.sort_by_key(|marker| marker.span.start);
        Ok(self.emit(document, &body, &zones, markers))
    }

    /// Write markers into the body, downgrading unresolved ones to plain text
    fn emit(
        &self,
        document: &Document,
        body: &str,
        zones: &[Range<usize>],
        markers: Vec<ReferenceMarker>,
    ) -> LinkedDocument {
        let mut out = String::with_capacity(body.len() + markers.len() * 32);
        let mut shifts: Vec<(usize, usize)> = Vec::new();
        let mut references = Vec::new();
        let mut downgraded = Vec::new();
        let mut cursor = 0;

        for marker in markers {
            out.push_str(&body[cursor..marker.span.start]);
            cursor = marker.span.end;

            match marker.to_markup() {
                Some(element) => {
                    if self.options.verbose {
                        log::info!(
                            "{}: {} -> {}",
                            document.id,
                            marker.display_text,
                            marker.locator.as_deref().unwrap_or_default()
                        );
                    }
                    out.push_str(&element);
                    shifts.push((marker.span.end, element.len() - marker.span.len()));
                    references.push(marker);
                }
                None => {
                    let error = LinkError::UnresolvableMatch(marker.display_text.clone());
                    log::warn!("{}: {error}", document.id);
                    out.push_str(&body[marker.span.clone()]);
                    downgraded.push(marker.display_text);
                }
            }
        }
        out.push_str(&body[cursor..]);

        let shift = |point: usize| -> usize {
            point
                + shifts
                    .iter()
                    .filter(|(end, _)| *end <= point)
                    .map(|(_, grown)| grown)
                    .sum::<usize>()
        };
        let exclusion_zones = zones.iter().map(|zone| shift(zone.start)..shift(zone.end)).collect();

        LinkedDocument {
            body: out,
            exclusion_zones,
            references,
            downgraded,
        }
    }

    /// Link every document in place
    ///
    /// A document that fails is left untouched and reported; the others are
    /// still linked. Results do not depend on document order.
    pub fn link_batch(&self, documents: &mut [Document]) -> BatchReport {
        let mut report = BatchReport::default();
        for document in documents.iter_mut() {
            match self.link(document) {
                Ok(linked) => {
                    report.linked += 1;
                    report.references += linked.references.len();
                    for name in &linked.downgraded {
                        report.warnings.push(DocumentFailure::new(
                            document.id.clone(),
                            LinkError::UnresolvableMatch(name.clone()),
                        ));
                    }
                    document.apply(linked);
                }
                Err(error) => {
                    log::warn!("{}: {error}", document.id);
                    report.failures.push(DocumentFailure::new(document.id.clone(), error));
                }
            }
        }
        report
    }
}

/// Character data not covered by any zone or claim
fn free_ranges(
    text: &[Range<usize>],
    zones: &[Range<usize>],
    claims: &[Range<usize>],
) -> Vec<Range<usize>> {
    let mut holes: Vec<&Range<usize>> = zones.iter().chain(claims).collect();
    holes.sort_by_key(|hole| hole.start);

    let mut free = Vec::new();
    for range in text {
        let mut start = range.start;
        for hole in &holes {
            if hole.end <= start || hole.start >= range.end {
                continue;
            }
            if hole.start > start {
                free.push(start..hole.start);
            }
            start = start.max(hole.end);
        }
        if start < range.end {
            free.push(start..range.end);
        }
    }
    free
}
