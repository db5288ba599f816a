//! Per-entity documents

use std::ops::Range;

use sxd_document::parser;
use sxd_xpath::evaluate_xpath;

use crate::entity::{Entity, EntityKind};
use crate::error::LinkError;
use crate::linker::LinkedDocument;
use crate::markup;

/// Elements whose content must never receive a reference
pub const PROTECTED_ELEMENTS: [&str; 2] = ["name", "file"];

/// A document describing one class, category or protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifier used in failure reports
    pub id: String,
    /// Declared kind, if the document has one
    pub kind: Option<EntityKind>,
    /// Declared name, if the document has one
    pub name: Option<String>,
    /// Markup text the linker rewrites
    pub body: String,
    /// Byte ranges of `body` that are never linked
    pub exclusion_zones: Vec<Range<usize>>,
}

impl Document {
    /// Create a document from a plain body without protected regions
    pub fn new(
        id: impl Into<String>,
        kind: EntityKind,
        name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: Some(kind),
            name: Some(name.into()),
            body: body.into(),
            exclusion_zones: Vec::new(),
        }
    }

    /// Protect an extra byte range of the body
    #[must_use]
    pub fn with_exclusion_zone(mut self, zone: Range<usize>) -> Self {
        self.exclusion_zones.push(zone);
        self
    }

    /// Read a cleaned XML document
    ///
    /// Kind comes from the root `kind` attribute and name from the root's
    /// `name` child. Either may be missing; that only matters once the
    /// document is indexed or linked. Text that is not well-formed XML is
    /// rejected outright.
    pub fn from_xml(id: impl Into<String>, source: impl Into<String>) -> Result<Self, LinkError> {
        let id = id.into();
        let body = source.into();

        let package = parser::parse(&body)
            .map_err(|err| LinkError::MalformedDocument(format!("{id}: {err:?}")))?;
        let xml = package.as_document();

        let query = |xpath: &str| -> String {
            evaluate_xpath(&xml, xpath)
                .map(|value| value.string())
                .unwrap_or_default()
        };
        let kind = EntityKind::parse(&query("string(/*/@kind)"));
        let name = Some(query("string(/*/name)").trim().to_string()).filter(|name| !name.is_empty());

        let exclusion_zones = markup::protected_regions(&body, &PROTECTED_ELEMENTS);

        Ok(Self {
            id,
            kind,
            name,
            body,
            exclusion_zones,
        })
    }

    /// The entity this document declares
    pub fn entity(&self) -> Result<Entity, LinkError> {
        match (&self.name, self.kind) {
            (Some(name), Some(kind)) => Ok(Entity::new(name.clone(), kind)),
            (None, _) => Err(LinkError::MalformedDocument(format!("{}: missing name", self.id))),
            (_, None) => Err(LinkError::MalformedDocument(format!("{}: missing kind", self.id))),
        }
    }

    /// Replace the body with a linker result
    pub fn apply(&mut self, linked: LinkedDocument) {
        self.body = linked.body;
        self.exclusion_zones = linked.exclusion_zones;
    }
}

/// Whether a raw Doxygen file carries any documentation at all
///
/// A file counts as documented when a brief or detailed description holds
/// at least one paragraph.
pub fn is_documented(source: &str) -> Result<bool, LinkError> {
    let package =
        parser::parse(source).map_err(|err| LinkError::MalformedDocument(format!("{err:?}")))?;
    let xml = package.as_document();
    let value = evaluate_xpath(&xml, "boolean(//briefdescription//para | //detaileddescription//para)")
        .map_err(|err| LinkError::MalformedDocument(format!("{err:?}")))?;
    Ok(value.boolean())
}
