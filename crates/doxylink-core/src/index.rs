//! Index of documented project entities
//!
//! The index is built once from every document of a run and is read-only
//! while documents are linked. It is also persisted as `index.xml`, which
//! the linking phase loads back and the renderer turns into the project's
//! table of contents.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use sxd_document::dom::{ChildOfElement, ChildOfRoot, Element};
use sxd_document::{parser, writer, Package};

use crate::document::Document;
use crate::entity::{Entity, EntityKind};
use crate::error::{DocumentFailure, LinkError};
use crate::matcher::SymbolMatcher;

const PROJECT_ELEMENT: &str = "project";
const OBJECT_ELEMENT: &str = "object";
const NAME_ELEMENT: &str = "name";

/// Result of building an index from documents
#[derive(Debug, Clone)]
pub struct IndexBuild {
    pub index: EntityIndex,
    /// Documents left out of the index, with the reason
    pub excluded: Vec<DocumentFailure>,
}

/// Insertion-ordered set of project entities
#[derive(Debug, Clone, Default)]
pub struct EntityIndex {
    entities: Vec<Entity>,
    positions: HashMap<String, usize>,
    ambiguities: Vec<LinkError>,
    matchers: HashMap<EntityKind, SymbolMatcher>,
}

impl EntityIndex {
    /// Index every document that declares both a kind and a name
    ///
    /// Documents missing either are reported in [`IndexBuild::excluded`].
    /// Fails with [`LinkError::IndexUnavailable`] when no document is usable.
    pub fn build<'a>(documents: impl IntoIterator<Item = &'a Document>) -> Result<IndexBuild, LinkError> {
        let mut entities = Vec::new();
        let mut excluded = Vec::new();

        for document in documents {
            match document.entity() {
                Ok(entity) => entities.push(entity),
                Err(error) => {
                    log::warn!("excluding {} from the index: {error}", document.id);
                    excluded.push(DocumentFailure::new(document.id.clone(), error));
                }
            }
        }

        if entities.is_empty() {
            return Err(LinkError::IndexUnavailable(
                "no document declares both a kind and a name".to_string(),
            ));
        }

        Ok(IndexBuild {
            index: Self::from_entities(entities),
            excluded,
        })
    }

    /// Index entities in order
    ///
    /// A name seen again with the same kind is dropped; with a different kind
    /// the first registration wins and the collision is recorded.
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut index = Self::default();
        for entity in entities {
            index.register(entity);
        }
        index
    }

    fn register(&mut self, entity: Entity) {
        if let Some(&position) = self.positions.get(&entity.name) {
            let kept = self.entities[position].kind;
            if kept != entity.kind {
                let ambiguity = LinkError::AmbiguousSymbol {
                    name: entity.name,
                    kept,
                    ignored: entity.kind,
                };
                log::warn!("{ambiguity}");
                self.ambiguities.push(ambiguity);
            }
            return;
        }

        self.matchers
            .entry(entity.kind)
            .or_default()
            .insert(&entity.name);
        self.positions.insert(entity.name.clone(), self.entities.len());
        self.entities.push(entity);
    }

    /// Kind registered for `name`
    pub fn lookup(&self, name: &str) -> Option<EntityKind> {
        self.get(name).map(|entity| entity.kind)
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.positions.get(name).map(|&position| &self.entities[position])
    }

    /// Entities in discovery order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Entities of one kind in discovery order
    pub fn entities_of(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |entity| entity.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Name collisions between kinds, in the order they were found
    pub fn ambiguities(&self) -> &[LinkError] {
        &self.ambiguities
    }

    /// Matcher over the names of one kind, `None` when the kind has no entities
    pub(crate) fn matcher(&self, kind: EntityKind) -> Option<&SymbolMatcher> {
        self.matchers.get(&kind).filter(|matcher| !matcher.is_empty())
    }

    /// Serialize as an index document
    pub fn to_xml(&self, project_name: &str) -> io::Result<String> {
        let package = Package::new();
        let xml = package.as_document();

        let project = xml.create_element(PROJECT_ELEMENT);
        project.set_attribute_value("name", project_name);
        xml.root().append_child(project);

        for entity in &self.entities {
            let object = xml.create_element(OBJECT_ELEMENT);
            object.set_attribute_value("kind", entity.kind.as_str());
            let name = xml.create_element(NAME_ELEMENT);
            name.append_child(xml.create_text(&entity.name));
            object.append_child(name);
            project.append_child(object);
        }

        let mut out = Vec::new();
        writer::format_document(&xml, &mut out)?;
        String::from_utf8(out).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    /// Read an index document
    pub fn from_xml(source: &str) -> Result<Self, LinkError> {
        let package = parser::parse(source)
            .map_err(|err| LinkError::IndexUnavailable(format!("unparsable index: {err:?}")))?;
        let xml = package.as_document();

        let project = xml
            .root()
            .children()
            .into_iter()
            .find_map(|child| match child {
                ChildOfRoot::Element(element) => Some(element),
                _ => None,
            })
            .ok_or_else(|| LinkError::IndexUnavailable("index has no root element".to_string()))?;

        let mut entities = Vec::new();
        for object in child_elements(project, OBJECT_ELEMENT) {
            let kind = object.attribute_value("kind").and_then(EntityKind::parse);
            let name = child_elements(object, NAME_ELEMENT)
                .next()
                .map(|name| text_of(name).trim().to_string())
                .filter(|name| !name.is_empty());
            match (kind, name) {
                (Some(kind), Some(name)) => entities.push(Entity::new(name, kind)),
                _ => log::warn!("skipping index entry without kind or name"),
            }
        }

        if entities.is_empty() {
            return Err(LinkError::IndexUnavailable("index lists no entities".to_string()));
        }
        Ok(Self::from_entities(entities))
    }

    /// Load an index document from disk
    pub fn load(path: &Path) -> Result<Self, LinkError> {
        let source = fs::read_to_string(path)
            .map_err(|err| LinkError::IndexUnavailable(format!("{}: {err}", path.display())))?;
        Self::from_xml(&source)
    }
}

fn child_elements<'d>(parent: Element<'d>, name: &'static str) -> impl Iterator<Item = Element<'d>> {
    parent.children().into_iter().filter_map(move |child| match child {
        ChildOfElement::Element(element) if element.name().local_part() == name => Some(element),
        _ => None,
    })
}

fn text_of(element: Element<'_>) -> String {
    let mut text = String::new();
    for child in element.children() {
        match child {
            ChildOfElement::Text(chunk) => text.push_str(chunk.text()),
            ChildOfElement::Element(inner) => text.push_str(&text_of(inner)),
            _ => {}
        }
    }
    text
}
