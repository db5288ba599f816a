//! Documented entities and their kinds

use std::fmt;
use std::str::FromStr;

/// Kind of a documented entity
///
/// The kind decides which folder a document is placed in and how links
/// between documents of different kinds are spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Class,
    Category,
    Protocol,
}

impl EntityKind {
    /// All kinds, in the order the project passes run
    pub const ALL: [EntityKind; 3] = [EntityKind::Class, EntityKind::Category, EntityKind::Protocol];

    /// The value of the `kind` attribute on a document root
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::Category => "category",
            EntityKind::Protocol => "protocol",
        }
    }

    /// The folder documents of this kind are stored in
    pub fn folder(self) -> &'static str {
        match self {
            EntityKind::Class => "Classes",
            EntityKind::Category => "Categories",
            EntityKind::Protocol => "Protocols",
        }
    }

    /// Parse a `kind` attribute value
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "class" => Some(EntityKind::Class),
            "category" => Some(EntityKind::Category),
            "protocol" => Some(EntityKind::Protocol),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown entity kind '{s}'"))
    }
}

/// Folder name for documents of the given kind
pub fn folder_for(kind: EntityKind) -> &'static str {
    kind.folder()
}

/// A documented project-local symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Declared name, e.g. `MyView` or `NSString(Extras)`
    pub name: String,
    /// Declared kind
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
