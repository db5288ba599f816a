//! doxylink core - cross-reference linking for cleaned Doxygen documentation
//!
//! This crate provides:
//! - Catalog: known external framework symbols and their documentation URLs
//! - Index: the documented project entities of a run
//! - Linker: rewrites document bodies with `ref` elements
//! - Render: the external renderer seam
//! - Pipeline: the file-based run from raw Doxygen XML to linked XML and HTML

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// External symbol catalog
pub mod catalog;

/// Run configuration
pub mod config;

/// Per-entity documents
pub mod document;

/// Entities and entity kinds
pub mod entity;

/// Error types
pub mod error;

/// Entity index and its XML artifact
pub mod index;

/// Cross-linking engine
pub mod linker;

/// Markup scanning helpers
pub mod markup;

/// Longest-match symbol scanner
pub mod matcher;

/// Relative link locations
pub mod path;

/// File-based run
pub mod pipeline;

/// External renderers
pub mod render;

pub use catalog::{CatalogGroup, ExternalSymbolCatalog};
pub use config::{Config, ConfigError};
pub use document::Document;
pub use entity::{folder_for, Entity, EntityKind};
pub use error::{DocumentFailure, LinkError};
pub use index::{EntityIndex, IndexBuild};
pub use linker::{BatchReport, LinkOptions, LinkedDocument, ReferenceMarker, TextLinker};
pub use path::PathResolver;
pub use pipeline::{Pipeline, PipelineError, PipelineReport, Stylesheets};
pub use render::{NoopRenderer, RenderError, Renderer, XsltRenderer};
