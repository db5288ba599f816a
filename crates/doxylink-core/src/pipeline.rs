//! File-based documentation run
//!
//! A run turns a directory of raw Doxygen XML into:
//!
//! ```text
//! <output>/xml/index.xml
//! <output>/xml/Classes/<name>.xml      (and Categories/, Protocols/)
//! <output>/html/index.html             (unless XML-only)
//! <output>/html/Classes/<name>.html
//! <output>/html/css/...
//! ```
//!
//! The index is written to disk and loaded back before any document is
//! linked, so every document sees the complete project.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::ExternalSymbolCatalog;
use crate::config::{Config, ConfigError};
use crate::document::{self, Document};
use crate::entity::folder_for;
use crate::error::{DocumentFailure, LinkError};
use crate::index::EntityIndex;
use crate::linker::{LinkOptions, TextLinker};
use crate::render::{NoopRenderer, RenderError, Renderer, XsltRenderer};

/// Replaced by the project name once everything else is written
pub const PROJECT_PLACEHOLDER: &str = "##PROJECT##";

pub const INDEX_FILE: &str = "index.xml";
pub const INDEX_HTML_FILE: &str = "index.html";
pub const XML_DIR: &str = "xml";
pub const HTML_DIR: &str = "html";

pub const CLEAN_STYLESHEET: &str = "object.xslt";
pub const OBJECT_HTML_STYLESHEET: &str = "object2xhtml.xslt";
pub const INDEX_HTML_STYLESHEET: &str = "index2xhtml.xslt";
pub const ASSETS_DIR: &str = "css";

/// Errors that stop a run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("input path is not a directory: {}", .0.display())]
    InputNotDirectory(PathBuf),

    #[error("output path is not a directory: {}", .0.display())]
    OutputNotDirectory(PathBuf),

    #[error("invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to access {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Link(#[from] LinkError),
}

fn access(path: &Path) -> impl FnOnce(io::Error) -> PipelineError + '_ {
    move |source| PipelineError::Access {
        path: path.to_path_buf(),
        source,
    }
}

/// Renderers used by a run
pub struct Stylesheets {
    /// Raw Doxygen XML to a cleaned document
    pub clean: Box<dyn Renderer>,
    /// Linked document to HTML
    pub object_html: Box<dyn Renderer>,
    /// Index document to HTML
    pub index_html: Box<dyn Renderer>,
    /// Directory copied next to the HTML output
    pub assets: Option<PathBuf>,
}

impl Stylesheets {
    /// The XSLT stylesheets shipped in `dir`
    pub fn xslt(dir: &Path) -> Self {
        Self {
            clean: Box::new(XsltRenderer::new(dir.join(CLEAN_STYLESHEET))),
            object_html: Box::new(XsltRenderer::new(dir.join(OBJECT_HTML_STYLESHEET))),
            index_html: Box::new(XsltRenderer::new(dir.join(INDEX_HTML_STYLESHEET))),
            assets: Some(dir.join(ASSETS_DIR)),
        }
    }

    /// Inputs are already clean and HTML output is the linked XML
    pub fn passthrough() -> Self {
        Self {
            clean: Box::new(NoopRenderer),
            object_html: Box::new(NoopRenderer),
            index_html: Box::new(NoopRenderer),
            assets: None,
        }
    }
}

/// A file the external renderer could not produce
#[derive(Debug)]
pub struct RenderFailure {
    pub document: PathBuf,
    pub error: RenderError,
}

impl fmt::Display for RenderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.document.display(), self.error)
    }
}

/// Summary of a completed run
#[derive(Debug, Default)]
pub struct PipelineReport {
    /// Documents placed under `xml/`
    pub documents: usize,
    /// Inputs without any documentation
    pub undocumented: usize,
    /// References emitted over all documents
    pub references: usize,
    /// Documents that were dropped or left unlinked
    pub failures: Vec<DocumentFailure>,
    /// Cleaning or rendering failures
    pub render_failures: Vec<RenderFailure>,
    /// Ambiguous names and downgraded references
    pub warnings: Vec<DocumentFailure>,
}

impl PipelineReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.render_failures.is_empty()
    }
}

/// A document placed under `xml/`
struct Placed {
    path: PathBuf,
    id: String,
}

/// One documentation run over an input directory
pub struct Pipeline {
    input: PathBuf,
    output: PathBuf,
    project_name: String,
    xml_only: bool,
    options: LinkOptions,
    catalog: ExternalSymbolCatalog,
    patterns: Vec<glob::Pattern>,
    stylesheets: Stylesheets,
}

impl Pipeline {
    /// Prepare a run
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or an input pattern
    /// does not compile.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        config: &Config,
        stylesheets: Stylesheets,
    ) -> Result<Self, PipelineError> {
        config.validate()?;
        let patterns = config
            .input_patterns
            .iter()
            .map(String::as_str)
            .map(glob::Pattern::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            input: input.into(),
            output: output.into(),
            project_name: config.project_name.clone(),
            xml_only: config.xml_only,
            options: config.link_options(),
            catalog: config.catalog(),
            patterns,
            stylesheets,
        })
    }

    pub fn xml_dir(&self) -> PathBuf {
        self.output.join(XML_DIR)
    }

    pub fn html_dir(&self) -> PathBuf {
        self.output.join(HTML_DIR)
    }

    /// Run every phase
    ///
    /// # Errors
    ///
    /// Stops on invalid paths, I/O failures and an unusable index. Problems
    /// with single documents are collected in the report instead.
    pub fn run(&self) -> Result<PipelineReport, PipelineError> {
        self.validate_paths()?;
        let mut report = PipelineReport::default();

        let inputs = self.collect_inputs()?;
        log::info!("found {} input files in {}", inputs.len(), self.input.display());

        let placed = self.clean_inputs(&inputs, &mut report)?;
        report.documents = placed.len();

        let index_path = self.write_index(&placed, &mut report)?;
        let index = EntityIndex::load(&index_path)?;
        log::info!("indexed {} entities", index.len());

        self.link_documents(&index, &placed, &mut report)?;

        let mut targets = vec![self.xml_dir()];
        if !self.xml_only {
            self.render_html(&placed, &index_path, &mut report)?;
            targets.push(self.html_dir());
        }
        for dir in &targets {
            substitute_placeholder(dir, &self.project_name)?;
        }

        Ok(report)
    }

    fn validate_paths(&self) -> Result<(), PipelineError> {
        if !self.input.exists() {
            return Err(PipelineError::InputNotFound(self.input.clone()));
        }
        if !self.input.is_dir() {
            return Err(PipelineError::InputNotDirectory(self.input.clone()));
        }
        if self.output.exists() && !self.output.is_dir() {
            return Err(PipelineError::OutputNotDirectory(self.output.clone()));
        }
        fs::create_dir_all(&self.output).map_err(access(&self.output))
    }

    /// Raw input files, sorted by name
    fn collect_inputs(&self) -> Result<Vec<PathBuf>, PipelineError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.input).map_err(access(&self.input))? {
            let path = entry.map_err(access(&self.input))?.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if self.patterns.iter().any(|pattern| pattern.matches(name)) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Clean documented inputs and place them by kind and name
    fn clean_inputs(
        &self,
        inputs: &[PathBuf],
        report: &mut PipelineReport,
    ) -> Result<Vec<Placed>, PipelineError> {
        let xml_dir = self.xml_dir();
        let mut placed = Vec::new();

        for input in inputs {
            let id = input.display().to_string();
            let raw = fs::read_to_string(input).map_err(access(input))?;

            match document::is_documented(&raw) {
                Ok(true) => {}
                Ok(false) => {
                    log::debug!("skipping undocumented {id}");
                    report.undocumented += 1;
                    continue;
                }
                Err(error) => {
                    log::warn!("{id}: {error}");
                    report.failures.push(DocumentFailure::new(id, error));
                    continue;
                }
            }

            let cleaned = match self.stylesheets.clean.render(&raw) {
                Ok(cleaned) => cleaned,
                Err(error) => {
                    log::warn!("failed to clean {id}: {error}");
                    report.render_failures.push(RenderFailure {
                        document: input.clone(),
                        error,
                    });
                    continue;
                }
            };

            let entity = match Document::from_xml(id.clone(), cleaned.as_str()).and_then(|doc| doc.entity()) {
                Ok(entity) => entity,
                Err(error) => {
                    log::warn!("{error}");
                    report.failures.push(DocumentFailure::new(id, error));
                    continue;
                }
            };

            if !is_safe_file_stem(&entity.name) {
                let error = LinkError::MalformedDocument(format!(
                    "{id}: name '{}' cannot be used as a file name",
                    entity.name
                ));
                log::warn!("{error}");
                report.failures.push(DocumentFailure::new(id, error));
                continue;
            }

            let folder = xml_dir.join(folder_for(entity.kind));
            fs::create_dir_all(&folder).map_err(access(&folder))?;
            let path = folder.join(format!("{}.xml", entity.name));
            fs::write(&path, &cleaned).map_err(access(&path))?;
            log::debug!("placed {} as {}", id, path.display());

            placed.push(Placed {
                id: relative_id(&self.output, &path),
                path,
            });
        }

        Ok(placed)
    }

    fn write_index(
        &self,
        placed: &[Placed],
        report: &mut PipelineReport,
    ) -> Result<PathBuf, PipelineError> {
        let mut documents = Vec::with_capacity(placed.len());
        for doc in placed {
            let source = fs::read_to_string(&doc.path).map_err(access(&doc.path))?;
            documents.push(Document::from_xml(doc.id.clone(), source)?);
        }

        let build = EntityIndex::build(&documents)?;
        report.failures.extend(build.excluded);
        for ambiguity in build.index.ambiguities() {
            let document = match ambiguity {
                LinkError::AmbiguousSymbol { name, ignored, .. } => documents
                    .iter()
                    .find(|doc| doc.kind == Some(*ignored) && doc.name.as_deref() == Some(name.as_str()))
                    .map_or(INDEX_FILE, |doc| doc.id.as_str()),
                _ => INDEX_FILE,
            };
            report
                .warnings
                .push(DocumentFailure::new(document, ambiguity.clone()));
        }

        let xml_dir = self.xml_dir();
        fs::create_dir_all(&xml_dir).map_err(access(&xml_dir))?;
        let path = xml_dir.join(INDEX_FILE);
        let xml = build
            .index
            .to_xml(PROJECT_PLACEHOLDER)
            .map_err(access(&path))?;
        fs::write(&path, xml).map_err(access(&path))?;
        Ok(path)
    }

    fn link_documents(
        &self,
        index: &EntityIndex,
        placed: &[Placed],
        report: &mut PipelineReport,
    ) -> Result<(), PipelineError> {
        let linker = TextLinker::new(index, &self.catalog, self.options);
        let mut documents = Vec::with_capacity(placed.len());
        for doc in placed {
            let source = fs::read_to_string(&doc.path).map_err(access(&doc.path))?;
            documents.push(Document::from_xml(doc.id.clone(), source)?);
        }

        let batch = linker.link_batch(&mut documents);
        log::info!(
            "linked {} documents with {} references",
            batch.linked,
            batch.references
        );
        report.references += batch.references;
        report.failures.extend(batch.failures);
        report.warnings.extend(batch.warnings);

        for (doc, linked) in placed.iter().zip(&documents) {
            fs::write(&doc.path, &linked.body).map_err(access(&doc.path))?;
        }
        Ok(())
    }

    fn render_html(
        &self,
        placed: &[Placed],
        index_path: &Path,
        report: &mut PipelineReport,
    ) -> Result<(), PipelineError> {
        let xml_dir = self.xml_dir();
        let html_dir = self.html_dir();

        for doc in placed {
            let source = fs::read_to_string(&doc.path).map_err(access(&doc.path))?;
            let relative = doc.path.strip_prefix(&xml_dir).unwrap_or(&doc.path);
            let target = html_dir.join(relative).with_extension("html");
            render_to(&*self.stylesheets.object_html, &source, &target, report)?;
        }

        let source = fs::read_to_string(index_path).map_err(access(index_path))?;
        let target = html_dir.join(INDEX_HTML_FILE);
        render_to(&*self.stylesheets.index_html, &source, &target, report)?;

        if let Some(assets) = &self.stylesheets.assets {
            if assets.is_dir() {
                copy_dir(assets, &html_dir.join(ASSETS_DIR))?;
            } else {
                log::warn!("no stylesheet assets at {}", assets.display());
            }
        }
        Ok(())
    }
}

fn render_to(
    renderer: &dyn Renderer,
    source: &str,
    target: &Path,
    report: &mut PipelineReport,
) -> Result<(), PipelineError> {
    match renderer.render(source) {
        Ok(rendered) => {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(access(parent))?;
            }
            fs::write(target, rendered).map_err(access(target))?;
            log::debug!("rendered {}", target.display());
        }
        Err(error) => {
            log::warn!("failed to render {}: {error}", target.display());
            report.render_failures.push(RenderFailure {
                document: target.to_path_buf(),
                error,
            });
        }
    }
    Ok(())
}

/// Whether `name` stays a single file inside its kind folder
fn is_safe_file_stem(name: &str) -> bool {
    !name.trim().is_empty()
        && !name.contains("..")
        && !name
            .chars()
            .any(|c| c == '/' || c == '\\' || c == '\0' || std::path::is_separator(c))
}

fn relative_id(base: &Path, path: &Path) -> String {
    path.strip_prefix(base).unwrap_or(path).display().to_string()
}

/// Every file below `dir`, depth first
fn collect_files(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(access(dir))? {
        let path = entry.map_err(access(dir))?.path();
        if path.is_dir() {
            files.extend(collect_files(&path)?);
        } else {
            files.push(path);
        }
    }
    Ok(files)
}

fn copy_dir(from: &Path, to: &Path) -> Result<(), PipelineError> {
    fs::create_dir_all(to).map_err(access(to))?;
    for entry in fs::read_dir(from).map_err(access(from))? {
        let path = entry.map_err(access(from))?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = to.join(name);
        if path.is_dir() {
            copy_dir(&path, &target)?;
        } else {
            fs::copy(&path, &target).map_err(access(&path))?;
        }
    }
    Ok(())
}

/// Replace the project placeholder in every text file below `dir`
fn substitute_placeholder(dir: &Path, project_name: &str) -> Result<(), PipelineError> {
    if !dir.is_dir() {
        return Ok(());
    }
    for path in collect_files(dir)? {
        // Binary assets are left alone
        let Ok(text) = fs::read_to_string(&path) else {
            continue;
        };
        if text.contains(PROJECT_PLACEHOLDER) {
            fs::write(&path, text.replace(PROJECT_PLACEHOLDER, project_name)).map_err(access(&path))?;
        }
    }
    Ok(())
}
