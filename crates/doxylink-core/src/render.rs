//! External rendering of documents
//!
//! Rendering is not done in-process. A [`Renderer`] takes the text of one
//! document and returns the rendered artifact; the pipeline only decides
//! which renderer runs when and where the result goes.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::string::FromUtf8Error;
use std::thread;

use thiserror::Error;

/// Errors raised by a renderer
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("renderer output is not UTF-8: {0}")]
    InvalidOutput(#[from] FromUtf8Error),
}

/// Turns one document into a rendered artifact
pub trait Renderer {
    fn render(&self, source: &str) -> Result<String, RenderError>;
}

/// Returns documents unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&self, source: &str) -> Result<String, RenderError> {
        Ok(source.to_string())
    }
}

/// Applies an XSLT stylesheet with `xsltproc`
#[derive(Debug, Clone)]
pub struct XsltRenderer {
    program: String,
    stylesheet: PathBuf,
}

impl XsltRenderer {
    pub fn new(stylesheet: impl Into<PathBuf>) -> Self {
        Self {
            program: "xsltproc".to_string(),
            stylesheet: stylesheet.into(),
        }
    }

    /// Use another XSLT processor with the same command line
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn stylesheet(&self) -> &Path {
        &self.stylesheet
    }
}

impl Renderer for XsltRenderer {
    fn render(&self, source: &str) -> Result<String, RenderError> {
        let spawn_error = |source| RenderError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .arg(&self.stylesheet)
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        // stdin is written from another thread while stdout is drained here
        let writer = child.stdin.take().map(|mut stdin| {
            let input = source.as_bytes().to_vec();
            thread::spawn(move || stdin.write_all(&input))
        });

        let output = child.wait_with_output().map_err(spawn_error)?;
        if let Some(writer) = writer {
            if let Ok(Err(err)) = writer.join() {
                log::debug!("{} closed stdin early: {err}", self.program);
            }
        }

        if !output.status.success() {
            return Err(RenderError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8(output.stdout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_renderer_returns_input() {
        let source = "<object kind=\"class\"/>";
        assert_eq!(NoopRenderer.render(source).unwrap(), source);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let renderer = XsltRenderer::new("object.xslt").with_program("doxylink-no-such-xsltproc");
        let err = renderer.render("<object/>").unwrap_err();
        assert!(matches!(err, RenderError::Spawn { .. }));
        assert!(err.to_string().contains("doxylink-no-such-xsltproc"));
        assert_eq!(renderer.stylesheet(), Path::new("object.xslt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_reports_status() {
        // `false` ignores its arguments and exits non-zero
        let renderer = XsltRenderer::new("object.xslt").with_program("false");
        let err = renderer.render("<object/>").unwrap_err();
        assert!(matches!(err, RenderError::Failed { .. }));
    }
}
