//! Run configuration
//!
//! ```toml
//! project_name = "MyKit"
//! xml_only = false
//! verbose = false
//! stylesheet_dir = "/usr/share/doxylink"
//! input_patterns = ["interface_*.xml", "protocol_*.xml"]
//!
//! [[catalog]]
//! label = "Core Data classes"
//! url_template = "https://developer.apple.com/documentation/coredata/{symbol}"
//! symbols = ["NSManagedObject", "NSManagedObjectContext"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{CatalogGroup, ExternalSymbolCatalog};
use crate::linker::LinkOptions;

/// Project name used when none is configured
pub const DEFAULT_PROJECT_NAME: &str = "Untitled";

/// Raw Doxygen files that describe classes, categories and protocols
pub const DEFAULT_INPUT_PATTERNS: [&str; 2] = ["interface_*.xml", "protocol_*.xml"];

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for one documentation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Name substituted for the project placeholder
    pub project_name: String,

    /// Stop after linking, without rendering HTML
    pub xml_only: bool,

    /// Log every reference the linker emits or drops
    pub verbose: bool,

    /// Directory holding the XSLT stylesheets and `css/`
    pub stylesheet_dir: Option<PathBuf>,

    /// File name patterns selecting raw input files
    pub input_patterns: Vec<String>,

    /// Extra catalog groups, scanned after the built-in ones
    pub catalog: Vec<CatalogGroupConfig>,
}

/// A catalog group declared in the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogGroupConfig {
    pub label: String,
    pub url_template: String,
    #[serde(default)]
    pub symbols: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            xml_only: false,
            verbose: false,
            stylesheet_dir: None,
            input_patterns: DEFAULT_INPUT_PATTERNS.iter().map(ToString::to_string).collect(),
            catalog: Vec::new(),
        }
    }
}

impl Config {
    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid, has unknown keys, or fails validation.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.project_name.trim().is_empty() {
            return Err(ConfigError::Invalid("project_name is empty".to_string()));
        }
        if self.input_patterns.is_empty() {
            return Err(ConfigError::Invalid("input_patterns is empty".to_string()));
        }
        for group in &self.catalog {
            if group.label.trim().is_empty() {
                return Err(ConfigError::Invalid("catalog group without a label".to_string()));
            }
        }
        Ok(())
    }

    /// Built-in catalog followed by the configured groups
    pub fn catalog(&self) -> ExternalSymbolCatalog {
        self.catalog
            .iter()
            .fold(ExternalSymbolCatalog::cocoa(), |catalog, group| {
                catalog.with_group(CatalogGroup::new(
                    group.label.clone(),
                    group.url_template.clone(),
                    &group.symbols,
                ))
            })
    }

    pub fn link_options(&self) -> LinkOptions {
        LinkOptions {
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.project_name, "Untitled");
        assert_eq!(config.input_patterns, vec!["interface_*.xml", "protocol_*.xml"]);
        assert!(!config.link_options().verbose);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
project_name = "MyKit"
xml_only = true
verbose = true
stylesheet_dir = "/usr/share/doxylink"

[[catalog]]
label = "Core Data classes"
url_template = "https://developer.apple.com/documentation/coredata/{symbol}"
symbols = ["NSManagedObject", "NSManagedObjectContext"]
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.project_name, "MyKit");
        assert!(config.xml_only);
        assert!(config.link_options().verbose);
        assert_eq!(config.stylesheet_dir, Some(PathBuf::from("/usr/share/doxylink")));

        let catalog = config.catalog();
        assert_eq!(catalog.groups().len(), 5);
        let extra = catalog.groups().last().unwrap();
        assert_eq!(extra.label(), "Core Data classes");
        assert_eq!(
            extra.locator_for("NSManagedObject").as_deref(),
            Some("https://developer.apple.com/documentation/coredata/NSManagedObject")
        );
    }

    #[test]
    fn reject_unknown_keys() {
        assert!(matches!(Config::parse("colour = \"red\""), Err(ConfigError::Parse(_))));
        let toml = r#"
[[catalog]]
label = "x"
url_template = "{symbol}"
typo = 1
"#;
        assert!(Config::parse(toml).is_err());
    }

    #[test]
    fn reject_invalid_values() {
        assert!(matches!(Config::parse("project_name = \" \""), Err(ConfigError::Invalid(_))));
        assert!(matches!(Config::parse("input_patterns = []"), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doxylink.toml");
        std::fs::write(&path, "project_name = \"Demo\"\n").unwrap();
        assert_eq!(Config::from_path(&path).unwrap().project_name, "Demo");
        assert!(matches!(
            Config::from_path(dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
