//! Catalog of external framework symbols
//!
//! Groups are scanned in the order they appear in the catalog. Each group
//! shares one URL shape, which is why classes and protocols of the same
//! framework live in separate groups.

mod cocoa;

pub use cocoa::{
    APPKIT_CLASSES, APPKIT_CLASS_URL, APPKIT_PROTOCOLS, APPKIT_PROTOCOL_URL, FOUNDATION_CLASSES,
    FOUNDATION_CLASS_URL, FOUNDATION_PROTOCOLS, FOUNDATION_PROTOCOL_URL,
};

use crate::matcher::SymbolMatcher;

/// Placeholder replaced by the matched symbol in a URL template
pub const SYMBOL_PLACEHOLDER: &str = "{symbol}";

/// One group of external symbols sharing a URL template
#[derive(Debug, Clone)]
pub struct CatalogGroup {
    label: String,
    url_template: String,
    matcher: SymbolMatcher,
}

impl CatalogGroup {
    /// Create a group; duplicate and empty symbol names are dropped
    pub fn new<I, S>(label: impl Into<String>, url_template: impl Into<String>, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            label: label.into(),
            url_template: url_template.into(),
            matcher: SymbolMatcher::from_symbols(symbols),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Symbols in table order
    pub fn symbols(&self) -> &[String] {
        self.matcher.symbols()
    }

    /// `(symbol, url template)` pairs in table order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.symbols()
            .iter()
            .map(move |symbol| (symbol.as_str(), self.url_template.as_str()))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.matcher.contains(symbol)
    }

    /// Documentation location for a symbol of this group
    ///
    /// Returns `None` when the template is empty or has no placeholder, so a
    /// malformed table cannot produce a link that points nowhere useful.
    pub fn locator_for(&self, symbol: &str) -> Option<String> {
        if self.url_template.is_empty() || !self.url_template.contains(SYMBOL_PLACEHOLDER) {
            return None;
        }
        Some(self.url_template.replace(SYMBOL_PLACEHOLDER, symbol))
    }

    pub(crate) fn matcher(&self) -> &SymbolMatcher {
        &self.matcher
    }
}

/// Ordered, read-only collection of catalog groups
#[derive(Debug, Clone)]
pub struct ExternalSymbolCatalog {
    groups: Vec<CatalogGroup>,
}

impl Default for ExternalSymbolCatalog {
    fn default() -> Self {
        Self::cocoa()
    }
}

impl ExternalSymbolCatalog {
    /// Catalog with the given groups, scanned in order
    pub fn new(groups: Vec<CatalogGroup>) -> Self {
        Self { groups }
    }

    /// Catalog without any external symbols
    pub fn empty() -> Self {
        Self { groups: Vec::new() }
    }

    /// The built-in Foundation and AppKit tables
    pub fn cocoa() -> Self {
        Self::new(vec![
            CatalogGroup::new("Foundation classes", FOUNDATION_CLASS_URL, FOUNDATION_CLASSES),
            CatalogGroup::new(
                "Foundation protocols",
                FOUNDATION_PROTOCOL_URL,
                FOUNDATION_PROTOCOLS,
            ),
            CatalogGroup::new("AppKit classes", APPKIT_CLASS_URL, APPKIT_CLASSES),
            CatalogGroup::new("AppKit protocols", APPKIT_PROTOCOL_URL, APPKIT_PROTOCOLS),
        ])
    }

    /// Append a group after all existing ones
    #[must_use]
    pub fn with_group(mut self, group: CatalogGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Groups in scan order
    pub fn groups(&self) -> &[CatalogGroup] {
        &self.groups
    }

    pub fn group(&self, label: &str) -> Option<&CatalogGroup> {
        self.groups.iter().find(|group| group.label == label)
    }

    /// The first group that lists `symbol`
    pub fn find(&self, symbol: &str) -> Option<&CatalogGroup> {
        self.groups.iter().find(|group| group.contains(symbol))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|group| group.symbols().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_substitution() {
        let group = CatalogGroup::new("test", "https://docs.example/{symbol}.html", ["Foo"]);
        assert_eq!(
            group.locator_for("Foo").as_deref(),
            Some("https://docs.example/Foo.html")
        );
        assert_eq!(group.entries().collect::<Vec<_>>(), vec![("Foo", "https://docs.example/{symbol}.html")]);
    }

    #[test]
    fn test_template_without_placeholder_has_no_locator() {
        let group = CatalogGroup::new("broken", "https://docs.example/", ["Foo"]);
        assert_eq!(group.locator_for("Foo"), None);
        let group = CatalogGroup::new("empty", "", ["Foo"]);
        assert_eq!(group.locator_for("Foo"), None);
    }

    #[test]
    fn test_cocoa_group_order() {
        let catalog = ExternalSymbolCatalog::cocoa();
        let labels: Vec<_> = catalog.groups().iter().map(|g| g.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Foundation classes",
                "Foundation protocols",
                "AppKit classes",
                "AppKit protocols"
            ]
        );
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_cocoa_lookup() {
        let catalog = ExternalSymbolCatalog::default();
        assert_eq!(catalog.find("NSString").map(|g| g.label()), Some("Foundation classes"));
        assert_eq!(catalog.find("NSCoding").map(|g| g.label()), Some("Foundation protocols"));
        assert_eq!(catalog.find("NSWindow").map(|g| g.label()), Some("AppKit classes"));
        assert_eq!(catalog.find("NSWindowDelegate").map(|g| g.label()), Some("AppKit protocols"));
        assert!(catalog.find("MyView").is_none());

        let group = catalog.group("Foundation classes").unwrap();
        assert_eq!(
            group.locator_for("NSString").as_deref(),
            Some("http://developer.apple.com/documentation/Cocoa/Reference/Foundation/Classes/NSString_Class/index")
        );
    }

    #[test]
    fn test_with_group_appends() {
        let catalog = ExternalSymbolCatalog::empty()
            .with_group(CatalogGroup::new("a", "{symbol}", ["A"]))
            .with_group(CatalogGroup::new("b", "{symbol}", ["B"]));
        assert_eq!(catalog.groups()[1].label(), "b");
        assert!(ExternalSymbolCatalog::empty().is_empty());
    }
}
