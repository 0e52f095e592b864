//! The ungrounded path-expression template: a navigational description
//! still parameterized over an abstract source.

use std::collections::BTreeMap;

/// The template a grounded expression is instantiated from. Carries the
/// target URL, the optional abstract source the path is parameterized over,
/// the named scrape-target sub-paths, and which of those names act as
/// next-links for pagination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathTemplate {
    url: String,
    database_used: bool,
    database_name: String,
    next_used: bool,
    next_link_names: Vec<String>,
    scrape_paths: BTreeMap<String, String>,
}

impl PathTemplate {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Declares the abstract source the path template draws its
    /// instantiations from.
    pub fn with_database(mut self, name: impl Into<String>) -> Self {
        self.database_used = true;
        self.database_name = name.into();
        self
    }

    /// Declares a named next-link target and enables pagination.
    pub fn with_next_link(mut self, name: impl Into<String>) -> Self {
        self.next_used = true;
        self.next_link_names.push(name.into());
        self
    }

    /// Adds a named scrape-target and its (still unevaluated) sub-path.
    pub fn with_scrape_path(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.scrape_paths.insert(name.into(), path.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database_used(&self) -> bool {
        self.database_used
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn next_used(&self) -> bool {
        self.next_used
    }

    pub fn next_link_names(&self) -> &[String] {
        &self.next_link_names
    }

    pub fn scrape_paths(&self) -> &BTreeMap<String, String> {
        &self.scrape_paths
    }

    pub fn scrape_path(&self, name: &str) -> Option<&str> {
        self.scrape_paths.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_builder() {
        let template = PathTemplate::new("http://example.com/search")
            .with_database("towns")
            .with_next_link("next")
            .with_scrape_path("next", "/next-click::a[@rel='next']")
            .with_scrape_path("title", "/download-click::h2");

        assert_eq!(template.url(), "http://example.com/search");
        assert!(template.database_used());
        assert_eq!(template.database_name(), "towns");
        assert!(template.next_used());
        assert_eq!(template.next_link_names(), ["next"]);
        assert_eq!(
            template.scrape_path("next"),
            Some("/next-click::a[@rel='next']")
        );
        assert_eq!(template.scrape_path("missing"), None);
    }

    #[test]
    fn test_template_without_pagination() {
        let template = PathTemplate::new("http://example.com");
        assert!(!template.next_used());
        assert!(template.next_link_names().is_empty());
        assert!(!template.database_used());
    }
}
