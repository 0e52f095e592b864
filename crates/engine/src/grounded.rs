//! The grounded path expression: a template bound to one concrete
//! navigational path, owning one browser session.
//!
//! Lifecycle: `ground` (pure construction, no I/O) → `execute_query`
//! (navigate the path, returning the reached page and the attribute map) →
//! `scrape_results` (delegate extraction, coordinating pagination) →
//! `close` (release the session; idempotent, and also triggered on drop so
//! the session is released on every exit path).

use crate::browser::{BrowserSession, ExtractionQuery, NextNavigator};
use crate::error::EngineError;
use crate::template::PathTemplate;
use crate::walker;
use std::collections::BTreeMap;
use trawl_axis::parse_path;

/// The reserved attribute key under which `execute_query` records the
/// target URL.
pub const SOURCE_URL_ATTRIBUTE: &str = "source-url";

pub struct GroundedExpression<S: BrowserSession> {
    url: String,
    next_used: bool,
    next_link_names: Vec<String>,
    scrape_paths: BTreeMap<String, String>,
    path: String,
    database_used: bool,
    session: Option<S>,
}

impl<S: BrowserSession> GroundedExpression<S> {
    /// Grounds a template with a concrete instantiated path. Scalar and
    /// collection fields are copied over from the template; the abstract
    /// source is no longer needed once a concrete path exists, so its flag
    /// is cleared.
    pub fn ground(template: &PathTemplate, path: impl Into<String>, session: S) -> Self {
        Self {
            url: template.url().to_string(),
            next_used: template.next_used(),
            next_link_names: template.next_link_names().to_vec(),
            scrape_paths: template.scrape_paths().clone(),
            path: path.into(),
            database_used: false,
            session: Some(session),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn path(&self) -> &str {
        &self.path
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

    pub fn database_used(&self) -> bool {
        self.database_used
    }

    pub fn is_closed(&self) -> bool {
        self.session.is_none()
    }

    /// Loads the target URL and walks the grounded path against the
    /// resulting page. Returns the page reached at the end of navigation
    /// together with the attribute map for this execution; the target URL
    /// is recorded under [`SOURCE_URL_ATTRIBUTE`].
    ///
    /// A malformed axis token anywhere in the path aborts the whole call
    /// before any I/O. Fetch and render failures propagate unmodified; no
    /// retry is attempted here.
    pub fn execute_query(&mut self) -> Result<(S::Page, BTreeMap<String, String>), EngineError> {
        let steps = parse_path(&self.path)?;
        let session = self.session.as_mut().ok_or(EngineError::SessionClosed)?;
        log::debug!("loading {}", self.url);
        let page = session.open(&self.url)?;
        let page = walker::walk(page, &steps)?;

        let mut attributes = BTreeMap::new();
        attributes.insert(SOURCE_URL_ATTRIBUTE.to_string(), self.url.clone());
        Ok((page, attributes))
    }

    /// Scrapes the reached page and, when pagination is declared, every
    /// further page the next-link navigator yields.
    ///
    /// The named scrape paths are partitioned into next-link paths and data
    /// paths first; a next-link name with no declared path is a
    /// [`EngineError::BadData`] before any output is produced.
    pub fn scrape_results<Nav, Q>(
        &self,
        page: &S::Page,
        attributes: &BTreeMap<String, String>,
        query: &mut Q,
    ) -> Result<String, EngineError>
    where
        Nav: NextNavigator<S::Page>,
        Q: ExtractionQuery<S::Page>,
    {
        let mut next_paths = Vec::new();
        for name in &self.next_link_names {
            let path = self.scrape_paths.get(name).ok_or_else(|| {
                EngineError::BadData(format!("Referencing {} without providing a path", name))
            })?;
            next_paths.push(path.clone());
        }

        let data_paths: BTreeMap<String, String> = self
            .scrape_paths
            .iter()
            .filter(|(name, _)| !self.next_used || !self.next_link_names.contains(*name))
            .map(|(name, path)| (name.clone(), path.clone()))
            .collect();

        let mut output = query.scrape(page, &data_paths, attributes)?;
        if self.next_used {
            let mut navigator = Nav::from_page(page, &next_paths)?;
            while let Some(next) = navigator.next_page()? {
                log::debug!("scraping next result page");
                output.push_str(&query.scrape(&next, &data_paths, attributes)?);
            }
        }
        Ok(output)
    }

    /// Releases the browser session. Safe to call repeatedly, and safe to
    /// call without ever executing the query. After closing, no further
    /// navigation may be attempted.
    pub fn close(&mut self) {
        if let Some(mut session) = self.session.take() {
            log::debug!("closing browser session for {}", self.url);
            session.close_all();
        }
    }
}

impl<S: BrowserSession> Drop for GroundedExpression<S> {
    fn drop(&mut self) {
        self.close();
    }
}
