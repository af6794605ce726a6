//! Frame address construction.
//!
//! [`make_url`] appends literal `key=value` fragments to a base URL,
//! preserving order. [`nav_params`] computes which fragments the controller
//! should forward, applying the tree tie-break rule: request parameters are
//! only forwarded when the ambient request's `tree` matches the final path
//! segment of the address being opened.

/// Ambient request context, read-only. `None` fields correspond to absent or
/// explicitly false values in the host configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Identifier of the current page-hierarchy context.
    pub tree: Option<String>,
    /// Current editing language, when one is set.
    pub language: Option<String>,
    /// Current page identifier, when one is set.
    pub page_id: Option<String>,
}

impl RequestContext {
    /// An empty context: no parameters will ever be forwarded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tree identifier.
    #[must_use]
    pub fn with_tree(mut self, tree: impl Into<String>) -> Self {
        self.tree = Some(tree.into());
        self
    }

    /// Set the language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the page identifier.
    #[must_use]
    pub fn with_page_id(mut self, page_id: impl Into<String>) -> Self {
        self.page_id = Some(page_id.into());
        self
    }
}

/// Append literal query fragments to `base`, joined with `&` and separated
/// from the base by `?` unless the base already carries a query string.
/// Fragments are not encoded or reordered; an empty list returns the base
/// unchanged.
#[must_use]
pub fn make_url(base: &str, params: &[String]) -> String {
    if params.is_empty() {
        return base.to_owned();
    }
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}{}", params.join("&"))
}

/// Compute the query fragments to forward when opening `url` under `ctx`.
///
/// Empty unless `ctx.tree` equals the final path segment of `url`. On a
/// match, `language=<v>` comes first when a language is set, then
/// `page_id=<v>` when a page id is set.
#[must_use]
pub fn nav_params(url: &str, ctx: &RequestContext) -> Vec<String> {
    let Some(tree) = ctx.tree.as_deref() else {
        return Vec::new();
    };
    if final_path_segment(url) != tree {
        return Vec::new();
    }
    let mut params = Vec::new();
    if let Some(language) = ctx.language.as_deref() {
        params.push(format!("language={language}"));
    }
    if let Some(page_id) = ctx.page_id.as_deref() {
        params.push(format!("page_id={page_id}"));
    }
    params
}

/// Final path segment of a URL, with any query string or fragment stripped.
fn final_path_segment(url: &str) -> &str {
    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url);
    path.rsplit('/').next().unwrap_or(path)
}
