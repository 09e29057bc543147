// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! URI template compilation.
//!
//! A template is a URL that may contain `*` wildcards, e.g.
//! `https://magma-pr-*.ui-dev.product.dev.alertlogic.com`. Each `*` matches one
//! run of `[a-zA-Z0-9_-]`; everything else is literal. A compiled template
//! matches any URL that starts with it, so paths, queries and fragments after
//! the templated part are accepted.
//!
//! Templates are not validated: anything that is not a wildcard is escaped, so
//! a malformed template yields a permissive matcher rather than an error.

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;
use thiserror::Error;

/// Character class a single wildcard expands to.
pub const WILDCARD_CLASS: &str = "([a-zA-Z0-9_-]+)";

/// Errors from compiling a template.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The generated expression was rejected by the regex engine.
    #[error("failed to compile URI template {template:?}: {source}")]
    Compile {
        /// The offending template.
        template: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// A compiled URI template.
#[derive(Debug, Clone)]
pub struct UriPattern {
    template: String,
    prefix_len: usize,
    matcher: Regex,
}

impl UriPattern {
    /// Compile `template`.
    pub fn compile(template: impl Into<String>) -> Result<Self, PatternError> {
        let template = template.into();
        let expression = Self::expression(&template);
        let matcher = Regex::new(&expression)
            .map_err(|source| PatternError::Compile { template: template.clone(), source })?;
        let prefix_len = template.find('*').unwrap_or(template.len());
        Ok(Self { template, prefix_len, matcher })
    }

    /// The anchored regular expression for `template`.
    pub fn expression(template: &str) -> String {
        let body =
            template.split('*').map(regex::escape).collect::<Vec<_>>().join(WILDCARD_CLASS);
        format!("^{}.*$", body)
    }

    /// The source template.
    pub fn template(&self) -> &str { &self.template }

    /// Literal text before the first wildcard, or the whole template.
    pub fn prefix(&self) -> &str { &self.template[..self.prefix_len] }

    /// Whether `target` matches, rejecting early on the literal prefix.
    pub fn matches(&self, target: &str) -> bool {
        target.starts_with(self.prefix()) && self.matcher.is_match(target)
    }

    /// Matching priority: longer literal prefix first, then longer template,
    /// then lexical template order.
    pub fn priority(&self, other: &Self) -> Ordering {
        other
            .prefix_len
            .cmp(&self.prefix_len)
            .then_with(|| other.template.len().cmp(&self.template.len()))
            .then_with(|| self.template.cmp(&other.template))
    }
}

impl fmt::Display for UriPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.template) }
}
