//! Parent and relative-path resolution for locators.
//!
//! Plain hierarchical locators go through standard URL reference
//! resolution. Archive locators (`jar:` by default) cannot, because the
//! `!/` container boundary is opaque to it, so they are resolved textually
//! by the `archive` submodule.

mod archive;
mod segments;

use std::path::MAIN_SEPARATOR;

use crate::error::{LocatorError, LocatorResult};
use crate::locator::{Locator, ARCHIVE_SCHEME};

use segments::{CURRENT_DIR, PARENT_DIR};

const URL_SEPARATOR: char = '/';

/// Knobs for a [`Resolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Schemes resolved with the archive algorithm.
    pub archive_schemes: Vec<String>,
    /// Separator in relative paths that is rewritten to `/` before resolving.
    pub native_separator: char,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            archive_schemes: vec![ARCHIVE_SCHEME.to_string()],
            native_separator: MAIN_SEPARATOR,
        }
    }
}

/// Stateless resolver; calls never mutate it, so one instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    options: ResolverOptions,
}

impl Resolver {
    pub fn new(options: ResolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Returns the directory containing `locator`, or the enclosing
    /// directory when `locator` is itself a directory.
    pub fn parent(&self, locator: &Locator) -> LocatorResult<Locator> {
        let parent = if self.is_archive(locator) {
            archive::parent(locator)?
        } else if is_directory(locator) {
            join(locator, PARENT_DIR)?
        } else {
            join(locator, CURRENT_DIR)?
        };
        tracing::debug!(locator = %locator, parent = %parent, "computed parent");
        Ok(parent)
    }

    /// Resolves `path` against `locator`.
    ///
    /// `None` or an empty path returns `locator` unchanged. The native
    /// directory separator in `path` is rewritten to `/` first.
    pub fn resolve(&self, locator: &Locator, path: Option<&str>) -> LocatorResult<Locator> {
        let path = match path {
            Some(p) if !p.is_empty() => p,
            _ => return Ok(locator.clone()),
        };
        let path = self.normalize_separators(path);

        let resolved = if self.is_archive(locator) {
            archive::resolve(locator, &path)?
        } else {
            join(locator, &path)?
        };
        tracing::debug!(base = %locator, path = %path, resolved = %resolved, "resolved locator");
        Ok(resolved)
    }

    /// Parses `locator` and returns its parent. An empty string is an
    /// `InvalidArgument`.
    pub fn parent_str(&self, locator: &str) -> LocatorResult<Locator> {
        self.parent(&Locator::parse(locator)?)
    }

    /// Parses `locator` and resolves `path` against it.
    pub fn resolve_str(&self, locator: &str, path: Option<&str>) -> LocatorResult<Locator> {
        self.resolve(&Locator::parse(locator)?, path)
    }

    fn is_archive(&self, locator: &Locator) -> bool {
        self.options
            .archive_schemes
            .iter()
            .any(|s| s.eq_ignore_ascii_case(locator.scheme()))
    }

    fn normalize_separators(&self, path: &str) -> String {
        if self.options.native_separator == URL_SEPARATOR {
            path.to_string()
        } else {
            path.replace(self.options.native_separator, "/")
        }
    }
}

/// [`Resolver::parent`] with default options.
pub fn parent(locator: &Locator) -> LocatorResult<Locator> {
    Resolver::default().parent(locator)
}

/// [`Resolver::resolve`] with default options.
pub fn resolve(locator: &Locator, path: Option<&str>) -> LocatorResult<Locator> {
    Resolver::default().resolve(locator, path)
}

/// [`Resolver::parent_str`] with default options.
pub fn parent_str(locator: &str) -> LocatorResult<Locator> {
    Resolver::default().parent_str(locator)
}

/// [`Resolver::resolve_str`] with default options.
pub fn resolve_str(locator: &str, path: Option<&str>) -> LocatorResult<Locator> {
    Resolver::default().resolve_str(locator, path)
}

fn is_directory(locator: &Locator) -> bool {
    locator.path().ends_with(URL_SEPARATOR)
}

fn join(locator: &Locator, reference: &str) -> LocatorResult<Locator> {
    let url = locator
        .as_url()
        .join(reference)
        .map_err(|e| LocatorError::invalid_locator(locator.as_str(), e))?;
    Locator::from_url(url)
}
