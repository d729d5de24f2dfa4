//! Immutable locator value.
//!
//! A locator is a parsed URL. Archive locators (`jar:<container>!<innerpath>`)
//! keep their whole body in the URL's opaque path, so the container and the
//! inner path are recovered textually by splitting on the last `!/`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use url::Url;

use crate::error::{LocatorError, LocatorResult};

/// Scheme of archive-embedded locators.
pub const ARCHIVE_SCHEME: &str = "jar";

/// Separator between the container locator and the inner path.
const ARCHIVE_SEPARATOR: &str = "!/";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    url: Url,
}

impl Locator {
    /// Parses a locator string.
    ///
    /// Empty input is an `InvalidArgument`; anything the URL parser rejects,
    /// or a `jar:` locator without a `!/` separator, is an `InvalidLocator`.
    pub fn parse(input: &str) -> LocatorResult<Self> {
        if input.trim().is_empty() {
            return Err(LocatorError::InvalidArgument("locator cannot be empty"));
        }
        let url = Url::parse(input).map_err(|e| LocatorError::invalid_locator(input, e))?;
        Self::from_url(url)
    }

    /// Wraps an already parsed URL, applying the archive syntax check.
    pub fn from_url(url: Url) -> LocatorResult<Self> {
        let locator = Locator { url };
        if locator.scheme() == ARCHIVE_SCHEME && locator.archive_parts().is_none() {
            return Err(LocatorError::invalid_locator(
                locator.as_str(),
                "no !/ in archive locator",
            ));
        }
        Ok(locator)
    }

    /// Builds a `file:` locator from an absolute filesystem path.
    ///
    /// With `is_dir` the locator gets a trailing `/`. The path is not
    /// checked against the filesystem.
    pub fn from_file_path(path: &Path, is_dir: bool) -> LocatorResult<Self> {
        let url = if is_dir {
            Url::from_directory_path(path)
        } else {
            Url::from_file_path(path)
        };
        url.map(|url| Locator { url }).map_err(|()| {
            LocatorError::invalid_locator(&path.display().to_string(), "path is not absolute")
        })
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Path component. For archive locators this is everything after the
    /// scheme, container included.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn is_archive(&self) -> bool {
        self.scheme() == ARCHIVE_SCHEME
    }

    /// A locator denotes a directory when its path ends with `/`.
    pub fn is_directory(&self) -> bool {
        self.path().ends_with('/')
    }

    /// Container locator of an archive locator (`file:/x.jar` in
    /// `jar:file:/x.jar!/a/b`).
    pub fn container(&self) -> Option<&str> {
        let (prefix, _) = self.archive_parts()?;
        let start = self.scheme().len() + 1;
        prefix.get(start..prefix.len() - 1)
    }

    /// Inner path of an archive locator, always starting with `/`.
    pub fn inner_path(&self) -> Option<&str> {
        self.archive_parts().map(|(_, inner)| inner)
    }

    /// Splits the locator string at the last `!/` into the prefix (ending
    /// with `!`) and the inner path (starting with `/`).
    pub(crate) fn archive_parts(&self) -> Option<(&str, &str)> {
        let s = self.as_str();
        let idx = s.rfind(ARCHIVE_SEPARATOR)?;
        Some(s.split_at(idx + 1))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locator::parse(s)
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Locator> for Url {
    fn from(locator: Locator) -> Self {
        locator.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_archive_locator() {
        let loc = Locator::parse("jar:file:/x.jar!/dir/map.tmx").unwrap();
        assert!(loc.is_archive());
        assert!(!loc.is_directory());
        assert_eq!(loc.as_str(), "jar:file:/x.jar!/dir/map.tmx");
        assert_eq!(loc.container(), Some("file:/x.jar"));
        assert_eq!(loc.inner_path(), Some("/dir/map.tmx"));
    }

    #[test]
    fn parse_archive_directory() {
        let loc = Locator::parse("jar:file:/x.jar!/dir/").unwrap();
        assert!(loc.is_directory());
        assert_eq!(loc.inner_path(), Some("/dir/"));
    }

    #[test]
    fn archive_with_remote_container() {
        let loc = Locator::parse("jar:https://example.com/maps.jar!/a/b.tsx").unwrap();
        assert_eq!(loc.container(), Some("https://example.com/maps.jar"));
        assert_eq!(loc.inner_path(), Some("/a/b.tsx"));
    }

    #[test]
    fn archive_without_separator_is_invalid() {
        let err = Locator::parse("jar:file:/x.jar").unwrap_err();
        assert!(matches!(err, LocatorError::InvalidLocator { .. }));
    }

    #[test]
    fn empty_is_invalid_argument() {
        assert_eq!(
            Locator::parse("").unwrap_err(),
            LocatorError::InvalidArgument("locator cannot be empty")
        );
        assert!(matches!(
            Locator::parse("   ").unwrap_err(),
            LocatorError::InvalidArgument(_)
        ));
    }

    #[test]
    fn relative_string_is_invalid_locator() {
        let err = Locator::parse("images/tile.png").unwrap_err();
        assert!(matches!(err, LocatorError::InvalidLocator { .. }));
    }

    #[test]
    fn plain_locator_has_no_archive_parts() {
        let loc = Locator::parse("file:/a/b/c.txt").unwrap();
        assert!(!loc.is_archive());
        assert_eq!(loc.container(), None);
        assert_eq!(loc.inner_path(), None);
        assert_eq!(loc.path(), "/a/b/c.txt");
    }

    #[test]
    fn from_str_and_display_agree() {
        let loc: Locator = "https://example.com/maps/".parse().unwrap();
        assert_eq!(loc.to_string(), "https://example.com/maps/");
        assert!(loc.is_directory());
    }

    #[cfg(unix)]
    #[test]
    fn from_file_path_file_and_dir() {
        let file = Locator::from_file_path(Path::new("/maps/world.tmx"), false).unwrap();
        assert_eq!(file.as_str(), "file:///maps/world.tmx");
        let dir = Locator::from_file_path(Path::new("/maps"), true).unwrap();
        assert_eq!(dir.as_str(), "file:///maps/");
        assert!(dir.is_directory());
    }

    #[test]
    fn from_file_path_rejects_relative() {
        let err = Locator::from_file_path(Path::new("maps/world.tmx"), false).unwrap_err();
        assert!(matches!(err, LocatorError::InvalidLocator { .. }));
    }
}
