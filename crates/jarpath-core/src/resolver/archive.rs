//! Parent and relative resolution for archive locators.
//!
//! Generic URL resolution treats `jar:` bodies as opaque, so both operations
//! work on the locator text. The `<scheme>:<container>!` prefix is the
//! boundary and is carried over untouched; only the inner path is edited.

use crate::error::{LocatorError, LocatorResult};
use crate::locator::Locator;

use super::is_directory;
use super::segments::collapse_segments;

const SEPARATOR: char = '/';

fn split(locator: &Locator) -> LocatorResult<(&str, &str)> {
    locator
        .archive_parts()
        .ok_or_else(|| LocatorError::invalid_locator(locator.as_str(), "no !/ in archive locator"))
}

/// Drops the last inner segment. The archive root is its own parent.
pub(super) fn parent(locator: &Locator) -> LocatorResult<Locator> {
    let (prefix, inner) = split(locator)?;
    let cut = if is_directory(locator) {
        let trimmed = &inner[..inner.len() - 1];
        trimmed.rfind(SEPARATOR).map_or(inner.len(), |i| i + 1)
    } else {
        inner.rfind(SEPARATOR).map_or(0, |i| i + 1)
    };
    Locator::parse(&format!("{}{}", prefix, &inner[..cut]))
}

/// Appends `path` to the base directory and collapses dot segments of the
/// inner path. The inner root segment is the floor of the collapse.
pub(super) fn resolve(locator: &Locator, path: &str) -> LocatorResult<Locator> {
    let base = if is_directory(locator) {
        locator.clone()
    } else {
        parent(locator)?
    };
    let (prefix, inner) = split(&base)?;
    let joined = format!("{}{}", inner, path);

    let segments = collapse_segments(joined.split(SEPARATOR), 1).ok_or_else(|| {
        LocatorError::UnresolvablePath {
            base: locator.to_string(),
            path: path.to_string(),
        }
    })?;

    let resolved = format!("{}{}", prefix, segments.join("/"));
    tracing::trace!(base = %base, %resolved, "collapsed archive path");
    Locator::parse(&resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Locator {
        Locator::parse(s).unwrap()
    }

    #[test]
    fn parent_of_file_keeps_directory() {
        let p = parent(&loc("jar:file:/x.jar!/dir/map.tmx")).unwrap();
        assert_eq!(p.as_str(), "jar:file:/x.jar!/dir/");
    }

    #[test]
    fn parent_of_directory_drops_last_segment() {
        let p = parent(&loc("jar:file:/x.jar!/a/b/")).unwrap();
        assert_eq!(p.as_str(), "jar:file:/x.jar!/a/");
        let p = parent(&loc("jar:file:/x.jar!/dir/")).unwrap();
        assert_eq!(p.as_str(), "jar:file:/x.jar!/");
    }

    #[test]
    fn parent_of_top_level_entry_is_root() {
        let p = parent(&loc("jar:file:/x.jar!/map.tmx")).unwrap();
        assert_eq!(p.as_str(), "jar:file:/x.jar!/");
    }

    #[test]
    fn parent_of_archive_root_is_root() {
        let p = parent(&loc("jar:file:/x.jar!/")).unwrap();
        assert_eq!(p.as_str(), "jar:file:/x.jar!/");
    }

    #[test]
    fn parent_ignores_separators_inside_container() {
        let p = parent(&loc("jar:https://example.com/a/b/maps.jar!/")).unwrap();
        assert_eq!(p.as_str(), "jar:https://example.com/a/b/maps.jar!/");
    }

    #[test]
    fn resolve_does_not_touch_container_dot_segments() {
        let r = resolve(&loc("jar:file:/a/../x.jar!/dir/"), "../b.png").unwrap();
        assert_eq!(r.as_str(), "jar:file:/a/../x.jar!/b.png");
    }

    #[test]
    fn resolve_absolute_inner_path_is_appended() {
        let r = resolve(&loc("jar:file:/x.jar!/dir/"), "/images/a.png").unwrap();
        assert_eq!(r.as_str(), "jar:file:/x.jar!/dir//images/a.png");
    }
}
