//! `jarpath resolve <locator> [path]...` – resolve paths against a base.

use anyhow::{Context, Result};
use jarpath_core::{Locator, Resolver};

/// Resolves every path against `locator`. No paths yields the base itself.
pub(super) fn resolve_all(
    resolver: &Resolver,
    locator: &str,
    paths: &[String],
) -> Result<Vec<Locator>> {
    let base = Locator::parse(locator).with_context(|| format!("base locator {locator}"))?;
    if paths.is_empty() {
        return Ok(vec![base]);
    }
    paths
        .iter()
        .map(|path| {
            resolver
                .resolve(&base, Some(path.as_str()))
                .with_context(|| format!("resolve {path} against {locator}"))
        })
        .collect()
}

pub fn run_resolve(resolver: &Resolver, locator: &str, paths: &[String]) -> Result<()> {
    for resolved in resolve_all(resolver, locator, paths)? {
        println!("{resolved}");
    }
    Ok(())
}
