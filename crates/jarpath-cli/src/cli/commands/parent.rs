//! `jarpath parent <locator>` – print the parent locator.

use anyhow::{Context, Result};
use jarpath_core::Resolver;

pub fn run_parent(resolver: &Resolver, locator: &str) -> Result<()> {
    let parent = resolver
        .parent_str(locator)
        .with_context(|| format!("parent of {locator}"))?;
    println!("{parent}");
    Ok(())
}
