//! Validate the whole store

use anyhow::Result;

use crate::Postern;

/// Load and validate every document.
///
/// Fails on the first broken document so a build pipeline wired to this
/// command never publishes a store with an invalid entry.
pub fn run(postern: &Postern) -> Result<()> {
    let store = postern.load()?;
    println!(
        "OK: {} posts, {} categories",
        store.len(),
        store.categories().len()
    );
    Ok(())
}
