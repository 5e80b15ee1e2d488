//! Show a single post by slug

use anyhow::Result;

use crate::helpers::{date_iso, format_date};
use crate::Postern;

/// Look up a post by its slug and print it
pub fn run(postern: &Postern, slug: &str) -> Result<()> {
    let store = postern.load()?;
    let post = store.find_by_slug(slug)?;

    println!("{}", post.title);
    println!(
        "Published: {} {} ({})",
        format_date(&post.published_at, &postern.config.date_format),
        format_date(&post.published_at, &postern.config.time_format),
        date_iso(&post.published_at)
    );
    if let Some(updated) = &post.updated {
        println!(
            "Updated:   {}",
            format_date(updated, &postern.config.date_format)
        );
    }
    if !post.categories.is_empty() {
        println!("Categories: {}", post.categories.join(", "));
    }
    if let Some(newer) = post.prev(store.posts()) {
        println!("Newer: {}", newer.slug);
    }
    if let Some(older) = post.next(store.posts()) {
        println!("Older: {}", older.slug);
    }
    println!();
    println!("{}", post.body);

    Ok(())
}
