//! Create a new post or draft

use anyhow::Result;
use std::fs;

use crate::Postern;

/// Scaffold a new document with a front-matter header
pub fn create_post(postern: &Postern, title: &str, draft: bool, path: Option<&str>) -> Result<()> {
    let now = chrono::Utc::now().with_timezone(&postern.timezone());

    let target_dir = if draft {
        postern.source_dir.join("_drafts")
    } else {
        postern.source_dir.join("_posts")
    };

    fs::create_dir_all(&target_dir)?;

    // Generate filename
    let filename = if let Some(p) = path {
        format!("{}.md", p)
    } else {
        let post_name = &postern.config.new_post_name;
        let slug = slug::slugify(title);

        post_name
            .replace(":title", &slug)
            .replace(":year", &now.format("%Y").to_string())
            .replace(":month", &now.format("%m").to_string())
            .replace(":day", &now.format("%d").to_string())
    };

    let file_path = target_dir.join(&filename);

    // Load scaffold template
    let scaffold_name = if draft { "draft" } else { "post" };
    let scaffold_path = postern
        .base_dir
        .join("scaffolds")
        .join(format!("{}.md", scaffold_name));
    let scaffold_content = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        // Default scaffold; drafts carry a date too, since every document
        // in the store must validate
        "---\ntitle: {{ title }}\ndate: {{ date }}\ncategories:\n---\n".to_string()
    };

    // Replace template variables
    let content = scaffold_content
        .replace("{{ title }}", title)
        .replace("{{ date }}", &now.format("%Y-%m-%d %H:%M:%S").to_string());

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

/// Run the new command
pub fn run(postern: &Postern, title: &str, draft: bool) -> Result<()> {
    create_post(postern, title, draft, None)
}
