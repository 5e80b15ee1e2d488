//! Initialize a new post store

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Postern;

/// Initialize a new store in the given directory
pub fn init_store(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("source/_posts"))?;
    fs::create_dir_all(target_dir.join("source/_drafts"))?;
    fs::create_dir_all(target_dir.join("scaffolds"))?;

    // Create default _config.yml
    let config_content = r#"# Postern Configuration

# Site
title: Postern
subtitle: ''
description: ''
author: John Doe
language: en
timezone: ''

# Directory
source_dir: source

# Writing
new_post_name: :year-:month-:day-:title.md
include_drafts: false
future: true
category_case: preserve

# Date / Time format
date_format: YYYY-MM-DD
time_format: HH:mm:ss
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    // Create scaffold templates
    let post_scaffold = r#"---
title: {{ title }}
date: {{ date }}
categories:
---
"#;

    let draft_scaffold = r#"---
title: {{ title }}
date: {{ date }}
published: false
---
"#;

    fs::write(target_dir.join("scaffolds/post.md"), post_scaffold)?;
    fs::write(target_dir.join("scaffolds/draft.md"), draft_scaffold)?;

    // Create a sample post
    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
categories:
---

Welcome to your new post store. Every document in `source/_posts` needs a
front-matter header with a `title` and a `date`; run `postern check` to
validate the whole collection before handing it to your site generator.

Create a new essay with:

```bash
$ postern new "My Next Essay"
```

List what you have, newest first:

```bash
$ postern list
```
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    let sample_name = format!("{}-hello-world.md", now.format("%Y-%m-%d"));
    fs::write(target_dir.join("source/_posts").join(sample_name), sample_post)?;

    Ok(())
}

/// Run the init command with an existing Postern instance
pub fn run(postern: &Postern) -> Result<()> {
    init_store(&postern.base_dir)
}
