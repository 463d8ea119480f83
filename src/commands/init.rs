//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
  <link rel="stylesheet" href="static/site.css">
</head>
<body>
"#;

const DEFAULT_FOOTER: &str = r#"</body>
</html>
"#;

const SAMPLE_POST: &str = r#"---
title: Hello World
date: 2024-01-01
---

# Welcome

This is your first post. Edit or delete it, then run `jcgen build`.
"#;

/// Scaffold the fixed directory layout in the target directory:
/// `content/` with a sample post, `templates/` with the header and footer
/// fragments, and an empty `static/`
pub fn run(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("content"))?;
    fs::create_dir_all(target_dir.join("templates"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    fs::write(target_dir.join("templates/header.html"), DEFAULT_HEADER)?;
    fs::write(target_dir.join("templates/footer.html"), DEFAULT_FOOTER)?;
    fs::write(target_dir.join("content/hello-world.md"), SAMPLE_POST)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;
    use tempfile::TempDir;

    #[test]
    fn test_init_scaffolds_buildable_site() {
        let dir = TempDir::new().unwrap();
        run(dir.path()).unwrap();

        let site = Site::new(dir.path());
        site.build().unwrap();

        let page = fs::read_to_string(site.output_dir.join("hello-world.html")).unwrap();
        assert!(page.contains("<title>Hello World</title>"));
        assert!(page.contains("<h1>Welcome</h1>"));
    }
}
