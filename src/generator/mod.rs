//! Generator module - runs the build pipeline and writes the output tree

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::content::{FrontMatter, MarkdownRenderer, Post};
use crate::helpers::rewrite_image_paths;
use crate::templates::Templates;
use crate::Site;

/// Static site generator
///
/// Runs four strictly sequential phases: reset the output directory, render
/// every content file, write the index, copy static assets. There is no
/// incremental mode and no recovery - the first error aborts the build and
/// already-written files stay where they are.
#[derive(Debug)]
pub struct Generator {
    site: Site,
    templates: Templates,
    renderer: MarkdownRenderer,
}

impl Generator {
    /// Create a new generator, loading templates up front
    pub fn new(site: &Site) -> Result<Self> {
        let templates = Templates::load(&site.template_dir)?;
        Ok(Self {
            site: site.clone(),
            templates,
            renderer: MarkdownRenderer::new(),
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<()> {
        self.reset_output()?;

        let posts = self.render_posts()?;
        self.render_index(&posts)?;
        self.copy_static_assets()?;

        Ok(())
    }

    /// Delete and recreate the output directory
    fn reset_output(&self) -> Result<()> {
        let output_dir = &self.site.output_dir;
        if output_dir.exists() {
            fs::remove_dir_all(output_dir)
                .with_context(|| format!("failed to remove {:?}", output_dir))?;
        }
        fs::create_dir_all(output_dir)
            .with_context(|| format!("failed to create {:?}", output_dir))?;
        Ok(())
    }

    /// Render every content file to `<stem>.html` and collect index records
    fn render_posts(&self) -> Result<Vec<Post>> {
        let mut posts = Vec::new();

        for path in self.content_files()? {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {:?}", path))?;
            let (fm, body) = FrontMatter::parse(&raw)
                .with_context(|| format!("failed to parse front-matter in {:?}", path))?;

            let html = rewrite_image_paths(&self.renderer.render(body));

            let title = fm.title.unwrap_or_else(|| "Untitled".to_string());
            let date = fm.date.unwrap_or_default();

            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("untitled");
            let file = format!("{}.html", stem);

            let page = self.templates.render_page(&title, &html);
            fs::write(self.site.output_dir.join(&file), page)
                .with_context(|| format!("failed to write {}", file))?;
            tracing::debug!("Rendered {:?} -> {}", path, file);

            posts.push(Post { title, file, date });
        }

        tracing::info!("Rendered {} posts", posts.len());
        Ok(posts)
    }

    /// Markdown files directly inside the content directory, sorted by file
    /// name so output is identical across platforms and filesystems.
    /// Subdirectories are not visited.
    fn content_files(&self) -> Result<Vec<PathBuf>> {
        let content_dir = &self.site.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(content_dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("md") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Write the index page listing every post, newest date first
    fn render_index(&self, posts: &[Post]) -> Result<()> {
        let mut sorted: Vec<&Post> = posts.iter().collect();
        // Dates are free-form strings; descending lexical order is the
        // whole sort contract. Ties keep content-file order (stable sort).
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        let mut entries = String::new();
        for post in &sorted {
            entries.push_str(&format!(
                r#"<li><a href="{}">{}</a> {}</li>"#,
                post.file, post.title, post.date
            ));
        }

        let content = format!("<ul>{}</ul>", entries);
        let page = self.templates.render_page(&self.site.config.title, &content);
        fs::write(self.site.output_dir.join("index.html"), page)
            .context("failed to write index.html")?;

        tracing::debug!("Rendered index.html");
        Ok(())
    }

    /// Mirror the static directory under `<output>/static/`.
    /// Existing destination files are overwritten; nothing is deleted.
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        let dest_root = self.site.output_dir.join("static");
        for entry in WalkDir::new(static_dir).follow_links(true) {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                let relative = path.strip_prefix(static_dir)?;
                let dest = dest_root.join(relative);
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)
                    .with_context(|| format!("failed to copy {:?}", path))?;
            }
        }

        tracing::info!("Copied static assets to {:?}", dest_root);
        Ok(())
    }
}
