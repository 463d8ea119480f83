//! Header/footer templates and page rendering
//!
//! Templates are plain HTML fragments. The only placeholder is the literal
//! token `{{ title }}` inside the header fragment; there is no templating
//! engine, no escaping, and no other substitutions.

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Placeholder token replaced with the page title in the header fragment
const TITLE_PLACEHOLDER: &str = "{{ title }}";

/// Header and footer fragments, loaded once per build
#[derive(Debug)]
pub struct Templates {
    header: String,
    footer: String,
}

impl Templates {
    /// Load `header.html` and `footer.html` from the template directory
    pub fn load(template_dir: &Path) -> Result<Self, Error> {
        Ok(Self {
            header: read_template(&template_dir.join("header.html"))?,
            footer: read_template(&template_dir.join("footer.html"))?,
        })
    }

    /// Build templates from in-memory fragments
    pub fn from_fragments(header: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            footer: footer.into(),
        }
    }

    /// Wrap rendered content with the header and footer, substituting every
    /// occurrence of the title placeholder in the header
    pub fn render_page(&self, title: &str, content: &str) -> String {
        let header = self.header.replace(TITLE_PLACEHOLDER, title);
        format!("{}\n{}\n{}", header, content, self.footer)
    }
}

fn read_template(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::TemplateNotFound {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_render_page_substitutes_title() {
        let templates = Templates::from_fragments("<title>{{ title }}</title>", "<footer/>");
        let page = templates.render_page("My Post", "<p>hi</p>");
        assert_eq!(page, "<title>My Post</title>\n<p>hi</p>\n<footer/>");
    }

    #[test]
    fn test_render_page_substitutes_every_occurrence() {
        let templates = Templates::from_fragments("{{ title }} - {{ title }}", "end");
        let page = templates.render_page("X", "body");
        assert_eq!(page, "X - X\nbody\nend");
    }

    #[test]
    fn test_placeholder_in_footer_is_ignored() {
        let templates = Templates::from_fragments("head", "{{ title }}");
        let page = templates.render_page("X", "body");
        assert_eq!(page, "head\nbody\n{{ title }}");
    }

    #[test]
    fn test_load_reads_both_fragments() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("header.html"), "<h>{{ title }}</h>").unwrap();
        fs::write(dir.path().join("footer.html"), "<f></f>").unwrap();

        let templates = Templates::load(dir.path()).unwrap();
        let page = templates.render_page("T", "c");
        assert_eq!(page, "<h>T</h>\nc\n<f></f>");
    }

    #[test]
    fn test_missing_header_is_template_not_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("footer.html"), "<f></f>").unwrap();

        let err = Templates::load(dir.path()).unwrap_err();
        match err {
            Error::TemplateNotFound { path, .. } => {
                assert!(path.ends_with("header.html"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
