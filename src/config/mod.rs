//! Site configuration
//!
//! There is no configuration file: the directory layout and the site title
//! are fixed. The struct exists so tests and embedders can point a build at
//! arbitrary directories instead of the defaults.

/// Directory layout and site-wide settings for one build
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory holding `*.md` content files (flat, not recursed into)
    pub content_dir: String,
    /// Output directory, deleted and recreated on every build
    pub output_dir: String,
    /// Directory holding `header.html` and `footer.html`
    pub template_dir: String,
    /// Static assets directory, copied verbatim under `<output>/static/`
    pub static_dir: String,
    /// Site title, used for the index page
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            output_dir: "dist".to_string(),
            template_dir: "templates".to_string(),
            static_dir: "static".to_string(),
            title: "The Original JC".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.output_dir, "dist");
        assert_eq!(config.template_dir, "templates");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.title, "The Original JC");
    }
}
