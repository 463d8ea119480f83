//! jcgen: a minimal static site generator
//!
//! Reads Markdown files with YAML front-matter from a content directory,
//! wraps each rendered page in shared header/footer templates, writes an
//! index page listing every post newest-first, and copies static assets
//! into the output directory. One linear pass, no server, no incremental
//! builds.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod templates;

pub use error::Error;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main application: configuration plus the resolved directory layout
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content directory
    pub content_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
    /// Template directory
    pub template_dir: PathBuf,
    /// Static assets directory
    pub static_dir: PathBuf,
}

impl Site {
    /// Create a site rooted at a directory, with the default layout
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self::with_config(base_dir, config::SiteConfig::default())
    }

    /// Create a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let output_dir = base_dir.join(&config.output_dir);
        let template_dir = base_dir.join(&config.template_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Self {
            config,
            base_dir,
            content_dir,
            output_dir,
            template_dir,
            static_dir,
        }
    }

    /// Build the site into the output directory
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Delete the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
