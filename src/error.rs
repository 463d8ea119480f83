//! Build error taxonomy

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a build. None of these are recovered from anywhere:
/// the first failure propagates up to `main` and the process exits non-zero,
/// leaving whatever was already written in the output directory as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// A file opened a front-matter block with `---` but never closed it
    #[error("malformed front-matter: opening `---` has no closing `---` line")]
    MalformedFrontmatter,

    /// The front-matter block is not valid YAML
    #[error("invalid YAML in front-matter: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// A header/footer template file is missing or unreadable
    #[error("template not found: {path}")]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other filesystem failure during reset, read, write, or copy
    #[error("filesystem error: {0}")]
    Filesystem(#[from] std::io::Error),

    /// Failure while walking the static-assets tree
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}
