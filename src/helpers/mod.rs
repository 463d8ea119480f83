//! Helper functions for HTML post-processing

mod html;

pub use html::rewrite_image_paths;
