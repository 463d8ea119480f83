//! HTML post-processing helpers

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref SRC_ATTR: Regex = Regex::new(r#"src="([^"]*)""#).unwrap();
}

/// Rewrite image `src` attributes emitted by the Markdown renderer so they
/// resolve inside the `static/` subdirectory of the output tree.
///
/// Only relative paths are touched. Absolute URLs, protocol-relative URLs,
/// data URIs, and paths already under `static/` pass through, which also
/// makes the rewrite idempotent.
pub fn rewrite_image_paths(html: &str) -> String {
    SRC_ATTR
        .replace_all(html, |caps: &Captures| {
            let value = &caps[1];
            if needs_rewrite(value) {
                format!(r#"src="static/{}""#, value)
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Whether a `src` value should be redirected into the static-assets dir
fn needs_rewrite(value: &str) -> bool {
    !(value.starts_with("http://")
        || value.starts_with("https://")
        || value.starts_with("//")
        || value.starts_with("data:")
        || value.starts_with("static/"))
}
