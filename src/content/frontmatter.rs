//! Front-matter parsing

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::Error;

/// Front-matter data from a content file
///
/// Only `title` and `date` are used by the build; any other keys are kept
/// in `extra`. `date` is a free-form string and is never parsed as a
/// calendar date - the index sorts it lexically.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content text.
    /// Returns (front_matter, body).
    ///
    /// A front-matter block is delimited by two lines consisting solely of
    /// `---`, the first of which must be the first line of the file. Only
    /// these two lines delimit the block, so a horizontal rule later in the
    /// body never confuses the parser. The body is returned trimmed of
    /// surrounding whitespace.
    ///
    /// Text that does not open with a `---` line is returned unchanged with
    /// empty front-matter. An opening delimiter without a closing one is an
    /// error: the file is ambiguous and the build must not guess.
    pub fn parse(raw: &str) -> Result<(Self, &str), Error> {
        let Some(rest) = strip_opening_delimiter(raw) else {
            return Ok((FrontMatter::default(), raw));
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if is_delimiter_line(line) {
                let block = &rest[..offset];
                let body = &rest[offset + line.len()..];
                let fm = parse_block(block)?;
                return Ok((fm, body.trim()));
            }
            offset += line.len();
        }

        Err(Error::MalformedFrontmatter)
    }
}

/// Decode the YAML block between the delimiters.
/// An empty or `null` block counts as no metadata.
fn parse_block(block: &str) -> Result<FrontMatter, Error> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    let fm: Option<FrontMatter> = serde_yaml::from_str(block)?;
    Ok(fm.unwrap_or_default())
}

/// A delimiter line is exactly `---` plus its line ending
fn is_delimiter_line(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == "---"
}

/// If the first line of `raw` is a delimiter, return the text after it
fn strip_opening_delimiter(raw: &str) -> Option<&str> {
    let first_line_len = raw.find('\n').map(|i| i + 1).unwrap_or(raw.len());
    let first_line = &raw[..first_line_len];
    if is_delimiter_line(first_line) {
        Some(&raw[first_line_len..])
    } else {
        None
    }
}
