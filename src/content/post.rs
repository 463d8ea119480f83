//! Post model

/// One rendered content file, as listed on the index page
///
/// Created after a page is written and discarded once the index is built.
#[derive(Debug, Clone)]
pub struct Post {
    /// Post title from front-matter, or "Untitled"
    pub title: String,

    /// Output file name (`<stem>.html`)
    pub file: String,

    /// Free-form date string from front-matter; sorted lexically, newest first
    pub date: String,
}
