//! Loading XML text into a [`Document`].
//!
//! Tokenizing is done by `quick-xml`; this module only maps its events onto
//! the tree construction API (`create_*`, population setters, and
//! [`Document::append_child`]). Anything a hand-written builder could do
//! through the public API is all the loader does.
//!
//! Event mapping:
//!
//! - start and empty tags become elements; tag and attribute names are split
//!   at the first `:` into namespace and local name;
//! - text and CDATA are appended to the value of the enclosing element;
//! - `<!DOCTYPE ...>` becomes a directive, `<?xml ...?>` and other
//!   instructions become processing instructions.

mod builder;

use crate::error::ParseError;
use crate::tree::Document;

/// Default maximum element nesting depth.
pub const DEFAULT_MAX_DEPTH: u32 = 256;

/// Options controlling how text is loaded into a tree.
///
/// Use the builder pattern to configure options:
///
/// ```
/// use xmlx::parser::ParseOptions;
///
/// let opts = ParseOptions::default()
///     .trim_text(false)
///     .keep_comments(false)
///     .max_depth(64);
/// assert_eq!(opts.max_depth, 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Trim whitespace around text and comment content, and drop
    /// whitespace-only text (default: `true`).
    pub trim_text: bool,
    /// Keep the `<?xml ...?>` declaration as a processing instruction with
    /// target `xml` (default: `true`).
    pub keep_declaration: bool,
    /// Keep comments (default: `true`).
    pub keep_comments: bool,
    /// Maximum element nesting depth (default: 256).
    pub max_depth: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            trim_text: true,
            keep_declaration: true,
            keep_comments: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Enables or disables whitespace trimming of text and comments.
    #[must_use]
    pub fn trim_text(mut self, yes: bool) -> Self {
        self.trim_text = yes;
        self
    }

    /// Enables or disables keeping the XML declaration as a node.
    #[must_use]
    pub fn keep_declaration(mut self, yes: bool) -> Self {
        self.keep_declaration = yes;
        self
    }

    /// Enables or disables keeping comments.
    #[must_use]
    pub fn keep_comments(mut self, yes: bool) -> Self {
        self.keep_comments = yes;
        self
    }

    /// Sets the maximum element nesting depth.
    #[must_use]
    pub fn max_depth(mut self, max: u32) -> Self {
        self.max_depth = max;
        self
    }
}

/// Parses an XML string with default options.
///
/// # Errors
///
/// Returns `ParseError` if the input is not well-formed XML.
pub fn parse_str(input: &str) -> Result<Document, ParseError> {
    parse_str_with_options(input, &ParseOptions::default())
}

/// Parses an XML string with the given options.
///
/// # Errors
///
/// Returns `ParseError` if the input is not well-formed XML or nests deeper
/// than `options.max_depth`.
///
/// # Examples
///
/// ```
/// use xmlx::parser::{parse_str_with_options, ParseOptions};
/// use xmlx::serial::serialize;
///
/// let opts = ParseOptions::default().keep_comments(false);
/// let doc = parse_str_with_options("<a><!-- gone --><b>1</b></a>", &opts).unwrap();
/// assert_eq!(serialize(&doc), "<a><b>1</b></a>");
/// ```
pub fn parse_str_with_options(input: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    builder::TreeBuilder::new(options).build(input)
}
