//! Absolute-path string queries over XML data documents.
//!
//! This crate is the data-query capability behind template bindings: parse a
//! caller-supplied XML text once per compile call, then answer string-typed
//! queries for absolute location paths like `/Case/Account/Name`.
//!
//! Evaluation is deliberately small: each step descends to the **first**
//! matching child element, and the result is that element's string-value.
//! An unmatched path is not an error: it evaluates to the empty string, the
//! same way XPath converts an empty node-set. Only malformed paths
//! (non-absolute, bad syntax) error.

pub mod document;
pub mod error;
pub mod parser;

pub use document::XmlDocument;
pub use error::XmlPathError;
pub use parser::{LocationPath, parse_path};
