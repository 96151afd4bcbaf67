//! XML data document wrapper providing string-typed path queries.

use crate::error::XmlPathError;
use crate::parser::parse_path;
use roxmltree::Node;

/// Wrapper around `roxmltree::Document` scoped to one compile call.
///
/// The document borrows the caller's XML text and is queried read-only;
/// evaluation holds no state between calls, so one document may serve any
/// number of queries in any order with identical results.
pub struct XmlDocument<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> XmlDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self, XmlPathError> {
        let doc = roxmltree::Document::parse(text)?;
        Ok(Self { doc })
    }

    /// Evaluates an absolute path as a string-typed query.
    ///
    /// Each step takes the first child element whose tag name matches the
    /// segment. A path that matches no element evaluates to `Ok("")`; only a
    /// malformed path is an error.
    pub fn evaluate(&self, path: &str) -> Result<String, XmlPathError> {
        let location = parse_path(path)?;
        let mut current = self.doc.root();
        for segment in &location.segments {
            let next = current
                .children()
                .find(|n| n.is_element() && n.tag_name().name() == segment.as_str());
            match next {
                Some(child) => current = child,
                None => return Ok(String::new()),
            }
        }
        Ok(string_value(current))
    }
}

/// The string-value of an element: all descendant text, concatenated in
/// document order.
fn string_value(node: Node) -> String {
    let mut value = String::new();
    for descendant in node.descendants() {
        if descendant.is_text() {
            value.push_str(descendant.text().unwrap_or(""));
        }
    }
    value
}
