use crate::error::RenderError;

/// Turns compiled document text into a binary artifact.
///
/// Implementations receive the document text verbatim and must be
/// deterministic: identical text yields a byte-identical artifact. The call
/// blocks until the artifact is complete; retry policy, timeouts, and
/// cancellation belong to the calling layer, never here.
pub trait RenderDelegate: Send + Sync {
    fn render(&self, document: &str) -> Result<Vec<u8>, RenderError>;

    /// Content type of the produced artifact.
    fn mime_type(&self) -> &'static str;
}

/// Delegate that returns the document text unchanged.
///
/// Stands in wherever no rasterizing engine is wired up, and keeps tests
/// independent of one.
#[derive(Debug, Default, Clone, Copy)]
pub struct FoPassthrough;

impl RenderDelegate for FoPassthrough {
    fn render(&self, document: &str) -> Result<Vec<u8>, RenderError> {
        Ok(document.as_bytes().to_vec())
    }

    fn mime_type(&self) -> &'static str {
        "application/xml"
    }
}
