use thiserror::Error;

/// Structural template errors that the serde layer cannot express.
///
/// A template that fails these checks aborts the whole compile call; there is
/// no partial or best-effort document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template declares no pages")]
    NoPages,

    #[error("Text component '{0}' must declare content or a binding")]
    TextWithoutSource(String),

    #[error("Table component '{0}' must declare at least one column")]
    TableWithoutColumns(String),
}
