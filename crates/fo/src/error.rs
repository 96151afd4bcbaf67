//! Error types for the compile pipeline.
//!
//! Binding-level failures never appear here: they are absorbed locally by
//! fallback substitution. Only structural template problems and unparsable
//! data abort a compile.

use platen_template::TemplateError;
use platen_xmlpath::XmlPathError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Template structure error: {0}")]
    Template(#[from] TemplateError),

    #[error("Template deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data document parse error: {0}")]
    DataParse(String),
}

impl From<XmlPathError> for CompileError {
    fn from(e: XmlPathError) -> Self {
        CompileError::DataParse(e.to_string())
    }
}
