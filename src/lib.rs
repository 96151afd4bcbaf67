//! # platen
//!
//! Compiles a declarative document template (a tree of pages, regions, and
//! absolutely positioned components) together with a caller-supplied XML
//! data document into print-ready XSL-FO document text.
//!
//! This crate is the integration layer over the workspace members:
//! - **platen-template**: the template data model and structural validation
//! - **platen-xmlpath**: absolute-path string queries over the data document
//! - **platen-fo**: binding resolution, component rendering, page
//!   composition, and document emission
//! - **platen-render-core**: the delegate boundary for downstream
//!   rasterization
//!
//! ## Design principle
//!
//! A compile call is a pure function over call-local values: templates and
//! data documents are constructed per call, never cached, and never mutated.
//! Identical input yields byte-identical output text.

// Re-export foundation crates
pub use platen_fo as fo;
pub use platen_render_core as render;
pub use platen_template as template;
pub use platen_xmlpath as xmlpath;

// Re-export the compile surface
pub use platen_fo::{CompileError, compile};
pub use platen_render_core::{FoPassthrough, RenderDelegate, RenderError};
pub use platen_template::{Template, TemplateError};
pub use platen_xmlpath::{XmlDocument, XmlPathError};

/// Deserializes a caller-supplied JSON template and compiles it.
///
/// Convenience for boundaries that hold the template as untyped JSON (the
/// HTTP surface does); a malformed structure surfaces as
/// [`CompileError::Json`] rather than a crash.
pub fn compile_value(
    template: &serde_json::Value,
    data_xml: &str,
) -> Result<String, CompileError> {
    let template: Template = serde_json::from_value(template.clone())?;
    compile(&template, data_xml)
}
