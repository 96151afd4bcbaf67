//! # platen-fo
//!
//! The template compiler: walks a template's pages, regions, and components,
//! resolves data bindings against an XML data document, and emits the
//! XSL-FO document text handed to the render delegate.
//!
//! The whole pipeline is a pure, synchronous computation over call-local
//! values: no suspension points, no shared mutable state, no caching. One
//! compiler may serve any number of concurrent calls. For a fixed
//! `(template, data)` pair the output text is byte-identical across calls.

pub mod binding;
pub mod component;
pub mod compose;
pub mod emit;
pub mod error;
pub mod escape;

pub use error::CompileError;

use platen_template::Template;
use platen_xmlpath::XmlDocument;

/// Compiles a template and its data document into XSL-FO text.
///
/// This is the core's only entry point. Binding failures are absorbed by
/// fallback substitution; a structurally invalid template or unparsable data
/// text aborts the whole call. There is no partial document.
pub fn compile(template: &Template, data_xml: &str) -> Result<String, CompileError> {
    template.validate()?;
    let doc = XmlDocument::parse(data_xml)?;
    log::debug!(
        "compiling template '{}' ({} pages)",
        template.template_id,
        template.pages.len()
    );
    let page_sequences = compose::render_pages(template, &doc);
    Ok(emit::emit_document(&page_sequences))
}

#[cfg(test)]
mod tests {
    use super::*;
    use platen_template::TemplateError;
    use serde_json::json;

    fn template_json() -> serde_json::Value {
        json!({
            "schemaVersion": "1.0",
            "tenantId": "tenant-demo",
            "templateId": "statement",
            "pages": [{
                "id": "page-1",
                "pageNumber": 1,
                "size": "A4",
                "header": { "components": [] },
                "body": { "components": [{
                    "id": "account-name",
                    "type": "text",
                    "position": { "x": 40.0, "y": 30.0, "width": 200.0, "height": 20.0 },
                    "binding": { "path": "/Case/Account/Name", "fallback": "Unknown" },
                    "style": {}
                }] },
                "footer": { "components": [] }
            }]
        })
    }

    #[test]
    fn compiles_bound_value_into_document() {
        let template: Template = serde_json::from_value(template_json()).unwrap();
        let out = compile(
            &template,
            "<Case><Account><Name>Orbyt</Name></Account></Case>",
        )
        .unwrap();
        assert!(out.contains(">Orbyt</fo:block>"));
    }

    #[test]
    fn compiles_fallback_when_data_lacks_node() {
        let template: Template = serde_json::from_value(template_json()).unwrap();
        let out = compile(&template, "<Case><Account/></Case>").unwrap();
        assert!(out.contains(">Unknown</fo:block>"));
    }

    #[test]
    fn malformed_data_is_a_compile_error() {
        let template: Template = serde_json::from_value(template_json()).unwrap();
        let result = compile(&template, "<Case><Broken></Case>");
        assert!(matches!(result, Err(CompileError::DataParse(_))));
    }

    #[test]
    fn invalid_template_is_a_compile_error() {
        let mut value = template_json();
        value["pages"] = json!([]);
        let template: Template = serde_json::from_value(value).unwrap();
        let result = compile(&template, "<Case/>");
        assert!(matches!(
            result,
            Err(CompileError::Template(TemplateError::NoPages))
        ));
    }

    #[test]
    fn output_is_byte_identical_across_calls() {
        let template: Template = serde_json::from_value(template_json()).unwrap();
        let data = "<Case><Account><Name>Orbyt</Name></Account></Case>";
        let first = compile(&template, data).unwrap();
        let second = compile(&template, data).unwrap();
        assert_eq!(first, second);
    }
}
