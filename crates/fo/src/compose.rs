//! Region and page composition.
//!
//! Pages are emitted in ascending `page_number` order regardless of input
//! order (stable sort, so duplicate numbers keep input order). Within a page
//! the regions always emit header, body, footer, each concatenating its
//! components in input order with no separators.

use crate::component::render_component;
use platen_template::{Page, Region, Template};
use platen_xmlpath::XmlDocument;

/// Renders all pages of a template to a concatenated sequence of
/// `fo:page-sequence` envelopes.
pub fn render_pages(template: &Template, doc: &XmlDocument) -> String {
    let mut pages: Vec<&Page> = template.pages.iter().collect();
    pages.sort_by_key(|page| page.page_number);
    pages.iter().map(|page| render_page(page, doc)).collect()
}

fn render_page(page: &Page, doc: &XmlDocument) -> String {
    let header = render_region(&page.header, doc);
    let body = render_region(&page.body, doc);
    let footer = render_region(&page.footer, doc);
    format!(
        "<fo:page-sequence master-reference=\"A4\"><fo:flow flow-name=\"xsl-region-body\">{header}{body}{footer}</fo:flow></fo:page-sequence>"
    )
}

fn render_region(region: &Region, doc: &XmlDocument) -> String {
    region
        .components
        .iter()
        .map(|component| render_component(doc, component))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> XmlDocument<'static> {
        XmlDocument::parse("<Case/>").unwrap()
    }

    fn marker(id: &str, text: &str) -> serde_json::Value {
        json!({
            "id": id, "type": "text",
            "position": { "x": 0.0, "y": 0.0, "width": 10.0, "height": 10.0 },
            "content": text, "style": {}
        })
    }

    fn page(number: u32, header: &str, body: &str, footer: &str) -> serde_json::Value {
        json!({
            "id": format!("page-{number}"),
            "pageNumber": number,
            "size": "A4",
            "header": { "components": [marker("h", header)] },
            "body": { "components": [marker("b", body)] },
            "footer": { "components": [marker("f", footer)] }
        })
    }

    fn template(pages: Vec<serde_json::Value>) -> Template {
        serde_json::from_value(json!({
            "schemaVersion": "1.0",
            "tenantId": "t",
            "templateId": "tpl",
            "pages": pages
        }))
        .unwrap()
    }

    #[test]
    fn pages_sort_by_page_number() {
        let template = template(vec![
            page(3, "h3", "b3", "f3"),
            page(1, "h1", "b1", "f1"),
            page(2, "h2", "b2", "f2"),
        ]);
        let out = render_pages(&template, &doc());
        let p1 = out.find("b1").unwrap();
        let p2 = out.find("b2").unwrap();
        let p3 = out.find("b3").unwrap();
        assert!(p1 < p2 && p2 < p3);
    }

    #[test]
    fn duplicate_page_numbers_keep_input_order() {
        let template = template(vec![page(1, "h-first", "b", "f"), page(1, "h-second", "b", "f")]);
        let out = render_pages(&template, &doc());
        assert!(out.find("h-first").unwrap() < out.find("h-second").unwrap());
    }

    #[test]
    fn regions_emit_header_body_footer() {
        let template = template(vec![page(1, "HEAD", "BODY", "FOOT")]);
        let out = render_pages(&template, &doc());
        let h = out.find("HEAD").unwrap();
        let b = out.find("BODY").unwrap();
        let f = out.find("FOOT").unwrap();
        assert!(h < b && b < f);
    }

    #[test]
    fn components_within_region_keep_input_order() {
        let mut p = page(1, "h", "b", "f");
        p["body"]["components"] = json!([marker("b1", "one"), marker("b2", "two"), marker("b3", "three")]);
        let out = render_pages(&template(vec![p]), &doc());
        let one = out.find("one").unwrap();
        let two = out.find("two").unwrap();
        let three = out.find("three").unwrap();
        assert!(one < two && two < three);
    }

    #[test]
    fn page_envelope_references_the_a4_master() {
        let out = render_pages(&template(vec![page(1, "h", "b", "f")]), &doc());
        assert!(out.starts_with(
            "<fo:page-sequence master-reference=\"A4\"><fo:flow flow-name=\"xsl-region-body\">"
        ));
        assert!(out.ends_with("</fo:flow></fo:page-sequence>"));
    }
}
