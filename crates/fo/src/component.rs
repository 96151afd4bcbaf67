//! Per-variant component rendering.
//!
//! Each variant produces a content fragment; `render_component` wraps it in
//! exactly one absolute-position container with the component's position
//! copied verbatim. Dispatch is an exhaustive match, so a new variant is a
//! compile-time obligation, not a silently-ignored default case.

use crate::binding::resolve;
use crate::escape::escape_xml;
use platen_template::{
    CalloutComponent, Component, DividerComponent, ImageComponent, PaymentComponent,
    TableComponent, TextComponent, TotalsComponent,
};
use platen_xmlpath::XmlDocument;

pub fn render_component(doc: &XmlDocument, component: &Component) -> String {
    let content = match component {
        Component::Text(c) => text_fragment(doc, c),
        Component::Image(c) => image_fragment(c),
        Component::Divider(c) => divider_fragment(c),
        Component::Table(c) => table_fragment(doc, c),
        Component::Totals(c) => totals_fragment(doc, c),
        Component::Payment(c) => payment_fragment(doc, c),
        Component::Callout(c) => callout_fragment(c),
    };
    let position = component.position();
    format!(
        "<fo:block-container absolute-position=\"absolute\" left=\"{}pt\" top=\"{}pt\" width=\"{}pt\" height=\"{}pt\">{}</fo:block-container>",
        position.x, position.y, position.width, position.height, content
    )
}

fn text_fragment(doc: &XmlDocument, component: &TextComponent) -> String {
    let content = match (&component.content, &component.binding) {
        (Some(literal), _) => literal.clone(),
        (None, Some(binding)) => resolve(doc, binding),
        // Rejected by Template::validate, but the match stays total.
        (None, None) => String::new(),
    };
    let style = &component.style;
    format!(
        "<fo:block font-family=\"{}\" font-size=\"{}pt\" font-weight=\"{}\" color=\"{}\" text-align=\"{}\">{}</fo:block>",
        escape_xml(&style.font_family),
        style.font_size,
        style.font_weight.as_str(),
        style.color,
        style.align.as_str(),
        escape_xml(&content)
    )
}

fn image_fragment(component: &ImageComponent) -> String {
    format!(
        "<fo:external-graphic src=\"url('asset:{}')\" content-width=\"{}pt\" content-height=\"{}pt\"/>",
        escape_xml(&component.asset_id),
        component.position.width,
        component.position.height
    )
}

fn divider_fragment(component: &DividerComponent) -> String {
    format!(
        "<fo:block border-bottom=\"{}pt solid {}\"/>",
        component.stroke_width, component.color
    )
}

fn table_fragment(doc: &XmlDocument, component: &TableComponent) -> String {
    let mut out =
        String::from("<fo:table table-layout=\"fixed\" width=\"100%\"><fo:table-body><fo:table-row>");
    for column in &component.columns {
        out.push_str(&format!(
            "<fo:table-cell padding=\"2pt\"><fo:block font-weight=\"bold\">{}</fo:block></fo:table-cell>",
            escape_xml(&column.header)
        ));
    }
    out.push_str("</fo:table-row>");

    // Presence gate, not a repeat count: zero or one data row, keyed on the
    // resolved row binding.
    if !resolve(doc, &component.row_binding).is_empty() {
        out.push_str("<fo:table-row>");
        for column in &component.columns {
            let value = resolve(doc, &column.binding);
            out.push_str(&format!(
                "<fo:table-cell padding=\"2pt\"><fo:block>{}</fo:block></fo:table-cell>",
                escape_xml(&value)
            ));
        }
        out.push_str("</fo:table-row>");
    }

    out.push_str("</fo:table-body></fo:table>");
    out
}

fn totals_fragment(doc: &XmlDocument, component: &TotalsComponent) -> String {
    let amount = resolve(doc, &component.amount_binding);
    format!(
        "<fo:block font-weight=\"bold\">{}: {}</fo:block>",
        escape_xml(&component.label),
        escape_xml(&amount)
    )
}

fn payment_fragment(doc: &XmlDocument, component: &PaymentComponent) -> String {
    let account = resolve(doc, &component.account_binding);
    format!(
        "<fo:block>{} {}</fo:block>",
        escape_xml(&component.instruction),
        escape_xml(&account)
    )
}

fn callout_fragment(component: &CalloutComponent) -> String {
    format!(
        "<fo:block border=\"1pt solid #000000\" padding=\"4pt\"><fo:block font-weight=\"bold\">{}</fo:block><fo:block>{}</fo:block></fo:block>",
        escape_xml(&component.title),
        escape_xml(&component.body)
    )
}
