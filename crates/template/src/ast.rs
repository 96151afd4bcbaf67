//! The template tree as it is parsed from the caller's JSON by Serde.
//!
//! Pages are unordered on input (`page_number` is a sort key, not an index);
//! components within a region are ordered, and that order is rendering order.

use crate::color::Color;
use crate::error::TemplateError;
use serde::{Deserialize, Serialize};

// --- Template structure ---

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub schema_version: String,
    pub tenant_id: String,
    pub template_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TemplateStatus,
    #[serde(default = "default_version")]
    pub version: u32,
    pub pages: Vec<Page>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub updated_by: String,
}

fn default_version() -> u32 {
    1
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStatus {
    #[default]
    Draft,
    Published,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub id: String,
    /// Sort key for output order. Need not be contiguous or match input
    /// order; ties keep input order.
    pub page_number: u32,
    #[serde(default)]
    pub size: PageSize,
    pub header: Region,
    pub body: Region,
    pub footer: Region,
}

/// Layout presets a page may declare. Currently a single preset; the
/// emission layer keeps one matching page master per variant.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    A4,
}

/// An ordered sequence of components. Insertion order is semantically
/// significant: it is the rendering order within the region.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Region {
    #[serde(default)]
    pub components: Vec<Component>,
}

// --- Components ---

/// One positioned content element. The `type` tag closes the set: an
/// unrecognized tag is a deserialization error, not an empty fragment.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "type")]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Text(TextComponent),
    Image(ImageComponent),
    Divider(DividerComponent),
    Table(TableComponent),
    Totals(TotalsComponent),
    Payment(PaymentComponent),
    Callout(CalloutComponent),
}

impl Component {
    pub fn id(&self) -> &str {
        match self {
            Component::Text(c) => &c.id,
            Component::Image(c) => &c.id,
            Component::Divider(c) => &c.id,
            Component::Table(c) => &c.id,
            Component::Totals(c) => &c.id,
            Component::Payment(c) => &c.id,
            Component::Callout(c) => &c.id,
        }
    }

    pub fn position(&self) -> &Position {
        match self {
            Component::Text(c) => &c.position,
            Component::Image(c) => &c.position,
            Component::Divider(c) => &c.position,
            Component::Table(c) => &c.position,
            Component::Totals(c) => &c.position,
            Component::Payment(c) => &c.position,
            Component::Callout(c) => &c.position,
        }
    }
}

/// Absolute placement in typographic points, used verbatim. No clamping or
/// overlap checks; layout is the downstream renderer's concern.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// How to pull one scalar value out of the data document.
///
/// `path` must be an absolute location expression; a relative path is a
/// resolution failure at evaluation time, not a construction error.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub path: String,
    #[serde(default)]
    pub fallback: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub align: Align,
}

fn default_font_family() -> String {
    "Helvetica".to_string()
}

fn default_font_size() -> f64 {
    10.0
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            font_weight: FontWeight::default(),
            color: Color::default(),
            align: Align::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

// --- Component payloads ---

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent {
    pub id: String,
    pub position: Position,
    /// Inline literal; wins over `binding` when both are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<Binding>,
    pub style: TextStyle,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ImageComponent {
    pub id: String,
    pub position: Position,
    /// Logical asset reference, resolved by the downstream renderer's asset
    /// scheme. Never a filesystem path.
    pub asset_id: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DividerComponent {
    pub id: String,
    pub position: Position,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default)]
    pub color: Color,
}

fn default_stroke_width() -> f64 {
    1.0
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TableComponent {
    pub id: String,
    pub position: Position,
    /// Presence gate for the single data row: the row is emitted only when
    /// this binding resolves to a non-empty string.
    pub row_binding: Binding,
    pub columns: Vec<TableColumn>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub id: String,
    pub header: String,
    pub width: f64,
    pub binding: Binding,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TotalsComponent {
    pub id: String,
    pub position: Position,
    #[serde(default = "default_totals_label")]
    pub label: String,
    pub amount_binding: Binding,
}

fn default_totals_label() -> String {
    "Total".to_string()
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PaymentComponent {
    pub id: String,
    pub position: Position,
    pub instruction: String,
    pub account_binding: Binding,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CalloutComponent {
    pub id: String,
    pub position: Position,
    pub title: String,
    pub body: String,
}

// --- Validation ---

impl Template {
    /// Structural checks beyond what deserialization enforces, mirroring the
    /// authoring schema: a template has pages, a text component has a content
    /// source, a table has columns.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.pages.is_empty() {
            return Err(TemplateError::NoPages);
        }
        for page in &self.pages {
            for region in [&page.header, &page.body, &page.footer] {
                for component in &region.components {
                    match component {
                        Component::Text(text)
                            if text.content.is_none() && text.binding.is_none() =>
                        {
                            return Err(TemplateError::TextWithoutSource(text.id.clone()));
                        }
                        Component::Table(table) if table.columns.is_empty() => {
                            return Err(TemplateError::TableWithoutColumns(table.id.clone()));
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }
}
