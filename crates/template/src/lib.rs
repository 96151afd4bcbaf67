//! Declarative document template model.
//!
//! A template is a tree of pages, regions, and absolutely positioned
//! components, deserialized from caller-supplied JSON. This crate defines the
//! **input** representation only: values are constructed once per compile
//! call, validated, and then read immutably by the compiler. There is no
//! cross-call caching or shared mutable state.

pub mod ast;
pub mod color;
pub mod error;

pub use ast::{
    Align, Binding, CalloutComponent, Component, DividerComponent, FontWeight, ImageComponent,
    Page, PageSize, PaymentComponent, Position, Region, TableColumn, TableComponent, Template,
    TemplateStatus, TextComponent, TextStyle, TotalsComponent,
};
pub use color::Color;
pub use error::TemplateError;
