//! # HTML Objects
//!
//! Build HTML by composing typed components instead of concatenating strings.
//!
//! ## Features
//! - Components for paragraphs, links, images, lists, tables and forms
//! - Form widgets with derived values (checkbox, single/multi select)
//! - Resource propagation: stylesheets and scripts declared anywhere in the
//!   tree are listed once in the page head
//! - Page skeletons loadable from YAML
//!
//! Content and attribute values are written verbatim; nothing is escaped.
//!
//! ## Example
//! ```ignore
//! use html_objects::{Element, Markup, Page, Table, widgets::paragraph};
//!
//! let mut table = Table::new();
//! table.add_cell_on_header("Name", &Default::default());
//! table.add_cell("Ada", &Default::default());
//!
//! let mut page = Page::new("Team", "Our team", "team, people");
//! page.body_mut().append(&paragraph("Members"));
//! page.body_mut().append(&table);
//!
//! let html = page.as_markup();
//! ```

pub mod attributes;
pub mod checkbox;
pub mod component;
pub mod config;
pub mod error;
pub mod form;
pub mod google;
pub mod list;
pub mod page;
pub mod resources;
pub mod select;
pub mod table;
pub mod tag;
pub mod validator;
pub mod widgets;

// --- Core types ---
pub use attributes::{translate_attribute_name, AttrValue, Attributes};
pub use component::{Component, Element, Markup, TagStyle};
pub use error::{HtmlError, HtmlResult};
pub use resources::Resources;
pub use tag::{render_open_close, render_self_closing};

// --- Widgets ---
pub use checkbox::Checkbox;
pub use form::{Form, FormMethod};
pub use list::{List, ListKind};
pub use select::{Select, SelectOption};
pub use table::Table;

// --- Page assembly ---
pub use config::PageConfig;
pub use page::{Body, DocType, Head, Page};

/// Load a YAML page configuration and render its skeleton page
pub fn render_page_config(yaml: &str) -> HtmlResult<String> {
    let page = PageConfig::from_yaml(yaml)?.to_page()?;
    Ok(page.as_markup())
}
