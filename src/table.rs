use crate::attributes::{AttrValue, Attributes};
use crate::component::{Component, Element, Markup};
use crate::resources::Resources;
use std::fmt;

/// Classes assigned to consecutive body rows
pub const LINE_CLASSES: [&str; 2] = ["odd", "even"];

/// Table builder with independent header and body cursors.
///
/// Rows stay pending until the next `start_*` call on the same cursor. Rendering
/// closes both pending rows on a copy, so the table can be rendered repeatedly
/// and keeps accepting cells afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    component: Component,
    header: Component,
    header_line: Option<Component>,
    body: Component,
    body_line: Option<Component>,
    line_index: usize,
}

impl Default for Table {
    fn default() -> Self {
        Table::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Table {
            component: Component::new("table"),
            header: Component::new("thead"),
            header_line: None,
            body: Component::new("tbody"),
            body_line: None,
            line_index: 0,
        }
    }

    pub fn with(mut self, attr: &str, value: impl Into<AttrValue>) -> Self {
        self.component.set(attr, value);
        self
    }

    /// Close the pending header row and open a new one
    pub fn start_header_line(&mut self) {
        if let Some(line) = self.header_line.take() {
            close_row(&mut self.header, &line);
        }
        self.header_line = Some(Component::new("tr"));
    }

    /// Add a header cell. Text is wrapped in `<th>` with `attrs`; components are
    /// added as they are.
    pub fn add_cell_on_header<M: Markup + ?Sized>(&mut self, content: &M, attrs: &Attributes) {
        if self.header_line.is_none() {
            self.start_header_line();
        }
        let cell = match content.tag_name() {
            Some(_) => content.as_markup(),
            None => Component::new("th")
                .with_attributes(attrs)
                .containing(content)
                .as_markup(),
        };
        if let Some(line) = self.header_line.as_mut() {
            line.append(&cell);
        }
        self.merge_resources(content);
    }

    /// Close the pending body row and open a new one with the next row class.
    ///
    /// Every call consumes a class slot, even when the previous row stays empty.
    pub fn start_line(&mut self) {
        if let Some(line) = self.body_line.take() {
            close_row(&mut self.body, &line);
        }
        let class = LINE_CLASSES[self.line_index % LINE_CLASSES.len()];
        self.body_line = Some(Component::new("tr").with("clazz", class));
        self.line_index += 1;
    }

    /// Add a body cell wrapped in `<td>` with `attrs`
    pub fn add_cell<M: Markup + ?Sized>(&mut self, content: &M, attrs: &Attributes) {
        if self.body_line.is_none() {
            self.start_line();
        }
        let cell = Component::new("td").with_attributes(attrs).containing(content);
        if let Some(line) = self.body_line.as_mut() {
            line.append(&cell);
        }
        self.merge_resources(content);
    }

    /// Number of body rows opened so far
    pub fn line_count(&self) -> usize {
        self.line_index
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        self.component.resources_mut()
    }

    fn merge_resources<M: Markup + ?Sized>(&mut self, content: &M) {
        if let Some(resources) = content.resources() {
            self.component.resources_mut().merge(resources);
        }
    }
}

/// Rows that never received a cell are dropped
fn close_row(section: &mut Component, line: &Component) {
    if line.inner_markup().is_empty() {
        tracing::trace!("dropping empty table row");
        return;
    }
    section.append(line);
}

fn finalized(section: &Component, pending: Option<&Component>) -> String {
    match pending {
        Some(line) => {
            let mut section = section.clone();
            close_row(&mut section, line);
            section.as_markup()
        }
        None => section.as_markup(),
    }
}

impl Markup for Table {
    fn as_markup(&self) -> String {
        let mut table = self.component.clone();
        table.append(&finalized(&self.header, self.header_line.as_ref()));
        table.append(&finalized(&self.body, self.body_line.as_ref()));
        tracing::debug!(rows = self.line_index, "rendered table");
        table.as_markup()
    }

    fn tag_name(&self) -> Option<&str> {
        self.component.tag_name()
    }

    fn resources(&self) -> Option<&Resources> {
        self.component.resources()
    }
}

impl Element for Table {
    fn get(&self, attr: &str) -> Option<AttrValue> {
        self.component.get(attr)
    }

    fn set(&mut self, attr: &str, value: impl Into<AttrValue>) {
        self.component.set(attr, value);
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_markup())
    }
}
