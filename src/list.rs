use crate::attributes::{AttrValue, Attributes};
use crate::component::{Component, Element, Markup};
use crate::resources::Resources;
use crate::tag::render_open_close;
use std::fmt;

const LIST_ITEM_TAG: &str = "li";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `<ul>`
    Unordered,
    /// `<ol>`
    Ordered,
}

impl ListKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Unordered or ordered list. Appended children are wrapped in `<li>` unless
/// they already are list items.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    kind: ListKind,
    component: Component,
}

impl List {
    pub fn new(kind: ListKind) -> Self {
        List {
            kind,
            component: Component::new(kind.tag()),
        }
    }

    pub fn unordered() -> Self {
        List::new(ListKind::Unordered)
    }

    pub fn ordered() -> Self {
        List::new(ListKind::Ordered)
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn with(mut self, attr: &str, value: impl Into<AttrValue>) -> Self {
        self.component.set(attr, value);
        self
    }

    pub fn append<M: Markup + ?Sized>(&mut self, child: &M) {
        if child.tag_name() == Some(LIST_ITEM_TAG) {
            self.component.append(child);
            return;
        }

        let item = render_open_close(LIST_ITEM_TAG, &child.as_markup(), &Attributes::new());
        self.component.append(&item);
        if let Some(resources) = child.resources() {
            self.component.resources_mut().merge(resources);
        }
    }
}

impl Markup for List {
    fn as_markup(&self) -> String {
        self.component.as_markup()
    }

    fn tag_name(&self) -> Option<&str> {
        self.component.tag_name()
    }

    fn resources(&self) -> Option<&Resources> {
        self.component.resources()
    }
}

impl Element for List {
    fn get(&self, attr: &str) -> Option<AttrValue> {
        self.component.get(attr)
    }

    fn set(&mut self, attr: &str, value: impl Into<AttrValue>) {
        self.component.set(attr, value);
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_markup())
    }
}
