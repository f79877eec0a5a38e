//! Leaf widgets: fixed tag plus the attributes each one requires.
//!
//! Extra attributes are added with [`Component::with`].

use crate::attributes::AttrValue;
use crate::component::{Component, Markup};

/// `<img src=.../>`
pub fn image(src: impl Into<AttrValue>) -> Component {
    Component::self_closing("img").with("src", src)
}

/// `<a href=...>content</a>`
pub fn link<M: Markup + ?Sized>(href: impl Into<AttrValue>, content: &M) -> Component {
    Component::new("a").with("href", href).containing(content)
}

/// `<p>content</p>`
pub fn paragraph<M: Markup + ?Sized>(content: &M) -> Component {
    Component::new("p").containing(content)
}

/// Inline run of text, `<span>content</span>`
pub fn chunk<M: Markup + ?Sized>(content: &M) -> Component {
    Component::new("span").containing(content)
}

/// Empty `<div></div>`
pub fn panel() -> Component {
    Component::new("div")
}

/// `<button id=...></button>`
pub fn button(id: impl Into<AttrValue>) -> Component {
    Component::new("button").with("id", id)
}

/// `<br/>`
pub fn line_break() -> Component {
    Component::self_closing("br")
}
