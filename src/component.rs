use crate::attributes::{AttrValue, Attributes};
use crate::error::HtmlResult;
use crate::resources::Resources;
use crate::tag::{render_open_close, render_self_closing};
use crate::validator;
use std::fmt;

/// Anything that can be appended to a component: raw markup strings and
/// rendered components.
pub trait Markup {
    /// Serialize the current state. Calling this twice without mutation in
    /// between yields identical output.
    fn as_markup(&self) -> String;

    /// Tag of the element this markup represents, `None` for raw text.
    fn tag_name(&self) -> Option<&str> {
        None
    }

    /// Resources to merge into the parent on append, `None` for raw text.
    fn resources(&self) -> Option<&Resources> {
        None
    }
}

impl Markup for str {
    fn as_markup(&self) -> String {
        self.to_string()
    }
}

impl Markup for String {
    fn as_markup(&self) -> String {
        self.clone()
    }
}

/// Attribute access for components.
///
/// Widgets with derived attributes (checkbox, select) intercept the `value`
/// key and forward everything else to the stored attribute mapping.
pub trait Element: Markup {
    /// Attribute value, or `None` when it was never set.
    fn get(&self, attr: &str) -> Option<AttrValue>;

    fn set(&mut self, attr: &str, value: impl Into<AttrValue>);
}

/// How a component closes its tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// `<tag>inner</tag>`
    OpenClose,
    /// `<tag/>`, inner content is never rendered
    SelfClosing,
}

/// A single HTML element: tag name, flattened inner markup, attributes and
/// the resource bag collected from its descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    tag_name: String,
    inner_markup: String,
    attributes: Attributes,
    resources: Resources,
    style: TagStyle,
}

impl Component {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Component {
            tag_name: tag_name.into(),
            inner_markup: String::new(),
            attributes: Attributes::new(),
            resources: Resources::new(),
            style: TagStyle::OpenClose,
        }
    }

    /// Create an element rendered without closing tag or content
    pub fn self_closing(tag_name: impl Into<String>) -> Self {
        Component {
            style: TagStyle::SelfClosing,
            ..Component::new(tag_name)
        }
    }

    /// Like [`Component::new`], rejecting malformed tag names
    pub fn try_new(tag_name: &str) -> HtmlResult<Self> {
        validator::validate_tag_name(tag_name)?;
        Ok(Component::new(tag_name))
    }

    /// Builder form of [`Element::set`]
    pub fn with(mut self, attr: &str, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(attr, value);
        self
    }

    /// Like [`Component::with`], rejecting malformed attribute names
    pub fn try_with(self, attr: &str, value: impl Into<AttrValue>) -> HtmlResult<Self> {
        validator::validate_attribute_name(attr)?;
        Ok(self.with(attr, value))
    }

    /// Copy every entry of `attrs` into this component, overwriting existing keys
    pub fn with_attributes(mut self, attrs: &Attributes) -> Self {
        for (key, value) in attrs.iter() {
            self.attributes.set(key, value.clone());
        }
        self
    }

    /// Builder form of [`Component::append`]
    pub fn containing<M: Markup + ?Sized>(mut self, child: &M) -> Self {
        self.append(child);
        self
    }

    /// Append a child's markup and merge its resources into this component.
    pub fn append<M: Markup + ?Sized>(&mut self, child: &M) {
        if let Some(resources) = child.resources() {
            self.resources.merge(resources);
        }
        match self.style {
            TagStyle::OpenClose => self.inner_markup.push_str(&child.as_markup()),
            TagStyle::SelfClosing => {
                tracing::debug!(tag = %self.tag_name, "ignoring content appended to self-closing element");
            }
        }
    }

    pub fn inner_markup(&self) -> &str {
        &self.inner_markup
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Resources collected so far, including those merged from children
    pub fn resource_bag(&self) -> &Resources {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        &mut self.resources
    }

    pub fn style(&self) -> TagStyle {
        self.style
    }
}

impl Markup for Component {
    fn as_markup(&self) -> String {
        match self.style {
            TagStyle::OpenClose => render_open_close(&self.tag_name, &self.inner_markup, &self.attributes),
            TagStyle::SelfClosing => render_self_closing(&self.tag_name, &self.attributes),
        }
    }

    fn tag_name(&self) -> Option<&str> {
        Some(&self.tag_name)
    }

    fn resources(&self) -> Option<&Resources> {
        Some(self.resource_bag())
    }
}

impl Element for Component {
    fn get(&self, attr: &str) -> Option<AttrValue> {
        self.attributes.get(attr).cloned()
    }

    fn set(&mut self, attr: &str, value: impl Into<AttrValue>) {
        self.attributes.set(attr, value);
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_markup())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HtmlError;

    #[test]
    fn test_empty_component() {
        assert_eq!(Component::new("x").as_markup(), "<x></x>");
    }

    #[test]
    fn test_component_with_content_and_attributes() {
        let component = Component::new("x").with("a", "b").with("c", "d").containing("y");
        assert_eq!(component.as_markup(), r#"<x a="b" c="d">y</x>"#);
    }

    #[test]
    fn test_get_and_set() {
        let mut component = Component::new("x").with("a", "b");
        assert_eq!(component.get("a"), Some(AttrValue::from("b")));
        assert_eq!(component.get("missing"), None);

        component.set("a", "c");
        assert_eq!(component.get("a"), Some(AttrValue::from("c")));
    }

    #[test]
    fn test_append_merges_resources_without_touching_child() {
        let mut child = Component::new("span").containing("z");
        child.resources_mut().add_css_library("/child.css");

        let mut parent = Component::new("div");
        parent.append("a");
        parent.append(&child);

        assert_eq!(parent.as_markup(), "<div>a<span>z</span></div>");
        assert_eq!(parent.resources().map(|r| r.css.clone()), Some(vec!["/child.css".to_string()]));
        assert_eq!(child.as_markup(), "<span>z</span>");
    }

    #[test]
    fn test_resource_bag_starts_empty_and_collects() {
        let mut component = Component::new("div");
        assert!(component.resource_bag().is_empty());
        component.resources_mut().add_javascript_library("/app.js");
        assert_eq!(component.resource_bag().js, vec!["/app.js"]);
    }

    #[test]
    fn test_self_closing_ignores_content() {
        let mut image = Component::self_closing("img").with("src", "y");
        image.append("text");
        assert_eq!(image.as_markup(), r#"<img src="y"/>"#);
    }

    #[test]
    fn test_as_markup_is_idempotent() {
        let component = Component::new("p").with("clazz", "lead").containing("hi");
        assert_eq!(component.as_markup(), component.as_markup());
        assert_eq!(component.to_string(), r#"<p class="lead">hi</p>"#);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Component::new("x").with("a", "b");
        let mut copy = original.clone();
        copy.set("a", "c");
        assert_eq!(original.get("a"), Some(AttrValue::from("b")));
    }

    #[test]
    fn test_try_new_rejects_bad_tags() {
        assert!(Component::try_new("div").is_ok());
        assert!(matches!(
            Component::try_new("not a tag"),
            Err(HtmlError::InvalidTag { .. })
        ));
    }

    #[test]
    fn test_try_with_rejects_bad_attribute_names() {
        let link = Component::new("a").try_with("href", "/x").unwrap();
        assert_eq!(link.as_markup(), r#"<a href="/x"></a>"#);
        assert!(matches!(
            Component::new("a").try_with("on click", "x"),
            Err(HtmlError::InvalidAttribute { .. })
        ));
    }
}
