use crate::attributes::{AttrValue, Attributes};
use crate::component::{Component, Element, Markup};
use crate::resources::Resources;
use crate::tag::render_open_close;
use std::fmt;

const TEXT_BOX_MAX_LENGTH: i64 = 100;
const TEXT_AREA_MAX_LENGTH: i64 = 500;

/// HTTP method a form submits with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    #[default]
    Post,
}

impl FormMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
        }
    }
}

/// `<form action=... method=...>`
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    component: Component,
}

impl Form {
    /// Form posting to `action`
    pub fn new(action: impl Into<AttrValue>) -> Self {
        Form {
            component: Component::new("form")
                .with("action", action)
                .with("method", FormMethod::Post.as_str()),
        }
    }

    pub fn with_method(mut self, method: FormMethod) -> Self {
        self.component.set("method", method.as_str());
        self
    }

    pub fn with(mut self, attr: &str, value: impl Into<AttrValue>) -> Self {
        self.component.set(attr, value);
        self
    }

    pub fn append<M: Markup + ?Sized>(&mut self, child: &M) {
        self.component.append(child);
    }

    /// Append `component` inside the standard label/field layout
    pub fn add_component_with_label<M: Markup + ?Sized>(&mut self, label: &str, component: &M) {
        let label_markup = render_open_close(
            "div",
            &render_open_close("span", label, &Attributes::new()),
            &Attributes::from([("clazz", "form-label")]),
        );
        let field = Component::new("div")
            .with("clazz", "form-field")
            .containing(component);

        let row = Component::new("div")
            .with("clazz", "form-label-field")
            .containing(&label_markup)
            .containing(&field);
        self.component.append(&row);
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        self.component.resources_mut()
    }
}

impl Markup for Form {
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

impl Element for Form {
    fn get(&self, attr: &str) -> Option<AttrValue> {
        self.component.get(attr)
    }

    fn set(&mut self, attr: &str, value: impl Into<AttrValue>) {
        self.component.set(attr, value);
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_markup())
    }
}

/// Single-line text input, `maxlength` defaults to 100
pub fn text_box(name: impl Into<AttrValue>, value: impl Into<AttrValue>) -> Component {
    Component::self_closing("input")
        .with("type", "text")
        .with("name", name)
        .with("value", value)
        .with("maxlength", TEXT_BOX_MAX_LENGTH)
}

/// Multi-line text input, `maxlength` defaults to 500
pub fn text_area(name: impl Into<AttrValue>, value: impl Into<AttrValue>) -> Component {
    Component::new("textarea")
        .with("name", name)
        .with("value", value)
        .with("maxlength", TEXT_AREA_MAX_LENGTH)
}

/// File input
pub fn upload_box(name: impl Into<AttrValue>, value: impl Into<AttrValue>) -> Component {
    Component::self_closing("input")
        .with("type", "file")
        .with("name", name)
        .with("value", value)
}

pub fn submit_button(id: impl Into<AttrValue>, value: impl Into<AttrValue>) -> Component {
    Component::self_closing("input")
        .with("type", "submit")
        .with("id", id)
        .with("value", value)
}

pub fn hidden_field(name: impl Into<AttrValue>, value: impl Into<AttrValue>) -> Component {
    Component::self_closing("input")
        .with("type", "hidden")
        .with("name", name)
        .with("value", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_is_required_and_method_defaults_to_post() {
        assert_eq!(Form::new("x").as_markup(), r#"<form action="x" method="post"></form>"#);
    }

    #[test]
    fn test_method_can_be_get() {
        let form = Form::new("x").with_method(FormMethod::Get);
        assert_eq!(form.as_markup(), r#"<form action="x" method="get"></form>"#);
    }

    #[test]
    fn test_add_component_with_label() {
        let mut form = Form::new("/save");
        form.add_component_with_label("Name", &text_box("name", "bob"));
        assert_eq!(
            form.as_markup(),
            concat!(
                r#"<form action="/save" method="post">"#,
                r#"<div class="form-label-field">"#,
                r#"<div class="form-label"><span>Name</span></div>"#,
                r#"<div class="form-field"><input type="text" name="name" value="bob" maxlength="100"/></div>"#,
                r#"</div></form>"#
            )
        );
    }

    #[test]
    fn test_text_box() {
        assert_eq!(
            text_box("x", "y").as_markup(),
            r#"<input type="text" name="x" value="y" maxlength="100"/>"#
        );
    }

    #[test]
    fn test_text_area() {
        assert_eq!(
            text_area("x", "y").as_markup(),
            r#"<textarea name="x" value="y" maxlength="500"></textarea>"#
        );
    }

    #[test]
    fn test_submit_button() {
        assert_eq!(
            submit_button("x", "y").as_markup(),
            r#"<input type="submit" id="x" value="y"/>"#
        );
    }

    #[test]
    fn test_upload_box_and_hidden_field() {
        assert_eq!(
            upload_box("f", "").as_markup(),
            r#"<input type="file" name="f"/>"#
        );
        assert_eq!(
            hidden_field("token", "abc").as_markup(),
            r#"<input type="hidden" name="token" value="abc"/>"#
        );
    }
}
