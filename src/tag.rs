//! Pure tag rendering.
//!
//! No escaping is performed: attribute values and inner markup are written
//! verbatim.

use crate::attributes::{translate_attribute_name, Attributes};

/// Render `<tag ATTRS>inner</tag>`
pub fn render_open_close(tag: &str, inner: &str, attrs: &Attributes) -> String {
    let mut out = String::with_capacity(tag.len() * 2 + inner.len() + 5);
    out.push('<');
    out.push_str(tag);
    write_attributes(&mut out, attrs);
    out.push('>');
    out.push_str(inner);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
    out
}

/// Render `<tag ATTRS/>`
pub fn render_self_closing(tag: &str, attrs: &Attributes) -> String {
    let mut out = String::with_capacity(tag.len() + 3);
    out.push('<');
    out.push_str(tag);
    write_attributes(&mut out, attrs);
    out.push_str("/>");
    out
}

fn write_attributes(out: &mut String, attrs: &Attributes) {
    for (key, value) in attrs.iter() {
        if !value.is_truthy() {
            continue;
        }
        out.push(' ');
        out.push_str(translate_attribute_name(key));
        out.push_str("=\"");
        out.push_str(&value.to_string());
        out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttrValue;

    #[test]
    fn test_tag_without_content_and_attributes() {
        assert_eq!(render_open_close("x", "", &Attributes::new()), "<x></x>");
        assert_eq!(render_open_close("x", "y", &Attributes::new()), "<x>y</x>");
    }

    #[test]
    fn test_tag_with_attributes() {
        let attrs = Attributes::from([("a", "b"), ("c", "d")]);
        assert_eq!(render_open_close("x", "", &attrs), r#"<x a="b" c="d"></x>"#);
        assert_eq!(render_open_close("x", "y", &attrs), r#"<x a="b" c="d">y</x>"#);
    }

    #[test]
    fn test_clazz_is_rendered_as_class() {
        let attrs = Attributes::from([("clazz", "b")]);
        assert_eq!(render_open_close("x", "y", &attrs), r#"<x class="b">y</x>"#);
    }

    #[test]
    fn test_falsy_attributes_are_omitted() {
        let attrs = Attributes::from([("a", AttrValue::Null)]);
        assert_eq!(render_open_close("x", "", &attrs), "<x></x>");

        let mut attrs = Attributes::new();
        attrs.set("checked", "");
        attrs.set("size", 0);
        attrs.set("disabled", false);
        assert_eq!(render_self_closing("input", &attrs), "<input/>");
    }

    #[test]
    fn test_self_closing() {
        let attrs = Attributes::from([("src", "/x.jpg")]);
        assert_eq!(render_self_closing("img", &attrs), r#"<img src="/x.jpg"/>"#);
        assert_eq!(render_self_closing("br", &Attributes::new()), "<br/>");
    }
}
