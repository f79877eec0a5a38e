use crate::attributes::AttrValue;
use crate::component::{Component, Element, Markup};
use crate::resources::Resources;
use std::fmt;

/// Values that check the box when assigned to `value`
const CHECKED_VALUES: [&str; 3] = ["True", "true", "on"];

/// `<input type="checkbox">` whose `value` attribute is a boolean view over
/// `checked`.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkbox {
    component: Component,
}

impl Checkbox {
    pub fn new(name: impl Into<AttrValue>) -> Self {
        Checkbox {
            component: Component::self_closing("input")
                .with("type", "checkbox")
                .with("name", name),
        }
    }

    pub fn with(mut self, attr: &str, value: impl Into<AttrValue>) -> Self {
        self.set(attr, value);
        self
    }

    pub fn is_checked(&self) -> bool {
        self.component
            .get("checked")
            .is_some_and(|checked| checked.is_truthy())
    }
}

fn is_checked_value(value: &AttrValue) -> bool {
    match value {
        AttrValue::Bool(b) => *b,
        AttrValue::Text(s) => CHECKED_VALUES.contains(&s.as_str()),
        _ => false,
    }
}

impl Markup for Checkbox {
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

impl Element for Checkbox {
    fn get(&self, attr: &str) -> Option<AttrValue> {
        match attr {
            "value" => Some(AttrValue::Bool(self.is_checked())),
            _ => self.component.get(attr),
        }
    }

    /// Unchecking stores `checked=""` so the attribute is dropped on render.
    fn set(&mut self, attr: &str, value: impl Into<AttrValue>) {
        if attr != "value" {
            self.component.set(attr, value);
            return;
        }
        let checked = if is_checked_value(&value.into()) { "checked" } else { "" };
        self.component.set("checked", checked);
    }
}

impl fmt::Display for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_markup())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_required() {
        assert_eq!(
            Checkbox::new("x").as_markup(),
            r#"<input type="checkbox" name="x"/>"#
        );
    }

    #[test]
    fn test_setting_value_checks_the_box() {
        let mut checkbox = Checkbox::new("x");
        checkbox.set("value", true);
        assert_eq!(
            checkbox.as_markup(),
            r#"<input type="checkbox" name="x" checked="checked"/>"#
        );
    }

    #[test]
    fn test_get_value() {
        let mut checkbox = Checkbox::new("x");
        assert_eq!(checkbox.get("value"), Some(AttrValue::Bool(false)));
        checkbox.set("value", true);
        assert_eq!(checkbox.get("value"), Some(AttrValue::Bool(true)));
    }

    #[test]
    fn test_truthy_strings() {
        for value in ["True", "true", "on"] {
            let mut checkbox = Checkbox::new("x");
            checkbox.set("value", value);
            assert!(checkbox.is_checked(), "{} should check the box", value);
        }
        for value in ["TRUE", "yes", "1", ""] {
            let mut checkbox = Checkbox::new("x");
            checkbox.set("value", value);
            assert!(!checkbox.is_checked(), "{} should not check the box", value);
        }
    }

    #[test]
    fn test_unchecking_drops_the_attribute() {
        let mut checkbox = Checkbox::new("x");
        checkbox.set("value", "on");
        checkbox.set("value", false);
        assert_eq!(checkbox.get("checked"), Some(AttrValue::from("")));
        assert_eq!(checkbox.as_markup(), r#"<input type="checkbox" name="x"/>"#);
    }

    #[test]
    fn test_other_attributes_pass_through() {
        let checkbox = Checkbox::new("x").with("id", "agree");
        assert_eq!(checkbox.get("id"), Some(AttrValue::from("agree")));
        assert_eq!(checkbox.get("missing"), None);
    }
}
