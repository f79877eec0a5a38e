use crate::attributes::{AttrValue, Attributes};
use crate::component::{Component, Element, Markup};
use crate::resources::Resources;
use crate::tag::render_open_close;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub label: String,
    /// Stored as given; falsy values render without a `value` attribute
    pub value: AttrValue,
    pub selected: bool,
}

impl SelectOption {
    fn as_markup(&self) -> String {
        let mut attrs = Attributes::new();
        attrs.set("value", self.value.clone());
        if self.selected {
            attrs.set("selected", "selected");
        }
        render_open_close("option", &self.label, &attrs)
    }
}

/// `<select>` whose `value` attribute is derived from its selected options.
///
/// Selecting is additive: assigning `value` never unselects an option.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    component: Component,
    options: Vec<SelectOption>,
}

impl Select {
    pub fn new(name: impl Into<AttrValue>, multiple: bool) -> Self {
        Select {
            component: Component::new("select")
                .with("name", name)
                .with("multiple", if multiple { "multiple" } else { "" }),
            options: Vec::new(),
        }
    }

    pub fn single(name: impl Into<AttrValue>) -> Self {
        Select::new(name, false)
    }

    pub fn multiple(name: impl Into<AttrValue>) -> Self {
        Select::new(name, true)
    }

    pub fn with(mut self, attr: &str, value: impl Into<AttrValue>) -> Self {
        self.set(attr, value);
        self
    }

    pub fn is_multiple(&self) -> bool {
        self.component
            .get("multiple")
            .is_some_and(|m| m.as_str() == Some("multiple"))
    }

    pub fn add_option(&mut self, label: impl Into<String>, value: impl Into<AttrValue>, selected: bool) {
        self.options.push(SelectOption {
            label: label.into(),
            value: value.into(),
            selected,
        });
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Options are matched on their rendered text, so `2` selects an option
    /// added with `"2"` and the other way round.
    fn select_values(&mut self, value: &AttrValue) {
        match value {
            // each listed value selects the first option carrying it
            AttrValue::List(values) => {
                for v in values {
                    if let Some(option) = self.options.iter_mut().find(|o| o.value.to_string() == *v) {
                        option.selected = true;
                    }
                }
            }
            scalar => {
                let wanted = scalar.to_string();
                for option in self.options.iter_mut().filter(|o| o.value.to_string() == wanted) {
                    option.selected = true;
                }
            }
        }
    }

    fn selected_values(&self) -> impl Iterator<Item = &AttrValue> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| &o.value)
    }
}

impl Markup for Select {
    fn as_markup(&self) -> String {
        let mut select = self.component.clone();
        for option in &self.options {
            select.append(&option.as_markup());
        }
        select.as_markup()
    }

    fn tag_name(&self) -> Option<&str> {
        self.component.tag_name()
    }

    fn resources(&self) -> Option<&Resources> {
        self.component.resources()
    }
}

impl Element for Select {
    /// `value` is the list of selected values for multi-selects, or the first
    /// selected value as it was stored otherwise.
    fn get(&self, attr: &str) -> Option<AttrValue> {
        if attr != "value" {
            return self.component.get(attr);
        }
        if self.is_multiple() {
            Some(AttrValue::List(
                self.selected_values().map(AttrValue::to_string).collect(),
            ))
        } else {
            self.selected_values().next().cloned()
        }
    }

    fn set(&mut self, attr: &str, value: impl Into<AttrValue>) {
        if attr == "value" {
            self.select_values(&value.into());
        } else {
            self.component.set(attr, value);
        }
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_markup())
    }
}
