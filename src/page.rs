use crate::attributes::{AttrValue, Attributes};
use crate::component::{Component, Element, Markup};
use crate::error::HtmlError;
use crate::resources::Resources;
use crate::tag::{render_open_close, render_self_closing};
use std::fmt;
use std::str::FromStr;

pub const TRANSITIONAL_401: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">"#;
pub const STRICT_401: &str =
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#;
pub const HTML5: &str = "<!DOCTYPE html>";

const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
const CONTENT_TYPE: &str = "text/html;charset=UTF-8";

/// Document type declaration written before `<html>`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocType {
    #[default]
    Transitional401,
    Strict401,
    Html5,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transitional401 => TRANSITIONAL_401,
            Self::Strict401 => STRICT_401,
            Self::Html5 => HTML5,
        }
    }
}

impl FromStr for DocType {
    type Err = HtmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transitional401" => Ok(Self::Transitional401),
            "strict401" => Ok(Self::Strict401),
            "html5" => Ok(Self::Html5),
            other => Err(HtmlError::InvalidDocType {
                value: other.to_string(),
            }),
        }
    }
}

/// `<head>` section: metadata plus every resource collected from the page
#[derive(Debug, Clone, PartialEq)]
pub struct Head {
    component: Component,
    title: String,
    description: String,
    keywords: String,
    favicon: Option<String>,
}

impl Head {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        keywords: impl Into<String>,
        favicon: Option<String>,
    ) -> Self {
        Head {
            component: Component::new("head"),
            title: title.into(),
            description: description.into(),
            keywords: keywords.into(),
            favicon,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        self.component.resources_mut()
    }

    /// Render the head listing `resources` instead of the head's own bag
    fn render_with(&self, resources: &Resources) -> String {
        let mut inner = render_open_close("title", &self.title, &Attributes::new());
        inner.push_str(&render_self_closing(
            "meta",
            &Attributes::from([("name", "description"), ("content", self.description.as_str())]),
        ));
        inner.push_str(&render_self_closing(
            "meta",
            &Attributes::from([("name", "keywords"), ("content", self.keywords.as_str())]),
        ));
        inner.push_str(&render_self_closing(
            "meta",
            &Attributes::from([("http_equiv", "Content-Type"), ("content", CONTENT_TYPE)]),
        ));
        if let Some(favicon) = self.favicon.as_deref().filter(|f| !f.is_empty()) {
            inner.push_str(&render_self_closing(
                "link",
                &Attributes::from([("rel", "shortcut"), ("href", favicon)]),
            ));
        }
        for href in &resources.css {
            inner.push_str(&render_self_closing(
                "link",
                &Attributes::from([("type", "text/css"), ("rel", "stylesheet"), ("href", href.as_str())]),
            ));
        }
        for src in &resources.js {
            inner.push_str(&render_open_close(
                "script",
                "",
                &Attributes::from([("type", "text/javascript"), ("src", src.as_str())]),
            ));
        }

        let mut script = resources.script.clone();
        if !resources.ready.is_empty() {
            script.push_str(&format!("$(document).ready(function() {{ {} }});", resources.ready));
        }
        inner.push_str(&render_open_close(
            "script",
            &script,
            &Attributes::from([("type", "text/javascript")]),
        ));

        let mut head = self.component.clone();
        head.append(&inner);
        head.as_markup()
    }
}

impl Markup for Head {
    fn as_markup(&self) -> String {
        self.render_with(self.component.resource_bag())
    }

    fn tag_name(&self) -> Option<&str> {
        self.component.tag_name()
    }

    fn resources(&self) -> Option<&Resources> {
        self.component.resources()
    }
}

/// `<body>` section
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    component: Component,
}

impl Default for Body {
    fn default() -> Self {
        Body::new()
    }
}

impl Body {
    pub fn new() -> Self {
        Body {
            component: Component::new("body"),
        }
    }

    pub fn append<M: Markup + ?Sized>(&mut self, child: &M) {
        self.component.append(child);
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        self.component.resources_mut()
    }
}

impl Markup for Body {
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

impl Element for Body {
    fn get(&self, attr: &str) -> Option<AttrValue> {
        self.component.get(attr)
    }

    fn set(&mut self, attr: &str, value: impl Into<AttrValue>) {
        self.component.set(attr, value);
    }
}

/// A whole document: doctype, `<html>`, one head and one body.
///
/// Resources collected by the body (and registered on the page itself) are
/// listed in the head when the page is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    component: Component,
    doc_type: DocType,
    head: Head,
    body: Body,
}

impl Page {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        Page {
            component: html_component("en"),
            doc_type: DocType::default(),
            head: Head::new(title, description, keywords, None),
            body: Body::new(),
        }
    }

    pub fn with_favicon(mut self, favicon: impl Into<String>) -> Self {
        self.head.favicon = Some(favicon.into());
        self
    }

    pub fn with_doc_type(mut self, doc_type: DocType) -> Self {
        self.doc_type = doc_type;
        self
    }

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.component.set("xml_lang", lang);
        self.component.set("lang", lang);
        self
    }

    pub fn doc_type(&self) -> DocType {
        self.doc_type
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn head_mut(&mut self) -> &mut Head {
        &mut self.head
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn resources_mut(&mut self) -> &mut Resources {
        self.component.resources_mut()
    }

    /// Head, body and page bags merged in that order
    pub fn collected_resources(&self) -> Resources {
        let mut resources = Resources::new();
        for bag in [
            self.head.resources(),
            self.body.resources(),
            self.component.resources(),
        ]
        .into_iter()
        .flatten()
        {
            resources.merge(bag);
        }
        resources
    }
}

fn html_component(lang: &str) -> Component {
    Component::new("html")
        .with("xmlns", XHTML_NAMESPACE)
        .with("xml_lang", lang)
        .with("lang", lang)
}

impl Markup for Page {
    fn as_markup(&self) -> String {
        let resources = self.collected_resources();
        tracing::debug!(
            title = %self.head.title,
            css = resources.css.len(),
            js = resources.js.len(),
            "rendering page"
        );

        let mut html = self.component.clone();
        html.append(&self.head.render_with(&resources));
        html.append(&self.body.as_markup());

        let mut out = String::from(self.doc_type.as_str());
        out.push_str(&html.as_markup());
        out
    }

    fn tag_name(&self) -> Option<&str> {
        self.component.tag_name()
    }

    fn resources(&self) -> Option<&Resources> {
        self.component.resources()
    }
}

impl Element for Page {
    fn get(&self, attr: &str) -> Option<AttrValue> {
        self.component.get(attr)
    }

    fn set(&mut self, attr: &str, value: impl Into<AttrValue>) {
        self.component.set(attr, value);
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_markup())
    }
}
