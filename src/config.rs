use crate::error::{HtmlError, HtmlResult};
use crate::page::{DocType, Page};
use crate::validator;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_lang() -> String {
    "en".to_string()
}

/// Page skeleton described in YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// One of `transitional401`, `strict401`, `html5`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctype: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub css: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub js: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready: Option<String>,
}

impl PageConfig {
    /// Parse and validate a YAML page description
    pub fn from_yaml(yaml: &str) -> HtmlResult<Self> {
        let config: PageConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> HtmlResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn validate(&self) -> HtmlResult<()> {
        if self.title.trim().is_empty() {
            return Err(HtmlError::MissingTitle);
        }
        self.doc_type()?;
        validator::validate_lang(&self.lang)
    }

    pub fn doc_type(&self) -> HtmlResult<DocType> {
        self.doctype
            .as_deref()
            .map_or(Ok(DocType::default()), |s| s.parse())
    }

    /// Build an empty page carrying this configuration's head and resources
    pub fn to_page(&self) -> HtmlResult<Page> {
        self.validate()?;
        let mut page = Page::new(&self.title, &self.description, &self.keywords)
            .with_doc_type(self.doc_type()?)
            .with_lang(&self.lang);
        if let Some(favicon) = &self.favicon {
            page = page.with_favicon(favicon);
        }

        let resources = page.head_mut().resources_mut();
        for href in &self.css {
            resources.add_css_library(href);
        }
        for src in &self.js {
            resources.add_javascript_library(src);
        }
        if let Some(script) = &self.script {
            resources.add_javascript_code(script);
        }
        if let Some(ready) = &self.ready {
            resources.add_ready_code(ready);
        }
        tracing::debug!(title = %self.title, "built page from configuration");
        Ok(page)
    }
}
