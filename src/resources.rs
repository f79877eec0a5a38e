
/// Auxiliary resources a component needs in the page head.
///
/// Bags travel up the tree by merging: appending a child component merges the
/// child's bag into the parent's, so a stylesheet declared deep inside the
/// body surfaces in the single page-level head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resources {
    pub css: Vec<String>,
    pub js: Vec<String>,
    pub script: String,
    pub ready: String,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stylesheet href. Repeated hrefs are kept once.
    pub fn add_css_library(&mut self, href: impl Into<String>) {
        push_unique(&mut self.css, href.into());
    }

    /// Register a script src. Repeated srcs are kept once.
    pub fn add_javascript_library(&mut self, src: impl Into<String>) {
        push_unique(&mut self.js, src.into());
    }

    pub fn add_javascript_code(&mut self, code: &str) {
        self.script.push_str(code);
    }

    /// Code run once the document is ready.
    pub fn add_ready_code(&mut self, code: &str) {
        self.ready.push_str(code);
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty() && self.js.is_empty() && self.script.is_empty() && self.ready.is_empty()
    }

    /// Merge `other` into `self`, leaving `other` untouched.
    ///
    /// Library lists keep first-seen order without duplicates; code fragments
    /// are concatenated.
    pub fn merge(&mut self, other: &Resources) {
        if other.is_empty() {
            return;
        }
        for href in &other.css {
            push_unique(&mut self.css, href.clone());
        }
        for src in &other.js {
            push_unique(&mut self.js, src.clone());
        }
        self.script.push_str(&other.script);
        self.ready.push_str(&other.ready);
        tracing::trace!(
            css = self.css.len(),
            js = self.js.len(),
            "merged resource bag"
        );
    }
}

fn push_unique(items: &mut Vec<String>, item: String) {
    if items.contains(&item) {
        tracing::trace!(%item, "skipping duplicate library");
        return;
    }
    items.push(item);
}
