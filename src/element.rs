//! Owned element tree for tooltip construction.
//!
//! Blocks and tooltips are plain tree nodes; the host page owns the real
//! markup, this crate only builds subtrees and renders them on demand.

/// Tags rendered without a closing tag.
const VOID_TAGS: &[&str] = &["hr", "br"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: String,
    /// Space-joined class string, stored verbatim.
    pub classes: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: String::new(),
            classes: String::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(tag: &str, id: &str) -> Self {
        let mut element = Self::new(tag);
        element.id = id.to_string();
        element
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Render this subtree as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(&self.tag);
        if !self.id.is_empty() {
            out.push_str(" id=\"");
            out.push_str(&escape(&self.id));
            out.push('"');
        }
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape(&self.classes));
            out.push('"');
        }
        if VOID_TAGS.contains(&self.tag.as_str()) {
            out.push_str("/>");
            return out;
        }
        out.push('>');
        out.push_str(&escape(&self.text));
        for child in &self.children {
            out.push_str(&child.to_html());
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        out
    }
}

/// Build one element with the given classes and text content.
///
/// Classes are set verbatim; children must be attached by the caller.
pub fn build_element(tag: &str, classes: &str, content: &str) -> Element {
    let mut element = Element::new(tag);
    element.classes = classes.to_string();
    element.text = content.to_string();
    element
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
