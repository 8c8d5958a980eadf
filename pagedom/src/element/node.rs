use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Element kind. Determines focusability and whether the element holds a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Body,
    Header,
    Section,
    Div,
    Span,
    Paragraph,
    Heading,
    Form,
    Label,
    Input,
    TextArea,
    Button,
}

impl Tag {
    /// Inputs and textareas hold a user-editable value.
    pub fn is_form_control(self) -> bool {
        matches!(self, Tag::Input | Tag::TextArea)
    }

    pub fn is_focusable(self) -> bool {
        matches!(self, Tag::Input | Tag::TextArea | Tag::Button)
    }

    /// Prefix of generated ids, e.g. `div-7`.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Tag::Body => "body",
            Tag::Header => "header",
            Tag::Section => "section",
            Tag::Div => "div",
            Tag::Span => "span",
            Tag::Paragraph => "p",
            Tag::Heading => "h",
            Tag::Form => "form",
            Tag::Label => "label",
            Tag::Input => "input",
            Tag::TextArea => "textarea",
            Tag::Button => "button",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Presentation
    pub classes: Vec<String>,
    pub style: Style,

    // Content
    pub text: String,
    /// Current value of a form control. Empty for every other tag.
    pub value: String,
    pub children: Vec<Element>,

    // Arbitrary attributes (`data-tab`, `type`, `data-theme`, ...)
    pub attributes: HashMap<String, String>,
}

impl Element {
    /// Create an element with a generated id.
    pub fn new(tag: Tag) -> Self {
        Self::with_id(tag, generate_id(tag.id_prefix()))
    }

    fn with_id(tag: Tag, id: String) -> Self {
        Self {
            id,
            tag,
            classes: Vec::new(),
            style: Style::default(),
            text: String::new(),
            value: String::new(),
            children: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// The document root. Always has the id `body`.
    pub fn body() -> Self {
        Self::with_id(Tag::Body, "body".to_string())
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn section() -> Self {
        Self::new(Tag::Section)
    }

    pub fn header() -> Self {
        Self::new(Tag::Header)
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new(Tag::Span).text_content(text)
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(Tag::Paragraph).text_content(text)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(Tag::Heading).text_content(text)
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::new(Tag::Label).text_content(text)
    }

    pub fn button(text: impl Into<String>) -> Self {
        Self::new(Tag::Button).text_content(text)
    }

    pub fn form() -> Self {
        Self::new(Tag::Form)
    }

    /// Create a single-line text input.
    pub fn input() -> Self {
        Self::new(Tag::Input)
    }

    pub fn textarea() -> Self {
        Self::new(Tag::TextArea)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Presentation
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Start hidden (`display: none`).
    pub fn hidden(mut self) -> Self {
        self.style.set_display("none");
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    // Content
    pub fn text_content(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    // Class list
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns false if it was already present.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Remove a class. Returns false if it was not present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Toggle a class, returning whether it is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn is_form_control(&self) -> bool {
        self.tag.is_form_control()
    }

    pub fn is_focusable(&self) -> bool {
        self.tag.is_focusable()
    }

    /// Buttons submit their enclosing form unless `type` says otherwise.
    pub fn is_submit_button(&self) -> bool {
        self.tag == Tag::Button && self.attribute("type").unwrap_or("submit") == "submit"
    }
}
