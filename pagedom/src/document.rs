//! Document tree with id-based lookups.

use crate::element::{collect_with_class, find_element, find_element_mut, find_parent, Element, Tag};
use crate::error::DomError;

/// The page's element tree, rooted at `<body>`.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// Like [`Document::get`] but reports a missing element as an error.
    pub fn element(&self, id: &str) -> Result<&Element, DomError> {
        self.get(id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    pub fn element_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        self.get_mut(id)
            .ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    /// IDs of all elements carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<String> {
        let mut out = Vec::new();
        collect_with_class(&self.root, class, &mut out);
        out
    }

    /// IDs of elements carrying `class` inside the subtree rooted at `scope_id`.
    pub fn query_class_within(&self, scope_id: &str, class: &str) -> Result<Vec<String>, DomError> {
        let scope = self.element(scope_id)?;
        let mut out = Vec::new();
        collect_with_class(scope, class, &mut out);
        Ok(out)
    }

    pub fn parent_id(&self, id: &str) -> Option<&str> {
        find_parent(&self.root, id).map(|p| p.id.as_str())
    }

    /// Walk up from `id` to the nearest ancestor with the given tag.
    pub fn closest(&self, id: &str, tag: Tag) -> Option<&str> {
        let mut current = self.parent_id(id)?;
        loop {
            let el = self.get(current)?;
            if el.tag == tag {
                return Some(el.id.as_str());
            }
            current = self.parent_id(current)?;
        }
    }

    pub fn text(&self, id: &str) -> Result<&str, DomError> {
        Ok(self.element(id)?.text.as_str())
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), DomError> {
        self.element_mut(id)?.text = text.into();
        Ok(())
    }

    /// Current value of an input or textarea.
    pub fn value(&self, id: &str) -> Result<&str, DomError> {
        let el = self.element(id)?;
        if !el.is_form_control() {
            return Err(DomError::NotFormControl(id.to_string()));
        }
        Ok(el.value.as_str())
    }

    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> Result<(), DomError> {
        let el = self.element_mut(id)?;
        if !el.is_form_control() {
            return Err(DomError::NotFormControl(id.to_string()));
        }
        el.value = value.into();
        Ok(())
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(self.element_mut(id)?.add_class(class))
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(self.element_mut(id)?.remove_class(class))
    }

    pub fn attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.attribute(name))
    }

    pub fn set_attribute(
        &mut self,
        id: &str,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.element_mut(id)?.set_attribute(name, value);
        Ok(())
    }

    pub fn set_style(
        &mut self,
        id: &str,
        property: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        self.element_mut(id)?.style.set(property, value);
        Ok(())
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.style.get(property))
    }

    pub fn is_hidden(&self, id: &str) -> bool {
        self.get(id).is_some_and(|el| el.style.is_hidden())
    }

    /// Clear the value of every form control inside `form_id`.
    pub fn reset_form(&mut self, form_id: &str) -> Result<(), DomError> {
        fn clear_values(el: &mut Element) {
            if el.is_form_control() {
                el.value.clear();
            }
            for child in &mut el.children {
                clear_values(child);
            }
        }

        clear_values(self.element_mut(form_id)?);
        Ok(())
    }
}
