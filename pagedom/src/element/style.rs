use std::collections::BTreeMap;

/// Inline style declarations (`style="display: none; color: #fff"`).
///
/// Only the properties the page layer touches are given typed helpers;
/// anything else goes through [`Style::set`] / [`Style::get`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    properties: BTreeMap<String, String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(property.into(), value.into());
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.properties.remove(property)
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn display(&self) -> Option<&str> {
        self.get("display")
    }

    pub fn set_display(&mut self, value: impl Into<String>) {
        self.set("display", value);
    }

    /// An element is hidden only when `display: none` is set inline.
    pub fn is_hidden(&self) -> bool {
        self.display() == Some("none")
    }

    pub fn transform(&self) -> Option<&str> {
        self.get("transform")
    }

    pub fn color(&self) -> Option<&str> {
        self.get("color")
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
