//! Light/dark theme switch, persisted in local storage.

use std::fmt;
use std::str::FromStr;

use pagedom::{Document, DomError, Event, EventKind, Scope, Window};

/// Storage key holding the saved theme.
pub const THEME_KEY: &str = "theme";
/// Attribute on `<body>` carrying the active theme.
pub const THEME_ATTR: &str = "data-theme";
pub const TOGGLE_ID: &str = "theme-toggle";
pub const BODY_ID: &str = "body";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The toggle button offers the other theme.
    pub fn button_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark Mode",
            Theme::Dark => "☀️ Light Mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// The theme currently applied to the page. Anything but `dark` reads as light.
pub fn current(doc: &Document) -> Theme {
    match doc.attribute(BODY_ID, THEME_ATTR) {
        Some("dark") => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Apply `theme` to the body and the toggle button label.
pub fn apply(doc: &mut Document, theme: Theme) -> Result<(), DomError> {
    doc.set_attribute(BODY_ID, THEME_ATTR, theme.as_str())?;
    doc.set_text(TOGGLE_ID, theme.button_label())
}

pub fn install<S: 'static>(window: &mut Window<S>) {
    window.add_window_listener(EventKind::Load, restore::<S>);
    window.add_listener(TOGGLE_ID, EventKind::Click, toggle::<S>);
}

/// Apply the saved theme, falling back to light.
fn restore<S: 'static>(_state: &mut S, scope: &mut Scope<'_, S>, _event: &Event) {
    let saved = match scope.storage().get_item(THEME_KEY) {
        Ok(saved) => saved,
        Err(e) => {
            log::warn!("Could not read saved theme: {}", e);
            None
        }
    };

    let theme = match saved.as_deref().map(Theme::from_str) {
        Some(Ok(theme)) => theme,
        Some(Err(e)) => {
            log::debug!("Ignoring saved theme: {}", e);
            Theme::default()
        }
        None => Theme::default(),
    };

    if let Err(e) = apply(scope.document_mut(), theme) {
        log::warn!("Could not apply theme: {}", e);
    }
}

fn toggle<S: 'static>(_state: &mut S, scope: &mut Scope<'_, S>, _event: &Event) {
    let theme = current(scope.document()).toggled();

    if let Err(e) = apply(scope.document_mut(), theme) {
        log::warn!("Could not apply theme: {}", e);
        return;
    }
    if let Err(e) = scope.storage_mut().set_item(THEME_KEY, theme.as_str()) {
        log::warn!("Could not save theme: {}", e);
    }

    log::info!("Theme changed to: {}", theme);
}
