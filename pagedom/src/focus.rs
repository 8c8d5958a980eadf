use crate::event::Event;

/// Tracks which element is currently focused.
///
/// Focus changes are returned as the `Blur`/`Focus` events they imply so the
/// caller can queue them for dispatch.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Move focus to `id`.
    /// Returns the events implied by the change: a `Blur` for the previously
    /// focused element (if any) followed by a `Focus` for `id`. Empty if
    /// `id` was already focused.
    pub fn focus(&mut self, id: &str) -> Vec<Event> {
        if self.focused.as_deref() == Some(id) {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.focused.replace(id.to_string()) {
            events.push(Event::Blur { target: previous });
        }
        events.push(Event::Focus {
            target: id.to_string(),
        });
        events
    }

    /// Clear focus.
    /// Returns the `Blur` event for the element that lost focus, if any.
    pub fn blur(&mut self) -> Option<Event> {
        self.focused.take().map(|target| Event::Blur { target })
    }
}
