/// Events delivered to listeners, with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Document finished loading. Not targeted at any element.
    Load,
    /// Primary click on an element
    Click { target: String },
    /// Value of a form control changed (fired after the value is updated)
    Input { target: String, value: String },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
    /// A form is being submitted
    Submit { target: String },
    /// Pointer entered an element
    MouseEnter { target: String },
    /// Pointer left an element
    MouseLeave { target: String },
    /// Touch started on an element
    TouchStart { target: String },
    /// Touch ended on an element
    TouchEnd { target: String },
}

/// Event discriminant used to key listener registrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Load,
    Click,
    Input,
    Focus,
    Blur,
    Submit,
    MouseEnter,
    MouseLeave,
    TouchStart,
    TouchEnd,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Load => EventKind::Load,
            Event::Click { .. } => EventKind::Click,
            Event::Input { .. } => EventKind::Input,
            Event::Focus { .. } => EventKind::Focus,
            Event::Blur { .. } => EventKind::Blur,
            Event::Submit { .. } => EventKind::Submit,
            Event::MouseEnter { .. } => EventKind::MouseEnter,
            Event::MouseLeave { .. } => EventKind::MouseLeave,
            Event::TouchStart { .. } => EventKind::TouchStart,
            Event::TouchEnd { .. } => EventKind::TouchEnd,
        }
    }

    /// Target element ID. `None` for window-level events.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Load => None,
            Event::Click { target }
            | Event::Input { target, .. }
            | Event::Focus { target }
            | Event::Blur { target }
            | Event::Submit { target }
            | Event::MouseEnter { target }
            | Event::MouseLeave { target }
            | Event::TouchStart { target }
            | Event::TouchEnd { target } => Some(target.as_str()),
        }
    }
}
