//! Numeric counter with increase, decrease and reset buttons.

use std::time::Duration;

use pagedom::{DomError, EventKind, Scope, Window};

use crate::config::CounterConfig;

pub const VALUE_ID: &str = "counter-value";
pub const DECREASE_ID: &str = "decrease-btn";
pub const RESET_ID: &str = "reset-btn";
pub const INCREASE_ID: &str = "increase-btn";

pub const POSITIVE_COLOR: &str = "#27ae60";
pub const NEGATIVE_COLOR: &str = "#e74c3c";
pub const ZERO_COLOR: &str = "#4a90e2";

const POP_TRANSFORM: &str = "scale(1.2)";
const REST_TRANSFORM: &str = "scale(1)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    count: i64,
    pop_duration: Duration,
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(&CounterConfig::default())
    }
}

impl Counter {
    pub fn new(config: &CounterConfig) -> Self {
        Self {
            count: 0,
            pop_duration: config.pop_duration,
        }
    }

    pub fn value(&self) -> i64 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    pub fn decrement(&mut self) {
        self.count -= 1;
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Green above zero, red below, blue at zero.
    pub fn color(&self) -> &'static str {
        match self.count {
            n if n > 0 => POSITIVE_COLOR,
            n if n < 0 => NEGATIVE_COLOR,
            _ => ZERO_COLOR,
        }
    }
}

pub fn install<S: AsMut<Counter> + 'static>(window: &mut Window<S>) {
    window.add_window_listener(EventKind::Load, |state, scope, _| {
        update(state.as_mut(), scope);
    });

    window.add_listener(DECREASE_ID, EventKind::Click, |state, scope, _| {
        let counter = state.as_mut();
        counter.decrement();
        log::info!("Counter decreased to: {}", counter.value());
        update(counter, scope);
    });

    window.add_listener(RESET_ID, EventKind::Click, |state, scope, _| {
        let counter = state.as_mut();
        counter.reset();
        log::info!("Counter reset to: 0");
        update(counter, scope);
    });

    window.add_listener(INCREASE_ID, EventKind::Click, |state, scope, _| {
        let counter = state.as_mut();
        counter.increment();
        log::info!("Counter increased to: {}", counter.value());
        update(counter, scope);
    });
}

fn update<S: 'static>(counter: &Counter, scope: &mut Scope<'_, S>) {
    if let Err(e) = render(counter, scope) {
        log::warn!("Could not render counter: {}", e);
    }
}

/// Write the value and colour, and pop the number for a moment.
fn render<S: 'static>(counter: &Counter, scope: &mut Scope<'_, S>) -> Result<(), DomError> {
    let doc = scope.document_mut();
    doc.set_text(VALUE_ID, counter.value().to_string())?;
    doc.set_style(VALUE_ID, "transform", POP_TRANSFORM)?;
    doc.set_style(VALUE_ID, "color", counter.color())?;

    scope.set_timeout(counter.pop_duration, |_: &mut S, scope: &mut Scope<'_, S>| {
        if let Err(e) = scope.document_mut().set_style(VALUE_ID, "transform", REST_TRANSFORM) {
            log::warn!("Could not settle counter: {}", e);
        }
    });
    Ok(())
}
