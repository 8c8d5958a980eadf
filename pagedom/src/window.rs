//! Event dispatch environment.
//!
//! A [`Window`] owns the document, focus, storage, timers and the listener
//! registry. Listeners are plain functions receiving the caller's state `S`
//! and a [`Scope`] through which they touch the environment.
//!
//! Dispatch is run-to-completion: events raised while a listener runs (the
//! blur caused by a programmatic focus, for instance) are queued and
//! delivered after the current listener returns.

use std::collections::VecDeque;
use std::time::Duration;

use crate::document::Document;
use crate::element::Tag;
use crate::error::DomError;
use crate::event::{Event, EventKind};
use crate::focus::FocusState;
use crate::storage::Storage;
use crate::timer::{TimerId, TimerQueue};

type Listener<S> = Box<dyn Fn(&mut S, &mut Scope<'_, S>, &Event)>;

/// Handle returned by listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Registration<S> {
    id: ListenerId,
    /// `None` for window-level listeners (`Load`).
    target: Option<String>,
    kind: EventKind,
    handler: Listener<S>,
}

/// What a listener or timer callback can reach while it runs.
pub struct Scope<'a, S> {
    document: &'a mut Document,
    focus: &'a mut FocusState,
    storage: &'a mut dyn Storage,
    timers: &'a mut TimerQueue<S>,
    queue: &'a mut VecDeque<Event>,
    now: Duration,
    default_prevented: bool,
}

impl<'a, S: 'static> Scope<'a, S> {
    pub fn document(&self) -> &Document {
        &*self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut *self.document
    }

    pub fn storage(&self) -> &dyn Storage {
        &*self.storage
    }

    pub fn storage_mut(&mut self) -> &mut dyn Storage {
        &mut *self.storage
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Move focus to `id`. The resulting `Blur`/`Focus` events are queued.
    pub fn focus(&mut self, id: &str) {
        let events = self.focus.focus(id);
        self.queue.extend(events);
    }

    pub fn blur(&mut self) {
        if let Some(event) = self.focus.blur() {
            self.queue.push_back(event);
        }
    }

    /// Schedule a one-shot callback `delay` from now.
    pub fn set_timeout(
        &mut self,
        delay: Duration,
        callback: impl FnOnce(&mut S, &mut Scope<'_, S>) + 'static,
    ) -> TimerId {
        self.timers.schedule(self.now, delay, Box::new(callback))
    }

    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.timers.cancel(id)
    }

    /// Suppress the default action of the event being dispatched.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Queue an event for delivery after the current listener returns.
    pub fn queue_event(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Virtual time elapsed since the window was created.
    pub fn now(&self) -> Duration {
        self.now
    }
}

/// Single-threaded page environment.
pub struct Window<S> {
    document: Document,
    focus: FocusState,
    storage: Box<dyn Storage>,
    timers: TimerQueue<S>,
    queue: VecDeque<Event>,
    listeners: Vec<Registration<S>>,
    next_listener: u64,
    clock: Duration,
}

impl<S> std::fmt::Debug for Window<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("focused", &self.focus.focused())
            .field("listeners", &self.listeners.len())
            .field("timers", &self.timers)
            .field("clock", &self.clock)
            .finish()
    }
}

impl<S: 'static> Window<S> {
    pub fn new(document: Document, storage: impl Storage + 'static) -> Self {
        Self {
            document,
            focus: FocusState::new(),
            storage: Box::new(storage),
            timers: TimerQueue::new(),
            queue: VecDeque::new(),
            listeners: Vec::new(),
            next_listener: 0,
            clock: Duration::ZERO,
        }
    }

    // =========================================================================
    // Listener registry
    // =========================================================================

    /// Register a listener for `kind` events targeted at element `target`.
    pub fn add_listener(
        &mut self,
        target: &str,
        kind: EventKind,
        handler: impl Fn(&mut S, &mut Scope<'_, S>, &Event) + 'static,
    ) -> ListenerId {
        self.register(Some(target.to_string()), kind, Box::new(handler))
    }

    /// Register a window-level listener (events with no target, e.g. `Load`).
    pub fn add_window_listener(
        &mut self,
        kind: EventKind,
        handler: impl Fn(&mut S, &mut Scope<'_, S>, &Event) + 'static,
    ) -> ListenerId {
        self.register(None, kind, Box::new(handler))
    }

    fn register(
        &mut self,
        target: Option<String>,
        kind: EventKind,
        handler: Listener<S>,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        log::trace!("[window] listener {:?} on {:?} for {:?}", id, target, kind);
        self.listeners.push(Registration {
            id,
            target,
            kind,
            handler,
        });
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|r| r.id != id);
        self.listeners.len() != before
    }

    /// Number of listeners registered for `kind` on `target`.
    pub fn listener_count(&self, target: Option<&str>, kind: EventKind) -> usize {
        self.listeners
            .iter()
            .filter(|r| r.kind == kind && r.target.as_deref() == target)
            .count()
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Deliver `event` to its listeners, then everything they queued.
    /// Returns false if a listener called `prevent_default`.
    pub fn dispatch(&mut self, state: &mut S, event: Event) -> bool {
        log::trace!("[window] dispatch {:?}", event);
        let prevented = self.run_listeners(state, &event);
        self.drain(state);
        !prevented
    }

    fn drain(&mut self, state: &mut S) {
        while let Some(event) = self.queue.pop_front() {
            log::trace!("[window] dispatch queued {:?}", event);
            self.run_listeners(state, &event);
        }
    }

    fn run_listeners(&mut self, state: &mut S, event: &Event) -> bool {
        let kind = event.kind();
        let target = event.target();
        let mut scope = Scope {
            document: &mut self.document,
            focus: &mut self.focus,
            storage: &mut *self.storage,
            timers: &mut self.timers,
            queue: &mut self.queue,
            now: self.clock,
            default_prevented: false,
        };

        for registration in &self.listeners {
            if registration.kind == kind && registration.target.as_deref() == target {
                (registration.handler)(state, &mut scope, event);
            }
        }

        scope.default_prevented
    }

    /// Move the clock forward by `by`, firing due timers in deadline order.
    /// Timers scheduled by a callback fire too if they come due within the window.
    pub fn advance(&mut self, state: &mut S, by: Duration) {
        let until = self.clock + by;
        while let Some((deadline, callback)) = self.timers.pop_due(until) {
            self.clock = self.clock.max(deadline);
            let mut scope = Scope {
                document: &mut self.document,
                focus: &mut self.focus,
                storage: &mut *self.storage,
                timers: &mut self.timers,
                queue: &mut self.queue,
                now: self.clock,
                default_prevented: false,
            };
            callback(state, &mut scope);
            self.drain(state);
        }
        self.clock = until;
    }

    // =========================================================================
    // User actions
    // =========================================================================

    /// Focus an element as the user would (click or tab), firing blur/focus.
    pub fn focus(&mut self, state: &mut S, id: &str) -> Result<(), DomError> {
        self.document.element(id)?;
        let events = self.focus.focus(id);
        self.queue.extend(events);
        self.drain(state);
        Ok(())
    }

    /// Drop focus from whatever holds it.
    pub fn blur(&mut self, state: &mut S) {
        if let Some(event) = self.focus.blur() {
            self.queue.push_back(event);
            self.drain(state);
        }
    }

    /// Replace the value of a form control as if the user typed it.
    /// Focuses the control first, then fires `Input` with the new value.
    pub fn type_text(&mut self, state: &mut S, id: &str, text: &str) -> Result<(), DomError> {
        self.document.value(id)?;
        self.focus(state, id)?;
        self.document.set_value(id, text)?;
        self.dispatch(
            state,
            Event::Input {
                target: id.to_string(),
                value: text.to_string(),
            },
        );
        Ok(())
    }

    /// Click an element. Focusable elements take focus first; an unprevented
    /// click on a submit button submits its enclosing form.
    pub fn click(&mut self, state: &mut S, id: &str) -> Result<(), DomError> {
        let el = self.document.element(id)?;
        let focusable = el.is_focusable();
        let submits = el.is_submit_button();

        if focusable {
            self.focus(state, id)?;
        }

        let proceed = self.dispatch(
            state,
            Event::Click {
                target: id.to_string(),
            },
        );

        if proceed && submits {
            if let Some(form) = self.document.closest(id, Tag::Form).map(str::to_string) {
                self.submit(state, &form)?;
            }
        }
        Ok(())
    }

    /// Fire `Submit` on a form. Returns false if a listener prevented the default.
    pub fn submit(&mut self, state: &mut S, form_id: &str) -> Result<bool, DomError> {
        self.document.element(form_id)?;
        let proceed = self.dispatch(
            state,
            Event::Submit {
                target: form_id.to_string(),
            },
        );
        if proceed {
            log::debug!("[window] form {} submitted with no handler to intercept it", form_id);
        }
        Ok(proceed)
    }

    pub fn hover(&mut self, state: &mut S, id: &str) -> Result<(), DomError> {
        self.document.element(id)?;
        self.dispatch(state, Event::MouseEnter { target: id.to_string() });
        Ok(())
    }

    pub fn leave(&mut self, state: &mut S, id: &str) -> Result<(), DomError> {
        self.document.element(id)?;
        self.dispatch(state, Event::MouseLeave { target: id.to_string() });
        Ok(())
    }

    pub fn touch_start(&mut self, state: &mut S, id: &str) -> Result<(), DomError> {
        self.document.element(id)?;
        self.dispatch(state, Event::TouchStart { target: id.to_string() });
        Ok(())
    }

    pub fn touch_end(&mut self, state: &mut S, id: &str) -> Result<(), DomError> {
        self.document.element(id)?;
        self.dispatch(state, Event::TouchEnd { target: id.to_string() });
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    pub fn storage(&self) -> &dyn Storage {
        &*self.storage
    }

    pub fn storage_mut(&mut self) -> &mut dyn Storage {
        &mut *self.storage
    }

    pub fn now(&self) -> Duration {
        self.clock
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }
}
