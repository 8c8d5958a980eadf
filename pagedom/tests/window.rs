use std::time::Duration;

use pagedom::{
    Document, Element, Event, EventKind, FocusState, MemoryStorage, Storage, TimerQueue, Window,
};

type Cx<'a> = pagedom::Scope<'a, Log>;

/// Test state: a log of what listeners observed.
#[derive(Default)]
struct Log {
    seen: Vec<String>,
}

fn form_window() -> Window<Log> {
    let doc = Document::new(
        Element::body().child(
            Element::form()
                .id("form")
                .child(Element::input().id("a"))
                .child(Element::input().id("b"))
                .child(Element::button("Go").id("go")),
        ),
    );
    Window::new(doc, MemoryStorage::new())
}

fn record(kind: &'static str) -> impl Fn(&mut Log, &mut Cx<'_>, &Event) {
    move |log: &mut Log, _scope: &mut Cx<'_>, event: &Event| {
        log.seen
            .push(format!("{kind}:{}", event.target().unwrap_or("window")));
    }
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_state_events() {
    let mut focus = FocusState::new();
    assert_eq!(focus.focused(), None);

    assert_eq!(
        focus.focus("a"),
        vec![Event::Focus {
            target: "a".to_string()
        }]
    );
    assert!(focus.focus("a").is_empty());
    assert_eq!(
        focus.focus("b"),
        vec![
            Event::Blur {
                target: "a".to_string()
            },
            Event::Focus {
                target: "b".to_string()
            },
        ]
    );
    assert_eq!(
        focus.blur(),
        Some(Event::Blur {
            target: "b".to_string()
        })
    );
    assert_eq!(focus.blur(), None);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_listeners_only_see_their_target_and_kind() {
    let mut window = form_window();
    let mut log = Log::default();
    window.add_listener("a", EventKind::Click, record("click"));
    window.add_listener("b", EventKind::Input, record("input"));

    window.click(&mut log, "a").unwrap();
    window.click(&mut log, "b").unwrap();
    assert_eq!(log.seen, vec!["click:a"]);
}

#[test]
fn test_type_text_focuses_then_fires_input() {
    let mut window = form_window();
    let mut log = Log::default();
    window.add_listener("a", EventKind::Focus, record("focus"));
    window.add_listener("a", EventKind::Blur, record("blur"));
    window.add_listener("a", EventKind::Input, |log: &mut Log, scope: &mut Cx<'_>, event: &Event| {
        // The value is already updated when the listener runs.
        let value = scope.document().value("a").unwrap_or_default().to_string();
        if let Event::Input { value: payload, .. } = event {
            assert_eq!(payload, &value);
        }
        log.seen.push(format!("input:{value}"));
    });

    window.type_text(&mut log, "a", "hi").unwrap();
    window.focus(&mut log, "b").unwrap();
    assert_eq!(log.seen, vec!["focus:a", "input:hi", "blur:a"]);
    assert_eq!(window.focused(), Some("b"));
}

#[test]
fn test_type_text_rejects_non_controls() {
    let mut window = form_window();
    let mut log = Log::default();
    assert!(window.type_text(&mut log, "go", "x").is_err());
    assert!(window.type_text(&mut log, "nope", "x").is_err());
}

#[test]
fn test_focus_from_listener_is_queued_until_listener_returns() {
    let mut window = form_window();
    let mut log = Log::default();
    window.add_listener("form", EventKind::Submit, |log: &mut Log, scope: &mut Cx<'_>, _: &Event| {
        scope.prevent_default();
        scope.focus("a");
        log.seen.push("submit-end".to_string());
    });
    window.add_listener("a", EventKind::Focus, record("focus"));
    window.add_listener("go", EventKind::Blur, record("blur"));

    window.click(&mut log, "go").unwrap();
    assert_eq!(log.seen, vec!["submit-end", "blur:go", "focus:a"]);
    assert_eq!(window.focused(), Some("a"));
}

#[test]
fn test_click_on_submit_button_submits_form() {
    let mut window = form_window();
    let mut log = Log::default();
    window.add_listener("form", EventKind::Submit, record("submit"));

    window.click(&mut log, "go").unwrap();
    assert_eq!(log.seen, vec!["submit:form"]);
    assert_eq!(window.focused(), Some("go"));
}

#[test]
fn test_prevented_click_does_not_submit() {
    let mut window = form_window();
    let mut log = Log::default();
    window.add_listener("go", EventKind::Click, |_: &mut Log, scope: &mut Cx<'_>, _: &Event| {
        scope.prevent_default();
    });
    window.add_listener("form", EventKind::Submit, record("submit"));

    window.click(&mut log, "go").unwrap();
    assert!(log.seen.is_empty());
}

#[test]
fn test_submit_reports_prevent_default() {
    let mut window = form_window();
    let mut log = Log::default();
    assert!(window.submit(&mut log, "form").unwrap());

    window.add_listener("form", EventKind::Submit, |_: &mut Log, scope: &mut Cx<'_>, _: &Event| {
        scope.prevent_default();
    });
    assert!(!window.submit(&mut log, "form").unwrap());
}

#[test]
fn test_window_listeners_and_removal() {
    let mut window = form_window();
    let mut log = Log::default();
    let id = window.add_window_listener(EventKind::Load, record("load"));
    assert_eq!(window.listener_count(None, EventKind::Load), 1);

    window.dispatch(&mut log, Event::Load);
    assert!(window.remove_listener(id));
    assert!(!window.remove_listener(id));
    window.dispatch(&mut log, Event::Load);

    assert_eq!(log.seen, vec!["load:window"]);
}

// ============================================================================
// Timers
// ============================================================================

fn noop(_: &mut Log, _: &mut Cx<'_>) {}

#[test]
fn test_timer_queue_orders_by_deadline_then_schedule() {
    let mut queue: TimerQueue<Log> = TimerQueue::new();
    queue.schedule(Duration::ZERO, Duration::from_millis(20), Box::new(noop));
    let cancelled = queue.schedule(Duration::ZERO, Duration::from_millis(5), Box::new(noop));
    queue.schedule(Duration::ZERO, Duration::from_millis(10), Box::new(noop));
    queue.schedule(Duration::ZERO, Duration::from_millis(10), Box::new(noop));

    assert!(queue.cancel(cancelled));
    assert!(!queue.cancel(cancelled));
    assert_eq!(queue.next_deadline(), Some(Duration::from_millis(10)));

    assert!(queue.pop_due(Duration::from_millis(9)).is_none());
    let deadlines: Vec<_> = std::iter::from_fn(|| queue.pop_due(Duration::from_millis(30)))
        .map(|(deadline, _)| deadline)
        .collect();
    assert_eq!(
        deadlines,
        vec![
            Duration::from_millis(10),
            Duration::from_millis(10),
            Duration::from_millis(20)
        ]
    );
    assert!(queue.is_empty());
}

#[test]
fn test_advance_fires_due_timers_in_order() {
    let mut window = form_window();
    let mut log = Log::default();
    window.add_listener("a", EventKind::Click, |_: &mut Log, scope: &mut Cx<'_>, _: &Event| {
        scope.set_timeout(Duration::from_millis(200), |log: &mut Log, scope: &mut Cx<'_>| {
            log.seen.push(format!("late@{}", scope.now().as_millis()));
        });
        scope.set_timeout(Duration::from_millis(100), |log: &mut Log, scope: &mut Cx<'_>| {
            log.seen.push(format!("early@{}", scope.now().as_millis()));
            scope.set_timeout(Duration::from_millis(50), |log: &mut Log, _: &mut Cx<'_>| {
                log.seen.push("chained".to_string());
            });
        });
    });

    window.click(&mut log, "a").unwrap();
    assert_eq!(window.pending_timers(), 2);

    window.advance(&mut log, Duration::from_millis(99));
    assert!(log.seen.is_empty());

    window.advance(&mut log, Duration::from_millis(101));
    assert_eq!(log.seen, vec!["early@100", "chained", "late@200"]);
    assert_eq!(window.now(), Duration::from_millis(200));
    assert_eq!(window.pending_timers(), 0);
}

#[test]
fn test_cleared_timeout_never_fires() {
    let mut window = form_window();
    let mut log = Log::default();
    window.add_listener("a", EventKind::Click, |_: &mut Log, scope: &mut Cx<'_>, _: &Event| {
        let id = scope.set_timeout(Duration::from_millis(10), |log: &mut Log, _: &mut Cx<'_>| {
            log.seen.push("fired".to_string());
        });
        assert!(scope.clear_timeout(id));
    });

    window.click(&mut log, "a").unwrap();
    window.advance(&mut log, Duration::from_secs(1));
    assert!(log.seen.is_empty());
}

// ============================================================================
// Storage
// ============================================================================

#[test]
fn test_memory_storage() {
    let mut storage = MemoryStorage::new().with_item("theme", "dark");
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));

    storage.set_item("theme", "light").unwrap();
    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("light"));

    storage.remove_item("theme").unwrap();
    storage.remove_item("theme").unwrap();
    assert_eq!(storage.get_item("theme").unwrap(), None);
}

#[test]
fn test_listeners_reach_storage() {
    let mut window = form_window();
    let mut log = Log::default();
    window.add_listener("a", EventKind::Click, |_: &mut Log, scope: &mut Cx<'_>, _: &Event| {
        scope.storage_mut().set_item("clicked", "yes").unwrap();
    });

    window.click(&mut log, "a").unwrap();
    assert_eq!(
        window.storage().get_item("clicked").unwrap().as_deref(),
        Some("yes")
    );
}
