use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counter() -> (Arc<AtomicUsize>, EventHandler) {
    let count = Arc::new(AtomicUsize::new(0));
    let handler_count = Arc::clone(&count);
    let handler: EventHandler = Arc::new(move || {
        handler_count.fetch_add(1, Ordering::SeqCst);
    });
    (count, handler)
}

#[test]
fn emit_reaches_only_matching_listeners() {
    let hub = EventHub::new();
    let (saves, on_save) = counter();
    let (toggles, on_toggle) = counter();
    hub.subscribe("event-save-file", on_save);
    hub.subscribe("event-terminal", on_toggle);

    assert_eq!(hub.emit("event-save-file"), 1);
    assert_eq!(saves.load(Ordering::SeqCst), 1);
    assert_eq!(toggles.load(Ordering::SeqCst), 0);
    assert_eq!(hub.emit("event-unknown"), 0);
}

#[test]
fn unsubscribe_removes_only_that_listener() {
    let hub = EventHub::new();
    let (first, first_handler) = counter();
    let (second, second_handler) = counter();
    let first_id = hub.subscribe("event-terminal", first_handler);
    hub.subscribe("event-terminal", second_handler);

    assert!(hub.unsubscribe(first_id));
    assert!(!hub.unsubscribe(first_id));
    assert_eq!(hub.listener_count("event-terminal"), 1);

    hub.emit("event-terminal");
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn handler_may_unsubscribe_itself_during_emit() {
    let hub = Arc::new(EventHub::new());
    let slot: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));

    let hub_for_handler = Arc::clone(&hub);
    let slot_for_handler = Arc::clone(&slot);
    let id = hub.subscribe(
        "event-open-file",
        Arc::new(move || {
            if let Some(id) = slot_for_handler.lock().unwrap().take() {
                hub_for_handler.unsubscribe(id);
            }
        }),
    );
    *slot.lock().unwrap() = Some(id);

    assert_eq!(hub.emit("event-open-file"), 1);
    assert!(hub.is_empty());
}
