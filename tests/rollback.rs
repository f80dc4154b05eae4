use rollback::{Rollback, Signal};
use std::sync::mpsc;

#[test]
fn undo_after_two_sets() {
    let mut value = Rollback::new(0);
    value.set(5);
    value.set(10);
    value.undo();
    assert_eq!(value.get(), &5);
    assert!(value.can_redo());

    value.set(7);
    assert_eq!(value.entries().copied().collect::<Vec<_>>(), [0, 5, 7]);
    assert_eq!(value.index(), 2);
    assert!(!value.can_redo());
}

#[test]
fn compress() {
    let mut value = Rollback::new(1);
    value.set(2);
    value.set(3);
    value.set(4);
    value.compress();
    assert_eq!(value.size(), 2);
    assert_eq!(value.entries().copied().collect::<Vec<_>>(), [1, 4]);
    assert_eq!(value.index(), 1);
}

#[test]
fn increment() {
    let mut value = Rollback::new(0);
    assert_eq!(*value.increment(), 1);
    assert_eq!(value.post_increment(), 1);
    assert_eq!(value.get(), &2);
    assert!(!value.can_redo());
    assert_eq!(value.size(), 3);
}

#[test]
fn undo_untouched() {
    let mut value = Rollback::new(0);
    value.undo();
    assert_eq!(value.get(), &0);
    assert!(!value.can_undo());
    assert_eq!(value.size(), 1);
}

#[test]
fn undo_redo_inverse() {
    let mut value = Rollback::new(String::new());
    for s in ["a", "ab", "abc", "abcd"] {
        value.set(s.to_string());
    }
    for _ in 0..4 {
        value.undo();
    }
    assert_eq!(value.get(), "");
    for _ in 0..4 {
        value.redo();
    }
    assert_eq!(value.get(), "abcd");
    assert_eq!(value.index(), 4);
}

#[test]
fn increment_after_undo_discards_redo() {
    let mut value = Rollback::new(0u32);
    value.increment();
    value.increment();
    value.undo();
    assert_eq!(value.post_increment(), 1);
    assert_eq!(value.entries().copied().collect::<Vec<_>>(), [0, 1, 2]);
    assert!(!value.can_redo());
}

#[test]
fn deref_reads_current_value() {
    let mut text = Rollback::new(String::from("hello"));
    text.set(String::from("hello world"));
    assert_eq!(text.len(), 11);
    assert!(text.starts_with("hello"));
    text.undo();
    assert_eq!(text.len(), 5);
    assert_eq!(text.value(), "hello");
    assert_eq!(format!("{text}!"), "hello!");
}

#[test]
fn signals() {
    let (sender, receiver) = mpsc::channel();
    let mut iter = receiver.try_iter();
    let mut value = Rollback::builder().saved(false).connect(sender).build(0);

    value.set(1);
    value.set(2);
    assert_eq!(iter.next(), Some(Signal::Undo(true)));
    assert_eq!(iter.next(), Some(Signal::Index(1)));
    assert_eq!(iter.next(), Some(Signal::Index(2)));
    assert_eq!(iter.next(), None);

    value.undo_by(2);
    assert_eq!(iter.next(), Some(Signal::Undo(false)));
    assert_eq!(iter.next(), Some(Signal::Redo(true)));
    assert_eq!(iter.next(), Some(Signal::Index(0)));
    assert_eq!(iter.next(), None);

    // Clamped navigation emits nothing.
    value.undo();
    assert_eq!(iter.next(), None);

    value.set_saved();
    assert_eq!(iter.next(), Some(Signal::Saved(true)));
    value.compress();
    assert_eq!(iter.next(), Some(Signal::Undo(true)));
    assert_eq!(iter.next(), Some(Signal::Redo(false)));
    assert_eq!(iter.next(), Some(Signal::Saved(false)));
    assert_eq!(iter.next(), Some(Signal::Index(1)));
    assert_eq!(iter.next(), None);

    value.reset();
    assert_eq!(iter.next(), Some(Signal::Undo(false)));
    assert_eq!(iter.next(), Some(Signal::Saved(true)));
    assert_eq!(iter.next(), Some(Signal::Index(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn disconnect_stops_signals() {
    let (sender, receiver) = mpsc::channel::<Signal>();
    let mut value = Rollback::builder().connect(sender).build('a');
    assert!(value.disconnect().is_some());
    value.set('b');
    value.undo();
    assert!(receiver.try_recv().is_err());
}

#[cfg(feature = "chrono")]
#[test]
fn time_travel() {
    use chrono::{Duration, Utc};

    let mut value = Rollback::new('a');
    let start = *value.timestamp();
    value.set('b');
    value.set('c');
    assert_eq!(*value.time_travel(&(start - Duration::seconds(1))), 'a');
    assert_eq!(*value.time_travel(&(Utc::now() + Duration::seconds(1))), 'c');
}
