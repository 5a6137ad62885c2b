#![cfg(feature = "tracing")]

use enumerate::*;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// Collects the `category` and `limit` fields of every event.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<(String, String)>>>);

#[derive(Default)]
struct Fields {
    category: String,
    limit: String,
}

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "category" => self.category = format!("{value:?}"),
            "limit" => self.limit = format!("{value:?}"),
            _ => {}
        }
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
        let mut fields = Fields::default();
        event.record(&mut fields);
        if !fields.category.is_empty() {
            self.0.lock().unwrap().push((fields.category, fields.limit));
        }
    }
}

fn recorded(f: impl FnOnce()) -> Vec<(String, String)> {
    let recorder = Recorder::default();
    let subscriber = Registry::default().with(recorder.clone());
    tracing::subscriber::with_default(subscriber, f);
    let events = recorder.0.lock().unwrap().clone();
    events
}

#[test]
fn classification_is_traced() {
    let events = recorded(|| {
        let v = vec![1, 2, 3];
        let _ = enumerate(&v);
        let _ = enumerate_with(&v, 2usize);
        let _ = enumerate((1, 'x'));
        let _ = enumerate(c"abc");
    });
    let categories: Vec<_> = events.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(
        categories,
        ["container", "container-with-limit", "tuple-like", "null-terminated-string"]
    );
    assert_eq!(events[0].1, "None");
    assert_eq!(events[1].1, "Some(2)");
}

#[test]
fn macro_packs_are_traced() {
    let events = recorded(|| {
        let _ = enumerate!(1, 2);
        let _ = enumerate!(AsTuple, 1, "two");
    });
    let categories: Vec<_> = events.into_iter().map(|(c, _)| c).collect();
    assert_eq!(categories, ["variadic-array", "variadic-tuple"]);
}
