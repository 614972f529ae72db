#![forbid(unsafe_code)]
#![cfg(feature = "tracing")]

//! The engine's structured events, observed through a capturing layer.
//!
//! Run with `cargo test -p fdock --features tracing`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use fdock::{Dock, DockConfig, DockItem, DockOptions, ItemId};
use fdock_core::event::PointerEvent;
use fdock_core::geometry::Rect;
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Default)]
struct DockTraceState {
    messages: Vec<String>,
    spans: Vec<String>,
    visibility_to: Vec<String>,
}

struct DockTraceCapture {
    state: Arc<Mutex<DockTraceState>>,
}

struct Fields {
    message: Option<String>,
    to: Option<String>,
}

impl tracing::field::Visit for Fields {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "to" => self.to = Some(value.to_string()),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let text = format!("{value:?}").trim_matches('"').to_string();
        match field.name() {
            "message" => self.message = Some(text),
            "to" => self.to = Some(text),
            _ => {}
        }
    }
}

impl<S> Layer<S> for DockTraceCapture
where
    S: Subscriber + for<'lookup> tracing_subscriber::registry::LookupSpan<'lookup>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::Id,
        _ctx: Context<'_, S>,
    ) {
        self.state
            .lock()
            .expect("dock trace lock")
            .spans
            .push(attrs.metadata().name().to_string());
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields {
            message: None,
            to: None,
        };
        event.record(&mut fields);
        let mut state = self.state.lock().expect("dock trace lock");
        if let Some(message) = fields.message {
            if message == "dock.visibility" {
                if let Some(to) = fields.to {
                    state.visibility_to.push(to);
                }
            }
            state.messages.push(message);
        }
    }
}

fn capture() -> (Arc<Mutex<DockTraceState>>, tracing::subscriber::DefaultGuard) {
    let state = Arc::new(Mutex::new(DockTraceState::default()));
    let subscriber = tracing_subscriber::registry().with(DockTraceCapture {
        state: Arc::clone(&state),
    });
    (state, tracing::subscriber::set_default(subscriber))
}

fn items() -> Vec<DockItem> {
    vec![
        DockItem::new("a", "A").href("/a"),
        DockItem::new("b", "B"),
    ]
}

fn geometry(id: &ItemId) -> Option<Rect> {
    match id.as_str() {
        "a" => Some(Rect::new(0.0, 0.0, 52.0, 52.0)),
        "b" => Some(Rect::new(60.0, 0.0, 52.0, 52.0)),
        _ => None,
    }
}

#[test]
fn visibility_transitions_are_logged() {
    let (state, _guard) = capture();
    let mut dock = Dock::new(DockConfig::default().with_auto_hide(true), items());
    dock.set_trigger_zone(true);
    dock.handle_pointer(&PointerEvent::moved(20.0, 20.0));
    dock.handle_pointer(&PointerEvent::left());

    let snapshot = state.lock().expect("dock trace lock");
    assert_eq!(
        snapshot.visibility_to,
        vec!["visible".to_string(), "hidden".to_string()]
    );
}

#[test]
fn tick_span_and_item_sync_are_logged() {
    let (state, _guard) = capture();
    let mut dock = Dock::new(DockConfig::default(), items());
    dock.handle_pointer(&PointerEvent::moved(20.0, 20.0));
    dock.tick(Duration::from_millis(16), &geometry);
    dock.set_items(vec![DockItem::new("a", "A")]);
    dock.activate(&"a".into(), &mut fdock::NoNavigation);

    let snapshot = state.lock().expect("dock trace lock");
    assert!(snapshot.spans.iter().any(|s| s == "dock.tick"));
    assert!(snapshot.messages.iter().any(|m| m == "dock.items"));
    // "a" lost its href in the new list, so nothing was activated.
    assert!(!snapshot.messages.iter().any(|m| m == "dock.activate"));
}

#[test]
fn degenerate_range_warns() {
    let (state, _guard) = capture();
    let options = DockOptions {
        magnification_range: -1.0,
        ..DockOptions::default()
    };
    let config = DockConfig::try_from(options).expect("negative range is accepted");
    assert!(!config.magnifier().is_active());

    let snapshot = state.lock().expect("dock trace lock");
    assert!(
        snapshot
            .messages
            .iter()
            .any(|m| m == "dock.config.degenerate_range")
    );
}
