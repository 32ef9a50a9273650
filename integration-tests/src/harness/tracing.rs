//! Capture of the client's log events.
//!
//! The mock admin installs one global subscriber per test binary that keeps
//! every event in memory. Tests running in parallel share it, so lookups go
//! by message and field values rather than by position.

use std::fmt;
use std::sync::{Arc, Mutex, Once, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

type EventSink = Arc<Mutex<Vec<CapturedEvent>>>;

/// One log event: target, level and every field rendered as text.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub target: String,
    pub level: Level,
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }

    fn matches(&self, level: Level, message: &str, fields: &[(&str, &str)]) -> bool {
        self.level == level
            && self.message() == Some(message)
            && fields
                .iter()
                .all(|(name, value)| self.field(name) == Some(*value))
    }
}

static SINK: OnceLock<EventSink> = OnceLock::new();

pub fn events() -> EventSink {
    SINK.get_or_init(EventSink::default).clone()
}

/// Installs the capturing subscriber; later calls do nothing.
pub fn install_capture() {
    static INSTALL: Once = Once::new();

    INSTALL.call_once(|| {
        let subscriber = tracing_subscriber::registry().with(CaptureLayer { sink: events() });
        tracing::subscriber::set_global_default(subscriber)
            .expect("another global subscriber is already installed");
    });
}

/// First captured event at `level` with `message` and all of `fields`.
pub fn find_event(level: Level, message: &str, fields: &[(&str, &str)]) -> Option<CapturedEvent> {
    events()
        .lock()
        .unwrap()
        .iter()
        .find(|event| event.matches(level, message, fields))
        .cloned()
}

struct CaptureLayer {
    sink: EventSink,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut recorder = FieldRecorder::default();
        event.record(&mut recorder);

        let meta = event.metadata();
        self.sink.lock().unwrap().push(CapturedEvent {
            target: meta.target().to_owned(),
            level: *meta.level(),
            fields: recorder.fields,
        });
    }
}

/// Renders string fields verbatim and everything else through `Debug`.
#[derive(Default)]
struct FieldRecorder {
    fields: Vec<(String, String)>,
}

impl Visit for FieldRecorder {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.push((field.name().to_owned(), value.to_owned()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.fields
            .push((field.name().to_owned(), format!("{value:?}")));
    }
}
