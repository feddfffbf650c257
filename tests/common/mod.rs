#![allow(dead_code)]

use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// 6 well-formed data lines (one repeats a character), 4 comment/empty
/// lines, 3 malformed lines.
pub const BODY: &str = "\
# pinyin.txt snapshot
# format: U+<hex>: <pinyin>  # <char>

U+4E2D: zhōng,zhòng  # 中
U+56FD: guó  # 国
not-a-line
U+20000: hē  # 𠀀
U+QQQQ: bad  # invalid hex
U+6587: wén  # 文
U+5B57:
U+4E2D: zhòng  # 中, later entry

U+4EBA: rén  # 人
";

/// One log event: level and rendered message.
#[derive(Debug, Clone)]
pub struct Captured {
    pub level: Level,
    pub message: String,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            message: visitor.0,
        });
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

/// Runs `f` with a subscriber that records every event on this thread.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, Vec<Captured>) {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    let events = layer.events.lock().unwrap().clone();
    (out, events)
}

pub fn count_at(events: &[Captured], level: Level) -> usize {
    events.iter().filter(|e| e.level == level).count()
}
