//! crates/logging/src/tracing_bridge.rs
//! Bridge from the `tracing` ecosystem into a [`Logger`].
//!
//! [`LoggerLayer`] is a `tracing-subscriber` layer that renders each event
//! through a logger so libraries instrumented with `tracing` end up in the
//! same sink, under the same flags and filters, as direct log calls.
//!
//! - event levels map onto severities (`ERROR` to [`Severity::Error`],
//!   `WARN` to [`Severity::Warning`] and so on; nothing maps to
//!   [`Severity::Fatal`]);
//! - event targets map onto registered [`Tag`]s by `::`-separated prefix,
//!   the longest registered prefix winning; unmatched targets are untagged;
//! - events emitted by this workspace's own crates are ignored so a logger
//!   never reports into itself.
//!
//! ```
//! use std::sync::Arc;
//! use taglog::{CaptureBuffer, Flags, Logger, LoggerLayer, Tag};
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let buffer = CaptureBuffer::new();
//! let logger = Arc::new(Logger::with_sink(buffer.clone().into()));
//! logger.replace_flags(Flags::SEVERITY_PREFIX | Flags::TAG_PREFIX | Flags::END_OF_LINE_SUFFIX);
//!
//! let layer = LoggerLayer::new(Arc::clone(&logger)).with_tag("app::net", Tag::new("net"));
//! let subscriber = tracing_subscriber::registry().with(layer);
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::warn!(target: "app::net::tcp", "retrying");
//! });
//!
//! assert_eq!(buffer.contents(), "[Warning][net]retrying\n");
//! ```

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::TryInitError;

use crate::global::global;
use crate::logger::Logger;
use crate::severity::Severity;
use crate::tag::Tag;

const OWN_TARGETS: [&str; 2] = ["taglog", "taglog_sink"];

#[derive(Clone, Debug)]
enum Destination {
    Global,
    Shared(Arc<Logger>),
}

impl Destination {
    fn logger(&self) -> &Logger {
        match self {
            Self::Global => global(),
            Self::Shared(logger) => logger,
        }
    }
}

/// A tracing layer that forwards events into a [`Logger`].
#[derive(Clone, Debug)]
pub struct LoggerLayer {
    destination: Destination,
    tags: Vec<(String, Tag)>,
}

impl LoggerLayer {
    /// Layer forwarding into `logger`.
    #[must_use]
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self {
            destination: Destination::Shared(logger),
            tags: Vec::new(),
        }
    }

    /// Layer forwarding into the process-wide logger.
    #[must_use]
    pub const fn global() -> Self {
        Self {
            destination: Destination::Global,
            tags: Vec::new(),
        }
    }

    /// Tags events whose target is `target` or lies below it.
    #[must_use]
    pub fn with_tag(mut self, target: impl Into<String>, tag: Tag) -> Self {
        self.tags.push((target.into(), tag));
        self
    }

    /// Maps a tracing level onto a severity.
    #[must_use]
    pub const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Debug,
            Level::TRACE => Severity::Trace,
        }
    }

    /// Tag registered for `target`, if any.
    #[must_use]
    pub fn tag_for(&self, target: &str) -> Option<&Tag> {
        self.tags
            .iter()
            .filter(|(prefix, _)| target_within(target, prefix))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, tag)| tag)
    }
}

fn target_within(target: &str, prefix: &str) -> bool {
    target
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

fn is_own_target(target: &str) -> bool {
    OWN_TARGETS
        .iter()
        .any(|own| target_within(target, own))
}

impl<S> Layer<S> for LoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_own_target(metadata.target()) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let text = visitor.finish();

        self.destination.logger().log(
            Self::severity_for(metadata.level()),
            self.tag_for(metadata.target()),
            &[&text],
        );
    }
}

/// Collects the `message` field followed by ` name=value` for every other
/// field.
#[derive(Default)]
struct MessageVisitor {
    text: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if field.name() == "message" {
            let _ = self.text.write_fmt(value);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }

    fn finish(mut self) -> String {
        self.text.push_str(&self.fields);
        self.text
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push_field(field, format_args!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push_field(field, format_args!("{value}"));
    }
}

/// Installs a global tracing subscriber that forwards every event into the
/// process-wide logger.
pub fn try_init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::global())
        .try_init()
}

/// Like [`try_init_tracing`], with `filter` deciding which events reach the
/// logger.
///
/// ```no_run
/// use tracing_subscriber::EnvFilter;
///
/// taglog::try_init_tracing_with_filter(EnvFilter::new("info,hyper=warn"))
///     .expect("no subscriber installed yet");
/// ```
pub fn try_init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(LoggerLayer::global())
        .try_init()
}
