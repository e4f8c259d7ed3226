//! Tracing subscriber setup: console formatter and initialisation.
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "CLUSTER_LAUNCHER_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Console formatter: coloured level prefix, then the message.
struct LauncherFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for LauncherFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        match *event.metadata().level() {
            tracing::Level::ERROR => writeln!(writer, "\x1b[31mERROR\x1b[0m {msg}"),
            tracing::Level::WARN => writeln!(writer, "\x1b[33mWARN\x1b[0m  {msg}"),
            tracing::Level::INFO => writeln!(writer, "  {msg}"),
            _ => writeln!(writer, "  \x1b[2m{msg}\x1b[0m"),
        }
    }
}

/// Build the filter from [`LOG_ENV_VAR`], defaulting to `warn`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialise the global [`tracing`] subscriber.
///
/// Everything goes to stderr so the child's stdout stays untouched. Must be
/// called once at program startup, before any logging.
pub fn init_subscriber() {
    use tracing_subscriber::{Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

    let console_layer = fmt::layer()
        .event_format(LauncherFormatter)
        .with_writer(std::io::stderr)
        .with_filter(env_filter());

    tracing_subscriber::registry().with(console_layer).init();
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// Writer that appends into a shared buffer.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn captured(emit: impl FnOnce()) -> String {
        let capture = Capture::default();
        let layer = tracing_subscriber::fmt::layer()
            .event_format(LauncherFormatter)
            .with_writer(capture.clone());
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, emit);
        let bytes = capture.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn error_has_red_prefix() {
        let out = captured(|| tracing::error!("Cannot read cluster file: x"));
        assert_eq!(out, "\x1b[31mERROR\x1b[0m Cannot read cluster file: x\n");
    }

    #[test]
    fn warn_has_yellow_prefix() {
        let out = captured(|| tracing::warn!("skipping missing cluster ide"));
        assert_eq!(out, "\x1b[33mWARN\x1b[0m  skipping missing cluster ide\n");
    }

    #[test]
    fn debug_is_dimmed() {
        let out = captured(|| tracing::debug!("install root /opt/app"));
        assert_eq!(out, "  \x1b[2minstall root /opt/app\x1b[0m\n");
    }
}
