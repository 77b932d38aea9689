//! Telemetry - inizializzazione del logging e wrapper di tracing
//!
//! `trace_call` wraps a future in a span named after the call and carrying
//! its attributes. It does not time, sample or export anything: the span is
//! all there is, and whatever subscriber is installed decides what to do
//! with it.

use std::future::Future;
use tracing::{Instrument, info_span};
use tracing_subscriber::EnvFilter;

/// Options attached to a traced call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceOptions {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
}

impl TraceOptions {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((key, value.into()));
        self
    }

    fn render_attributes(&self) -> String {
        self.attributes
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Runs `fut` inside a span described by `options` and returns its output untouched
pub async fn trace_call<F, T>(options: &TraceOptions, fut: F) -> T
where
    F: Future<Output = T>,
{
    let span = info_span!(
        "call",
        name = options.name,
        attributes = %options.render_attributes()
    );
    fut.instrument(span).await
}

/// Installa il subscriber globale
///
/// `RUST_LOG` wins when set, otherwise `level` (the service `LOG_LEVEL`) is used.
/// Calling it twice is harmless: the second install is ignored.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trace_call_forwards_the_result() {
        let options = TraceOptions::new("list_traditions").attribute("service", "practices");
        let value = trace_call(&options, async { 41 + 1 }).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_trace_call_forwards_errors() {
        let options = TraceOptions::new("failing");
        let result: Result<(), &str> = trace_call(&options, async { Err("boom") }).await;
        assert_eq!(result, Err("boom"));
    }

    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id};
    use tracing::Subscriber;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;
    use tracing_subscriber::Layer;

    #[derive(Default)]
    struct Fields(Vec<(String, String)>);

    impl Visit for Fields {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.push((field.name().to_string(), value.to_string()));
        }

        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }
    }

    /// Keeps the name and fields of every span created and counts how many times they are entered
    #[derive(Clone, Default)]
    struct SpanRecorder {
        spans: Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>,
        entered: Arc<Mutex<Vec<String>>>,
    }

    impl<S> Layer<S> for SpanRecorder
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            let mut fields = Fields::default();
            attrs.record(&mut fields);
            self.spans
                .lock()
                .unwrap()
                .push((attrs.metadata().name().to_string(), fields.0));
        }

        fn on_enter(&self, id: &Id, ctx: Context<'_, S>) {
            if let Some(metadata) = ctx.metadata(id) {
                self.entered.lock().unwrap().push(metadata.name().to_string());
            }
        }
    }

    #[tokio::test]
    async fn test_trace_call_enters_a_span_with_its_options() {
        let recorder = SpanRecorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let options = TraceOptions::new("list_traditions")
            .attribute("limit", "10")
            .attribute("offset", "0");
        let inner_span = trace_call(&options, async {
            tracing::Span::current().metadata().map(|m| m.name())
        })
        .await;

        assert_eq!(inner_span, Some("call"));

        let spans = recorder.spans.lock().unwrap();
        assert_eq!(spans.len(), 1);
        let (name, fields) = &spans[0];
        assert_eq!(name, "call");
        assert!(fields.contains(&("name".to_string(), "list_traditions".to_string())));
        assert!(fields.contains(&("attributes".to_string(), "limit=10,offset=0".to_string())));

        assert!(recorder.entered.lock().unwrap().iter().any(|n| n == "call"));
    }

    #[test]
    fn test_attributes_render_in_order() {
        let options = TraceOptions::new("x").attribute("a", "1").attribute("b", "2");
        assert_eq!(options.render_attributes(), "a=1,b=2");
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing("debug");
        init_tracing("not a valid filter ((");
    }
}
