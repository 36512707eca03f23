//! Tracing support for performance monitoring.
//!
//! With the `tracing` feature enabled, algorithm constructors open spans that
//! a timing layer aggregates into per-thread wall-clock totals.
//! With the feature disabled the same functions exist as no-ops and the span
//! and event macros expand to nothing.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        collections::HashMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, layer::Context, layer::SubscriberExt, registry::LookupSpan,
        util::SubscriberInitExt,
    };

    type SpanTotals = BTreeMap<&'static str, (Duration, usize)>;

    thread_local! {
        static TIMING_SCOPES: RefCell<HashMap<TimingScope, SpanTotals>> =
            RefCell::new(HashMap::new());
        static TIMING_SCOPE: RefCell<TimingScope> = const { RefCell::new(TimingScope::Compute) };
    }

    /// Bucket that closed spans are charged to.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum TimingScope {
        /// Running the algorithms themselves.
        Compute,
        /// Checking results, e.g. optimality conditions.
        Verify,
    }

    /// Restores the previous scope on drop.
    pub struct TimingScopeGuard {
        previous: TimingScope,
    }

    impl Drop for TimingScopeGuard {
        fn drop(&mut self) {
            TIMING_SCOPE.with(|scope| {
                *scope.borrow_mut() = self.previous;
            });
        }
    }

    pub fn set_timing_scope(scope: TimingScope) -> TimingScopeGuard {
        let previous = TIMING_SCOPE.with(|current| current.replace(scope));
        TimingScopeGuard { previous }
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let name = span.metadata().name();
            if let Some(start) = span.extensions().get::<Instant>() {
                let elapsed = start.elapsed();
                let scope = TIMING_SCOPE.with(|scope| *scope.borrow());
                TIMING_SCOPES.with(|totals| {
                    let mut totals = totals.borrow_mut();
                    let entry = totals
                        .entry(scope)
                        .or_default()
                        .entry(name)
                        .or_insert((Duration::ZERO, 0));
                    entry.0 += elapsed;
                    entry.1 += 1;
                });
            }
        }
    }

    /// Installs the timing layer as the global default subscriber.  Does
    /// nothing if a subscriber is already installed.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default().with(TimingLayer).try_init();
        });
    }

    /// Gets the accumulated `(total time, count)` for a span name.
    pub fn span_timing(scope: TimingScope, name: &str) -> Option<(Duration, usize)> {
        TIMING_SCOPES.with(|totals| {
            totals
                .borrow()
                .get(&scope)
                .and_then(|entries| entries.get(name).copied())
        })
    }

    pub fn dump_span_timings() {
        dump_scope_timings(TimingScope::Compute);
        dump_scope_timings(TimingScope::Verify);
    }

    pub fn reset_span_timings() {
        init_tracing();
        TIMING_SCOPES.with(|totals| totals.borrow_mut().clear());
    }

    fn dump_scope_timings(scope: TimingScope) {
        TIMING_SCOPES.with(|totals| {
            let totals = totals.borrow();
            eprintln!("{scope:?} timings (desc):");
            let Some(entries) = totals.get(&scope) else {
                return;
            };
            let mut entries: Vec<_> = entries.iter().collect();
            entries.sort_by(|a, b| b.1.0.cmp(&a.1.0));
            for (name, (duration, count)) in entries {
                eprintln!("  {name}: {duration:?} ({count}x)");
            }
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum TimingScope {
        Compute,
        Verify,
    }

    pub struct TimingScopeGuard;

    pub fn set_timing_scope(_scope: TimingScope) -> TimingScopeGuard {
        TimingScopeGuard
    }

    pub fn init_tracing() {}

    pub fn span_timing(_scope: TimingScope, _name: &str) -> Option<(Duration, usize)> {
        None
    }

    pub fn dump_span_timings() {}

    pub fn reset_span_timings() {}

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;

    macro_rules! noop_span {
        ($($args:tt)*) => {
            $crate::tracing_support::NoOpSpan
        };
    }

    macro_rules! noop_event {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use noop_event;
    pub(crate) use noop_span;
}

#[cfg(feature = "tracing")]
pub use enabled::*;
#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, info_span, trace};

#[cfg(not(feature = "tracing"))]
pub use disabled::{
    NoOpSpan, NoOpSpanGuard, TimingScope, TimingScopeGuard, dump_span_timings, init_tracing,
    reset_span_timings, set_timing_scope, span_timing,
};
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{noop_event as debug, noop_event as trace, noop_span as info_span};
