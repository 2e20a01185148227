use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use super::{PlannedCall, PreloadOptions, PreloadPlan, PreloadResult, RouteTable};
use crate::types::ParamMap;

/// Per-pass information handed to every sub-call.
#[derive(Debug, Clone, Copy)]
pub struct PreloadContext<'a> {
    pub path: &'a str,
    pub deadline: Instant,
}

impl PreloadContext<'_> {
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// Runs one declared sub-call. Implementations are expected to honour
/// `ctx.deadline`; the engine drops results that arrive after it.
pub trait PreloadExecutor: Sync {
    type Output: Send;
    type Error: fmt::Display;

    fn execute(
        &self,
        ctx: &PreloadContext<'_>,
        method: &str,
        params: Option<&ParamMap>,
    ) -> Result<Self::Output, Self::Error>;
}

#[derive(Debug)]
pub struct PreloadOutcome<T> {
    pub pattern: Option<String>,
    pub results: HashMap<String, T>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
    pub timed_out: Vec<String>,
}

impl<T> PreloadOutcome<T> {
    fn empty() -> Self {
        Self {
            pattern: None,
            results: HashMap::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
            timed_out: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

struct Aggregate<T> {
    results: HashMap<String, T>,
    failed: Vec<String>,
    timed_out: Vec<String>,
}

/// Matches a request path against the route table and runs the matched
/// route's sub-calls in parallel.
#[derive(Debug)]
pub struct PreloadEngine<E> {
    table: RouteTable,
    executor: E,
    options: PreloadOptions,
}

impl<E: PreloadExecutor> PreloadEngine<E> {
    pub fn new(
        table: RouteTable,
        executor: E,
        options: Option<PreloadOptions>,
    ) -> PreloadResult<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;
        Ok(Self {
            table,
            executor,
            options,
        })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn options(&self) -> &PreloadOptions {
        &self.options
    }

    pub fn plan(&self, path: &str) -> Option<PreloadPlan> {
        if self.options.is_skipped(path) {
            return None;
        }
        self.table.plan(path)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(path = %path))]
    pub fn execute(&self, path: &str) -> PreloadOutcome<E::Output> {
        if self.options.is_skipped(path) {
            tracing::event!(tracing::Level::DEBUG, path = %path, "preload skipped for reserved prefix");
            return PreloadOutcome::empty();
        }

        let Some(plan) = self.table.plan(path) else {
            return PreloadOutcome::empty();
        };

        let mut skipped = Vec::new();
        for call in plan.unresolved() {
            tracing::event!(
                tracing::Level::INFO,
                method = %call.method,
                params = ?call.params,
                "preload skipped: unsubstituted params"
            );
            skipped.push(call.method.clone());
        }

        let Some(deadline) = Instant::now().checked_add(self.options.timeout) else {
            tracing::event!(
                tracing::Level::WARN,
                timeout = ?self.options.timeout,
                "preload deadline is not representable"
            );
            return PreloadOutcome::empty();
        };

        let runnable: Vec<&PlannedCall> = plan.runnable().collect();
        let ctx = PreloadContext { path, deadline };
        let aggregate = Mutex::new(Aggregate {
            results: HashMap::with_capacity(runnable.len()),
            failed: Vec::new(),
            timed_out: Vec::new(),
        });
        let next = AtomicUsize::new(0);
        let workers = runnable.len().min(self.options.max_parallel);

        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| {
                    while let Some(call) = runnable.get(next.fetch_add(1, Ordering::Relaxed)) {
                        self.run_call(&ctx, call, &aggregate);
                    }
                });
            }
        });

        let Aggregate {
            results,
            mut failed,
            mut timed_out,
        } = aggregate.into_inner();
        skipped.sort();
        failed.sort();
        timed_out.sort();

        PreloadOutcome {
            pattern: Some(plan.pattern),
            results,
            skipped,
            failed,
            timed_out,
        }
    }

    fn run_call(
        &self,
        ctx: &PreloadContext<'_>,
        call: &PlannedCall,
        aggregate: &Mutex<Aggregate<E::Output>>,
    ) {
        if ctx.is_expired() {
            tracing::event!(
                tracing::Level::WARN,
                method = %call.method,
                "preload deadline passed before call started"
            );
            aggregate.lock().timed_out.push(call.method.clone());
            return;
        }

        match self
            .executor
            .execute(ctx, &call.method, call.params.as_ref())
        {
            Ok(_) if ctx.is_expired() => {
                tracing::event!(
                    tracing::Level::WARN,
                    method = %call.method,
                    "preload result arrived after deadline"
                );
                aggregate.lock().timed_out.push(call.method.clone());
            }
            Ok(output) => {
                aggregate.lock().results.insert(call.method.clone(), output);
            }
            Err(err) => {
                tracing::event!(
                    tracing::Level::INFO,
                    method = %call.method,
                    error = %err,
                    "preload call failed"
                );
                aggregate.lock().failed.push(call.method.clone());
            }
        }
    }
}
