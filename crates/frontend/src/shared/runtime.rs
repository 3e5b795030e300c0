//! Runtime seam: clock, local task spawning and timers.
//!
//! The browser implementation sits on `wasm-bindgen-futures` and
//! `gloo-timers`. Everything above this module is written against the
//! [`Runtime`] trait so the controller, the countdown registry and the
//! request timeout run unchanged under the manual clock used in tests.

use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;
use std::any::Any;
use std::time::Duration;

pub trait Runtime {
    fn now(&self) -> DateTime<Utc>;

    /// Runs `task` on the current (single) thread.
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);

    /// Calls `tick` every `period` until the returned handle is dropped.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> IntervalHandle;

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Owns a running interval. Dropping the handle cancels it.
#[must_use = "dropping the handle cancels the interval"]
pub struct IntervalHandle {
    _guard: Box<dyn Any>,
}

impl IntervalHandle {
    pub fn new<G: 'static>(guard: G) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }

    pub fn cancel(self) {}
}

impl std::fmt::Debug for IntervalHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("IntervalHandle")
    }
}

fn clamp_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// `setInterval`/`setTimeout` backed runtime for the webview.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserRuntime;

impl Runtime for BrowserRuntime {
    fn now(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64)
            .unwrap_or_else(Utc::now)
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> IntervalHandle {
        // gloo's Interval clears itself on drop
        IntervalHandle::new(gloo_timers::callback::Interval::new(
            clamp_millis(period),
            tick,
        ))
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::TimeoutFuture::new(clamp_millis(duration)))
    }
}
