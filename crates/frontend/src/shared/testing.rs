//! Test doubles shared by the unit tests: a manual clock runtime, a scripted
//! HTTP executor and recording host collaborators.

use crate::layout::tabs::{ContentRenderer, Tab, TabData};
use crate::shared::countdown::{CountdownDisplay, CountdownScope, CountdownState};
use crate::shared::http::{ApiClient, HttpExecutor, Method, PreparedRequest, RawResponse, TransportError};
use crate::shared::runtime::{IntervalHandle, Runtime};
use crate::system::host::{HostShell, Notifier};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use futures::channel::oneshot;
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawnExt;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::{Rc, Weak};
use std::time::Duration;

pub(crate) const BASE_URL: &str = "http://api.test";
pub(crate) const TIMEOUT: Duration = Duration::from_secs(15);

pub(crate) fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

fn delta(d: Duration) -> chrono::Duration {
    chrono::Duration::from_std(d).expect("test duration in range")
}

// ---------------------------------------------------------------------------
// Runtime
// ---------------------------------------------------------------------------

struct ScheduledInterval {
    period: Duration,
    due: DateTime<Utc>,
    tick: Rc<RefCell<Box<dyn FnMut()>>>,
}

struct Sleeper {
    due: DateTime<Utc>,
    wake: oneshot::Sender<()>,
}

#[derive(Default)]
struct Timers {
    next_id: u64,
    intervals: BTreeMap<u64, ScheduledInterval>,
    sleepers: Vec<Sleeper>,
}

struct IntervalGuard {
    id: u64,
    timers: Weak<RefCell<Timers>>,
}

impl Drop for IntervalGuard {
    fn drop(&mut self) {
        if let Some(timers) = self.timers.upgrade() {
            let removed = timers.borrow_mut().intervals.remove(&self.id);
            drop(removed);
        }
    }
}

enum Due {
    Sleeper(usize),
    Interval(u64),
}

/// Single-threaded runtime whose clock only moves in [`ManualRuntime::advance`].
pub(crate) struct ManualRuntime {
    now: Cell<DateTime<Utc>>,
    pool: RefCell<LocalPool>,
    spawner: LocalSpawner,
    timers: Rc<RefCell<Timers>>,
}

impl ManualRuntime {
    pub(crate) fn new(start: DateTime<Utc>) -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            now: Cell::new(start),
            pool: RefCell::new(pool),
            spawner,
            timers: Rc::default(),
        }
    }

    pub(crate) fn run_until_stalled(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    pub(crate) fn interval_count(&self) -> usize {
        self.timers.borrow().intervals.len()
    }

    fn next_due(&self, limit: DateTime<Utc>) -> Option<(DateTime<Utc>, Due)> {
        let timers = self.timers.borrow();
        let sleeper = timers
            .sleepers
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= limit)
            .min_by_key(|(_, s)| s.due)
            .map(|(i, s)| (s.due, Due::Sleeper(i)));
        let interval = timers
            .intervals
            .iter()
            .filter(|(_, i)| i.due <= limit)
            .min_by_key(|(_, i)| i.due)
            .map(|(id, i)| (i.due, Due::Interval(*id)));
        match (sleeper, interval) {
            (Some(s), Some(i)) => Some(if s.0 <= i.0 { s } else { i }),
            (s, i) => s.or(i),
        }
    }

    /// Moves the clock forward, firing timers in due order and draining the
    /// task pool after each one.
    pub(crate) fn advance(&self, by: Duration) {
        let target = self.now.get() + delta(by);
        self.run_until_stalled();
        while let Some((due, event)) = self.next_due(target) {
            self.now.set(due);
            match event {
                Due::Sleeper(index) => {
                    let sleeper = self.timers.borrow_mut().sleepers.remove(index);
                    let _ = sleeper.wake.send(());
                }
                Due::Interval(id) => {
                    let tick = {
                        let mut timers = self.timers.borrow_mut();
                        let Some(interval) = timers.intervals.get_mut(&id) else {
                            continue;
                        };
                        interval.due = due + delta(interval.period);
                        Rc::clone(&interval.tick)
                    };
                    let mut callback = tick.borrow_mut();
                    (*callback)();
                }
            }
            self.run_until_stalled();
        }
        self.now.set(target);
        self.run_until_stalled();
    }
}

impl Runtime for ManualRuntime {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }

    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner.spawn_local(task).expect("local pool alive");
    }

    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> IntervalHandle {
        let mut timers = self.timers.borrow_mut();
        let id = timers.next_id;
        timers.next_id += 1;
        timers.intervals.insert(
            id,
            ScheduledInterval {
                period,
                due: self.now.get() + delta(period),
                tick: Rc::new(RefCell::new(tick)),
            },
        );
        IntervalHandle::new(IntervalGuard {
            id,
            timers: Rc::downgrade(&self.timers),
        })
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (wake, woken) = oneshot::channel();
        self.timers.borrow_mut().sleepers.push(Sleeper {
            due: self.now.get() + delta(duration),
            wake,
        });
        Box::pin(async move {
            let _ = woken.await;
        })
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

pub(crate) enum Reply {
    Respond(u16, String),
    /// Status with a body that cannot be read as text
    Unreadable(u16),
    Fail(String),
    Deferred(oneshot::Receiver<(u16, String)>),
    Hang,
}

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub method: Method,
    pub url: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub include_credentials: bool,
}

/// Executor answering from per-path queues (query string ignored).
#[derive(Default)]
pub(crate) struct FakeExecutor {
    replies: RefCell<HashMap<String, VecDeque<Reply>>>,
    calls: RefCell<Vec<RecordedCall>>,
}

fn route_of(url: &str) -> String {
    let path = url.strip_prefix(BASE_URL).unwrap_or(url);
    path.split('?').next().unwrap_or_default().to_string()
}

impl FakeExecutor {
    pub(crate) fn reply(&self, path: &str, status: u16, body: &str) {
        self.reply_with(path, Reply::Respond(status, body.to_string()));
    }

    pub(crate) fn reply_with(&self, path: &str, reply: Reply) {
        self.replies
            .borrow_mut()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
    }

    /// Queues a reply the test resolves later through the returned sender.
    pub(crate) fn defer(&self, path: &str) -> oneshot::Sender<(u16, String)> {
        let (tx, rx) = oneshot::channel();
        self.reply_with(path, Reply::Deferred(rx));
        tx
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub(crate) fn paths(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.path.clone()).collect()
    }

    pub(crate) fn count(&self, path: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.path == path).count()
    }
}

#[async_trait(?Send)]
impl HttpExecutor for FakeExecutor {
    async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse, TransportError> {
        let path = route_of(&request.url);
        self.calls.borrow_mut().push(RecordedCall {
            method: request.method,
            url: request.url.clone(),
            path: path.clone(),
            headers: request.headers.clone(),
            include_credentials: request.include_credentials,
        });
        let reply = {
            let mut replies = self.replies.borrow_mut();
            replies.get_mut(&path).and_then(VecDeque::pop_front)
        };
        match reply {
            Some(Reply::Respond(status, body)) => Ok(RawResponse::new(status, body)),
            Some(Reply::Unreadable(status)) => Ok(RawResponse { status, body: None }),
            Some(Reply::Fail(message)) => Err(TransportError(message)),
            Some(Reply::Deferred(rx)) => match rx.await {
                Ok((status, body)) => Ok(RawResponse::new(status, body)),
                Err(_) => Err(TransportError("deferred reply dropped".into())),
            },
            Some(Reply::Hang) => futures::future::pending().await,
            None => Err(TransportError(format!("no reply scripted for {}", path))),
        }
    }
}

// ---------------------------------------------------------------------------
// Host
// ---------------------------------------------------------------------------

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

pub(crate) struct FakeHost {
    pub init_data: String,
    pub answer: Cell<bool>,
    pub confirmations: RefCell<Vec<String>>,
    pub opened: RefCell<Vec<String>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            init_data: "query_id=AAE&user=%7B%22id%22%3A777%7D&hash=abc".to_string(),
            answer: Cell::new(true),
            confirmations: RefCell::default(),
            opened: RefCell::default(),
        }
    }
}

#[async_trait(?Send)]
impl HostShell for FakeHost {
    fn init_data(&self) -> String {
        self.init_data.clone()
    }

    fn open_link(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }

    async fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.answer.get()
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[derive(Default)]
pub(crate) struct RecordingDisplay {
    states: RefCell<Vec<CountdownState>>,
}

impl RecordingDisplay {
    pub(crate) fn states(&self) -> Vec<CountdownState> {
        self.states.borrow().clone()
    }

    pub(crate) fn last(&self) -> Option<CountdownState> {
        self.states.borrow().last().copied()
    }
}

impl CountdownDisplay for RecordingDisplay {
    fn show(&self, state: CountdownState) {
        self.states.borrow_mut().push(state);
    }
}

/// Renderer that keeps everything it was given and tracks a countdown per
/// inventory item like the real view does.
#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub loading: RefCell<Vec<Tab>>,
    pub rendered: RefCell<Vec<TabData>>,
    pub displays: RefCell<Vec<Rc<RecordingDisplay>>>,
}

impl RecordingRenderer {
    pub(crate) fn rendered_tabs(&self) -> Vec<Tab> {
        self.rendered.borrow().iter().map(TabData::tab).collect()
    }

    pub(crate) fn last(&self) -> Option<TabData> {
        self.rendered.borrow().last().cloned()
    }
}

impl ContentRenderer for RecordingRenderer {
    fn show_loading(&self, tab: Tab) {
        self.loading.borrow_mut().push(tab);
    }

    fn render(&self, content: TabData, countdowns: &mut CountdownScope) {
        if let TabData::Inventory(items) = &content {
            for item in items {
                let display = Rc::new(RecordingDisplay::default());
                countdowns.track(item.id.clone(), item.expiry.at(), display.clone());
                self.displays.borrow_mut().push(display);
            }
        }
        self.rendered.borrow_mut().push(content);
    }
}

// ---------------------------------------------------------------------------
// Wiring
// ---------------------------------------------------------------------------

pub(crate) struct Harness {
    pub runtime: Rc<ManualRuntime>,
    pub executor: Rc<FakeExecutor>,
    pub notifier: Rc<RecordingNotifier>,
    pub host: Rc<FakeHost>,
    pub api: Rc<ApiClient>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        let runtime = Rc::new(ManualRuntime::new(epoch()));
        let executor = Rc::new(FakeExecutor::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let host = Rc::new(FakeHost::default());
        let api = Rc::new(ApiClient::new(
            BASE_URL,
            TIMEOUT,
            executor.clone(),
            runtime.clone(),
            notifier.clone(),
        ));
        Self {
            runtime,
            executor,
            notifier,
            host,
            api,
        }
    }
}
