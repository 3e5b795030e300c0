//! Expiry countdowns for inventory cards.
//!
//! Every registered item gets its own interval that recomputes the display
//! from absolute time. Entries live exactly as long as their
//! [`CountdownHandle`]; a view keeps its handles in a [`CountdownScope`] and
//! drops the scope when it is replaced.

use crate::shared::runtime::{IntervalHandle, Runtime};
use chrono::{DateTime, Utc};
use contracts::domain::common::ItemId;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

const DAY_MS: i64 = 86_400_000;
const WARNING_MS: i64 = 2 * DAY_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Remaining { days: i64, warning: bool },
    Expired,
}

impl CountdownState {
    pub fn at(expiry: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let left_ms = (expiry - now).num_milliseconds();
        if left_ms <= 0 {
            return CountdownState::Expired;
        }
        CountdownState::Remaining {
            days: left_ms / DAY_MS,
            warning: left_ms < WARNING_MS,
        }
    }

    pub fn label(&self) -> String {
        match self {
            CountdownState::Remaining { days, .. } => format!("{}d", days),
            CountdownState::Expired => "Expired".to_string(),
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, CountdownState::Remaining { warning: true, .. })
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CountdownState::Remaining { warning: true, .. } => "timer warning",
            CountdownState::Remaining { .. } => "timer",
            CountdownState::Expired => "timer expired",
        }
    }
}

/// Where a countdown is shown (a signal in the UI, a recorder in tests).
pub trait CountdownDisplay {
    fn show(&self, state: CountdownState);
}

struct Slot {
    generation: u64,
    expiry: DateTime<Utc>,
    display: Rc<dyn CountdownDisplay>,
}

/// One item id may be on screen more than once (two copies of the same
/// meme), so every id keeps a list of slots.
type Entries = RefCell<HashMap<ItemId, Vec<Slot>>>;

pub struct CountdownRegistry {
    runtime: Rc<dyn Runtime>,
    period: Duration,
    entries: Rc<Entries>,
    next_generation: Cell<u64>,
}

impl CountdownRegistry {
    pub fn new(runtime: Rc<dyn Runtime>, period: Duration) -> Rc<Self> {
        Rc::new(Self {
            runtime,
            period,
            entries: Rc::default(),
            next_generation: Cell::new(1),
        })
    }

    /// Shows the current state right away, then every `period`.
    ///
    /// Registering an item that is already tracked supersedes its slots.
    pub fn register(
        &self,
        item_id: ItemId,
        expiry: DateTime<Utc>,
        display: Rc<dyn CountdownDisplay>,
    ) -> CountdownHandle {
        self.attach(item_id, expiry, display, true)
    }

    fn attach(
        &self,
        item_id: ItemId,
        expiry: DateTime<Utc>,
        display: Rc<dyn CountdownDisplay>,
        supersede: bool,
    ) -> CountdownHandle {
        let generation = self.next_generation.get();
        self.next_generation.set(generation + 1);

        display.show(CountdownState::at(expiry, self.runtime.now()));
        let superseded = {
            let mut entries = self.entries.borrow_mut();
            let slots = entries.entry(item_id.clone()).or_default();
            let superseded = if supersede {
                std::mem::take(slots)
            } else {
                Vec::new()
            };
            slots.push(Slot {
                generation,
                expiry,
                display,
            });
            superseded
        };
        drop(superseded);

        let entries = Rc::downgrade(&self.entries);
        let runtime = Rc::downgrade(&self.runtime);
        let key = item_id.clone();
        let ticker = self.runtime.every(
            self.period,
            Box::new(move || recompute(&entries, &runtime, &key, generation)),
        );

        CountdownHandle {
            item_id,
            generation,
            entries: Rc::downgrade(&self.entries),
            _ticker: ticker,
        }
    }

    pub fn scope(self: &Rc<Self>) -> CountdownScope {
        CountdownScope {
            registry: Rc::clone(self),
            handles: Vec::new(),
        }
    }

    /// Number of live countdowns, duplicates included.
    pub fn active_count(&self) -> usize {
        self.entries.borrow().values().map(Vec::len).sum()
    }

    pub fn is_tracking(&self, item_id: &ItemId) -> bool {
        self.entries.borrow().contains_key(item_id)
    }
}

fn recompute(entries: &Weak<Entries>, runtime: &Weak<dyn Runtime>, key: &ItemId, generation: u64) {
    let (Some(entries), Some(runtime)) = (entries.upgrade(), runtime.upgrade()) else {
        return;
    };
    let target = {
        let entries = entries.borrow();
        entries
            .get(key)
            .and_then(|slots| slots.iter().find(|s| s.generation == generation))
            .map(|s| (s.expiry, Rc::clone(&s.display)))
    };
    if let Some((expiry, display)) = target {
        display.show(CountdownState::at(expiry, runtime.now()));
    }
}

/// Keeps one countdown alive. Dropping (or [`cancel`](Self::cancel)ing) it
/// stops the interval and forgets its slot.
#[must_use = "dropping the handle cancels the countdown"]
pub struct CountdownHandle {
    item_id: ItemId,
    generation: u64,
    entries: Weak<Entries>,
    _ticker: IntervalHandle,
}

impl CountdownHandle {
    pub fn cancel(self) {}
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        let Some(entries) = self.entries.upgrade() else {
            return;
        };
        let removed = {
            let mut entries = entries.borrow_mut();
            let Some(slots) = entries.get_mut(&self.item_id) else {
                return;
            };
            let removed = slots
                .iter()
                .position(|s| s.generation == self.generation)
                .map(|i| slots.remove(i));
            if slots.is_empty() {
                entries.remove(&self.item_id);
            }
            removed
        };
        drop(removed);
    }
}

/// Countdowns owned by one rendered view.
pub struct CountdownScope {
    registry: Rc<CountdownRegistry>,
    handles: Vec<CountdownHandle>,
}

impl CountdownScope {
    /// Unlike [`CountdownRegistry::register`], the same id may be tracked
    /// several times within one view.
    pub fn track(&mut self, item_id: ItemId, expiry: DateTime<Utc>, display: Rc<dyn CountdownDisplay>) {
        let handle = self.registry.attach(item_id, expiry, display, false);
        self.handles.push(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
