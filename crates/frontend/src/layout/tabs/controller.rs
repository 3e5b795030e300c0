//! Активный таб, загрузка контента и фоновый polling.

use super::registry::{ContentLoader, TabData};
use super::tab_labels::Tab;
use crate::shared::countdown::{CountdownRegistry, CountdownScope};
use crate::shared::http::FetchError;
use crate::shared::runtime::{IntervalHandle, Runtime};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Receives loaded content. Implemented by the Leptos view layer.
pub trait ContentRenderer {
    /// A tab was selected and its content is on the way.
    fn show_loading(&self, tab: Tab);

    /// Replaces the visible content. Countdowns for the new view go into
    /// `countdowns`; they are released when the view is replaced.
    fn render(&self, content: TabData, countdowns: &mut CountdownScope);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub page_size: u32,
}

/// Identifies one dispatched load: the tab it was issued for and its
/// position in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub tab: Tab,
    pub seq: u64,
}

#[derive(Debug, Default)]
struct TabState {
    current: Tab,
    issued: u64,
    /// First seq issued after the current tab was selected
    selected: u64,
    rendered: u64,
}

pub struct TabController {
    loader: ContentLoader,
    renderer: Rc<dyn ContentRenderer>,
    runtime: Rc<dyn Runtime>,
    countdowns: Rc<CountdownRegistry>,
    settings: PollSettings,
    state: RefCell<TabState>,
    view_countdowns: RefCell<Option<CountdownScope>>,
    poller: RefCell<Option<IntervalHandle>>,
}

impl TabController {
    pub fn new(
        loader: ContentLoader,
        renderer: Rc<dyn ContentRenderer>,
        runtime: Rc<dyn Runtime>,
        countdowns: Rc<CountdownRegistry>,
        settings: PollSettings,
    ) -> Rc<Self> {
        Rc::new(Self {
            loader,
            renderer,
            runtime,
            countdowns,
            settings,
            state: RefCell::default(),
            view_countdowns: RefCell::default(),
            poller: RefCell::default(),
        })
    }

    pub fn current_tab(&self) -> Tab {
        self.state.borrow().current
    }

    pub fn is_polling(&self) -> bool {
        self.poller.borrow().is_some()
    }

    pub fn select_tab(self: &Rc<Self>, tab: Tab) {
        log::info!("tab selected: {}", tab);
        {
            let mut state = self.state.borrow_mut();
            state.current = tab;
            state.selected = state.issued + 1;
        }
        self.release_view();
        self.renderer.show_loading(tab);
        self.dispatch(tab);
    }

    /// Re-fetches the active tab without showing the loader.
    pub fn reload(self: &Rc<Self>) {
        let tab = self.current_tab();
        self.dispatch(tab);
    }

    /// Arms the background refresh. Only the first call has an effect.
    pub fn start_polling(self: &Rc<Self>) {
        let mut poller = self.poller.borrow_mut();
        if poller.is_some() {
            log::debug!("polling already running");
            return;
        }
        let this = Rc::downgrade(self);
        *poller = Some(self.runtime.every(
            self.settings.interval,
            Box::new(move || {
                if let Some(controller) = this.upgrade() {
                    controller.poll_tick();
                }
            }),
        ));
    }

    pub fn stop_polling(&self) {
        self.poller.borrow_mut().take();
    }

    fn poll_tick(self: &Rc<Self>) {
        let tab = self.current_tab();
        if tab.is_volatile() {
            log::debug!("poll: refreshing {}", tab);
            self.dispatch(tab);
        }
    }

    fn dispatch(self: &Rc<Self>, tab: Tab) {
        let ticket = {
            let mut state = self.state.borrow_mut();
            state.issued += 1;
            LoadTicket {
                tab,
                seq: state.issued,
            }
        };
        let this = Rc::clone(self);
        let limit = self.settings.page_size;
        self.runtime.spawn_local(Box::pin(async move {
            let result = this.loader.load(tab, 0, limit).await;
            this.complete(ticket, result);
        }));
    }

    fn is_stale(&self, ticket: LoadTicket) -> bool {
        let state = self.state.borrow();
        ticket.tab != state.current || ticket.seq < state.selected || ticket.seq < state.rendered
    }

    fn complete(&self, ticket: LoadTicket, result: Result<TabData, FetchError>) {
        if self.is_stale(ticket) {
            log::debug!("discarding stale {} load #{}", ticket.tab, ticket.seq);
            return;
        }
        match result {
            Ok(content) => {
                self.state.borrow_mut().rendered = ticket.seq;
                self.release_view();
                let mut scope = self.countdowns.scope();
                self.renderer.render(content, &mut scope);
                *self.view_countdowns.borrow_mut() = Some(scope);
            }
            // already shown to the user by ApiClient; prior content stays
            Err(err) => log::warn!("loading {} failed: {}", ticket.tab, err),
        }
    }

    fn release_view(&self) {
        let released = self.view_countdowns.borrow_mut().take();
        drop(released);
    }
}
