use crate::domain::a004_leaderboard::RankedEntry;
use crate::hub::Hub;
use crate::layout::tabs::{ContentRenderer, Tab, TabData};
use crate::shared::countdown::{CountdownDisplay, CountdownScope, CountdownState};
use contracts::domain::a001_catalog::CatalogSections;
use contracts::domain::a002_inventory::InventoryItem;
use contracts::domain::a003_market::MarketListing;
use contracts::domain::common::UserId;
use leptos::prelude::*;
use std::rc::Rc;

/// Карточка инвентаря вместе с сигналом своего таймера
#[derive(Debug, Clone)]
pub struct InventoryCard {
    pub item: InventoryItem,
    pub countdown: ArcRwSignal<CountdownState>,
}

#[derive(Debug, Clone)]
pub enum RenderedContent {
    Collections(CatalogSections),
    Inventory(Vec<InventoryCard>),
    Market(Vec<MarketListing>),
    Leaderboard(Vec<RankedEntry>),
}

#[derive(Debug, Clone)]
pub enum ViewState {
    /// До первой успешной верификации
    Idle,
    Loading(Tab),
    Ready(RenderedContent),
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Tab>,
    pub view: RwSignal<ViewState>,
    pub user: RwSignal<Option<UserId>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Tab::default()),
            view: RwSignal::new(ViewState::Idle),
            user: RwSignal::new(None),
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hub shared with the view tree. Local storage keeps the `Rc` off the
/// `Send` bounds of signals and event handlers.
pub type HubHandle = StoredValue<Rc<Hub>, LocalStorage>;

pub fn use_app_context() -> AppGlobalContext {
    expect_context::<AppGlobalContext>()
}

pub fn use_hub() -> HubHandle {
    expect_context::<HubHandle>()
}

struct SignalDisplay(ArcRwSignal<CountdownState>);

impl CountdownDisplay for SignalDisplay {
    fn show(&self, state: CountdownState) {
        self.0.set(state);
    }
}

/// Pushes controller output into [`AppGlobalContext`] signals.
pub struct SignalRenderer {
    ctx: AppGlobalContext,
}

impl SignalRenderer {
    pub fn new(ctx: AppGlobalContext) -> Self {
        Self { ctx }
    }
}

impl ContentRenderer for SignalRenderer {
    fn show_loading(&self, tab: Tab) {
        self.ctx.active.set(tab);
        self.ctx.view.set(ViewState::Loading(tab));
    }

    fn render(&self, content: TabData, countdowns: &mut CountdownScope) {
        let rendered = match content {
            TabData::Collections(sections) => RenderedContent::Collections(sections),
            TabData::Inventory(items) => RenderedContent::Inventory(
                items
                    .into_iter()
                    .map(|item| {
                        let countdown = ArcRwSignal::new(CountdownState::Expired);
                        countdowns.track(
                            item.id.clone(),
                            item.expiry.at(),
                            Rc::new(SignalDisplay(countdown.clone())),
                        );
                        InventoryCard { item, countdown }
                    })
                    .collect(),
            ),
            TabData::Market(listings) => RenderedContent::Market(listings),
            TabData::Leaderboard(entries) => RenderedContent::Leaderboard(entries),
        };
        self.ctx.view.set(ViewState::Ready(rendered));
    }
}
