//! Tab labels - единственный источник правды для заголовков табов.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Collections,
    Inventory,
    Market,
    Leaderboard,
}

impl Tab {
    /// Порядок табов в шапке
    pub const ALL: [Tab; 4] = [Tab::Collections, Tab::Inventory, Tab::Market, Tab::Leaderboard];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Collections => "collections",
            Tab::Inventory => "inventory",
            Tab::Market => "market",
            Tab::Leaderboard => "leaderboard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Collections => "Collections",
            Tab::Inventory => "Inventory",
            Tab::Market => "Market",
            Tab::Leaderboard => "Leaderboard",
        }
    }

    /// Data behind the tab changes often enough to be re-fetched by the
    /// background poll.
    pub fn is_volatile(self) -> bool {
        matches!(self, Tab::Inventory | Tab::Market)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
