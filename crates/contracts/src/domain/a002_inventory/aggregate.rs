use crate::domain::common::{ExpiryInstant, ItemId};
use serde::{Deserialize, Serialize};

/// Предмет в инвентаре пользователя (с ограниченным сроком жизни)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub rarity: String,
    pub expiry: ExpiryInstant,
}
