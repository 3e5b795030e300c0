use crate::domain::common::{ItemId, MarketId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Лот на маркетплейсе
///
/// Listings are user generated, so a broken one must not take the whole page
/// down: missing or non-numeric prices decode to NaN and null strings to
/// empty. The purchase flow rejects such listings when they are clicked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketListing {
    pub market_id: MarketId,
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub img: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rarity: String,
    /// Price in Telegram Stars
    #[serde(default = "unpriced", deserialize_with = "lenient_price")]
    pub price: f64,
}

impl MarketListing {
    pub fn has_price(&self) -> bool {
        self.price.is_finite()
    }
}

fn unpriced() -> f64 {
    f64::NAN
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let price = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    };
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_prices_decode_as_nan() {
        let listings: Vec<MarketListing> = serde_json::from_str(
            r#"[
                {"market_id": 1, "name": "Doge", "price": 10},
                {"market_id": 2, "name": null, "price": null},
                {"market_id": 3, "name": "Pepe", "price": "cheap"},
                {"market_id": 4, "name": "Wojak"},
                {"market_id": 5, "name": "Cat", "price": "2.5"}
            ]"#,
        )
        .unwrap();

        assert_eq!(listings[0].price, 10.0);
        assert!(listings[1].price.is_nan());
        assert_eq!(listings[1].name, "");
        assert!(listings[2].price.is_nan());
        assert!(!listings[3].has_price());
        assert_eq!(listings[4].price, 2.5);
    }
}
