use crate::domain::common::ItemId;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Предмет каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSection {
    pub category: String,
    pub items: Vec<CatalogItem>,
}

/// Response of `GET /collections`: a JSON object keyed by category.
///
/// Kept as an ordered list so categories render in the order the backend
/// sent them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogSections(pub Vec<CatalogSection>);

impl CatalogSections {
    pub fn iter(&self) -> impl Iterator<Item = &CatalogSection> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for CatalogSections {
    type Item = CatalogSection;
    type IntoIter = std::vec::IntoIter<CatalogSection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for CatalogSections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for section in &self.0 {
            map.serialize_entry(&section.category, &section.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CatalogSections {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionsVisitor;

        impl<'de> Visitor<'de> for SectionsVisitor {
            type Value = CatalogSections;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category name to catalog items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut sections = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((category, items)) = map.next_entry::<String, Vec<CatalogItem>>()? {
                    sections.push(CatalogSection { category, items });
                }
                Ok(CatalogSections(sections))
            }
        }

        deserializer.deserialize_map(SectionsVisitor)
    }
}
