use chrono::{DateTime, Utc};
use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use shelfwise_core::{ProductId, ValueObject};

use crate::money::Money;
use crate::timestamp;

/// A sellable sub-unit of a product (size, flavor, package) with its own price
/// and stock count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    #[serde(default)]
    pub name: String,
    pub price: Money,
    pub stocks: u64,
}

impl Variation {
    pub fn new(name: impl Into<String>, price: Money, stocks: u64) -> Self {
        Self {
            name: name.into(),
            price,
            stocks,
        }
    }
}

impl ValueObject for Variation {}

/// Product record as supplied by the product store.
///
/// `stocks` is only authoritative while `variations` is empty; once a product
/// carries variations, its quantity is the sum of theirs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(default)]
    stocks: u64,
    #[serde(default, deserialize_with = "deserialize_variations")]
    variations: Vec<Variation>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    expiry_date: DateTime<Utc>,
}

impl Product {
    /// A freshly created product: no stock, no variations, never modified.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        expiry_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            stocks: 0,
            variations: Vec::new(),
            created_at,
            updated_at: None,
            expiry_date,
        }
    }

    pub fn with_stocks(mut self, stocks: u64) -> Self {
        self.stocks = stocks;
        self
    }

    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variations.push(variation);
        self
    }

    pub fn with_variations(mut self, variations: impl IntoIterator<Item = Variation>) -> Self {
        self.variations = variations.into_iter().collect();
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Stamp a modification. `created_at` never changes.
    pub fn record_update(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }

    /// Store document id. Two records with the same id are snapshots of the same entry.
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stocks(&self) -> u64 {
        self.stocks
    }

    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    pub fn has_variations(&self) -> bool {
        !self.variations.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn expiry_date(&self) -> DateTime<Utc> {
        self.expiry_date
    }

    /// Effective "last modified" instant: `updated_at`, falling back to `created_at`.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }
}

/// Anything that is not a list decodes as "no variations". Entries of a real
/// list must decode cleanly.
fn deserialize_variations<'de, D>(deserializer: D) -> Result<Vec<Variation>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(VariationsVisitor)
}

struct VariationsVisitor;

impl<'de> Visitor<'de> for VariationsVisitor {
    type Value = Vec<Variation>;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a list of variations")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(variation) = seq.next_element()? {
            out.push(variation);
        }
        Ok(out)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Vec::new())
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
    }

    fn product(name: &str) -> Product {
        Product::new(
            "prod-1".parse().unwrap(),
            name,
            t0(),
            t0() + Duration::days(90),
        )
    }

    #[test]
    fn new_product_has_no_update_stamp() {
        let p = product("Fresh Milk");
        assert_eq!(p.updated_at(), None);
        assert_eq!(p.last_modified(), p.created_at());
        assert!(!p.has_variations());
        assert_eq!(p.stocks(), 0);
    }

    #[test]
    fn last_modified_prefers_update_stamp() {
        let mut p = product("Fresh Milk");
        let later = t0() + Duration::hours(5);
        p.record_update(later);
        assert_eq!(p.last_modified(), later);
        assert_eq!(p.created_at(), t0());
    }

    #[test]
    fn builders_compose() {
        let p = product("Yogurt")
            .with_stocks(7)
            .with_variation(Variation::new("cup", Money::from_centavos(4500), 3))
            .with_variation(Variation::new("tub", Money::from_centavos(12000), 5));
        assert_eq!(p.stocks(), 7);
        assert_eq!(p.variations().len(), 2);
        assert_eq!(p.variations()[1].name, "tub");
    }

    #[test]
    fn identity_is_the_store_id() {
        let a = product("A").with_stocks(1);
        let b = product("A").with_stocks(2);
        assert_eq!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn non_list_variations_decode_as_empty() {
        for raw in ["null", "\"n/a\"", "{}", "3", "true"] {
            let json = format!(
                r#"{{ "id": "p", "name": "Cheese", "stocks": 4, "variations": {raw},
                     "createdAt": "2024-01-15T09:00:00Z", "expiryDate": "2024-04-15T09:00:00Z" }}"#
            );
            let p: Product = serde_json::from_str(&json).unwrap();
            assert!(p.variations().is_empty(), "variations = {raw}");
            assert_eq!(p.stocks(), 4);
        }
    }

    #[test]
    fn missing_variations_and_update_stamp_default() {
        let p: Product = serde_json::from_str(
            r#"{ "id": "p", "name": "Cheese",
                 "createdAt": "2024-01-15T09:00:00Z", "expiryDate": "2024-04-15T09:00:00Z" }"#,
        )
        .unwrap();
        assert!(p.variations().is_empty());
        assert_eq!(p.updated_at(), None);
        assert_eq!(p.stocks(), 0);
    }

    #[test]
    fn encodes_camel_case_rfc3339() {
        let p = product("Butter").with_updated_at(t0() + Duration::days(1));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["createdAt"], "2024-01-15T09:00:00Z");
        assert_eq!(json["updatedAt"], "2024-01-16T09:00:00Z");
        assert_eq!(json["expiryDate"], "2024-04-14T09:00:00Z");
        assert_eq!(json["variations"], serde_json::json!([]));
    }
}
