//! Low–high price range of a product's variations.

use core::fmt;

use shelfwise_core::{DomainError, DomainResult};
use shelfwise_products::{Money, Variation};

/// Cheapest and dearest variation price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub low: Money,
    pub high: Money,
}

impl PriceRange {
    /// Fails with [`DomainError::EmptyInput`] when there is nothing to price.
    pub fn of(variations: &[Variation]) -> DomainResult<Self> {
        let mut prices = variations.iter().map(|v| v.price);
        let first = prices
            .next()
            .ok_or_else(|| DomainError::empty_input("no variations to derive a price range from"))?;
        let (low, high) = prices.fold((first, first), |(low, high), p| (low.min(p), high.max(p)));
        Ok(Self { low, high })
    }
}

/// Renders as `" <low> - <high>"`. The leading space is part of the format.
impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {} - {}", self.low, self.high)
    }
}

/// Formatted price range, e.g. `" ₱5.00 - ₱25.00"`.
pub fn price_range(variations: &[Variation]) -> DomainResult<String> {
    Ok(PriceRange::of(variations)?.to_string())
}

/// Like [`price_range`], but "no variations" means "no price to display".
pub fn display_price_range(variations: &[Variation]) -> Option<String> {
    PriceRange::of(variations).ok().map(|range| range.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn priced(pesos: &[u64]) -> Vec<Variation> {
        pesos
            .iter()
            .map(|p| Variation::new("", Money::from_centavos(p * 100), 1))
            .collect()
    }

    #[test]
    fn range_spans_min_and_max() {
        let range = PriceRange::of(&priced(&[10, 25, 5])).unwrap();
        assert_eq!(range.low, Money::from_centavos(500));
        assert_eq!(range.high, Money::from_centavos(2500));
        assert_eq!(
            price_range(&priced(&[10, 25, 5])).unwrap(),
            " \u{20b1}5.00 - \u{20b1}25.00"
        );
    }

    #[test]
    fn single_variation_has_equal_bounds() {
        assert_eq!(
            price_range(&priced(&[1250])).unwrap(),
            " \u{20b1}1,250.00 - \u{20b1}1,250.00"
        );
    }

    #[test]
    fn centavos_are_kept() {
        let variations = vec![
            Variation::new("small", Money::from_centavos(4_999), 2),
            Variation::new("large", Money::from_centavos(129_950), 2),
        ];
        assert_eq!(
            price_range(&variations).unwrap(),
            " \u{20b1}49.99 - \u{20b1}1,299.50"
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = price_range(&[]).unwrap_err();
        assert!(matches!(err, DomainError::EmptyInput(_)));
        assert_eq!(display_price_range(&[]), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every variation price lies within the reported range.
        #[test]
        fn range_bounds_every_price(
            centavos in prop::collection::vec(0u64..10_000_000, 1..20)
        ) {
            let variations: Vec<Variation> = centavos
                .iter()
                .map(|c| Variation::new("", Money::from_centavos(*c), 0))
                .collect();
            let range = PriceRange::of(&variations).unwrap();
            prop_assert!(range.low <= range.high);
            for v in &variations {
                prop_assert!(range.low <= v.price && v.price <= range.high);
            }
            prop_assert_eq!(range.low.centavos(), *centavos.iter().min().unwrap());
            prop_assert_eq!(range.high.centavos(), *centavos.iter().max().unwrap());
        }
    }
}
