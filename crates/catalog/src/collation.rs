//! Locale-aware name ordering.
//!
//! Names compare the way an English-locale reader expects: Unicode collation
//! (CLDR root + `en`) at primary strength, so case and accents are ignored,
//! punctuation and symbols sort before digits and letters, and "Éclair",
//! "eclair" and "ECLAIR" are equal.

use core::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Primary-strength `en` collator for product names.
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Primary);
        let collator = match Collator::try_new(&locale!("en").into(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!(error = %e, "collation data unavailable, ordering names by folded code points");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => base_key(a).cmp(&base_key(b)),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// NFD, combining marks dropped, lowercased.
fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_accents_do_not_matter() {
        let c = NameCollator::new();
        assert_eq!(c.compare("Éclair", "eclair"), Ordering::Equal);
        assert_eq!(c.compare("ECLAIR", "éclair"), Ordering::Equal);
        assert_eq!(c.compare("Piña", "pina"), Ordering::Equal);
    }

    #[test]
    fn letters_order_alphabetically_across_case() {
        let c = NameCollator::new();
        assert_eq!(c.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(c.compare("Zucchini", "apple"), Ordering::Greater);
        assert_eq!(c.compare("Ámbar", "azúcar"), Ordering::Less);
    }

    #[test]
    fn punctuation_and_symbols_sort_before_letters() {
        let c = NameCollator::new();
        assert_eq!(c.compare("(new)", "~tilde"), Ordering::Less);
        assert_eq!(c.compare("~tilde", "apple"), Ordering::Less);
        assert_eq!(c.compare("apple", "Øl"), Ordering::Less);
        assert_eq!(c.compare("Øl", "pizza"), Ordering::Less);
    }

    #[test]
    fn fallback_key_folds_case_and_accents() {
        assert_eq!(base_key("Éclair"), "eclair");
        assert_eq!(base_key("PIÑA"), "pina");
    }
}
