use core::str::FromStr;
use serde::{Deserialize, Serialize};

use shelfwise_core::DomainError;

/// The single filtering/sorting mode applied to a product collection.
///
/// Each criterion answers one question ("what is about to expire", "what is
/// running low", ...) and fixes both its filter and its ordering. Criteria do
/// not compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Criterion {
    /// Keep everything in input order. Also the fallback for unknown labels.
    #[default]
    Unfiltered,
    Alphabetical,
    LowQuantity,
    DateModified,
    ExpirationDate,
}

impl Criterion {
    /// Criteria a user can pick, in menu order.
    pub const SELECTABLE: [Criterion; 4] = [
        Criterion::Alphabetical,
        Criterion::LowQuantity,
        Criterion::DateModified,
        Criterion::ExpirationDate,
    ];

    /// Canonical label. `Unfiltered` has the empty label.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Unfiltered => "",
            Criterion::Alphabetical => "alphabetical",
            Criterion::LowQuantity => "lowQuantity",
            Criterion::DateModified => "dateModified",
            Criterion::ExpirationDate => "expirationDate",
        }
    }

    /// Permissive parsing: unknown labels fall through to `Unfiltered`.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or(Criterion::Unfiltered)
    }
}

/// Strict parsing: only canonical labels (and the empty label) are accepted.
impl FromStr for Criterion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Criterion::Unfiltered),
            "alphabetical" => Ok(Criterion::Alphabetical),
            "lowQuantity" => Ok(Criterion::LowQuantity),
            "dateModified" => Ok(Criterion::DateModified),
            "expirationDate" => Ok(Criterion::ExpirationDate),
            other => Err(DomainError::invalid_criterion(other)),
        }
    }
}

impl core::fmt::Display for Criterion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Criterion {
    fn from(value: String) -> Self {
        Criterion::from_label(&value)
    }
}

impl From<Criterion> for String {
    fn from(value: Criterion) -> Self {
        value.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_strict_parsing() {
        for c in Criterion::SELECTABLE {
            assert_eq!(c.label().parse::<Criterion>().unwrap(), c);
        }
        assert_eq!("".parse::<Criterion>().unwrap(), Criterion::Unfiltered);
    }

    #[test]
    fn strict_parsing_rejects_unknown_labels() {
        let err = "bogus".parse::<Criterion>().unwrap_err();
        assert_eq!(err, DomainError::InvalidCriterion("bogus".to_string()));
        // Labels are case-sensitive.
        assert!("Alphabetical".parse::<Criterion>().is_err());
    }

    #[test]
    fn permissive_parsing_falls_back_to_unfiltered() {
        assert_eq!(Criterion::from_label("bogus"), Criterion::Unfiltered);
        assert_eq!(Criterion::from_label(""), Criterion::Unfiltered);
        assert_eq!(Criterion::from_label("lowQuantity"), Criterion::LowQuantity);
    }

    #[test]
    fn serde_uses_labels() {
        assert_eq!(
            serde_json::to_string(&Criterion::ExpirationDate).unwrap(),
            "\"expirationDate\""
        );
        let c: Criterion = serde_json::from_str("\"dateModified\"").unwrap();
        assert_eq!(c, Criterion::DateModified);
        let c: Criterion = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(c, Criterion::Unfiltered);
    }
}
