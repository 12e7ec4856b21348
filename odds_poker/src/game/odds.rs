//! Category to "odds against" lookup.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{collections::BTreeMap, sync::LazyLock};

use super::{
    category::HandCategory,
    errors::{OddsTableError, OddsTableResult},
};

static STANDARD: LazyLock<OddsTable> = LazyLock::new(|| OddsTable {
    odds: HandCategory::ALL.map(HandCategory::odds_against),
});

/// Immutable odds lookup with exactly one entry per [`HandCategory`].
///
/// There's no way to build a table with a hole in it: the standard table
/// comes from an exhaustive match, and custom tables are checked for
/// completeness when they're built.
#[derive(Clone, Debug, PartialEq)]
pub struct OddsTable {
    odds: [f64; HandCategory::COUNT],
}

impl OddsTable {
    /// The shared table of historical odds.
    pub fn standard() -> &'static OddsTable {
        &STANDARD
    }

    /// Builds a table from explicit entries. Every category must be present
    /// with a finite, positive value.
    pub fn from_entries(entries: &BTreeMap<HandCategory, f64>) -> OddsTableResult<Self> {
        let mut odds = [0.0; HandCategory::COUNT];
        for category in HandCategory::ALL {
            let value = *entries
                .get(&category)
                .ok_or(OddsTableError::MissingCategory(category))?;
            if !value.is_finite() || value <= 0.0 {
                return Err(OddsTableError::InvalidOdds { category, value });
            }
            odds[category.precedence()] = value;
        }
        Ok(Self { odds })
    }

    /// Parses a JSON object keyed by category name.
    ///
    /// # Errors
    ///
    /// Unknown keys and malformed JSON surface as [`OddsTableError::Json`];
    /// holes and bad values as the matching construction errors.
    pub fn from_json(json: &str) -> OddsTableResult<Self> {
        let entries: BTreeMap<HandCategory, f64> = serde_json::from_str(json)?;
        Self::from_entries(&entries)
    }

    pub fn to_json(&self) -> OddsTableResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries())?)
    }

    pub fn odds_against(&self, category: HandCategory) -> f64 {
        self.odds[category.precedence()]
    }

    pub fn entries(&self) -> BTreeMap<HandCategory, f64> {
        HandCategory::ALL
            .into_iter()
            .map(|category| (category, self.odds_against(category)))
            .collect()
    }
}

impl Default for OddsTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}

impl Serialize for OddsTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.entries().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OddsTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = BTreeMap::<HandCategory, f64>::deserialize(deserializer)?;
        Self::from_entries(&entries).map_err(serde::de::Error::custom)
    }
}
