use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three fixed lines the inventory is partitioned into.
///
/// Declaration order is the export order and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cold,
    Hot,
    Nines,
}

/// Catalog items per category. Canonical ids are the Hebrew names; they
/// double as the default-locale display names.
const COLD_ITEMS: &[&str] = &[
    "וואפו",
    "בייס שיטאקי",
    "ויני שיטאקי",
    "אמאזו",
    "סונומונו",
    "ויניגרט ווסאבי",
    "סודצ׳י פונזו",
];

const HOT_ITEMS: &[&str] = &[
    "דן מיסו",
    "מייפל קוג׳י",
    "גומה דארה",
    "קצואובושי טסויו",
    "שמן קומבו",
    "פונזו",
    "איולי יוזו קושו",
    "בייס קצבושי",
    "קרמל קצבושי",
    "טארה גרון",
    "טארה בקר",
    "טריאקי",
    "רוטב כרוב",
    "אגדאשי",
    "ניטסוקה",
    "סאקה מירין",
    "נוזל יוזו",
    "קומבו דאשי",
    "צ׳ילי אוממי",
];

const NINES_ITEMS: &[&str] = &[
    "יקיניקו",
    "טונקאצו",
    "חמאת טופנג׳ן",
    "שומר סונומונו",
    "פטריות מוחמצות",
    "צ׳ילי טארה",
    "דאי דאי",
];

impl Category {
    /// All categories in catalog-declaration order.
    pub const ALL: [Category; 3] = [Category::Cold, Category::Hot, Category::Nines];

    /// The fixed catalog for this category, in display order.
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            Category::Cold => COLD_ITEMS,
            Category::Hot => HOT_ITEMS,
            Category::Nines => NINES_ITEMS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Cold => write!(f, "cold"),
            Category::Hot => write!(f, "hot"),
            Category::Nines => write!(f, "nines"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cold" => Ok(Category::Cold),
            "hot" => Ok(Category::Hot),
            "nines" => Ok(Category::Nines),
            _ => Err(format!(
                "Invalid category '{}'. Valid options: cold, hot, nines",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", Category::Cold), "cold");
        assert_eq!(format!("{}", Category::Hot), "hot");
        assert_eq!(format!("{}", Category::Nines), "nines");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!(Category::from_str("cold").unwrap(), Category::Cold);
        assert_eq!(Category::from_str("HOT").unwrap(), Category::Hot);
        assert_eq!(Category::from_str("Nines").unwrap(), Category::Nines);
    }

    #[test]
    fn test_category_from_str_invalid() {
        assert!(Category::from_str("freezer").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(Category::Cold.items().len(), 7);
        assert_eq!(Category::Hot.items().len(), 19);
        assert_eq!(Category::Nines.items().len(), 7);
    }

    #[test]
    fn test_catalog_has_no_duplicates() {
        for cat in Category::ALL {
            let mut seen = std::collections::HashSet::new();
            for item in cat.items() {
                assert!(seen.insert(item), "duplicate catalog item {}", item);
            }
        }
    }

    #[test]
    fn test_category_json_roundtrip() {
        let json = serde_json::to_string(&Category::Nines).unwrap();
        assert_eq!(json, "\"nines\"");
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Category::Nines);
    }
}
