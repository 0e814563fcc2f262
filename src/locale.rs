use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Category;

/// Supported locales. Hebrew is the native locale: canonical item ids are
/// Hebrew names, so it needs no translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    He,
    En,
}

impl Language {
    /// Parse a stored language key. Returns `None` for unrecognized keys so
    /// callers can apply the fallback-to-default rule at read time.
    pub fn from_key(key: &str) -> Option<Language> {
        match key {
            "he" => Some(Language::He),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Language::He => "he",
            Language::En => "en",
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::He => &HE,
            Language::En => &EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_key(&s.to_lowercase())
            .ok_or_else(|| format!("Invalid language '{}'. Valid options: he, en", s))
    }
}

/// All user-facing labels for one locale. Every field is required, so a
/// missing label in either locale fails to compile rather than falling
/// through at runtime.
pub struct Strings {
    pub app_title: &'static str,
    pub date: &'static str,
    pub cold: &'static str,
    pub hot: &'static str,
    pub nines: &'static str,
    pub general_note: &'static str,
    pub shortages: &'static str,
    pub unit: &'static str,
    pub liters: &'static str,
    pub boxes: &'static str,
    pub total: &'static str,
    pub saved: &'static str,
    pub cleared: &'static str,
    pub reset_done: &'static str,
    daily_title_prefix: &'static str,
}

impl Strings {
    /// Title line for the exported text, e.g. `Daily Inventory – 2026-08-30`.
    pub fn daily_title(&self, date: &str) -> String {
        format!("{} – {}", self.daily_title_prefix, date)
    }

    pub fn category_label(&self, category: Category) -> &'static str {
        match category {
            Category::Cold => self.cold,
            Category::Hot => self.hot,
            Category::Nines => self.nines,
        }
    }
}

static HE: Strings = Strings {
    app_title: "טופס מלאי יומי",
    date: "תאריך",
    cold: "פס קר",
    hot: "פס חם",
    nines: "תשיעיות",
    general_note: "הערה כללית",
    shortages: "חוסרים",
    unit: "ל׳",
    liters: "ליטרים",
    boxes: "קופסאות (2 ל׳)",
    total: "סה\"כ",
    saved: "נשמר.",
    cleared: "הקטגוריה אופסה.",
    reset_done: "הטופס אופס.",
    daily_title_prefix: "מלאי יומי",
};

static EN: Strings = Strings {
    app_title: "Daily Inventory Form",
    date: "Date",
    cold: "Cold Line",
    hot: "Hot Line",
    nines: "Nines",
    general_note: "General note",
    shortages: "Shortages",
    unit: "L",
    liters: "Liters",
    boxes: "Boxes (2L)",
    total: "Total",
    saved: "Saved.",
    cleared: "Category cleared.",
    reset_done: "Form reset.",
    daily_title_prefix: "Daily Inventory",
};

/// English display names keyed by canonical (Hebrew) id.
const NAME_MAP_EN: &[(&str, &str)] = &[
    // cold
    ("וואפו", "Wafu"),
    ("בייס שיטאקי", "Shiitake Base"),
    ("ויני שיטאקי", "Shiitake Vinaigrette"),
    ("אמאזו", "Amazu"),
    ("סונומונו", "Sunomono"),
    ("ויניגרט ווסאבי", "Wasabi Vinaigrette"),
    ("סודצ׳י פונזו", "Sudachi Ponzu"),
    // hot
    ("דן מיסו", "Dan Miso"),
    ("מייפל קוג׳י", "Maple Koji"),
    ("גומה דארה", "Goma Dare"),
    ("קצואובושי טסויו", "Katsuobushi Tsuyu"),
    ("שמן קומבו", "Kombu Oil"),
    ("פונזו", "Ponzu"),
    ("איולי יוזו קושו", "Yuzu-Kosho Aioli"),
    ("בייס קצבושי", "Katsuobushi Base"),
    ("קרמל קצבושי", "Katsuobushi Caramel"),
    ("טארה גרון", "Tare – Throat"),
    ("טארה בקר", "Tare – Beef"),
    ("טריאקי", "Teriyaki"),
    ("רוטב כרוב", "Cabbage Sauce"),
    ("אגדאשי", "Agedashi"),
    ("ניטסוקה", "Nitsuke"),
    ("סאקה מירין", "Sake–Mirin"),
    ("נוזל יוזו", "Yuzu Liquid"),
    ("קומבו דאשי", "Kombu Dashi"),
    ("צ׳ילי אוממי", "Umami Chili"),
    // nines
    ("יקיניקו", "Yakiniku"),
    ("טונקאצו", "Tonkatsu"),
    ("חמאת טופנג׳ן", "Topengen Butter"),
    ("שומר סונומונו", "Fennel Sunomono"),
    ("פטריות מוחמצות", "Pickled Mushrooms"),
    ("צ׳ילי טארה", "Chili Tare"),
    ("דאי דאי", "Daidai"),
];

/// Resolve a canonical item id to its display name for a locale.
/// Missing translations fall back to the canonical id itself.
pub fn display_name(canonical: &str, language: Language) -> &str {
    match language {
        Language::He => canonical,
        Language::En => NAME_MAP_EN
            .iter()
            .find(|(he, _)| *he == canonical)
            .map(|(_, en)| *en)
            .unwrap_or(canonical),
    }
}

/// Case-insensitive substring match against the canonical id or its resolved
/// display name. An empty query matches everything.
pub fn matches(canonical: &str, language: Language, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let q = query.to_lowercase();
    canonical.to_lowercase().contains(&q)
        || display_name(canonical, language).to_lowercase().contains(&q)
}
