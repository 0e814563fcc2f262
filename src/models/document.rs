use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::category::Category;
use super::quantity;
use crate::locale::Language;

/// A user-added inventory line. May be left unnamed; unnamed rows never
/// participate in the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomItem {
    pub name: String,
    pub amount: f64,
}

/// Everything recorded for one category: catalog quantities, custom rows
/// and the category note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryEntries {
    pub quantities: HashMap<String, f64>,
    pub custom_items: Vec<CustomItem>,
    pub note: String,
}

/// The whole form: one document, replaced wholesale on every edit and
/// mirrored to disk by the store after each transformation.
///
/// All mutating operations are pure, taking `&self` and returning the next
/// document state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryDocument {
    pub date: NaiveDate,
    pub categories: BTreeMap<Category, CategoryEntries>,
    pub general_note: String,
    /// Stored verbatim, even when unrecognized. Readers apply the fallback
    /// to the default locale; a later release that recognizes the key will
    /// pick it up again without any migration.
    pub language: String,
    pub search: String,
}

impl Default for InventoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryDocument {
    /// A fresh form: today's date, every catalog item at zero, no custom
    /// rows, empty notes, native locale.
    pub fn new() -> Self {
        let mut categories = BTreeMap::new();
        for cat in Category::ALL {
            let mut entries = CategoryEntries::default();
            for item in cat.items() {
                entries.quantities.insert((*item).to_string(), 0.0);
            }
            categories.insert(cat, entries);
        }
        Self {
            date: Local::now().date_naive(),
            categories,
            general_note: String::new(),
            language: Language::default().key().to_string(),
            search: String::new(),
        }
    }

    /// The locale used for rendering and export. Unknown stored keys fall
    /// back to the default without touching the stored value.
    pub fn resolved_language(&self) -> Language {
        Language::from_key(&self.language).unwrap_or_default()
    }

    /// Stored amount for a catalog item, zero if absent.
    pub fn quantity(&self, category: Category, item: &str) -> f64 {
        self.categories
            .get(&category)
            .and_then(|e| e.quantities.get(item))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn entries(&self, category: Category) -> &CategoryEntries {
        // every category is inserted at construction and never removed
        &self.categories[&category]
    }

    pub fn with_date(&self, date: NaiveDate) -> Self {
        let mut next = self.clone();
        next.date = date;
        next
    }

    pub fn with_language(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.language = key.to_string();
        next
    }

    pub fn with_search(&self, query: &str) -> Self {
        let mut next = self.clone();
        next.search = query.to_string();
        next
    }

    pub fn with_general_note(&self, text: &str) -> Self {
        let mut next = self.clone();
        next.general_note = text.to_string();
        next
    }

    pub fn with_category_note(&self, category: Category, text: &str) -> Self {
        let mut next = self.clone();
        next.entries_mut(category).note = text.to_string();
        next
    }

    /// Set a catalog item's amount, clamped to be non-negative and finite.
    pub fn with_quantity(&self, category: Category, item: &str, amount: f64) -> Self {
        let mut next = self.clone();
        next.entries_mut(category)
            .quantities
            .insert(item.to_string(), quantity::clamp(amount));
        next
    }

    /// Append an empty custom row to a category.
    pub fn add_custom_item(&self, category: Category) -> Self {
        let mut next = self.clone();
        next.entries_mut(category).custom_items.push(CustomItem {
            name: String::new(),
            amount: 0.0,
        });
        next
    }

    /// Rename a custom row. An out-of-range index is a silent no-op.
    pub fn with_custom_name(&self, category: Category, index: usize, name: &str) -> Self {
        let mut next = self.clone();
        if let Some(row) = next.entries_mut(category).custom_items.get_mut(index) {
            row.name = name.to_string();
        }
        next
    }

    /// Set a custom row's amount, clamped. An out-of-range index is a
    /// silent no-op.
    pub fn with_custom_amount(&self, category: Category, index: usize, amount: f64) -> Self {
        let mut next = self.clone();
        if let Some(row) = next.entries_mut(category).custom_items.get_mut(index) {
            row.amount = quantity::clamp(amount);
        }
        next
    }

    /// Remove a custom row by index, keeping the order of the remaining
    /// rows. An out-of-range index is a silent no-op.
    pub fn remove_custom_item(&self, category: Category, index: usize) -> Self {
        let mut next = self.clone();
        let rows = &mut next.entries_mut(category).custom_items;
        if index < rows.len() {
            rows.remove(index);
        }
        next
    }

    /// Zero every catalog quantity in one category, drop its custom rows
    /// and clear its note. Other categories and the general note are
    /// untouched.
    pub fn clear_category(&self, category: Category) -> Self {
        let mut next = self.clone();
        let entries = next.entries_mut(category);
        for value in entries.quantities.values_mut() {
            *value = 0.0;
        }
        entries.custom_items.clear();
        entries.note.clear();
        next
    }

    /// Repair a document loaded from disk: make sure every catalog item has
    /// a quantity entry and clamp any stored amount that is negative or
    /// non-finite.
    pub fn normalized(mut self) -> Self {
        for cat in Category::ALL {
            let entries = self.categories.entry(cat).or_default();
            for item in cat.items() {
                entries
                    .quantities
                    .entry((*item).to_string())
                    .or_insert(0.0);
            }
            for value in entries.quantities.values_mut() {
                *value = quantity::clamp(*value);
            }
            for row in &mut entries.custom_items {
                row.amount = quantity::clamp(row.amount);
            }
        }
        self
    }

    fn entries_mut(&mut self, category: Category) -> &mut CategoryEntries {
        self.categories.entry(category).or_default()
    }
}
