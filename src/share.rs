//! WhatsApp export: a plain-text summary of the form, non-zero items
//! grouped by category, then one flat shortages section.

use crate::locale;
use crate::models::{Category, InventoryDocument};

/// Render an amount the way it was entered: whole liters without a decimal
/// point, fractional liters as-is.
fn fmt_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Build the shareable text for a document. Pure and deterministic: the
/// same document always yields the same text.
pub fn share_text(doc: &InventoryDocument) -> String {
    let language = doc.resolved_language();
    let t = language.strings();
    let unit = t.unit;

    let mut lines: Vec<String> = Vec::new();
    lines.push(t.daily_title(&doc.date.to_string()));
    lines.push(String::new());

    // Body: only items counted above zero, grouped by category.
    for cat in Category::ALL {
        let entries = doc.entries(cat);
        let non_zero: Vec<&str> = cat
            .items()
            .iter()
            .copied()
            .filter(|item| doc.quantity(cat, item) > 0.0)
            .collect();
        let custom_non_zero: Vec<_> = entries
            .custom_items
            .iter()
            .filter(|row| !row.name.is_empty() && row.amount > 0.0)
            .collect();

        if non_zero.is_empty() && custom_non_zero.is_empty() {
            continue;
        }
        lines.push(format!("{}:", t.category_label(cat)));
        for item in non_zero {
            lines.push(format!(
                "• {} – {} {}",
                locale::display_name(item, language),
                fmt_amount(doc.quantity(cat, item)),
                unit
            ));
        }
        for row in custom_non_zero {
            lines.push(format!("• {} – {} {}", row.name, fmt_amount(row.amount), unit));
        }
        lines.push(String::new());
    }

    // Shortages: everything still at zero, flattened across categories.
    // Named custom rows entered as an explicit 0 land here too; the form
    // cannot tell them apart from rows never counted.
    let mut shortage_lines: Vec<String> = Vec::new();
    for cat in Category::ALL {
        for item in cat.items() {
            if doc.quantity(cat, item) == 0.0 {
                shortage_lines.push(format!("• {}", locale::display_name(item, language)));
            }
        }
        for row in &doc.entries(cat).custom_items {
            if !row.name.is_empty() && row.amount == 0.0 {
                shortage_lines.push(format!("• {}", row.name));
            }
        }
    }
    if !shortage_lines.is_empty() {
        lines.push(format!("{}:", t.shortages));
        lines.extend(shortage_lines);
    }

    lines.join("\n")
}

/// WhatsApp deep link carrying the share text. With no phone configured the
/// link opens the contact picker.
pub fn whatsapp_url(text: &str, phone: Option<&str>) -> String {
    match phone {
        Some(phone) => format!("https://wa.me/{}?text={}", phone, urlencoding::encode(text)),
        None => format!("https://wa.me/?text={}", urlencoding::encode(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn shortages_section(text: &str) -> &str {
        let idx = text
            .find("חוסרים:")
            .or_else(|| text.find("Shortages:"))
            .unwrap_or(text.len());
        &text[idx..]
    }

    #[test]
    fn test_fresh_document_lists_only_shortages() {
        let doc = InventoryDocument::new();
        let text = share_text(&doc);

        assert!(text.contains("מלאי יומי"));
        assert!(text.contains("חוסרים:"));
        // no body sections when everything is zero
        assert!(!text.contains("פס קר:"));
        assert!(!text.contains("פס חם:"));
        assert!(!text.contains("תשיעיות:"));
        // every catalog item is short
        let shortages = shortages_section(&text);
        for cat in Category::ALL {
            for item in cat.items() {
                assert!(shortages.contains(item), "{} missing from shortages", item);
            }
        }
    }

    #[test]
    fn test_counted_item_moves_to_body() {
        let doc = InventoryDocument::new().with_quantity(Category::Cold, "וואפו", 2.5);
        let text = share_text(&doc);

        assert!(text.contains("פס קר:"));
        assert!(text.contains("• וואפו – 2.5 ל׳"));
        assert!(!shortages_section(&text).contains("וואפו"));
    }

    #[test]
    fn test_alternate_locale_uses_translated_names() {
        let doc = InventoryDocument::new()
            .with_quantity(Category::Cold, "וואפו", 2.5)
            .with_language("en");
        let text = share_text(&doc);

        assert!(text.starts_with("Daily Inventory – "));
        assert!(text.contains("Cold Line:"));
        assert!(text.contains("• Wafu – 2.5 L"));
        assert!(text.contains("Shortages:"));
    }

    #[test]
    fn test_unknown_language_renders_with_default() {
        let doc = InventoryDocument::new().with_language("xx");
        let text = share_text(&doc);
        assert!(text.contains("חוסרים:"));
        assert!(!text.contains("Shortages:"));
    }

    #[test]
    fn test_whole_amounts_render_without_decimal() {
        let doc = InventoryDocument::new().with_quantity(Category::Hot, "פונזו", 4.0);
        let text = share_text(&doc);
        assert!(text.contains("• פונזו – 4 ל׳"));
    }

    #[test]
    fn test_unnamed_custom_row_is_excluded_everywhere() {
        let doc = InventoryDocument::new()
            .add_custom_item(Category::Cold)
            .with_custom_amount(Category::Cold, 0, 5.0);
        let text = share_text(&doc);
        assert!(!text.contains("• – "));
        assert!(!text.contains("פס קר:"));
    }

    #[test]
    fn test_named_zero_custom_row_is_a_shortage() {
        let doc = InventoryDocument::new()
            .add_custom_item(Category::Hot)
            .with_custom_name(Category::Hot, 0, "רוטב חדש");
        let text = share_text(&doc);
        assert!(shortages_section(&text).contains("• רוטב חדש"));
    }

    #[test]
    fn test_named_custom_row_with_amount_in_body() {
        let doc = InventoryDocument::new()
            .add_custom_item(Category::Nines)
            .with_custom_name(Category::Nines, 0, "קימצ׳י")
            .with_custom_amount(Category::Nines, 0, 1.5);
        let text = share_text(&doc);
        assert!(text.contains("תשיעיות:"));
        assert!(text.contains("• קימצ׳י – 1.5 ל׳"));
        assert!(!shortages_section(&text).contains("קימצ׳י"));
    }

    #[test]
    fn test_custom_names_resolve_as_themselves_in_any_locale() {
        let doc = InventoryDocument::new()
            .add_custom_item(Category::Cold)
            .with_custom_name(Category::Cold, 0, "מלפפונים כבושים")
            .with_custom_amount(Category::Cold, 0, 2.0)
            .with_language("en");
        let text = share_text(&doc);
        assert!(text.contains("• מלפפונים כבושים – 2 L"));
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let doc = InventoryDocument::new()
            .with_quantity(Category::Cold, "אמאזו", 1.0)
            .add_custom_item(Category::Hot)
            .with_custom_name(Category::Hot, 0, "x");
        assert_eq!(share_text(&doc), share_text(&doc));
    }

    #[test]
    fn test_body_preserves_catalog_order() {
        let doc = InventoryDocument::new()
            .with_quantity(Category::Cold, "סונומונו", 1.0)
            .with_quantity(Category::Cold, "וואפו", 1.0);
        let text = share_text(&doc);
        let wafu = text.find("וואפו").unwrap();
        let sunomono = text.find("סונומונו").unwrap();
        assert!(wafu < sunomono, "catalog order must win over edit order");
    }

    #[test]
    fn test_whatsapp_url_encodes_text() {
        let url = whatsapp_url("a b\nc", None);
        assert_eq!(url, "https://wa.me/?text=a%20b%0Ac");
        let url = whatsapp_url("hi", Some("972501234567"));
        assert_eq!(url, "https://wa.me/972501234567?text=hi");
    }
}
