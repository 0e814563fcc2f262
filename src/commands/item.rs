use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

use crate::locale::{self, Language};
use crate::models::{quantity, Category};
use crate::store::DocumentStore;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ItemCommand {
    #[command(subcommand)]
    pub command: ItemSubcommand,
}

#[derive(Subcommand)]
pub enum ItemSubcommand {
    /// Record a catalog item's count
    Set {
        /// Category (cold, hot, nines)
        category: Category,

        /// Item name, canonical or translated
        name: String,

        /// Total amount in liters
        #[arg(long)]
        total: Option<f64>,

        /// Number of 2-liter boxes, keeping the loose liters
        #[arg(long)]
        boxes: Option<u32>,

        /// Loose liters (0.5 steps), keeping the boxes
        #[arg(long)]
        liters: Option<f64>,
    },

    /// List catalog items with their counts
    List {
        /// Only this category
        #[arg(long)]
        category: Option<Category>,

        /// Filter by name (canonical or translated)
        #[arg(long, short)]
        search: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Remember a search filter for later listings
    Search {
        /// The filter text; empty clears it
        #[arg(default_value = "")]
        query: String,
    },
}

#[derive(Serialize)]
struct ItemRow<'a> {
    category: Category,
    id: &'a str,
    name: &'a str,
    boxes: u32,
    liters: f64,
    total: f64,
}

/// Find the canonical id for a user-supplied name, which may be the
/// canonical (Hebrew) name or its translation in any supported locale.
fn resolve_item(category: Category, name: &str) -> Result<&'static str, String> {
    let wanted = name.trim();
    for item in category.items() {
        if *item == wanted {
            return Ok(item);
        }
        if locale::display_name(item, Language::En).eq_ignore_ascii_case(wanted) {
            return Ok(item);
        }
    }
    Err(format!("No item '{}' in category '{}'", name, category))
}

impl ItemCommand {
    pub fn run(&self, store: &DocumentStore) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ItemSubcommand::Set {
                category,
                name,
                total,
                boxes,
                liters,
            } => {
                if total.is_none() && boxes.is_none() && liters.is_none() {
                    return Err(
                        "Nothing to set. Provide --total, --boxes or --liters.".into()
                    );
                }

                let item = resolve_item(*category, name)?;
                let doc = store.load();

                let current = doc.quantity(*category, item);
                let next_amount = match (total, boxes, liters) {
                    (Some(total), _, _) => quantity::clamp(*total),
                    (None, Some(b), Some(l)) => quantity::compose(*b, *l),
                    (None, Some(b), None) => quantity::with_boxes(current, *b),
                    (None, None, Some(l)) => quantity::with_remainder(current, *l),
                    (None, None, None) => unreachable!(),
                };

                let doc = doc.with_quantity(*category, item, next_amount);
                store.save(&doc)?;

                let lang = doc.resolved_language();
                let t = lang.strings();
                let (b, l) = quantity::decompose(next_amount);
                println!(
                    "{}: {} {} + {} {} = {} {} {}",
                    locale::display_name(item, lang),
                    b,
                    t.boxes,
                    l,
                    t.liters,
                    next_amount,
                    t.unit,
                    t.saved
                );
                Ok(())
            }

            ItemSubcommand::List {
                category,
                search,
                format,
            } => {
                let doc = store.load();
                let lang = doc.resolved_language();
                let query = search.clone().unwrap_or_else(|| doc.search.clone());

                let categories: Vec<Category> = match category {
                    Some(c) => vec![*c],
                    None => Category::ALL.to_vec(),
                };

                let mut rows: Vec<ItemRow> = Vec::new();
                for cat in categories {
                    for item in cat.items() {
                        if !locale::matches(item, lang, &query) {
                            continue;
                        }
                        let total = doc.quantity(cat, item);
                        let (boxes, liters) = quantity::decompose(total);
                        rows.push(ItemRow {
                            category: cat,
                            id: item,
                            name: locale::display_name(item, lang),
                            boxes,
                            liters,
                            total,
                        });
                    }
                }

                if rows.is_empty() {
                    println!("No items found");
                    return Ok(());
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&rows)?);
                    }
                    OutputFormat::Text => {
                        let t = lang.strings();
                        let mut current_cat = None;
                        for row in &rows {
                            if current_cat != Some(row.category) {
                                current_cat = Some(row.category);
                                println!("{}:", t.category_label(row.category));
                            }
                            println!(
                                "  {} – {} {} + {} {} ({}: {} {})",
                                row.name, row.boxes, t.boxes, row.liters, t.liters,
                                t.total, row.total, t.unit
                            );
                        }
                        println!("\nTotal: {} item(s)", rows.len());
                    }
                }
                Ok(())
            }

            ItemSubcommand::Search { query } => {
                let doc = store.load().with_search(query);
                store.save(&doc)?;
                if query.is_empty() {
                    println!("Search filter cleared");
                } else {
                    println!("Search filter: {}", query);
                }
                Ok(())
            }
        }
    }
}
