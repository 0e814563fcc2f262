use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use std::io::{self, Write};

use crate::locale::Language;
use crate::models::{quantity, Category, InventoryDocument};
use crate::store::DocumentStore;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct FormCommand {
    #[command(subcommand)]
    pub command: FormSubcommand,
}

#[derive(Subcommand)]
pub enum FormSubcommand {
    /// Show the whole form
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Set the form date
    Date {
        /// Date as YYYY-MM-DD
        date: NaiveDate,
    },

    /// Set the display language
    Lang {
        /// Language key (he, en)
        language: String,
    },

    /// Zero one category's counts, custom rows and note
    Clear {
        /// Category (cold, hot, nines)
        category: Category,
    },

    /// Start over with a fresh form dated today
    Reset {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl FormCommand {
    pub fn run(&self, store: &DocumentStore) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            FormSubcommand::Show { format } => {
                let doc = store.load();
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&doc)?);
                    }
                    OutputFormat::Text => print_form(&doc),
                }
                Ok(())
            }

            FormSubcommand::Date { date } => {
                let doc = store.load().with_date(*date);
                store.save(&doc)?;
                let t = doc.resolved_language().strings();
                println!("{}: {} {}", t.date, doc.date, t.saved);
                Ok(())
            }

            FormSubcommand::Lang { language } => {
                // stored verbatim; unknown keys render as the default locale
                // until a release that understands them comes along
                let doc = store.load().with_language(language);
                store.save(&doc)?;
                match Language::from_key(language) {
                    Some(lang) => println!("Language: {}", lang),
                    None => println!(
                        "Language '{}' is not recognized; using '{}' for display",
                        language,
                        doc.resolved_language()
                    ),
                }
                Ok(())
            }

            FormSubcommand::Clear { category } => {
                let doc = store.load().clear_category(*category);
                store.save(&doc)?;
                println!("{}", doc.resolved_language().strings().cleared);
                Ok(())
            }

            FormSubcommand::Reset { force } => {
                if !force {
                    print!("Reset the whole form? [y/N] ");
                    io::stdout().flush()?;

                    let mut input = String::new();
                    io::stdin().read_line(&mut input)?;

                    if !input.trim().eq_ignore_ascii_case("y") {
                        println!("Reset cancelled.");
                        return Ok(());
                    }
                }

                let doc = InventoryDocument::new();
                store.save(&doc)?;
                println!("{}", doc.resolved_language().strings().reset_done);
                Ok(())
            }
        }
    }
}

fn print_form(doc: &InventoryDocument) {
    let lang = doc.resolved_language();
    let t = lang.strings();

    println!("{}", t.app_title);
    println!("{}: {}", t.date, doc.date);
    println!();

    for cat in Category::ALL {
        println!("{}:", t.category_label(cat));
        for item in cat.items() {
            let total = doc.quantity(cat, item);
            let (boxes, liters) = quantity::decompose(total);
            println!(
                "  {} – {} + {} ({} {})",
                crate::locale::display_name(item, lang),
                boxes,
                liters,
                total,
                t.unit
            );
        }
        for row in &doc.entries(cat).custom_items {
            let name = if row.name.is_empty() { "(unnamed)" } else { &row.name };
            println!("  {} – {} {}", name, row.amount, t.unit);
        }
        let note = &doc.entries(cat).note;
        if !note.is_empty() {
            println!("  [{}]", note);
        }
        println!();
    }

    if !doc.general_note.is_empty() {
        println!("{}: {}", t.general_note, doc.general_note);
    }
}
