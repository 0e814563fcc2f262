use clap::{Args, Subcommand};

use crate::models::Category;
use crate::store::DocumentStore;

#[derive(Args)]
pub struct CustomCommand {
    #[command(subcommand)]
    pub command: CustomSubcommand,
}

#[derive(Subcommand)]
pub enum CustomSubcommand {
    /// Add a custom row to a category
    Add {
        /// Category (cold, hot, nines)
        category: Category,

        /// Row name; can be filled in later with `custom set`
        #[arg(long)]
        name: Option<String>,

        /// Amount in liters
        #[arg(long)]
        amount: Option<f64>,
    },

    /// Edit a custom row by its position
    Set {
        /// Category (cold, hot, nines)
        category: Category,

        /// Row position, as shown by `custom list`
        index: usize,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New amount in liters
        #[arg(long)]
        amount: Option<f64>,
    },

    /// Remove a custom row by its position
    Remove {
        /// Category (cold, hot, nines)
        category: Category,

        /// Row position, as shown by `custom list`
        index: usize,
    },

    /// List the custom rows of a category
    List {
        /// Category (cold, hot, nines)
        category: Category,
    },
}

impl CustomCommand {
    pub fn run(&self, store: &DocumentStore) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            CustomSubcommand::Add {
                category,
                name,
                amount,
            } => {
                let doc = store.load();
                let mut doc = doc.add_custom_item(*category);
                let index = doc.entries(*category).custom_items.len() - 1;
                if let Some(name) = name {
                    doc = doc.with_custom_name(*category, index, name);
                }
                if let Some(amount) = amount {
                    doc = doc.with_custom_amount(*category, index, *amount);
                }
                store.save(&doc)?;

                let row = &doc.entries(*category).custom_items[index];
                println!("Added row {} to {}: '{}', {}", index, category, row.name, row.amount);
                Ok(())
            }

            CustomSubcommand::Set {
                category,
                index,
                name,
                amount,
            } => {
                if name.is_none() && amount.is_none() {
                    return Err("Nothing to update. Provide --name or --amount.".into());
                }

                let mut doc = store.load();
                // editing a row that no longer exists is deliberately not an
                // error, matching rapid-edit tolerance in the form
                let known = *index < doc.entries(*category).custom_items.len();
                if let Some(name) = name {
                    doc = doc.with_custom_name(*category, *index, name);
                }
                if let Some(amount) = amount {
                    doc = doc.with_custom_amount(*category, *index, *amount);
                }
                store.save(&doc)?;

                if known {
                    println!("{}", doc.resolved_language().strings().saved);
                } else {
                    println!("Row {} does not exist in {}; nothing changed", index, category);
                }
                Ok(())
            }

            CustomSubcommand::Remove { category, index } => {
                let doc = store.load();
                let known = *index < doc.entries(*category).custom_items.len();
                let doc = doc.remove_custom_item(*category, *index);
                store.save(&doc)?;

                if known {
                    println!("Removed row {} from {}", index, category);
                } else {
                    println!("Row {} does not exist in {}; nothing changed", index, category);
                }
                Ok(())
            }

            CustomSubcommand::List { category } => {
                let doc = store.load();
                let rows = &doc.entries(*category).custom_items;
                if rows.is_empty() {
                    println!("No custom rows in {}", category);
                    return Ok(());
                }
                let t = doc.resolved_language().strings();
                for (i, row) in rows.iter().enumerate() {
                    let name = if row.name.is_empty() { "(unnamed)" } else { &row.name };
                    println!("{:>3}  {} – {} {}", i, name, row.amount, t.unit);
                }
                Ok(())
            }
        }
    }
}
