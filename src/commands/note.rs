use clap::{Args, Subcommand};

use crate::models::Category;
use crate::store::DocumentStore;

#[derive(Args)]
pub struct NoteCommand {
    #[command(subcommand)]
    pub command: NoteSubcommand,
}

#[derive(Subcommand)]
pub enum NoteSubcommand {
    /// Set a note; with --category a line note, otherwise the general note
    Set {
        /// Note text; empty clears the note
        #[arg(default_value = "")]
        text: String,

        /// Category to attach the note to (cold, hot, nines)
        #[arg(long)]
        category: Option<Category>,
    },

    /// Show all notes
    Show,
}

impl NoteCommand {
    pub fn run(&self, store: &DocumentStore) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            NoteSubcommand::Set { text, category } => {
                let doc = store.load();
                let doc = match category {
                    Some(cat) => doc.with_category_note(*cat, text),
                    None => doc.with_general_note(text),
                };
                store.save(&doc)?;
                println!("{}", doc.resolved_language().strings().saved);
                Ok(())
            }

            NoteSubcommand::Show => {
                let doc = store.load();
                let t = doc.resolved_language().strings();
                for cat in Category::ALL {
                    let note = &doc.entries(cat).note;
                    if !note.is_empty() {
                        println!("{}: {}", t.category_label(cat), note);
                    }
                }
                if !doc.general_note.is_empty() {
                    println!("{}: {}", t.general_note, doc.general_note);
                }
                Ok(())
            }
        }
    }
}
