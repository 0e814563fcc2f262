use clap::{Args, Subcommand};

use crate::config::Config;
use crate::share;
use crate::store::DocumentStore;

#[derive(Args)]
pub struct ShareCommand {
    #[command(subcommand)]
    pub command: ShareSubcommand,
}

#[derive(Subcommand)]
pub enum ShareSubcommand {
    /// Print the summary text, ready to paste or pipe to a clipboard tool
    Text,

    /// Print a WhatsApp link carrying the summary
    Url,
}

impl ShareCommand {
    pub fn run(
        &self,
        store: &DocumentStore,
        config: &Config,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let doc = store.load();
        let text = share::share_text(&doc);

        match &self.command {
            ShareSubcommand::Text => {
                println!("{}", text);
            }
            ShareSubcommand::Url => {
                println!(
                    "{}",
                    share::whatsapp_url(&text, config.whatsapp_phone.as_deref())
                );
            }
        }
        Ok(())
    }
}
