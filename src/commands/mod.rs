mod config_cmd;
mod custom;
mod form;
mod item;
mod note;
mod share_cmd;

pub use config_cmd::ConfigCommand;
pub use custom::CustomCommand;
pub use form::FormCommand;
pub use item::ItemCommand;
pub use note::NoteCommand;
pub use share_cmd::ShareCommand;
